//! Taking lists apart.
//!
//! Counts are signed, mirroring the host integer type: a zero or negative
//! count takes nothing and drops nothing, and a count past the end
//! saturates.

use crate::persistent::PersistentList;

/// The two halves produced by [`partition`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Partition<T> {
    /// Elements that satisfied the predicate, in input order.
    pub trues: PersistentList<T>,
    /// Elements that did not, in input order.
    pub falses: PersistentList<T>,
}

impl<T> From<Partition<T>> for (PersistentList<T>, PersistentList<T>) {
    fn from(partition: Partition<T>) -> Self {
        (partition.trues, partition.falses)
    }
}

/// Returns `true` if the list has no elements.
#[inline]
pub fn is_empty<T>(list: &PersistentList<T>) -> bool {
    list.is_empty()
}

/// Returns the first element, or `None` for the empty list.
#[inline]
pub fn head<T: Clone>(list: &PersistentList<T>) -> Option<T> {
    list.head().cloned()
}

/// Returns everything after the first element, or `None` for the empty
/// list.
///
/// ```rust
/// use listops::list;
///
/// assert_eq!(list::tail(&list::range(1, 3)), Some(list::range(2, 3)));
/// assert_eq!(list::tail(&list::range(1, 0)), None);
/// ```
#[inline]
pub fn tail<T>(list: &PersistentList<T>) -> Option<PersistentList<T>> {
    list.uncons().map(|(_, rest)| rest)
}

fn clamp_count(count: i64) -> usize {
    usize::try_from(count).unwrap_or(if count < 0 { 0 } else { usize::MAX })
}

/// Returns the first `count` elements.
#[must_use]
pub fn take<T: Clone>(count: i64, list: &PersistentList<T>) -> PersistentList<T> {
    list.take(clamp_count(count))
}

/// Returns the list without its first `count` elements, sharing the
/// remaining suffix with the input.
#[must_use]
pub fn drop<T: Clone>(count: i64, list: &PersistentList<T>) -> PersistentList<T> {
    list.drop_first(clamp_count(count))
}

/// Splits the list in one pass into the elements that satisfy `predicate`
/// and those that do not.
///
/// ```rust
/// use listops::list;
///
/// let halves = list::partition(|n| *n < 3, &list::range(0, 5));
/// assert_eq!(halves.trues.to_string(), "[0, 1, 2]");
/// assert_eq!(halves.falses.to_string(), "[3, 4, 5]");
/// ```
#[must_use]
pub fn partition<T, P>(predicate: P, list: &PersistentList<T>) -> Partition<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    let (trues, falses) = list.partition(predicate);
    Partition { trues, falses }
}

/// Splits a list of pairs into the list of first components and the list of
/// second components.
#[must_use]
pub fn unzip<A: Clone, B: Clone>(
    pairs: &PersistentList<(A, B)>,
) -> (PersistentList<A>, PersistentList<B>) {
    pairs.unzip()
}
