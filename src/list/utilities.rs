//! Queries and reductions over a whole list.

use std::iter::{Product, Sum};

use crate::persistent::PersistentList;

/// Returns the number of elements.
#[inline]
pub fn length<T>(list: &PersistentList<T>) -> i64 {
    i64::try_from(list.len()).unwrap_or(i64::MAX)
}

/// Returns the elements in reverse order.
#[inline]
#[must_use]
pub fn reverse<T: Clone>(list: &PersistentList<T>) -> PersistentList<T> {
    list.reverse()
}

/// Returns `true` if some element equals `value`.
///
/// Scans from the front and stops at the first match.
///
/// ```rust
/// use listops::list;
///
/// assert!(list::member(&3, &list::range(1, 5)));
/// assert!(!list::member(&9, &list::range(1, 5)));
/// ```
pub fn member<T: PartialEq>(value: &T, list: &PersistentList<T>) -> bool {
    list.iter().any(|element| element == value)
}

/// Returns `true` if every element satisfies `predicate` (vacuously true
/// for the empty list).
pub fn all<T, P>(predicate: P, list: &PersistentList<T>) -> bool
where
    P: FnMut(&T) -> bool,
{
    list.iter().all(predicate)
}

/// Returns `true` if at least one element satisfies `predicate`.
pub fn any<T, P>(predicate: P, list: &PersistentList<T>) -> bool
where
    P: FnMut(&T) -> bool,
{
    list.iter().any(predicate)
}

/// Returns the largest element, or `None` for the empty list.
pub fn maximum<T: Ord + Clone>(list: &PersistentList<T>) -> Option<T> {
    list.iter().max().cloned()
}

/// Returns the smallest element, or `None` for the empty list.
pub fn minimum<T: Ord + Clone>(list: &PersistentList<T>) -> Option<T> {
    list.iter().min().cloned()
}

/// Adds the elements together; the sum of the empty list is zero.
///
/// ```rust
/// use listops::list;
///
/// assert_eq!(list::sum(&list::range(1, 4)), 10);
/// ```
pub fn sum<T>(list: &PersistentList<T>) -> T
where
    T: for<'a> Sum<&'a T>,
{
    list.iter().sum()
}

/// Multiplies the elements together; the product of the empty list is one.
pub fn product<T>(list: &PersistentList<T>) -> T
where
    T: for<'a> Product<&'a T>,
{
    list.iter().product()
}
