//! Stable sorting.
//!
//! All three functions keep elements that compare equal in their original
//! relative order. `sort_by(key, list)` and
//! `sort_with(|a, b| key(a).cmp(&key(b)), list)` always agree.

use std::cmp::Ordering;

use crate::persistent::PersistentList;

/// Sorts ascending by the elements' own ordering.
#[must_use]
pub fn sort<T: Ord + Clone>(list: &PersistentList<T>) -> PersistentList<T> {
    sort_with(Ord::cmp, list)
}

/// Sorts ascending by the key `key_function` derives from each element.
///
/// The key is computed once per element.
///
/// ```rust
/// use listops::list;
/// use listops::persistent::PersistentList;
///
/// let words = PersistentList::from_vec(vec!["pear", "fig", "banana", "kiwi"]);
/// let by_length = list::sort_by(|word| word.len(), &words);
/// assert_eq!(by_length.to_string(), "[fig, pear, kiwi, banana]");
/// ```
#[must_use]
pub fn sort_by<T, K, F>(key_function: F, list: &PersistentList<T>) -> PersistentList<T>
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    let mut elements: Vec<T> = list.iter().cloned().collect();
    elements.sort_by_cached_key(key_function);
    PersistentList::from_vec(elements)
}

/// Sorts with a caller supplied three-way comparison.
///
/// ```rust
/// use listops::list;
///
/// let descending = list::sort_with(|a, b| b.cmp(a), &list::range(1, 4));
/// assert_eq!(descending.to_string(), "[4, 3, 2, 1]");
/// ```
#[must_use]
pub fn sort_with<T, F>(comparator: F, list: &PersistentList<T>) -> PersistentList<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut elements: Vec<T> = list.iter().cloned().collect();
    elements.sort_by(comparator);
    PersistentList::from_vec(elements)
}
