//! Building lists from values.

use std::ops::RangeInclusive;

use crate::diagnostics::trace_event;
use crate::persistent::PersistentList;

/// Creates a list with exactly one element.
///
/// ```rust
/// use listops::list;
///
/// assert_eq!(list::singleton(7).to_string(), "[7]");
/// ```
#[inline]
#[must_use]
pub fn singleton<T>(value: T) -> PersistentList<T> {
    PersistentList::singleton(value)
}

/// Creates a list of `count` copies of `value`.
///
/// A zero or negative `count` yields the empty list.
///
/// ```rust
/// use listops::list;
///
/// assert_eq!(list::repeat(3, 'x').to_string(), "[x, x, x]");
/// assert!(list::repeat(-1, 'x').is_empty());
/// ```
#[must_use]
pub fn repeat<T: Clone>(count: i64, value: T) -> PersistentList<T> {
    let count = usize::try_from(count).unwrap_or(0);
    std::iter::repeat_n(value, count).collect()
}

/// Creates the ascending list of integers from `low` to `high`, both
/// inclusive.
///
/// Reversed bounds give the empty list; the range never counts down.
///
/// ```rust
/// use listops::list;
///
/// assert_eq!(list::range(1, 4).to_string(), "[1, 2, 3, 4]");
/// assert_eq!(list::range(3, 3).to_string(), "[3]");
/// assert!(list::range(5, 3).is_empty());
/// ```
#[must_use]
pub fn range(low: i64, high: i64) -> PersistentList<i64> {
    if low > high {
        trace_event!(low, high, "range bounds reversed, producing an empty list");
        return PersistentList::new();
    }
    (low..=high).collect()
}

/// Prepends `head` to `list`.
#[inline]
#[must_use]
pub fn cons<T>(head: T, list: &PersistentList<T>) -> PersistentList<T> {
    list.cons(head)
}

/// `low..=high` converts with the same semantics as [`range`].
///
/// ```rust
/// use listops::persistent::PersistentList;
///
/// let list: PersistentList<i64> = (1_i64..=3).into();
/// assert_eq!(list.to_string(), "[1, 2, 3]");
/// ```
impl From<RangeInclusive<i64>> for PersistentList<i64> {
    fn from(bounds: RangeInclusive<i64>) -> Self {
        let (low, high) = bounds.into_inner();
        range(low, high)
    }
}
