//! Joining lists together.
//!
//! The positional combinators `map2` through `map5` walk their inputs in
//! lockstep and stop at the end of the shortest one. Unequal lengths are not
//! an error; the surplus elements of the longer inputs are ignored.

use crate::diagnostics::trace_event;
use crate::persistent::PersistentList;

/// Returns `left` followed by `right`. Also available as `left + right`.
#[inline]
#[must_use]
pub fn append<T: Clone>(left: &PersistentList<T>, right: &PersistentList<T>) -> PersistentList<T> {
    left.append(right)
}

/// Flattens a list of lists, keeping their order.
///
/// The last inner list is shared with the result, not copied.
///
/// ```rust
/// use listops::list;
/// use listops::persistent::PersistentList;
///
/// let nested = PersistentList::from_vec(vec![list::range(1, 2), list::range(3, 3), list::range(4, 5)]);
/// assert_eq!(list::concat(&nested).to_string(), "[1, 2, 3, 4, 5]");
/// ```
#[must_use]
pub fn concat<T: Clone>(lists: &PersistentList<PersistentList<T>>) -> PersistentList<T> {
    let inner: Vec<&PersistentList<T>> = lists.iter().collect();
    inner
        .into_iter()
        .rev()
        .fold(PersistentList::new(), |suffix, prefix| prefix.append(&suffix))
}

/// Maps every element to a list and flattens the results.
#[must_use]
pub fn concat_map<T, B, F>(function: F, list: &PersistentList<T>) -> PersistentList<B>
where
    B: Clone,
    F: FnMut(&T) -> PersistentList<B>,
{
    concat(&list.iter().map(function).collect())
}

/// Places `separator` between every pair of adjacent elements.
///
/// ```rust
/// use listops::list;
/// use listops::persistent::PersistentList;
///
/// let words = PersistentList::from_vec(vec!["turtles", "all", "the", "way"]);
/// assert_eq!(list::intersperse("on", &words).len(), 7);
/// assert_eq!(list::intersperse(0, &list::singleton(1)).to_string(), "[1]");
/// ```
#[inline]
#[must_use]
pub fn intersperse<T: Clone>(separator: T, list: &PersistentList<T>) -> PersistentList<T> {
    list.intersperse(separator)
}

fn note_truncation(lengths: &[usize], produced: usize) {
    if lengths.iter().any(|&length| length != produced) {
        trace_event!(
            ?lengths,
            produced,
            "positional combine truncated to the shortest input"
        );
    }
}

macro_rules! define_positional_map {
    (
        $(#[$meta:meta])*
        fn $name:ident($($list:ident: $element:ident),+);
    ) => {
        paste::paste! {
            $(#[$meta])*
            #[must_use]
            pub fn $name<$($element,)+ R, F>(
                mut function: F,
                $($list: &PersistentList<$element>),+
            ) -> PersistentList<R>
            where
                F: FnMut($(&$element),+) -> R,
            {
                $(let mut [<$list _elements>] = $list.iter();)+
                let mut results = Vec::new();
                loop {
                    $(
                        let Some([<$list _element>]) = [<$list _elements>].next() else {
                            break;
                        };
                    )+
                    results.push(function($([<$list _element>]),+));
                }
                note_truncation(&[$($list.len()),+], results.len());
                PersistentList::from_vec(results)
            }
        }
    };
}

define_positional_map! {
    /// Combines two lists element by element.
    ///
    /// The result is as long as the shorter input.
    ///
    /// ```rust
    /// use listops::list;
    /// use listops::persistent::PersistentList;
    ///
    /// let sums = list::map2(|a, b| a + b, &list::range(1, 3), &list::range(10, 100));
    /// assert_eq!(sums.to_string(), "[11, 13, 15]");
    ///
    /// let names = PersistentList::from_vec(vec!["alice", "bob", "chuck"]);
    /// let ages = PersistentList::from_vec(vec![2, 5]);
    /// let pairs = list::map2(|name, age| (*name, *age), &names, &ages);
    /// assert_eq!(pairs.len(), 2);
    /// ```
    fn map2(first: A, second: B);
}

define_positional_map! {
    /// Combines three lists element by element, truncating to the shortest.
    fn map3(first: A, second: B, third: C);
}

define_positional_map! {
    /// Combines four lists element by element, truncating to the shortest.
    fn map4(first: A, second: B, third: C, fourth: D);
}

define_positional_map! {
    /// Combines five lists element by element, truncating to the shortest.
    fn map5(first: A, second: B, third: C, fourth: D, fifth: E);
}
