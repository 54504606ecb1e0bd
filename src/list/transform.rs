//! Element-wise transformations and folds.
//!
//! Every function walks its input front to back exactly once, except
//! [`foldr`], which visits elements back to front.

use crate::persistent::PersistentList;

/// Applies `function` to every element.
///
/// ```rust
/// use listops::list;
///
/// let doubled = list::map(|element| element * 2, &list::range(1, 3));
/// assert_eq!(doubled.to_string(), "[2, 4, 6]");
/// ```
#[must_use]
pub fn map<T, B, F>(function: F, list: &PersistentList<T>) -> PersistentList<B>
where
    F: FnMut(&T) -> B,
{
    list.iter().map(function).collect()
}

/// Like [`map`], but `function` also receives the zero-based index of the
/// element.
///
/// ```rust
/// use listops::list;
/// use listops::persistent::PersistentList;
///
/// let letters = PersistentList::from_vec(vec!['a', 'b']);
/// let labelled = list::indexed_map(|index, letter| format!("{index}{letter}"), &letters);
/// assert_eq!(labelled.to_string(), "[0a, 1b]");
/// ```
#[must_use]
pub fn indexed_map<T, B, F>(mut function: F, list: &PersistentList<T>) -> PersistentList<B>
where
    F: FnMut(usize, &T) -> B,
{
    list.iter()
        .enumerate()
        .map(|(index, element)| function(index, element))
        .collect()
}

/// Reduces the list from the left; `function` receives the element first
/// and the accumulator second.
///
/// ```rust
/// use listops::list;
/// use listops::persistent::PersistentList;
///
/// let reversed = list::foldl(
///     |element, accumulator: PersistentList<i64>| accumulator.cons(*element),
///     PersistentList::new(),
///     &list::range(1, 3),
/// );
/// assert_eq!(reversed.to_string(), "[3, 2, 1]");
/// ```
pub fn foldl<T, B, F>(mut function: F, initial: B, list: &PersistentList<T>) -> B
where
    F: FnMut(&T, B) -> B,
{
    list.iter()
        .fold(initial, |accumulator, element| function(element, accumulator))
}

/// Reduces the list from the right; `function` receives the element first
/// and the accumulator second.
#[allow(clippy::needless_collect)]
pub fn foldr<T, B, F>(mut function: F, initial: B, list: &PersistentList<T>) -> B
where
    F: FnMut(&T, B) -> B,
{
    // The list only links forward, so buffer the references to walk back.
    let elements: Vec<&T> = list.iter().collect();
    elements
        .into_iter()
        .rev()
        .fold(initial, |accumulator, element| function(element, accumulator))
}

/// Keeps the elements satisfying `predicate`.
#[must_use]
pub fn filter<T, P>(mut predicate: P, list: &PersistentList<T>) -> PersistentList<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    list.iter()
        .filter(|element| predicate(element))
        .cloned()
        .collect()
}

/// Applies `function` to every element and keeps the `Some` results, in
/// order.
///
/// ```rust
/// use listops::list;
/// use listops::persistent::PersistentList;
///
/// let inputs = PersistentList::from_vec(vec!["3", "hi", "12", "-1"]);
/// let numbers = list::filter_map(|text| text.parse::<i32>().ok(), &inputs);
/// assert_eq!(numbers.to_string(), "[3, 12, -1]");
/// ```
#[must_use]
pub fn filter_map<T, B, F>(function: F, list: &PersistentList<T>) -> PersistentList<B>
where
    F: FnMut(&T) -> Option<B>,
{
    list.iter().filter_map(function).collect()
}

/// Returns every partial result of [`foldl`], starting with `initial`.
///
/// The result is one element longer than the input.
///
/// ```rust
/// use listops::list;
///
/// let running = list::scanl(|element, total| total + element, 0_i64, &list::range(1, 4));
/// assert_eq!(running.to_string(), "[0, 1, 3, 6, 10]");
/// ```
#[must_use]
pub fn scanl<T, B, F>(mut function: F, initial: B, list: &PersistentList<T>) -> PersistentList<B>
where
    B: Clone,
    T: Clone,
    F: FnMut(&T, B) -> B,
{
    list.scan_left(initial, |accumulator, element| function(element, accumulator))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn numbers() -> PersistentList<i32> {
        (1..=5).collect()
    }

    #[rstest]
    fn test_map_keeps_length_and_order() {
        let mapped = map(|element| element * 10, &numbers());
        assert_eq!(mapped, PersistentList::from_vec(vec![10, 20, 30, 40, 50]));
    }

    #[rstest]
    fn test_indexed_map_counts_from_zero() {
        let pairs = indexed_map(|index, element| (index, *element), &numbers());
        let indices: Vec<usize> = pairs.iter().map(|(index, _)| *index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
        assert_eq!(pairs.len(), numbers().len());
    }

    #[rstest]
    fn test_indexed_map_on_empty() {
        let empty: PersistentList<i32> = PersistentList::new();
        assert!(indexed_map(|index, _| index, &empty).is_empty());
    }

    #[rstest]
    fn test_foldl_visits_left_to_right() {
        let visited = foldl(
            |element, mut accumulator: Vec<i32>| {
                accumulator.push(*element);
                accumulator
            },
            Vec::new(),
            &numbers(),
        );
        assert_eq!(visited, vec![1, 2, 3, 4, 5]);
    }

    #[rstest]
    fn test_foldr_visits_right_to_left() {
        let visited = foldr(
            |element, mut accumulator: Vec<i32>| {
                accumulator.push(*element);
                accumulator
            },
            Vec::new(),
            &numbers(),
        );
        assert_eq!(visited, vec![5, 4, 3, 2, 1]);
    }

    #[rstest]
    fn test_foldr_with_cons_rebuilds_list() {
        let rebuilt = foldr(
            |element, accumulator: PersistentList<i32>| accumulator.cons(*element),
            PersistentList::new(),
            &numbers(),
        );
        assert_eq!(rebuilt, numbers());
    }

    #[rstest]
    fn test_filter() {
        let odds = filter(|element| element % 2 == 1, &numbers());
        assert_eq!(odds, PersistentList::from_vec(vec![1, 3, 5]));
    }

    #[rstest]
    fn test_filter_map_preserves_relative_order() {
        let halves = filter_map(
            |element| (element % 2 == 0).then_some(element / 2),
            &PersistentList::from_vec(vec![8, 3, 2, 7, 6]),
        );
        assert_eq!(halves, PersistentList::from_vec(vec![4, 1, 3]));
    }

    #[rstest]
    fn test_scanl_seed_only_for_empty_input() {
        let empty: PersistentList<i32> = PersistentList::new();
        let scanned = scanl(|element, total| total + element, 100_i32, &empty);
        assert_eq!(scanned, PersistentList::singleton(100));
    }

    #[rstest]
    fn test_scanl_passes_element_before_accumulator() {
        let scanned = scanl(
            |element: &&str, accumulator: String| format!("{accumulator}{element}"),
            String::new(),
            &PersistentList::from_vec(vec!["a", "b", "c"]),
        );
        let collected: Vec<String> = scanned.into_iter().collect();
        assert_eq!(collected, vec!["", "a", "ab", "abc"]);
    }
}
