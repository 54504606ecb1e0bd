//! Property-based tests for PersistentList.
//!
//! These tests check the structural guarantees every list operation
//! relies on: cached length, sharing between versions, and the algebra of
//! append and reverse.

use listops::persistent::PersistentList;
use proptest::prelude::*;

// =============================================================================
// Strategy for generating PersistentList
// =============================================================================

/// Generates a `PersistentList<i32>` with up to `max_size` elements.
fn persistent_list_strategy(max_size: usize) -> impl Strategy<Value = PersistentList<i32>> {
    prop::collection::vec(any::<i32>(), 0..max_size).prop_map(PersistentList::from_vec)
}

/// Generates a small `PersistentList<i32>` for faster tests.
fn small_list() -> impl Strategy<Value = PersistentList<i32>> {
    persistent_list_strategy(20)
}

proptest! {
    // =========================================================================
    // Basic Properties
    // =========================================================================

    #[test]
    fn prop_len_matches_iter_count(list in small_list()) {
        prop_assert_eq!(list.len(), list.iter().count());
    }

    #[test]
    fn prop_is_empty_matches_len_zero(list in small_list()) {
        prop_assert_eq!(list.is_empty(), list.len() == 0);
    }

    #[test]
    fn prop_from_vec_preserves_order(elements in prop::collection::vec(any::<i32>(), 0..20)) {
        let list = PersistentList::from_vec(elements.clone());
        let collected: Vec<i32> = list.into_iter().collect();
        prop_assert_eq!(collected, elements);
    }

    #[test]
    fn prop_get_agrees_with_iter(list in small_list(), index in 0usize..25) {
        prop_assert_eq!(list.get(index), list.iter().nth(index));
    }

    // =========================================================================
    // Structural Sharing Properties
    // =========================================================================

    #[test]
    fn prop_cons_then_tail_shares_original(list in small_list(), element: i32) {
        let extended = list.cons(element);
        prop_assert_eq!(extended.head(), Some(&element));
        prop_assert!(extended.tail().shares_structure_with(&list));
    }

    #[test]
    fn prop_drop_first_is_shared_suffix(list in small_list(), count in 0usize..25) {
        let mut expected = list.clone();
        for _ in 0..count {
            expected = expected.tail();
        }
        prop_assert!(list.drop_first(count).shares_structure_with(&expected));
    }

    // =========================================================================
    // Append and Reverse Properties
    // =========================================================================

    #[test]
    fn prop_append_associativity(
        list1 in small_list(),
        list2 in small_list(),
        list3 in small_list()
    ) {
        let left = list1.append(&list2).append(&list3);
        let right = list1.append(&list2.append(&list3));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_append_length(list1 in small_list(), list2 in small_list()) {
        prop_assert_eq!(list1.append(&list2).len(), list1.len() + list2.len());
    }

    #[test]
    fn prop_append_empty_identity(list in small_list()) {
        let empty: PersistentList<i32> = PersistentList::new();
        prop_assert_eq!(empty.append(&list), list.clone());
        prop_assert_eq!(list.append(&empty), list);
    }

    #[test]
    fn prop_reverse_reverse_is_identity(list in small_list()) {
        prop_assert_eq!(list.reverse().reverse(), list);
    }

    #[test]
    fn prop_reverse_distributes_over_append(list1 in small_list(), list2 in small_list()) {
        let left = list1.append(&list2).reverse();
        let right = list2.reverse().append(&list1.reverse());
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_take_append_drop_is_identity(list in small_list(), count in 0usize..25) {
        prop_assert_eq!(list.take(count).append(&list.drop_first(count)), list);
    }

    // =========================================================================
    // Ordering Properties
    // =========================================================================

    #[test]
    fn prop_ordering_matches_vec(list1 in small_list(), list2 in small_list()) {
        let vector1: Vec<i32> = list1.iter().copied().collect();
        let vector2: Vec<i32> = list2.iter().copied().collect();
        prop_assert_eq!(list1.cmp(&list2), vector1.cmp(&vector2));
    }
}
