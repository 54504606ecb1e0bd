//! Integration tests for sharing lists across threads.
//!
//! With the `arc` feature, lists are `Send + Sync`, so one list can feed
//! list operations running on several threads at once.

#![cfg(feature = "arc")]

use listops::persistent::PersistentList;
use rstest::rstest;
use std::sync::Arc;
use std::thread;

#[rstest]
fn test_list_cross_thread_structural_sharing() {
    let original = Arc::new(PersistentList::new().cons(3).cons(2).cons(1));

    let handles: Vec<_> = (0..4)
        .map(|index| {
            let list_clone = Arc::clone(&original);
            thread::spawn(move || {
                let extended = list_clone.cons(index * 10);
                assert_eq!(extended.head(), Some(&(index * 10)));
                assert_eq!(extended.len(), 4);
                assert!(extended.tail().shares_structure_with(&list_clone));
                extended
            })
        })
        .collect();

    let results: Vec<PersistentList<i32>> = handles
        .into_iter()
        .map(|handle| handle.join().expect("Thread panicked"))
        .collect();

    for (index, list) in (0..).zip(results.iter()) {
        assert_eq!(list.head(), Some(&(index * 10)));
    }

    assert_eq!(original.len(), 3);
    assert_eq!(original.head(), Some(&1));
}

#[cfg(feature = "list")]
#[rstest]
fn test_list_operations_on_shared_input() {
    use listops::list;

    let shared = list::range(1, 1000);

    let handles: Vec<_> = (0..4_i64)
        .map(|offset| {
            let input = shared.clone();
            thread::spawn(move || {
                let shifted = list::map(|element| element + offset, &input);
                list::sum(&shifted)
            })
        })
        .collect();

    let sums: Vec<i64> = handles
        .into_iter()
        .map(|handle| handle.join().expect("Thread panicked"))
        .collect();

    assert_eq!(sums, vec![500_500, 501_500, 502_500, 503_500]);
    assert_eq!(shared.len(), 1000);
}
