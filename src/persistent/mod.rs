//! Persistent (immutable) data structures.
//!
//! This module provides [`PersistentList`], the sequence type behind every
//! function in [`crate::list`]. Derived lists share nodes with the list they
//! were built from, so prepending and slicing off a prefix never copy.
//!
//! # Examples
//!
//! ```rust
//! use listops::persistent::PersistentList;
//!
//! let list = PersistentList::new().cons(3).cons(2).cons(1);
//! assert_eq!(list.head(), Some(&1));
//!
//! // Structural sharing: the original list is preserved
//! let extended = list.cons(0);
//! assert_eq!(list.len(), 3);     // Original unchanged
//! assert_eq!(extended.len(), 4); // New list
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod list;

pub use list::PersistentList;
pub use list::PersistentListIntoIterator;
pub use list::PersistentListIterator;

// =============================================================================
// Tests
// =============================================================================
