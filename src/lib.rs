//! # listops
//!
//! List and bitwise operations with the surface of an ML-family core
//! library, built on a persistent singly-linked list.
//!
//! ## Overview
//!
//! - **Persistent List**: [`persistent::PersistentList`], the immutable
//!   sequence type every list operation consumes and produces
//! - **List Operations**: [`list`], free functions such as `map2`, `scanl`,
//!   `partition`, `sort_by` and `range`, with the host library's ordering and
//!   truncation rules
//! - **Bitwise Operations**: [`bitwise`], 32-bit `and`/`or`/`xor`/shifts
//!
//! ## Feature Flags
//!
//! - `persistent`: The persistent list
//! - `list`: List operations (implies `persistent`)
//! - `bitwise`: Bitwise operations
//! - `arc`: Use `Arc` instead of `Rc` so lists are `Send + Sync`
//! - `serde`: Serialize and deserialize lists as sequences
//! - `tracing`: Emit `trace`-level events when an operation silently
//!   truncates or returns an empty list
//! - `full`: Enable all features except `arc`
//!
//! ## Example
//!
//! ```rust
//! use listops::list;
//!
//! let scores = list::range(1, 5);
//! let weights = list::repeat(3, 10_i64);
//! let weighted = list::map2(|score, weight| score * weight, &scores, &weights);
//! assert_eq!(weighted.to_string(), "[10, 20, 30]");
//!
//! let running = list::scanl(|element, total| total + element, 0_i64, &weighted);
//! assert_eq!(running.to_string(), "[0, 10, 30, 60]");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Brings the list type, the [`Partition`](crate::list::Partition) record
/// and the operation modules into scope. The operations themselves stay
/// behind their module path, since names such as `drop` and `map` would
/// shadow the standard prelude.
///
/// # Usage
///
/// ```rust
/// use listops::prelude::*;
///
/// let numbers: PersistentList<i64> = list::range(1, 3);
/// assert_eq!(list::sum(&numbers), 6);
/// ```
pub mod prelude {

    #[cfg(feature = "persistent")]
    pub use crate::persistent::PersistentList;

    #[cfg(feature = "list")]
    pub use crate::list::{self, Partition};

    #[cfg(feature = "bitwise")]
    pub use crate::bitwise;
}

#[cfg(feature = "list")]
mod diagnostics;

#[cfg(feature = "persistent")]
pub mod persistent;

#[cfg(feature = "list")]
pub mod list;

#[cfg(feature = "bitwise")]
pub mod bitwise;
