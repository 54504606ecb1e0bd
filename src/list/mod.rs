//! List operations in the style of an ML core `List` module.
//!
//! Every function here is a free function taking the list last, so the
//! call shape matches the host surface (`list::map(f, &xs)`). Nearly all of
//! them forward to a [`PersistentList`] method or a standard iterator
//! adaptor; the few with their own semantics are:
//!
//! - [`range`]: inclusive and ascending, empty when `low > high`
//! - [`map2`] through [`map5`]: positional combine truncating to the
//!   shortest input
//! - [`scanl`]: running left fold, seed first, one element longer than the
//!   input
//! - [`sort_by`] / [`sort_with`]: stable
//! - [`take`] / [`drop`] / [`repeat`]: signed counts, clamped
//!
//! # Sections
//!
//! | Section      | Functions |
//! |--------------|-----------|
//! | Create       | [`singleton`], [`repeat`], [`range`], [`cons`] |
//! | Transform    | [`map`], [`indexed_map`], [`foldl`], [`foldr`], [`filter`], [`filter_map`], [`scanl`] |
//! | Utilities    | [`length`], [`reverse`], [`member`], [`all`], [`any`], [`maximum`], [`minimum`], [`sum`], [`product`] |
//! | Combine      | [`append`], [`concat`], [`concat_map`], [`intersperse`], [`map2`], [`map3`], [`map4`], [`map5`] |
//! | Sort         | [`sort`], [`sort_by`], [`sort_with`] |
//! | Deconstruct  | [`is_empty`], [`head`], [`tail`], [`take`], [`drop`], [`partition`], [`unzip`] |
//!
//! # Examples
//!
//! ```rust
//! use listops::list;
//!
//! let numbers = list::range(1, 6);
//! let evens = list::filter(|n| n % 2 == 0, &numbers);
//! let labelled = list::indexed_map(|index, n| format!("{index}:{n}"), &evens);
//! assert_eq!(labelled.to_string(), "[0:2, 1:4, 2:6]");
//!
//! let split = list::partition(|n| *n > 3, &numbers);
//! assert_eq!(list::length(&split.trues) + list::length(&split.falses), 6);
//! ```
//!
//! [`PersistentList`]: crate::persistent::PersistentList

mod combine;
mod create;
mod deconstruct;
mod sort;
mod transform;
mod utilities;

pub use combine::{append, concat, concat_map, intersperse, map2, map3, map4, map5};
pub use create::{cons, range, repeat, singleton};
pub use deconstruct::{Partition, drop, head, is_empty, partition, tail, take, unzip};
pub use sort::{sort, sort_by, sort_with};
pub use transform::{filter, filter_map, foldl, foldr, indexed_map, map, scanl};
pub use utilities::{all, any, length, maximum, member, minimum, product, reverse, sum};
