//! Persistent (immutable) singly-linked list.
//!
//! [`PersistentList`] is the sequence type every function in
//! [`crate::list`] consumes and produces. It is a cons-list whose nodes are
//! shared between versions, so prepending and taking the tail never copy.
//!
//! | Operation     | Complexity |
//! |---------------|------------|
//! | `cons`        | O(1)       |
//! | `head`/`tail` | O(1)       |
//! | `len`         | O(1)       |
//! | `get`         | O(n)       |
//! | `append`      | O(n)       |
//! | `reverse`     | O(n)       |
//!
//! # Examples
//!
//! ```rust
//! use listops::persistent::PersistentList;
//!
//! let list = PersistentList::new().cons(3).cons(2).cons(1);
//! assert_eq!(list.head(), Some(&1));
//!
//! // The original list survives every derived version.
//! let extended = list.cons(0);
//! assert_eq!(list.len(), 3);
//! assert_eq!(extended.len(), 4);
//! ```
//!
//! # Structural Sharing
//!
//! ```text
//! list1: 1 -> 2 -> 3 -> nil
//! list2 = list1.cons(0): 0 -> [1 -> 2 -> 3 -> nil]  // shares [1, 2, 3] with list1
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::ops::Add;

use super::ReferenceCounter;

struct Node<T> {
    element: T,
    next: Option<ReferenceCounter<Self>>,
}

// Unlinks uniquely owned successors one at a time so that dropping a long
// chain does not recurse once per node.
impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(node) = next {
            match ReferenceCounter::try_unwrap(node) {
                Ok(mut owned) => next = owned.next.take(),
                Err(_) => break,
            }
        }
    }
}

/// A persistent (immutable) singly-linked list.
///
/// Every operation returns a new list; the receiver is never modified.
/// Cloning is O(1) and shares all nodes.
///
/// # Examples
///
/// ```rust
/// use listops::persistent::PersistentList;
///
/// let list: PersistentList<i32> = (1..=3).collect();
/// assert_eq!(list.to_string(), "[1, 2, 3]");
/// ```
pub struct PersistentList<T> {
    head: Option<ReferenceCounter<Node<T>>>,
    /// Cached so that `len` is O(1).
    length: usize,
}

impl<T> Clone for PersistentList<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            length: self.length,
        }
    }
}

impl<T> PersistentList<T> {
    /// Creates a new empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listops::persistent::PersistentList;
    ///
    /// let list: PersistentList<i32> = PersistentList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            head: None,
            length: 0,
        }
    }

    /// Creates a list containing a single element.
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self::new().cons(element)
    }

    /// Builds a list that keeps the order of `elements`.
    ///
    /// Elements are popped off the back of the `Vec` and linked in front of
    /// the already built suffix, so no intermediate reversal is needed.
    #[must_use]
    pub fn from_vec(mut elements: Vec<T>) -> Self {
        let length = elements.len();
        let mut head: Option<ReferenceCounter<Node<T>>> = None;
        while let Some(element) = elements.pop() {
            head = Some(ReferenceCounter::new(Node {
                element,
                next: head,
            }));
        }
        Self { head, length }
    }

    /// Prepends an element, sharing the whole receiver as the new tail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listops::persistent::PersistentList;
    ///
    /// let list = PersistentList::new().cons(3).cons(2).cons(1);
    /// assert_eq!(list.head(), Some(&1));
    /// assert_eq!(list.len(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub fn cons(&self, element: T) -> Self {
        Self {
            head: Some(ReferenceCounter::new(Node {
                element,
                next: self.head.clone(),
            })),
            length: self.length + 1,
        }
    }

    /// Returns a reference to the first element, or `None` when empty.
    #[inline]
    #[must_use]
    pub fn head(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.element)
    }

    /// Returns the list without its first element.
    ///
    /// The tail of an empty list is the empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listops::persistent::PersistentList;
    ///
    /// let list = PersistentList::new().cons(3).cons(2).cons(1);
    /// assert_eq!(list.tail().head(), Some(&2));
    /// assert!(PersistentList::<i32>::new().tail().is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn tail(&self) -> Self {
        self.uncons().map_or_else(Self::new, |(_, tail)| tail)
    }

    /// Splits a non-empty list into its head and tail.
    #[inline]
    #[must_use]
    pub fn uncons(&self) -> Option<(&T, Self)> {
        self.head.as_ref().map(|node| {
            let tail = Self {
                head: node.next.clone(),
                length: self.length - 1,
            };
            (&node.element, tail)
        })
    }

    /// Returns a reference to the element at `index`, or `None` when the
    /// index is out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the list contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns a front-to-back iterator over references to the elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listops::persistent::PersistentList;
    ///
    /// let list = PersistentList::new().cons(3).cons(2).cons(1);
    /// let collected: Vec<&i32> = list.iter().collect();
    /// assert_eq!(collected, vec![&1, &2, &3]);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> PersistentListIterator<'_, T> {
        PersistentListIterator {
            current: self.head.as_deref(),
            remaining: self.length,
        }
    }

    /// Returns `true` if the two lists share their first node.
    ///
    /// Equal contents do not imply sharing; this only observes structure.
    #[must_use]
    pub fn shares_structure_with(&self, other: &Self) -> bool {
        match (&self.head, &other.head) {
            (Some(left), Some(right)) => ReferenceCounter::ptr_eq(left, right),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: Clone> PersistentList<T> {
    /// Creates a list from a slice, keeping its order.
    #[must_use]
    pub fn from_slice(slice: &[T]) -> Self {
        let mut head: Option<ReferenceCounter<Node<T>>> = None;
        for element in slice.iter().rev() {
            head = Some(ReferenceCounter::new(Node {
                element: element.clone(),
                next: head,
            }));
        }
        Self {
            head,
            length: slice.len(),
        }
    }

    /// Returns this list followed by `other`.
    ///
    /// Only the receiver's nodes are copied; `other` becomes the shared
    /// suffix of the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listops::persistent::PersistentList;
    ///
    /// let left: PersistentList<i32> = (1..=2).collect();
    /// let right: PersistentList<i32> = (3..=4).collect();
    /// let combined = left.append(&right);
    /// assert_eq!(combined.to_string(), "[1, 2, 3, 4]");
    /// assert!(combined.drop_first(2).shares_structure_with(&right));
    /// ```
    #[must_use]
    pub fn append(&self, other: &Self) -> Self {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }

        let mut elements: Vec<T> = self.iter().cloned().collect();
        let mut head = other.head.clone();
        while let Some(element) = elements.pop() {
            head = Some(ReferenceCounter::new(Node {
                element,
                next: head,
            }));
        }
        Self {
            head,
            length: self.length + other.length,
        }
    }

    /// Returns the first `count` elements (all of them if `count` exceeds
    /// the length).
    #[must_use]
    pub fn take(&self, count: usize) -> Self {
        if count >= self.length {
            return self.clone();
        }
        self.iter().take(count).cloned().collect()
    }

    /// Returns the list without its first `count` elements.
    ///
    /// The result is a shared suffix of the receiver.
    #[must_use]
    pub fn drop_first(&self, count: usize) -> Self {
        let mut current = self.clone();
        for _ in 0..count.min(self.length) {
            current = current.tail();
        }
        current
    }

    /// Returns every intermediate accumulator of a left fold, seed first.
    ///
    /// The result always holds `self.len() + 1` elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listops::persistent::PersistentList;
    ///
    /// let list: PersistentList<i32> = (1..=4).collect();
    /// let running = list.scan_left(0, |accumulator, element| accumulator + element);
    /// assert_eq!(running.to_string(), "[0, 1, 3, 6, 10]");
    /// ```
    #[must_use]
    pub fn scan_left<B, F>(&self, initial: B, mut function: F) -> PersistentList<B>
    where
        B: Clone,
        F: FnMut(B, &T) -> B,
    {
        let mut results = Vec::with_capacity(self.length + 1);
        let mut accumulator = initial;
        results.push(accumulator.clone());

        for element in self {
            accumulator = function(accumulator, element);
            results.push(accumulator.clone());
        }

        PersistentList::from_vec(results)
    }

    /// Splits the list into the elements satisfying `predicate` and the
    /// rest, in one pass and preserving order on both sides.
    #[must_use]
    pub fn partition<P>(&self, mut predicate: P) -> (Self, Self)
    where
        P: FnMut(&T) -> bool,
    {
        let mut pass = Vec::new();
        let mut fail = Vec::new();

        for element in self {
            if predicate(element) {
                pass.push(element.clone());
            } else {
                fail.push(element.clone());
            }
        }

        (Self::from_vec(pass), Self::from_vec(fail))
    }

    /// Inserts `separator` between every pair of adjacent elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listops::persistent::PersistentList;
    ///
    /// let list: PersistentList<i32> = (1..=3).collect();
    /// assert_eq!(list.intersperse(0).to_string(), "[1, 0, 2, 0, 3]");
    /// ```
    #[must_use]
    pub fn intersperse(&self, separator: T) -> Self {
        let mut iter = self.iter();
        let Some(first) = iter.next() else {
            return Self::new();
        };
        if self.length == 1 {
            return self.clone();
        }

        let mut result = Vec::with_capacity(self.length * 2 - 1);
        result.push(first.clone());
        for element in iter {
            result.push(separator.clone());
            result.push(element.clone());
        }

        Self::from_vec(result)
    }

    /// Returns the elements in reverse order.
    #[must_use]
    pub fn reverse(&self) -> Self {
        self.iter()
            .fold(Self::new(), |reversed, element| reversed.cons(element.clone()))
    }
}

impl<A: Clone, B: Clone> PersistentList<(A, B)> {
    /// Separates a list of pairs into the list of firsts and the list of
    /// seconds.
    #[must_use]
    pub fn unzip(&self) -> (PersistentList<A>, PersistentList<B>) {
        let mut first_elements = Vec::with_capacity(self.length);
        let mut second_elements = Vec::with_capacity(self.length);
        for (first, second) in self {
            first_elements.push(first.clone());
            second_elements.push(second.clone());
        }
        (
            PersistentList::from_vec(first_elements),
            PersistentList::from_vec(second_elements),
        )
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to elements of a [`PersistentList`].
pub struct PersistentListIterator<'a, T> {
    current: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for PersistentListIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = node.next.as_deref();
            self.remaining -= 1;
            &node.element
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for PersistentListIterator<'_, T> {}

/// An owning iterator over elements of a [`PersistentList`].
///
/// Elements are cloned out of the shared nodes.
pub struct PersistentListIntoIterator<T> {
    list: PersistentList<T>,
}

impl<T: Clone> Iterator for PersistentListIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let (head, tail) = self.list.uncons()?;
        let element = head.clone();
        self.list = tail;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.length, Some(self.list.length))
    }
}

impl<T: Clone> ExactSizeIterator for PersistentListIntoIterator<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for PersistentList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for PersistentList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T> From<Vec<T>> for PersistentList<T> {
    #[inline]
    fn from(elements: Vec<T>) -> Self {
        Self::from_vec(elements)
    }
}

impl<T: Clone> IntoIterator for PersistentList<T> {
    type Item = T;
    type IntoIter = PersistentListIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        PersistentListIntoIterator { list: self }
    }
}

impl<'a, T> IntoIterator for &'a PersistentList<T> {
    type Item = &'a T;
    type IntoIter = PersistentListIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The infix append operator.
///
/// ```rust
/// use listops::persistent::PersistentList;
///
/// let left: PersistentList<i32> = (1..=2).collect();
/// let right: PersistentList<i32> = (3..=4).collect();
/// assert_eq!((left + right).to_string(), "[1, 2, 3, 4]");
/// ```
impl<T: Clone> Add for PersistentList<T> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self::Output {
        self.append(&other)
    }
}

impl<T: PartialEq> PartialEq for PersistentList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for PersistentList<T> {}

impl<T: PartialOrd> PartialOrd for PersistentList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for PersistentList<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for PersistentList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for PersistentList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for PersistentList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for PersistentList<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct PersistentListVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for PersistentListVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = PersistentList<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(PersistentList::from_vec(elements))
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for PersistentList<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(PersistentListVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Thread Safety
// =============================================================================

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(PersistentList<i32>: Send, Sync);
#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(PersistentList<String>: Send, Sync);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(PersistentList<i32>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================
