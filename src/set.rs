//! `ArraySet`: unique values in insertion order.

use core::fmt;
use core::ops::Index;
use core::slice;

use crate::collection::Collection;
use crate::duplication::ForbidDuplicates;
use crate::error::InsertError;
use crate::placement::Sequential;

/// A fixed-capacity set of unique values, kept in insertion order.
///
/// Membership checks are linear scans. Element access is read-only so an
/// element can never be edited into a duplicate of another.
///
/// # Examples
///
/// ```
/// use array_collections::{ArraySet, InsertErrorKind};
///
/// let mut set = ArraySet::new(3);
/// set.insert("red").unwrap();
/// set.insert("green").unwrap();
/// assert_eq!(set.insert("red").unwrap_err().kind(), InsertErrorKind::Duplicate);
/// assert!(set.erase(&"red"));
/// assert_eq!(set.as_slice(), &["green"]);
/// ```
pub struct ArraySet<T> {
    inner: Collection<T, Sequential, ForbidDuplicates>,
}

impl<T> ArraySet<T> {
    /// Creates an empty set holding at most `capacity` elements.
    pub fn new(capacity: usize) -> ArraySet<T> {
        ArraySet { inner: Collection::new(capacity) }
    }

    /// Moves the contents out, leaving `self` degraded.
    pub fn take(&mut self) -> ArraySet<T> {
        ArraySet { inner: self.inner.take() }
    }

    /// Returns `false` if the set is degraded.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.inner.is_valid()
    }

    /// Returns the maximum number of elements.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns `true` if the set is full.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.inner.is_full()
    }

    /// Returns the element at `index` in insertion order.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.inner.get(index)
    }

    /// Returns the element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](ArraySet::len).
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        self.inner.get_unchecked(index)
    }

    /// Views the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.inner.as_slice()
    }

    /// Returns an iterator in insertion order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<T> {
        self.inner.iter()
    }

    /// Drops every element, keeping the capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.inner.clear();
    }
}

impl<T: PartialEq> ArraySet<T> {
    /// Adds `item` at the end unless an equal element is present.
    #[inline]
    pub fn insert(&mut self, item: T) -> Result<(), InsertError<T>> {
        self.inner.push(item)
    }

    /// Adds `item` at `index` unless an equal element is present.
    #[inline]
    pub fn insert_at(&mut self, index: usize, item: T) -> Result<(), InsertError<T>> {
        self.inner.insert_at(index, item)
    }

    /// Removes the element equal to `item`. Returns `false` if absent.
    #[inline]
    pub fn erase(&mut self, item: &T) -> bool {
        self.inner.remove_first(item)
    }

    /// Returns the index of `item`.
    #[inline]
    pub fn find(&self, item: &T) -> Option<usize> {
        self.inner.find(item)
    }

    /// Returns `true` if the set contains `item`.
    #[inline]
    pub fn contains(&self, item: &T) -> bool {
        self.inner.contains(item)
    }
}

impl<T> Default for ArraySet<T> {
    fn default() -> Self {
        ArraySet { inner: Collection::default() }
    }
}

impl<T> Index<usize> for ArraySet<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.inner[index]
    }
}

impl<'a, T> IntoIterator for &'a ArraySet<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for ArraySet<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
