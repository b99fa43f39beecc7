//! `SortedList`: elements kept in comparator order, duplicates allowed.

use core::fmt;
use core::ops::Index;
use core::slice;

use crate::collection::Collection;
use crate::duplication::AllowDuplicates;
use crate::error::InsertError;
use crate::order::{Ascending, SortOrder};
use crate::placement::Ordered;

/// A fixed-capacity list that keeps its elements sorted under `O`.
///
/// Insertion and lookup use binary search; insertion then shifts the tail
/// by one slot. Equal elements sit next to each other, a new one in front
/// of the existing run. There is no positional insertion and no mutable
/// element access, either of which could break the order.
///
/// # Examples
///
/// ```
/// use array_collections::{SortedList, Descending};
///
/// let mut list: SortedList<i32, Descending> = SortedList::new(5);
/// for x in [2, 9, 4, 9] {
///     list.insert(x).unwrap();
/// }
/// assert_eq!(list.as_slice(), &[9, 9, 4, 2]);
///
/// // pop takes the last element in sort order
/// assert_eq!(list.pop(), Some(2));
/// assert_eq!(list.front(), Some(&9));
/// ```
pub struct SortedList<T, O = Ascending> {
    inner: Collection<T, Ordered<O>, AllowDuplicates>,
}

impl<T, O> SortedList<T, O> {
    /// Creates an empty list holding at most `capacity` elements.
    pub fn new(capacity: usize) -> SortedList<T, O> {
        SortedList { inner: Collection::new(capacity) }
    }

    /// Moves the contents out, leaving `self` degraded.
    pub fn take(&mut self) -> SortedList<T, O> {
        SortedList { inner: self.inner.take() }
    }

    /// Returns `false` if the list is degraded.
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

    /// Returns `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns `true` if the list is full.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.inner.is_full()
    }

    /// Returns the first element in sort order.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.inner.first()
    }

    /// Returns the last element in sort order.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.inner.last()
    }

    /// Returns the element at `index` in sort order.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.inner.get(index)
    }

    /// Returns the element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](SortedList::len).
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        self.inner.get_unchecked(index)
    }

    /// Removes and returns the element at `index`.
    #[inline]
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        self.inner.remove_at(index)
    }

    /// Views the elements as a sorted slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.inner.as_slice()
    }

    /// Returns an iterator in sort order.
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

impl<T: PartialEq, O: SortOrder<T>> SortedList<T, O> {
    /// Inserts `item` at its sorted position.
    #[inline]
    pub fn insert(&mut self, item: T) -> Result<(), InsertError<T>> {
        self.inner.push(item)
    }

    /// Removes and returns the last element in sort order.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.inner.pop()
    }

    /// Returns the index of the first element equal to `item`.
    #[inline]
    pub fn find(&self, item: &T) -> Option<usize> {
        self.inner.find(item)
    }

    /// Returns `true` if the list contains `item`.
    #[inline]
    pub fn contains(&self, item: &T) -> bool {
        self.inner.contains(item)
    }

    /// Removes one element equal to `item`.
    #[inline]
    pub fn remove_first(&mut self, item: &T) -> bool {
        self.inner.remove_first(item)
    }

    /// Removes the whole run of elements equal to `item` with a single
    /// shift.
    #[inline]
    pub fn remove_all(&mut self, item: &T) -> bool {
        self.inner.remove_all(item)
    }
}

impl<T, O> Default for SortedList<T, O> {
    fn default() -> Self {
        SortedList { inner: Collection::default() }
    }
}

impl<T, O> Index<usize> for SortedList<T, O> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.inner[index]
    }
}

impl<'a, T, O> IntoIterator for &'a SortedList<T, O> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug, O> fmt::Debug for SortedList<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}
