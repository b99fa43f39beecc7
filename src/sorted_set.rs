//! `SortedSet`: unique values kept in comparator order.

use core::fmt;
use core::ops::Index;
use core::slice;

use crate::collection::Collection;
use crate::duplication::ForbidDuplicates;
use crate::error::InsertError;
use crate::order::{Ascending, SortOrder};
use crate::placement::Ordered;

/// A fixed-capacity sorted set.
///
/// A single binary search per insertion finds the slot and detects an
/// equal element at the same time.
///
/// # Examples
///
/// ```
/// use array_collections::SortedSet;
///
/// let mut set: SortedSet<u16> = SortedSet::new(4);
/// set.insert(30).unwrap();
/// set.insert(10).unwrap();
/// assert!(set.insert(30).is_err());
/// assert_eq!(set.as_slice(), &[10, 30]);
/// assert_eq!(set.find(&30), Some(1));
/// ```
pub struct SortedSet<T, O = Ascending> {
    inner: Collection<T, Ordered<O>, ForbidDuplicates>,
}

impl<T, O> SortedSet<T, O> {
    /// Creates an empty set holding at most `capacity` elements.
    pub fn new(capacity: usize) -> SortedSet<T, O> {
        SortedSet { inner: Collection::new(capacity) }
    }

    /// Moves the contents out, leaving `self` degraded.
    pub fn take(&mut self) -> SortedSet<T, O> {
        SortedSet { inner: self.inner.take() }
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

    /// Returns the smallest element under `O`.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.inner.first()
    }

    /// Returns the largest element under `O`.
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
    /// `index` must be less than [`len`](SortedSet::len).
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        self.inner.get_unchecked(index)
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

impl<T: PartialEq, O: SortOrder<T>> SortedSet<T, O> {
    /// Inserts `item` at its sorted position unless an equal element is
    /// present.
    #[inline]
    pub fn insert(&mut self, item: T) -> Result<(), InsertError<T>> {
        self.inner.push(item)
    }

    /// Removes `item`. Returns `false` if absent.
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

impl<T, O> Default for SortedSet<T, O> {
    fn default() -> Self {
        SortedSet { inner: Collection::default() }
    }
}

impl<T, O> Index<usize> for SortedSet<T, O> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.inner[index]
    }
}

impl<'a, T, O> IntoIterator for &'a SortedSet<T, O> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug, O> fmt::Debug for SortedSet<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InsertErrorKind;
    use crate::order::Descending;

    #[test]
    fn any_order_rejects_duplicates() {
        macro_rules! test {
            ($order:ty, $expected:expr) => ({
                let mut set: SortedSet<i32, $order> = SortedSet::new(5);
                for x in [4, 1, 3] {
                    set.insert(x).unwrap();
                }
                let err = set.insert(3).unwrap_err();
                assert_eq!(err.kind(), InsertErrorKind::Duplicate);
                assert_eq!(err.into_element(), 3);
                assert_eq!(set.as_slice(), $expected);
            })
        }

        test!(Ascending, &[1, 3, 4]);
        test!(Descending, &[4, 3, 1]);
    }

    #[test]
    fn erase_keeps_order() {
        let mut set: SortedSet<char> = SortedSet::new(4);
        for c in ['d', 'a', 'c', 'b'] {
            set.insert(c).unwrap();
        }
        assert!(set.erase(&'b'));
        assert!(!set.erase(&'b'));
        assert_eq!(set.as_slice(), &['a', 'c', 'd']);
        assert_eq!(set.front(), Some(&'a'));
        assert_eq!(set.back(), Some(&'d'));
    }

    #[test]
    fn full_before_duplicate() {
        let mut set: SortedSet<i32> = SortedSet::new(1);
        set.insert(1).unwrap();
        assert_eq!(set.insert(1).unwrap_err().kind(), InsertErrorKind::Full);
    }

    #[test]
    fn find_misses() {
        let mut set: SortedSet<i32> = SortedSet::new(3);
        assert_eq!(set.find(&1), None);
        set.insert(2).unwrap();
        assert_eq!(set.find(&1), None);
        assert_eq!(set.find(&3), None);
        assert!(set.contains(&2));
    }
}
