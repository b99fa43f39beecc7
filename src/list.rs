//! `ArrayList`: a fixed-capacity list in insertion order.

use core::fmt;
use core::ops::{Index, IndexMut};
use core::slice;

use crate::collection::Collection;
use crate::duplication::AllowDuplicates;
use crate::error::InsertError;
use crate::interrupt::InterruptControl;
use crate::placement::Sequential;

/// A fixed-capacity list: stack-style `push`/`pop` at the back plus
/// positional insertion and removal.
///
/// Duplicates are allowed and elements stay in insertion order.
///
/// # Examples
///
/// ```
/// use array_collections::ArrayList;
///
/// let mut list = ArrayList::new(4);
/// list.push('a').unwrap();
/// list.push('c').unwrap();
/// list.insert(1, 'b').unwrap();
/// assert_eq!(list.as_slice(), &['a', 'b', 'c']);
///
/// list[0] = 'z';
/// assert_eq!(list.front(), Some(&'z'));
/// assert_eq!(list.pop(), Some('c'));
/// ```
pub struct ArrayList<T> {
    inner: Collection<T, Sequential, AllowDuplicates>,
}

impl<T> ArrayList<T> {
    /// Creates an empty list holding at most `capacity` elements.
    ///
    /// A zero capacity, or a failed allocation, yields a degraded list.
    pub fn new(capacity: usize) -> ArrayList<T> {
        ArrayList { inner: Collection::new(capacity) }
    }

    /// Moves the contents out, leaving `self` degraded.
    pub fn take(&mut self) -> ArrayList<T> {
        ArrayList { inner: self.inner.take() }
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

    /// Appends `item` at the back.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_collections::{ArrayList, InsertErrorKind};
    ///
    /// let mut list = ArrayList::new(1);
    /// assert!(list.push(1).is_ok());
    /// let err = list.push(2).unwrap_err();
    /// assert_eq!(err.kind(), InsertErrorKind::Full);
    /// assert_eq!(err.element, 2);
    /// ```
    #[inline]
    pub fn push(&mut self, item: T) -> Result<(), InsertError<T>> {
        self.inner.push(item)
    }

    /// Removes the last element and returns it, or `None` if empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.inner.pop()
    }

    /// Inserts `item` at `index`, shifting later elements back by one.
    ///
    /// `index == len` appends. Fails with
    /// [`OutOfBounds`](crate::InsertErrorKind::OutOfBounds) past that.
    #[inline]
    pub fn insert(&mut self, index: usize, item: T) -> Result<(), InsertError<T>> {
        self.inner.insert_at(index, item)
    }

    /// Removes and returns the element at `index`, or `None` if `index` is
    /// out of bounds.
    #[inline]
    pub fn remove(&mut self, index: usize) -> Option<T> {
        self.inner.remove_at(index)
    }

    /// [`push`](ArrayList::push) with interrupts masked through `I`.
    #[inline]
    pub fn push_atomic<I: InterruptControl>(&mut self, item: T) -> Result<(), InsertError<T>> {
        self.inner.push_atomic::<I>(item)
    }

    /// [`pop`](ArrayList::pop) with interrupts masked through `I`.
    #[inline]
    pub fn pop_atomic<I: InterruptControl>(&mut self) -> Option<T> {
        self.inner.pop_atomic::<I>()
    }

    /// Returns the first element.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.inner.first()
    }

    /// Returns the first element mutably.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.inner.as_mut_slice().first_mut()
    }

    /// Returns the last element.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.inner.last()
    }

    /// Returns the last element mutably.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.inner.as_mut_slice().last_mut()
    }

    /// Returns the element at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.inner.get(index)
    }

    /// Returns the element at `index` mutably.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.inner.get_mut(index)
    }

    /// Returns the element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](ArrayList::len).
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        self.inner.get_unchecked(index)
    }

    /// Returns the element at `index` mutably without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](ArrayList::len).
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        self.inner.get_unchecked_mut(index)
    }

    /// Views the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.inner.as_slice()
    }

    /// Views the elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.inner.as_mut_slice()
    }

    /// Returns a front-to-back iterator.
    #[inline]
    pub fn iter(&self) -> slice::Iter<T> {
        self.inner.iter()
    }

    /// Returns a front-to-back iterator that allows modifying each element.
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<T> {
        self.inner.iter_mut()
    }

    /// Drops every element, keeping the capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.inner.clear();
    }
}

impl<T: PartialEq> ArrayList<T> {
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

    /// Removes the first element equal to `item`.
    #[inline]
    pub fn remove_first(&mut self, item: &T) -> bool {
        self.inner.remove_first(item)
    }

    /// Removes every element equal to `item` in one pass, preserving the
    /// order of the rest.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_collections::ArrayList;
    ///
    /// let mut list = ArrayList::new(5);
    /// for x in [1, 2, 1, 3, 1] {
    ///     list.push(x).unwrap();
    /// }
    /// assert!(list.remove_all(&1));
    /// assert_eq!(list.as_slice(), &[2, 3]);
    /// assert!(!list.remove_all(&1));
    /// ```
    #[inline]
    pub fn remove_all(&mut self, item: &T) -> bool {
        self.inner.remove_all(item)
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        ArrayList { inner: Collection::default() }
    }
}

impl<T> Index<usize> for ArrayList<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.inner[index]
    }
}

impl<T> IndexMut<usize> for ArrayList<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.inner[index]
    }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut ArrayList<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InsertErrorKind;
    use crate::interrupt::testing::Recorder;
    use crate::DEFAULT_CAPACITY;

    #[test]
    fn default_capacity() {
        let list: ArrayList<u8> = ArrayList::default();
        assert_eq!(list.capacity(), DEFAULT_CAPACITY);
        assert!(list.is_valid());
    }

    #[test]
    fn stack_order() {
        let mut list = ArrayList::new(3);
        list.push(1).unwrap();
        list.push(2).unwrap();
        list.push(3).unwrap();
        assert_eq!(list.push(4).unwrap_err().kind(), InsertErrorKind::Full);
        assert_eq!(list.pop(), Some(3));
        assert_eq!(list.pop(), Some(2));
        assert_eq!(list.pop(), Some(1));
        assert_eq!(list.pop(), None);
    }

    #[test]
    fn positional_insert_and_remove() {
        let mut list = ArrayList::new(5);
        list.insert(0, 'c').unwrap();
        list.insert(0, 'a').unwrap();
        list.insert(1, 'b').unwrap();
        list.insert(3, 'd').unwrap();
        assert_eq!(list.as_slice(), &['a', 'b', 'c', 'd']);
        assert_eq!(list.insert(5, 'x').unwrap_err().kind(), InsertErrorKind::OutOfBounds);

        assert_eq!(list.remove(1), Some('b'));
        assert_eq!(list.remove(3), None);
        assert_eq!(list.as_slice(), &['a', 'c', 'd']);
    }

    #[test]
    fn front_and_back() {
        let mut list = ArrayList::new(3);
        assert_eq!(list.front(), None);
        assert_eq!(list.back_mut(), None);
        list.push(1).unwrap();
        list.push(2).unwrap();
        *list.front_mut().unwrap() = 10;
        *list.back_mut().unwrap() = 20;
        assert_eq!(list.front(), Some(&10));
        assert_eq!(list.back(), Some(&20));
    }

    #[test]
    fn find_and_remove_first() {
        let mut list = ArrayList::new(4);
        for x in [5, 6, 5] {
            list.push(x).unwrap();
        }
        assert_eq!(list.find(&5), Some(0));
        assert_eq!(list.find(&7), None);
        assert!(list.remove_first(&5));
        assert_eq!(list.as_slice(), &[6, 5]);
        assert!(list.contains(&5));
        assert!(!list.remove_first(&7));
    }

    #[test]
    fn mutable_iteration() {
        let mut list = ArrayList::new(3);
        for x in [1, 2, 3] {
            list.push(x).unwrap();
        }
        for x in &mut list {
            *x += 1;
        }
        list[2] = 0;
        let sum: i32 = list.iter().sum();
        assert_eq!(sum, 5);
    }

    #[test]
    fn owned_elements_are_dropped() {
        let mut list = ArrayList::new(3);
        list.push(String::from("a")).unwrap();
        list.push(String::from("b")).unwrap();
        assert_eq!(list.remove(0).as_deref(), Some("a"));
        list.clear();
        assert!(list.is_empty());
        list.push(String::from("c")).unwrap();
        assert_eq!(list.as_slice(), &[String::from("c")]);
    }

    #[test]
    fn degraded_list() {
        let mut list = ArrayList::new(0);
        assert!(!list.is_valid());
        assert_eq!(list.push(1).unwrap_err().kind(), InsertErrorKind::Degraded);
        assert_eq!(list.insert(0, 1).unwrap_err().kind(), InsertErrorKind::Degraded);
        assert_eq!(list.pop(), None);
    }

    #[test]
    fn atomic_push_pop() {
        Recorder::reset(true);
        let mut list = ArrayList::new(2);
        list.push_atomic::<Recorder>(1).unwrap();
        assert_eq!(list.pop_atomic::<Recorder>(), Some(1));
        assert!(Recorder::enabled());
        assert_eq!(Recorder::calls().len(), 4);
    }
}
