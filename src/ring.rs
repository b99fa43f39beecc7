//! `RingBuffer`: a fixed-capacity FIFO over one wrapped allocation.

use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::mem;
use core::ops::{Index, IndexMut};
use core::ptr;
use core::slice;

use crate::behavior::{Behavior, Saturating, Wrapping};
use crate::error::{InsertError, InsertErrorKind};
use crate::interrupt::{CriticalSection, InterruptControl};
use crate::raw::RawBuf;
use crate::utils::{physical, wrap_add, wrap_sub};
use crate::DEFAULT_CAPACITY;

/// A fixed-capacity first-in first-out buffer.
///
/// Elements are pushed at the back and popped from the front. `head` is the
/// slot of the oldest element and `tail` the slot the next push writes; both
/// wrap around the allocation, so neither push nor pop moves any element.
///
/// What happens when pushing into a full buffer is fixed by the behavior
/// `B`:
///
/// - [`Saturating`] (the default) refuses the element.
/// - [`Wrapping`] drops the oldest element to make room.
///
/// # Examples
///
/// ```
/// use array_collections::{RingBuffer, Wrapping};
///
/// let mut samples: RingBuffer<u16, Wrapping> = RingBuffer::new(3);
/// for sample in [1, 2, 3] {
///     assert_eq!(samples.push(sample), Ok(None));
/// }
/// assert_eq!(samples.push(4), Ok(Some(1)));
/// assert_eq!(samples.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4]);
/// assert_eq!(samples.pop(), Some(2));
/// ```
pub struct RingBuffer<T, B: Behavior = Saturating> {
    buf: RawBuf<T>,
    len: usize,
    head: usize,
    tail: usize,
    behavior: PhantomData<B>,
}

impl<T, B: Behavior> RingBuffer<T, B> {
    /// Creates an empty buffer holding at most `capacity` elements.
    ///
    /// A zero capacity, or a failed allocation, yields a degraded buffer:
    /// every push fails and every pop returns `None`.
    pub fn new(capacity: usize) -> RingBuffer<T, B> {
        RingBuffer {
            buf: RawBuf::allocate(capacity),
            len: 0,
            head: 0,
            tail: 0,
            behavior: PhantomData,
        }
    }

    /// Moves the contents into a new buffer, leaving `self` degraded.
    pub fn take(&mut self) -> RingBuffer<T, B> {
        RingBuffer {
            buf: mem::replace(&mut self.buf, RawBuf::degraded()),
            len: mem::replace(&mut self.len, 0),
            head: mem::replace(&mut self.head, 0),
            tail: mem::replace(&mut self.tail, 0),
            behavior: PhantomData,
        }
    }

    /// Returns `false` if the buffer is degraded.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.buf.is_valid()
    }

    /// Returns the maximum number of elements.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the buffer is full. A degraded buffer is always
    /// full.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    #[inline]
    fn push_expecting_space_available(&mut self, element: T) {
        debug_assert!(!self.is_full());
        let tail = self.tail;
        self.tail = wrap_add(self.tail, 1, self.capacity());
        self.len += 1;
        unsafe {
            self.buf.write(tail, element);
        }
    }

    /// Removes the oldest element and returns it, or `None` if the buffer
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_collections::RingBuffer;
    ///
    /// let mut ring: RingBuffer<_> = RingBuffer::new(4);
    /// ring.push(10).unwrap();
    /// ring.push(20).unwrap();
    /// assert_eq!(ring.pop(), Some(10));
    /// assert_eq!(ring.pop(), Some(20));
    /// assert_eq!(ring.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let head = self.head;
        self.head = wrap_add(self.head, 1, self.capacity());
        self.len -= 1;
        unsafe { Some(self.buf.read(head)) }
    }

    /// [`pop`](RingBuffer::pop) with interrupts masked through `I`.
    ///
    /// Must not be called from an interrupt handler.
    pub fn pop_atomic<I: InterruptControl>(&mut self) -> Option<T> {
        let _section = CriticalSection::<I>::enter();
        self.pop()
    }

    /// Returns the element at logical `index`, counted from the oldest.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len {
            let slot = physical(self.head, index, self.capacity());
            unsafe { Some(self.buf.get(slot)) }
        } else {
            None
        }
    }

    /// Returns the element at logical `index` mutably.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len {
            let slot = physical(self.head, index, self.capacity());
            unsafe { Some(self.buf.get_mut(slot)) }
        } else {
            None
        }
    }

    /// Returns the element at logical `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](RingBuffer::len).
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        self.buf.get(physical(self.head, index, self.capacity()))
    }

    /// Returns the element at logical `index` mutably without bounds
    /// checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](RingBuffer::len).
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        let slot = physical(self.head, index, self.capacity());
        self.buf.get_mut(slot)
    }

    /// Returns the oldest element.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns the oldest element mutably.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// Returns the newest element.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        let newest = wrap_sub(self.tail, 1, self.capacity());
        unsafe { Some(self.buf.get(newest)) }
    }

    /// Returns the newest element mutably.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }
        let newest = wrap_sub(self.tail, 1, self.capacity());
        unsafe { Some(self.buf.get_mut(newest)) }
    }

    /// Returns a pair of slices which contain, in order, the contents of the
    /// buffer. The second slice is empty unless the contents wrap around the
    /// end of the allocation.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_collections::RingBuffer;
    ///
    /// let mut ring: RingBuffer<_> = RingBuffer::new(3);
    /// ring.push(1).unwrap();
    /// ring.push(2).unwrap();
    /// ring.pop();
    /// ring.push(3).unwrap();
    /// ring.push(4).unwrap();
    /// assert_eq!(ring.as_slices(), (&[2, 3][..], &[4][..]));
    /// ```
    #[inline]
    pub fn as_slices(&self) -> (&[T], &[T]) {
        unsafe { self.buf.wrapped(self.head, self.len) }
    }

    /// Returns a pair of mutable slices which contain, in order, the
    /// contents of the buffer.
    #[inline]
    pub fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        unsafe { self.buf.wrapped_mut(self.head, self.len) }
    }

    /// Returns a front-to-back iterator.
    #[inline]
    pub fn iter(&self) -> Iter<T> {
        let (older, newer) = self.as_slices();
        Iter {
            older: older.iter(),
            newer: newer.iter(),
        }
    }

    /// Returns a front-to-back iterator that returns mutable references.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<T> {
        let (older, newer) = self.as_mut_slices();
        IterMut {
            older: older.iter_mut(),
            newer: newer.iter_mut(),
        }
    }

    /// Drops every element and rewinds `head` and `tail` to the first slot.
    /// The allocation is kept.
    pub fn clear(&mut self) {
        let len = mem::replace(&mut self.len, 0);
        let head = mem::replace(&mut self.head, 0);
        self.tail = 0;
        unsafe {
            let (older, newer) = self.buf.wrapped_mut(head, len);
            ptr::drop_in_place(older as *mut [T]);
            ptr::drop_in_place(newer as *mut [T]);
        }
    }
}

impl<T> RingBuffer<T, Saturating> {
    /// Appends `item` at the back.
    ///
    /// Fails without touching the buffer if it is full or degraded.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_collections::{InsertErrorKind, RingBuffer};
    ///
    /// let mut ring: RingBuffer<_> = RingBuffer::new(1);
    /// ring.push('a').unwrap();
    /// let err = ring.push('b').unwrap_err();
    /// assert_eq!(err.kind(), InsertErrorKind::Full);
    /// assert_eq!(ring.front(), Some(&'a'));
    /// ```
    pub fn push(&mut self, item: T) -> Result<(), InsertError<T>> {
        if !self.is_valid() {
            return Err(InsertError::new(item, InsertErrorKind::Degraded));
        }
        if self.is_full() {
            return Err(InsertError::new(item, InsertErrorKind::Full));
        }
        self.push_expecting_space_available(item);
        Ok(())
    }

    /// Saturating `push` with interrupts masked through `I`.
    ///
    /// Must not be called from an interrupt handler.
    pub fn push_atomic<I: InterruptControl>(&mut self, item: T) -> Result<(), InsertError<T>> {
        let _section = CriticalSection::<I>::enter();
        self.push(item)
    }
}

impl<T> RingBuffer<T, Wrapping> {
    /// Appends `item` at the back, evicting the oldest element if the buffer
    /// is full. The evicted element is returned.
    ///
    /// Fails only if the buffer is degraded.
    pub fn push(&mut self, item: T) -> Result<Option<T>, InsertError<T>> {
        if !self.is_valid() {
            return Err(InsertError::new(item, InsertErrorKind::Degraded));
        }
        let evicted = if self.is_full() { self.pop() } else { None };
        self.push_expecting_space_available(item);
        Ok(evicted)
    }

    /// Overwriting `push` with interrupts masked through `I`.
    ///
    /// Must not be called from an interrupt handler.
    pub fn push_atomic<I: InterruptControl>(&mut self, item: T) -> Result<Option<T>, InsertError<T>> {
        let _section = CriticalSection::<I>::enter();
        self.push(item)
    }
}

impl<T, B: Behavior> Drop for RingBuffer<T, B> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T, B: Behavior> Default for RingBuffer<T, B> {
    #[inline]
    fn default() -> Self {
        RingBuffer::new(DEFAULT_CAPACITY)
    }
}

impl<T, B: Behavior> Index<usize> for RingBuffer<T, B> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        let len = self.len();
        self.get(index)
            .unwrap_or_else(|| {
                panic!("index out of bounds: the len is {} but the index is {}",
                       len,
                       index)
            })
    }
}

impl<T, B: Behavior> IndexMut<usize> for RingBuffer<T, B> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len();
        self.get_mut(index)
            .unwrap_or_else(|| {
                panic!("index out of bounds: the len is {} but the index is {}",
                       len,
                       index)
            })
    }
}

impl<T: fmt::Debug, B: Behavior> fmt::Debug for RingBuffer<T, B> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl<T, B: Behavior> IntoIterator for RingBuffer<T, B> {
    type Item = T;
    type IntoIter = IntoIter<T, B>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { inner: self }
    }
}

impl<'a, T, B: Behavior> IntoIterator for &'a RingBuffer<T, B> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, B: Behavior> IntoIterator for &'a mut RingBuffer<T, B> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// `RingBuffer` iterator
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
#[derive(Clone)]
pub struct Iter<'a, T: 'a> {
    older: slice::Iter<'a, T>,
    newer: slice::Iter<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.older.next().or_else(|| self.newer.next())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.older.len() + self.newer.len();
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        self.newer.next_back().or_else(|| self.older.next_back())
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

/// `RingBuffer` mutable iterator
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct IterMut<'a, T: 'a> {
    older: slice::IterMut<'a, T>,
    newer: slice::IterMut<'a, T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        match self.older.next() {
            Some(elem) => Some(elem),
            None => self.newer.next(),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.older.len() + self.newer.len();
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut T> {
        match self.newer.next_back() {
            Some(elem) => Some(elem),
            None => self.older.next_back(),
        }
    }
}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {}

impl<'a, T> FusedIterator for IterMut<'a, T> {}

/// By-value `RingBuffer` iterator
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct IntoIter<T, B: Behavior> {
    inner: RingBuffer<T, B>,
}

impl<T, B: Behavior> Iterator for IntoIter<T, B> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.pop()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.inner.len();
        (len, Some(len))
    }
}

impl<T, B: Behavior> ExactSizeIterator for IntoIter<T, B> {}
