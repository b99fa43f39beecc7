//! The policy-driven engine behind every shifting collection.

use core::fmt;
use core::marker::PhantomData;
use core::ops::{Index, IndexMut};
use core::slice;

use crate::duplication::{AllowDuplicates, Duplication};
use crate::error::{InsertError, InsertErrorKind};
use crate::interrupt::{CriticalSection, InterruptControl};
use crate::placement::{Placement, Sequential};
use crate::storage::Storage;
use crate::DEFAULT_CAPACITY;

/// Fixed-capacity, array-backed collection parameterized by a placement
/// policy `P` and a duplication policy `D`.
///
/// The backing array is allocated once in [`new`](Collection::new) and
/// never resized. When that allocation fails, or a capacity of 0 is
/// requested, the collection is *degraded*: [`capacity`](Collection::capacity)
/// is 0, [`is_valid`](Collection::is_valid) is `false`, and every mutation
/// fails without trying to allocate again.
///
/// The facades ([`ArrayList`](crate::ArrayList), [`ArraySet`](crate::ArraySet),
/// [`SortedList`](crate::SortedList), [`SortedSet`](crate::SortedSet),
/// [`SortedMap`](crate::SortedMap)) fix the policies and narrow the API;
/// the engine itself is usable directly for other combinations.
///
/// # Examples
///
/// ```
/// use array_collections::{Collection, Ordered, Descending, AllowDuplicates};
///
/// let mut scores: Collection<u32, Ordered<Descending>, AllowDuplicates> = Collection::new(4);
/// scores.push(40).unwrap();
/// scores.push(90).unwrap();
/// scores.push(40).unwrap();
/// assert_eq!(scores.as_slice(), &[90, 40, 40]);
/// assert_eq!(scores.pop(), Some(40));
/// ```
pub struct Collection<T, P, D> {
    storage: Storage<T>,
    policies: PhantomData<fn() -> (P, D)>,
}

impl<T, P, D> Collection<T, P, D> {
    /// Creates an empty collection holding at most `capacity` elements.
    pub fn new(capacity: usize) -> Collection<T, P, D> {
        Collection {
            storage: Storage::with_capacity(capacity),
            policies: PhantomData,
        }
    }

    /// Moves the contents into a new value, leaving `self` degraded
    /// (capacity 0, length 0, no allocation).
    ///
    /// # Examples
    ///
    /// ```
    /// use array_collections::ArrayList;
    ///
    /// let mut a = ArrayList::new(3);
    /// a.push(1).unwrap();
    /// let b = a.take();
    /// assert_eq!(b.as_slice(), &[1]);
    /// assert!(!a.is_valid());
    /// assert!(a.push(2).is_err());
    /// ```
    pub fn take(&mut self) -> Collection<T, P, D> {
        Collection {
            storage: self.storage.take(),
            policies: PhantomData,
        }
    }

    /// Returns `false` if the collection is degraded.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.storage.is_valid()
    }

    /// Returns the maximum number of elements; never changes after
    /// construction.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns `true` if the collection holds no element.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Returns `true` if no further element fits. A degraded collection is
    /// always full.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.storage.is_full()
    }

    /// Views the live elements in storage order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.storage.as_slice()
    }

    /// Returns a front-to-back iterator over the live elements.
    #[inline]
    pub fn iter(&self) -> slice::Iter<T> {
        self.as_slice().iter()
    }

    /// Returns the element at `index`, or `None` past the live range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Returns the element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](Collection::len); anything else
    /// is undefined behavior. Use [`get`](Collection::get) for a checked
    /// access.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        self.as_slice().get_unchecked(index)
    }

    /// Returns the first element in storage order.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the last element in storage order.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Removes and returns the element at `index`, left-shifting the tail.
    ///
    /// Returns `None` if `index` is not below [`len`](Collection::len).
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if index >= self.len() {
            return None;
        }
        Some(self.storage.remove(index))
    }

    /// Drops every live element. The allocation is kept and capacity is
    /// unchanged.
    #[inline]
    pub fn clear(&mut self) {
        self.storage.clear();
    }

    /// Mutable view for wrappers that only touch parts of an element which
    /// equality and ordering never read.
    #[inline]
    pub(crate) fn live_mut(&mut self) -> &mut [T] {
        self.storage.as_mut_slice()
    }
}

impl<T, P: Placement<T>, D: Duplication<T>> Collection<T, P, D> {
    /// Adds `item` where the placement policy puts it.
    ///
    /// Fails if the collection is degraded, full, or the duplication policy
    /// refuses the element; the element is handed back in the error and the
    /// collection is left untouched.
    pub fn push(&mut self, item: T) -> Result<(), InsertError<T>> {
        if !self.is_valid() {
            return Err(InsertError::new(item, InsertErrorKind::Degraded));
        }
        if self.is_full() {
            return Err(InsertError::new(item, InsertErrorKind::Full));
        }

        let index = if P::ORDERED && D::FORBIDS {
            // one binary search answers both where and whether
            let search = P::search(self.as_slice(), &item);
            if search.found {
                return Err(InsertError::new(item, InsertErrorKind::Duplicate));
            }
            search.index
        } else {
            if !D::allows::<P>(self.as_slice(), &item) {
                return Err(InsertError::new(item, InsertErrorKind::Duplicate));
            }
            P::push_index(self.as_slice(), &item)
        };

        self.storage.insert(index, item);
        Ok(())
    }

    /// Removes and returns the element at the placement policy's pop index:
    /// the last appended for sequential placement, the last in sort order
    /// for ordered placement.
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let index = P::pop_index(self.len());
        Some(self.storage.remove(index))
    }

    /// [`push`](Collection::push) inside a [`CriticalSection`].
    ///
    /// Must not be called from an interrupt handler.
    pub fn push_atomic<I: InterruptControl>(&mut self, item: T) -> Result<(), InsertError<T>> {
        let _section = CriticalSection::<I>::enter();
        self.push(item)
    }

    /// [`pop`](Collection::pop) inside a [`CriticalSection`].
    ///
    /// Must not be called from an interrupt handler.
    pub fn pop_atomic<I: InterruptControl>(&mut self) -> Option<T> {
        let _section = CriticalSection::<I>::enter();
        self.pop()
    }
}

impl<T: PartialEq, P: Placement<T>, D: Duplication<T>> Collection<T, P, D> {
    /// Returns the index of the first element equal to `item`.
    #[inline]
    pub fn find(&self, item: &T) -> Option<usize> {
        P::find(self.as_slice(), item)
    }

    /// Like [`find`](Collection::find), but reports absence with the
    /// sentinel [`len`](Collection::len).
    #[inline]
    pub fn position(&self, item: &T) -> usize {
        self.find(item).unwrap_or(self.len())
    }

    /// Returns `true` if an element equal to `item` is live.
    #[inline]
    pub fn contains(&self, item: &T) -> bool {
        self.find(item).is_some()
    }

    /// Removes the first element equal to `item`. Returns `false` if there
    /// is none.
    pub fn remove_first(&mut self, item: &T) -> bool {
        match self.find(item) {
            Some(index) => {
                drop(self.storage.remove(index));
                true
            }
            None => false,
        }
    }

    /// Removes every element equal to `item`. Returns `true` if at least
    /// one was removed.
    pub fn remove_all(&mut self, item: &T) -> bool {
        if self.is_empty() {
            return false;
        }
        P::remove_all(&mut self.storage, item) > 0
    }
}

impl<T, D: Duplication<T>> Collection<T, Sequential, D> {
    /// Inserts `item` at `index`, right-shifting the tail. `index == len`
    /// appends.
    ///
    /// Only available with sequential placement, where an explicit
    /// position cannot break an ordering.
    pub fn insert_at(&mut self, index: usize, item: T) -> Result<(), InsertError<T>> {
        if !self.is_valid() {
            return Err(InsertError::new(item, InsertErrorKind::Degraded));
        }
        if index > self.len() {
            return Err(InsertError::new(item, InsertErrorKind::OutOfBounds));
        }
        if self.is_full() {
            return Err(InsertError::new(item, InsertErrorKind::Full));
        }
        if !D::allows::<Sequential>(self.as_slice(), &item) {
            return Err(InsertError::new(item, InsertErrorKind::Duplicate));
        }
        self.storage.insert(index, item);
        Ok(())
    }
}

impl<T> Collection<T, Sequential, AllowDuplicates> {
    /// Views the live elements mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.storage.as_mut_slice()
    }

    /// Returns a front-to-back iterator over mutable references.
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns the element at `index` mutably, or `None` past the live
    /// range.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Returns the element at `index` mutably without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](Collection::len).
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        self.as_mut_slice().get_unchecked_mut(index)
    }
}

impl<T, P, D> Default for Collection<T, P, D> {
    #[inline]
    fn default() -> Self {
        Collection::new(DEFAULT_CAPACITY)
    }
}

impl<T, P, D> Index<usize> for Collection<T, P, D> {
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

impl<T> IndexMut<usize> for Collection<T, Sequential, AllowDuplicates> {
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

impl<'a, T, P, D> IntoIterator for &'a Collection<T, P, D> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug, P, D> fmt::Debug for Collection<T, P, D> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
