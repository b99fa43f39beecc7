//! Prefix-live storage shared by every shifting collection.

use core::mem;

use crate::raw::RawBuf;

/// Fixed-capacity backing store whose first `len` slots are live.
///
/// `Storage` is allocated once by its owning collection and never grows.
/// Structural edits are performed by the collection engine and its
/// placement policies, which uphold `len <= capacity` before calling in.
pub struct Storage<T> {
    buf: RawBuf<T>,
    len: usize,
}

impl<T> Storage<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Storage<T> {
        Storage {
            buf: RawBuf::allocate(capacity),
            len: 0,
        }
    }

    pub(crate) fn degraded() -> Storage<T> {
        Storage {
            buf: RawBuf::degraded(),
            len: 0,
        }
    }

    /// Moves everything out, leaving `self` degraded.
    pub(crate) fn take(&mut self) -> Storage<T> {
        mem::replace(self, Storage::degraded())
    }

    /// Returns `false` once the backing allocation is missing.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.buf.is_valid()
    }

    /// Returns the number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no element is live.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if every slot is live.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len >= self.capacity()
    }

    /// Views the live range.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe { self.buf.slice(0, self.len) }
    }

    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { self.buf.slice_mut(0, self.len) }
    }

    /// Right-shifts `[index, len)` by one and writes `element` at `index`.
    pub(crate) fn insert(&mut self, index: usize, element: T) {
        debug_assert!(index <= self.len);
        debug_assert!(self.len < self.capacity());
        unsafe {
            self.buf.copy(index + 1, index, self.len - index);
            self.buf.write(index, element);
        }
        self.len += 1;
    }

    /// Takes the element at `index` and left-shifts the rest over it.
    pub(crate) fn remove(&mut self, index: usize) -> T {
        debug_assert!(index < self.len);
        unsafe {
            let element = self.buf.read(index);
            self.buf.copy(index, index + 1, self.len - index - 1);
            self.len -= 1;
            element
        }
    }

    /// Drops `[start, end)` and closes the gap with a single shift.
    pub(crate) fn remove_range(&mut self, start: usize, end: usize) -> usize {
        debug_assert!(start <= end && end <= self.len);
        let count = end - start;
        let after = self.len - end;
        // A panicking destructor leaks the suffix instead of dropping it twice.
        self.len = start;
        unsafe {
            self.buf.drop_range(start, count);
            self.buf.copy(start, end, after);
        }
        self.len = start + after;
        count
    }

    /// Single-pass compaction: drops every element for which `keep` is
    /// false and packs the survivors in order. Returns the number dropped.
    pub(crate) fn retain<F>(&mut self, mut keep: F) -> usize
        where F: FnMut(&T) -> bool
    {
        let original = self.len;
        self.len = 0;
        let mut write = 0;
        for read in 0..original {
            unsafe {
                if keep(self.buf.get(read)) {
                    if read != write {
                        self.buf.copy(write, read, 1);
                    }
                    write += 1;
                } else {
                    self.buf.drop_range(read, 1);
                }
            }
        }
        self.len = write;
        original - write
    }

    /// Drops every live element from `len` on. No-op if `len` is not below
    /// the current length.
    pub(crate) fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }
        let tail = self.len - len;
        self.len = len;
        unsafe { self.buf.drop_range(len, tail) }
    }

    /// Drops the live range; the allocation is kept.
    #[inline]
    pub(crate) fn clear(&mut self) {
        self.truncate(0);
    }
}

impl<T> Drop for Storage<T> {
    fn drop(&mut self) {
        self.clear();
    }
}
