//! The single heap allocation behind every collection.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::cmp;
use core::mem::MaybeUninit;
use core::ptr;
use core::slice;

/// Largest slot count any buffer accepts, whatever the element size.
///
/// Keeps `head + offset` index arithmetic on ring buffers from overflowing.
pub(crate) const MAX_CAPACITY: usize = isize::MAX as usize;

/// A fixed number of possibly uninitialized slots.
///
/// `RawBuf` never tracks which slots are live and never drops elements;
/// the owning structure does both. The allocation is released on drop.
pub(crate) struct RawBuf<T> {
    slots: Box<[MaybeUninit<T>]>,
}

impl<T> RawBuf<T> {
    /// Allocates `capacity` slots exactly once.
    ///
    /// A zero capacity, a capacity above [`MAX_CAPACITY`] or a failed
    /// reservation yields the degraded buffer, which has no slots and is
    /// never allocated again.
    pub fn allocate(capacity: usize) -> RawBuf<T> {
        if capacity == 0 {
            #[cfg(feature = "log")]
            log::debug!("zero capacity requested, storage is degraded");
            return RawBuf::degraded();
        }
        // zero-sized slots always reserve, so the bound has to be explicit
        if capacity > MAX_CAPACITY {
            #[cfg(feature = "log")]
            log::warn!("capacity {} exceeds {}, storage is degraded", capacity, MAX_CAPACITY);
            return RawBuf::degraded();
        }

        let mut slots: Vec<MaybeUninit<T>> = Vec::new();
        if slots.try_reserve_exact(capacity).is_err() {
            #[cfg(feature = "log")]
            log::warn!("allocation of {} slots failed, storage is degraded", capacity);
            return RawBuf::degraded();
        }
        // uninitialized slots are valid `MaybeUninit` values
        unsafe { slots.set_len(capacity) };

        RawBuf { slots: slots.into_boxed_slice() }
    }

    #[inline]
    pub fn degraded() -> RawBuf<T> {
        RawBuf { slots: Vec::new().into_boxed_slice() }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        !self.slots.is_empty()
    }

    #[inline]
    fn ptr(&self) -> *const T {
        self.slots.as_ptr() as *const T
    }

    #[inline]
    fn ptr_mut(&mut self) -> *mut T {
        self.slots.as_mut_ptr() as *mut T
    }

    /// Moves the element out of slot `offset`, leaving it logically empty.
    #[inline]
    pub unsafe fn read(&self, offset: usize) -> T {
        debug_assert!(offset < self.capacity());
        ptr::read(self.ptr().add(offset))
    }

    /// Writes into slot `offset` without dropping what it held.
    #[inline]
    pub unsafe fn write(&mut self, offset: usize, element: T) {
        debug_assert!(offset < self.capacity());
        ptr::write(self.ptr_mut().add(offset), element);
    }

    #[inline]
    pub unsafe fn get(&self, offset: usize) -> &T {
        debug_assert!(offset < self.capacity());
        &*self.ptr().add(offset)
    }

    #[inline]
    pub unsafe fn get_mut(&mut self, offset: usize) -> &mut T {
        debug_assert!(offset < self.capacity());
        &mut *self.ptr_mut().add(offset)
    }

    /// Copies a contiguous block of memory len long from src to dst
    #[inline]
    pub unsafe fn copy(&mut self, dst: usize, src: usize, len: usize) {
        debug_assert!(dst + len <= self.capacity(),
                      "cpy dst={} src={} len={} cap={}",
                      dst,
                      src,
                      len,
                      self.capacity());
        debug_assert!(src + len <= self.capacity(),
                      "cpy dst={} src={} len={} cap={}",
                      dst,
                      src,
                      len,
                      self.capacity());
        let base = self.ptr_mut();
        ptr::copy(base.add(src), base.add(dst), len);
    }

    /// Views `len` initialized slots starting at `start`.
    #[inline]
    pub unsafe fn slice(&self, start: usize, len: usize) -> &[T] {
        debug_assert!(start + len <= self.capacity());
        slice::from_raw_parts(self.ptr().add(start), len)
    }

    #[inline]
    pub unsafe fn slice_mut(&mut self, start: usize, len: usize) -> &mut [T] {
        debug_assert!(start + len <= self.capacity());
        slice::from_raw_parts_mut(self.ptr_mut().add(start), len)
    }

    /// Views `len` initialized slots starting at `head` and wrapping past the
    /// end of the buffer, as the part up to the end followed by the part
    /// from the start.
    #[inline]
    pub unsafe fn wrapped(&self, head: usize, len: usize) -> (&[T], &[T]) {
        let (first, second) = self.wrapped_bounds(head, len);
        (self.slice(head, first), self.slice(0, second))
    }

    #[inline]
    pub unsafe fn wrapped_mut(&mut self, head: usize, len: usize) -> (&mut [T], &mut [T]) {
        let (first, second) = self.wrapped_bounds(head, len);
        let base = self.ptr_mut();
        // the two ranges are disjoint: [head, head + first) and [0, second)
        (slice::from_raw_parts_mut(base.add(head), first),
         slice::from_raw_parts_mut(base, second))
    }

    #[inline]
    fn wrapped_bounds(&self, head: usize, len: usize) -> (usize, usize) {
        debug_assert!(len <= self.capacity());
        debug_assert!(head < self.capacity() || len == 0);
        let first = cmp::min(len, self.capacity() - head);
        (first, len - first)
    }

    /// Runs the destructors of `len` initialized slots starting at `start`.
    #[inline]
    pub unsafe fn drop_range(&mut self, start: usize, len: usize) {
        ptr::drop_in_place(self.slice_mut(start, len) as *mut [T]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocates_requested_slots() {
        let buf: RawBuf<u32> = RawBuf::allocate(7);
        assert!(buf.is_valid());
        assert_eq!(buf.capacity(), 7);
    }

    #[test]
    fn zero_capacity_is_degraded() {
        let buf: RawBuf<u32> = RawBuf::allocate(0);
        assert!(!buf.is_valid());
        assert_eq!(buf.capacity(), 0);
    }

    #[test]
    fn failed_reservation_is_degraded() {
        // within the slot ceiling but far beyond any address space
        let buf: RawBuf<u64> = RawBuf::allocate(MAX_CAPACITY);
        assert!(!buf.is_valid());
        assert_eq!(buf.capacity(), 0);
    }

    #[test]
    fn zero_sized_capacity_is_bounded() {
        let buf: RawBuf<()> = RawBuf::allocate(usize::MAX);
        assert!(!buf.is_valid());
        let buf: RawBuf<()> = RawBuf::allocate(MAX_CAPACITY);
        assert_eq!(buf.capacity(), MAX_CAPACITY);
    }

    #[test]
    fn copy_handles_overlap() {
        let mut buf: RawBuf<u8> = RawBuf::allocate(5);
        unsafe {
            for i in 0..4 {
                buf.write(i, i as u8 + 1);
            }
            buf.copy(1, 0, 4);
            buf.write(0, 9);
            assert_eq!(buf.slice(0, 5), &[9, 1, 2, 3, 4]);
        }
    }

    #[test]
    fn wrapped_segments() {
        let mut buf: RawBuf<u8> = RawBuf::allocate(4);
        unsafe {
            for i in 0..4 {
                buf.write(i, i as u8);
            }
            assert_eq!(buf.wrapped(2, 3), (&[2, 3][..], &[0][..]));
            assert_eq!(buf.wrapped(1, 2), (&[1, 2][..], &[][..]));
            let (back, front) = buf.wrapped_mut(3, 2);
            back[0] = 30;
            front[0] = 40;
            assert_eq!(buf.slice(0, 4), &[40, 1, 2, 30]);
        }
    }
}
