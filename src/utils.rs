#[inline]
pub fn wrap_add(index: usize, addend: usize, capacity: usize) -> usize {
    debug_assert!(addend <= capacity);
    (index + addend) % capacity
}

#[inline]
pub fn wrap_sub(index: usize, subtrahend: usize, capacity: usize) -> usize {
    debug_assert!(subtrahend <= capacity);
    (index + capacity - subtrahend) % capacity
}

/// Maps a logical position, counted from the oldest live element, onto
/// its slot in the backing array.
#[inline]
pub fn physical(head: usize, logical: usize, capacity: usize) -> usize {
    debug_assert!(logical < capacity);
    (head + logical) % capacity
}
