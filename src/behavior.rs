//! Write semantics for `RingBuffer`.

/// Tagging trait for providing behaviors to `RingBuffer`.
///
/// The behavior is part of the type, so a buffer cannot switch between
/// rejecting and overwriting at runtime.
pub trait Behavior {}

/// Behavior for `RingBuffer` that specifies wrapping write semantics.
///
/// Pushing an element into a buffer that **has already reached its capacity**
/// causes it to **overwrite** the oldest element, at the front.
/// A push on a usable buffer never fails.
pub struct Wrapping;
impl Behavior for Wrapping {}

/// Behavior for `RingBuffer` that specifies saturating write semantics.
///
/// Pushing an element into a buffer that **has already reached its capacity**
/// causes it to **exit early, without performing any mutation**.
pub struct Saturating;
impl Behavior for Saturating {}
