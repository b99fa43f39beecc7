//! Sort orders for the ordered collections.
//!
//! A sort order is a zero-sized type supplying a strict "comes before"
//! predicate; ordered collections keep their live range sorted under it.

/// Strict ordering predicate used by ordered placement.
///
/// `precedes(a, b)` must behave like `<` on a total order: irreflexive and
/// transitive, with incomparable elements treated as equivalent.
pub trait SortOrder<T: ?Sized> {
    /// Returns `true` if `a` belongs strictly before `b`.
    fn precedes(a: &T, b: &T) -> bool;
}

/// Smallest element first.
///
/// # Examples
///
/// ```
/// use array_collections::{Ascending, SortOrder};
///
/// assert!(Ascending::precedes(&1, &2));
/// assert!(!Ascending::precedes(&2, &2));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Ascending;

impl<T: PartialOrd + ?Sized> SortOrder<T> for Ascending {
    #[inline]
    fn precedes(a: &T, b: &T) -> bool {
        a < b
    }
}

/// Largest element first.
///
/// # Examples
///
/// ```
/// use array_collections::{Descending, SortOrder};
///
/// assert!(Descending::precedes(&2, &1));
/// assert!(!Descending::precedes(&1, &2));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Descending;

impl<T: PartialOrd + ?Sized> SortOrder<T> for Descending {
    #[inline]
    fn precedes(a: &T, b: &T) -> bool {
        a > b
    }
}
