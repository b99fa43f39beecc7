//! Placement policies: where an element goes, and where to look for it.

use core::marker::PhantomData;

use crate::order::{Ascending, SortOrder};
use crate::storage::Storage;

mod sealed {
    pub trait Sealed {}
}

/// Outcome of a placement search.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Search {
    /// Where the probed element belongs.
    pub index: usize,
    /// Whether an equal element already sits at `index`.
    pub found: bool,
}

/// Decides the storage index for insertion, removal and lookup.
///
/// Implemented by the zero-sized [`Sequential`] and [`Ordered`] types; the
/// collection engine selects one at compile time.
pub trait Placement<T>: sealed::Sealed {
    /// `true` if the live range is kept sorted.
    const ORDERED: bool;

    /// Index at which `push` inserts `item`.
    fn push_index(live: &[T], item: &T) -> usize;

    /// Index of the slot `pop` removes. `len` must be non-zero.
    #[inline]
    fn pop_index(len: usize) -> usize {
        len - 1
    }

    /// Locates the first element equal to `item`.
    fn find(live: &[T], item: &T) -> Option<usize>
        where T: PartialEq;

    /// Computes the insertion index and whether an equal element occupies
    /// it, in one pass.
    ///
    /// Only meaningful when [`ORDERED`](Placement::ORDERED) is `true`. The
    /// default answers the index alone and always reports `found: false`;
    /// unordered placements leave presence to the duplication policy.
    #[inline]
    fn search(live: &[T], item: &T) -> Search {
        Search { index: Self::push_index(live, item), found: false }
    }

    /// Removes every element equal to `item`, returning how many went.
    fn remove_all(storage: &mut Storage<T>, item: &T) -> usize
        where T: PartialEq;
}

/// Append-only placement with linear search.
///
/// Elements stay in insertion order.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sequential;

impl sealed::Sealed for Sequential {}

impl<T> Placement<T> for Sequential {
    const ORDERED: bool = false;

    #[inline]
    fn push_index(live: &[T], _item: &T) -> usize {
        live.len()
    }

    fn find(live: &[T], item: &T) -> Option<usize>
        where T: PartialEq
    {
        for (index, element) in live.iter().enumerate() {
            if element == item {
                return Some(index);
            }
        }
        None
    }

    fn remove_all(storage: &mut Storage<T>, item: &T) -> usize
        where T: PartialEq
    {
        storage.retain(|element| element != item)
    }
}

/// Sorted placement driven by the sort order `O`, using binary search.
pub struct Ordered<O = Ascending>(PhantomData<O>);

impl<O> sealed::Sealed for Ordered<O> {}

impl<T: PartialEq, O: SortOrder<T>> Placement<T> for Ordered<O> {
    const ORDERED: bool = true;

    /// Lower bound: the first index whose element does not precede `item`.
    #[inline]
    fn push_index(live: &[T], item: &T) -> usize {
        lower_bound(live, |element| O::precedes(element, item))
    }

    fn find(live: &[T], item: &T) -> Option<usize>
        where T: PartialEq
    {
        let index = Self::push_index(live, item);
        if index < live.len() && live[index] == *item {
            Some(index)
        } else {
            None
        }
    }

    #[inline]
    fn search(live: &[T], item: &T) -> Search {
        let index = Self::push_index(live, item);
        let found = index < live.len() && live[index] == *item;
        Search { index, found }
    }

    fn remove_all(storage: &mut Storage<T>, item: &T) -> usize
        where T: PartialEq
    {
        let (start, end) = {
            let live = storage.as_slice();
            let start = match Self::find(live, item) {
                Some(start) => start,
                None => return 0,
            };
            // upper bound, searched only past the lower one
            let end = start + lower_bound(&live[start..], |element| !O::precedes(item, element));
            (start, end)
        };
        storage.remove_range(start, end)
    }
}

/// Returns the first index of `live` for which `before` is `false`.
///
/// `live` must be partitioned by `before`: every element for which it
/// holds comes first. Runs in `O(log n)`.
///
/// # Examples
///
/// ```
/// use array_collections::lower_bound;
///
/// let live = [1, 3, 3, 7];
/// assert_eq!(lower_bound(&live, |&x| x < 3), 1);
/// assert_eq!(lower_bound(&live, |&x| x <= 3), 3);
/// assert_eq!(lower_bound(&live, |&x| x < 9), 4);
/// ```
pub fn lower_bound<T, F>(live: &[T], mut before: F) -> usize
    where F: FnMut(&T) -> bool
{
    let mut left = 0;
    let mut right = live.len();
    while left < right {
        let middle = left + ((right - left) >> 1);
        if before(&live[middle]) {
            left = middle + 1;
        } else {
            right = middle;
        }
    }
    left
}
