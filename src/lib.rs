//! Fixed-capacity collections backed by a single heap allocation.
//!
//! Every collection takes its capacity at construction, allocates exactly
//! once, and never grows. Running out of room is an ordinary, recoverable
//! error: the element is handed back inside an [`InsertError`].
//!
//! If the allocation fails, or a capacity of 0 is requested, the collection
//! is *degraded*: it reports a capacity of 0, [`is_valid`](ArrayList::is_valid)
//! returns `false`, and every insertion fails with
//! [`InsertErrorKind::Degraded`]. It never retries the allocation.
//!
//! | Type | Order | Duplicates |
//! |---|---|---|
//! | [`ArrayList`] | insertion | allowed |
//! | [`ArraySet`] | insertion | refused |
//! | [`SortedList`] | [`SortOrder`] | allowed |
//! | [`SortedSet`] | [`SortOrder`] | refused |
//! | [`SortedMap`] | key [`SortOrder`] | refused by key |
//! | [`RingBuffer`] | FIFO | allowed |
//!
//! The first five are facades over one engine, [`Collection`], which picks a
//! [`Placement`] policy and a [`Duplication`] policy at compile time.
//!
//! # Feature Flags
//! The **array-collections** crate has the following cargo feature flags:
//!
//! - `std`
//!   - Optional, enabled by default
//!   - Use libstd and provide [`HostInterrupts`]
//!
//!
//! - `log`
//!   - Optional
//!   - Report degraded allocations through the `log` facade
//!
//! Without `std` the crate is `no_std` and only needs `alloc`:
//!
//! ```toml
//! [dependencies]
//! array-collections = { version = "0.1", default-features = false }
//! ```
//!
//! # Examples
//! ```
//! use array_collections::{ArrayList, InsertErrorKind};
//!
//! let mut list = ArrayList::new(2);
//! assert_eq!(list.capacity(), 2);
//!
//! list.push(1).unwrap();
//! list.push(2).unwrap();
//! let err = list.push(3).unwrap_err();
//! assert_eq!(err.kind(), InsertErrorKind::Full);
//! assert_eq!(err.element, 3);
//!
//! assert_eq!(list.pop(), Some(2));
//! ```
//!
//! # Sorted
//! ```
//! use array_collections::{Descending, SortedSet};
//!
//! let mut set: SortedSet<i32, Descending> = SortedSet::new(4);
//! for x in [3, 9, 3, 1] {
//!     let _ = set.insert(x);
//! }
//! assert_eq!(set.as_slice(), &[9, 3, 1]);
//! ```
//!
//! # Interrupt-safe push and pop
//! ```
//! use array_collections::{HostInterrupts, RingBuffer};
//!
//! let mut events: RingBuffer<u8> = RingBuffer::new(8);
//! events.push_atomic::<HostInterrupts>(1).unwrap();
//! assert_eq!(events.pop_atomic::<HostInterrupts>(), Some(1));
//! ```

#![cfg_attr(not(any(feature="std", test)), no_std)]

#![deny(missing_docs)]

extern crate alloc;

mod behavior;
mod collection;
mod duplication;
pub mod error;
mod interrupt;
mod list;
mod map;
mod order;
mod placement;
mod raw;
mod ring;
mod set;
mod sorted_list;
mod sorted_set;
mod storage;
mod utils;

pub use behavior::{Behavior, Saturating, Wrapping};
pub use collection::Collection;
pub use duplication::{AllowDuplicates, Duplication, ForbidDuplicates};
pub use error::{InsertError, InsertErrorKind};
pub use interrupt::{CriticalSection, InterruptControl};
#[cfg(feature = "std")]
pub use interrupt::HostInterrupts;
pub use list::ArrayList;
pub use map::{ByKey, KeyValue, SortedMap};
pub use order::{Ascending, Descending, SortOrder};
pub use placement::{lower_bound, Ordered, Placement, Search, Sequential};
pub use ring::{IntoIter, Iter, IterMut, RingBuffer};
pub use set::ArraySet;
pub use sorted_list::SortedList;
pub use sorted_set::SortedSet;
pub use storage::Storage;

/// Capacity used by every `Default` implementation.
pub const DEFAULT_CAPACITY: usize = 5;
