//! `SortedMap`: unique keys with associated values, kept in key order.

use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;

use crate::collection::Collection;
use crate::duplication::ForbidDuplicates;
use crate::error::InsertError;
use crate::order::{Ascending, SortOrder};
use crate::placement::{lower_bound, Ordered};

/// A key and its value.
///
/// Equality and ordering look at the key only, so a sorted set of pairs
/// behaves as a map. The key cannot change once the pair is built.
///
/// # Examples
///
/// ```
/// use array_collections::KeyValue;
///
/// let a = KeyValue::new(1, "one");
/// let b = KeyValue::new(1, "uno");
/// assert_eq!(a, b);
/// assert!(a < KeyValue::new(2, "two"));
/// ```
#[derive(Clone, Copy)]
pub struct KeyValue<K, V> {
    key: K,
    value: V,
}

impl<K, V> KeyValue<K, V> {
    /// Pairs `key` with `value`.
    #[inline]
    pub fn new(key: K, value: V) -> KeyValue<K, V> {
        KeyValue { key, value }
    }

    /// Returns the key.
    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns the value.
    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Returns the value mutably.
    #[inline]
    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Splits the pair.
    #[inline]
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K: PartialEq, V> PartialEq for KeyValue<K, V> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<K: Eq, V> Eq for KeyValue<K, V> {}

impl<K: PartialOrd, V> PartialOrd for KeyValue<K, V> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.key.partial_cmp(&other.key)
    }
}

impl<K: Ord, V> Ord for KeyValue<K, V> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for KeyValue<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}: {:?}", self.key, self.value)
    }
}

/// Lifts a key order `O` to pairs.
pub struct ByKey<O = Ascending>(PhantomData<O>);

impl<K, V, O: SortOrder<K>> SortOrder<KeyValue<K, V>> for ByKey<O> {
    #[inline]
    fn precedes(a: &KeyValue<K, V>, b: &KeyValue<K, V>) -> bool {
        O::precedes(&a.key, &b.key)
    }
}

/// A fixed-capacity map with unique keys, sorted under the key order `O`.
///
/// Lookups are binary searches over the keys; no value needs to be
/// constructed to probe for a key.
///
/// # Examples
///
/// ```
/// use array_collections::SortedMap;
///
/// let mut pins: SortedMap<u8, &str> = SortedMap::new(4);
/// pins.add(13, "led").unwrap();
/// pins.add(2, "button").unwrap();
/// assert!(pins.add(13, "buzzer").is_err());
///
/// assert_eq!(pins.try_get(&13), Some(&"led"));
/// assert_eq!(pins.keys().copied().collect::<Vec<_>>(), vec![2, 13]);
/// assert_eq!(pins.remove(&2), Some("button"));
/// assert_eq!(pins.try_get(&2), None);
/// ```
pub struct SortedMap<K, V, O = Ascending> {
    inner: Collection<KeyValue<K, V>, Ordered<ByKey<O>>, ForbidDuplicates>,
}

impl<K, V, O> SortedMap<K, V, O> {
    /// Creates an empty map holding at most `capacity` pairs.
    pub fn new(capacity: usize) -> SortedMap<K, V, O> {
        SortedMap { inner: Collection::new(capacity) }
    }

    /// Moves the contents out, leaving `self` degraded.
    pub fn take(&mut self) -> SortedMap<K, V, O> {
        SortedMap { inner: self.inner.take() }
    }

    /// Returns `false` if the map is degraded.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.inner.is_valid()
    }

    /// Returns the maximum number of pairs.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Returns the number of pairs.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the map is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns `true` if the map is full.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.inner.is_full()
    }

    /// Views the pairs in key order.
    #[inline]
    pub fn as_slice(&self) -> &[KeyValue<K, V>] {
        self.inner.as_slice()
    }

    /// Returns an iterator over `(key, value)` in key order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&K, &V)> + ExactSizeIterator {
        self.inner.iter().map(|kv| (&kv.key, &kv.value))
    }

    /// Returns an iterator over `(key, value)` with mutable values.
    pub fn iter_mut(&mut self) -> impl DoubleEndedIterator<Item = (&K, &mut V)> + ExactSizeIterator {
        self.inner.live_mut().iter_mut().map(|kv| (&kv.key, &mut kv.value))
    }

    /// Returns an iterator over the keys in order.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> + ExactSizeIterator {
        self.inner.iter().map(KeyValue::key)
    }

    /// Returns an iterator over the values in key order.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator {
        self.inner.iter().map(KeyValue::value)
    }

    /// Returns an iterator over mutable values in key order.
    pub fn values_mut(&mut self) -> impl DoubleEndedIterator<Item = &mut V> + ExactSizeIterator {
        self.inner.live_mut().iter_mut().map(KeyValue::value_mut)
    }

    /// Drops every pair, keeping the capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.inner.clear();
    }
}

impl<K: PartialEq, V, O: SortOrder<K>> SortedMap<K, V, O> {
    fn index_of(&self, key: &K) -> Option<usize> {
        let live = self.inner.as_slice();
        let index = lower_bound(live, |kv| O::precedes(&kv.key, key));
        if index < live.len() && live[index].key == *key {
            Some(index)
        } else {
            None
        }
    }

    /// Adds `value` under `key`.
    ///
    /// Fails if the map is full or degraded, or if `key` is already in use;
    /// the existing value is left untouched and the pair is handed back.
    pub fn add(&mut self, key: K, value: V) -> Result<(), InsertError<(K, V)>> {
        self.inner
            .push(KeyValue::new(key, value))
            .map_err(|err| err.map(KeyValue::into_parts))
    }

    /// Removes the pair under `key` and returns its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let index = self.index_of(key)?;
        self.inner.remove_at(index).map(|kv| kv.value)
    }

    /// Returns the value under `key`, leaving it in place.
    pub fn try_get(&self, key: &K) -> Option<&V> {
        self.index_of(key).map(|index| &self.inner.as_slice()[index].value)
    }

    /// Returns the value under `key` mutably.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_collections::SortedMap;
    ///
    /// let mut counts: SortedMap<char, u32> = SortedMap::new(3);
    /// counts.add('x', 1).unwrap();
    /// if let Some(count) = counts.try_get_mut(&'x') {
    ///     *count += 1;
    /// }
    /// assert_eq!(counts.try_get(&'x'), Some(&2));
    /// ```
    pub fn try_get_mut(&mut self, key: &K) -> Option<&mut V> {
        let index = self.index_of(key)?;
        Some(&mut self.inner.live_mut()[index].value)
    }

    /// Returns `true` if `key` is in use.
    #[inline]
    pub fn contains_key(&self, key: &K) -> bool {
        self.index_of(key).is_some()
    }
}

impl<K, V, O> Default for SortedMap<K, V, O> {
    fn default() -> Self {
        SortedMap { inner: Collection::default() }
    }
}

impl<K: fmt::Debug, V: fmt::Debug, O> fmt::Debug for SortedMap<K, V, O> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
