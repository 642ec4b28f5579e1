//! Least Recently Used (LRU) Cache Implementation
//!
//! This module provides [`RecencyCache`], a fixed-capacity LRU cache with O(1)
//! insertion, lookup and recency queries.
//!
//! # Algorithm
//!
//! The cache keeps its entries in a recency chain ordered from the least
//! recently used end to the most recently used end. Every `put` or `get` that
//! touches a key splices its entry out of its current position and re-links it
//! at the most recently used end. When a new key arrives while the cache is
//! full, the entry at the least recently used end is evicted.
//!
//! Two structures make this constant time:
//!
//! - an **index** (`hashbrown::HashTable`) from key to the arena slot of its
//!   entry, turning a key search into a single probe;
//! - a **recency chain** (an arena-backed doubly linked list) where moving an
//!   entry is a handful of link rewrites rather than a shift of elements.
//!
//! The key is stored once, inside the chain node. The index holds only slot
//! handles and compares keys through the chain, so keys need `Hash + Eq` and
//! nothing else.
//!
//! # Performance Characteristics
//!
//! - **Time Complexity**:
//!   - Get: O(1)
//!   - Put: O(1)
//!   - Most/least recent key: O(1)
//!
//! - **Space Complexity**:
//!   - O(n) where n is the capacity of the cache
//!
//! # Thread Safety
//!
//! This implementation is not thread-safe. For concurrent access, wrap the
//! cache in a synchronization primitive such as `Mutex`.

extern crate alloc;

use crate::config::RecencyCacheConfig;
use crate::error::{ConfigError, InvariantError};
use crate::list::{self, List, SlotId};
use crate::metrics::{CacheMetrics, RecencyCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::String;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::iter::FusedIterator;
use core::mem;
use core::num::NonZeroUsize;

use hashbrown::DefaultHashBuilder;
use hashbrown::HashTable;
use tracing::{debug, trace};

/// A fixed-capacity Least Recently Used cache.
///
/// The cache holds at most `capacity` entries. Inserting a new key into a
/// full cache evicts the entry that was touched least recently. Both `put`
/// and `get` count as a touch; the `peek*` and [`contains`](Self::contains)
/// methods do not.
///
/// `put` on a key that is already resident replaces its value and returns the
/// previous one. Evictions are silent: an evicted key simply reads as absent
/// afterwards.
///
/// # Examples
///
/// ```
/// use recency_cache::RecencyCache;
///
/// let mut cache = RecencyCache::new(2).unwrap();
///
/// cache.put("apple", 1);
/// cache.put("banana", 2);
///
/// // Accessing an entry makes it the most recently used one
/// assert_eq!(cache.get(&"apple"), Some(&1));
/// assert_eq!(cache.peek_most_recent_key(), Some(&"apple"));
///
/// // Adding beyond capacity evicts the least recently used entry
/// cache.put("cherry", 3);
/// assert_eq!(cache.get(&"banana"), None);
/// assert_eq!(cache.get(&"apple"), Some(&1));
/// assert_eq!(cache.get(&"cherry"), Some(&3));
/// ```
pub struct RecencyCache<K, V, S = DefaultHashBuilder> {
    capacity: NonZeroUsize,
    list: List<(K, V)>,
    index: HashTable<SlotId>,
    hash_builder: S,
    metrics: RecencyCacheMetrics,
}

impl<K: Hash + Eq, V> RecencyCache<K, V> {
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidConfiguration`] if `capacity` is zero.
    ///
    /// ```
    /// use recency_cache::RecencyCache;
    ///
    /// assert!(RecencyCache::<u32, u32>::new(0).is_err());
    /// let cache = RecencyCache::<u32, u32>::new(1).unwrap();
    /// assert!(cache.is_empty());
    /// ```
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        Self::with_hasher(capacity, DefaultHashBuilder::default())
    }
}

impl<K: Hash + Eq, V, S: BuildHasher + Default> RecencyCache<K, V, S> {
    /// Creates a cache from a configuration, using `hasher` or the default
    /// hash builder when `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidConfiguration`] if the configured
    /// capacity is zero.
    pub fn init(config: RecencyCacheConfig, hasher: Option<S>) -> Result<Self, ConfigError> {
        let capacity = config.validate()?;
        Ok(Self::from_parts(capacity, hasher.unwrap_or_default()))
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> RecencyCache<K, V, S> {
    /// Creates an empty cache with the given capacity and hash builder.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidConfiguration`] if `capacity` is zero.
    pub fn with_hasher(capacity: usize, hash_builder: S) -> Result<Self, ConfigError> {
        let capacity = RecencyCacheConfig::new(capacity).validate()?;
        Ok(Self::from_parts(capacity, hash_builder))
    }

    fn from_parts(capacity: NonZeroUsize, hash_builder: S) -> Self {
        debug!(capacity = capacity.get(), "created recency cache");
        RecencyCache {
            capacity,
            list: List::with_capacity(capacity.get()),
            index: HashTable::with_capacity(capacity.get()),
            hash_builder,
            metrics: RecencyCacheMetrics::new(),
        }
    }

    /// Returns the maximum number of entries the cache can hold.
    #[inline]
    pub fn cap(&self) -> NonZeroUsize {
        self.capacity
    }

    /// Returns the number of resident entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns true if the cache holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Inserts or updates `key`, making it the most recently used entry.
    ///
    /// If `key` is already resident its value is replaced and the previous
    /// value is returned; no eviction happens. Otherwise the entry is linked
    /// in as most recently used and `None` is returned. When the cache is
    /// already full, the least recently used entry is evicted first, so the
    /// cache never holds more than `capacity` entries.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let hash = self.hash_builder.hash_one(&key);

        if let Some(id) = self.find_slot(hash, &key) {
            self.list.move_to_front(id);
            self.metrics.record_update();
            trace!(slot = id.index(), "updated resident entry");
            return self
                .list
                .get_mut(id)
                .map(|(_, old)| mem::replace(old, value));
        }

        if self.list.len() >= self.capacity.get() {
            self.evict_lru();
        }

        let id = self.list.push_front((key, value));
        let list = &self.list;
        let hash_builder = &self.hash_builder;
        let _ = self
            .index
            .insert_unique(hash, id, |&slot| slot_hash(list, hash_builder, slot));
        self.metrics.record_insertion();
        trace!(slot = id.index(), len = self.list.len(), "inserted entry");
        None
    }

    /// Returns the value for `key` and makes it the most recently used entry.
    ///
    /// A missing key returns `None` and leaves the recency order untouched.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let id = self.touch(key)?;
        self.list.get(id).map(|(_, v)| v)
    }

    /// Like [`get`](Self::get) but returns a mutable reference to the value.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let id = self.touch(key)?;
        self.list.get_mut(id).map(|(_, v)| v)
    }

    /// Returns the value for `key` without changing its recency.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let hash = self.hash_builder.hash_one(key);
        let id = self.find_slot(hash, key)?;
        self.list.get(id).map(|(_, v)| v)
    }

    /// Returns true if `key` is resident. Does not change its recency.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let hash = self.hash_builder.hash_one(key);
        self.find_slot(hash, key).is_some()
    }

    /// Returns the key of the most recently used entry, or `None` if empty.
    #[inline]
    pub fn peek_most_recent_key(&self) -> Option<&K> {
        self.list.front().map(|(k, _)| k)
    }

    /// Returns the key of the least recently used entry, or `None` if empty.
    #[inline]
    pub fn peek_least_recent_key(&self) -> Option<&K> {
        self.list.back().map(|(k, _)| k)
    }

    /// Returns the most recently used entry without changing the order.
    #[inline]
    pub fn peek_most_recent(&self) -> Option<(&K, &V)> {
        self.list.front().map(|(k, v)| (k, v))
    }

    /// Returns the least recently used entry, the next eviction candidate.
    #[inline]
    pub fn peek_least_recent(&self) -> Option<(&K, &V)> {
        self.list.back().map(|(k, v)| (k, v))
    }

    /// Drops every entry. Capacity and metric counters are kept.
    pub fn clear(&mut self) {
        debug!(dropped = self.list.len(), "cleared recency cache");
        self.index.clear();
        self.list.clear();
    }

    /// Iterates entries from most to least recently used without touching them.
    ///
    /// ```
    /// use recency_cache::RecencyCache;
    ///
    /// let mut cache = RecencyCache::new(3).unwrap();
    /// cache.put("a", 1);
    /// cache.put("b", 2);
    /// cache.put("c", 3);
    /// cache.get(&"a");
    ///
    /// let keys: Vec<_> = cache.iter().map(|(k, _)| *k).collect();
    /// assert_eq!(keys, ["a", "c", "b"]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.list.iter(),
        }
    }

    /// Verifies that the index and the recency chain agree.
    ///
    /// Walks the whole chain, so this is O(n). Intended for tests and
    /// debugging; a cache driven only through its public API always passes.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantError`] found.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let chain = self.list.check_links()?;
        if chain != self.index.len() {
            return Err(InvariantError::LengthMismatch {
                index: self.index.len(),
                chain,
            });
        }
        if chain > self.capacity.get() {
            return Err(InvariantError::OverCapacity {
                len: chain,
                capacity: self.capacity.get(),
            });
        }
        for &id in self.index.iter() {
            let (key, _) = self
                .list
                .get(id)
                .ok_or(InvariantError::StaleIndex { slot: id.index() })?;
            let hash = self.hash_builder.hash_one(key);
            if self.find_slot(hash, key) != Some(id) {
                return Err(InvariantError::StaleIndex { slot: id.index() });
            }
        }
        Ok(())
    }

    /// Looks up `key` and, when found, splices it to the most recent end.
    fn touch<Q>(&mut self, key: &Q) -> Option<SlotId>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let hash = self.hash_builder.hash_one(key);
        match self.find_slot(hash, key) {
            Some(id) => {
                self.list.move_to_front(id);
                self.metrics.record_hit();
                trace!(slot = id.index(), "promoted entry");
                Some(id)
            }
            None => {
                self.metrics.record_miss();
                None
            }
        }
    }

    fn find_slot<Q>(&self, hash: u64, key: &Q) -> Option<SlotId>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        let list = &self.list;
        self.index
            .find(hash, |&slot| {
                list.get(slot)
                    .is_some_and(|(k, _)| <K as Borrow<Q>>::borrow(k) == key)
            })
            .copied()
    }

    /// Removes the least recently used entry from both the index and the chain.
    fn evict_lru(&mut self) {
        let Some(id) = self.list.back_id() else {
            return;
        };
        let hash = slot_hash(&self.list, &self.hash_builder, id);
        if let Ok(entry) = self.index.find_entry(hash, |&slot| slot == id) {
            let _ = entry.remove();
        }
        self.list.pop_back();
        self.metrics.record_eviction();
        debug!(
            slot = id.index(),
            capacity = self.capacity.get(),
            "evicted least recently used entry"
        );
    }
}

/// Hash of the key stored in `slot`. Vacant slots never reach the index, so
/// the fallback value is never compared against a real hash.
fn slot_hash<K: Hash, V, S: BuildHasher>(
    list: &List<(K, V)>,
    hash_builder: &S,
    slot: SlotId,
) -> u64 {
    list.get(slot).map_or(0, |(k, _)| hash_builder.hash_one(k))
}

impl<K, V, S> fmt::Debug for RecencyCache<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecencyCache")
            .field("capacity", &self.capacity)
            .field("len", &self.list.len())
            .finish()
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> CacheMetrics for RecencyCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.metrics.metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        self.metrics.algorithm_name()
    }
}

impl<'a, K: Hash + Eq, V, S: BuildHasher> IntoIterator for &'a RecencyCache<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over cache entries from most to least recently used.
///
/// Created by [`RecencyCache::iter`]. Reverse it to walk from the least
/// recently used end.
pub struct Iter<'a, K, V> {
    inner: list::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, v)| (k, v))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("remaining", &self.inner.len())
            .finish()
    }
}
