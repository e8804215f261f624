//! ReadThroughCache: LRU cache fronting a data provider

use std::hash::Hash;

use crate::error::{Error, Result};
use crate::lru::LruIndex;
use crate::provider::DataProvider;
use crate::stats::CacheStats;

/// Fixed-capacity cache that reads through to a [`DataProvider`] on a miss.
///
/// The provider is borrowed for the lifetime of the cache. Every `get`
/// either fully succeeds (value returned, cache updated) or fully fails
/// (provider error propagated, cache untouched): a miss is only counted
/// once the provider has produced a value.
pub struct ReadThroughCache<'a, K, V, P: ?Sized> {
    /// Hash index plus recency list over resident entries
    index: LruIndex<K, V>,

    /// Source of truth consulted on a miss
    provider: &'a P,

    /// Hit/miss/eviction counters
    stats: CacheStats,
}

impl<'a, K, V, P> ReadThroughCache<'a, K, V, P>
where
    K: Hash + Eq + Clone,
    V: Clone,
    P: DataProvider<K, V> + ?Sized,
{
    /// Create a new cache over `provider` holding at most `capacity` entries
    ///
    /// # Arguments
    /// * `provider` - the data provider to consult for a cache miss
    /// * `capacity` - the exact number of (key, value) pairs to store
    ///
    /// # Errors
    /// * `Error::InvalidCapacity` if `capacity` is zero
    pub fn new(provider: &'a P, capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity(capacity));
        }

        Ok(Self {
            index: LruIndex::new(capacity),
            provider,
            stats: CacheStats::new(),
        })
    }

    /// Return the value associated with `key`
    ///
    /// On a hit the entry is promoted to most-recently-used. On a miss the
    /// provider is consulted, the miss is counted, and the fetched value is
    /// inserted, evicting exactly the least-recently-used entry when the
    /// cache is full.
    ///
    /// # Errors
    /// Any provider error propagates unmodified; the cache is unchanged.
    pub fn get(&mut self, key: &K) -> Result<V> {
        if let Some(value) = self.index.get(key) {
            let value = value.clone();
            self.stats.record_hit();
            return Ok(value);
        }

        let value = self.provider.fetch(key)?;
        self.stats.record_miss();

        if self.index.insert(key.clone(), value.clone()).is_some() {
            self.stats.record_eviction();
        }

        Ok(value)
    }

    /// Number of cache misses since construction
    pub fn num_misses(&self) -> u64 {
        self.stats.misses()
    }

    /// Number of resident entries
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the cache holds no entries
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Maximum number of resident entries
    pub fn capacity(&self) -> usize {
        self.index.capacity()
    }

    /// Whether `key` is resident, without touching its recency
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains(key)
    }

    /// Hit/miss/eviction counters
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }
}
