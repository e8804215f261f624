//! Data provider capability consumed by the cache on a miss

use crate::error::Result;

/// Source of truth consulted when a key is not resident in the cache.
///
/// A provider exposes exactly one operation: given a key, produce the
/// corresponding value. The call is synchronous and may be arbitrarily
/// expensive; the cache blocks on it and propagates any `Err` to its
/// caller unmodified.
pub trait DataProvider<K, V> {
    /// Produce the value for `key`, or fail
    fn fetch(&self, key: &K) -> Result<V>;
}

/// Any `Fn(&K) -> Result<V>` closure can serve as a provider.
impl<K, V, F> DataProvider<K, V> for F
where
    F: Fn(&K) -> Result<V>,
{
    fn fetch(&self, key: &K) -> Result<V> {
        self(key)
    }
}
