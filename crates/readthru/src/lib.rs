//! # readthru
//!
//! Read-through LRU cache: a fixed-capacity key-value cache that fetches
//! missing values from a backing [`DataProvider`] and evicts the
//! least-recently-used entry when full.
//!
//! ## Architecture
//! - **Hash index**: AHash map from key to slot handle (O(1) lookup)
//! - **Recency list**: arena-backed doubly-linked list, MRU at the head,
//!   eviction victim at the tail (O(1) promote/evict)
//! - **Provider**: single-method capability consulted on every miss
//!
//! ## Example
//! ```
//! use readthru::{ReadThroughCache, Result};
//!
//! let double = |key: &u32| -> Result<u64> { Ok(u64::from(*key) * 2) };
//! let mut cache = ReadThroughCache::new(&double, 16)?;
//!
//! assert_eq!(cache.get(&21)?, 42); // miss, fetched from the provider
//! assert_eq!(cache.get(&21)?, 42); // hit, served from the cache
//! assert_eq!(cache.num_misses(), 1);
//! # Ok::<(), readthru::Error>(())
//! ```

#![warn(missing_docs)]

mod cache;
mod error;
mod lru;
mod provider;
mod stats;

pub use cache::ReadThroughCache;
pub use error::{Error, Result};
pub use provider::DataProvider;
pub use stats::CacheStats;
