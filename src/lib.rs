#![doc = include_str!("../README.md")]
//!
//! ---
//!
//! # Code Reference
//!
//! ## Recency Chain Layout
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │ index: HashTable<SlotId>                                             │
//! │   hash("a") ─▶ 2     hash("b") ─▶ 0     hash("c") ─▶ 1                │
//! └──────────────────────────────────────────────────────────────────────┘
//!                     │                  │                  │
//!                     ▼                  ▼                  ▼
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │ arena:      slot 0 ("b")        slot 1 ("c")       slot 2 ("a")       │
//! │                                                                      │
//! │   LRU end ─▶ [a] ◀──newer/older──▶ [b] ◀──newer/older──▶ [c] ◀─ MRU  │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A touch splices one node out and re-links it at the MRU end. An
//! over-capacity insertion unlinks the node at the LRU end and reuses its slot.
//!
//! ## Quick Reference
//!
//! | Operation | Promotes | Cost |
//! |-----------|----------|------|
//! | [`RecencyCache::put`] | yes | O(1) |
//! | [`RecencyCache::get`] / [`RecencyCache::get_mut`] | yes | O(1) |
//! | [`RecencyCache::peek`] / [`RecencyCache::contains`] | no | O(1) |
//! | [`RecencyCache::peek_most_recent_key`] | no | O(1) |
//! | [`RecencyCache::peek_least_recent_key`] | no | O(1) |
//! | [`RecencyCache::iter`] | no | O(n) |
//!
//! ## Code Example
//!
//! ```rust
//! use recency_cache::RecencyCache;
//!
//! let mut cache = RecencyCache::new(4).unwrap();
//! for (k, v) in [("a", 1), ("b", 2), ("c", 3), ("d", 4)] {
//!     cache.put(k, v);
//! }
//! assert_eq!(cache.peek_most_recent_key(), Some(&"d"));
//! assert_eq!(cache.peek_least_recent_key(), Some(&"a"));
//!
//! cache.put("e", 5);                    // evicts "a"
//! assert_eq!(cache.get(&"a"), None);
//! assert_eq!(cache.get(&"b"), Some(&2)); // "b" becomes most recent
//! assert_eq!(cache.peek_most_recent_key(), Some(&"b"));
//! assert_eq!(cache.peek_least_recent_key(), Some(&"c"));
//! ```
//!
//! ## Modules
//!
//! - [`lru`]: the recency cache
//! - [`config`]: construction parameters
//! - [`error`]: configuration and invariant errors
//! - [`metrics`]: hit, miss and eviction counters
//! - [`algorithms`]: standalone search helpers (binary search, range minimum, KMP)

#![no_std]

extern crate alloc;

/// Arena-backed doubly linked list used as the recency chain.
///
/// Internal infrastructure: nodes are addressed by slot handles that the
/// cache keeps in its index. Not part of the public API.
pub(crate) mod list;

/// Cache configuration.
pub mod config;

/// Error types.
///
/// Construction fails with [`ConfigError`]; invariant checks report
/// [`InvariantError`]. Lookups of absent keys are not errors.
pub mod error;

/// Least Recently Used cache implementation.
///
/// Provides a fixed-capacity cache that evicts the least recently used entry
/// when a new key would exceed the capacity.
pub mod lru;

/// Cache metrics.
pub mod metrics;

/// Standalone search algorithms unrelated to the cache's state.
pub mod algorithms;

pub use config::RecencyCacheConfig;
pub use error::{ConfigError, InvariantError};
pub use lru::RecencyCache;
pub use metrics::{CacheMetrics, RecencyCacheMetrics};
