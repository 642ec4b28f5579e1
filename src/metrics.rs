//! Cache Metrics
//!
//! Counters for the recency cache, reported through the [`CacheMetrics`]
//! trait as a `BTreeMap` so that keys always come out in the same order.
//!
//! Only promoting lookups (`get`, `get_mut`) count as requests. Peeks and
//! presence checks leave the counters untouched.

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

/// Counters tracked by a [`RecencyCache`](crate::RecencyCache).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecencyCacheMetrics {
    /// Total number of lookups made against the cache.
    pub requests: u64,

    /// Lookups that found their key.
    pub cache_hits: u64,

    /// New keys linked into the cache.
    pub insertions: u64,

    /// Puts that replaced the value of a resident key.
    pub updates: u64,

    /// Entries dropped from the LRU end to stay within capacity.
    pub evictions: u64,
}

impl RecencyCacheMetrics {
    /// Creates a zeroed set of counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a lookup that found its key.
    #[inline]
    pub fn record_hit(&mut self) {
        self.requests += 1;
        self.cache_hits += 1;
    }

    /// Records a lookup that did not find its key.
    #[inline]
    pub fn record_miss(&mut self) {
        self.requests += 1;
    }

    /// Records a new key being linked in.
    #[inline]
    pub fn record_insertion(&mut self) {
        self.insertions += 1;
    }

    /// Records a put on a key that was already resident.
    #[inline]
    pub fn record_update(&mut self) {
        self.updates += 1;
    }

    /// Records an eviction from the LRU end.
    #[inline]
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// Lookups that missed; derived as `requests - cache_hits`.
    #[inline]
    pub fn cache_misses(&self) -> u64 {
        self.requests - self.cache_hits
    }

    /// Fraction of lookups that hit, or 0.0 before the first lookup.
    pub fn hit_rate(&self) -> f64 {
        if self.requests > 0 {
            self.cache_hits as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Fraction of lookups that missed, or 0.0 before the first lookup.
    pub fn miss_rate(&self) -> f64 {
        if self.requests > 0 {
            self.cache_misses() as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Converts the counters to a map with deterministic key order.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = BTreeMap::new();

        metrics.insert("cache_hits".to_string(), self.cache_hits as f64);
        metrics.insert("cache_misses".to_string(), self.cache_misses() as f64);
        metrics.insert("evictions".to_string(), self.evictions as f64);
        metrics.insert("insertions".to_string(), self.insertions as f64);
        metrics.insert("requests".to_string(), self.requests as f64);
        metrics.insert("updates".to_string(), self.updates as f64);

        metrics.insert("hit_rate".to_string(), self.hit_rate());
        metrics.insert("miss_rate".to_string(), self.miss_rate());

        metrics
    }
}

/// Uniform metrics reporting for cache implementations.
pub trait CacheMetrics {
    /// Returns all metrics as key-value pairs, sorted by key.
    fn metrics(&self) -> BTreeMap<String, f64>;

    /// Short name identifying the eviction policy (e.g. "LRU").
    fn algorithm_name(&self) -> &'static str;
}

impl CacheMetrics for RecencyCacheMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "LRU"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rates_before_any_request() {
        let metrics = RecencyCacheMetrics::new();
        assert_eq!(metrics.hit_rate(), 0.0);
        assert_eq!(metrics.miss_rate(), 0.0);
        assert!(!metrics.to_btreemap().is_empty());
    }

    #[test]
    fn test_hits_and_misses() {
        let mut metrics = RecencyCacheMetrics::new();
        metrics.record_hit();
        metrics.record_hit();
        metrics.record_hit();
        metrics.record_miss();
        assert_eq!(metrics.requests, 4);
        assert_eq!(metrics.cache_misses(), 1);
        assert_eq!(metrics.hit_rate(), 0.75);
        assert_eq!(metrics.miss_rate(), 0.25);
    }

    #[test]
    fn test_btreemap_keys_sorted() {
        let mut metrics = RecencyCacheMetrics::new();
        metrics.record_insertion();
        metrics.record_update();
        metrics.record_eviction();
        let map = metrics.metrics();
        let keys: alloc::vec::Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            [
                "cache_hits",
                "cache_misses",
                "evictions",
                "hit_rate",
                "insertions",
                "miss_rate",
                "requests",
                "updates"
            ]
        );
        assert_eq!(map["insertions"], 1.0);
        assert_eq!(map["updates"], 1.0);
        assert_eq!(map["evictions"], 1.0);
        assert_eq!(metrics.algorithm_name(), "LRU");
    }
}
