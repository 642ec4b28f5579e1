#![no_std]
extern crate alloc;
extern crate recency_cache;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use recency_cache::algorithms::{find_ge_idx, kmp_find_all, MinOracle};
use recency_cache::config::RecencyCacheConfig;
use recency_cache::metrics::CacheMetrics;
use recency_cache::RecencyCache;

fn make_cache<K: core::hash::Hash + Eq, V>(cap: usize) -> RecencyCache<K, V> {
    RecencyCache::init(RecencyCacheConfig::new(cap), None).unwrap()
}

#[test]
fn test_cache_in_no_std() {
    let mut cache = make_cache(2);

    // Using String as it requires the alloc crate
    let key1 = String::from("key1");
    let key2 = String::from("key2");
    let key3 = String::from("key3");

    cache.put(key1.clone(), 1);
    cache.put(key2.clone(), 2);

    assert_eq!(*cache.get(&key1).unwrap(), 1);
    assert_eq!(*cache.get(&key2).unwrap(), 2);

    // This should evict key1
    cache.put(key3.clone(), 3);

    assert!(cache.get(&key1).is_none());
    assert_eq!(*cache.get(&key2).unwrap(), 2);
    assert_eq!(*cache.get(&key3).unwrap(), 3);
}

#[test]
fn test_recency_queries_in_no_std() {
    let mut cache = make_cache(3);
    let keys: Vec<String> = (0..5).map(|i| format!("key{i}")).collect();

    for (i, key) in keys.iter().enumerate() {
        cache.put(key.clone(), i);
    }

    assert_eq!(cache.len(), 3);
    assert_eq!(cache.peek_most_recent_key(), Some(&keys[4]));
    assert_eq!(cache.peek_least_recent_key(), Some(&keys[2]));

    cache.get("key2");
    assert_eq!(cache.peek_most_recent_key().map(String::as_str), Some("key2"));
    assert_eq!(cache.peek_least_recent_key().map(String::as_str), Some("key3"));
}

#[test]
fn test_metrics_in_no_std() {
    let mut cache = make_cache(1);
    cache.put(1u32, 1u32);
    cache.get(&1);
    cache.get(&2);
    cache.put(3, 3);

    let metrics = cache.metrics();
    assert_eq!(metrics.get("cache_hits"), Some(&1.0));
    assert_eq!(metrics.get("cache_misses"), Some(&1.0));
    assert_eq!(metrics.get("evictions"), Some(&1.0));
}

#[test]
fn test_algorithms_in_no_std() {
    assert_eq!(find_ge_idx(&[1, 4, 4, 9], &4), Some(1));

    let oracle = MinOracle::new(&[3, 1, 4, 1, 5, 9, 2, 6]);
    assert_eq!(oracle.min_query(4, 7), Some(&2));

    let text: Vec<u8> = format!("{}", "abababa").into_bytes();
    assert_eq!(kmp_find_all(b"aba", &text), [0, 2, 4]);
}
