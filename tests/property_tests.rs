//! Property Tests for the Recency Cache
//!
//! Drives the cache with random operation sequences and compares every step
//! against a `Vec`-based model ordered from least to most recently used.

use proptest::prelude::*;
use recency_cache::RecencyCache;

#[derive(Debug, Clone)]
enum Op {
    Put(u8, u32),
    Get(u8),
    Peek(u8),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    // Small key space so that hits, updates and evictions all occur.
    prop_oneof![
        3 => (0u8..16, any::<u32>()).prop_map(|(k, v)| Op::Put(k, v)),
        2 => (0u8..16).prop_map(Op::Get),
        1 => (0u8..16).prop_map(Op::Peek),
    ]
}

/// Reference model: entries ordered from least to most recently used.
#[derive(Debug, Default)]
struct Model {
    capacity: usize,
    entries: Vec<(u8, u32)>,
}

impl Model {
    fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Vec::new(),
        }
    }

    /// Returns (previous value, evicted key).
    fn put(&mut self, key: u8, value: u32) -> (Option<u32>, Option<u8>) {
        if let Some(pos) = self.entries.iter().position(|(k, _)| *k == key) {
            let (_, old) = self.entries.remove(pos);
            self.entries.push((key, value));
            return (Some(old), None);
        }
        let evicted = if self.entries.len() == self.capacity {
            Some(self.entries.remove(0).0)
        } else {
            None
        };
        self.entries.push((key, value));
        (None, evicted)
    }

    fn get(&mut self, key: u8) -> Option<u32> {
        let pos = self.entries.iter().position(|(k, _)| *k == key)?;
        let entry = self.entries.remove(pos);
        self.entries.push(entry);
        Some(entry.1)
    }

    fn peek(&self, key: u8) -> Option<u32> {
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
    }
}

fn lru_order(cache: &RecencyCache<u8, u32>) -> Vec<(u8, u32)> {
    cache.iter().rev().map(|(k, v)| (*k, *v)).collect()
}

proptest! {
    #[test]
    fn prop_matches_reference_model(
        capacity in 1usize..8,
        ops in prop::collection::vec(op_strategy(), 0..200),
    ) {
        let mut cache = RecencyCache::new(capacity).unwrap();
        let mut model = Model::new(capacity);

        for op in ops {
            match op {
                Op::Put(k, v) => {
                    let least_recent = cache.peek_least_recent_key().copied();
                    let was_full = cache.len() == capacity;
                    let present = cache.contains(&k);
                    let (expected_old, expected_evicted) = model.put(k, v);

                    prop_assert_eq!(cache.put(k, v), expected_old);
                    // The evicted key is exactly the least recent one before the call.
                    if was_full && !present {
                        prop_assert_eq!(expected_evicted, least_recent);
                        if let Some(evicted) = least_recent {
                            prop_assert!(!cache.contains(&evicted));
                        }
                    }
                }
                Op::Get(k) => {
                    prop_assert_eq!(cache.get(&k).copied(), model.get(k));
                }
                Op::Peek(k) => {
                    prop_assert_eq!(cache.peek(&k).copied(), model.peek(k));
                }
            }

            prop_assert!(cache.len() <= capacity);
            prop_assert_eq!(lru_order(&cache), model.entries.clone());
            prop_assert_eq!(
                cache.peek_most_recent_key().copied(),
                model.entries.last().map(|(k, _)| *k)
            );
            prop_assert_eq!(
                cache.peek_least_recent_key().copied(),
                model.entries.first().map(|(k, _)| *k)
            );
            prop_assert!(cache.check_invariants().is_ok());
        }
    }

    #[test]
    fn prop_second_get_is_noop_on_order(
        keys in prop::collection::vec(0u8..32, 1..40),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut cache = RecencyCache::new(16).unwrap();
        for (i, k) in keys.iter().enumerate() {
            cache.put(*k, i as u32);
        }
        let resident: Vec<u8> = cache.iter().map(|(k, _)| *k).collect();
        let key = resident[pick.index(resident.len())];

        cache.get(&key);
        let once = lru_order(&cache);
        cache.get(&key);
        prop_assert_eq!(lru_order(&cache), once);
        prop_assert_eq!(cache.peek_most_recent_key(), Some(&key));
    }

    #[test]
    fn prop_round_trip_latest_value(
        writes in prop::collection::vec((0u8..8, any::<u32>()), 1..100),
    ) {
        // Capacity covers the whole key space, so nothing is ever evicted.
        let mut cache = RecencyCache::new(8).unwrap();
        let mut latest = std::collections::HashMap::new();
        for (k, v) in writes {
            cache.put(k, v);
            latest.insert(k, v);
        }
        for (k, v) in latest {
            prop_assert_eq!(cache.get(&k), Some(&v));
        }
    }
}
