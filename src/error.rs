//! Error types for the recency cache.
//!
//! - [`ConfigError`]: returned by fallible constructors when the requested
//!   configuration cannot produce a cache (a capacity of zero).
//! - [`InvariantError`]: returned by
//!   [`RecencyCache::check_invariants`](crate::RecencyCache::check_invariants)
//!   when the index and the recency chain disagree.
//!
//! A lookup of a missing key is not an error; it is reported as `None`.
//!
//! ```
//! use recency_cache::error::ConfigError;
//! use recency_cache::RecencyCache;
//!
//! let err = RecencyCache::<&str, i32>::new(0).unwrap_err();
//! assert!(matches!(err, ConfigError::InvalidConfiguration { .. }));
//! assert!(err.to_string().contains("capacity"));
//! ```

use thiserror::Error;

/// Error returned when cache configuration parameters are invalid.
///
/// Fatal to construction: no cache instance is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The configuration cannot describe a usable cache.
    #[error("invalid cache configuration: {reason}")]
    InvalidConfiguration {
        /// Which parameter failed validation.
        reason: &'static str,
    },
}

/// Error returned when the index and the recency chain are out of step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvariantError {
    /// The index holds a different number of keys than the chain holds entries.
    #[error("index holds {index} keys but the chain links {chain} entries")]
    LengthMismatch {
        /// Number of keys in the index.
        index: usize,
        /// Number of entries reachable from the LRU end.
        chain: usize,
    },
    /// More entries are resident than the configured capacity allows.
    #[error("{len} resident entries exceed capacity {capacity}")]
    OverCapacity {
        /// Number of resident entries.
        len: usize,
        /// Configured capacity.
        capacity: usize,
    },
    /// A neighbour link does not point back at the entry that references it.
    #[error("broken link at slot {slot}")]
    BrokenLink {
        /// Arena slot where the inconsistency was found.
        slot: usize,
    },
    /// One chain end is set while the other is empty, or an end has an outward link.
    #[error("chain ends are inconsistent")]
    BrokenEnds,
    /// An indexed key maps to a slot holding a different key, or no entry at all.
    #[error("index entry points at slot {slot} which does not hold its key")]
    StaleIndex {
        /// Slot the index pointed at.
        slot: usize,
    },
}
