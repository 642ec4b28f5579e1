//! Configuration for the recency cache.
//!
//! The cache has a single sizing parameter: `capacity`, the maximum number of
//! resident entries. It is fixed at construction and cannot be resized.
//!
//! # Sizing Guidelines
//!
//! Each resident entry costs the key and value plus two slot handles for the
//! recency chain and one index slot:
//!
//! ```text
//! Total Memory ≈ capacity × (size_of::<K>() + size_of::<V>() + overhead_per_entry)
//! overhead_per_entry ≈ 40-64 bytes (chain links, arena slot tag, index bucket)
//! ```
//!
//! # Examples
//!
//! ```
//! use recency_cache::config::RecencyCacheConfig;
//! use recency_cache::RecencyCache;
//!
//! let config = RecencyCacheConfig::new(10_000);
//! let cache: RecencyCache<String, Vec<u8>> = RecencyCache::init(config, None).unwrap();
//! assert_eq!(cache.cap().get(), 10_000);
//!
//! // A zero capacity is rejected rather than producing an unusable cache.
//! assert!(RecencyCacheConfig::new(0).validate().is_err());
//! ```

use crate::error::ConfigError;
use core::fmt;
use core::num::NonZeroUsize;

/// Configuration for a [`RecencyCache`](crate::RecencyCache).
///
/// # Fields
///
/// - `capacity`: Maximum number of entries the cache can hold. Must be at
///   least 1; checked by [`validate`](Self::validate).
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct RecencyCacheConfig {
    /// Maximum number of key-value pairs the cache can hold.
    pub capacity: usize,
}

impl RecencyCacheConfig {
    /// Creates a configuration with the given capacity. Not validated until use.
    #[inline]
    pub const fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Checks the configuration and returns the capacity as a `NonZeroUsize`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidConfiguration`] if `capacity` is zero.
    pub fn validate(&self) -> Result<NonZeroUsize, ConfigError> {
        NonZeroUsize::new(self.capacity).ok_or(ConfigError::InvalidConfiguration {
            reason: "capacity must be at least 1",
        })
    }
}

impl fmt::Debug for RecencyCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecencyCacheConfig")
            .field("capacity", &self.capacity)
            .finish()
    }
}
