//! Standalone Search Algorithms
//!
//! Pure, stateless helpers that sit next to the cache in this crate. None of
//! them is used by [`RecencyCache`](crate::RecencyCache); each is a single
//! call over a fixed input.
//!
//! | Function / Type | Query | Cost |
//! |-----------------|-------|------|
//! | [`find_ge_idx`] | leftmost index with `arr[i] >= target` in a sorted slice | O(log n) |
//! | [`MinOracle`] | minimum of `arr[a..=b]` on a static slice | O(n log n) build, O(1) query |
//! | [`kmp_find_all`] | every start of a pattern in a text, overlaps included | O(n + m) |

mod binary_search;
mod kmp;
mod range_min;

pub use binary_search::find_ge_idx;
pub use kmp::{kmp_find_all, prefix_function};
pub use range_min::MinOracle;
