extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;

/// Computes the prefix function of `s`.
///
/// Entry `i` is the length of the longest proper prefix of `s[..=i]` that is
/// also a suffix of it.
///
/// ```
/// use recency_cache::algorithms::prefix_function;
///
/// assert_eq!(prefix_function(b"abacaba"), vec![0, 0, 1, 0, 1, 2, 3]);
/// ```
pub fn prefix_function<T: PartialEq>(s: &[T]) -> Vec<usize> {
    let mut pi = vec![0; s.len()];
    for i in 1..s.len() {
        let mut k = pi[i - 1];
        while k > 0 && s[i] != s[k] {
            k = pi[k - 1];
        }
        if s[i] == s[k] {
            k += 1;
        }
        pi[i] = k;
    }
    pi
}

/// Returns the start index of every occurrence of `pattern` in `text`,
/// including overlapping ones, in increasing order.
///
/// An empty pattern matches nothing.
///
/// ```
/// use recency_cache::algorithms::kmp_find_all;
///
/// assert_eq!(kmp_find_all(b"bobo", b"bobobo"), vec![0, 2]);
/// ```
pub fn kmp_find_all<T: PartialEq>(pattern: &[T], text: &[T]) -> Vec<usize> {
    let n = pattern.len();
    if n == 0 || n > text.len() {
        return Vec::new();
    }

    let pi = prefix_function(pattern);
    let mut matches = Vec::new();
    let mut matched = 0;
    for (i, item) in text.iter().enumerate() {
        while matched > 0 && *item != pattern[matched] {
            matched = pi[matched - 1];
        }
        if *item == pattern[matched] {
            matched += 1;
        }
        if matched == n {
            matches.push(i + 1 - n);
            // Resume from the longest border so overlapping matches are found.
            matched = pi[n - 1];
        }
    }
    matches
}
