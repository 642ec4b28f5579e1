/// Returns the index of the leftmost element of `sorted` that is `>= target`.
///
/// `sorted` must be in non-decreasing order. Returns `None` when the slice is
/// empty or every element is smaller than `target`.
///
/// ```
/// use recency_cache::algorithms::find_ge_idx;
///
/// let arr = [1, 3, 3, 3, 7, 9];
/// assert_eq!(find_ge_idx(&arr, &3), Some(1));
/// assert_eq!(find_ge_idx(&arr, &4), Some(4));
/// assert_eq!(find_ge_idx(&arr, &0), Some(0));
/// assert_eq!(find_ge_idx(&arr, &10), None);
/// ```
pub fn find_ge_idx<T: Ord>(sorted: &[T], target: &T) -> Option<usize> {
    let (mut lo, mut hi) = (0, sorted.len());
    // Invariant: everything before `lo` is < target, everything from `hi` on is >= target.
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if sorted[mid] >= *target {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    (lo < sorted.len()).then_some(lo)
}
