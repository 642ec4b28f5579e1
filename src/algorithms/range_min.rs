extern crate alloc;

use alloc::vec::Vec;

/// Static range-minimum oracle backed by a sparse table.
///
/// Row `j` of the table holds the minimum of every window of length `2^j`.
/// Any range `[a, b]` is covered by two such windows of the largest power of
/// two not exceeding its length, which may overlap; since `min` is
/// idempotent the overlap does not matter.
///
/// ```
/// use recency_cache::algorithms::MinOracle;
///
/// let oracle = MinOracle::new(&[5, 2, 8, 6, 1, 9]);
/// assert_eq!(oracle.min_query(0, 3), Some(&2));
/// assert_eq!(oracle.min_query(2, 5), Some(&1));
/// assert_eq!(oracle.min_query(4, 2), None);
/// ```
#[derive(Debug, Clone)]
pub struct MinOracle<T> {
    table: Vec<Vec<T>>,
}

impl<T: Ord + Clone> MinOracle<T> {
    /// Precomputes window minima for `arr` in O(n log n).
    pub fn new(arr: &[T]) -> Self {
        let mut table = Vec::new();
        if arr.is_empty() {
            return MinOracle { table };
        }
        table.push(arr.to_vec());

        let mut width = 1;
        while width * 2 <= arr.len() {
            let prev = &table[table.len() - 1];
            let row: Vec<T> = (0..=arr.len() - width * 2)
                .map(|i| core::cmp::min(&prev[i], &prev[i + width]).clone())
                .collect();
            table.push(row);
            width *= 2;
        }
        MinOracle { table }
    }

    /// Number of elements in the underlying array.
    pub fn len(&self) -> usize {
        self.table.first().map_or(0, Vec::len)
    }

    /// Returns true if the oracle was built over an empty array.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the minimum of `arr[a..=b]` in O(1).
    ///
    /// Returns `None` if `a > b` or `b` is out of range.
    pub fn min_query(&self, a: usize, b: usize) -> Option<&T> {
        if a > b || b >= self.len() {
            return None;
        }
        let span = b - a + 1;
        let level = (usize::BITS - 1 - span.leading_zeros()) as usize;
        let row = &self.table[level];
        Some(core::cmp::min(&row[a], &row[b + 1 - (1 << level)]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_empty_array() {
        let oracle: MinOracle<i32> = MinOracle::new(&[]);
        assert!(oracle.is_empty());
        assert_eq!(oracle.min_query(0, 0), None);
    }

    #[test]
    fn test_single_element() {
        let oracle = MinOracle::new(&[42]);
        assert_eq!(oracle.len(), 1);
        assert_eq!(oracle.min_query(0, 0), Some(&42));
        assert_eq!(oracle.min_query(0, 1), None);
    }

    #[test]
    fn test_all_ranges_match_brute_force() {
        let arr = vec![
            684, 559, 629, 192, 835, 763, 707, 359, 9, 723, 277, 754, 804, 599, 70, 472, 600,
            396, 314, 705, 486, 551, 87, 174, 600, 849, 677, 537, 845, 72, 777, 916, 115, 976,
            755, 709, 847, 431, 448, 850, 99, 984, 177, 755, 797, 659, 147, 910, 423, 288,
        ];
        let oracle = MinOracle::new(&arr);
        for a in 0..arr.len() {
            for b in a..arr.len() {
                let expected = arr[a..=b].iter().min();
                assert_eq!(oracle.min_query(a, b), expected, "range {}..={}", a, b);
            }
        }
    }

    #[test]
    fn test_string_elements() {
        let words = ["pear", "apple", "fig", "banana"];
        let oracle = MinOracle::new(&words);
        assert_eq!(oracle.min_query(0, 0), Some(&"pear"));
        assert_eq!(oracle.min_query(2, 3), Some(&"banana"));
        assert_eq!(oracle.min_query(0, 3), Some(&"apple"));
    }
}
