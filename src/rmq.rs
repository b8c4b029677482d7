//! Range-Minimum-Query oracle (C1).
//!
//! Sparse-table preprocessing: `M[k][i]` holds the index of the minimum value
//! in `S[i .. i + 2^k)`. Build is `O(n log n)` time and space; a query combines
//! two overlapping power-of-two windows and answers in `O(1)`.

/// A sparse table over a fixed sequence `S`, answering range-minimum index
/// queries in O(1) after an O(n log n) build.
///
/// Ties are broken by the smaller index — this is the tie-break decision
/// recorded in DESIGN.md ("Open Question resolutions" #2): the RMQ oracle is
/// the only place in this crate where two candidates can legitimately tie
/// (equal values), and it picks the leftmost one, consistently, everywhere it
/// is used.
pub struct Rmq<T> {
    values: Vec<T>,
    // table[k][i] = index of the minimum in values[i .. i + 2^k)
    table: Vec<Vec<usize>>,
}

impl<T: Ord + Copy> Rmq<T> {
    /// Build the sparse table over `values`. `values` must be non-empty.
    pub fn build(values: &[T]) -> Self {
        assert!(!values.is_empty(), "Rmq::build: empty input is a programming error");

        let n = values.len();
        let levels = n.ilog2() as usize + 1;
        let mut table = vec![vec![0usize; n]; levels];
        for (i, slot) in table[0].iter_mut().enumerate() {
            *slot = i;
        }

        for k in 1..levels {
            let span = 1usize << k;
            let half = span >> 1;
            for i in 0..=(n - span) {
                let left = table[k - 1][i];
                let right = table[k - 1][i + half];
                table[k][i] = Self::smaller_index(values, left, right);
            }
        }

        Self {
            values: values.to_vec(),
            table,
        }
    }

    fn smaller_index(values: &[T], a: usize, b: usize) -> usize {
        if values[b] < values[a] {
            b
        } else {
            a
        }
    }

    /// Index of a minimum value in `S[a..b)`. Querying an empty range (`a >=
    /// b`) or a range outside the built sequence is a programming error.
    pub fn query(&self, a: usize, b: usize) -> usize {
        assert!(a < b, "Rmq::query: empty range [{a}, {b}) is a programming error");
        assert!(b <= self.values.len(), "Rmq::query: range exceeds sequence length");

        let len = b - a;
        let k = len.ilog2() as usize;
        let span = 1usize << k;
        let left = self.table[k][a];
        let right = self.table[k][b - span];
        Self::smaller_index(&self.values, left, right)
    }

    /// The minimum value itself on `S[a..b)`.
    pub fn query_value(&self, a: usize, b: usize) -> T {
        self.values[self.query(a, b)]
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_element() {
        let rmq = Rmq::build(&[42]);
        assert_eq!(rmq.query(0, 1), 0);
    }

    #[test]
    fn finds_minimum_index() {
        let values = [4, 2, 5, 3, 1, 6];
        let rmq = Rmq::build(&values);
        assert_eq!(rmq.query(0, 6), 4); // value 1
        assert_eq!(rmq.query(0, 3), 1); // value 2
        assert_eq!(rmq.query(2, 4), 3); // value 3
        assert_eq!(rmq.query(3, 6), 4); // value 1
    }

    #[test]
    fn ties_broken_by_smallest_index() {
        let values = [3, 1, 2, 1, 5];
        let rmq = Rmq::build(&values);
        // both index 1 and 3 hold the minimum value 1 over [0, 5)
        assert_eq!(rmq.query(0, 5), 1);
        assert_eq!(rmq.query(2, 5), 3);
    }

    #[test]
    fn full_range_non_power_of_two() {
        let values = [9, 8, 7, 6, 5];
        let rmq = Rmq::build(&values);
        assert_eq!(rmq.query(0, 5), 4);
        assert_eq!(rmq.query(1, 4), 3);
    }

    #[test]
    #[should_panic]
    fn empty_range_panics() {
        let rmq = Rmq::build(&[1, 2, 3]);
        rmq.query(2, 2);
    }
}
