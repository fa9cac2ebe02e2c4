//! Sortable array with operation counters
//!
//! [`SortArray`] is the only data a sorting automaton mutates. Every comparison,
//! swap and single-element write goes through it so the counters in
//! [`SortStats`] reflect the exact work done, step by step.
//!
//! Input comes from an [`ArraySource`]: either a fixed sequence or random values
//! drawn from a [`StdRng`]. A seeded source regenerates the same values on every
//! reset; an unseeded one draws from entropy each time.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Where a sorting automaton gets its input on `reset()`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArraySource {
    Random {
        len: usize,
        min: i64,
        max: i64,
        seed: Option<u64>,
    },
    Fixed(Vec<i64>),
}

impl ArraySource {
    /// Random source with the host's default size and value range
    pub fn random(seed: Option<u64>) -> Self {
        ArraySource::Random {
            len: DEFAULT_LEN,
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            seed,
        }
    }

    /// Produce a fresh input sequence
    pub fn generate(&self) -> Vec<i64> {
        match self {
            ArraySource::Fixed(values) => values.clone(),
            ArraySource::Random {
                len,
                min,
                max,
                seed,
            } => {
                let mut rng = match seed {
                    Some(seed) => StdRng::seed_from_u64(*seed),
                    None => StdRng::from_entropy(),
                };
                // An inverted range degenerates to a constant array
                let (lo, hi) = if min <= max { (*min, *max) } else { (*max, *min) };
                (0..*len).map(|_| rng.gen_range(lo..=hi)).collect()
            }
        }
    }
}

impl Default for ArraySource {
    fn default() -> Self {
        ArraySource::random(None)
    }
}

pub const DEFAULT_LEN: usize = 100;
pub const DEFAULT_MIN: i64 = 10;
pub const DEFAULT_MAX: i64 = 100;

/// Work counters for one run of a sort
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortStats {
    pub comparisons: usize,
    pub swaps: usize,
    pub writes: usize,
}

/// The array under sort
#[derive(Debug, Clone, Default)]
pub struct SortArray {
    values: Vec<i64>,
    stats: SortStats,
}

impl SortArray {
    pub fn new(values: Vec<i64>) -> Self {
        SortArray {
            values,
            stats: SortStats::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn stats(&self) -> SortStats {
        self.stats
    }

    /// Read a value without counting it
    pub fn get(&self, index: usize) -> i64 {
        self.values[index]
    }

    /// `values[a] > values[b]`, counted as one comparison
    pub fn greater(&mut self, a: usize, b: usize) -> bool {
        self.stats.comparisons += 1;
        self.values[a] > self.values[b]
    }

    /// `values[a] < values[b]`, counted as one comparison
    pub fn less(&mut self, a: usize, b: usize) -> bool {
        self.stats.comparisons += 1;
        self.values[a] < self.values[b]
    }

    /// Compare a stored value against an external key (pivot, insertion key)
    pub fn greater_than_value(&mut self, index: usize, key: i64) -> bool {
        self.stats.comparisons += 1;
        self.values[index] > key
    }

    pub fn less_than_value(&mut self, index: usize, key: i64) -> bool {
        self.stats.comparisons += 1;
        self.values[index] < key
    }

    /// Count a comparison made against values held outside the array
    pub fn count_comparison(&mut self) {
        self.stats.comparisons += 1;
    }

    pub fn swap(&mut self, a: usize, b: usize) {
        self.stats.swaps += 1;
        self.values.swap(a, b);
    }

    pub fn set(&mut self, index: usize, value: i64) {
        self.stats.writes += 1;
        self.values[index] = value;
    }

    /// Check if the whole array is non-decreasing
    pub fn is_sorted(&self) -> bool {
        self.values.windows(2).all(|w| w[0] <= w[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_source_is_reproducible() {
        let source = ArraySource::Random {
            len: 32,
            min: 10,
            max: 20,
            seed: Some(7),
        };
        let a = source.generate();
        let b = source.generate();

        assert_eq!(a, b);
        assert_eq!(a.len(), 32);
        assert!(a.iter().all(|v| (10..=20).contains(v)));
    }

    #[test]
    fn test_counters() {
        let mut array = SortArray::new(vec![3, 1, 2]);
        assert!(array.greater(0, 1));
        array.swap(0, 1);
        array.set(2, 5);

        assert_eq!(array.values(), &[1, 3, 5]);
        assert_eq!(
            array.stats(),
            SortStats {
                comparisons: 1,
                swaps: 1,
                writes: 1
            }
        );
        assert!(array.is_sorted());
    }

    #[test]
    fn test_inverted_range_still_generates() {
        let source = ArraySource::Random {
            len: 4,
            min: 9,
            max: 3,
            seed: Some(1),
        };
        assert!(source.generate().iter().all(|v| (3..=9).contains(v)));
    }
}
