//! Bottom-up merge sort
//!
//! Runs of width `current_size` are merged pairwise from `left_start`, one
//! placed element per step. The pair being merged is copied into `aux` when the
//! merge starts so the array can be overwritten in place.

use crate::automaton::{ArrayView, Automaton, Mark, RunState, View};
use crate::model::array::{ArraySource, SortArray};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    /// `i` and `j` index into `aux`; `k` is the next array slot to write
    Merging {
        l: usize,
        m: usize,
        r: usize,
        i: usize,
        j: usize,
        k: usize,
    },
}

pub struct MergeSort {
    source: ArraySource,
    array: SortArray,
    aux: Vec<i64>,
    current_size: usize,
    left_start: usize,
    phase: Phase,
    run: RunState,
}

impl MergeSort {
    pub fn new(source: ArraySource) -> Self {
        let mut sort = MergeSort {
            source,
            array: SortArray::default(),
            aux: Vec::new(),
            current_size: 1,
            left_start: 0,
            phase: Phase::Idle,
            run: RunState::new("Sort: Merge"),
        };
        sort.reset();
        sort
    }

    pub fn array(&self) -> &SortArray {
        &self.array
    }

    pub fn current_size(&self) -> usize {
        self.current_size
    }

    fn start_merge(&mut self) {
        let n = self.array.len();
        let l = self.left_start;
        let m = (l + self.current_size - 1).min(n - 1);
        let r = (l + 2 * self.current_size - 1).min(n - 1);

        self.aux.clear();
        self.aux.extend_from_slice(&self.array.values()[l..=r]);
        self.phase = Phase::Merging {
            l,
            m,
            r,
            i: 0,
            j: m - l + 1,
            k: l,
        };
    }

    fn end_merge(&mut self) {
        self.left_start += 2 * self.current_size;
        if self.left_start >= self.array.len() {
            self.current_size *= 2;
            self.left_start = 0;
            tracing::debug!(current_size = self.current_size, "merge pass finished");
        }
        self.phase = Phase::Idle;
    }
}

impl Automaton for MergeSort {
    fn run_state(&self) -> &RunState {
        &self.run
    }

    fn run_state_mut(&mut self) -> &mut RunState {
        &mut self.run
    }

    fn reset(&mut self) {
        self.array = SortArray::new(self.source.generate());
        self.aux.clear();
        self.current_size = 1;
        self.left_start = 0;
        self.phase = Phase::Idle;
        self.run.reset();
    }

    fn advance(&mut self) {
        match self.phase {
            Phase::Idle => {
                if self.current_size >= self.array.len() {
                    self.run.finish();
                } else {
                    self.start_merge();
                }
            }
            Phase::Merging {
                l,
                m,
                r,
                mut i,
                mut j,
                k,
            } => {
                let left_len = m - l + 1;
                let total = r - l + 1;

                let take_left = if i < left_len && j < total {
                    self.array.count_comparison();
                    self.aux[i] <= self.aux[j]
                } else {
                    i < left_len
                };
                let value = if take_left {
                    i += 1;
                    self.aux[i - 1]
                } else {
                    j += 1;
                    self.aux[j - 1]
                };
                self.array.set(k, value);

                if k == r {
                    self.end_merge();
                } else {
                    self.phase = Phase::Merging {
                        l,
                        m,
                        r,
                        i,
                        j,
                        k: k + 1,
                    };
                }
            }
        }
    }

    fn view(&self) -> View<'_> {
        let n = self.array.len();
        let (marks, window) = match self.phase {
            Phase::Merging { l, r, k, .. } => (vec![(k, Mark::Cursor)], Some(l..r + 1)),
            Phase::Idle => (Vec::new(), None),
        };

        View::Array(ArrayView {
            values: self.array.values(),
            marks,
            window,
            sorted: if self.run.is_done() { 0..n } else { 0..0 },
            stats: self.array.stats(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::run_to_end;

    #[test]
    fn test_first_pass_merges_pairs() {
        let mut sort = MergeSort::new(ArraySource::Fixed(vec![4, 3, 2, 1]));
        sort.set_running(true);

        // Start, place, place for each of the two pairs
        for _ in 0..6 {
            sort.step();
        }
        assert_eq!(sort.array().values(), &[3, 4, 1, 2]);
        assert_eq!(sort.current_size(), 2);
    }

    #[test]
    fn test_writes_per_level() {
        let mut sort = MergeSort::new(ArraySource::Fixed(vec![4, 3, 2, 1]));
        run_to_end(&mut sort, 100);

        assert!(sort.is_done());
        assert_eq!(sort.array().values(), &[1, 2, 3, 4]);
        // Two levels of four writes each
        assert_eq!(sort.array().stats().writes, 8);
    }

    #[test]
    fn test_odd_length_tail() {
        let mut sort = MergeSort::new(ArraySource::Fixed(vec![5, 1, 4, 2, 3]));
        run_to_end(&mut sort, 1000);
        assert_eq!(sort.array().values(), &[1, 2, 3, 4, 5]);
    }
}
