//! Quick sort with an explicit range stack
//!
//! Lomuto partitioning around the last element of each range. The recursion
//! of the reference algorithm is replaced by a stack of pending `(low, high)`
//! ranges; the right range is pushed first so the left one is handled next.

use crate::automaton::{ArrayView, Automaton, Mark, RunState, View};
use crate::model::array::{ArraySource, SortArray};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Partitioning {
        low: usize,
        high: usize,
        pivot: i64,
        /// Next slot for an element below the pivot
        store: usize,
        scan: usize,
    },
}

pub struct QuickSort {
    source: ArraySource,
    array: SortArray,
    stack: Vec<(usize, usize)>,
    phase: Phase,
    run: RunState,
}

impl QuickSort {
    pub fn new(source: ArraySource) -> Self {
        let mut sort = QuickSort {
            source,
            array: SortArray::default(),
            stack: Vec::new(),
            phase: Phase::Idle,
            run: RunState::new("Sort: Quick"),
        };
        sort.reset();
        sort
    }

    pub fn array(&self) -> &SortArray {
        &self.array
    }

    /// Ranges still waiting to be partitioned
    pub fn pending(&self) -> &[(usize, usize)] {
        &self.stack
    }
}

impl Automaton for QuickSort {
    fn run_state(&self) -> &RunState {
        &self.run
    }

    fn run_state_mut(&mut self) -> &mut RunState {
        &mut self.run
    }

    fn reset(&mut self) {
        self.array = SortArray::new(self.source.generate());
        self.stack.clear();
        if !self.array.is_empty() {
            self.stack.push((0, self.array.len() - 1));
        }
        self.phase = Phase::Idle;
        self.run.reset();
    }

    fn advance(&mut self) {
        match self.phase {
            Phase::Idle => match self.stack.pop() {
                None => self.run.finish(),
                Some((low, high)) if low < high => {
                    self.phase = Phase::Partitioning {
                        low,
                        high,
                        pivot: self.array.get(high),
                        store: low,
                        scan: low,
                    };
                }
                // Single-element range, already in place
                Some(_) => {}
            },
            Phase::Partitioning {
                low,
                high,
                pivot,
                mut store,
                scan,
            } => {
                if scan < high {
                    if self.array.less_than_value(scan, pivot) {
                        if store != scan {
                            self.array.swap(store, scan);
                        }
                        store += 1;
                    }
                    self.phase = Phase::Partitioning {
                        low,
                        high,
                        pivot,
                        store,
                        scan: scan + 1,
                    };
                    return;
                }

                if store != high {
                    self.array.swap(store, high);
                }
                let p = store;
                if p + 1 < high {
                    self.stack.push((p + 1, high));
                }
                if low + 1 < p {
                    self.stack.push((low, p - 1));
                }
                tracing::debug!(low, high, pivot_index = p, "partition finished");
                self.phase = Phase::Idle;
            }
        }
    }

    fn view(&self) -> View<'_> {
        let n = self.array.len();
        let (marks, window) = match self.phase {
            Phase::Partitioning {
                low,
                high,
                store,
                scan,
                ..
            } => {
                let mut marks = vec![(high, Mark::Pivot), (store, Mark::Cursor)];
                if scan < high {
                    marks.push((scan, Mark::Compare));
                }
                (marks, Some(low..high + 1))
            }
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
    fn test_three_elements_step_by_step() {
        let mut sort = QuickSort::new(ArraySource::Fixed(vec![3, 1, 2]));
        sort.set_running(true);

        // Pop, two scans, pivot placement
        for _ in 0..4 {
            sort.step();
        }
        assert_eq!(sort.array().values(), &[1, 2, 3]);
        assert!(sort.pending().is_empty());
        assert!(!sort.is_done());

        sort.step();
        assert!(sort.is_done());
        assert_eq!(sort.steps_taken(), 5);
    }

    #[test]
    fn test_duplicates_and_sorted_input() {
        let mut sort = QuickSort::new(ArraySource::Fixed(vec![2, 2, 1, 2, 1, 1]));
        run_to_end(&mut sort, 10_000);
        assert_eq!(sort.array().values(), &[1, 1, 1, 2, 2, 2]);

        let mut sort = QuickSort::new(ArraySource::Fixed((0..20).collect()));
        run_to_end(&mut sort, 10_000);
        assert!(sort.array().is_sorted());
        // Lomuto on sorted input degrades to n(n-1)/2 comparisons
        assert_eq!(sort.array().stats().comparisons, 190);
    }

    #[test]
    fn test_empty_array_finishes() {
        let mut sort = QuickSort::new(ArraySource::Fixed(Vec::new()));
        assert_eq!(run_to_end(&mut sort, 10), 1);
        assert!(sort.is_done());
    }
}
