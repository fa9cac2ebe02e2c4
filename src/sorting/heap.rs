//! Heap sort
//!
//! A max-heap is built in place by sifting down `n/2-1 ..= 0`, then the root is
//! repeatedly swapped to the end of the shrinking heap and sifted down again.
//! Each `Heapifying` step resolves one level: it finds the largest of a node and
//! its children and swaps if needed, continuing into that child. The slot the
//! child was promoted into stays highlighted for the next level.

use crate::automaton::{ArrayView, Automaton, Mark, RunState, View};
use crate::model::array::{ArraySource, SortArray};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Building,
    /// `promoted`: parent slot that took the larger child's value one level up
    Heapifying { root: usize, promoted: Option<usize> },
    Sorting,
}

pub struct HeapSort {
    source: ArraySource,
    array: SortArray,
    /// Next build root, counting down to 0
    next_build: Option<usize>,
    heap_size: usize,
    phase: Phase,
    run: RunState,
}

impl HeapSort {
    pub fn new(source: ArraySource) -> Self {
        let mut sort = HeapSort {
            source,
            array: SortArray::default(),
            next_build: None,
            heap_size: 0,
            phase: Phase::Idle,
            run: RunState::new("Sort: Heap"),
        };
        sort.reset();
        sort
    }

    pub fn array(&self) -> &SortArray {
        &self.array
    }

    pub fn heap_size(&self) -> usize {
        self.heap_size
    }

    /// Check the max-heap property over `0..heap_size`
    pub fn is_heap(&self) -> bool {
        let values = self.array.values();
        (1..self.heap_size).all(|child| values[(child - 1) / 2] >= values[child])
    }

    fn sift_level(&mut self, root: usize) {
        let mut largest = root;
        let left = 2 * root + 1;
        let right = left + 1;

        if left < self.heap_size && self.array.greater(left, largest) {
            largest = left;
        }
        if right < self.heap_size && self.array.greater(right, largest) {
            largest = right;
        }

        if largest != root {
            self.array.swap(root, largest);
            self.phase = Phase::Heapifying {
                root: largest,
                promoted: Some(root),
            };
        } else if self.next_build.is_some() {
            self.phase = Phase::Building;
        } else {
            self.phase = Phase::Sorting;
        }
    }
}

impl Automaton for HeapSort {
    fn run_state(&self) -> &RunState {
        &self.run
    }

    fn run_state_mut(&mut self) -> &mut RunState {
        &mut self.run
    }

    fn reset(&mut self) {
        self.array = SortArray::new(self.source.generate());
        self.heap_size = self.array.len();
        self.next_build = None;
        self.phase = Phase::Idle;
        self.run.reset();
    }

    fn advance(&mut self) {
        match self.phase {
            Phase::Idle => {
                self.next_build = (self.array.len() / 2).checked_sub(1);
                self.phase = Phase::Building;
            }
            Phase::Building => match self.next_build {
                Some(root) => {
                    self.next_build = root.checked_sub(1);
                    self.phase = Phase::Heapifying {
                        root,
                        promoted: None,
                    };
                }
                None => {
                    tracing::debug!(heap_size = self.heap_size, "heap built");
                    self.phase = Phase::Sorting;
                }
            },
            Phase::Heapifying { root, .. } => self.sift_level(root),
            Phase::Sorting => {
                if self.heap_size == 0 {
                    self.run.finish();
                    return;
                }
                if self.heap_size > 1 {
                    self.array.swap(0, self.heap_size - 1);
                }
                self.heap_size -= 1;
                self.phase = Phase::Heapifying {
                    root: 0,
                    promoted: None,
                };
            }
        }
    }

    fn view(&self) -> View<'_> {
        let n = self.array.len();
        let marks = match self.phase {
            Phase::Heapifying { root, promoted } => {
                let mut marks = vec![(root, Mark::Cursor)];
                for child in [2 * root + 1, 2 * root + 2] {
                    if child < self.heap_size {
                        marks.push((child, Mark::Compare));
                    }
                }
                if let Some(parent) = promoted {
                    marks.push((parent, Mark::Pivot));
                }
                marks
            }
            _ => Vec::new(),
        };

        View::Array(ArrayView {
            values: self.array.values(),
            marks,
            window: Some(0..self.heap_size),
            sorted: if self.run.is_done() {
                0..n
            } else {
                self.heap_size..n
            },
            stats: self.array.stats(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::run_to_end;

    #[test]
    fn test_build_phase_yields_max_heap() {
        let mut sort = HeapSort::new(ArraySource::Fixed(vec![1, 5, 3, 9, 7, 2, 8]));
        sort.set_running(true);
        while sort.phase != Phase::Sorting {
            sort.step();
        }

        assert_eq!(sort.heap_size(), 7);
        assert!(sort.is_heap());
        assert_eq!(sort.array().values()[0], 9);
    }

    #[test]
    fn test_promoted_slot_is_marked_after_swap() {
        let mut sort = HeapSort::new(ArraySource::Fixed(vec![1, 3, 2]));
        sort.set_running(true);
        // Idle -> Building -> Heapifying at 0 -> swap 3 up
        for _ in 0..3 {
            sort.step();
        }
        assert_eq!(sort.array().values(), &[3, 1, 2]);
        match sort.view() {
            View::Array(view) => {
                assert_eq!(view.mark_at(0), Some(Mark::Pivot));
                assert_eq!(view.mark_at(1), Some(Mark::Cursor));
            }
            _ => panic!("expected an array view"),
        }

        run_to_end(&mut sort, 100);
        assert!(sort.is_done());
    }

    #[test]
    fn test_sorts_with_duplicates() {
        let mut sort = HeapSort::new(ArraySource::Fixed(vec![3, 3, 1, 2, 3, 1]));
        run_to_end(&mut sort, 10_000);

        assert!(sort.is_done());
        assert_eq!(sort.heap_size(), 0);
        assert_eq!(sort.array().values(), &[1, 1, 2, 3, 3, 3]);
    }

    #[test]
    fn test_single_element() {
        let mut sort = HeapSort::new(ArraySource::Fixed(vec![4]));
        run_to_end(&mut sort, 100);
        assert!(sort.is_done());
        assert_eq!(sort.array().values(), &[4]);
    }
}
