//! Insertion sort with one shift per step
//!
//! The reference loop moves `key = a[i]` left by shifting larger elements one
//! slot right. Here the gap left by the key is tracked as `hole`: each step
//! either shifts `a[hole-1]` into the hole or drops the key into it and loads
//! the next key.

use crate::automaton::{ArrayView, Automaton, Mark, RunState, View};
use crate::model::array::{ArraySource, SortArray};

pub struct InsertionSort {
    source: ArraySource,
    array: SortArray,
    /// Index of the key being inserted; `0..i` is sorted apart from the hole
    i: usize,
    hole: usize,
    key: i64,
    run: RunState,
}

impl InsertionSort {
    pub fn new(source: ArraySource) -> Self {
        let mut sort = InsertionSort {
            source,
            array: SortArray::default(),
            i: 1,
            hole: 1,
            key: 0,
            run: RunState::new("Sort: Insertion"),
        };
        sort.reset();
        sort
    }

    pub fn array(&self) -> &SortArray {
        &self.array
    }

    fn load_key(&mut self) {
        if self.i < self.array.len() {
            self.key = self.array.get(self.i);
            self.hole = self.i;
        }
    }
}

impl Automaton for InsertionSort {
    fn run_state(&self) -> &RunState {
        &self.run
    }

    fn run_state_mut(&mut self) -> &mut RunState {
        &mut self.run
    }

    fn reset(&mut self) {
        self.array = SortArray::new(self.source.generate());
        self.i = 1;
        self.hole = 1;
        self.key = 0;
        self.load_key();
        self.run.reset();
    }

    fn advance(&mut self) {
        if self.i < self.array.len() {
            if self.hole > 0 && self.array.greater_than_value(self.hole - 1, self.key) {
                let shifted = self.array.get(self.hole - 1);
                self.array.set(self.hole, shifted);
                self.hole -= 1;
            } else {
                self.array.set(self.hole, self.key);
                self.i += 1;
                self.load_key();
            }
        }

        if self.i >= self.array.len() {
            self.run.finish();
        }
    }

    fn view(&self) -> View<'_> {
        let n = self.array.len();
        let mut marks = Vec::new();
        if !self.run.is_done() && self.i < n {
            marks.push((self.hole, Mark::Cursor));
            if self.hole > 0 {
                marks.push((self.hole - 1, Mark::Compare));
            }
        }

        View::Array(ArrayView {
            values: self.array.values(),
            marks,
            window: (!self.run.is_done() && self.i < n).then(|| 0..self.i + 1),
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
    fn test_shift_then_place() {
        let mut sort = InsertionSort::new(ArraySource::Fixed(vec![2, 3, 1]));
        sort.set_running(true);

        // 3 stays put
        sort.step();
        assert_eq!(sort.i, 2);
        // 1 shifts past 3, then past 2, then lands
        sort.step();
        assert_eq!(sort.array().values(), &[2, 3, 3]);
        sort.step();
        assert_eq!(sort.array().values(), &[2, 2, 3]);
        sort.step();
        assert_eq!(sort.array().values(), &[1, 2, 3]);
        assert!(sort.is_done());
    }

    #[test]
    fn test_sorted_input_is_linear() {
        let mut sort = InsertionSort::new(ArraySource::Fixed((0..50).collect()));
        let steps = run_to_end(&mut sort, 10_000);

        assert_eq!(steps, 49);
        assert_eq!(sort.array().stats().comparisons, 49);
    }

    #[test]
    fn test_single_element_finishes_on_first_step() {
        let mut sort = InsertionSort::new(ArraySource::Fixed(vec![7]));
        assert_eq!(run_to_end(&mut sort, 10), 1);
        assert!(sort.is_done());
    }
}
