// Selection sort, one scan comparison per step

use crate::automaton::{ArrayView, Automaton, Mark, RunState, View};
use crate::model::array::{ArraySource, SortArray};

pub struct SelectionSort {
    source: ArraySource,
    array: SortArray,
    i: usize,
    j: usize,
    min: usize,
    run: RunState,
}

impl SelectionSort {
    pub fn new(source: ArraySource) -> Self {
        let mut sort = SelectionSort {
            source,
            array: SortArray::default(),
            i: 0,
            j: 1,
            min: 0,
            run: RunState::new("Sort: Selection"),
        };
        sort.reset();
        sort
    }

    pub fn array(&self) -> &SortArray {
        &self.array
    }
}

impl Automaton for SelectionSort {
    fn run_state(&self) -> &RunState {
        &self.run
    }

    fn run_state_mut(&mut self) -> &mut RunState {
        &mut self.run
    }

    fn reset(&mut self) {
        self.array = SortArray::new(self.source.generate());
        self.i = 0;
        self.j = 1;
        self.min = 0;
        self.run.reset();
    }

    fn advance(&mut self) {
        let n = self.array.len();
        if self.i + 1 >= n {
            self.run.finish();
            return;
        }

        if self.j < n {
            if self.array.less(self.j, self.min) {
                self.min = self.j;
            }
            self.j += 1;
        } else {
            if self.min != self.i {
                self.array.swap(self.min, self.i);
            }
            self.i += 1;
            self.min = self.i;
            self.j = self.i + 1;
        }
    }

    fn view(&self) -> View<'_> {
        let n = self.array.len();
        let mut marks = Vec::new();
        if !self.run.is_done() && self.i < n {
            marks.push((self.i, Mark::Cursor));
            marks.push((self.min, Mark::Pivot));
            if self.j < n {
                marks.push((self.j, Mark::Compare));
            }
        }

        View::Array(ArrayView {
            values: self.array.values(),
            marks,
            window: None,
            sorted: if self.run.is_done() { 0..n } else { 0..self.i.min(n) },
            stats: self.array.stats(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::run_to_end;

    #[test]
    fn test_minimum_moves_to_front_after_scan() {
        let mut sort = SelectionSort::new(ArraySource::Fixed(vec![4, 1, 3, 2]));
        sort.set_running(true);

        // Three comparisons, then the swap step
        for _ in 0..4 {
            sort.step();
        }
        assert_eq!(sort.array().values(), &[1, 4, 3, 2]);
        assert_eq!(sort.i, 1);
    }

    #[test]
    fn test_exact_comparison_count() {
        let mut sort = SelectionSort::new(ArraySource::Fixed(vec![9, 8, 7, 6, 5]));
        run_to_end(&mut sort, 1000);

        assert_eq!(sort.array().values(), &[5, 6, 7, 8, 9]);
        assert_eq!(sort.array().stats().comparisons, 10);
        assert!(sort.array().stats().swaps <= 4);
    }
}
