// Bubble sort, one adjacent comparison per step

use crate::automaton::{ArrayView, Automaton, Mark, RunState, View};
use crate::model::array::{ArraySource, SortArray};

pub struct BubbleSort {
    source: ArraySource,
    array: SortArray,
    /// Completed passes; the last `i` elements are in place
    i: usize,
    /// Position of the current adjacent pair
    j: usize,
    run: RunState,
}

impl BubbleSort {
    pub fn new(source: ArraySource) -> Self {
        let mut sort = BubbleSort {
            source,
            array: SortArray::default(),
            i: 0,
            j: 0,
            run: RunState::new("Sort: Bubble"),
        };
        sort.reset();
        sort
    }

    pub fn array(&self) -> &SortArray {
        &self.array
    }

    fn pass_len(&self) -> usize {
        self.array.len().saturating_sub(self.i + 1)
    }
}

impl Automaton for BubbleSort {
    fn run_state(&self) -> &RunState {
        &self.run
    }

    fn run_state_mut(&mut self) -> &mut RunState {
        &mut self.run
    }

    fn reset(&mut self) {
        self.array = SortArray::new(self.source.generate());
        self.i = 0;
        self.j = 0;
        self.run.reset();
    }

    fn advance(&mut self) {
        if self.i >= self.array.len() {
            self.run.finish();
            return;
        }

        if self.j < self.pass_len() {
            if self.array.greater(self.j, self.j + 1) {
                self.array.swap(self.j, self.j + 1);
            }
            self.j += 1;
        } else {
            self.j = 0;
            self.i += 1;
        }
    }

    fn view(&self) -> View<'_> {
        let n = self.array.len();
        let marks = if !self.run.is_done() && self.j < self.pass_len() {
            vec![(self.j, Mark::Compare), (self.j + 1, Mark::Compare)]
        } else {
            Vec::new()
        };
        let sorted = if self.run.is_done() {
            0..n
        } else {
            n.saturating_sub(self.i)..n
        };

        View::Array(ArrayView {
            values: self.array.values(),
            marks,
            window: None,
            sorted,
            stats: self.array.stats(),
        })
    }
}
