//! The step automaton contract
//!
//! Every algorithm in this crate is an [`Automaton`]: a value that performs one
//! minimal unit of algorithmic work per [`Automaton::step`] call and can be
//! observed between calls through [`Automaton::view`].
//!
//! # Lifecycle
//!
//! ```text
//! reset() ──► paused ──toggle_run()──► running ──step()*──► done
//!               ▲                         │
//!               └────────toggle_run()─────┘
//! ```
//!
//! - `reset()` rebuilds input and control variables; callable at any time.
//! - `step()` is a no-op unless running and not done.
//! - The step that reaches the terminal condition also stops the run.
//!
//! The bookkeeping shared by all automata lives in [`RunState`]; each
//! implementation only supplies [`Automaton::reset`], [`Automaton::advance`] and
//! [`Automaton::view`].

pub mod view;

pub use view::{ArrayView, EdgeMark, GraphView, Mark, MatrixView, TreeView, View};

/// Run flags and step counter shared by every automaton
#[derive(Debug, Clone)]
pub struct RunState {
    name: &'static str,
    running: bool,
    done: bool,
    steps: usize,
}

impl RunState {
    pub fn new(name: &'static str) -> Self {
        RunState {
            name,
            running: false,
            done: false,
            steps: 0,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Back to paused, not done, zero steps
    pub fn reset(&mut self) {
        self.running = false;
        self.done = false;
        self.steps = 0;
        tracing::info!(algorithm = self.name, "reset");
    }

    pub fn set_running(&mut self, running: bool) {
        if !self.done {
            self.running = running;
        }
    }

    /// Count a step if one is allowed right now
    pub fn begin_step(&mut self) -> bool {
        if self.running && !self.done {
            self.steps += 1;
            true
        } else {
            false
        }
    }

    /// Mark the terminal condition reached
    pub fn finish(&mut self) {
        self.done = true;
        self.running = false;
        tracing::info!(algorithm = self.name, steps = self.steps, "complete");
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn steps(&self) -> usize {
        self.steps
    }
}

/// Terminal status reported once an automaton is done
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The algorithm ran to its normal end
    Complete,
    /// An ordering stopped short of covering every node (cycle under Kahn's)
    Incomplete { produced: usize, expected: usize },
    /// Bellman-Ford found an edge still relaxable after |V|-1 passes
    NegativeCycle,
    Found(i64),
    NotFound(i64),
    Inserted(i64),
    AlreadyPresent(i64),
    Deleted(i64),
}

impl Outcome {
    /// Short label for status lines
    pub fn label(&self) -> String {
        match self {
            Outcome::Complete => "complete".to_string(),
            Outcome::Incomplete { produced, expected } => {
                format!("incomplete: {}/{} nodes ordered (cycle)", produced, expected)
            }
            Outcome::NegativeCycle => "negative cycle detected".to_string(),
            Outcome::Found(v) => format!("{} found", v),
            Outcome::NotFound(v) => format!("{} not found", v),
            Outcome::Inserted(v) => format!("{} inserted", v),
            Outcome::AlreadyPresent(v) => format!("{} already present", v),
            Outcome::Deleted(v) => format!("{} deleted", v),
        }
    }
}

/// A resumable, observable algorithm
pub trait Automaton {
    fn run_state(&self) -> &RunState;

    fn run_state_mut(&mut self) -> &mut RunState;

    /// Rebuild input data and control variables; leaves the automaton paused
    fn reset(&mut self);

    /// Perform one unit of work. Only called while running and not done.
    fn advance(&mut self);

    /// Borrow the observable state
    fn view(&self) -> View<'_>;

    /// Terminal status; `None` while not done
    fn outcome(&self) -> Option<Outcome> {
        self.is_done().then_some(Outcome::Complete)
    }

    fn name(&self) -> &'static str {
        self.run_state().name()
    }

    fn step(&mut self) {
        if self.run_state_mut().begin_step() {
            self.advance();
        }
    }

    fn set_running(&mut self, running: bool) {
        self.run_state_mut().set_running(running);
    }

    fn toggle_run(&mut self) {
        let running = !self.is_running();
        self.set_running(running);
    }

    fn is_running(&self) -> bool {
        self.run_state().is_running()
    }

    fn is_done(&self) -> bool {
        self.run_state().is_done()
    }

    fn steps_taken(&self) -> usize {
        self.run_state().steps()
    }
}

/// Run an automaton until it is done or `max_steps` more steps were taken
///
/// Returns the number of steps taken by this call. The automaton is left
/// paused if it did not finish.
pub fn run_to_end(automaton: &mut dyn Automaton, max_steps: usize) -> usize {
    automaton.set_running(true);
    let mut taken = 0;
    while !automaton.is_done() && taken < max_steps {
        automaton.step();
        taken += 1;
    }
    automaton.set_running(false);
    taken
}

/// Take exactly one step regardless of the run flag
///
/// Used by the host for single-stepping while paused.
pub fn single_step(automaton: &mut dyn Automaton) {
    if automaton.is_done() {
        return;
    }
    let was_running = automaton.is_running();
    automaton.set_running(true);
    automaton.step();
    if !was_running {
        automaton.set_running(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_state_lifecycle() {
        let mut run = RunState::new("test");
        assert!(!run.begin_step());

        run.set_running(true);
        assert!(run.begin_step());
        assert_eq!(run.steps(), 1);

        run.finish();
        assert!(run.is_done());
        assert!(!run.is_running());

        run.set_running(true);
        assert!(!run.is_running());
        assert!(!run.begin_step());

        run.reset();
        assert!(!run.is_done());
        assert_eq!(run.steps(), 0);
    }
}
