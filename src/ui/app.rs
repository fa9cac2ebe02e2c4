//! Main TUI application state and logic

use crate::automaton::{single_step, Automaton, View};
use crate::catalog::AlgorithmKind;
use crate::config::Config;
use crate::tree::BstOperation;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    BstInput,
    Visualize,
}

/// The main application state
pub struct App {
    pub config: Config,

    pub screen: Screen,

    /// Highlighted menu entry, index into `AlgorithmKind::ALL`
    pub selected: usize,

    /// Algorithm behind the visualize screen
    pub kind: Option<AlgorithmKind>,

    pub automaton: Option<Box<dyn Automaton>>,

    /// Digits typed on the BST screen
    pub input: String,

    pub bst_operation: BstOperation,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Last time a step was taken while running; `None` steps on the next tick
    pub last_step_time: Option<Instant>,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Option<Instant>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let bst_operation = config.bst_operation;
        let preselected = config.algorithm;
        let mut app = App {
            config,
            screen: Screen::Menu,
            selected: 0,
            kind: None,
            automaton: None,
            input: String::new(),
            bst_operation,
            should_quit: false,
            status_message: String::from("Pick an algorithm"),
            last_step_time: None,
            last_space_press: None,
        };

        if let Some(kind) = preselected {
            app.selected = AlgorithmKind::ALL
                .iter()
                .position(|k| *k == kind)
                .unwrap_or(0);
            let value = app.config.bst_value;
            app.open(kind, value);
        }
        app
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.tick();

            // Use poll with timeout so paced stepping keeps going without input
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Take one paced step if the automaton is running and the interval has passed
    pub fn tick(&mut self) {
        let Some(automaton) = self.automaton.as_mut() else {
            return;
        };
        let due = self
            .last_step_time
            .map_or(true, |last| last.elapsed() >= self.config.step_interval());
        if !automaton.is_running() || !due {
            return;
        }

        automaton.step();
        self.last_step_time = Some(Instant::now());
        if automaton.is_done() {
            self.status_message = finished_message(&**automaton);
        }
    }

    /// Switch to `kind`, asking for a value first when it needs one
    pub fn open(&mut self, kind: AlgorithmKind, bst_value: Option<i64>) {
        self.kind = Some(kind);
        if kind.needs_input() && bst_value.is_none() {
            self.input.clear();
            self.screen = Screen::BstInput;
            self.status_message = "Type a value, then i/s/d".to_string();
            return;
        }

        let mut params = self.config.build_params(bst_value);
        params.bst_operation = self.bst_operation;
        match kind.build(&params) {
            Ok(automaton) => {
                self.status_message = format!("{} ready, space to run", automaton.name());
                self.automaton = Some(automaton);
                self.screen = Screen::Visualize;
            }
            Err(e) => {
                tracing::error!(error = %e, algorithm = kind.cli_name(), "could not build");
                self.status_message = format!("Cannot open {}: {}", kind.title(), e);
                self.screen = Screen::Menu;
            }
        }
    }

    fn back_to_menu(&mut self) {
        self.automaton = None;
        self.kind = None;
        self.screen = Screen::Menu;
        self.status_message = "Pick an algorithm".to_string();
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        match self.screen {
            Screen::Menu => {
                super::panes::render_menu_pane(frame, pane_area, &AlgorithmKind::ALL, self.selected);
            }
            Screen::BstInput => {
                super::panes::render_input_pane(
                    frame,
                    pane_area,
                    &self.input,
                    self.bst_operation,
                );
            }
            Screen::Visualize => {
                if let Some(automaton) = self.automaton.as_ref() {
                    let title = automaton.name();
                    match automaton.view() {
                        View::Array(view) => {
                            super::panes::render_array_pane(frame, pane_area, title, &view)
                        }
                        View::Graph(view) => {
                            super::panes::render_graph_pane(frame, pane_area, title, &view)
                        }
                        View::Matrix(view) => {
                            super::panes::render_matrix_pane(frame, pane_area, title, &view)
                        }
                        View::Tree(view) => {
                            super::panes::render_tree_pane(frame, pane_area, title, &view)
                        }
                    }
                }
            }
        }

        let data = super::panes::StatusRenderData {
            message: &self.status_message,
            screen: self.screen,
            steps: self.automaton.as_ref().map(|a| a.steps_taken()),
            is_running: self.automaton.as_ref().is_some_and(|a| a.is_running()),
            is_done: self.automaton.as_ref().is_some_and(|a| a.is_done()),
        };
        super::panes::render_status_bar(frame, status_area, &data);
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match self.screen {
            Screen::Menu => self.handle_menu_key(key.code),
            Screen::BstInput => self.handle_input_key(key.code),
            Screen::Visualize => self.handle_visualize_key(key.code),
        }
    }

    fn handle_menu_key(&mut self, code: KeyCode) {
        let count = AlgorithmKind::ALL.len();
        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = (self.selected + count - 1) % count;
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = (self.selected + 1) % count;
            }
            KeyCode::Enter => {
                let kind = AlgorithmKind::ALL[self.selected];
                self.open(kind, None);
            }
            _ => {}
        }
    }

    fn handle_input_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.back_to_menu(),
            KeyCode::Char(c @ '0'..='9') => {
                if self.input.len() < 9 {
                    self.input.push(c);
                }
            }
            KeyCode::Char('-') if self.input.is_empty() => self.input.push('-'),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c @ ('i' | 's' | 'd')) => {
                self.bst_operation = match c {
                    'i' => BstOperation::Insert,
                    's' => BstOperation::Search,
                    _ => BstOperation::Delete,
                };
                self.submit_input();
            }
            KeyCode::Enter => self.submit_input(),
            _ => {}
        }
    }

    fn submit_input(&mut self) {
        match self.input.parse::<i64>() {
            Ok(value) => self.open(AlgorithmKind::Bst, Some(value)),
            Err(_) => {
                self.status_message = "Enter a number first".to_string();
            }
        }
    }

    fn handle_visualize_key(&mut self, code: KeyCode) {
        let Some(automaton) = self.automaton.as_mut() else {
            self.back_to_menu();
            return;
        };

        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Esc => self.back_to_menu(),
            KeyCode::Char(' ') => {
                // 200ms debounce against key repeat
                let debounced = self
                    .last_space_press
                    .map_or(true, |last| last.elapsed() >= Duration::from_millis(200));
                if debounced {
                    self.last_space_press = Some(Instant::now());
                    if automaton.is_done() {
                        self.status_message = "Finished, r to reset".to_string();
                        return;
                    }
                    automaton.toggle_run();
                    if automaton.is_running() {
                        // Take the first step right away
                        self.last_step_time = None;
                        self.status_message = "Running...".to_string();
                    } else {
                        self.status_message = "Paused".to_string();
                    }
                }
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                automaton.reset();
                self.status_message = "Reset".to_string();
            }
            KeyCode::Char('n') | KeyCode::Right => {
                if automaton.is_running() {
                    return;
                }
                single_step(&mut **automaton);
                self.status_message = if automaton.is_done() {
                    finished_message(&**automaton)
                } else {
                    "Stepped".to_string()
                };
            }
            _ => {}
        }
    }
}

fn finished_message(automaton: &dyn Automaton) -> String {
    match automaton.outcome() {
        Some(outcome) => format!("Done: {}", outcome.label()),
        None => "Done".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn seeded() -> Config {
        Config {
            seed: Some(1),
            array_len: 8,
            ..Config::default()
        }
    }

    #[test]
    fn test_menu_navigation_wraps() {
        let mut app = App::new(seeded());
        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected, AlgorithmKind::ALL.len() - 1);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_open_and_single_step() {
        let mut app = App::new(seeded());
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen, Screen::Visualize);

        press(&mut app, KeyCode::Char('n'));
        press(&mut app, KeyCode::Right);
        let automaton = app.automaton.as_ref().unwrap();
        assert_eq!(automaton.steps_taken(), 2);
        assert!(!automaton.is_running());

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.screen, Screen::Menu);
        assert!(app.automaton.is_none());
    }

    #[test]
    fn test_bst_input_flow() {
        let config = Config {
            algorithm: Some(AlgorithmKind::Bst),
            ..seeded()
        };
        let mut app = App::new(config);
        assert_eq!(app.screen, Screen::BstInput);

        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.screen, Screen::Visualize);
        assert_eq!(app.bst_operation, BstOperation::Search);
    }

    #[test]
    fn test_preselected_value_skips_input() {
        let config = Config {
            algorithm: Some(AlgorithmKind::Bst),
            bst_value: Some(20),
            ..seeded()
        };
        let app = App::new(config);
        assert_eq!(app.screen, Screen::Visualize);
    }

    #[test]
    fn test_tick_respects_interval() {
        let config = Config {
            interval_ms: 3_600_000,
            algorithm: Some(AlgorithmKind::Bfs),
            ..seeded()
        };
        let mut app = App::new(config);
        press(&mut app, KeyCode::Char(' '));

        app.tick();
        app.tick();
        assert_eq!(app.automaton.as_ref().unwrap().steps_taken(), 1);
    }
}
