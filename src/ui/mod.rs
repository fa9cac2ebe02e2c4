//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: application state, keyboard event loop, screen switching, paced stepping
//! - **[`panes`]**: stateless render functions for each visible pane (menu, BST input,
//!   array, graph, matrix, tree, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a [`Config`] and
//! call [`App::run`] to start the event loop. The UI only drives automata through
//! the [`Automaton`] trait and reads them through their [`View`].
//!
//! [`Config`]: crate::config::Config
//! [`App::run`]: app::App::run
//! [`Automaton`]: crate::automaton::Automaton
//! [`View`]: crate::automaton::View

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
