//! TUI pane rendering modules
//!
//! Each pane is a stateless `render_*` function that draws one screen region
//! from borrowed data. Automaton panes take the matching [`View`] variant.
//!
//! # Pane Modules
//!
//! - [`menu`]: Algorithm list grouped by category
//! - [`input`]: Value entry for the binary-search-tree operation
//! - [`array`]: Bar chart of a sorting array with compare/pivot highlights
//! - [`graph`]: Node table (state, distance) and edge list (marks)
//! - [`matrix`]: Floyd-Warshall distance matrix with the current cell
//! - [`tree`]: Indented binary tree with per-node tags
//! - [`status`]: Status bar with keybindings and run state
//! - `utils`: Shared block and style helpers
//!
//! [`View`]: crate::automaton::View

mod utils;

pub mod array;
pub mod graph;
pub mod input;
pub mod matrix;
pub mod menu;
pub mod status;
pub mod tree;

// Re-export render functions for convenience
pub use array::render_array_pane;
pub use graph::render_graph_pane;
pub use input::render_input_pane;
pub use matrix::render_matrix_pane;
pub use menu::render_menu_pane;
pub use status::{render_status_bar, StatusRenderData};
pub use tree::render_tree_pane;
