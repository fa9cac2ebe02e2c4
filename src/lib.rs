//! # Introduction
//!
//! algostep runs classic algorithms one small unit of work at a time so that
//! every intermediate state can be drawn. Each algorithm is a step automaton
//! (see [`automaton::Automaton`]) holding its own input, control variables and
//! run flags; a host calls `step()` on a timer or on a key press and renders
//! the [`automaton::View`] in between.
//!
//! ## Layout
//!
//! ```text
//! model ──► sorting / graph / paths / tree ──► catalog ──► ui
//! ```
//!
//! 1. [`model`]: instrumented array, graph, distance, priority queue,
//!    disjoint set and binary tree arena.
//! 2. [`sorting`]: bubble, selection, insertion, merge, quick and heap sort.
//! 3. [`graph`]: DFS/BFS traversal and both topological sorts.
//! 4. [`paths`]: Dijkstra, Bellman-Ford, Floyd-Warshall, Kruskal and Prim.
//! 5. [`tree`]: BST insert/search/delete and the four tree traversals.
//! 6. [`catalog`]: the menu entries, their presets and constructors.
//! 7. [`config`]: command-line flags.
//! 8. [`ui`]: ratatui-based TUI; not part of the stable library API.

pub mod automaton;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod graph;
pub mod model;
pub mod paths;
pub mod sorting;
pub mod tree;
pub mod ui;
