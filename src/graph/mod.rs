//! Graph traversal and ordering automata
//!
//! - [`traversal`]: depth-first and breadth-first visits that restart on the
//!   next unvisited node, so every component of a disconnected graph is covered
//! - [`topo`]: topological orderings, DFS post-order and Kahn's in-degree queue

pub mod topo;
pub mod traversal;

pub use topo::{DfsTopoSort, KahnTopoSort};
pub use traversal::{GraphTraversal, TraversalKind};
