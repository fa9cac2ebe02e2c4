//! Shortest-path and minimum-spanning-tree automata
//!
//! | Automaton          | One step                                   |
//! |--------------------|--------------------------------------------|
//! | [`Dijkstra`]       | one queue pop (settle or skip)             |
//! | [`BellmanFord`]    | one edge relaxation, or the detection pass |
//! | [`FloydWarshall`]  | one matrix cell                            |
//! | [`Kruskal`]        | one edge tested against the DSU            |
//! | [`Prim`]           | one frontier pop (include or discard)      |
//!
//! Each is built from a caller-supplied [`Graph`]; the ones with a source node
//! check it up front and return [`GraphError::SourceOutOfRange`] otherwise.
//!
//! [`Graph`]: crate::model::graph::Graph
//! [`GraphError::SourceOutOfRange`]: crate::errors::GraphError::SourceOutOfRange

pub mod bellman_ford;
pub mod dijkstra;
pub mod floyd_warshall;
pub mod kruskal;
pub mod prim;

pub use bellman_ford::BellmanFord;
pub use dijkstra::Dijkstra;
pub use floyd_warshall::FloydWarshall;
pub use kruskal::Kruskal;
pub use prim::Prim;
