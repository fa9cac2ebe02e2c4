//! Error types for graph construction
//!
//! Stepping never fails: stepping a paused or finished automaton is a no-op,
//! an unreachable node is [`Distance::Infinite`], and a negative cycle or an
//! incomplete topological order is a terminal [`Outcome`]. The errors here are
//! the ones that can happen before the first step, when a caller-supplied graph
//! names a node that does not exist. Command-line errors are reported by `clap`.
//!
//! [`Distance::Infinite`]: crate::model::distance::Distance::Infinite
//! [`Outcome`]: crate::automaton::Outcome

use crate::model::NodeId;
use thiserror::Error;

/// Invalid graph construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An edge endpoint outside `0..node_count`
    #[error("edge ({from}, {to}) references a node outside 0..{node_count}")]
    NodeOutOfRange {
        from: NodeId,
        to: NodeId,
        node_count: usize,
    },

    /// A start node outside the graph
    #[error("source node {source_node} is outside 0..{node_count}")]
    SourceOutOfRange {
        source_node: NodeId,
        node_count: usize,
    },
}
