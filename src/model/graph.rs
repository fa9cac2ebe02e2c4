//! Adjacency-list graph
//!
//! Nodes are the dense ids `0..n`. Each node owns a list of `(neighbor, weight)`
//! pairs in insertion order; the order matters because the traversal automata
//! visit neighbors in it. An undirected edge is inserted into both endpoints'
//! lists but recorded once in the edge list.
//!
//! The graph carries no visitation state. Per-node state, stacks, queues and
//! in-degree counts belong to the automaton traversing it.

use super::{NodeId, Weight};
use crate::errors::GraphError;
use rustc_hash::FxHashMap;

/// An edge as it was added
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: Weight,
}

#[derive(Debug, Clone, Default)]
pub struct Graph {
    directed: bool,
    adjacency: Vec<Vec<(NodeId, Weight)>>,
    edges: Vec<Edge>,
    /// (from, to) -> position in `edges`; undirected keys are stored low-high
    edge_index: FxHashMap<(NodeId, NodeId), usize>,
}

impl Graph {
    /// Empty graph with `node_count` isolated nodes
    pub fn new(node_count: usize, directed: bool) -> Self {
        Graph {
            directed,
            adjacency: vec![Vec::new(); node_count],
            edges: Vec::new(),
            edge_index: FxHashMap::default(),
        }
    }

    /// Build a directed graph from `(from, to, weight)` triples
    pub fn directed(node_count: usize, edges: &[(NodeId, NodeId, Weight)]) -> Result<Self, GraphError> {
        let mut graph = Graph::new(node_count, true);
        for &(from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Build an undirected graph from `(a, b, weight)` triples
    pub fn undirected(node_count: usize, edges: &[(NodeId, NodeId, Weight)]) -> Result<Self, GraphError> {
        let mut graph = Graph::new(node_count, false);
        for &(from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Build a directed graph whose edges all weigh 1
    pub fn unweighted(node_count: usize, edges: &[(NodeId, NodeId)]) -> Result<Self, GraphError> {
        let mut graph = Graph::new(node_count, true);
        for &(from, to) in edges {
            graph.add_edge(from, to, 1)?;
        }
        Ok(graph)
    }

    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: Weight) -> Result<(), GraphError> {
        let node_count = self.node_count();
        if from >= node_count || to >= node_count {
            return Err(GraphError::NodeOutOfRange {
                from,
                to,
                node_count,
            });
        }

        self.adjacency[from].push((to, weight));
        if !self.directed {
            self.adjacency[to].push((from, weight));
        }

        let key = self.key(from, to);
        self.edge_index.entry(key).or_insert(self.edges.len());
        self.edges.push(Edge { from, to, weight });
        Ok(())
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Outgoing `(neighbor, weight)` pairs in insertion order
    pub fn neighbors(&self, node: NodeId) -> &[(NodeId, Weight)] {
        &self.adjacency[node]
    }

    /// All edges in insertion order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Position of the edge `from -> to` in [`Graph::edges`]
    ///
    /// For undirected graphs the endpoints may be given in either order.
    pub fn find_edge(&self, from: NodeId, to: NodeId) -> Option<usize> {
        self.edge_index.get(&self.key(from, to)).copied()
    }

    /// Check that `node` is a valid start node
    pub fn check_node(&self, node: NodeId) -> Result<(), GraphError> {
        if node < self.node_count() {
            Ok(())
        } else {
            Err(GraphError::SourceOutOfRange {
                source_node: node,
                node_count: self.node_count(),
            })
        }
    }

    fn key(&self, from: NodeId, to: NodeId) -> (NodeId, NodeId) {
        if self.directed {
            (from, to)
        } else {
            (from.min(to), from.max(to))
        }
    }
}
