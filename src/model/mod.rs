//! Primitive data models shared by the automata
//!
//! This module provides the structures every automaton builds on:
//! - [`array`]: the sortable array with operation counters
//! - [`graph`]: adjacency-list graph with an ordered edge list
//! - [`tree`]: arena-owned binary tree with index handles
//! - [`dsu`]: disjoint-set union used by Kruskal
//! - [`queue`]: min-priority queue used by Dijkstra and Prim
//! - [`distance`]: distances with an explicit infinite value
//!
//! None of these types know about stepping. They are plain containers that
//! an automaton owns exclusively and rebuilds on `reset()`.

pub mod array;
pub mod distance;
pub mod dsu;
pub mod graph;
pub mod queue;
pub mod tree;

/// Dense node identifier (`0..n`)
pub type NodeId = usize;

/// Edge weight. Unweighted graphs use a weight of 1.
pub type Weight = i64;

/// Visitation state of a graph node, owned by the traversing automaton
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeState {
    #[default]
    Unvisited,
    Frontier, // Discovered, waiting on a stack/queue
    Done,
}
