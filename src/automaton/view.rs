//! Read-only observation of an automaton between steps
//!
//! A [`View`] borrows from the automaton, so it is cheap to take after every
//! step and cannot outlive the next mutation.

use crate::model::array::SortStats;
use crate::model::distance::Distance;
use crate::model::graph::Graph;
use crate::model::tree::{BinaryTree, TreeNodeId};
use crate::model::{NodeId, NodeState};
use std::ops::Range;

pub enum View<'a> {
    Array(ArrayView<'a>),
    Graph(GraphView<'a>),
    Matrix(MatrixView<'a>),
    Tree(TreeView<'a>),
}

/// Role of a highlighted array index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Compare,
    Pivot,
    Cursor,
}

pub struct ArrayView<'a> {
    pub values: &'a [i64],
    pub marks: Vec<(usize, Mark)>,
    /// Sub-array currently being worked on (partition range, merge window, heap)
    pub window: Option<Range<usize>>,
    /// Indices already in final position
    pub sorted: Range<usize>,
    pub stats: SortStats,
}

impl ArrayView<'_> {
    pub fn mark_at(&self, index: usize) -> Option<Mark> {
        self.marks
            .iter()
            .find(|(i, _)| *i == index)
            .map(|(_, mark)| *mark)
    }
}

/// Status of an edge in MST algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeMark {
    #[default]
    Untested,
    Testing,
    Included,
    Rejected,
}

pub struct GraphView<'a> {
    pub graph: &'a Graph,
    pub states: &'a [NodeState],
    /// Pending ids, in the order they will be taken where that is known
    pub frontier: Vec<NodeId>,
    /// Visit order, topological result, or settle order
    pub order: &'a [NodeId],
    pub distances: Option<&'a [Distance]>,
    /// Edge examined by the last step
    pub active_edge: Option<(NodeId, NodeId)>,
    /// Per-edge marks, indexed like `graph.edges()`; empty when unused
    pub edge_marks: &'a [EdgeMark],
    pub mst_weight: Option<i64>,
}

pub struct MatrixView<'a> {
    pub dist: &'a [Vec<Distance>],
    /// `(k, i, j)` of the next cell to relax; `None` once done
    pub cursor: Option<(usize, usize, usize)>,
}

pub struct TreeView<'a> {
    pub tree: &'a BinaryTree,
    pub current: Option<TreeNodeId>,
    /// Values visited so far, in order
    pub trail: Vec<i64>,
}
