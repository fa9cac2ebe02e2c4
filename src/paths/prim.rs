//! Prim's minimum spanning tree from node 0
//!
//! The frontier holds `(weight, from, to)` candidates. A step pops the lightest;
//! if `to` already belongs to the tree the candidate is discarded (the step
//! still counts), otherwise `to` joins and its edges to nodes outside the tree
//! are pushed. Only the component containing node 0 is spanned.

use crate::automaton::{Automaton, EdgeMark, GraphView, RunState, View};
use crate::model::graph::Graph;
use crate::model::queue::MinQueue;
use crate::model::{NodeId, NodeState, Weight};

const START: NodeId = 0;

pub struct Prim {
    graph: Graph,
    in_tree: Vec<bool>,
    states: Vec<NodeState>,
    queue: MinQueue<(Weight, NodeId, NodeId)>,
    marks: Vec<EdgeMark>,
    /// `(from, to, weight)` in the order the edges joined the tree
    tree: Vec<(NodeId, NodeId, Weight)>,
    total: i64,
    last_edge: Option<(NodeId, NodeId)>,
    run: RunState,
}

impl Prim {
    pub fn new(graph: Graph) -> Self {
        let mut prim = Prim {
            graph,
            in_tree: Vec::new(),
            states: Vec::new(),
            queue: MinQueue::new(),
            marks: Vec::new(),
            tree: Vec::new(),
            total: 0,
            last_edge: None,
            run: RunState::new("MST: Prim"),
        };
        prim.reset();
        prim
    }

    pub fn tree_edges(&self) -> &[(NodeId, NodeId, Weight)] {
        &self.tree
    }

    pub fn total_weight(&self) -> i64 {
        self.total
    }

    pub fn marks(&self) -> &[EdgeMark] {
        &self.marks
    }

    fn include(&mut self, node: NodeId) {
        self.in_tree[node] = true;
        self.states[node] = NodeState::Done;
        for &(to, weight) in self.graph.neighbors(node) {
            if !self.in_tree[to] {
                self.states[to] = NodeState::Frontier;
                self.queue.push((weight, node, to));
            }
        }
    }

    fn mark(&mut self, from: NodeId, to: NodeId, mark: EdgeMark) {
        if let Some(index) = self.graph.find_edge(from, to) {
            if self.marks[index] != EdgeMark::Included {
                self.marks[index] = mark;
            }
        }
    }
}

impl Automaton for Prim {
    fn run_state(&self) -> &RunState {
        &self.run
    }

    fn run_state_mut(&mut self) -> &mut RunState {
        &mut self.run
    }

    fn reset(&mut self) {
        let n = self.graph.node_count();
        self.in_tree = vec![false; n];
        self.states = vec![NodeState::Unvisited; n];
        self.queue.clear();
        self.marks = vec![EdgeMark::Untested; self.graph.edges().len()];
        self.tree.clear();
        self.total = 0;
        self.last_edge = None;
        if n > 0 {
            self.include(START);
        }
        self.run.reset();
    }

    fn advance(&mut self) {
        let Some((weight, from, to)) = self.queue.pop() else {
            self.last_edge = None;
            self.run.finish();
            return;
        };

        self.last_edge = Some((from, to));
        if self.in_tree[to] {
            self.mark(from, to, EdgeMark::Rejected);
            tracing::debug!(from, to, "stale frontier edge discarded");
            return;
        }

        self.mark(from, to, EdgeMark::Included);
        self.tree.push((from, to, weight));
        self.total += weight;
        self.include(to);
    }

    fn view(&self) -> View<'_> {
        let mut pending: Vec<(Weight, NodeId, NodeId)> = self
            .queue
            .iter()
            .filter(|(_, _, to)| !self.in_tree[*to])
            .copied()
            .collect();
        pending.sort();
        let mut frontier: Vec<NodeId> = Vec::new();
        for (_, _, to) in pending {
            if !frontier.contains(&to) {
                frontier.push(to);
            }
        }

        View::Graph(GraphView {
            graph: &self.graph,
            states: &self.states,
            frontier,
            order: &[],
            distances: None,
            active_edge: self.last_edge,
            edge_marks: &self.marks,
            mst_weight: Some(self.total),
        })
    }
}
