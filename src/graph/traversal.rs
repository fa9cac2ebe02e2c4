//! DFS and BFS over every component
//!
//! Both share one automaton; only the frontier discipline differs. A node is
//! marked `Frontier` when it is pushed, so it enters the frontier at most once,
//! and `Done` when it is taken out.

use crate::automaton::{Automaton, GraphView, RunState, View};
use crate::model::graph::Graph;
use crate::model::{NodeId, NodeState};
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalKind {
    DepthFirst,
    BreadthFirst,
}

pub struct GraphTraversal {
    kind: TraversalKind,
    graph: Graph,
    states: Vec<NodeState>,
    /// Stack for DFS (back is the top), queue for BFS (front is next)
    frontier: VecDeque<NodeId>,
    /// Lowest id that may still be `Unvisited`
    next_component: NodeId,
    order: Vec<NodeId>,
    last_edge: Option<(NodeId, NodeId)>,
    run: RunState,
}

impl GraphTraversal {
    pub fn new(graph: Graph, kind: TraversalKind) -> Self {
        let name = match kind {
            TraversalKind::DepthFirst => "Graph: DFS",
            TraversalKind::BreadthFirst => "Graph: BFS",
        };
        let mut traversal = GraphTraversal {
            kind,
            states: Vec::new(),
            frontier: VecDeque::new(),
            next_component: 0,
            order: Vec::new(),
            last_edge: None,
            graph,
            run: RunState::new(name),
        };
        traversal.reset();
        traversal
    }

    pub fn kind(&self) -> TraversalKind {
        self.kind
    }

    /// Ids in the order they were marked `Done`
    pub fn order(&self) -> &[NodeId] {
        &self.order
    }

    pub fn states(&self) -> &[NodeState] {
        &self.states
    }

    fn take_next(&mut self) -> Option<NodeId> {
        match self.kind {
            TraversalKind::DepthFirst => self.frontier.pop_back(),
            TraversalKind::BreadthFirst => self.frontier.pop_front(),
        }
    }

    /// Seed the frontier with the lowest unvisited node, if any remain
    fn start_next_component(&mut self) -> bool {
        while self.next_component < self.states.len() {
            let node = self.next_component;
            self.next_component += 1;
            if self.states[node] == NodeState::Unvisited {
                self.states[node] = NodeState::Frontier;
                self.frontier.push_back(node);
                tracing::debug!(algorithm = self.run.name(), node, "component start");
                return true;
            }
        }
        false
    }

    fn visit(&mut self, node: NodeId) {
        self.states[node] = NodeState::Done;
        self.order.push(node);
        self.last_edge = None;

        let neighbors: Vec<NodeId> = match self.kind {
            // Reversed so the first listed neighbor ends on top of the stack
            TraversalKind::DepthFirst => self
                .graph
                .neighbors(node)
                .iter()
                .rev()
                .map(|&(to, _)| to)
                .collect(),
            TraversalKind::BreadthFirst => {
                self.graph.neighbors(node).iter().map(|&(to, _)| to).collect()
            }
        };

        for to in neighbors {
            if self.states[to] == NodeState::Unvisited {
                self.states[to] = NodeState::Frontier;
                self.frontier.push_back(to);
                self.last_edge = Some((node, to));
            }
        }
    }
}

impl Automaton for GraphTraversal {
    fn run_state(&self) -> &RunState {
        &self.run
    }

    fn run_state_mut(&mut self) -> &mut RunState {
        &mut self.run
    }

    fn reset(&mut self) {
        self.states = vec![NodeState::Unvisited; self.graph.node_count()];
        self.frontier.clear();
        self.order.clear();
        self.next_component = 0;
        self.last_edge = None;
        self.start_next_component();
        self.run.reset();
    }

    fn advance(&mut self) {
        match self.take_next() {
            Some(node) => self.visit(node),
            None => {
                self.last_edge = None;
                if !self.start_next_component() {
                    self.run.finish();
                }
            }
        }
    }

    fn view(&self) -> View<'_> {
        // Pending ids in the order they will be taken
        let frontier = match self.kind {
            TraversalKind::DepthFirst => self.frontier.iter().rev().copied().collect(),
            TraversalKind::BreadthFirst => self.frontier.iter().copied().collect(),
        };

        View::Graph(GraphView {
            graph: &self.graph,
            states: &self.states,
            frontier,
            order: &self.order,
            distances: None,
            active_edge: self.last_edge,
            edge_marks: &[],
            mst_weight: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::run_to_end;

    fn forest() -> Graph {
        Graph::unweighted(7, &[(0, 1), (0, 2), (1, 3), (2, 3), (4, 5), (4, 6)]).unwrap()
    }

    #[test]
    fn test_dfs_order_with_restart() {
        let mut dfs = GraphTraversal::new(forest(), TraversalKind::DepthFirst);
        run_to_end(&mut dfs, 100);

        assert!(dfs.is_done());
        assert_eq!(dfs.order(), &[0, 1, 3, 2, 4, 5, 6]);
        assert!(dfs.states().iter().all(|s| *s == NodeState::Done));
    }

    #[test]
    fn test_bfs_order_with_restart() {
        let mut bfs = GraphTraversal::new(forest(), TraversalKind::BreadthFirst);
        run_to_end(&mut bfs, 100);

        assert_eq!(bfs.order(), &[0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_restart_costs_one_step() {
        let mut bfs = GraphTraversal::new(forest(), TraversalKind::BreadthFirst);
        // 7 visits, 1 restart seed, 1 final empty step
        assert_eq!(run_to_end(&mut bfs, 100), 9);
    }

    #[test]
    fn test_empty_graph_completes() {
        let mut dfs = GraphTraversal::new(Graph::new(0, true), TraversalKind::DepthFirst);
        assert_eq!(run_to_end(&mut dfs, 10), 1);
        assert!(dfs.order().is_empty());
    }
}
