//! Topological sort automata
//!
//! [`DfsTopoSort`] explores the whole graph on its first step, pushing each node
//! onto an output stack when its depth-first visit completes, then pops one node
//! per step into the result. [`KahnTopoSort`] repeatedly takes a node with no
//! remaining incoming edges.
//!
//! On a graph with a cycle the DFS variant still emits every node (the order
//! violates the back edge), while Kahn's stops short and reports
//! [`Outcome::Incomplete`].

use crate::automaton::{Automaton, GraphView, Outcome, RunState, View};
use crate::model::graph::Graph;
use crate::model::{NodeId, NodeState};
use std::collections::VecDeque;

pub struct DfsTopoSort {
    graph: Graph,
    states: Vec<NodeState>,
    explored: bool,
    /// Post-order completions; the top is the next node of the ordering
    output: Vec<NodeId>,
    /// Completion order as recorded during exploration
    emission: Vec<NodeId>,
    result: Vec<NodeId>,
    run: RunState,
}

impl DfsTopoSort {
    pub fn new(graph: Graph) -> Self {
        let mut sort = DfsTopoSort {
            states: Vec::new(),
            explored: false,
            output: Vec::new(),
            emission: Vec::new(),
            result: Vec::new(),
            graph,
            run: RunState::new("Topo: DFS"),
        };
        sort.reset();
        sort
    }

    pub fn result(&self) -> &[NodeId] {
        &self.result
    }

    pub fn emission(&self) -> &[NodeId] {
        &self.emission
    }

    fn explore(&mut self) {
        let n = self.graph.node_count();
        let mut seen = vec![false; n];
        // (node, index of the next neighbor to try)
        let mut frames: Vec<(NodeId, usize)> = Vec::new();

        for start in 0..n {
            if seen[start] {
                continue;
            }
            seen[start] = true;
            frames.push((start, 0));

            while let Some(frame) = frames.last_mut() {
                let (node, next) = *frame;
                match self.graph.neighbors(node).get(next) {
                    Some(&(to, _)) => {
                        frame.1 += 1;
                        if !seen[to] {
                            seen[to] = true;
                            frames.push((to, 0));
                        }
                    }
                    None => {
                        frames.pop();
                        self.output.push(node);
                        self.emission.push(node);
                        self.states[node] = NodeState::Frontier;
                    }
                }
            }
        }

        self.explored = true;
        tracing::debug!(nodes = self.output.len(), "depth-first exploration finished");
    }
}

impl Automaton for DfsTopoSort {
    fn run_state(&self) -> &RunState {
        &self.run
    }

    fn run_state_mut(&mut self) -> &mut RunState {
        &mut self.run
    }

    fn reset(&mut self) {
        self.states = vec![NodeState::Unvisited; self.graph.node_count()];
        self.explored = false;
        self.output.clear();
        self.emission.clear();
        self.result.clear();
        self.run.reset();
    }

    fn advance(&mut self) {
        if self.result.len() == self.graph.node_count() {
            self.run.finish();
            return;
        }
        if !self.explored {
            self.explore();
        }
        match self.output.pop() {
            Some(node) => {
                self.states[node] = NodeState::Done;
                self.result.push(node);
            }
            None => self.run.finish(),
        }
    }

    fn view(&self) -> View<'_> {
        View::Graph(GraphView {
            graph: &self.graph,
            states: &self.states,
            frontier: self.output.iter().rev().copied().collect(),
            order: &self.result,
            distances: None,
            active_edge: None,
            edge_marks: &[],
            mst_weight: None,
        })
    }
}

pub struct KahnTopoSort {
    graph: Graph,
    states: Vec<NodeState>,
    in_degree: Vec<usize>,
    queue: VecDeque<NodeId>,
    result: Vec<NodeId>,
    last_edge: Option<(NodeId, NodeId)>,
    run: RunState,
}

impl KahnTopoSort {
    pub fn new(graph: Graph) -> Self {
        let mut sort = KahnTopoSort {
            states: Vec::new(),
            in_degree: Vec::new(),
            queue: VecDeque::new(),
            result: Vec::new(),
            last_edge: None,
            graph,
            run: RunState::new("Topo: Kahn"),
        };
        sort.reset();
        sort
    }

    pub fn result(&self) -> &[NodeId] {
        &self.result
    }

    pub fn in_degrees(&self) -> &[usize] {
        &self.in_degree
    }
}

impl Automaton for KahnTopoSort {
    fn run_state(&self) -> &RunState {
        &self.run
    }

    fn run_state_mut(&mut self) -> &mut RunState {
        &mut self.run
    }

    fn reset(&mut self) {
        let n = self.graph.node_count();
        // Counted along the same adjacency lists `advance` decrements, so an
        // undirected edge adds one in each direction
        self.in_degree = vec![0; n];
        for node in 0..n {
            for &(to, _) in self.graph.neighbors(node) {
                self.in_degree[to] += 1;
            }
        }

        self.states = vec![NodeState::Unvisited; n];
        self.queue.clear();
        for node in 0..n {
            if self.in_degree[node] == 0 {
                self.states[node] = NodeState::Frontier;
                self.queue.push_back(node);
            }
        }
        self.result.clear();
        self.last_edge = None;
        self.run.reset();
    }

    fn advance(&mut self) {
        let Some(node) = self.queue.pop_front() else {
            if self.result.len() < self.graph.node_count() {
                tracing::debug!(
                    produced = self.result.len(),
                    expected = self.graph.node_count(),
                    "queue drained before every node was ordered"
                );
            }
            self.last_edge = None;
            self.run.finish();
            return;
        };

        self.states[node] = NodeState::Done;
        self.result.push(node);
        self.last_edge = None;

        for &(to, _) in self.graph.neighbors(node) {
            self.in_degree[to] -= 1;
            if self.in_degree[to] == 0 {
                self.states[to] = NodeState::Frontier;
                self.queue.push_back(to);
                self.last_edge = Some((node, to));
            }
        }
    }

    fn outcome(&self) -> Option<Outcome> {
        if !self.is_done() {
            return None;
        }
        let expected = self.graph.node_count();
        if self.result.len() == expected {
            Some(Outcome::Complete)
        } else {
            Some(Outcome::Incomplete {
                produced: self.result.len(),
                expected,
            })
        }
    }

    fn view(&self) -> View<'_> {
        View::Graph(GraphView {
            graph: &self.graph,
            states: &self.states,
            frontier: self.queue.iter().copied().collect(),
            order: &self.result,
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

    fn dag() -> Graph {
        Graph::unweighted(6, &[(0, 2), (1, 2), (2, 3), (2, 4), (3, 5), (4, 5)]).unwrap()
    }

    fn cyclic() -> Graph {
        Graph::unweighted(3, &[(0, 1), (1, 2), (2, 0)]).unwrap()
    }

    #[test]
    fn test_dfs_first_step_explores_everything() {
        let mut sort = DfsTopoSort::new(dag());
        sort.set_running(true);
        sort.step();

        assert_eq!(sort.emission(), &[5, 3, 4, 2, 0, 1]);
        assert_eq!(sort.result(), &[1]);
    }

    #[test]
    fn test_dfs_result_is_reverse_emission() {
        let mut sort = DfsTopoSort::new(dag());
        run_to_end(&mut sort, 100);

        assert!(sort.is_done());
        assert_eq!(sort.result(), &[1, 0, 2, 4, 3, 5]);
        assert_eq!(sort.outcome(), Some(Outcome::Complete));
    }

    #[test]
    fn test_kahn_order() {
        let mut sort = KahnTopoSort::new(dag());
        run_to_end(&mut sort, 100);

        assert_eq!(sort.result(), &[0, 1, 2, 3, 4, 5]);
        assert_eq!(sort.outcome(), Some(Outcome::Complete));
    }

    #[test]
    fn test_kahn_cycle_is_incomplete() {
        let mut sort = KahnTopoSort::new(cyclic());
        assert_eq!(sort.in_degrees(), &[1, 1, 1]);
        run_to_end(&mut sort, 100);

        assert!(sort.result().is_empty());
        assert_eq!(
            sort.outcome(),
            Some(Outcome::Incomplete {
                produced: 0,
                expected: 3
            })
        );
    }

    #[test]
    fn test_kahn_undirected_edge_counts_as_cycle() {
        let graph = Graph::undirected(3, &[(0, 1, 1)]).unwrap();
        let mut sort = KahnTopoSort::new(graph);
        assert_eq!(sort.in_degrees(), &[1, 1, 0]);
        run_to_end(&mut sort, 100);

        assert!(sort.is_done());
        assert_eq!(sort.result(), &[2]);
        assert_eq!(
            sort.outcome(),
            Some(Outcome::Incomplete {
                produced: 1,
                expected: 3
            })
        );
    }

    #[test]
    fn test_dfs_cycle_still_orders_all_nodes() {
        let mut sort = DfsTopoSort::new(cyclic());
        run_to_end(&mut sort, 100);
        assert_eq!(sort.result().len(), 3);
    }
}
