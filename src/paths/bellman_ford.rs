//! Bellman-Ford with negative-cycle detection
//!
//! `|V|-1` passes over the edge list, one edge per step, followed by a single
//! step that checks every edge once more. An edge that still relaxes means a
//! negative cycle is reachable from the source; the run then ends with
//! [`Outcome::NegativeCycle`] instead of `Complete`.
//!
//! Undirected edges are relaxed in both directions within the same step.

use crate::automaton::{Automaton, GraphView, Outcome, RunState, View};
use crate::errors::GraphError;
use crate::model::distance::Distance;
use crate::model::graph::{Edge, Graph};
use crate::model::{NodeId, NodeState, Weight};

pub struct BellmanFord {
    graph: Graph,
    source: NodeId,
    dist: Vec<Distance>,
    states: Vec<NodeState>,
    iteration: usize,
    edge_index: usize,
    negative_cycle: bool,
    last_edge: Option<(NodeId, NodeId)>,
    run: RunState,
}

impl BellmanFord {
    pub fn new(graph: Graph, source: NodeId) -> Result<Self, GraphError> {
        graph.check_node(source)?;
        let mut bellman_ford = BellmanFord {
            graph,
            source,
            dist: Vec::new(),
            states: Vec::new(),
            iteration: 0,
            edge_index: 0,
            negative_cycle: false,
            last_edge: None,
            run: RunState::new("Path: Bellman-Ford"),
        };
        bellman_ford.reset();
        Ok(bellman_ford)
    }

    pub fn distances(&self) -> &[Distance] {
        &self.dist
    }

    pub fn has_negative_cycle(&self) -> bool {
        self.negative_cycle
    }

    /// Current `(pass, edge)` cursor
    pub fn cursor(&self) -> (usize, usize) {
        (self.iteration, self.edge_index)
    }

    fn passes(&self) -> usize {
        self.graph.node_count().saturating_sub(1)
    }

    fn improves(&self, from: NodeId, to: NodeId, weight: Weight) -> bool {
        self.dist[from].is_finite() && self.dist[from].plus(weight) < self.dist[to]
    }

    fn relax_one(&mut self, from: NodeId, to: NodeId, weight: Weight) {
        if self.improves(from, to, weight) {
            self.dist[to] = self.dist[from].plus(weight);
            self.states[to] = NodeState::Frontier;
            self.last_edge = Some((from, to));
        }
    }

    fn relax(&mut self, edge: Edge) {
        self.last_edge = Some((edge.from, edge.to));
        self.relax_one(edge.from, edge.to, edge.weight);
        if !self.graph.is_directed() {
            self.relax_one(edge.to, edge.from, edge.weight);
        }
    }

    fn still_relaxable(&self, edge: &Edge) -> bool {
        self.improves(edge.from, edge.to, edge.weight)
            || (!self.graph.is_directed() && self.improves(edge.to, edge.from, edge.weight))
    }
}

impl Automaton for BellmanFord {
    fn run_state(&self) -> &RunState {
        &self.run
    }

    fn run_state_mut(&mut self) -> &mut RunState {
        &mut self.run
    }

    fn reset(&mut self) {
        let n = self.graph.node_count();
        self.dist = vec![Distance::Infinite; n];
        self.states = vec![NodeState::Unvisited; n];
        self.dist[self.source] = Distance::Finite(0);
        self.states[self.source] = NodeState::Frontier;
        self.iteration = 0;
        self.edge_index = 0;
        self.negative_cycle = false;
        self.last_edge = None;
        self.run.reset();
    }

    fn advance(&mut self) {
        let edge_count = self.graph.edges().len();

        if self.iteration < self.passes() && edge_count > 0 {
            let edge = self.graph.edges()[self.edge_index];
            self.relax(edge);

            self.edge_index += 1;
            if self.edge_index == edge_count {
                self.edge_index = 0;
                self.iteration += 1;
                tracing::debug!(pass = self.iteration, "relaxation pass finished");
            }
            return;
        }

        // Detection pass
        self.last_edge = None;
        self.negative_cycle = self
            .graph
            .edges()
            .iter()
            .any(|edge| self.still_relaxable(edge));
        for (state, dist) in self.states.iter_mut().zip(&self.dist) {
            if dist.is_finite() {
                *state = NodeState::Done;
            }
        }
        if self.negative_cycle {
            tracing::info!("negative cycle detected");
        }
        self.run.finish();
    }

    fn outcome(&self) -> Option<Outcome> {
        match (self.is_done(), self.negative_cycle) {
            (false, _) => None,
            (true, true) => Some(Outcome::NegativeCycle),
            (true, false) => Some(Outcome::Complete),
        }
    }

    fn view(&self) -> View<'_> {
        View::Graph(GraphView {
            graph: &self.graph,
            states: &self.states,
            frontier: Vec::new(),
            order: &[],
            distances: Some(&self.dist),
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

    fn sample() -> Graph {
        Graph::directed(
            5,
            &[
                (0, 1, 6),
                (0, 2, 7),
                (1, 3, 5),
                (1, 2, 8),
                (2, 3, -4),
                (1, 4, -2),
                (3, 4, 3),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_converges_with_negative_edges() {
        let mut bf = BellmanFord::new(sample(), 0).unwrap();
        let steps = run_to_end(&mut bf, 1000);

        let expected: Vec<Distance> = [0, 6, 7, 3, 4].into_iter().map(Distance::Finite).collect();
        assert_eq!(bf.distances(), expected.as_slice());
        assert!(!bf.has_negative_cycle());
        assert_eq!(bf.outcome(), Some(Outcome::Complete));
        // 4 passes of 7 edges, then the detection step
        assert_eq!(steps, 29);
    }

    #[test]
    fn test_one_edge_per_step() {
        let mut bf = BellmanFord::new(sample(), 0).unwrap();
        bf.set_running(true);
        bf.step();
        assert_eq!(bf.distances()[1], Distance::Finite(6));
        assert_eq!(bf.distances()[2], Distance::Infinite);
        assert_eq!(bf.cursor(), (0, 1));
    }

    #[test]
    fn test_negative_cycle() {
        let graph = Graph::directed(3, &[(0, 1, 1), (1, 2, -3), (2, 1, 1)]).unwrap();
        let mut bf = BellmanFord::new(graph, 0).unwrap();
        run_to_end(&mut bf, 1000);

        assert!(bf.has_negative_cycle());
        assert_eq!(bf.outcome(), Some(Outcome::NegativeCycle));
    }

    #[test]
    fn test_no_edges_goes_straight_to_detection() {
        let graph = Graph::directed(4, &[]).unwrap();
        let mut bf = BellmanFord::new(graph, 2).unwrap();
        assert_eq!(run_to_end(&mut bf, 10), 1);
        assert_eq!(bf.distances()[2], Distance::Finite(0));
    }
}
