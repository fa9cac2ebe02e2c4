// Dijkstra's single-source shortest paths with lazy deletion

use crate::automaton::{Automaton, GraphView, RunState, View};
use crate::errors::GraphError;
use crate::model::distance::Distance;
use crate::model::graph::Graph;
use crate::model::queue::MinQueue;
use crate::model::{NodeId, NodeState};

pub struct Dijkstra {
    graph: Graph,
    source: NodeId,
    dist: Vec<Distance>,
    settled: Vec<bool>,
    states: Vec<NodeState>,
    /// May hold stale entries for nodes settled since they were pushed
    queue: MinQueue<(Distance, NodeId)>,
    settle_order: Vec<NodeId>,
    last_edge: Option<(NodeId, NodeId)>,
    run: RunState,
}

impl Dijkstra {
    pub fn new(graph: Graph, source: NodeId) -> Result<Self, GraphError> {
        graph.check_node(source)?;
        let mut dijkstra = Dijkstra {
            graph,
            source,
            dist: Vec::new(),
            settled: Vec::new(),
            states: Vec::new(),
            queue: MinQueue::new(),
            settle_order: Vec::new(),
            last_edge: None,
            run: RunState::new("Path: Dijkstra"),
        };
        dijkstra.reset();
        Ok(dijkstra)
    }

    pub fn distances(&self) -> &[Distance] {
        &self.dist
    }

    pub fn settle_order(&self) -> &[NodeId] {
        &self.settle_order
    }

    fn settle(&mut self, node: NodeId) {
        self.settled[node] = true;
        self.states[node] = NodeState::Done;
        self.settle_order.push(node);
        self.last_edge = None;

        let base = self.dist[node];
        for &(to, weight) in self.graph.neighbors(node) {
            if self.settled[to] {
                continue;
            }
            let candidate = base.plus(weight);
            if candidate < self.dist[to] {
                self.dist[to] = candidate;
                self.states[to] = NodeState::Frontier;
                self.queue.push((candidate, to));
                self.last_edge = Some((node, to));
            }
        }
    }
}

impl Automaton for Dijkstra {
    fn run_state(&self) -> &RunState {
        &self.run
    }

    fn run_state_mut(&mut self) -> &mut RunState {
        &mut self.run
    }

    fn reset(&mut self) {
        let n = self.graph.node_count();
        self.dist = vec![Distance::Infinite; n];
        self.settled = vec![false; n];
        self.states = vec![NodeState::Unvisited; n];
        self.queue.clear();
        self.settle_order.clear();
        self.last_edge = None;

        self.dist[self.source] = Distance::Finite(0);
        self.states[self.source] = NodeState::Frontier;
        self.queue.push((Distance::Finite(0), self.source));
        self.run.reset();
    }

    fn advance(&mut self) {
        match self.queue.pop() {
            None => {
                self.last_edge = None;
                self.run.finish();
            }
            Some((_, node)) if self.settled[node] => {
                tracing::debug!(node, "stale queue entry skipped");
                self.last_edge = None;
            }
            Some((_, node)) => self.settle(node),
        }
    }

    fn view(&self) -> View<'_> {
        let mut pending: Vec<(Distance, NodeId)> = self
            .queue
            .iter()
            .filter(|(_, node)| !self.settled[*node])
            .copied()
            .collect();
        pending.sort();

        View::Graph(GraphView {
            graph: &self.graph,
            states: &self.states,
            frontier: pending.into_iter().map(|(_, node)| node).collect(),
            order: &self.settle_order,
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
        Graph::undirected(
            7,
            &[
                (0, 1, 4),
                (0, 2, 1),
                (1, 3, 1),
                (2, 1, 2),
                (2, 4, 5),
                (3, 5, 3),
                (4, 5, 1),
                (5, 6, 2),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_distances_from_source() {
        let mut dijkstra = Dijkstra::new(sample(), 0).unwrap();
        run_to_end(&mut dijkstra, 100);

        let expected: Vec<Distance> = [0, 3, 1, 4, 6, 7, 9]
            .into_iter()
            .map(Distance::Finite)
            .collect();
        assert!(dijkstra.is_done());
        assert_eq!(dijkstra.distances(), expected.as_slice());
        assert_eq!(dijkstra.settle_order()[..3], [0, 2, 1]);
    }

    #[test]
    fn test_unreachable_stays_infinite() {
        let graph = Graph::directed(3, &[(0, 1, 2)]).unwrap();
        let mut dijkstra = Dijkstra::new(graph, 0).unwrap();
        run_to_end(&mut dijkstra, 100);

        assert_eq!(dijkstra.distances()[2], Distance::Infinite);
    }

    #[test]
    fn test_stale_entry_costs_a_step() {
        // 0->2 is pushed at 10, then improved to 2 via 1; the old entry is skipped
        let graph = Graph::directed(3, &[(0, 2, 10), (0, 1, 1), (1, 2, 1)]).unwrap();
        let mut dijkstra = Dijkstra::new(graph, 0).unwrap();

        // three settles, one skip, one empty pop
        assert_eq!(run_to_end(&mut dijkstra, 100), 5);
    }

    #[test]
    fn test_bad_source() {
        assert_eq!(
            Dijkstra::new(sample(), 9).err(),
            Some(GraphError::SourceOutOfRange {
                source_node: 9,
                node_count: 7
            })
        );
    }
}
