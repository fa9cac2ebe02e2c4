//! Kruskal's minimum spanning tree
//!
//! Edges are taken in ascending weight order (ties keep insertion order). Each
//! step tests one edge: it joins the tree when its endpoints are in different
//! DSU sets and is rejected otherwise. The next edge to test carries
//! [`EdgeMark::Testing`].

use crate::automaton::{Automaton, EdgeMark, GraphView, RunState, View};
use crate::model::dsu::DisjointSet;
use crate::model::graph::Graph;
use crate::model::{NodeId, NodeState};

pub struct Kruskal {
    graph: Graph,
    /// Edge indices sorted by weight
    sorted: Vec<usize>,
    cursor: usize,
    dsu: DisjointSet,
    marks: Vec<EdgeMark>,
    states: Vec<NodeState>,
    tree: Vec<usize>,
    total: i64,
    last_edge: Option<(NodeId, NodeId)>,
    run: RunState,
}

impl Kruskal {
    pub fn new(graph: Graph) -> Self {
        let mut sorted: Vec<usize> = (0..graph.edges().len()).collect();
        sorted.sort_by_key(|&index| graph.edges()[index].weight);

        let mut kruskal = Kruskal {
            sorted,
            cursor: 0,
            dsu: DisjointSet::new(0),
            marks: Vec::new(),
            states: Vec::new(),
            tree: Vec::new(),
            total: 0,
            last_edge: None,
            graph,
            run: RunState::new("MST: Kruskal"),
        };
        kruskal.reset();
        kruskal
    }

    /// Indices into `graph.edges()` of the accepted edges, in acceptance order
    pub fn tree_edges(&self) -> &[usize] {
        &self.tree
    }

    pub fn total_weight(&self) -> i64 {
        self.total
    }

    pub fn marks(&self) -> &[EdgeMark] {
        &self.marks
    }

    fn mark_next(&mut self) {
        if let Some(&next) = self.sorted.get(self.cursor) {
            self.marks[next] = EdgeMark::Testing;
        }
    }
}

impl Automaton for Kruskal {
    fn run_state(&self) -> &RunState {
        &self.run
    }

    fn run_state_mut(&mut self) -> &mut RunState {
        &mut self.run
    }

    fn reset(&mut self) {
        let n = self.graph.node_count();
        self.cursor = 0;
        self.dsu = DisjointSet::new(n);
        self.marks = vec![EdgeMark::Untested; self.graph.edges().len()];
        self.states = vec![NodeState::Unvisited; n];
        self.tree.clear();
        self.total = 0;
        self.last_edge = None;
        self.mark_next();
        self.run.reset();
    }

    fn advance(&mut self) {
        let Some(&index) = self.sorted.get(self.cursor) else {
            self.last_edge = None;
            self.run.finish();
            return;
        };

        let edge = self.graph.edges()[index];
        if self.dsu.union(edge.from, edge.to) {
            self.marks[index] = EdgeMark::Included;
            self.states[edge.from] = NodeState::Done;
            self.states[edge.to] = NodeState::Done;
            self.tree.push(index);
            self.total += edge.weight;
        } else {
            self.marks[index] = EdgeMark::Rejected;
            tracing::debug!(from = edge.from, to = edge.to, "edge closes a cycle");
        }
        self.last_edge = Some((edge.from, edge.to));

        self.cursor += 1;
        self.mark_next();
    }

    fn view(&self) -> View<'_> {
        View::Graph(GraphView {
            graph: &self.graph,
            states: &self.states,
            frontier: Vec::new(),
            order: &[],
            distances: None,
            active_edge: self.last_edge,
            edge_marks: &self.marks,
            mst_weight: Some(self.total),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::run_to_end;

    fn sample() -> Graph {
        Graph::undirected(
            6,
            &[
                (0, 1, 7),
                (0, 2, 1),
                (1, 2, 5),
                (2, 3, 6),
                (2, 4, 2),
                (3, 4, 4),
                (3, 5, 3),
                (4, 5, 8),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_spanning_tree_weight() {
        let mut kruskal = Kruskal::new(sample());
        let steps = run_to_end(&mut kruskal, 100);

        assert_eq!(kruskal.total_weight(), 15);
        assert_eq!(kruskal.tree_edges(), &[1, 4, 6, 5, 2]);
        // 8 tests and the final empty step
        assert_eq!(steps, 9);
    }

    #[test]
    fn test_marks_after_run() {
        let mut kruskal = Kruskal::new(sample());
        assert_eq!(kruskal.marks()[1], EdgeMark::Testing);

        run_to_end(&mut kruskal, 100);
        let included = kruskal
            .marks()
            .iter()
            .filter(|m| **m == EdgeMark::Included)
            .count();
        let rejected = kruskal
            .marks()
            .iter()
            .filter(|m| **m == EdgeMark::Rejected)
            .count();
        assert_eq!(included, 5);
        assert_eq!(rejected, 3);
    }

    #[test]
    fn test_forest_on_disconnected_graph() {
        let graph = Graph::undirected(4, &[(0, 1, 2), (2, 3, 5)]).unwrap();
        let mut kruskal = Kruskal::new(graph);
        run_to_end(&mut kruskal, 100);
        assert_eq!(kruskal.total_weight(), 7);
    }
}
