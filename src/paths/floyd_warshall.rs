// Floyd-Warshall all-pairs shortest paths, one cell per step

use crate::automaton::{Automaton, MatrixView, RunState, View};
use crate::model::distance::Distance;
use crate::model::graph::Graph;

pub struct FloydWarshall {
    graph: Graph,
    dist: Vec<Vec<Distance>>,
    k: usize,
    i: usize,
    j: usize,
    updates: usize,
    run: RunState,
}

impl FloydWarshall {
    pub fn new(graph: Graph) -> Self {
        let mut floyd = FloydWarshall {
            graph,
            dist: Vec::new(),
            k: 0,
            i: 0,
            j: 0,
            updates: 0,
            run: RunState::new("Path: Floyd-Warshall"),
        };
        floyd.reset();
        floyd
    }

    pub fn matrix(&self) -> &[Vec<Distance>] {
        &self.dist
    }

    /// Cells improved so far
    pub fn updates(&self) -> usize {
        self.updates
    }

    fn initial_matrix(graph: &Graph) -> Vec<Vec<Distance>> {
        let n = graph.node_count();
        let mut dist = vec![vec![Distance::Infinite; n]; n];
        for (i, row) in dist.iter_mut().enumerate() {
            row[i] = Distance::Finite(0);
        }
        for edge in graph.edges() {
            let weight = Distance::Finite(edge.weight);
            if weight < dist[edge.from][edge.to] {
                dist[edge.from][edge.to] = weight;
            }
            if !graph.is_directed() && weight < dist[edge.to][edge.from] {
                dist[edge.to][edge.from] = weight;
            }
        }
        dist
    }

    fn advance_cursor(&mut self) {
        let n = self.dist.len();
        self.j += 1;
        if self.j == n {
            self.j = 0;
            self.i += 1;
            if self.i == n {
                self.i = 0;
                self.k += 1;
                tracing::debug!(k = self.k, "intermediate node finished");
            }
        }
    }
}

impl Automaton for FloydWarshall {
    fn run_state(&self) -> &RunState {
        &self.run
    }

    fn run_state_mut(&mut self) -> &mut RunState {
        &mut self.run
    }

    fn reset(&mut self) {
        self.dist = Self::initial_matrix(&self.graph);
        self.k = 0;
        self.i = 0;
        self.j = 0;
        self.updates = 0;
        self.run.reset();
    }

    fn advance(&mut self) {
        if self.k >= self.dist.len() {
            self.run.finish();
            return;
        }

        let (k, i, j) = (self.k, self.i, self.j);
        let through = self.dist[i][k].join(self.dist[k][j]);
        if through.is_finite() && through < self.dist[i][j] {
            self.dist[i][j] = through;
            self.updates += 1;
        }
        self.advance_cursor();
    }

    fn view(&self) -> View<'_> {
        let cursor = (self.k < self.dist.len()).then_some((self.k, self.i, self.j));
        View::Matrix(MatrixView {
            dist: &self.dist,
            cursor,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::run_to_end;

    #[test]
    fn test_all_pairs_with_negative_edges() {
        let graph = Graph::directed(
            5,
            &[
                (0, 1, 3),
                (0, 2, 8),
                (0, 4, -4),
                (1, 3, 1),
                (1, 4, 7),
                (2, 1, 4),
                (3, 0, 2),
                (3, 2, -5),
                (4, 3, 6),
            ],
        )
        .unwrap();
        let mut floyd = FloydWarshall::new(graph);
        let steps = run_to_end(&mut floyd, 1000);

        let expected = [
            [0, 1, -3, 2, -4],
            [3, 0, -4, 1, -1],
            [7, 4, 0, 5, 3],
            [2, -1, -5, 0, -2],
            [8, 5, 1, 6, 0],
        ];
        for (i, row) in expected.iter().enumerate() {
            for (j, &d) in row.iter().enumerate() {
                assert_eq!(floyd.matrix()[i][j], Distance::Finite(d), "cell ({}, {})", i, j);
            }
        }
        assert_eq!(steps, 126);
    }

    #[test]
    fn test_disconnected_cells_stay_infinite() {
        let graph = Graph::directed(3, &[(0, 1, 5)]).unwrap();
        let mut floyd = FloydWarshall::new(graph);
        run_to_end(&mut floyd, 100);

        assert_eq!(floyd.matrix()[1][0], Distance::Infinite);
        assert_eq!(floyd.matrix()[0][2], Distance::Infinite);
        assert_eq!(floyd.updates(), 0);
    }
}
