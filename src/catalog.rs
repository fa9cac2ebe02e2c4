//! The closed set of algorithms the host can run
//!
//! [`AlgorithmKind`] names every menu entry and knows how to build its
//! automaton from [`BuildParams`]. The fixed inputs (graphs, tree values and
//! insertion sequence) live here as presets so that the host and the tests
//! agree on them.

use crate::automaton::Automaton;
use crate::errors::GraphError;
use crate::graph::{DfsTopoSort, GraphTraversal, KahnTopoSort, TraversalKind};
use crate::model::array::ArraySource;
use crate::model::graph::Graph;
use crate::model::{NodeId, Weight};
use crate::paths::{BellmanFord, Dijkstra, FloydWarshall, Kruskal, Prim};
use crate::sorting::{BubbleSort, HeapSort, InsertionSort, MergeSort, QuickSort, SelectionSort};
use crate::tree::{BstOperation, BstStepper, TraversalOrder, TreeTraversal};
use clap::builder::PossibleValue;
use clap::ValueEnum;

pub mod presets {
    use super::*;

    /// Disconnected graph for DFS/BFS
    pub const TRAVERSAL_NODES: usize = 7;
    pub const TRAVERSAL_EDGES: [(NodeId, NodeId); 6] = [(0, 1), (0, 2), (1, 3), (2, 3), (4, 5), (4, 6)];

    pub const DAG_NODES: usize = 6;
    pub const DAG_EDGES: [(NodeId, NodeId); 6] = [(0, 2), (1, 2), (2, 3), (2, 4), (3, 5), (4, 5)];

    pub const DIJKSTRA_NODES: usize = 7;
    pub const DIJKSTRA_EDGES: [(NodeId, NodeId, Weight); 8] = [
        (0, 1, 4),
        (0, 2, 1),
        (1, 3, 1),
        (2, 1, 2),
        (2, 4, 5),
        (3, 5, 3),
        (4, 5, 1),
        (5, 6, 2),
    ];

    pub const BELLMAN_FORD_NODES: usize = 5;
    pub const BELLMAN_FORD_EDGES: [(NodeId, NodeId, Weight); 7] = [
        (0, 1, 6),
        (0, 2, 7),
        (1, 3, 5),
        (1, 2, 8),
        (2, 3, -4),
        (1, 4, -2),
        (3, 4, 3),
    ];

    pub const FLOYD_NODES: usize = 5;
    pub const FLOYD_EDGES: [(NodeId, NodeId, Weight); 9] = [
        (0, 1, 3),
        (0, 2, 8),
        (0, 4, -4),
        (1, 3, 1),
        (1, 4, 7),
        (2, 1, 4),
        (3, 0, 2),
        (3, 2, -5),
        (4, 3, 6),
    ];

    pub const MST_NODES: usize = 6;
    pub const MST_EDGES: [(NodeId, NodeId, Weight); 8] = [
        (0, 1, 7),
        (0, 2, 1),
        (1, 2, 5),
        (2, 3, 6),
        (2, 4, 2),
        (3, 4, 4),
        (3, 5, 3),
        (4, 5, 8),
    ];

    pub const PATH_SOURCE: NodeId = 0;

    pub const BST_INSERTIONS: [i64; 11] = [50, 30, 70, 20, 40, 60, 80, 25, 35, 45, 75];

    /// `10, 20, ..., 150`
    pub fn tree_values() -> Vec<i64> {
        (1..=15).map(|i| i * 10).collect()
    }

    pub fn traversal_graph() -> Result<Graph, GraphError> {
        Graph::unweighted(TRAVERSAL_NODES, &TRAVERSAL_EDGES)
    }

    pub fn dag() -> Result<Graph, GraphError> {
        Graph::unweighted(DAG_NODES, &DAG_EDGES)
    }

    pub fn dijkstra_graph() -> Result<Graph, GraphError> {
        Graph::undirected(DIJKSTRA_NODES, &DIJKSTRA_EDGES)
    }

    pub fn bellman_ford_graph() -> Result<Graph, GraphError> {
        Graph::directed(BELLMAN_FORD_NODES, &BELLMAN_FORD_EDGES)
    }

    pub fn floyd_graph() -> Result<Graph, GraphError> {
        Graph::directed(FLOYD_NODES, &FLOYD_EDGES)
    }

    pub fn mst_graph() -> Result<Graph, GraphError> {
        Graph::undirected(MST_NODES, &MST_EDGES)
    }
}

/// Menu section an algorithm is listed under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Sorting,
    Graph,
    Paths,
    Trees,
}

impl Category {
    pub fn title(&self) -> &'static str {
        match self {
            Category::Sorting => "Sorting",
            Category::Graph => "Graph traversal",
            Category::Paths => "Shortest paths & MST",
            Category::Trees => "Trees",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmKind {
    BubbleSort,
    SelectionSort,
    InsertionSort,
    MergeSort,
    QuickSort,
    HeapSort,
    Dfs,
    Bfs,
    TopoDfs,
    TopoKahn,
    Dijkstra,
    BellmanFord,
    FloydWarshall,
    Kruskal,
    Prim,
    Bst,
    InOrder,
    PreOrder,
    PostOrder,
    TreeBfs,
}

/// Everything an automaton may need besides its preset
#[derive(Debug, Clone)]
pub struct BuildParams {
    pub array: ArraySource,
    pub bst_operation: BstOperation,
    pub bst_value: i64,
}

impl Default for BuildParams {
    fn default() -> Self {
        BuildParams {
            array: ArraySource::default(),
            bst_operation: BstOperation::Search,
            bst_value: 45,
        }
    }
}

impl AlgorithmKind {
    /// Menu order
    pub const ALL: [AlgorithmKind; 20] = [
        AlgorithmKind::BubbleSort,
        AlgorithmKind::SelectionSort,
        AlgorithmKind::InsertionSort,
        AlgorithmKind::MergeSort,
        AlgorithmKind::QuickSort,
        AlgorithmKind::HeapSort,
        AlgorithmKind::Dfs,
        AlgorithmKind::Bfs,
        AlgorithmKind::TopoDfs,
        AlgorithmKind::TopoKahn,
        AlgorithmKind::Dijkstra,
        AlgorithmKind::BellmanFord,
        AlgorithmKind::FloydWarshall,
        AlgorithmKind::Kruskal,
        AlgorithmKind::Prim,
        AlgorithmKind::Bst,
        AlgorithmKind::InOrder,
        AlgorithmKind::PreOrder,
        AlgorithmKind::PostOrder,
        AlgorithmKind::TreeBfs,
    ];

    /// Name accepted by `--algo`
    pub fn cli_name(&self) -> &'static str {
        match self {
            AlgorithmKind::BubbleSort => "bubble",
            AlgorithmKind::SelectionSort => "selection",
            AlgorithmKind::InsertionSort => "insertion",
            AlgorithmKind::MergeSort => "merge",
            AlgorithmKind::QuickSort => "quick",
            AlgorithmKind::HeapSort => "heap",
            AlgorithmKind::Dfs => "dfs",
            AlgorithmKind::Bfs => "bfs",
            AlgorithmKind::TopoDfs => "topo-dfs",
            AlgorithmKind::TopoKahn => "kahn",
            AlgorithmKind::Dijkstra => "dijkstra",
            AlgorithmKind::BellmanFord => "bellman-ford",
            AlgorithmKind::FloydWarshall => "floyd-warshall",
            AlgorithmKind::Kruskal => "kruskal",
            AlgorithmKind::Prim => "prim",
            AlgorithmKind::Bst => "bst",
            AlgorithmKind::InOrder => "inorder",
            AlgorithmKind::PreOrder => "preorder",
            AlgorithmKind::PostOrder => "postorder",
            AlgorithmKind::TreeBfs => "tree-bfs",
        }
    }

    /// Menu label
    pub fn title(&self) -> &'static str {
        match self {
            AlgorithmKind::BubbleSort => "Bubble Sort",
            AlgorithmKind::SelectionSort => "Selection Sort",
            AlgorithmKind::InsertionSort => "Insertion Sort",
            AlgorithmKind::MergeSort => "Merge Sort",
            AlgorithmKind::QuickSort => "Quick Sort",
            AlgorithmKind::HeapSort => "Heap Sort",
            AlgorithmKind::Dfs => "Depth-First Search",
            AlgorithmKind::Bfs => "Breadth-First Search",
            AlgorithmKind::TopoDfs => "Topological Sort (DFS)",
            AlgorithmKind::TopoKahn => "Topological Sort (Kahn)",
            AlgorithmKind::Dijkstra => "Dijkstra",
            AlgorithmKind::BellmanFord => "Bellman-Ford",
            AlgorithmKind::FloydWarshall => "Floyd-Warshall",
            AlgorithmKind::Kruskal => "Kruskal MST",
            AlgorithmKind::Prim => "Prim MST",
            AlgorithmKind::Bst => "Binary Search Tree",
            AlgorithmKind::InOrder => "In-order Traversal",
            AlgorithmKind::PreOrder => "Pre-order Traversal",
            AlgorithmKind::PostOrder => "Post-order Traversal",
            AlgorithmKind::TreeBfs => "Level-order Traversal",
        }
    }

    pub fn category(&self) -> Category {
        match self {
            AlgorithmKind::BubbleSort
            | AlgorithmKind::SelectionSort
            | AlgorithmKind::InsertionSort
            | AlgorithmKind::MergeSort
            | AlgorithmKind::QuickSort
            | AlgorithmKind::HeapSort => Category::Sorting,
            AlgorithmKind::Dfs
            | AlgorithmKind::Bfs
            | AlgorithmKind::TopoDfs
            | AlgorithmKind::TopoKahn => Category::Graph,
            AlgorithmKind::Dijkstra
            | AlgorithmKind::BellmanFord
            | AlgorithmKind::FloydWarshall
            | AlgorithmKind::Kruskal
            | AlgorithmKind::Prim => Category::Paths,
            AlgorithmKind::Bst
            | AlgorithmKind::InOrder
            | AlgorithmKind::PreOrder
            | AlgorithmKind::PostOrder
            | AlgorithmKind::TreeBfs => Category::Trees,
        }
    }

    /// Whether the host must ask for a value before building
    pub fn needs_input(&self) -> bool {
        *self == AlgorithmKind::Bst
    }

    /// Case-insensitive lookup by `cli_name`
    pub fn from_name(name: &str) -> Option<AlgorithmKind> {
        <Self as ValueEnum>::from_str(name, true).ok()
    }

    /// Construct the automaton, already reset and paused
    pub fn build(&self, params: &BuildParams) -> Result<Box<dyn Automaton>, GraphError> {
        let automaton: Box<dyn Automaton> = match self {
            AlgorithmKind::BubbleSort => Box::new(BubbleSort::new(params.array.clone())),
            AlgorithmKind::SelectionSort => Box::new(SelectionSort::new(params.array.clone())),
            AlgorithmKind::InsertionSort => Box::new(InsertionSort::new(params.array.clone())),
            AlgorithmKind::MergeSort => Box::new(MergeSort::new(params.array.clone())),
            AlgorithmKind::QuickSort => Box::new(QuickSort::new(params.array.clone())),
            AlgorithmKind::HeapSort => Box::new(HeapSort::new(params.array.clone())),
            AlgorithmKind::Dfs => Box::new(GraphTraversal::new(
                presets::traversal_graph()?,
                TraversalKind::DepthFirst,
            )),
            AlgorithmKind::Bfs => Box::new(GraphTraversal::new(
                presets::traversal_graph()?,
                TraversalKind::BreadthFirst,
            )),
            AlgorithmKind::TopoDfs => Box::new(DfsTopoSort::new(presets::dag()?)),
            AlgorithmKind::TopoKahn => Box::new(KahnTopoSort::new(presets::dag()?)),
            AlgorithmKind::Dijkstra => Box::new(Dijkstra::new(
                presets::dijkstra_graph()?,
                presets::PATH_SOURCE,
            )?),
            AlgorithmKind::BellmanFord => Box::new(BellmanFord::new(
                presets::bellman_ford_graph()?,
                presets::PATH_SOURCE,
            )?),
            AlgorithmKind::FloydWarshall => Box::new(FloydWarshall::new(presets::floyd_graph()?)),
            AlgorithmKind::Kruskal => Box::new(Kruskal::new(presets::mst_graph()?)),
            AlgorithmKind::Prim => Box::new(Prim::new(presets::mst_graph()?)),
            AlgorithmKind::Bst => Box::new(BstStepper::new(
                presets::BST_INSERTIONS.to_vec(),
                params.bst_operation,
                params.bst_value,
            )),
            AlgorithmKind::InOrder => Box::new(TreeTraversal::new(
                presets::tree_values(),
                TraversalOrder::InOrder,
            )),
            AlgorithmKind::PreOrder => Box::new(TreeTraversal::new(
                presets::tree_values(),
                TraversalOrder::PreOrder,
            )),
            AlgorithmKind::PostOrder => Box::new(TreeTraversal::new(
                presets::tree_values(),
                TraversalOrder::PostOrder,
            )),
            AlgorithmKind::TreeBfs => Box::new(TreeTraversal::new(
                presets::tree_values(),
                TraversalOrder::LevelOrder,
            )),
        };
        tracing::debug!(algorithm = automaton.name(), "built");
        Ok(automaton)
    }
}

/// `--algo` accepts the menu's `cli_name`s
impl ValueEnum for AlgorithmKind {
    fn value_variants<'a>() -> &'a [Self] {
        &Self::ALL
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(PossibleValue::new(self.cli_name()).help(self.title()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip_and_are_unique() {
        for kind in AlgorithmKind::ALL {
            assert_eq!(AlgorithmKind::from_name(kind.cli_name()), Some(kind));
        }
        assert_eq!(AlgorithmKind::from_name("Bellman-Ford"), Some(AlgorithmKind::BellmanFord));
        assert_eq!(AlgorithmKind::from_name("bogo"), None);
    }

    #[test]
    fn test_every_kind_builds_paused() {
        let params = BuildParams {
            array: ArraySource::random(Some(3)),
            ..BuildParams::default()
        };
        for kind in AlgorithmKind::ALL {
            let automaton = kind.build(&params).unwrap();
            assert!(!automaton.is_running(), "{:?}", kind);
            assert!(!automaton.is_done(), "{:?}", kind);
            assert_eq!(automaton.steps_taken(), 0);
        }
    }

    #[test]
    fn test_only_bst_needs_input() {
        let needing: Vec<_> = AlgorithmKind::ALL
            .into_iter()
            .filter(|kind| kind.needs_input())
            .collect();
        assert_eq!(needing, vec![AlgorithmKind::Bst]);
    }
}
