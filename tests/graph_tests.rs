// Integration tests for graph traversal and topological sorting

use algostep::automaton::{run_to_end, single_step, Automaton, Outcome, View};
use algostep::catalog::presets;
use algostep::graph::{DfsTopoSort, GraphTraversal, KahnTopoSort, TraversalKind};
use algostep::model::graph::Graph;
use algostep::model::{NodeId, NodeState};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const STEP_LIMIT: usize = 10_000;

/// Random DAG: edges only go from a lower to a higher rank in a shuffled ranking
fn random_dag(seed: u64, nodes: usize, edges: usize) -> (Graph, Vec<(NodeId, NodeId)>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut rank: Vec<NodeId> = (0..nodes).collect();
    for i in (1..nodes).rev() {
        let j = rng.gen_range(0..=i);
        rank.swap(i, j);
    }
    let mut pairs = Vec::new();
    for _ in 0..edges {
        let a = rng.gen_range(0..nodes);
        let b = rng.gen_range(0..nodes);
        if a < b {
            pairs.push((rank[a], rank[b]));
        }
    }
    let graph = Graph::unweighted(nodes, &pairs).expect("valid edges");
    (graph, pairs)
}

fn respects_edges(order: &[NodeId], edges: &[(NodeId, NodeId)], nodes: usize) -> bool {
    let mut position = vec![usize::MAX; nodes];
    for (index, &node) in order.iter().enumerate() {
        position[node] = index;
    }
    order.len() == nodes && edges.iter().all(|&(from, to)| position[from] < position[to])
}

#[test]
fn test_both_topological_sorts_respect_every_edge() {
    for seed in 0..10 {
        let (graph, edges) = random_dag(seed, 12, 30);

        let mut dfs = DfsTopoSort::new(graph.clone());
        run_to_end(&mut dfs, STEP_LIMIT);
        assert!(respects_edges(dfs.result(), &edges, 12), "dfs seed {}", seed);
        assert_eq!(dfs.outcome(), Some(Outcome::Complete));

        let mut kahn = KahnTopoSort::new(graph);
        run_to_end(&mut kahn, STEP_LIMIT);
        assert!(respects_edges(kahn.result(), &edges, 12), "kahn seed {}", seed);
        assert_eq!(kahn.outcome(), Some(Outcome::Complete));
    }
}

#[test]
fn test_topological_sorts_on_preset_dag() {
    let edges = presets::DAG_EDGES.to_vec();

    let mut dfs = DfsTopoSort::new(presets::dag().expect("preset graph"));
    run_to_end(&mut dfs, STEP_LIMIT);
    assert!(respects_edges(dfs.result(), &edges, presets::DAG_NODES));

    let mut kahn = KahnTopoSort::new(presets::dag().expect("preset graph"));
    run_to_end(&mut kahn, STEP_LIMIT);
    assert_eq!(kahn.result(), &[0, 1, 2, 3, 4, 5]);
}

#[test]
fn test_kahn_stops_short_on_cycle() {
    // 0 -> 1 -> 2 -> 1, plus an independent node 3
    let graph = Graph::unweighted(4, &[(0, 1), (1, 2), (2, 1)]).expect("valid edges");
    let mut kahn = KahnTopoSort::new(graph);
    run_to_end(&mut kahn, STEP_LIMIT);
    assert!(kahn.is_done());
    assert_eq!(
        kahn.outcome(),
        Some(Outcome::Incomplete {
            produced: 2,
            expected: 4
        })
    );
}

#[test]
fn test_traversals_visit_each_node_once() {
    for kind in [TraversalKind::DepthFirst, TraversalKind::BreadthFirst] {
        let mut traversal = GraphTraversal::new(presets::traversal_graph().expect("preset graph"), kind);
        run_to_end(&mut traversal, STEP_LIMIT);

        let mut seen = traversal.order().to_vec();
        seen.sort();
        assert_eq!(seen, (0..presets::TRAVERSAL_NODES).collect::<Vec<_>>(), "{:?}", kind);
        assert!(traversal.states().iter().all(|&s| s == NodeState::Done));
    }
}

#[test]
fn test_traversal_frontier_never_repeats() {
    let graph = presets::traversal_graph().expect("preset graph");
    let mut traversal = GraphTraversal::new(graph, TraversalKind::BreadthFirst);
    while !traversal.is_done() {
        single_step(&mut traversal);
        if let View::Graph(view) = traversal.view() {
            let mut frontier = view.frontier.clone();
            frontier.sort();
            frontier.dedup();
            assert_eq!(frontier.len(), view.frontier.len());
            for node in &view.frontier {
                assert_eq!(view.states[*node], NodeState::Frontier);
            }
        }
        assert!(traversal.steps_taken() < STEP_LIMIT);
    }
}

#[test]
fn test_graph_reset_is_repeatable() {
    let graph = presets::traversal_graph().expect("preset graph");
    let mut traversal = GraphTraversal::new(graph, TraversalKind::DepthFirst);
    run_to_end(&mut traversal, STEP_LIMIT);
    let first = traversal.order().to_vec();

    traversal.reset();
    assert!(traversal.order().is_empty());
    assert!(traversal.states().iter().all(|&s| s != NodeState::Done));
    run_to_end(&mut traversal, STEP_LIMIT);
    assert_eq!(traversal.order(), first.as_slice());
}
