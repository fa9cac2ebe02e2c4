// Visit a balanced tree one node per step in a chosen order

use crate::automaton::{Automaton, RunState, TreeView, View};
use crate::model::tree::{BinaryTree, TreeNodeId, TreeNodeState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOrder {
    InOrder,
    PreOrder,
    PostOrder,
    LevelOrder,
}

impl TraversalOrder {
    pub const ALL: [TraversalOrder; 4] = [
        TraversalOrder::InOrder,
        TraversalOrder::PreOrder,
        TraversalOrder::PostOrder,
        TraversalOrder::LevelOrder,
    ];

    fn collect(self, tree: &BinaryTree) -> Vec<TreeNodeId> {
        match self {
            TraversalOrder::InOrder => tree.in_order(),
            TraversalOrder::PreOrder => tree.pre_order(),
            TraversalOrder::PostOrder => tree.post_order(),
            TraversalOrder::LevelOrder => tree.level_order(),
        }
    }
}

pub struct TreeTraversal {
    values: Vec<i64>,
    order_kind: TraversalOrder,
    tree: BinaryTree,
    order: Vec<TreeNodeId>,
    /// Next position in `order`
    index: usize,
    run: RunState,
}

impl TreeTraversal {
    /// `values` must be sorted; the tree is built from their midpoints
    pub fn new(values: Vec<i64>, order_kind: TraversalOrder) -> Self {
        let name = match order_kind {
            TraversalOrder::InOrder => "Tree: In-order",
            TraversalOrder::PreOrder => "Tree: Pre-order",
            TraversalOrder::PostOrder => "Tree: Post-order",
            TraversalOrder::LevelOrder => "Tree: BFS",
        };
        let mut traversal = TreeTraversal {
            values,
            order_kind,
            tree: BinaryTree::new(),
            order: Vec::new(),
            index: 0,
            run: RunState::new(name),
        };
        traversal.reset();
        traversal
    }

    pub fn tree(&self) -> &BinaryTree {
        &self.tree
    }

    /// Values revealed so far
    pub fn visited_values(&self) -> Vec<i64> {
        self.order[..self.index]
            .iter()
            .map(|&id| self.tree.node(id).value)
            .collect()
    }
}

impl Automaton for TreeTraversal {
    fn run_state(&self) -> &RunState {
        &self.run
    }

    fn run_state_mut(&mut self) -> &mut RunState {
        &mut self.run
    }

    fn reset(&mut self) {
        self.tree = BinaryTree::balanced(&self.values);
        self.order = self.order_kind.collect(&self.tree);
        self.index = 0;
        self.run.reset();
    }

    fn advance(&mut self) {
        if self.index > 0 {
            let previous = self.order[self.index - 1];
            self.tree.node_mut(previous).state = TreeNodeState::Visited;
        }

        match self.order.get(self.index) {
            Some(&next) => {
                self.tree.node_mut(next).state = TreeNodeState::Visiting;
                self.index += 1;
            }
            None => self.run.finish(),
        }
    }

    fn view(&self) -> View<'_> {
        let current = match self.index {
            0 => None,
            _ if self.run.is_done() => None,
            i => Some(self.order[i - 1]),
        };
        View::Tree(TreeView {
            tree: &self.tree,
            current,
            trail: self.visited_values(),
        })
    }
}
