//! Stepped binary-search-tree operations
//!
//! The tree is rebuilt from a fixed insertion sequence on every reset. Each
//! step compares the target with the node under the cursor:
//!
//! - equal: the node is tagged `Found` and the operation resolves (search
//!   reports it, insert reports a duplicate, delete removes it)
//! - different: the cursor moves to the matching child; an insert that finds
//!   that child empty attaches the new node there in the same step
//! - no node under the cursor: the target is absent
//!
//! A node with two children is deleted by copying its in-order successor's
//! value into it and unlinking the successor, whose right child takes its place.

use crate::automaton::{Automaton, Outcome, RunState, TreeView, View};
use crate::model::tree::{BinaryTree, Side, TreeNodeId, TreeNodeState};
use clap::ValueEnum;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BstOperation {
    #[value(alias = "i")]
    Insert,
    #[value(alias = "s")]
    Search,
    #[value(alias = "d")]
    Delete,
}

impl BstOperation {
    pub fn label(&self) -> &'static str {
        match self {
            BstOperation::Insert => "insert",
            BstOperation::Search => "search",
            BstOperation::Delete => "delete",
        }
    }
}

impl fmt::Display for BstOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub struct BstStepper {
    insertions: Vec<i64>,
    operation: BstOperation,
    target: i64,
    tree: BinaryTree,
    current: Option<TreeNodeId>,
    /// Node the cursor came from and the side it took
    parent: Option<(TreeNodeId, Side)>,
    trail: Vec<i64>,
    outcome: Option<Outcome>,
    run: RunState,
}

impl BstStepper {
    pub fn new(insertions: Vec<i64>, operation: BstOperation, target: i64) -> Self {
        let mut stepper = BstStepper {
            insertions,
            operation,
            target,
            tree: BinaryTree::new(),
            current: None,
            parent: None,
            trail: Vec::new(),
            outcome: None,
            run: RunState::new("Tree: BST"),
        };
        stepper.reset();
        stepper
    }

    pub fn operation(&self) -> BstOperation {
        self.operation
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn tree(&self) -> &BinaryTree {
        &self.tree
    }

    /// Values compared so far, root first
    pub fn trail(&self) -> &[i64] {
        &self.trail
    }

    fn resolve(&mut self, outcome: Outcome) {
        tracing::info!(
            operation = self.operation.label(),
            target = self.target,
            result = %outcome.label(),
            "bst operation resolved"
        );
        self.outcome = Some(outcome);
        self.run.finish();
    }

    /// Unlink `id`, reached from `parent`
    fn delete(&mut self, id: TreeNodeId) {
        let parent = self.parent.map(|(p, _)| p);
        let side = self.parent.map_or(Side::Left, |(_, side)| side);
        let node = self.tree.node(id);

        match (node.left, node.right) {
            (Some(_), Some(right)) => {
                let mut successor_parent = id;
                let mut successor_side = Side::Right;
                let mut successor = right;
                while let Some(left) = self.tree.node(successor).left {
                    successor_parent = successor;
                    successor_side = Side::Left;
                    successor = left;
                }

                let successor_node = self.tree.node(successor);
                let (value, orphan) = (successor_node.value, successor_node.right);
                self.tree.node_mut(id).value = value;
                self.tree.set_child(Some(successor_parent), successor_side, orphan);
                self.tree.release(successor);
                tracing::debug!(successor = value, "two-child delete spliced successor");
            }
            (child, None) | (None, child) => {
                self.tree.set_child(parent, side, child);
                self.tree.release(id);
                self.current = None;
            }
        }
    }

    fn descend(&mut self, id: TreeNodeId, side: Side) {
        match self.tree.node(id).child(side) {
            None if self.operation == BstOperation::Insert => {
                let new_id = self.tree.alloc(self.target);
                self.tree.node_mut(new_id).state = TreeNodeState::Found;
                self.tree.set_child(Some(id), side, Some(new_id));
                self.tree.node_mut(id).state = TreeNodeState::Visited;
                self.current = Some(new_id);
                self.resolve(Outcome::Inserted(self.target));
            }
            next => {
                self.parent = Some((id, side));
                self.current = next;
            }
        }
    }
}

impl Automaton for BstStepper {
    fn run_state(&self) -> &RunState {
        &self.run
    }

    fn run_state_mut(&mut self) -> &mut RunState {
        &mut self.run
    }

    fn reset(&mut self) {
        self.tree = BinaryTree::from_insertions(&self.insertions);
        self.current = self.tree.root();
        self.parent = None;
        self.trail.clear();
        self.outcome = None;
        self.run.reset();
    }

    fn advance(&mut self) {
        if let Some((previous, _)) = self.parent {
            self.tree.node_mut(previous).state = TreeNodeState::Visited;
        }

        let Some(id) = self.current else {
            if self.operation == BstOperation::Insert && self.tree.is_empty() {
                let root = self.tree.alloc(self.target);
                self.tree.node_mut(root).state = TreeNodeState::Found;
                self.tree.set_child(None, Side::Left, Some(root));
                self.current = Some(root);
                self.resolve(Outcome::Inserted(self.target));
            } else {
                self.resolve(Outcome::NotFound(self.target));
            }
            return;
        };

        let value = self.tree.node(id).value;
        self.tree.node_mut(id).state = TreeNodeState::Visiting;
        self.trail.push(value);

        if value == self.target {
            self.tree.node_mut(id).state = TreeNodeState::Found;
            match self.operation {
                BstOperation::Search => self.resolve(Outcome::Found(self.target)),
                BstOperation::Insert => self.resolve(Outcome::AlreadyPresent(self.target)),
                BstOperation::Delete => {
                    self.delete(id);
                    self.resolve(Outcome::Deleted(self.target));
                }
            }
            return;
        }

        let side = if self.target < value {
            Side::Left
        } else {
            Side::Right
        };
        self.descend(id, side);
    }

    fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    fn view(&self) -> View<'_> {
        View::Tree(TreeView {
            tree: &self.tree,
            current: self.current,
            trail: self.trail.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::run_to_end;

    const PRESET: [i64; 11] = [50, 30, 70, 20, 40, 60, 80, 25, 35, 45, 75];

    fn run(operation: BstOperation, target: i64) -> (BstStepper, usize) {
        let mut stepper = BstStepper::new(PRESET.to_vec(), operation, target);
        let steps = run_to_end(&mut stepper, 100);
        (stepper, steps)
    }

    #[test]
    fn test_search_found_within_height() {
        let (stepper, steps) = run(BstOperation::Search, 45);

        assert_eq!(stepper.outcome(), Some(Outcome::Found(45)));
        assert_eq!(stepper.trail(), &[50, 30, 40, 45]);
        assert!(steps <= stepper.tree().height());
    }

    #[test]
    fn test_search_absent() {
        let (stepper, steps) = run(BstOperation::Search, 65);

        assert_eq!(stepper.outcome(), Some(Outcome::NotFound(65)));
        assert_eq!(stepper.trail(), &[50, 70, 60]);
        assert_eq!(steps, 4);
    }

    #[test]
    fn test_insert_attaches_in_same_step() {
        let (stepper, steps) = run(BstOperation::Insert, 65);

        assert_eq!(stepper.outcome(), Some(Outcome::Inserted(65)));
        assert_eq!(steps, 3);
        assert!(stepper.tree().contains(65));
        assert!(stepper.tree().is_search_tree());
        assert_eq!(stepper.tree().len(), 12);
    }

    #[test]
    fn test_insert_duplicate() {
        let (stepper, _) = run(BstOperation::Insert, 40);

        assert_eq!(stepper.outcome(), Some(Outcome::AlreadyPresent(40)));
        assert_eq!(stepper.tree().len(), 11);
    }

    #[test]
    fn test_delete_leaf_and_single_child() {
        let (stepper, _) = run(BstOperation::Delete, 25);
        assert_eq!(stepper.outcome(), Some(Outcome::Deleted(25)));
        assert!(!stepper.tree().contains(25));
        assert_eq!(stepper.tree().len(), 10);

        let (stepper, _) = run(BstOperation::Delete, 80);
        assert_eq!(
            stepper.tree().in_order_values(),
            vec![20, 25, 30, 35, 40, 45, 50, 60, 70, 75]
        );
        assert!(stepper.tree().is_search_tree());
    }

    #[test]
    fn test_delete_two_children_splices_successor() {
        let (stepper, _) = run(BstOperation::Delete, 30);

        let tree = stepper.tree();
        assert_eq!(
            tree.in_order_values(),
            vec![20, 25, 35, 40, 45, 50, 60, 70, 75, 80]
        );
        assert!(tree.is_search_tree());
        let replaced = tree.node(tree.root().unwrap()).left.unwrap();
        assert_eq!(tree.node(replaced).value, 35);
    }

    #[test]
    fn test_delete_root() {
        let (stepper, steps) = run(BstOperation::Delete, 50);

        assert_eq!(steps, 1);
        let tree = stepper.tree();
        assert_eq!(tree.node(tree.root().unwrap()).value, 60);
        assert!(tree.is_search_tree());
        assert!(!tree.contains(50));
    }

    #[test]
    fn test_insert_into_empty_tree() {
        let mut stepper = BstStepper::new(Vec::new(), BstOperation::Insert, 5);
        run_to_end(&mut stepper, 10);

        assert_eq!(stepper.outcome(), Some(Outcome::Inserted(5)));
        assert_eq!(stepper.tree().in_order_values(), vec![5]);
    }

    #[test]
    fn test_reset_restores_tree() {
        let (mut stepper, _) = run(BstOperation::Delete, 70);
        stepper.reset();

        assert!(stepper.tree().contains(70));
        assert!(stepper.trail().is_empty());
        assert_eq!(stepper.outcome(), None);
    }

    #[test]
    fn test_operation_parsing() {
        assert_eq!(BstOperation::from_str("Delete", true), Ok(BstOperation::Delete));
        assert_eq!(BstOperation::from_str("d", true), Ok(BstOperation::Delete));
        assert!(BstOperation::from_str("remove", true).is_err());
    }
}
