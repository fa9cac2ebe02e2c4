//! Arena-owned binary tree
//!
//! Nodes live in a slot vector and refer to their children by index. Every
//! node has exactly one owner (its parent slot, or the root handle), so there
//! is no sharing and no cycles. Removed slots go on a free list and are reused.
//!
//! All walks (insertion, balanced construction, the four traversal orders,
//! height) use explicit stacks or queues rather than recursion.

use std::collections::VecDeque;

/// Handle to a live node
pub type TreeNodeId = usize;

/// Visitation / search tag carried by each node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeNodeState {
    #[default]
    Idle,
    Visiting,
    Found,
    Visited,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

#[derive(Debug, Clone)]
pub struct TreeNode {
    pub value: i64,
    pub left: Option<TreeNodeId>,
    pub right: Option<TreeNodeId>,
    pub state: TreeNodeState,
}

impl TreeNode {
    fn leaf(value: i64) -> Self {
        TreeNode {
            value,
            left: None,
            right: None,
            state: TreeNodeState::Idle,
        }
    }

    pub fn child(&self, side: Side) -> Option<TreeNodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct BinaryTree {
    slots: Vec<Option<TreeNode>>,
    free: Vec<TreeNodeId>,
    root: Option<TreeNodeId>,
    len: usize,
}

impl BinaryTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a search tree by inserting `values` in order (duplicates go right)
    pub fn from_insertions(values: &[i64]) -> Self {
        let mut tree = BinaryTree::new();
        for &value in values {
            tree.insert(value);
        }
        tree
    }

    /// Build a height-balanced tree from a sorted slice
    ///
    /// The midpoint of each range becomes the subtree root, left half to the
    /// left, right half to the right. Pending ranges sit on an explicit stack
    /// together with the slot they attach to.
    pub fn balanced(sorted: &[i64]) -> Self {
        let mut tree = BinaryTree::new();
        // (start, end exclusive, attach point)
        let mut pending: Vec<(usize, usize, Option<(TreeNodeId, Side)>)> = vec![(0, sorted.len(), None)];

        while let Some((start, end, attach)) = pending.pop() {
            if start >= end {
                continue;
            }
            let mid = start + (end - 1 - start) / 2;
            let id = tree.alloc(sorted[mid]);
            match attach {
                None => tree.root = Some(id),
                Some((parent, side)) => tree.set_child(Some(parent), side, Some(id)),
            }
            pending.push((mid + 1, end, Some((id, Side::Right))));
            pending.push((start, mid, Some((id, Side::Left))));
        }
        tree
    }

    pub fn root(&self) -> Option<TreeNodeId> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn get(&self, id: TreeNodeId) -> Option<&TreeNode> {
        self.slots.get(id).and_then(|slot| slot.as_ref())
    }

    /// Borrow a live node
    ///
    /// Handles are only produced by this tree, so a stale handle is a logic
    /// error in the caller and panics.
    pub fn node(&self, id: TreeNodeId) -> &TreeNode {
        self.get(id)
            .unwrap_or_else(|| panic!("stale tree handle {}", id))
    }

    pub fn node_mut(&mut self, id: TreeNodeId) -> &mut TreeNode {
        self.slots
            .get_mut(id)
            .and_then(|slot| slot.as_mut())
            .unwrap_or_else(|| panic!("stale tree handle {}", id))
    }

    /// Allocate a detached leaf
    pub fn alloc(&mut self, value: i64) -> TreeNodeId {
        self.len += 1;
        match self.free.pop() {
            Some(id) => {
                self.slots[id] = Some(TreeNode::leaf(value));
                id
            }
            None => {
                self.slots.push(Some(TreeNode::leaf(value)));
                self.slots.len() - 1
            }
        }
    }

    /// Point `parent`'s `side` at `child`; a `None` parent replaces the root
    pub fn set_child(&mut self, parent: Option<TreeNodeId>, side: Side, child: Option<TreeNodeId>) {
        match parent {
            None => self.root = child,
            Some(parent) => {
                let node = self.node_mut(parent);
                match side {
                    Side::Left => node.left = child,
                    Side::Right => node.right = child,
                }
            }
        }
    }

    /// Free a single node whose children have already been re-homed
    pub fn release(&mut self, id: TreeNodeId) {
        if let Some(slot) = self.slots.get_mut(id) {
            if slot.take().is_some() {
                self.len -= 1;
                self.free.push(id);
            }
        }
    }

    /// Plain search-tree insertion; returns the new node
    pub fn insert(&mut self, value: i64) -> TreeNodeId {
        let new_id = self.alloc(value);
        let mut current = match self.root {
            None => {
                self.root = Some(new_id);
                return new_id;
            }
            Some(root) => root,
        };

        loop {
            let side = if value < self.node(current).value {
                Side::Left
            } else {
                Side::Right
            };
            match self.node(current).child(side) {
                Some(next) => current = next,
                None => {
                    self.set_child(Some(current), side, Some(new_id));
                    return new_id;
                }
            }
        }
    }

    /// Find the node holding `value` by search-tree descent
    pub fn find(&self, value: i64) -> Option<TreeNodeId> {
        let mut current = self.root;
        while let Some(id) = current {
            let node = self.node(id);
            if value == node.value {
                return Some(id);
            }
            current = if value < node.value { node.left } else { node.right };
        }
        None
    }

    pub fn contains(&self, value: i64) -> bool {
        self.find(value).is_some()
    }

    /// Number of levels (0 for an empty tree)
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<TreeNodeId> = self.root.into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level
                .iter()
                .flat_map(|&id| {
                    let node = self.node(id);
                    node.left.into_iter().chain(node.right)
                })
                .collect();
        }
        height
    }

    /// Depth of each live node from the root (root = 0), in pre-order
    pub fn depths(&self) -> Vec<(TreeNodeId, usize)> {
        let mut out = Vec::with_capacity(self.len);
        let mut stack: Vec<(TreeNodeId, usize)> = self.root.map(|r| (r, 0)).into_iter().collect();
        while let Some((id, depth)) = stack.pop() {
            out.push((id, depth));
            let node = self.node(id);
            if let Some(right) = node.right {
                stack.push((right, depth + 1));
            }
            if let Some(left) = node.left {
                stack.push((left, depth + 1));
            }
        }
        out
    }

    /// Left, root, right
    pub fn in_order(&self) -> Vec<TreeNodeId> {
        let mut out = Vec::with_capacity(self.len);
        let mut stack = Vec::new();
        let mut current = self.root;
        loop {
            while let Some(id) = current {
                stack.push(id);
                current = self.node(id).left;
            }
            match stack.pop() {
                Some(id) => {
                    out.push(id);
                    current = self.node(id).right;
                }
                None => break,
            }
        }
        out
    }

    /// Root, left, right
    pub fn pre_order(&self) -> Vec<TreeNodeId> {
        self.depths().into_iter().map(|(id, _)| id).collect()
    }

    /// Left, right, root
    pub fn post_order(&self) -> Vec<TreeNodeId> {
        let mut out = Vec::with_capacity(self.len);
        // (node, children already pushed)
        let mut stack: Vec<(TreeNodeId, bool)> = self.root.map(|r| (r, false)).into_iter().collect();
        while let Some((id, expanded)) = stack.pop() {
            if expanded {
                out.push(id);
                continue;
            }
            stack.push((id, true));
            let node = self.node(id);
            if let Some(right) = node.right {
                stack.push((right, false));
            }
            if let Some(left) = node.left {
                stack.push((left, false));
            }
        }
        out
    }

    /// Level by level, left to right
    pub fn level_order(&self) -> Vec<TreeNodeId> {
        let mut out = Vec::with_capacity(self.len);
        let mut queue: VecDeque<TreeNodeId> = self.root.into_iter().collect();
        while let Some(id) = queue.pop_front() {
            out.push(id);
            let node = self.node(id);
            queue.extend(node.left);
            queue.extend(node.right);
        }
        out
    }

    /// Values in sorted (in-order) position
    pub fn in_order_values(&self) -> Vec<i64> {
        self.in_order().into_iter().map(|id| self.node(id).value).collect()
    }

    /// Check the search-tree ordering: every left subtree smaller, every
    /// right subtree not smaller
    pub fn is_search_tree(&self) -> bool {
        let mut stack: Vec<(TreeNodeId, Option<i64>, Option<i64>)> =
            self.root.map(|r| (r, None, None)).into_iter().collect();
        while let Some((id, low, high)) = stack.pop() {
            let node = self.node(id);
            if low.is_some_and(|low| node.value < low) || high.is_some_and(|high| node.value >= high) {
                return false;
            }
            if let Some(left) = node.left {
                stack.push((left, low, Some(node.value)));
            }
            if let Some(right) = node.right {
                stack.push((right, Some(node.value), high));
            }
        }
        true
    }
}
