//! Binary-tree automata
//!
//! - [`bst`]: one search, insertion or deletion on a search tree, descending
//!   one level per step
//! - [`traversal`]: in-order, pre-order, post-order or level-order visit of a
//!   height-balanced tree, one node per step

pub mod bst;
pub mod traversal;

pub use bst::{BstOperation, BstStepper};
pub use traversal::{TraversalOrder, TreeTraversal};
