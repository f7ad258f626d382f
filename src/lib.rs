//! An ordered Binary Search Tree that can step to the next value in preorder, inorder, or
//! postorder from any node without walking the tree again.
//!
//! ## Layout
//!
//! [`OrderedTree`] keeps its values distinct and ordered: everything below a node's left child is
//! smaller than the node, everything below its right child is larger. Nodes sit in one `Vec` and
//! refer to each other by index. Alongside the two child indices each node stores the index of
//! its parent, which is what lets a [`NodeRef`] climb back towards the root.
//!
//! Searching takes `O(height)`. [`OrderedTree`] never rebalances, so inserting values in sorted
//! order builds a tree whose height is its length. Every comparison the tree makes is counted
//! (see [`OrderedTree::comparisons`]), which makes the cost of a bad insertion order visible.
//!
//! ## Successors
//!
//! Visiting the left subtree, then a node, then its right subtree yields values in sorted
//! order (inorder). Visiting a node before its subtrees gives preorder, and after them gives
//! postorder. Every node here also remembers its parent, so the value that follows a given one in
//! any of these orders is found by climbing and descending a few links around its node:
//!
//! ```
//! use ordered_tree::{Order, OrderedTree};
//!
//! let tree: OrderedTree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
//!
//! assert_eq!(tree.successor(Order::Inorder, &5), Some(&7));
//! assert_eq!(tree.successor(Order::Preorder, &5), Some(&3));
//! // The root always comes last in postorder.
//! assert_eq!(tree.successor(Order::Postorder, &5), None);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

#[cfg(feature = "driver")]
pub mod driver;
pub mod iter;
mod node;
mod tree;


pub use iter::{Inorder, Order, Postorder, Preorder, Traversal};
pub use node::NodeRef;
pub use tree::{Locate, OrderedTree, Side};
