//! Depth-first traversals of an [`OrderedTree`](crate::OrderedTree) or any of its subtrees.
//!
//! Each traversal keeps its own stack of pending nodes, so it never recurses and can be cloned
//! part way through to restart from that point.

use std::iter::FusedIterator;

use crate::node::{NodeId, NodeRef};
use crate::tree::OrderedTree;

/// The three depth-first visiting orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    /// A node, then its left subtree, then its right subtree.
    Preorder,
    /// A node's left subtree, then the node, then its right subtree. For a BST this is ascending
    /// order.
    Inorder,
    /// A node's left subtree, then its right subtree, then the node.
    Postorder,
}

impl Order {
    /// Every order, for when a test or benchmark wants to try each one.
    pub const ALL: [Order; 3] = [Order::Preorder, Order::Inorder, Order::Postorder];
}

/// Splits an optional starting node into the tree to read from and the first stack entry.
fn start<'a, E>(node: Option<NodeRef<'a, E>>) -> (Option<&'a OrderedTree<E>>, Option<NodeId>) {
    match node {
        Some(node) => (Some(node.tree()), Some(node.id())),
        None => (None, None),
    }
}

/// Values of a subtree in preorder. See [`NodeRef::preorder`] and
/// [`OrderedTree::preorder`](crate::OrderedTree::preorder).
pub struct Preorder<'a, E> {
    tree: Option<&'a OrderedTree<E>>,
    stack: Vec<NodeId>,
}

impl<'a, E> Preorder<'a, E> {
    /// Traverses the subtree rooted at `node`, or nothing if there's no node.
    pub fn new(node: Option<NodeRef<'a, E>>) -> Self {
        let (tree, first) = start(node);
        Self {
            tree,
            stack: first.into_iter().collect(),
        }
    }
}

impl<'a, E> Clone for Preorder<'a, E> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            stack: self.stack.clone(),
        }
    }
}

impl<'a, E> Iterator for Preorder<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree?;
        let node = tree.node(self.stack.pop()?);
        // Right first so the left subtree comes off the stack first.
        self.stack.extend(node.right);
        self.stack.extend(node.left);
        Some(&node.value)
    }
}

impl<'a, E> FusedIterator for Preorder<'a, E> {}

/// Values of a subtree in ascending order. See [`NodeRef::inorder`] and
/// [`OrderedTree::inorder`](crate::OrderedTree::inorder).
pub struct Inorder<'a, E> {
    tree: Option<&'a OrderedTree<E>>,
    /// The left spine still to visit. The top is the next node to yield.
    stack: Vec<NodeId>,
}

impl<'a, E> Inorder<'a, E> {
    /// Traverses the subtree rooted at `node`, or nothing if there's no node.
    pub fn new(node: Option<NodeRef<'a, E>>) -> Self {
        let (tree, first) = start(node);
        let mut inorder = Self {
            tree,
            stack: Vec::new(),
        };
        inorder.push_left_spine(first);
        inorder
    }

    fn push_left_spine(&mut self, mut id: Option<NodeId>) {
        let Some(tree) = self.tree else {
            return;
        };
        while let Some(current) = id {
            self.stack.push(current);
            id = tree.node(current).left;
        }
    }
}

impl<'a, E> Clone for Inorder<'a, E> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            stack: self.stack.clone(),
        }
    }
}

impl<'a, E> Iterator for Inorder<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree?;
        let node = tree.node(self.stack.pop()?);
        self.push_left_spine(node.right);
        Some(&node.value)
    }
}

impl<'a, E> FusedIterator for Inorder<'a, E> {}

/// Values of a subtree in postorder. See [`NodeRef::postorder`] and
/// [`OrderedTree::postorder`](crate::OrderedTree::postorder).
pub struct Postorder<'a, E> {
    tree: Option<&'a OrderedTree<E>>,
    /// Pending nodes, each flagged with whether its children have already been pushed.
    stack: Vec<(NodeId, bool)>,
}

impl<'a, E> Postorder<'a, E> {
    /// Traverses the subtree rooted at `node`, or nothing if there's no node.
    pub fn new(node: Option<NodeRef<'a, E>>) -> Self {
        let (tree, first) = start(node);
        Self {
            tree,
            stack: first.map(|id| (id, false)).into_iter().collect(),
        }
    }
}

impl<'a, E> Clone for Postorder<'a, E> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            stack: self.stack.clone(),
        }
    }
}

impl<'a, E> Iterator for Postorder<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree?;
        loop {
            let (id, expanded) = self.stack.pop()?;
            let node = tree.node(id);
            if expanded {
                return Some(&node.value);
            }
            self.stack.push((id, true));
            self.stack.extend(node.right.map(|right| (right, false)));
            self.stack.extend(node.left.map(|left| (left, false)));
        }
    }
}

impl<'a, E> FusedIterator for Postorder<'a, E> {}

/// Any one of the three traversals, chosen at runtime by an [`Order`].
///
/// # Examples
///
/// ```
/// use ordered_tree::{Order, OrderedTree};
///
/// let tree: OrderedTree<_> = [2, 1, 3].into_iter().collect();
///
/// let postorder: Vec<_> = tree.traverse(Order::Postorder).copied().collect();
/// assert_eq!(postorder, [1, 3, 2]);
/// ```
pub enum Traversal<'a, E> {
    /// See [`Preorder`].
    Preorder(Preorder<'a, E>),
    /// See [`Inorder`].
    Inorder(Inorder<'a, E>),
    /// See [`Postorder`].
    Postorder(Postorder<'a, E>),
}

impl<'a, E> Traversal<'a, E> {
    /// Traverses the subtree rooted at `node` in the given order, or nothing if there's no node.
    pub fn new(order: Order, node: Option<NodeRef<'a, E>>) -> Self {
        match order {
            Order::Preorder => Self::Preorder(Preorder::new(node)),
            Order::Inorder => Self::Inorder(Inorder::new(node)),
            Order::Postorder => Self::Postorder(Postorder::new(node)),
        }
    }

    /// The order this traversal visits nodes in.
    pub fn order(&self) -> Order {
        match self {
            Self::Preorder(_) => Order::Preorder,
            Self::Inorder(_) => Order::Inorder,
            Self::Postorder(_) => Order::Postorder,
        }
    }
}

impl<'a, E> Clone for Traversal<'a, E> {
    fn clone(&self) -> Self {
        match self {
            Self::Preorder(t) => Self::Preorder(t.clone()),
            Self::Inorder(t) => Self::Inorder(t.clone()),
            Self::Postorder(t) => Self::Postorder(t.clone()),
        }
    }
}

impl<'a, E> Iterator for Traversal<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Preorder(t) => t.next(),
            Self::Inorder(t) => t.next(),
            Self::Postorder(t) => t.next(),
        }
    }
}

impl<'a, E> FusedIterator for Traversal<'a, E> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_node_yields_nothing() {
        for order in Order::ALL {
            assert_eq!(Traversal::<i32>::new(order, None).next(), None);
        }
    }

    #[test]
    fn single_node() {
        let tree: OrderedTree<_> = [1].into_iter().collect();

        for order in Order::ALL {
            let mut traversal = tree.traverse(order);
            assert_eq!(traversal.order(), order);
            assert_eq!(traversal.next(), Some(&1));
            assert_eq!(traversal.next(), None);
            assert_eq!(traversal.next(), None);
        }
    }

    #[test]
    fn clones_restart_where_they_left_off() {
        let tree: OrderedTree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();

        let mut postorder = tree.postorder();
        assert_eq!(postorder.next(), Some(&1));
        assert_eq!(postorder.next(), Some(&4));

        let rest = postorder.clone();
        assert_eq!(postorder.copied().collect::<Vec<_>>(), [3, 7, 9, 8, 5]);
        assert_eq!(rest.copied().collect::<Vec<_>>(), [3, 7, 9, 8, 5]);

        // And calling again starts over.
        assert_eq!(tree.postorder().count(), 7);
    }

    #[test]
    fn iterating_a_reference_is_inorder() {
        let tree: OrderedTree<_> = [2, 3, 1].into_iter().collect();

        let mut values = Vec::new();
        for value in &tree {
            values.push(*value);
        }
        assert_eq!(values, [1, 2, 3]);
    }

    #[test]
    fn degenerate_trees_do_not_recurse() {
        let ascending: OrderedTree<_> = (0..2_000).collect();
        let descending: OrderedTree<_> = (0..2_000).rev().collect();

        for tree in [&ascending, &descending] {
            assert!(tree.inorder().copied().eq(0..2_000));
            assert_eq!(tree.preorder().count(), 2_000);
            assert_eq!(tree.postorder().count(), 2_000);
        }
        assert!(ascending.preorder().copied().eq(0..2_000));
        assert!(ascending.postorder().copied().eq((0..2_000).rev()));
    }
}
