//! Nodes of an [`OrderedTree`] and the borrowed handle used to walk them.

use std::fmt;
use std::ptr;

use crate::iter::{Inorder, Order, Postorder, Preorder, Traversal};
use crate::tree::OrderedTree;

/// Index of a `Node` in its tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(pub(crate) usize);

/// A single stored value. Children are owned through the arena; `parent` is only ever followed
/// upwards and must agree with the parent's `left` or `right`.
#[derive(Clone)]
pub(crate) struct Node<E> {
    pub(crate) value: E,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
    pub(crate) parent: Option<NodeId>,
}

impl<E> Node<E> {
    pub(crate) fn new(value: E, parent: Option<NodeId>) -> Self {
        Self {
            value,
            left: None,
            right: None,
            parent,
        }
    }
}

/// A handle to one node of an [`OrderedTree`]. Handles are cheap to copy and borrow the tree, so
/// the tree can't be modified while one is alive.
///
/// # Examples
///
/// ```
/// use ordered_tree::OrderedTree;
///
/// let tree: OrderedTree<_> = [2, 1, 3].into_iter().collect();
/// let root = tree.root().unwrap();
///
/// assert_eq!(root.value(), &2);
/// assert_eq!(root.left().map(|n| *n.value()), Some(1));
/// assert_eq!(root.right().unwrap().parent(), Some(root));
/// ```
pub struct NodeRef<'a, E> {
    tree: &'a OrderedTree<E>,
    id: NodeId,
}

impl<'a, E> Clone for NodeRef<'a, E> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<'a, E> Copy for NodeRef<'a, E> {}

impl<'a, E> PartialEq for NodeRef<'a, E> {
    /// Two handles are equal when they point at the same node of the same tree.
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}
impl<'a, E> Eq for NodeRef<'a, E> {}

impl<'a, E> fmt::Debug for NodeRef<'a, E>
where
    E: fmt::Debug,
{
    // TODO stack based Debug
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", self.value())
            .field("left", &self.left())
            .field("right", &self.right())
            .finish()
    }
}

impl<'a, E> NodeRef<'a, E> {
    pub(crate) fn new(tree: &'a OrderedTree<E>, id: NodeId) -> Self {
        Self { tree, id }
    }

    pub(crate) fn id(self) -> NodeId {
        self.id
    }

    pub(crate) fn tree(self) -> &'a OrderedTree<E> {
        self.tree
    }

    fn node(self) -> &'a Node<E> {
        self.tree.node(self.id)
    }

    fn to(self, id: Option<NodeId>) -> Option<Self> {
        id.map(|id| Self::new(self.tree, id))
    }

    /// The value stored at this node.
    pub fn value(self) -> &'a E {
        &self.node().value
    }

    /// The left child, holding smaller values.
    pub fn left(self) -> Option<Self> {
        self.to(self.node().left)
    }

    /// The right child, holding larger values.
    pub fn right(self) -> Option<Self> {
        self.to(self.node().right)
    }

    /// The node this one hangs from. `None` for the root.
    pub fn parent(self) -> Option<Self> {
        self.to(self.node().parent)
    }

    /// Whether this is the root of its tree.
    pub fn is_root(self) -> bool {
        self.node().parent.is_none()
    }

    /// Whether this node has no children.
    pub fn is_leaf(self) -> bool {
        let node = self.node();
        node.left.is_none() && node.right.is_none()
    }

    /// Iterates the subtree rooted here in preorder.
    pub fn preorder(self) -> Preorder<'a, E> {
        Preorder::new(Some(self))
    }

    /// Iterates the subtree rooted here in ascending order.
    pub fn inorder(self) -> Inorder<'a, E> {
        Inorder::new(Some(self))
    }

    /// Iterates the subtree rooted here in postorder.
    pub fn postorder(self) -> Postorder<'a, E> {
        Postorder::new(Some(self))
    }

    /// Iterates the subtree rooted here in the given order.
    pub fn traverse(self, order: Order) -> Traversal<'a, E> {
        Traversal::new(order, Some(self))
    }

    /// The node visited after this one by a preorder traversal of the whole tree.
    pub fn preorder_next(self) -> Option<Self> {
        self.to(self.tree.preorder_next_id(self.id))
    }

    /// The node holding the next larger value.
    ///
    /// Like [`OrderedTree::inorder_next`], stepping into a right subtree counts one comparison.
    pub fn inorder_next(self) -> Option<Self> {
        self.to(self.tree.inorder_next_id(self.id))
    }

    /// The node visited after this one by a postorder traversal of the whole tree.
    pub fn postorder_next(self) -> Option<Self> {
        self.to(self.tree.postorder_next_id(self.id))
    }

    /// The node visited after this one by a traversal of the whole tree in the given order.
    pub fn next(self, order: Order) -> Option<Self> {
        match order {
            Order::Preorder => self.preorder_next(),
            Order::Inorder => self.inorder_next(),
            Order::Postorder => self.postorder_next(),
        }
    }
}
