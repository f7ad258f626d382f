//! A plain, unbalanced BST whose nodes know their parents. Knowing the parent means the next
//! value in preorder, inorder, or postorder can be found by walking a handful of links around a
//! node instead of re-traversing the tree from the root.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.find(&5).is_none());
//!
//! for value in [5, 3, 8, 1, 4, 7, 9] {
//!     tree.insert(value);
//! }
//!
//! // Inserting a duplicate leaves the tree untouched.
//! tree.insert(4);
//! assert_eq!(tree.len(), 7);
//!
//! assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), [1, 3, 4, 5, 7, 8, 9]);
//! assert_eq!(tree.preorder_next(&4), Some(&8));
//! assert_eq!(tree.inorder_next(&4), Some(&5));
//! assert_eq!(tree.postorder_next(&4), Some(&3));
//! ```

use std::cell::Cell;
use std::cmp::Ordering;
use std::fmt;

use crate::iter::{Inorder, Order, Postorder, Preorder, Traversal};
use crate::node::{Node, NodeId, NodeRef};

/// Which child slot of its anchor a value belongs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The value is smaller than the anchor.
    Left,
    /// The value is larger than the anchor.
    Right,
}

/// Where a value is, or would be, in an [`OrderedTree`].
#[derive(Debug, PartialEq, Eq)]
pub enum Locate<'a, E> {
    /// A node holding an equal value exists.
    Found(NodeRef<'a, E>),
    /// No equal value exists. Inserting it would make it the `side` child of `anchor`, which
    /// currently has no child there.
    Vacant {
        /// The deepest node visited by the search.
        anchor: NodeRef<'a, E>,
        /// The empty child slot of `anchor` the value belongs in.
        side: Side,
    },
}

impl<'a, E> Clone for Locate<'a, E> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<'a, E> Copy for Locate<'a, E> {}

/// An unbalanced Binary Search Tree of distinct values. Values are compared directly (there's no
/// separate key) and every comparison made while searching is tallied in
/// [`comparisons`](OrderedTree::comparisons).
pub struct OrderedTree<E> {
    nodes: Vec<Node<E>>,
    root: Option<NodeId>,
    comparisons: Cell<u64>,
}

impl<E> Default for OrderedTree<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for OrderedTree<E>
where
    E: Clone,
{
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            root: self.root,
            comparisons: self.comparisons.clone(),
        }
    }
}

impl<E> fmt::Debug for OrderedTree<E>
where
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedTree")
            .field("root", &self.root())
            .field("comparisons", &self.comparisons())
            .finish()
    }
}

impl<E> OrderedTree<E> {
    /// Generate a new, empty `OrderedTree`.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
            comparisons: Cell::new(0),
        }
    }

    /// The number of distinct values stored.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether nothing has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The total number of value comparisons made by this tree since it was created.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(1); // becomes the root, nothing to compare against
    /// tree.insert(2); // compared against 1
    /// tree.insert(3); // compared against 1 then 2
    ///
    /// assert_eq!(tree.comparisons(), 3);
    /// ```
    pub fn comparisons(&self) -> u64 {
        self.comparisons.get()
    }

    /// The root node, or `None` if the tree is empty.
    pub fn root(&self) -> Option<NodeRef<'_, E>> {
        self.root.map(|id| NodeRef::new(self, id))
    }

    /// The smallest value in the tree.
    pub fn min(&self) -> Option<&E> {
        let mut id = self.root?;
        while let Some(left) = self.node(id).left {
            id = left;
        }
        Some(&self.node(id).value)
    }

    /// The largest value in the tree.
    pub fn max(&self) -> Option<&E> {
        let mut id = self.root?;
        while let Some(right) = self.node(id).right {
            id = right;
        }
        Some(&self.node(id).value)
    }

    /// Iterates every value in preorder: a node, then its left subtree, then its right subtree.
    pub fn preorder(&self) -> Preorder<'_, E> {
        Preorder::new(self.root())
    }

    /// Iterates every value in ascending order.
    pub fn inorder(&self) -> Inorder<'_, E> {
        Inorder::new(self.root())
    }

    /// Iterates every value in postorder: a node's left subtree, then its right subtree, then the
    /// node itself.
    pub fn postorder(&self) -> Postorder<'_, E> {
        Postorder::new(self.root())
    }

    /// Iterates every value in the given order.
    pub fn traverse(&self, order: Order) -> Traversal<'_, E> {
        Traversal::new(order, self.root())
    }

    /// Potentially finds where the given value is stored, or where it would be attached if it
    /// were inserted. Returns `None` only when the tree is empty. Each comparison made on the way
    /// down is counted.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{Locate, OrderedTree, Side};
    ///
    /// let tree: OrderedTree<_> = [5, 3, 8].into_iter().collect();
    ///
    /// match tree.locate(&4) {
    ///     Some(Locate::Vacant { anchor, side }) => {
    ///         assert_eq!(anchor.value(), &3);
    ///         assert_eq!(side, Side::Right);
    ///     }
    ///     other => panic!("unexpected {:?}", other),
    /// }
    /// assert!(matches!(tree.locate(&8), Some(Locate::Found(n)) if n.value() == &8));
    /// ```
    pub fn locate(&self, value: &E) -> Option<Locate<'_, E>>
    where
        E: Ord,
    {
        let (id, ordering) = self.locate_id(value)?;
        let anchor = NodeRef::new(self, id);
        Some(match ordering {
            Ordering::Equal => Locate::Found(anchor),
            Ordering::Less => Locate::Vacant {
                anchor,
                side: Side::Left,
            },
            Ordering::Greater => Locate::Vacant {
                anchor,
                side: Side::Right,
            },
        })
    }

    /// Potentially finds the node holding the given value. If no node holds an equal value,
    /// `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.find(&1).map(|n| *n.value()), Some(1));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, value: &E) -> Option<NodeRef<'_, E>>
    where
        E: Ord,
    {
        self.find_id(value).map(|id| NodeRef::new(self, id))
    }

    /// Whether an equal value has been inserted.
    pub fn contains(&self, value: &E) -> bool
    where
        E: Ord,
    {
        self.find_id(value).is_some()
    }

    /// Inserts the given value and returns the stored value equal to it. Inserting a value that's
    /// already present does nothing, in which case the returned reference is to the value that
    /// was stored first.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    ///
    /// assert_eq!(tree.insert(1), &1);
    /// assert_eq!(tree.insert(1), &1);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: E) -> &E
    where
        E: Ord,
    {
        let id = match self.locate_id(&value) {
            None => {
                let id = self.push(Node::new(value, None));
                self.root = Some(id);
                id
            }
            Some((anchor, Ordering::Equal)) => anchor,
            Some((anchor, ordering)) => {
                let id = self.push(Node::new(value, Some(anchor)));
                let anchor = &mut self.nodes[anchor.0];
                if ordering == Ordering::Less {
                    anchor.left = Some(id);
                } else {
                    anchor.right = Some(id);
                }
                id
            }
        };

        &self.node(id).value
    }

    /// The value visited after the given one by a preorder traversal. `None` if the value isn't
    /// in the tree or is the last one visited.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    ///
    /// assert_eq!(tree.preorder_next(&5), Some(&3));
    /// assert_eq!(tree.preorder_next(&4), Some(&8));
    /// assert_eq!(tree.preorder_next(&9), None);
    /// ```
    pub fn preorder_next(&self, value: &E) -> Option<&E>
    where
        E: Ord,
    {
        let id = self.preorder_next_id(self.find_id(value)?)?;
        Some(&self.node(id).value)
    }

    /// The next larger value. `None` if the value isn't in the tree or is the largest.
    ///
    /// Stepping into a right subtree to find the successor counts as one comparison, on top of
    /// those made looking the value up.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    ///
    /// assert_eq!(tree.inorder_next(&5), Some(&7));
    /// assert_eq!(tree.inorder_next(&4), Some(&5));
    /// assert_eq!(tree.inorder_next(&9), None);
    /// ```
    pub fn inorder_next(&self, value: &E) -> Option<&E>
    where
        E: Ord,
    {
        let id = self.inorder_next_id(self.find_id(value)?)?;
        Some(&self.node(id).value)
    }

    /// The value visited after the given one by a postorder traversal. `None` if the value isn't
    /// in the tree or is the root, which postorder always visits last.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    ///
    /// assert_eq!(tree.postorder_next(&3), Some(&7));
    /// assert_eq!(tree.postorder_next(&9), Some(&8));
    /// assert_eq!(tree.postorder_next(&5), None);
    /// ```
    pub fn postorder_next(&self, value: &E) -> Option<&E>
    where
        E: Ord,
    {
        let id = self.postorder_next_id(self.find_id(value)?)?;
        Some(&self.node(id).value)
    }

    /// The value visited after the given one by a traversal in the given order.
    pub fn successor(&self, order: Order, value: &E) -> Option<&E>
    where
        E: Ord,
    {
        match order {
            Order::Preorder => self.preorder_next(value),
            Order::Inorder => self.inorder_next(value),
            Order::Postorder => self.postorder_next(value),
        }
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node<E> {
        &self.nodes[id.0]
    }

    fn push(&mut self, node: Node<E>) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    fn count_comparison(&self) {
        self.comparisons.set(self.comparisons.get() + 1);
    }

    /// Walks down from the root towards `value`. Returns the node holding an equal value with
    /// `Ordering::Equal`, or the last node visited along with how `value` compared to it.
    fn locate_id(&self, value: &E) -> Option<(NodeId, Ordering)>
    where
        E: Ord,
    {
        let mut current = self.root?;
        loop {
            let node = self.node(current);
            self.count_comparison();
            let (ordering, child) = match value.cmp(&node.value) {
                Ordering::Equal => return Some((current, Ordering::Equal)),
                Ordering::Less => (Ordering::Less, node.left),
                Ordering::Greater => (Ordering::Greater, node.right),
            };
            match child {
                Some(child) => current = child,
                None => return Some((current, ordering)),
            }
        }
    }

    fn find_id(&self, value: &E) -> Option<NodeId>
    where
        E: Ord,
    {
        match self.locate_id(value)? {
            (id, Ordering::Equal) => Some(id),
            _ => None,
        }
    }

    pub(crate) fn preorder_next_id(&self, id: NodeId) -> Option<NodeId> {
        let node = self.node(id);
        if let Some(left) = node.left {
            return Some(left);
        }
        if let Some(right) = node.right {
            return Some(right);
        }

        // A leaf: climb until some ancestor has a right subtree we haven't come up out of.
        let mut child = id;
        let mut parent = node.parent;
        while let Some(ancestor) = parent {
            let ancestor_node = self.node(ancestor);
            match ancestor_node.right {
                Some(right) if right != child => return Some(right),
                _ => {}
            }
            child = ancestor;
            parent = ancestor_node.parent;
        }

        None
    }

    pub(crate) fn inorder_next_id(&self, id: NodeId) -> Option<NodeId> {
        let node = self.node(id);
        if let Some(mut next) = node.right {
            self.count_comparison();
            while let Some(left) = self.node(next).left {
                next = left;
            }
            return Some(next);
        }

        let mut child = id;
        let mut parent = node.parent;
        while let Some(ancestor) = parent {
            let ancestor_node = self.node(ancestor);
            if ancestor_node.left == Some(child) {
                return Some(ancestor);
            }
            child = ancestor;
            parent = ancestor_node.parent;
        }

        None
    }

    pub(crate) fn postorder_next_id(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.node(id).parent?;
        match self.node(parent).right {
            // Coming up out of the left subtree with a right sibling to visit first: postorder
            // starts that subtree at its deepest leaf, favouring left children.
            Some(sibling) if sibling != id => {
                let mut leaf = sibling;
                loop {
                    let node = self.node(leaf);
                    match node.left.or(node.right) {
                        Some(child) => leaf = child,
                        None => return Some(leaf),
                    }
                }
            }
            _ => Some(parent),
        }
    }
}

impl<E> Extend<E> for OrderedTree<E>
where
    E: Ord,
{
    fn extend<I: IntoIterator<Item = E>>(&mut self, values: I) {
        for value in values {
            self.insert(value);
        }
    }
}

impl<E> FromIterator<E> for OrderedTree<E>
where
    E: Ord,
{
    fn from_iter<I: IntoIterator<Item = E>>(values: I) -> Self {
        let mut tree = Self::new();
        tree.extend(values);
        tree
    }
}

impl<'a, E> IntoIterator for &'a OrderedTree<E> {
    type Item = &'a E;
    type IntoIter = Inorder<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.inorder()
    }
}
