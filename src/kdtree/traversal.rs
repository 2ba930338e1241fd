//! Utilities to traverse the KdTree structure.
//!
//! A [`NodeRef`] is a read-only handle on one node, used to drive external
//! printing or plotting of the partition hierarchy without coupling those
//! concerns into construction or search.

use crate::kdtree::node::{Node, NodeId};
use crate::kdtree::KdTree;
use crate::r#type::IndexableFloat;

/// A read-only reference to a node in a [`KdTree`].
///
/// Obtain the root via [`KdTree::root`], then walk down with
/// [`left_child`][Self::left_child] / [`right_child`][Self::right_child].
/// Accessors return `None` when they do not apply to the node's variant.
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a, N: IndexableFloat> {
    tree: &'a KdTree<N>,
    id: NodeId,
}

impl<'a, N: IndexableFloat> NodeRef<'a, N> {
    pub(crate) fn new(tree: &'a KdTree<N>, id: NodeId) -> Self {
        Self { tree, id }
    }

    #[inline]
    fn node(&self) -> &'a Node<N> {
        self.tree.node(self.id)
    }

    /// Returns `true` if this is a leaf node holding point indices.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self.node(), Node::Leaf { .. })
    }

    /// Returns `true` if this is an internal node with children.
    #[inline]
    pub fn is_parent(&self) -> bool {
        !self.is_leaf()
    }

    /// The axis this node splits on, or `None` for a leaf.
    pub fn axis(&self) -> Option<usize> {
        match self.node() {
            Node::Internal { axis, .. } => Some(*axis),
            Node::Leaf { .. } => None,
        }
    }

    /// The split threshold along [`axis`][Self::axis], or `None` for a leaf.
    pub fn split_value(&self) -> Option<N> {
        match self.node() {
            Node::Internal { split_value, .. } => Some(*split_value),
            Node::Leaf { .. } => None,
        }
    }

    /// The child holding points with axis coordinate below the split, or
    /// `None` for a leaf.
    pub fn left_child(&self) -> Option<NodeRef<'a, N>> {
        match self.node() {
            Node::Internal { left, .. } => Some(NodeRef::new(self.tree, *left)),
            Node::Leaf { .. } => None,
        }
    }

    /// The child holding the median point and everything above the split,
    /// or `None` for a leaf.
    pub fn right_child(&self) -> Option<NodeRef<'a, N>> {
        match self.node() {
            Node::Internal { right, .. } => Some(NodeRef::new(self.tree, *right)),
            Node::Leaf { .. } => None,
        }
    }

    /// The point indices held by this leaf, or `None` for an internal node.
    pub fn point_indices(&self) -> Option<&'a [u32]> {
        match self.node() {
            Node::Leaf { point_indices } => Some(point_indices),
            Node::Internal { .. } => None,
        }
    }
}
