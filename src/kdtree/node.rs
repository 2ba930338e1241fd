use tinyvec::TinyVec;

use crate::r#type::IndexableFloat;

/// Point indices held by a leaf. Small leaves stay inline; larger ones
/// spill to the heap.
pub(crate) type LeafIndices = TinyVec<[u32; 8]>;

/// Identifier of a node within its tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeId(pub(crate) u32);

/// A node in the arena owned by a [`KdTree`][crate::KdTree].
///
/// The arena preserves the strict-binary-tree shape: every `NodeId` appears
/// as a child of exactly one internal node (or is the root), so there is no
/// sharing and no cycles.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Node<N: IndexableFloat> {
    /// A split along `axis` at `split_value`. Points with axis coordinate
    /// strictly below the median position of the partition went left, the
    /// median point and everything after it went right.
    Internal {
        axis: usize,
        split_value: N,
        left: NodeId,
        right: NodeId,
    },
    /// A terminal node holding the point indices of its partition cell.
    /// Never empty, never longer than the tree's leaf size.
    Leaf { point_indices: LeafIndices },
}
