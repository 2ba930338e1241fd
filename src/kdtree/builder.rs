use crate::error::{KdIndexError, Result};
use crate::kdtree::node::{Node, NodeId};
use crate::kdtree::KdTree;
use crate::r#type::IndexableFloat;
use crate::store::PointStore;

const DEFAULT_LEAF_SIZE: usize = 16;

/// A builder to create a [`KdTree`].
///
/// Construction recursively partitions the index set with the median-point
/// policy: indices are sorted along the current axis, the coordinate of the
/// element at position `n / 2` becomes the split value, everything before
/// that position goes to the left subtree and everything from it onward
/// (median point included) to the right. The split axis cycles
/// `(axis + 1) % dim` per level, starting from [`start_axis`][Self::start_axis].
///
/// Both halves of a split are always nonempty, so construction terminates
/// for any input — including a set of all-identical points.
#[derive(Debug, Clone)]
pub struct KdTreeBuilder {
    leaf_size: usize,
    start_axis: usize,
}

impl Default for KdTreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl KdTreeBuilder {
    /// Create a builder with the default leaf size and start axis 0.
    pub fn new() -> Self {
        Self {
            leaf_size: DEFAULT_LEAF_SIZE,
            start_axis: 0,
        }
    }

    /// Set the maximum number of points a leaf may hold. Must be at least 1
    /// (validated at build time).
    pub fn leaf_size(mut self, leaf_size: usize) -> Self {
        self.leaf_size = leaf_size;
        self
    }

    /// Set the axis the root partition splits on. Must be below the store's
    /// dimension (validated at build time).
    pub fn start_axis(mut self, start_axis: usize) -> Self {
        self.start_axis = start_axis;
        self
    }

    /// Build a tree over every point in `store`.
    pub fn build<N: IndexableFloat>(&self, store: &PointStore<N>) -> Result<KdTree<N>> {
        if store.len() > u32::MAX as usize {
            return Err(KdIndexError::InvalidInput(format!(
                "store holds {} points but the index addresses at most {}",
                store.len(),
                u32::MAX
            )));
        }
        let indices: Vec<u32> = (0..store.len() as u32).collect();
        self.build_subset(store, &indices)
    }

    /// Build a tree over a caller-chosen subset of `store`.
    ///
    /// `indices` must be nonempty and hold distinct, valid positions into
    /// the store.
    pub fn build_subset<N: IndexableFloat>(
        &self,
        store: &PointStore<N>,
        indices: &[u32],
    ) -> Result<KdTree<N>> {
        if self.leaf_size < 1 {
            return Err(KdIndexError::InvalidInput(
                "leaf size must be at least 1".to_string(),
            ));
        }
        if self.start_axis >= store.dim() {
            return Err(KdIndexError::InvalidInput(format!(
                "start axis {} out of range for dimension {}",
                self.start_axis,
                store.dim()
            )));
        }
        if indices.is_empty() {
            return Err(KdIndexError::InvalidInput(
                "cannot build a tree over an empty index set".to_string(),
            ));
        }

        let mut seen = vec![false; store.len()];
        for &index in indices {
            let slot = seen
                .get_mut(index as usize)
                .ok_or(KdIndexError::IndexOutOfRange {
                    index,
                    len: store.len(),
                })?;
            if *slot {
                return Err(KdIndexError::InvalidInput(format!(
                    "duplicate point index {index}"
                )));
            }
            *slot = true;
        }

        let mut scratch = indices.to_vec();
        let mut nodes = Vec::with_capacity(2 * (indices.len() / self.leaf_size).max(1));
        let root = build_node(store, &mut nodes, &mut scratch, self.start_axis, self.leaf_size);

        Ok(KdTree {
            nodes,
            root,
            dim: store.dim(),
            leaf_size: self.leaf_size,
            start_axis: self.start_axis,
            store_len: store.len(),
            num_indexed: indices.len(),
        })
    }
}

/// Recursively partition `indices`, pushing nodes into the arena in
/// post-order, and return the id of the subtree root.
fn build_node<N: IndexableFloat>(
    store: &PointStore<N>,
    nodes: &mut Vec<Node<N>>,
    indices: &mut [u32],
    axis: usize,
    leaf_size: usize,
) -> NodeId {
    if indices.len() <= leaf_size {
        nodes.push(Node::Leaf {
            point_indices: indices.iter().copied().collect(),
        });
        return NodeId((nodes.len() - 1) as u32);
    }

    // Store coordinates are finite, so the ordering is total. The index
    // tie-break makes the sort deterministic for equal coordinates.
    indices.sort_unstable_by(|&a, &b| {
        store
            .coord(a, axis)
            .partial_cmp(&store.coord(b, axis))
            .unwrap()
            .then_with(|| a.cmp(&b))
    });

    let mid = indices.len() / 2;
    let split_value = store.coord(indices[mid], axis);
    let next_axis = (axis + 1) % store.dim();

    let (left_half, right_half) = indices.split_at_mut(mid);
    let left = build_node(store, nodes, left_half, next_axis, leaf_size);
    let right = build_node(store, nodes, right_half, next_axis, leaf_size);

    nodes.push(Node::Internal {
        axis,
        split_value,
        left,
        right,
    });
    NodeId((nodes.len() - 1) as u32)
}
