use crate::error::Result;
use crate::kdtree::node::{Node, NodeId};
use crate::kdtree::search;
use crate::kdtree::{DistanceMetric, Euclidean, Neighbor, NodeRef};
use crate::r#type::IndexableFloat;
use crate::store::PointStore;

/// An immutable k-d tree over point indices.
///
/// Built via [`KdTreeBuilder`][crate::KdTreeBuilder]. The tree owns an arena
/// of nodes and the build parameters; coordinates stay in the caller's
/// [`PointStore`], which must be passed back in for every query.
#[derive(Debug, Clone, PartialEq)]
pub struct KdTree<N: IndexableFloat> {
    pub(crate) nodes: Vec<Node<N>>,
    pub(crate) root: NodeId,
    pub(crate) dim: usize,
    pub(crate) leaf_size: usize,
    pub(crate) start_axis: usize,
    pub(crate) store_len: usize,
    pub(crate) num_indexed: usize,
}

impl<N: IndexableFloat> KdTree<N> {
    /// The dimension of the store this tree was built over.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// The maximum number of points per leaf this tree was built with.
    pub fn leaf_size(&self) -> usize {
        self.leaf_size
    }

    /// The axis the root partition splits on.
    pub fn start_axis(&self) -> usize {
        self.start_axis
    }

    /// The number of points this tree indexes.
    pub fn num_indexed(&self) -> usize {
        self.num_indexed
    }

    /// Access the root node for read-only manual traversal.
    pub fn root(&self) -> NodeRef<'_, N> {
        NodeRef::new(self, self.root)
    }

    /// Find the `k` nearest indexed points to `query` under Euclidean
    /// distance.
    ///
    /// Returns `min(k, num_indexed)` results, ascending by distance (ties by
    /// point index). `store` must be the store the tree was built over.
    pub fn nearest(&self, store: &PointStore<N>, query: &[N], k: usize) -> Result<Vec<Neighbor<N>>> {
        self.nearest_with_metric(store, query, k, &Euclidean)
    }

    /// Find the `k` nearest indexed points to `query` under a caller-chosen
    /// metric.
    pub fn nearest_with_metric(
        &self,
        store: &PointStore<N>,
        query: &[N],
        k: usize,
        metric: &impl DistanceMetric<N>,
    ) -> Result<Vec<Neighbor<N>>> {
        search::nearest(self, store, query, k, metric)
    }

    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> &Node<N> {
        &self.nodes[id.0 as usize]
    }
}
