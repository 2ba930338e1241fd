use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::{KdIndexError, Result};
use crate::kdtree::node::{Node, NodeId};
use crate::kdtree::{DistanceMetric, KdTree};
use crate::r#type::IndexableFloat;
use crate::store::PointStore;

/// A single nearest-neighbor result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor<N: IndexableFloat> {
    /// Position of the point in its store.
    pub index: u32,
    /// Distance from the query point under the metric the search ran with.
    pub distance: N,
}

impl<N: IndexableFloat> Eq for Neighbor<N> {}

impl<N: IndexableFloat> PartialOrd for Neighbor<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N: IndexableFloat> Ord for Neighbor<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        // We don't allow NaN. This should only panic on NaN
        self.distance
            .partial_cmp(&other.distance)
            .unwrap()
            .then_with(|| self.index.cmp(&other.index))
    }
}

/// A bounded collection of the `k` closest candidates seen so far, kept as
/// a max-heap on distance so the current worst is O(1) to inspect and
/// replace.
pub(crate) struct ResultSet<N: IndexableFloat> {
    capacity: usize,
    heap: BinaryHeap<Neighbor<N>>,
}

impl<N: IndexableFloat> ResultSet<N> {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            capacity,
            heap: BinaryHeap::with_capacity(capacity + 1),
        }
    }

    /// Offer a candidate. Below capacity it is always kept; at capacity it
    /// replaces the current worst only if strictly closer, so a tie at the
    /// worst distance keeps the incumbent.
    pub(crate) fn offer(&mut self, distance: N, index: u32) {
        if self.heap.len() < self.capacity {
            self.heap.push(Neighbor { index, distance });
        } else if let Some(worst) = self.heap.peek() {
            if distance < worst.distance {
                self.heap.pop();
                self.heap.push(Neighbor { index, distance });
            }
        }
    }

    /// The pruning bound: the distance a candidate must beat to enter the
    /// set. Infinite until `capacity` candidates are held — the far branch
    /// of a split must always be explored while the set is not yet full.
    pub(crate) fn worst_distance(&self) -> N {
        if self.heap.len() < self.capacity {
            return N::infinity();
        }
        match self.heap.peek() {
            Some(worst) => worst.distance,
            None => N::infinity(),
        }
    }

    /// Drain into a vec ascending by distance, ties by point index.
    pub(crate) fn into_sorted_vec(self) -> Vec<Neighbor<N>> {
        self.heap.into_sorted_vec()
    }
}

/// k-nearest-neighbor search entry point, shared by every metric.
pub(crate) fn nearest<N: IndexableFloat>(
    tree: &KdTree<N>,
    store: &PointStore<N>,
    query: &[N],
    k: usize,
    metric: &impl DistanceMetric<N>,
) -> Result<Vec<Neighbor<N>>> {
    if k < 1 {
        return Err(KdIndexError::InvalidInput(
            "k must be at least 1".to_string(),
        ));
    }
    if query.len() != tree.dim() {
        return Err(KdIndexError::InvalidInput(format!(
            "query has dimension {} but the tree was built over dimension {}",
            query.len(),
            tree.dim()
        )));
    }
    if let Some(pos) = query.iter().position(|c| !c.is_finite()) {
        return Err(KdIndexError::InvalidInput(format!(
            "non-finite query coordinate {:?} at axis {}",
            query[pos], pos
        )));
    }
    if store.dim() != tree.dim() || store.len() != tree.store_len {
        return Err(KdIndexError::InvalidInput(format!(
            "store of {} points in dimension {} is not the store this tree \
             was built over ({} points, dimension {})",
            store.len(),
            store.dim(),
            tree.store_len,
            tree.dim()
        )));
    }

    let mut results = ResultSet::new(k);
    visit(tree, store, query, metric, tree.root, &mut results);
    Ok(results.into_sorted_vec())
}

/// Depth-first visit: near branch first, far branch only while the
/// splitting plane is strictly closer than the current k-th best.
fn visit<N: IndexableFloat>(
    tree: &KdTree<N>,
    store: &PointStore<N>,
    query: &[N],
    metric: &impl DistanceMetric<N>,
    id: NodeId,
    results: &mut ResultSet<N>,
) {
    match tree.node(id) {
        Node::Leaf { point_indices } => {
            for &index in point_indices.iter() {
                results.offer(metric.distance(query, store.point(index)), index);
            }
        }
        Node::Internal {
            axis,
            split_value,
            left,
            right,
        } => {
            let (near, far) = if query[*axis] <= *split_value {
                (*left, *right)
            } else {
                (*right, *left)
            };

            visit(tree, store, query, metric, near, results);

            if metric.axis_distance(query[*axis], *split_value) < results.worst_distance() {
                visit(tree, store, query, metric, far, results);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_set_keeps_k_smallest() {
        let mut set = ResultSet::new(2);
        assert_eq!(set.worst_distance(), f64::INFINITY);

        set.offer(5.0, 0);
        // Not yet full: the bound must stay infinite so the far branch is
        // still explored.
        assert_eq!(set.worst_distance(), f64::INFINITY);

        set.offer(3.0, 1);
        assert_eq!(set.worst_distance(), 5.0);

        set.offer(4.0, 2);
        assert_eq!(set.worst_distance(), 4.0);

        // Not closer than the worst: rejected.
        set.offer(4.0, 3);
        assert_eq!(set.worst_distance(), 4.0);

        let results = set.into_sorted_vec();
        assert_eq!(
            results,
            vec![
                Neighbor {
                    index: 1,
                    distance: 3.0
                },
                Neighbor {
                    index: 2,
                    distance: 4.0
                },
            ]
        );
    }

    #[test]
    fn result_set_tie_at_worst_keeps_incumbent() {
        let mut set = ResultSet::new(1);
        set.offer(2.0, 7);
        set.offer(2.0, 3);
        let results = set.into_sorted_vec();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].index, 7);
    }

    #[test]
    fn neighbor_ordering_breaks_distance_ties_by_index() {
        let a = Neighbor {
            index: 2,
            distance: 1.0,
        };
        let b = Neighbor {
            index: 5,
            distance: 1.0,
        };
        assert!(a < b);
        assert_eq!(vec![b, a].into_iter().max(), Some(b));
    }
}
