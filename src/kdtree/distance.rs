//! Distance metrics for nearest-neighbor queries.
//!
//! The search algorithm is metric-agnostic: it only needs point-to-point
//! distances plus a lower bound on the distance across a splitting plane.
//! Any metric satisfying that bound keeps branch-and-bound pruning exact.

use crate::r#type::IndexableFloat;

/// A distance function between points of equal dimension.
pub trait DistanceMetric<N: IndexableFloat> {
    /// The distance between two points. Both slices have the store's
    /// dimension.
    fn distance(&self, a: &[N], b: &[N]) -> N;

    /// A lower bound on the distance between a query whose coordinate along
    /// the split axis is `coord` and any point on the far side of the plane
    /// at `split_value`.
    ///
    /// The default, the absolute axis difference, is a valid bound for any
    /// metric whose balls are convex in each axis (Euclidean, Manhattan,
    /// Chebyshev). An implementation may tighten it, never loosen it:
    /// overestimating lets the search prune subtrees that still hold true
    /// neighbors.
    #[inline]
    fn axis_distance(&self, coord: N, split_value: N) -> N {
        (coord - split_value).abs()
    }
}

/// Straight-line (L2) distance. The default metric.
#[derive(Debug, Clone, Copy, Default)]
pub struct Euclidean;

impl<N: IndexableFloat> DistanceMetric<N> for Euclidean {
    #[inline]
    fn distance(&self, a: &[N], b: &[N]) -> N {
        a.iter()
            .zip(b)
            .fold(N::zero(), |acc, (&x, &y)| {
                let d = x - y;
                acc + d * d
            })
            .sqrt()
    }
}

/// Taxicab (L1) distance.
#[derive(Debug, Clone, Copy, Default)]
pub struct Manhattan;

impl<N: IndexableFloat> DistanceMetric<N> for Manhattan {
    #[inline]
    fn distance(&self, a: &[N], b: &[N]) -> N {
        a.iter()
            .zip(b)
            .fold(N::zero(), |acc, (&x, &y)| acc + (x - y).abs())
    }
}
