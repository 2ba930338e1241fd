use rand::rngs::StdRng;
use rand::Rng;

use crate::kdtree::{DistanceMetric, Neighbor};
use crate::store::PointStore;


pub(crate) fn random_store(rng: &mut StdRng, len: usize, dim: usize) -> PointStore<f64> {
    let coords: Vec<f64> = (0..len * dim).map(|_| rng.gen_range(-100.0..100.0)).collect();
    PointStore::from_flat(coords, dim).unwrap()
}

pub(crate) fn random_query(rng: &mut StdRng, dim: usize) -> Vec<f64> {
    (0..dim).map(|_| rng.gen_range(-120.0..120.0)).collect()
}

/// Reference answer: score every store index against the query and keep the
/// k best, ascending by distance with ties broken by index — the same total
/// order the tree search reports in.
pub(crate) fn brute_force_nearest(
    store: &PointStore<f64>,
    indices: impl Iterator<Item = u32>,
    query: &[f64],
    k: usize,
    metric: &impl DistanceMetric<f64>,
) -> Vec<Neighbor<f64>> {
    let mut all: Vec<Neighbor<f64>> = indices
        .map(|index| Neighbor {
            index,
            distance: metric.distance(query, store.point(index)),
        })
        .collect();
    all.sort();
    all.truncate(k);
    all
}
