#![doc = include_str!("../README.md")]

mod error;
pub mod kdtree;
mod store;
mod r#type;

pub use error::{KdIndexError, Result};
pub use kdtree::{
    DistanceMetric, Euclidean, KdTree, KdTreeBuilder, Manhattan, Neighbor, NodeRef,
};
pub use r#type::IndexableFloat;
pub use store::PointStore;

#[cfg(test)]
pub(crate) mod test;
