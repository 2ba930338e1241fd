use crate::error::{KdIndexError, Result};
use crate::r#type::IndexableFloat;

/// An immutable collection of points sharing one dimension.
///
/// Coordinates are stored in a single flat buffer, `dim` values per point,
/// and points are addressed by their integer position. A
/// [`KdTree`][crate::KdTree] built over a store holds only these positions,
/// never coordinate copies, so the store must be passed back in for every
/// query. Borrowing it per call keeps the store alive for as long as any
/// tree is using it.
///
/// All coordinates are validated to be finite at construction; `NaN` and
/// infinities are rejected as [`KdIndexError::InvalidInput`]. This keeps
/// every coordinate comparison during build and search total.
#[derive(Debug, Clone, PartialEq)]
pub struct PointStore<N: IndexableFloat> {
    coords: Vec<N>,
    dim: usize,
}

impl<N: IndexableFloat> PointStore<N> {
    /// Create a store from per-point coordinate rows.
    ///
    /// Every row must have the same nonzero length; that length becomes the
    /// store's dimension.
    pub fn from_points<I>(points: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<[N]>,
    {
        let mut coords = Vec::new();
        let mut dim = None;
        for (pos, point) in points.into_iter().enumerate() {
            let point = point.as_ref();
            match dim {
                None => {
                    if point.is_empty() {
                        return Err(KdIndexError::InvalidInput(
                            "point dimension must be at least 1".to_string(),
                        ));
                    }
                    dim = Some(point.len());
                }
                Some(dim) => {
                    if point.len() != dim {
                        return Err(KdIndexError::InvalidInput(format!(
                            "point {} has dimension {} but the store has dimension {}",
                            pos,
                            point.len(),
                            dim
                        )));
                    }
                }
            }
            coords.extend_from_slice(point);
        }

        // An empty iterator leaves the dimension undetermined; pick 1 so the
        // store is still usable (building over it fails with an empty index
        // set either way).
        Self::from_flat(coords, dim.unwrap_or(1))
    }

    /// Create a store from an already-flat coordinate buffer holding `dim`
    /// values per point.
    pub fn from_flat(coords: Vec<N>, dim: usize) -> Result<Self> {
        if dim == 0 {
            return Err(KdIndexError::InvalidInput(
                "point dimension must be at least 1".to_string(),
            ));
        }
        if coords.len() % dim != 0 {
            return Err(KdIndexError::InvalidInput(format!(
                "flat buffer length {} is not a multiple of dimension {}",
                coords.len(),
                dim
            )));
        }
        if let Some(pos) = coords.iter().position(|c| !c.is_finite()) {
            return Err(KdIndexError::InvalidInput(format!(
                "non-finite coordinate {:?} at point {}",
                coords[pos],
                pos / dim
            )));
        }

        Ok(Self { coords, dim })
    }

    /// The number of points in this store.
    pub fn len(&self) -> usize {
        self.coords.len() / self.dim
    }

    /// Returns `true` if this store holds no points.
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// The dimension shared by every point in this store.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// The coordinates of the point at `index`, as a slice of length
    /// [`dim`][Self::dim].
    ///
    /// Panics if `index` is out of range; the indexing entry points
    /// ([`KdTreeBuilder::build_subset`][crate::KdTreeBuilder::build_subset])
    /// validate indices before any access.
    #[inline]
    pub fn point(&self, index: u32) -> &[N] {
        let start = index as usize * self.dim;
        &self.coords[start..start + self.dim]
    }

    /// The underlying flat coordinate buffer.
    pub fn coords(&self) -> &[N] {
        &self.coords
    }

    /// The coordinate of point `index` along `axis`.
    #[inline]
    pub(crate) fn coord(&self, index: u32, axis: usize) -> N {
        self.coords[index as usize * self.dim + axis]
    }
}
