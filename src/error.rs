use thiserror::Error;

/// Enum with all errors in this crate.
///
/// Every variant is a caller input error: it is detected eagerly at the API
/// boundary and no partial tree or result is produced.
#[derive(Error, Debug)]
pub enum KdIndexError {
    /// An argument violated an input constraint (empty index set, zero leaf
    /// size, zero `k`, mismatched dimensions, non-finite coordinates, ...).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A point index does not address a valid position in the store.
    #[error("Point index {index} out of range for store of length {len}.")]
    IndexOutOfRange {
        /// The offending index.
        index: u32,
        /// The store length it was checked against.
        len: usize,
    },
}

pub type Result<T> = std::result::Result<T, KdIndexError>;
