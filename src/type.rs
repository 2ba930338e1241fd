use std::fmt::Debug;

use num_traits::Float;

/// A trait for float types that can be used for indexed coordinates.
///
/// This trait is sealed and cannot be implemented for external types. The
/// index needs a true metric (square roots, an `infinity` sentinel for the
/// search bound), so coordinates are restricted to the standard float types
/// rather than any `Num`.
pub trait IndexableFloat: private::Sealed + Float + Debug + Send + Sync {}

impl IndexableFloat for f32 {}
impl IndexableFloat for f64 {}

// https://rust-lang.github.io/api-guidelines/future-proofing.html#sealed-traits-protect-against-downstream-implementations-c-sealed
mod private {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
}
