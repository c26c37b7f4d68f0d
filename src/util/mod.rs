pub use nalgebra::{matrix, vector};
pub use num_traits::{Float, One, Zero};

mod aabb;
pub mod indexing;
pub use aabb::*;
pub use indexing::*;

pub type Coord<const GRID_DIMENSION: usize> =
    nalgebra::SVector<i32, { GRID_DIMENSION }>;

/// Inclusive min / max per dimension, one row per dimension.
pub type Bounds<const GRID_DIMENSION: usize> =
    nalgebra::SMatrix<i32, { GRID_DIMENSION }, 2>;

/// Element types the solver runs on.
/// Conversions are spelled out here so numeric literals and grid indices
/// never go through a fallible `NumCast`.
pub trait FloatTrait:
    Float + Send + Sync + std::fmt::Debug + std::fmt::Display + 'static
{
    /// Exact for the small literals used by the method (0.5, 1.0, 2.0).
    fn lit(value: f64) -> Self;

    fn from_index(index: usize) -> Self;

    fn as_f64(self) -> f64;
}

macro_rules! impl_float_trait {
    ($t:ty) => {
        impl FloatTrait for $t {
            #[inline]
            fn lit(value: f64) -> Self {
                value as $t
            }

            #[inline]
            fn from_index(index: usize) -> Self {
                index as $t
            }

            #[inline]
            fn as_f64(self) -> f64 {
                self as f64
            }
        }
    };
}

impl_float_trait!(f32);
impl_float_trait!(f64);
