//! Scalar traits for planar coordinates.
//!
//! Every geometric type in this crate is generic over a floating-point scalar
//! `T: CoordinateScalar`. The trait consolidates the arithmetic bounds the
//! predicates need with validation ([`FiniteCheck`]) and the per-type default
//! tolerances used by [`MeshConfig`](crate::core::mesh::MeshConfig).
//!
//! # Examples
//!
//! ```rust
//! use planar_delaunay::geometry::traits::coordinate::{CoordinateScalar, FiniteCheck};
//!
//! assert!(1.5f64.is_finite_generic());
//! assert!(!f64::NAN.is_finite_generic());
//! assert_eq!(f64::default_tolerance(), 1e-10);
//! ```

use num_traits::Float;
use std::fmt::{Debug, Display};

/// Errors that can occur during coordinate validation.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum CoordinateValidationError {
    /// A coordinate value is invalid (NaN or infinite).
    #[error("Invalid coordinate at index {coordinate_index}: {coordinate_value}")]
    InvalidCoordinate {
        /// Index of the invalid coordinate (0 = x, 1 = y).
        coordinate_index: usize,
        /// Value of the invalid coordinate, as a string.
        coordinate_value: String,
    },
}

/// Default distance tolerance for `f32` coordinates.
pub const DEFAULT_TOLERANCE_F32: f32 = 1e-5;

/// Default distance tolerance for `f64` coordinates.
///
/// Matches the near-duplicate threshold used for vertex rejection.
pub const DEFAULT_TOLERANCE_F64: f64 = 1e-10;

/// Default relative in-circle tolerance for `f32` coordinates.
pub const DEFAULT_INCIRCLE_TOLERANCE_F32: f32 = 1e-6;

/// Default relative in-circle tolerance for `f64` coordinates.
pub const DEFAULT_INCIRCLE_TOLERANCE_F64: f64 = 1e-12;

// =============================================================================
// SUPPORTING TRAITS
// =============================================================================

/// Helper trait for checking finiteness of coordinates.
///
/// # Examples
///
/// ```
/// use planar_delaunay::geometry::traits::coordinate::FiniteCheck;
///
/// assert!(3.25f32.is_finite_generic());
/// assert!(!f64::INFINITY.is_finite_generic());
/// assert!(!f64::NEG_INFINITY.is_finite_generic());
/// ```
pub trait FiniteCheck {
    /// Returns true if the value is finite (not NaN or infinite).
    fn is_finite_generic(&self) -> bool;
}

macro_rules! impl_finite_check {
    ($($t:ty),*) => {
        $(
            impl FiniteCheck for $t {
                #[inline]
                fn is_finite_generic(&self) -> bool {
                    self.is_finite()
                }
            }
        )*
    };
}

impl_finite_check!(f32, f64);

/// Scalar type requirements for planar coordinates.
///
/// # Examples
///
/// ```rust
/// use planar_delaunay::geometry::traits::coordinate::CoordinateScalar;
///
/// fn nearly_equal<T: CoordinateScalar>(a: T, b: T) -> bool {
///     (a - b).abs() <= T::default_tolerance()
/// }
///
/// assert!(nearly_equal(1.0f64, 1.0 + 1e-12));
/// assert!(!nearly_equal(1.0f64, 1.001));
/// ```
pub trait CoordinateScalar: Float + FiniteCheck + Default + Debug + Display {
    /// Absolute distance tolerance used for duplicate, collinearity and
    /// point-on-edge classification.
    fn default_tolerance() -> Self;

    /// Relative tolerance applied to the in-circle determinant.
    fn default_incircle_tolerance() -> Self;
}

impl CoordinateScalar for f32 {
    fn default_tolerance() -> Self {
        DEFAULT_TOLERANCE_F32
    }

    fn default_incircle_tolerance() -> Self {
        DEFAULT_INCIRCLE_TOLERANCE_F32
    }
}

impl CoordinateScalar for f64 {
    fn default_tolerance() -> Self {
        DEFAULT_TOLERANCE_F64
    }

    fn default_incircle_tolerance() -> Self {
        DEFAULT_INCIRCLE_TOLERANCE_F64
    }
}
