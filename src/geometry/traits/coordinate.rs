//! Scalar abstraction for vertex coordinates, parameters, and field values.
//!
//! Every number carried by a tessellation vertex (geometry, parametric coordinates, and
//! interpolated field values) shares one scalar type. [`CoordinateScalar`] collects the
//! bounds the tessellator needs so that `f32` pipelines and `f64` pipelines use the same code.

use num_traits::Float;
use std::fmt::Debug;

/// Default tolerance for f32 floating-point comparisons.
pub const DEFAULT_TOLERANCE_F32: f32 = 1e-6;

/// Default tolerance for f64 floating-point comparisons.
pub const DEFAULT_TOLERANCE_F64: f64 = 1e-15;

/// Scalar type stored in tessellation vertices.
///
/// Implemented for every `Float` that is also `Debug + Default + Send + Sync`, which covers
/// `f32` and `f64`.
///
/// # Examples
///
/// ```rust
/// use adaptive_tessellation::geometry::traits::coordinate::CoordinateScalar;
///
/// fn half<T: CoordinateScalar>(x: T) -> T {
///     x * T::half()
/// }
///
/// assert_eq!(half(3.0_f64), 1.5);
/// assert_eq!(half(3.0_f32), 1.5);
/// assert!(f64::from(f32::default_tolerance()) > f64::default_tolerance());
/// ```
pub trait CoordinateScalar: Float + Debug + Default + Send + Sync + 'static {
    /// Tolerance appropriate for comparisons at this precision.
    fn default_tolerance() -> Self;

    /// The constant `0.5`.
    #[inline]
    #[must_use]
    fn half() -> Self {
        Self::one() / (Self::one() + Self::one())
    }

    /// The constant `0.25`.
    #[inline]
    #[must_use]
    fn quarter() -> Self {
        Self::half() * Self::half()
    }
}

impl CoordinateScalar for f32 {
    #[inline]
    fn default_tolerance() -> Self {
        DEFAULT_TOLERANCE_F32
    }
}

impl CoordinateScalar for f64 {
    #[inline]
    fn default_tolerance() -> Self {
        DEFAULT_TOLERANCE_F64
    }
}
