//! The policy that decides which edges get bisected.
//!
//! The tessellator never decides on its own whether an edge is "too coarse". For every edge of
//! every facet it visits, it computes the linear midpoint and asks an
//! [`EdgeSubdivisionCriterion`]. The criterion may refine the midpoint in place (for example by
//! snapping it onto an exact surface) before answering.
//!
//! # Examples
//!
//! ```rust
//! use adaptive_tessellation::core::traits::edge_subdivision_criterion::{
//!     EdgeSubdivisionCriterion, FnCriterion,
//! };
//! use adaptive_tessellation::core::vertex::VertexLayout;
//!
//! // Split every edge that crosses the plane x = 0.5.
//! let crosses = FnCriterion::new(|v0: &[f64], _: &mut [f64], v1: &[f64], _: VertexLayout| {
//!     (v0[0] - 0.5) * (v1[0] - 0.5) < 0.0
//! });
//!
//! let layout = VertexLayout::new(0, 0);
//! let mut midpoint = [0.5, 0.0, 0.0];
//! assert!(crosses.evaluate_edge(&[0.0, 0.0, 0.0], &mut midpoint, &[1.0, 0.0, 0.0], layout));
//! assert!(!crosses.evaluate_edge(&[0.0, 0.0, 0.0], &mut midpoint, &[0.2, 0.0, 0.0], layout));
//! ```

use crate::core::vertex::VertexLayout;
use crate::geometry::traits::coordinate::CoordinateScalar;
use std::fmt;

/// Decides whether an edge needs subdivision.
///
/// Implementations must be deterministic for identical inputs during one tessellation pass:
/// an edge shared by two facets is evaluated once per facet and both evaluations must agree
/// for the output to be conforming.
pub trait EdgeSubdivisionCriterion<T: CoordinateScalar> {
    /// Evaluates the edge `(v0, v1)`.
    ///
    /// `midpoint` holds the component-wise mean of `v0` and `v1`, exactly
    /// `layout.point_dimension()` values long. Returning `true` requests subdivision; the
    /// (possibly modified) midpoint then becomes a vertex of the children.
    fn evaluate_edge(&self, v0: &[T], midpoint: &mut [T], v1: &[T], layout: VertexLayout) -> bool;
}

impl<T, C> EdgeSubdivisionCriterion<T> for &C
where
    T: CoordinateScalar,
    C: EdgeSubdivisionCriterion<T> + ?Sized,
{
    #[inline]
    fn evaluate_edge(&self, v0: &[T], midpoint: &mut [T], v1: &[T], layout: VertexLayout) -> bool {
        (**self).evaluate_edge(v0, midpoint, v1, layout)
    }
}

impl<T, C> EdgeSubdivisionCriterion<T> for Box<C>
where
    T: CoordinateScalar,
    C: EdgeSubdivisionCriterion<T> + ?Sized,
{
    #[inline]
    fn evaluate_edge(&self, v0: &[T], midpoint: &mut [T], v1: &[T], layout: VertexLayout) -> bool {
        (**self).evaluate_edge(v0, midpoint, v1, layout)
    }
}

/// Adapts a closure into a criterion.
#[derive(Clone, Copy)]
pub struct FnCriterion<F> {
    evaluate: F,
}

impl<F> FnCriterion<F> {
    /// Wraps `evaluate`.
    #[must_use]
    pub const fn new(evaluate: F) -> Self {
        Self { evaluate }
    }
}

impl<F> fmt::Debug for FnCriterion<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnCriterion").finish_non_exhaustive()
    }
}

impl<T, F> EdgeSubdivisionCriterion<T> for FnCriterion<F>
where
    T: CoordinateScalar,
    F: Fn(&[T], &mut [T], &[T], VertexLayout) -> bool,
{
    #[inline]
    fn evaluate_edge(&self, v0: &[T], midpoint: &mut [T], v1: &[T], layout: VertexLayout) -> bool {
        (self.evaluate)(v0, midpoint, v1, layout)
    }
}
