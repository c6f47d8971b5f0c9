//! Ready-made subdivision criteria.
//!
//! - [`NeverSubdivide`] and [`AlwaysSubdivide`] pin the tessellation to the input facet or to a
//!   uniform refinement at the configured depth.
//! - [`EdgeLengthCriterion`] refines until every edge is shorter than a threshold.
//! - [`ChordErrorCriterion`] refines a parametric patch until the linear midpoints lie within a
//!   tolerance of the exact surface, snapping each accepted midpoint onto it.
//! - [`FieldErrorCriterion`] refines until linearly interpolated field values match an exact
//!   field within a tolerance, replacing each accepted midpoint's fields by the exact values.
//!
//! # Examples
//!
//! ```rust
//! use adaptive_tessellation::core::criteria::EdgeLengthCriterion;
//! use adaptive_tessellation::core::traits::edge_subdivision_criterion::EdgeSubdivisionCriterion;
//! use adaptive_tessellation::core::vertex::VertexLayout;
//!
//! let criterion = EdgeLengthCriterion::new(1.0);
//! let layout = VertexLayout::new(0, 0);
//! let mut midpoint = [1.0, 0.0, 0.0];
//! assert!(criterion.evaluate_edge(&[0.0, 0.0, 0.0], &mut midpoint, &[2.0, 0.0, 0.0], layout));
//! assert!(!criterion.evaluate_edge(&[0.0, 0.0, 0.0], &mut midpoint, &[0.5, 0.0, 0.0], layout));
//! ```

use crate::core::collections::SmallBuffer;
use crate::core::traits::edge_subdivision_criterion::EdgeSubdivisionCriterion;
use crate::core::vertex::{GEOMETRIC_DIMENSION, MAX_FIELD_SIZE, VertexLayout};
use crate::geometry::traits::coordinate::CoordinateScalar;
use crate::geometry::util::squared_distance;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Never requests subdivision.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeverSubdivide;

impl<T: CoordinateScalar> EdgeSubdivisionCriterion<T> for NeverSubdivide {
    #[inline]
    fn evaluate_edge(&self, _: &[T], _: &mut [T], _: &[T], _: VertexLayout) -> bool {
        false
    }
}

/// Requests subdivision of every edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlwaysSubdivide;

impl<T: CoordinateScalar> EdgeSubdivisionCriterion<T> for AlwaysSubdivide {
    #[inline]
    fn evaluate_edge(&self, _: &[T], _: &mut [T], _: &[T], _: VertexLayout) -> bool {
        true
    }
}

/// Subdivides edges whose geometric length exceeds `max_length`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EdgeLengthCriterion<T> {
    max_length: T,
}

impl<T: CoordinateScalar> EdgeLengthCriterion<T> {
    /// Creates the criterion.
    #[must_use]
    pub const fn new(max_length: T) -> Self {
        Self { max_length }
    }

    /// The length threshold.
    #[must_use]
    pub const fn max_length(&self) -> T {
        self.max_length
    }
}

impl<T: CoordinateScalar> EdgeSubdivisionCriterion<T> for EdgeLengthCriterion<T> {
    #[inline]
    fn evaluate_edge(&self, v0: &[T], _: &mut [T], v1: &[T], _: VertexLayout) -> bool {
        squared_distance(v0, v1) > self.max_length * self.max_length
    }
}

/// Compares the linear midpoint against an exact parametric geometry.
///
/// `surface` maps a vertex's parametric coordinates to its exact position. An edge is split
/// when the linear midpoint is farther than `tolerance` from the exact image of the midpoint's
/// parameters, and the midpoint's geometry is then moved onto the exact position.
pub struct ChordErrorCriterion<T, F> {
    surface: F,
    tolerance: T,
}

impl<T, F> ChordErrorCriterion<T, F>
where
    T: CoordinateScalar,
    F: Fn(&[T]) -> [T; GEOMETRIC_DIMENSION],
{
    /// Creates the criterion.
    #[must_use]
    pub const fn new(surface: F, tolerance: T) -> Self {
        Self { surface, tolerance }
    }

    /// The chord error tolerance.
    #[must_use]
    pub const fn tolerance(&self) -> T {
        self.tolerance
    }
}

impl<T: fmt::Debug, F> fmt::Debug for ChordErrorCriterion<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChordErrorCriterion")
            .field("tolerance", &self.tolerance)
            .finish_non_exhaustive()
    }
}

impl<T, F> EdgeSubdivisionCriterion<T> for ChordErrorCriterion<T, F>
where
    T: CoordinateScalar,
    F: Fn(&[T]) -> [T; GEOMETRIC_DIMENSION],
{
    fn evaluate_edge(&self, _: &[T], midpoint: &mut [T], _: &[T], layout: VertexLayout) -> bool {
        let exact = (self.surface)(layout.parameters(midpoint));
        if squared_distance(&exact, midpoint) <= self.tolerance * self.tolerance {
            return false;
        }
        midpoint[..GEOMETRIC_DIMENSION].copy_from_slice(&exact);
        true
    }
}

/// Compares interpolated field values against an exact field.
///
/// `field` receives the midpoint's geometric coordinates and writes the exact field values
/// (exactly `layout.field_size()` of them) into its output slice. An edge is split when any
/// interpolated component differs from the exact one by more than `tolerance`, and the
/// midpoint's fields are then replaced by the exact values.
pub struct FieldErrorCriterion<T, F> {
    field: F,
    tolerance: T,
}

impl<T, F> FieldErrorCriterion<T, F>
where
    T: CoordinateScalar,
    F: Fn(&[T], &mut [T]),
{
    /// Creates the criterion.
    #[must_use]
    pub const fn new(field: F, tolerance: T) -> Self {
        Self { field, tolerance }
    }

    /// The per-component field error tolerance.
    #[must_use]
    pub const fn tolerance(&self) -> T {
        self.tolerance
    }
}

impl<T: fmt::Debug, F> fmt::Debug for FieldErrorCriterion<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldErrorCriterion")
            .field("tolerance", &self.tolerance)
            .finish_non_exhaustive()
    }
}

impl<T, F> EdgeSubdivisionCriterion<T> for FieldErrorCriterion<T, F>
where
    T: CoordinateScalar,
    F: Fn(&[T], &mut [T]),
{
    fn evaluate_edge(&self, _: &[T], midpoint: &mut [T], _: &[T], layout: VertexLayout) -> bool {
        if layout.field_size() == 0 {
            return false;
        }
        let mut exact: SmallBuffer<T, MAX_FIELD_SIZE> =
            std::iter::repeat_n(T::zero(), layout.field_size()).collect();
        (self.field)(layout.geometry(midpoint), &mut exact);

        let exceeds = layout
            .fields(midpoint)
            .iter()
            .zip(&exact)
            .any(|(&interpolated, &value)| (interpolated - value).abs() > self.tolerance);
        if exceeds {
            layout.fields_mut(midpoint).copy_from_slice(&exact);
        }
        exceeds
    }
}

// =============================================================================
// TESTS
// =============================================================================
