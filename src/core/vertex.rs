//! Vertex layout for tessellation points.
//!
//! A tessellation vertex is a flat block of scalars:
//!
//! ```text
//! [ x, y, z | p_0 .. p_{k-1} | f_0 .. f_{s-1} ]
//!   geometry   parameters       field values
//! ```
//!
//! where `k` is the embedding dimension and `s` the field size configured for the facet order
//! being processed. [`VertexLayout`] captures one such layout and provides the interpolation
//! primitives the subdivider uses to create new vertices: edge midpoints and, for the few
//! tetrahedral cases that need one, the centroid.
//!
//! # Examples
//!
//! ```rust
//! use adaptive_tessellation::core::vertex::VertexLayout;
//!
//! // A triangle vertex with (r, s) parameters and one scalar field value.
//! let layout = VertexLayout::new(2, 1);
//! assert_eq!(layout.point_dimension(), 6);
//!
//! let a = [0.0, 0.0, 0.0, 0.0, 0.0, 10.0];
//! let b = [2.0, 0.0, 0.0, 1.0, 0.0, 20.0];
//! let midpoint = layout.midpoint(&a, &b);
//!
//! assert_eq!(layout.geometry(&midpoint), &[1.0, 0.0, 0.0]);
//! assert_eq!(layout.parameters(&midpoint), &[0.5, 0.0]);
//! assert_eq!(layout.fields(&midpoint), &[15.0]);
//! ```

#![forbid(unsafe_code)]

use crate::core::collections::PointBuffer;
use crate::geometry::traits::coordinate::CoordinateScalar;
use serde::{Deserialize, Serialize};

/// Number of geometric coordinates leading every vertex.
pub const GEOMETRIC_DIMENSION: usize = 3;

/// Largest number of parametric coordinates a vertex may carry.
pub const MAX_EMBEDDING_DIMENSION: usize = 8;

/// Largest number of interpolated field values a vertex may carry.
///
/// Large enough for a scalar, a vector, a symmetric tensor, a normal, and texture
/// coordinates at every point.
pub const MAX_FIELD_SIZE: usize = 18;

/// Longest vertex block the engine ever creates.
pub const MAX_POINT_DIMENSION: usize = GEOMETRIC_DIMENSION + MAX_EMBEDDING_DIMENSION + MAX_FIELD_SIZE;

/// Describes how the scalars of one vertex are split into geometry, parameters, and fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "LayoutSizes")]
pub struct VertexLayout {
    embedding_dimension: usize,
    field_size: usize,
}

/// Unchecked wire form of [`VertexLayout`]; deserialized sizes are clamped like [`VertexLayout::new`].
#[derive(Deserialize)]
struct LayoutSizes {
    embedding_dimension: usize,
    field_size: usize,
}

impl From<LayoutSizes> for VertexLayout {
    fn from(sizes: LayoutSizes) -> Self {
        Self::new(sizes.embedding_dimension, sizes.field_size)
    }
}

impl VertexLayout {
    /// Creates a layout, clamping both sizes to their supported maxima.
    #[must_use]
    pub const fn new(embedding_dimension: usize, field_size: usize) -> Self {
        Self {
            embedding_dimension: if embedding_dimension > MAX_EMBEDDING_DIMENSION {
                MAX_EMBEDDING_DIMENSION
            } else {
                embedding_dimension
            },
            field_size: if field_size > MAX_FIELD_SIZE {
                MAX_FIELD_SIZE
            } else {
                field_size
            },
        }
    }

    /// Number of parametric coordinates.
    #[inline]
    #[must_use]
    pub const fn embedding_dimension(&self) -> usize {
        self.embedding_dimension
    }

    /// Number of interpolated field values.
    #[inline]
    #[must_use]
    pub const fn field_size(&self) -> usize {
        self.field_size
    }

    /// Offset of the first field value within a vertex block.
    #[inline]
    #[must_use]
    pub const fn field_start(&self) -> usize {
        GEOMETRIC_DIMENSION + self.embedding_dimension
    }

    /// Total vertex length: `3 + embedding_dimension + field_size`.
    #[inline]
    #[must_use]
    pub const fn point_dimension(&self) -> usize {
        GEOMETRIC_DIMENSION + self.embedding_dimension + self.field_size
    }

    /// The geometric coordinates of `vertex`.
    #[inline]
    #[must_use]
    pub fn geometry<'a, T>(&self, vertex: &'a [T]) -> &'a [T] {
        &vertex[..GEOMETRIC_DIMENSION]
    }

    /// The parametric coordinates of `vertex`.
    #[inline]
    #[must_use]
    pub fn parameters<'a, T>(&self, vertex: &'a [T]) -> &'a [T] {
        &vertex[GEOMETRIC_DIMENSION..self.field_start()]
    }

    /// The field values of `vertex`.
    #[inline]
    #[must_use]
    pub fn fields<'a, T>(&self, vertex: &'a [T]) -> &'a [T] {
        &vertex[self.field_start()..self.point_dimension()]
    }

    /// Mutable access to the field values of `vertex`.
    #[inline]
    pub fn fields_mut<'a, T>(&self, vertex: &'a mut [T]) -> &'a mut [T] {
        let range = self.field_start()..self.point_dimension();
        &mut vertex[range]
    }

    /// Linear midpoint of `a` and `b`: every component is the arithmetic mean.
    ///
    /// The result is exactly `point_dimension()` long and lives inline on the stack.
    /// The computation is symmetric in its arguments, so two facets sharing an edge build
    /// bit-identical midpoints regardless of the edge's orientation in each facet.
    #[must_use]
    pub fn midpoint<T: CoordinateScalar>(&self, a: &[T], b: &[T]) -> PointBuffer<T> {
        let half = T::half();
        a[..self.point_dimension()]
            .iter()
            .zip(&b[..self.point_dimension()])
            .map(|(&p, &q)| (p + q) * half)
            .collect()
    }

    /// Centroid of four vertices: every component is the mean of the corners.
    #[must_use]
    pub fn centroid<T: CoordinateScalar>(&self, corners: [&[T]; 4]) -> PointBuffer<T> {
        let quarter = T::quarter();
        (0..self.point_dimension())
            .map(|i| ((corners[0][i] + corners[1][i]) + (corners[2][i] + corners[3][i])) * quarter)
            .collect()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn layout_sizes() {
        let layout = VertexLayout::new(3, 4);
        assert_eq!(layout.embedding_dimension(), 3);
        assert_eq!(layout.field_size(), 4);
        assert_eq!(layout.field_start(), 6);
        assert_eq!(layout.point_dimension(), 10);
    }

    #[test]
    fn layout_clamps_to_maxima() {
        let layout = VertexLayout::new(100, 100);
        assert_eq!(layout.embedding_dimension(), MAX_EMBEDDING_DIMENSION);
        assert_eq!(layout.field_size(), MAX_FIELD_SIZE);
        assert_eq!(layout.point_dimension(), MAX_POINT_DIMENSION);
    }

    #[test]
    fn slices_partition_the_vertex() {
        let layout = VertexLayout::new(1, 2);
        let v = [1.0, 2.0, 3.0, 0.5, 7.0, 8.0, 99.0];
        assert_eq!(layout.geometry(&v), &[1.0, 2.0, 3.0]);
        assert_eq!(layout.parameters(&v), &[0.5]);
        assert_eq!(layout.fields(&v), &[7.0, 8.0]);

        let mut w = v;
        layout.fields_mut(&mut w)[1] = -1.0;
        assert_eq!(w[5], -1.0);
        assert_eq!(w[6], 99.0);
    }

    #[test]
    fn midpoint_ignores_trailing_scalars() {
        let layout = VertexLayout::new(0, 1);
        let a = [0.0, 0.0, 0.0, 1.0, 1000.0];
        let b = [4.0, 2.0, 0.0, 3.0, -1000.0];
        let m = layout.midpoint(&a, &b);
        assert_eq!(m.len(), 4);
        assert_relative_eq!(m[0], 2.0);
        assert_relative_eq!(m[1], 1.0);
        assert_relative_eq!(m[3], 2.0);
        assert!(!m.spilled());
    }

    #[test]
    fn midpoint_is_symmetric() {
        let layout = VertexLayout::new(3, 0);
        let a = [0.1, 0.7, 0.3, 0.0, 0.3, 0.9];
        let b = [0.2, 0.6, 0.9, 1.0, 0.1, 0.3];
        assert_eq!(layout.midpoint(&a, &b), layout.midpoint(&b, &a));
    }

    #[test]
    fn centroid_averages_all_components() {
        let layout = VertexLayout::new(0, 1);
        let a = [0.0, 0.0, 0.0, 4.0];
        let b = [4.0, 0.0, 0.0, 8.0];
        let c = [0.0, 4.0, 0.0, 0.0];
        let d = [0.0, 0.0, 4.0, 0.0];
        let g = layout.centroid([&a, &b, &c, &d]);
        assert_eq!(g.as_slice(), &[1.0, 1.0, 1.0, 3.0]);
    }
}
