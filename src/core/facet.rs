//! Facet orders and the per-arity leaf callbacks.
//!
//! A *k-facet* is a simplex with `k + 1` vertices: a vertex (0), an edge (1), a triangle (2),
//! or a tetrahedron (3). Every leaf the subdivider produces is handed to exactly one callback,
//! chosen by its arity. Callbacks receive the leaf's vertex slices, the active subdivision
//! criterion, mutable per-pass private data, and read-only private data.
//!
//! # Examples
//!
//! ```rust
//! use adaptive_tessellation::core::facet::FacetOrder;
//!
//! let order = FacetOrder::try_from(2).unwrap();
//! assert_eq!(order, FacetOrder::Triangle);
//! assert_eq!(order.vertex_count(), 3);
//! assert_eq!(order.edge_count(), 3);
//! assert!(FacetOrder::try_from(4).is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// FACET ORDER
// =============================================================================

/// Order of a simplex handled by the tessellator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum FacetOrder {
    /// A single point.
    Vertex = 0,
    /// A segment with two vertices.
    Edge = 1,
    /// A triangle with three vertices.
    Triangle = 2,
    /// A tetrahedron with four vertices.
    Tetrahedron = 3,
}

impl FacetOrder {
    /// The orders that carry an embedding configuration and can be subdivided.
    pub const SUBDIVIDABLE: [Self; 3] = [Self::Edge, Self::Triangle, Self::Tetrahedron];

    /// The order as an index `0..=3`.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Number of vertices of a simplex of this order.
    #[inline]
    #[must_use]
    pub const fn vertex_count(self) -> usize {
        self.index() + 1
    }

    /// Number of edges of a simplex of this order.
    #[inline]
    #[must_use]
    pub const fn edge_count(self) -> usize {
        let n = self.vertex_count();
        n * (n - 1) / 2
    }

    /// The order with `vertex_count` vertices, if any.
    #[must_use]
    pub const fn from_vertex_count(vertex_count: usize) -> Option<Self> {
        match vertex_count {
            1 => Some(Self::Vertex),
            2 => Some(Self::Edge),
            3 => Some(Self::Triangle),
            4 => Some(Self::Tetrahedron),
            _ => None,
        }
    }
}

impl TryFrom<i32> for FacetOrder {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Vertex),
            1 => Ok(Self::Edge),
            2 => Ok(Self::Triangle),
            3 => Ok(Self::Tetrahedron),
            other => Err(other),
        }
    }
}

impl fmt::Display for FacetOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Vertex => "vertex",
            Self::Edge => "edge",
            Self::Triangle => "triangle",
            Self::Tetrahedron => "tetrahedron",
        };
        f.write_str(name)
    }
}

// =============================================================================
// CALLBACKS
// =============================================================================

/// Receives a 0-facet leaf.
pub type VertexCallback<C, T, P, Q> = dyn Fn(&[T], &C, &mut P, &Q) + Send + Sync;

/// Receives a 1-facet leaf.
pub type EdgeCallback<C, T, P, Q> = dyn Fn(&[T], &[T], &C, &mut P, &Q) + Send + Sync;

/// Receives a 2-facet leaf.
pub type TriangleCallback<C, T, P, Q> = dyn Fn(&[T], &[T], &[T], &C, &mut P, &Q) + Send + Sync;

/// Receives a 3-facet leaf.
pub type TetrahedronCallback<C, T, P, Q> =
    dyn Fn(&[T], &[T], &[T], &[T], &C, &mut P, &Q) + Send + Sync;

/// The four leaf callbacks of one tessellator. Any of them may be unregistered, in which case
/// leaves of that arity are dropped.
pub struct FacetCallbacks<C, T, P, Q> {
    vertex: Option<Box<VertexCallback<C, T, P, Q>>>,
    edge: Option<Box<EdgeCallback<C, T, P, Q>>>,
    triangle: Option<Box<TriangleCallback<C, T, P, Q>>>,
    tetrahedron: Option<Box<TetrahedronCallback<C, T, P, Q>>>,
}

impl<C, T, P, Q> Default for FacetCallbacks<C, T, P, Q> {
    fn default() -> Self {
        Self {
            vertex: None,
            edge: None,
            triangle: None,
            tetrahedron: None,
        }
    }
}

impl<C, T, P, Q> fmt::Debug for FacetCallbacks<C, T, P, Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FacetCallbacks")
            .field("vertex", &self.vertex.is_some())
            .field("edge", &self.edge.is_some())
            .field("triangle", &self.triangle.is_some())
            .field("tetrahedron", &self.tetrahedron.is_some())
            .finish()
    }
}

impl<C, T, P, Q> FacetCallbacks<C, T, P, Q> {
    /// Registers (or with `None`, clears) the 0-facet callback.
    pub fn set_vertex(&mut self, callback: Option<Box<VertexCallback<C, T, P, Q>>>) {
        self.vertex = callback;
    }

    /// Registers (or with `None`, clears) the 1-facet callback.
    pub fn set_edge(&mut self, callback: Option<Box<EdgeCallback<C, T, P, Q>>>) {
        self.edge = callback;
    }

    /// Registers (or with `None`, clears) the 2-facet callback.
    pub fn set_triangle(&mut self, callback: Option<Box<TriangleCallback<C, T, P, Q>>>) {
        self.triangle = callback;
    }

    /// Registers (or with `None`, clears) the 3-facet callback.
    pub fn set_tetrahedron(&mut self, callback: Option<Box<TetrahedronCallback<C, T, P, Q>>>) {
        self.tetrahedron = callback;
    }

    /// The registered 0-facet callback.
    #[must_use]
    pub fn vertex(&self) -> Option<&VertexCallback<C, T, P, Q>> {
        self.vertex.as_deref()
    }

    /// The registered 1-facet callback.
    #[must_use]
    pub fn edge(&self) -> Option<&EdgeCallback<C, T, P, Q>> {
        self.edge.as_deref()
    }

    /// The registered 2-facet callback.
    #[must_use]
    pub fn triangle(&self) -> Option<&TriangleCallback<C, T, P, Q>> {
        self.triangle.as_deref()
    }

    /// The registered 3-facet callback.
    #[must_use]
    pub fn tetrahedron(&self) -> Option<&TetrahedronCallback<C, T, P, Q>> {
        self.tetrahedron.as_deref()
    }

    /// Whether a callback is registered for `order`.
    #[must_use]
    pub fn is_registered(&self, order: FacetOrder) -> bool {
        match order {
            FacetOrder::Vertex => self.vertex.is_some(),
            FacetOrder::Edge => self.edge.is_some(),
            FacetOrder::Triangle => self.triangle.is_some(),
            FacetOrder::Tetrahedron => self.tetrahedron.is_some(),
        }
    }

    /// Hands one leaf to the callback matching its arity.
    ///
    /// Returns whether a callback fired.
    pub fn emit(&self, facet: &[&[T]], criterion: &C, private: &mut P, const_private: &Q) -> bool {
        let fired = match *facet {
            [a] => self.vertex.as_ref().map(|cb| cb(a, criterion, private, const_private)),
            [a, b] => self.edge.as_ref().map(|cb| cb(a, b, criterion, private, const_private)),
            [a, b, c] => self
                .triangle
                .as_ref()
                .map(|cb| cb(a, b, c, criterion, private, const_private)),
            [a, b, c, d] => self
                .tetrahedron
                .as_ref()
                .map(|cb| cb(a, b, c, d, criterion, private, const_private)),
            _ => None,
        };
        fired.is_some()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_count_vertices_and_edges() {
        let counts: Vec<_> = [
            FacetOrder::Vertex,
            FacetOrder::Edge,
            FacetOrder::Triangle,
            FacetOrder::Tetrahedron,
        ]
        .iter()
        .map(|order| (order.vertex_count(), order.edge_count()))
        .collect();
        assert_eq!(counts, vec![(1, 0), (2, 1), (3, 3), (4, 6)]);
    }

    #[test]
    fn order_conversions() {
        assert_eq!(FacetOrder::try_from(3), Ok(FacetOrder::Tetrahedron));
        assert_eq!(FacetOrder::try_from(-1), Err(-1));
        assert_eq!(FacetOrder::from_vertex_count(2), Some(FacetOrder::Edge));
        assert_eq!(FacetOrder::from_vertex_count(5), None);
        assert_eq!(FacetOrder::Triangle.to_string(), "triangle");
    }

    #[test]
    fn emit_dispatches_by_arity() {
        let mut callbacks: FacetCallbacks<(), f64, Vec<usize>, ()> = FacetCallbacks::default();
        callbacks.set_edge(Some(Box::new(|_: &[f64], _: &[f64], _: &(), seen: &mut Vec<usize>, _: &()| {
            seen.push(2);
        })));
        callbacks.set_tetrahedron(Some(Box::new(|_: &[f64], _: &[f64], _: &[f64], _: &[f64], _: &(), seen: &mut Vec<usize>, _: &()| {
            seen.push(4);
        })));

        let p = [0.0; 3];
        let mut seen = Vec::new();
        assert!(callbacks.emit(&[&p, &p], &(), &mut seen, &()));
        assert!(!callbacks.emit(&[&p, &p, &p], &(), &mut seen, &()));
        assert!(callbacks.emit(&[&p, &p, &p, &p], &(), &mut seen, &()));
        assert!(!callbacks.emit(&[], &(), &mut seen, &()));
        assert_eq!(seen, vec![2, 4]);

        assert!(callbacks.is_registered(FacetOrder::Edge));
        assert!(!callbacks.is_registered(FacetOrder::Vertex));
        assert_eq!(
            format!("{callbacks:?}"),
            "FacetCallbacks { vertex: false, edge: true, triangle: false, tetrahedron: true }"
        );
    }
}
