//! Per-facet-order vertex layout configuration.
//!
//! Each subdividable facet order (edges, triangles, tetrahedra) carries its own embedding
//! dimension (number of parametric coordinates) and field size (number of interpolated field
//! values). The point dimension of an order is always `3 + embedding_dimension + field_size`.
//!
//! The setters take the facet order as an `i32`: `1..=3` addresses one order and `-1`
//! addresses all three at once. Any other order is ignored. Sizes are clamped into their
//! supported range instead of being rejected.
//!
//! # Examples
//!
//! ```rust
//! use adaptive_tessellation::core::embedding::EmbeddingConfig;
//!
//! let mut config = EmbeddingConfig::default();
//! assert_eq!(config.embedding_dimension(2), 2);
//!
//! config.set_field_size(-1, 3);
//! assert_eq!(config.point_dimension(1), 7);
//! assert_eq!(config.point_dimension(3), 9);
//!
//! // Out-of-range sizes are clamped, out-of-range orders ignored.
//! config.set_embedding_dimension(3, 50);
//! assert_eq!(config.embedding_dimension(3), 8);
//! config.set_embedding_dimension(7, 1);
//! assert_eq!(config.embedding_dimension(7), -1);
//! ```

use crate::core::facet::FacetOrder;
use crate::core::vertex::{MAX_EMBEDDING_DIMENSION, MAX_FIELD_SIZE, VertexLayout};
use serde::{Deserialize, Serialize};

/// Facet order selector meaning "every subdividable order".
pub const ALL_FACET_ORDERS: i32 = -1;

/// Embedding dimension and field size for each facet order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmbeddingConfig {
    // Indexed by facet order; the vertex slot stays at (0, 0).
    layouts: [VertexLayout; 4],
}

impl Default for EmbeddingConfig {
    /// Embedding dimension `k` for `k`-facets and no field values.
    fn default() -> Self {
        Self {
            layouts: [
                VertexLayout::new(0, 0),
                VertexLayout::new(1, 0),
                VertexLayout::new(2, 0),
                VertexLayout::new(3, 0),
            ],
        }
    }
}

impl EmbeddingConfig {
    /// Sets the number of parametric coordinates for `facet_order` (or all orders with `-1`).
    pub fn set_embedding_dimension(&mut self, facet_order: i32, dimension: i32) {
        let dimension = clamp_size(dimension, MAX_EMBEDDING_DIMENSION);
        for order in selected_orders(facet_order) {
            let slot = &mut self.layouts[order.index()];
            *slot = VertexLayout::new(dimension, slot.field_size());
            tracing::trace!(%order, dimension, "embedding dimension updated");
        }
    }

    /// Sets the number of interpolated field values for `facet_order` (or all orders with `-1`).
    pub fn set_field_size(&mut self, facet_order: i32, size: i32) {
        let size = clamp_size(size, MAX_FIELD_SIZE);
        for order in selected_orders(facet_order) {
            let slot = &mut self.layouts[order.index()];
            *slot = VertexLayout::new(slot.embedding_dimension(), size);
            tracing::trace!(%order, size, "field size updated");
        }
    }

    /// Embedding dimension of `facet_order`, or `-1` if the order is not in `1..=3`.
    #[must_use]
    pub fn embedding_dimension(&self, facet_order: i32) -> i32 {
        self.query(facet_order, VertexLayout::embedding_dimension)
    }

    /// Field size of `facet_order`, or `-1` if the order is not in `1..=3`.
    #[must_use]
    pub fn field_size(&self, facet_order: i32) -> i32 {
        self.query(facet_order, VertexLayout::field_size)
    }

    /// Point dimension of `facet_order`, or `-1` if the order is not in `1..=3`.
    #[must_use]
    pub fn point_dimension(&self, facet_order: i32) -> i32 {
        self.query(facet_order, VertexLayout::point_dimension)
    }

    /// The vertex layout used for facets of `order`.
    ///
    /// Vertices handed to the vertex entry point carry no parameters or fields.
    #[inline]
    #[must_use]
    pub const fn layout(&self, order: FacetOrder) -> VertexLayout {
        self.layouts[order.index()]
    }

    fn query(&self, facet_order: i32, read: impl Fn(&VertexLayout) -> usize) -> i32 {
        subdividable_order(facet_order).map_or(-1, |order| {
            i32::try_from(read(&self.layouts[order.index()])).unwrap_or(i32::MAX)
        })
    }
}

fn subdividable_order(facet_order: i32) -> Option<FacetOrder> {
    FacetOrder::try_from(facet_order)
        .ok()
        .filter(|order| *order != FacetOrder::Vertex)
}

fn selected_orders(facet_order: i32) -> impl Iterator<Item = FacetOrder> {
    let all = facet_order == ALL_FACET_ORDERS;
    let single = subdividable_order(facet_order);
    if !all && single.is_none() {
        tracing::debug!(facet_order, "ignoring configuration for unsupported facet order");
    }
    FacetOrder::SUBDIVIDABLE
        .into_iter()
        .filter(move |order| all || single == Some(*order))
}

fn clamp_size(value: i32, max: usize) -> usize {
    usize::try_from(value).unwrap_or(0).min(max)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_facet_order() {
        let config = EmbeddingConfig::default();
        for k in 1..=3 {
            assert_eq!(config.embedding_dimension(k), k);
            assert_eq!(config.field_size(k), 0);
            assert_eq!(config.point_dimension(k), 3 + k);
        }
    }

    #[test]
    fn getters_reject_unsupported_orders() {
        let config = EmbeddingConfig::default();
        for k in [-2, -1, 0, 4, i32::MAX] {
            assert_eq!(config.embedding_dimension(k), -1);
            assert_eq!(config.field_size(k), -1);
            assert_eq!(config.point_dimension(k), -1);
        }
    }

    #[test]
    fn setters_clamp_sizes() {
        let mut config = EmbeddingConfig::default();
        config.set_embedding_dimension(1, -5);
        config.set_field_size(1, 1000);
        assert_eq!(config.embedding_dimension(1), 0);
        assert_eq!(config.field_size(1), 18);
        assert_eq!(config.point_dimension(1), 21);
    }

    #[test]
    fn all_orders_selector() {
        let mut config = EmbeddingConfig::default();
        config.set_embedding_dimension(ALL_FACET_ORDERS, 4);
        config.set_field_size(ALL_FACET_ORDERS, 2);
        for k in 1..=3 {
            assert_eq!(config.embedding_dimension(k), 4);
            assert_eq!(config.point_dimension(k), 9);
        }
    }

    #[test]
    fn unsupported_orders_are_ignored() {
        let mut config = EmbeddingConfig::default();
        let before = config;
        config.set_embedding_dimension(0, 5);
        config.set_embedding_dimension(4, 5);
        config.set_field_size(-3, 5);
        assert_eq!(config, before);
    }

    #[test]
    fn setters_touch_only_the_selected_order() {
        let mut config = EmbeddingConfig::default();
        config.set_field_size(2, 1);
        assert_eq!(config.field_size(1), 0);
        assert_eq!(config.field_size(2), 1);
        assert_eq!(config.field_size(3), 0);
        assert_eq!(config.layout(FacetOrder::Triangle), VertexLayout::new(2, 1));
        assert_eq!(config.layout(FacetOrder::Vertex).point_dimension(), 3);
    }
}
