//! The adaptive tessellation engine.
//!
//! [`AdaptiveTessellator`] owns a subdivision criterion, the per-order vertex layouts, the leaf
//! callbacks, and two pieces of caller data that every callback receives: a mutable *private*
//! value (typically the output mesh being built) and a read-only *const private* value
//! (typically lookup data the callbacks need).
//!
//! Each entry point takes one simplex, validates its vertices against the configured layout,
//! and drives the depth-first subdivision to completion before returning. Leaves reach the
//! callbacks synchronously, in depth-first template order.
//!
//! # Examples
//!
//! ```rust
//! use adaptive_tessellation::prelude::*;
//!
//! // Refine a triangle until every edge is at most 0.3 long, collecting the leaves.
//! let mut tessellator: AdaptiveTessellator<_, f64, Vec<[[f64; 3]; 3]>> =
//!     AdaptiveTessellator::new(EdgeLengthCriterion::new(0.3));
//! tessellator.set_embedding_dimension(2, 0);
//! tessellator.set_maximum_number_of_subdivisions(4);
//! tessellator.set_triangle_callback(|a, b, c, _, leaves: &mut Vec<_>, _| {
//!     let corner = |v: &[f64]| [v[0], v[1], v[2]];
//!     leaves.push([corner(a), corner(b), corner(c)]);
//! });
//!
//! tessellator
//!     .adaptively_sample_triangle(&[0.0, 0.0, 0.0], &[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0])
//!     .unwrap();
//!
//! // Two uniform rounds give 16 triangles with legs 0.25; each hypotenuse (about 0.354)
//! // is still too long, so every one of them is halved once more.
//! assert_eq!(tessellator.private_data().len(), 32);
//! ```

#![forbid(unsafe_code)]

use crate::core::algorithms::adaptive_subdivision::{SubdivisionPass, WorkStack};
use crate::core::case_table::{
    EDGE_TOPOLOGY, SimplexTopology, TETRAHEDRON_TOPOLOGY, TRIANGLE_TOPOLOGY,
};
use crate::core::diagnostics::CaseCounts;
use crate::core::embedding::EmbeddingConfig;
use crate::core::facet::{
    EdgeCallback, FacetCallbacks, FacetOrder, TetrahedronCallback, TriangleCallback,
    VertexCallback,
};
use crate::core::traits::edge_subdivision_criterion::EdgeSubdivisionCriterion;
use crate::core::vertex::VertexLayout;
use crate::geometry::traits::coordinate::CoordinateScalar;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// =============================================================================
// ERRORS
// =============================================================================

/// Errors reported by the tessellation entry points.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TessellationError {
    /// An input vertex is shorter than the configured point dimension.
    #[error(
        "{facet_order} vertex {vertex_index} has {found} values but the point dimension is {expected}"
    )]
    VertexTooShort {
        /// Order of the facet being sampled.
        facet_order: FacetOrder,
        /// Position of the offending vertex in the argument list.
        vertex_index: usize,
        /// Configured point dimension.
        expected: usize,
        /// Length of the vertex slice.
        found: usize,
    },
    /// The case table has no entry for an edge code.
    #[error("no case table entry for {facet_order} edge code {edge_code:#b}")]
    UnresolvedEdgeCode {
        /// Order of the facet being classified.
        facet_order: FacetOrder,
        /// The edge code that could not be resolved.
        edge_code: u8,
    },
    /// A decomposition template references a case, permutation, variant, or vertex that does
    /// not exist.
    #[error("{facet_order} case {case_id} references index {index} outside its tables")]
    TemplateOutOfBounds {
        /// Order of the facet being decomposed.
        facet_order: FacetOrder,
        /// Canonical case being instantiated.
        case_id: usize,
        /// The index that could not be resolved.
        index: usize,
    },
}

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Recursion depth limit used when none is configured.
pub const DEFAULT_MAXIMUM_NUMBER_OF_SUBDIVISIONS: u32 = 3;

/// Serializable engine settings.
///
/// # Examples
///
/// ```rust
/// use adaptive_tessellation::core::tessellator::TessellatorConfigBuilder;
///
/// let config = TessellatorConfigBuilder::default()
///     .maximum_number_of_subdivisions(6)
///     .build()
///     .unwrap();
/// assert_eq!(config.maximum_number_of_subdivisions, 6);
/// assert_eq!(config.embedding.point_dimension(3), 6);
/// ```
#[derive(Builder, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TessellatorConfig {
    /// Deepest subdivision level; facets at this level are emitted without evaluating edges.
    #[builder(default = "DEFAULT_MAXIMUM_NUMBER_OF_SUBDIVISIONS")]
    pub maximum_number_of_subdivisions: u32,
    /// Embedding dimension and field size per facet order.
    #[builder(default)]
    pub embedding: EmbeddingConfig,
}

impl Default for TessellatorConfig {
    fn default() -> Self {
        Self {
            maximum_number_of_subdivisions: DEFAULT_MAXIMUM_NUMBER_OF_SUBDIVISIONS,
            embedding: EmbeddingConfig::default(),
        }
    }
}

// =============================================================================
// TESSELLATOR
// =============================================================================

/// Adaptive edge-bisection tessellator.
///
/// - `C` is the subdivision criterion.
/// - `T` is the vertex scalar type.
/// - `P` is the private data handed mutably to every callback.
/// - `Q` is the const private data handed immutably to every callback.
pub struct AdaptiveTessellator<C, T = f64, P = (), Q = ()> {
    criterion: C,
    config: TessellatorConfig,
    callbacks: FacetCallbacks<C, T, P, Q>,
    private_data: P,
    const_private_data: Q,
    counts: CaseCounts,
    stack: WorkStack<T>,
}

impl<C, T, P, Q> AdaptiveTessellator<C, T, P, Q>
where
    C: EdgeSubdivisionCriterion<T>,
    T: CoordinateScalar,
    P: Default,
    Q: Default,
{
    /// Creates a tessellator with the default configuration and default caller data.
    #[must_use]
    pub fn new(criterion: C) -> Self {
        Self::from_config(criterion, TessellatorConfig::default())
    }

    /// Creates a tessellator with `config` and default caller data.
    #[must_use]
    pub fn from_config(criterion: C, config: TessellatorConfig) -> Self {
        Self::with_data(criterion, config, P::default(), Q::default())
    }

    /// Hands the private data to the caller, leaving a default value in its place.
    pub fn take_private_data(&mut self) -> P {
        std::mem::take(&mut self.private_data)
    }
}

impl<C, T, P, Q> AdaptiveTessellator<C, T, P, Q>
where
    C: EdgeSubdivisionCriterion<T>,
    T: CoordinateScalar,
{
    /// Creates a tessellator with explicit caller data.
    #[must_use]
    pub fn with_data(criterion: C, config: TessellatorConfig, private_data: P, const_private_data: Q) -> Self {
        Self {
            criterion,
            stack: WorkStack::with_levels(config.maximum_number_of_subdivisions),
            config,
            callbacks: FacetCallbacks::default(),
            private_data,
            const_private_data,
            counts: CaseCounts::default(),
        }
    }

    // -------------------------------------------------------------------------
    // Configuration
    // -------------------------------------------------------------------------

    /// The current configuration.
    #[must_use]
    pub const fn config(&self) -> &TessellatorConfig {
        &self.config
    }

    /// Replaces the whole configuration.
    pub fn set_config(&mut self, config: TessellatorConfig) {
        self.stack.reserve_levels(config.maximum_number_of_subdivisions);
        self.config = config;
    }

    /// The per-order vertex layouts.
    #[must_use]
    pub const fn embedding_config(&self) -> &EmbeddingConfig {
        &self.config.embedding
    }

    /// The vertex layout used for facets of `order`.
    #[must_use]
    pub const fn layout(&self, order: FacetOrder) -> VertexLayout {
        self.config.embedding.layout(order)
    }

    /// Sets the subdivision depth limit. `0` emits every input facet unchanged.
    ///
    /// Storage for the first 32 levels is reserved here, so passes no deeper than that never
    /// allocate. Deeper limits are supported; their extra levels live on the heap.
    pub fn set_maximum_number_of_subdivisions(&mut self, maximum: u32) {
        self.stack.reserve_levels(maximum);
        self.config.maximum_number_of_subdivisions = maximum;
    }

    /// The subdivision depth limit.
    #[must_use]
    pub const fn maximum_number_of_subdivisions(&self) -> u32 {
        self.config.maximum_number_of_subdivisions
    }

    /// See [`EmbeddingConfig::set_embedding_dimension`].
    pub fn set_embedding_dimension(&mut self, facet_order: i32, dimension: i32) {
        self.config.embedding.set_embedding_dimension(facet_order, dimension);
    }

    /// See [`EmbeddingConfig::embedding_dimension`].
    #[must_use]
    pub fn embedding_dimension(&self, facet_order: i32) -> i32 {
        self.config.embedding.embedding_dimension(facet_order)
    }

    /// See [`EmbeddingConfig::set_field_size`].
    pub fn set_field_size(&mut self, facet_order: i32, size: i32) {
        self.config.embedding.set_field_size(facet_order, size);
    }

    /// See [`EmbeddingConfig::field_size`].
    #[must_use]
    pub fn field_size(&self, facet_order: i32) -> i32 {
        self.config.embedding.field_size(facet_order)
    }

    /// See [`EmbeddingConfig::point_dimension`].
    #[must_use]
    pub fn point_dimension(&self, facet_order: i32) -> i32 {
        self.config.embedding.point_dimension(facet_order)
    }

    // -------------------------------------------------------------------------
    // Criterion and caller data
    // -------------------------------------------------------------------------

    /// The subdivision criterion.
    #[must_use]
    pub const fn criterion(&self) -> &C {
        &self.criterion
    }

    /// Mutable access to the subdivision criterion.
    pub fn criterion_mut(&mut self) -> &mut C {
        &mut self.criterion
    }

    /// Replaces the subdivision criterion.
    pub fn set_criterion(&mut self, criterion: C) {
        self.criterion = criterion;
    }

    /// The private data passed mutably to callbacks.
    #[must_use]
    pub const fn private_data(&self) -> &P {
        &self.private_data
    }

    /// Mutable access to the private data.
    pub fn private_data_mut(&mut self) -> &mut P {
        &mut self.private_data
    }

    /// Replaces the private data.
    pub fn set_private_data(&mut self, private_data: P) {
        self.private_data = private_data;
    }

    /// The const private data passed immutably to callbacks.
    #[must_use]
    pub const fn const_private_data(&self) -> &Q {
        &self.const_private_data
    }

    /// Replaces the const private data.
    pub fn set_const_private_data(&mut self, const_private_data: Q) {
        self.const_private_data = const_private_data;
    }

    // -------------------------------------------------------------------------
    // Callbacks
    // -------------------------------------------------------------------------

    /// Registers the callback for 0-facet leaves.
    pub fn set_vertex_callback<F>(&mut self, callback: F)
    where
        F: Fn(&[T], &C, &mut P, &Q) + Send + Sync + 'static,
    {
        self.callbacks.set_vertex(Some(Box::new(callback)));
    }

    /// Registers the callback for 1-facet leaves.
    pub fn set_edge_callback<F>(&mut self, callback: F)
    where
        F: Fn(&[T], &[T], &C, &mut P, &Q) + Send + Sync + 'static,
    {
        self.callbacks.set_edge(Some(Box::new(callback)));
    }

    /// Registers the callback for 2-facet leaves.
    pub fn set_triangle_callback<F>(&mut self, callback: F)
    where
        F: Fn(&[T], &[T], &[T], &C, &mut P, &Q) + Send + Sync + 'static,
    {
        self.callbacks.set_triangle(Some(Box::new(callback)));
    }

    /// Registers the callback for 3-facet leaves.
    pub fn set_tetrahedron_callback<F>(&mut self, callback: F)
    where
        F: Fn(&[T], &[T], &[T], &[T], &C, &mut P, &Q) + Send + Sync + 'static,
    {
        self.callbacks.set_tetrahedron(Some(Box::new(callback)));
    }

    /// Unregisters the callback for leaves of `order`; such leaves are dropped afterwards.
    pub fn clear_callback(&mut self, order: FacetOrder) {
        match order {
            FacetOrder::Vertex => self.callbacks.set_vertex(None),
            FacetOrder::Edge => self.callbacks.set_edge(None),
            FacetOrder::Triangle => self.callbacks.set_triangle(None),
            FacetOrder::Tetrahedron => self.callbacks.set_tetrahedron(None),
        }
    }

    /// The registered 0-facet callback.
    #[must_use]
    pub fn vertex_callback(&self) -> Option<&VertexCallback<C, T, P, Q>> {
        self.callbacks.vertex()
    }

    /// The registered 1-facet callback.
    #[must_use]
    pub fn edge_callback(&self) -> Option<&EdgeCallback<C, T, P, Q>> {
        self.callbacks.edge()
    }

    /// The registered 2-facet callback.
    #[must_use]
    pub fn triangle_callback(&self) -> Option<&TriangleCallback<C, T, P, Q>> {
        self.callbacks.triangle()
    }

    /// The registered 3-facet callback.
    #[must_use]
    pub fn tetrahedron_callback(&self) -> Option<&TetrahedronCallback<C, T, P, Q>> {
        self.callbacks.tetrahedron()
    }

    // -------------------------------------------------------------------------
    // Diagnostics
    // -------------------------------------------------------------------------

    /// All case counters. They stay at zero unless the `case-counts` feature is enabled.
    #[must_use]
    pub const fn case_counts(&self) -> &CaseCounts {
        &self.counts
    }

    /// Hits of canonical case `case_id` for facets of `order`.
    #[must_use]
    pub fn case_count(&self, order: FacetOrder, case_id: usize) -> u64 {
        self.counts.case_count(order, case_id)
    }

    /// Hits of canonical case `case_id` through permutation `permutation_id`.
    #[must_use]
    pub fn subcase_count(&self, order: FacetOrder, case_id: usize, permutation_id: usize) -> u64 {
        self.counts.subcase_count(order, case_id, permutation_id)
    }

    /// Clears all case counters.
    pub fn reset_counts(&mut self) {
        self.counts.reset();
    }

    // -------------------------------------------------------------------------
    // Entry points
    // -------------------------------------------------------------------------

    /// Passes a single vertex to the vertex callback.
    ///
    /// # Errors
    ///
    /// Returns [`TessellationError::VertexTooShort`] if `v` has fewer than three values.
    pub fn adaptively_sample_vertex(&mut self, v: &[T]) -> Result<(), TessellationError> {
        let layout = self.layout(FacetOrder::Vertex);
        validate(FacetOrder::Vertex, layout, &[v])?;
        tracing::debug!("sampling vertex");
        self.callbacks
            .emit(&[v], &self.criterion, &mut self.private_data, &self.const_private_data);
        Ok(())
    }

    /// Adaptively subdivides the edge `(v0, v1)`.
    ///
    /// # Errors
    ///
    /// Returns [`TessellationError::VertexTooShort`] before any callback fires if a vertex is
    /// shorter than the edge point dimension. Table faults abort only the affected subtree and
    /// the first one is returned after the rest of the edge has been emitted.
    pub fn adaptively_sample_edge(&mut self, v0: &[T], v1: &[T]) -> Result<(), TessellationError> {
        self.sample(&EDGE_TOPOLOGY, [v0, v1])
    }

    /// Adaptively subdivides the triangle `(v0, v1, v2)`.
    ///
    /// # Errors
    ///
    /// See [`adaptively_sample_edge`](Self::adaptively_sample_edge).
    pub fn adaptively_sample_triangle(
        &mut self,
        v0: &[T],
        v1: &[T],
        v2: &[T],
    ) -> Result<(), TessellationError> {
        self.sample(&TRIANGLE_TOPOLOGY, [v0, v1, v2])
    }

    /// Adaptively subdivides the tetrahedron `(v0, v1, v2, v3)`.
    ///
    /// # Errors
    ///
    /// See [`adaptively_sample_edge`](Self::adaptively_sample_edge).
    pub fn adaptively_sample_tetrahedron(
        &mut self,
        v0: &[T],
        v1: &[T],
        v2: &[T],
        v3: &[T],
    ) -> Result<(), TessellationError> {
        self.sample(&TETRAHEDRON_TOPOLOGY, [v0, v1, v2, v3])
    }

    fn sample<const N: usize, const E: usize>(
        &mut self,
        topology: &SimplexTopology<N, E>,
        corners: [&[T]; N],
    ) -> Result<(), TessellationError> {
        let order = topology.order();
        let layout = self.layout(order);
        validate(order, layout, &corners)?;
        tracing::debug!(
            %order,
            point_dimension = layout.point_dimension(),
            maximum_number_of_subdivisions = self.config.maximum_number_of_subdivisions,
            "adaptively sampling facet"
        );

        let mut pass = SubdivisionPass {
            criterion: &self.criterion,
            callbacks: &self.callbacks,
            private: &mut self.private_data,
            const_private: &self.const_private_data,
            layout,
            max_depth: self.config.maximum_number_of_subdivisions,
            counts: &mut self.counts,
            stack: &mut self.stack,
            fault: None,
        };
        pass.run(topology, corners);
        pass.fault.map_or(Ok(()), Err)
    }
}

impl<C, T, P, Q> fmt::Debug for AdaptiveTessellator<C, T, P, Q>
where
    C: fmt::Debug,
    P: fmt::Debug,
    Q: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdaptiveTessellator")
            .field("criterion", &self.criterion)
            .field("config", &self.config)
            .field("callbacks", &self.callbacks)
            .field("private_data", &self.private_data)
            .field("const_private_data", &self.const_private_data)
            .finish_non_exhaustive()
    }
}

fn validate<T>(order: FacetOrder, layout: VertexLayout, vertices: &[&[T]]) -> Result<(), TessellationError> {
    let expected = layout.point_dimension();
    match vertices.iter().position(|v| v.len() < expected) {
        Some(vertex_index) => Err(TessellationError::VertexTooShort {
            facet_order: order,
            vertex_index,
            expected,
            found: vertices[vertex_index].len(),
        }),
        None => Ok(()),
    }
}

// =============================================================================
// TESTS
// =============================================================================
