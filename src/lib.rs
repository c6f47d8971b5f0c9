//! # adaptive-tessellation
//!
//! Adaptive tessellation of simplices by recursive edge bisection.
//!
//! Given one starting simplex (a point, an edge, a triangle, or a tetrahedron) and a
//! caller-supplied [`EdgeSubdivisionCriterion`](core::traits::edge_subdivision_criterion::EdgeSubdivisionCriterion),
//! the tessellator repeatedly asks which edges are too coarse, splits them at their
//! midpoints, and decomposes the simplex into children using precomputed case tables. Leaves
//! of the resulting facet tree are streamed to per-arity callbacks; nothing is stored.
//!
//! # Features
//!
//! - Edges, triangles, and tetrahedra with arbitrary split patterns (2, 8, and 64 edge codes)
//!   reduced to 2, 4, and 11 canonical cases by vertex permutation
//! - Vertices carry geometry, optional parametric coordinates, and optional field values, all
//!   interpolated at every new midpoint
//! - Conforming output: shared faces are triangulated identically by neighboring simplices
//! - Orientation preserving: every leaf has the orientation of its input simplex
//! - No heap allocation while tessellating up to 32 levels deep
//! - Generic scalar type (`f32`, `f64`) through [`CoordinateScalar`](geometry::traits::coordinate::CoordinateScalar)
//! - Optional per-case hit counters behind the `case-counts` feature
//!
//! # Basic Usage
//!
//! ```rust
//! use adaptive_tessellation::prelude::*;
//!
//! // Leaf volumes are collected into the tessellator's private data.
//! let mut tessellator: AdaptiveTessellator<AlwaysSubdivide, f64, Vec<f64>> =
//!     AdaptiveTessellator::new(AlwaysSubdivide);
//! tessellator.set_embedding_dimension(-1, 0);
//! tessellator.set_maximum_number_of_subdivisions(2);
//! tessellator.set_tetrahedron_callback(|a, b, c, d, _, volumes: &mut Vec<f64>, _| {
//!     volumes.push(signed_tetrahedron_volume(a, b, c, d));
//! });
//!
//! tessellator
//!     .adaptively_sample_tetrahedron(
//!         &[0.0, 0.0, 0.0],
//!         &[1.0, 0.0, 0.0],
//!         &[0.0, 1.0, 0.0],
//!         &[0.0, 0.0, 1.0],
//!     )
//!     .unwrap();
//!
//! // Uniform refinement: 8 positively oriented children per level that tile the input.
//! let volumes = tessellator.private_data();
//! assert_eq!(volumes.len(), 64);
//! assert!(volumes.iter().all(|&v| v > 0.0));
//! assert!((volumes.iter().sum::<f64>() - 1.0 / 6.0).abs() < 1e-12);
//! ```
//!
//! # Vertex layout
//!
//! Every vertex is a flat slice `[x, y, z, p_0 .. p_{k-1}, f_0 .. f_{s-1}]`. The embedding
//! dimension `k` and the field size `s` are configured per facet order; see
//! [`core::embedding`] and [`core::vertex`].
//!
//! # Case tables
//!
//! See [`core::case_table`] for how edge codes are classified. The decomposition templates
//! of each facet order are reachable through
//! [`SimplexTopology::cases`](core::case_table::SimplexTopology::cases), e.g.
//! `TETRAHEDRON_TOPOLOGY.cases()`.

#![forbid(unsafe_code)]

/// The `core` module contains the tessellation engine, its configuration, and the case tables.
pub mod core {
    /// Subdivision algorithms.
    pub mod algorithms {
        /// Depth-first evaluate / classify / emit / descend driver.
        pub mod adaptive_subdivision;
    }
    pub mod case_table;
    /// Stack-inline buffers for the subdivision hot path.
    pub mod collections;
    pub mod criteria;
    pub mod diagnostics;
    pub mod embedding;
    pub mod facet;
    pub(crate) mod tables;
    pub mod tessellator;
    pub mod vertex;
    /// Traits implemented by tessellator collaborators.
    pub mod traits {
        pub mod edge_subdivision_criterion;
        pub use edge_subdivision_criterion::*;
    }
    // Re-export the `core` modules.
    pub use case_table::*;
    pub use criteria::*;
    pub use diagnostics::*;
    pub use embedding::*;
    pub use facet::*;
    pub use tessellator::*;
    pub use traits::*;
    pub use vertex::*;
}

/// Geometric helpers and the scalar abstraction.
pub mod geometry {
    /// Geometric utility functions on tessellation vertices.
    pub mod util;
    /// Traits module containing the scalar abstraction.
    pub mod traits {
        pub mod coordinate;
        pub use coordinate::*;
    }
    pub use traits::*;
    pub use util::*;
}

/// A prelude module that re-exports commonly used types.
pub mod prelude {
    pub use crate::core::{
        case_table::{
            CaseEntry, EDGE_TOPOLOGY, SimplexTopology, TETRAHEDRON_TOPOLOGY, TRIANGLE_TOPOLOGY,
        },
        collections::SmallBuffer,
        criteria::*,
        diagnostics::CaseCounts,
        embedding::*,
        facet::FacetOrder,
        tessellator::*,
        traits::edge_subdivision_criterion::*,
        vertex::*,
    };

    pub use crate::geometry::{traits::coordinate::*, util::*};
}

/// The function `is_normal` checks that structs implement `auto` traits.
/// Traits are checked at compile time, so this function is only used for
/// testing.
#[must_use]
pub const fn is_normal<T: Sized + Send + Sync + Unpin>() -> bool {
    true
}

// =============================================================================
// TESTS
// =============================================================================
