//! Stack-inline buffer types used on the subdivision hot path.
//!
//! Every level of the subdivider evaluates a handful of new vertices (edge midpoints and
//! occasionally a centroid) and builds a short list of vertex references. All of them are sized
//! by small compile-time bounds, so they live in [`SmallVec`]s that never spill to the heap
//! for any configuration the engine accepts.

use crate::core::vertex::MAX_POINT_DIMENSION;
use smallvec::SmallVec;

/// Small-buffer-optimized vector: inline for up to `N` elements, heap beyond.
///
/// # Examples
///
/// ```rust
/// use adaptive_tessellation::core::collections::SmallBuffer;
///
/// let mut buffer: SmallBuffer<i32, 4> = SmallBuffer::new();
/// buffer.extend([1, 2, 3]);
/// assert!(!buffer.spilled());
/// ```
pub type SmallBuffer<T, const N: usize> = SmallVec<[T; N]>;

/// Most vertices any simplex has.
pub const MAX_SIMPLEX_VERTICES: usize = 4;

/// Most edges any simplex has.
pub const MAX_SIMPLEX_EDGES: usize = 6;

/// Corners, edge midpoints, and one centroid of a tetrahedron.
pub const MAX_EXTENDED_VERTICES: usize = MAX_SIMPLEX_VERTICES + MAX_SIMPLEX_EDGES + 1;

/// One generated vertex (midpoint or centroid), stored inline.
///
/// Capacity covers [`MAX_POINT_DIMENSION`], so a generated vertex never allocates.
pub type PointBuffer<T> = SmallBuffer<T, MAX_POINT_DIMENSION>;

/// References to the corners, midpoints, and centroid that a decomposition template indexes
/// into. Midpoints of unsplit edges and an unused centroid are `None`.
pub type ExtendedVertexBuffer<'a, T> = SmallBuffer<Option<&'a [T]>, MAX_EXTENDED_VERTICES>;
