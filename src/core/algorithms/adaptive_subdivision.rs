//! Depth-first edge-bisection of a single simplex.
//!
//! One `SubdivisionPass` drives the whole facet tree of one entry-point call. Every node goes
//! through the same steps:
//!
//! 1. **Evaluate**: unless the node sits at the maximum depth, compute each edge's midpoint and
//!    ask the criterion whether the edge must be split. The decisions form the node's edge code.
//! 2. **Classify**: look the code up in the facet's [`SimplexTopology`] to obtain the canonical
//!    case and the permutation that maps it onto this node.
//! 3. **Leaf**: a node at the maximum depth, or one whose code is empty, is handed to the
//!    callback matching its arity.
//! 4. **Descend**: otherwise the node is pushed on the `WorkStack` together with its new
//!    vertices, and its children are instantiated through the permutation one at a time, in
//!    template order. A node is popped once its last child has been processed.
//!
//! The traversal runs on an explicit heap stack, so the depth limit is bounded by memory rather
//! than by the thread's call stack.
//!
//! Edges are always presented to the criterion with their endpoints in lexicographic order of
//! their geometry, so an edge shared by two facets is evaluated with identical arguments from
//! both sides. Quadrilateral faces left by two split edges, and the inner octahedron left by
//! six, are cut along their shortest diagonal; ties go to the lexicographically smallest
//! segment. Both rules depend only on the points involved, which keeps the output conforming
//! across facets that share an edge or a face.

#![forbid(unsafe_code)]

use crate::core::case_table::{CanonicalCase, Permutation, SimplexTopology};
use crate::core::collections::{
    ExtendedVertexBuffer, MAX_EXTENDED_VERTICES, MAX_SIMPLEX_EDGES, PointBuffer,
};
use crate::core::diagnostics::CaseCounts;
use crate::core::facet::FacetCallbacks;
use crate::core::tessellator::TessellationError;
use crate::core::traits::edge_subdivision_criterion::EdgeSubdivisionCriterion;
use crate::core::vertex::{MAX_POINT_DIMENSION, VertexLayout};
use crate::geometry::traits::coordinate::CoordinateScalar;
use crate::geometry::util::{compare_segments, sorted_segment};

/// Subdivision levels whose work-stack storage is reserved ahead of a pass.
///
/// Passes at most this deep never allocate; deeper ones grow the stack on demand.
pub(crate) const RESERVED_LEVELS: usize = 32;

// =============================================================================
// WORK STACK
// =============================================================================

/// Where a vertex of a pending facet lives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum VertexRef {
    /// Input vertex of the entry point, by position.
    Input(usize),
    /// Generated vertex, by offset into the point arena.
    Generated(usize),
}

/// A subdivided facet with children still to visit.
#[derive(Clone, Copy, Debug)]
struct Frame {
    case_id: usize,
    permutation_id: usize,
    variant: usize,
    next_child: usize,
    depth: u32,
    /// Corners, split-edge midpoints and centroid, by extended index of the actual facet.
    extended: [Option<VertexRef>; MAX_EXTENDED_VERTICES],
    /// Arena length before this facet stored its generated vertices.
    arena_mark: usize,
}

/// Depth-first traversal state, owned by the tessellator and reused across passes.
///
/// Generated vertices live in one flat arena. A frame owns everything stored past its
/// `arena_mark`, and the arena is truncated back to the mark when the frame is popped.
#[derive(Clone, Debug)]
pub(crate) struct WorkStack<T> {
    frames: Vec<Frame>,
    arena: Vec<T>,
}

impl<T> WorkStack<T> {
    /// An empty stack with room for passes `max_depth` levels deep, up to [`RESERVED_LEVELS`].
    pub(crate) fn with_levels(max_depth: u32) -> Self {
        let mut stack = Self {
            frames: Vec::new(),
            arena: Vec::new(),
        };
        stack.reserve_levels(max_depth);
        stack
    }

    /// Makes room for passes `max_depth` levels deep, up to [`RESERVED_LEVELS`].
    pub(crate) fn reserve_levels(&mut self, max_depth: u32) {
        let levels = usize::try_from(max_depth).map_or(RESERVED_LEVELS, |d| d.min(RESERVED_LEVELS)) + 1;
        self.frames.reserve(levels.saturating_sub(self.frames.len()));
        let points = levels * (MAX_SIMPLEX_EDGES + 1) * MAX_POINT_DIMENSION;
        self.arena.reserve(points.saturating_sub(self.arena.len()));
    }

    fn clear(&mut self) {
        self.frames.clear();
        self.arena.clear();
    }
}

// =============================================================================
// PASS
// =============================================================================

/// State shared by every node of one tessellation pass.
pub(crate) struct SubdivisionPass<'a, C, T, P, Q> {
    pub(crate) criterion: &'a C,
    pub(crate) callbacks: &'a FacetCallbacks<C, T, P, Q>,
    pub(crate) private: &'a mut P,
    pub(crate) const_private: &'a Q,
    pub(crate) layout: VertexLayout,
    pub(crate) max_depth: u32,
    pub(crate) counts: &'a mut CaseCounts,
    pub(crate) stack: &'a mut WorkStack<T>,
    pub(crate) fault: Option<TessellationError>,
}

impl<C, T, P, Q> SubdivisionPass<'_, C, T, P, Q>
where
    C: EdgeSubdivisionCriterion<T>,
    T: CoordinateScalar,
{
    /// Tessellates the facet `inputs`, visiting children depth first in template order.
    pub(crate) fn run<const N: usize, const E: usize>(
        &mut self,
        topology: &SimplexTopology<N, E>,
        inputs: [&[T]; N],
    ) {
        self.stack.clear();
        self.visit(topology, &inputs, std::array::from_fn(VertexRef::Input), 0);
        while !self.stack.frames.is_empty() {
            if let Some((corners, depth)) = self.next_child(topology) {
                self.visit(topology, &inputs, corners, depth);
            }
        }
    }

    /// Processes the facet `corners` at subdivision level `depth`.
    ///
    /// Leaves are emitted right away; split facets are pushed as a new frame.
    #[allow(clippy::too_many_lines)]
    fn visit<const N: usize, const E: usize>(
        &mut self,
        topology: &SimplexTopology<N, E>,
        inputs: &[&[T]; N],
        corners: [VertexRef; N],
        depth: u32,
    ) {
        if depth >= self.max_depth {
            self.emit(inputs, &corners);
            return;
        }

        let width = self.layout.point_dimension();
        let (edge_code, midpoints) = {
            let facet = resolve(inputs, &self.stack.arena, width, &corners);
            self.evaluate_edges(topology, &facet)
        };

        let Some(entry) = topology.classify(edge_code) else {
            self.fault(TessellationError::UnresolvedEdgeCode {
                facet_order: topology.order(),
                edge_code,
            });
            return;
        };
        self.counts.record(topology.order(), entry.case_id(), entry.permutation_id());
        tracing::trace!(
            order = %topology.order(),
            depth,
            edge_code,
            case_id = entry.case_id(),
            permutation_id = entry.permutation_id(),
            "classified facet"
        );

        if entry.is_no_split() {
            self.emit(inputs, &corners);
            return;
        }

        let (Some(case), Some(permutation)) = (
            topology.case(entry.case_id()),
            topology.permutation(entry.permutation_id()),
        ) else {
            self.fault(TessellationError::TemplateOutOfBounds {
                facet_order: topology.order(),
                case_id: entry.case_id(),
                index: entry.permutation_id(),
            });
            return;
        };

        let arena_mark = self.stack.arena.len();
        let mut extended = [None; MAX_EXTENDED_VERTICES];
        for (slot, &corner) in extended.iter_mut().zip(&corners) {
            *slot = Some(corner);
        }
        for (slot, midpoint) in extended[N..].iter_mut().zip(&midpoints) {
            if !midpoint.is_empty() {
                *slot = Some(VertexRef::Generated(self.stack.arena.len()));
                self.stack.arena.extend_from_slice(midpoint);
            }
        }

        let variant = {
            let vertices: ExtendedVertexBuffer<'_, T> = extended
                .iter()
                .map(|v| v.map(|v| resolve_vertex(inputs, &self.stack.arena, width, v)))
                .collect();
            select_variant(case, permutation, &vertices)
        };
        let Some(variant) = variant else {
            self.discard(arena_mark, TessellationError::TemplateOutOfBounds {
                facet_order: topology.order(),
                case_id: entry.case_id(),
                index: topology.centroid_index(),
            });
            return;
        };
        let Some(decomposition) = case.decomposition(variant) else {
            self.discard(arena_mark, TessellationError::TemplateOutOfBounds {
                facet_order: topology.order(),
                case_id: entry.case_id(),
                index: variant,
            });
            return;
        };

        if decomposition.uses_centroid() {
            let facet = resolve(inputs, &self.stack.arena, width, &corners);
            let centroid = match facet.as_slice() {
                &[a, b, c, d] => Some(self.layout.centroid([a, b, c, d])),
                _ => None,
            };
            let Some(centroid) = centroid else {
                self.discard(arena_mark, TessellationError::TemplateOutOfBounds {
                    facet_order: topology.order(),
                    case_id: entry.case_id(),
                    index: topology.centroid_index(),
                });
                return;
            };
            extended[topology.centroid_index()] = Some(VertexRef::Generated(self.stack.arena.len()));
            self.stack.arena.extend_from_slice(&centroid);
        }

        self.stack.frames.push(Frame {
            case_id: entry.case_id(),
            permutation_id: entry.permutation_id(),
            variant,
            next_child: 0,
            depth,
            extended,
            arena_mark,
        });
    }

    /// Instantiates the next child of the top frame, popping the frame once it has none left.
    fn next_child<const N: usize, const E: usize>(
        &mut self,
        topology: &SimplexTopology<N, E>,
    ) -> Option<([VertexRef; N], u32)> {
        let frame = self.stack.frames.last_mut()?;
        let child = topology
            .case(frame.case_id)
            .and_then(|case| case.decomposition(frame.variant))
            .and_then(|decomposition| decomposition.children().get(frame.next_child));
        let (Some(child), Some(permutation)) = (child, topology.permutation(frame.permutation_id)) else {
            let arena_mark = frame.arena_mark;
            self.stack.frames.pop();
            self.stack.arena.truncate(arena_mark);
            return None;
        };
        frame.next_child += 1;

        if let Some(corners) = instantiate(child, permutation, &frame.extended) {
            return Some((corners, frame.depth + 1));
        }
        let case_id = frame.case_id;
        let index = child
            .iter()
            .map(|&i| permutation.map_extended_index(usize::from(i)))
            .find(|&i| frame.extended.get(i).copied().flatten().is_none())
            .unwrap_or(MAX_EXTENDED_VERTICES);
        self.fault(TessellationError::TemplateOutOfBounds {
            facet_order: topology.order(),
            case_id,
            index,
        });
        None
    }

    /// Hands a leaf to its callback.
    fn emit<const N: usize>(&mut self, inputs: &[&[T]; N], corners: &[VertexRef; N]) {
        let facet = resolve(inputs, &self.stack.arena, self.layout.point_dimension(), corners);
        self.callbacks
            .emit(&facet, self.criterion, self.private, self.const_private);
    }

    /// Builds the edge code of a node and the midpoints of its split edges.
    ///
    /// Unsplit edges keep an empty midpoint buffer.
    fn evaluate_edges<const N: usize, const E: usize>(
        &self,
        topology: &SimplexTopology<N, E>,
        corners: &[&[T]; N],
    ) -> (u8, [PointBuffer<T>; E]) {
        let mut edge_code = 0_u8;
        let mut midpoints: [PointBuffer<T>; E] = std::array::from_fn(|_| PointBuffer::new());
        for (edge, (&[a, b], slot)) in topology.edges().iter().zip(&mut midpoints).enumerate() {
            let (v0, v1) = sorted_segment(corners[usize::from(a)], corners[usize::from(b)]);
            let mut midpoint = self.layout.midpoint(v0, v1);
            if self.criterion.evaluate_edge(v0, &mut midpoint, v1, self.layout) {
                edge_code |= 1 << edge;
                *slot = midpoint;
            }
        }
        (edge_code, midpoints)
    }

    /// Drops the vertices a facet stored before failing, then records the fault.
    fn discard(&mut self, arena_mark: usize, error: TessellationError) {
        self.stack.arena.truncate(arena_mark);
        self.fault(error);
    }

    fn fault(&mut self, error: TessellationError) {
        tracing::error!(%error, "skipping subtree after table fault");
        self.fault.get_or_insert(error);
    }
}

/// Picks the decomposition variant whose diagonals are the shortest candidates.
///
/// Returns `None` if a candidate diagonal references a vertex the node does not have.
fn select_variant<T: CoordinateScalar, const N: usize, const E: usize>(
    case: &CanonicalCase<N>,
    permutation: &Permutation<N, E>,
    extended: &[Option<&[T]>],
) -> Option<usize> {
    let mut variant = 0;
    let mut radix = 1;
    for candidates in case.diagonal_choices() {
        let mut best: Option<(usize, (&[T], &[T]))> = None;
        for (pick, &diagonal) in candidates.iter().enumerate() {
            let [a, b] = diagonal;
            let segment = (
                lookup(extended, permutation, a)?,
                lookup(extended, permutation, b)?,
            );
            if best.is_none_or(|(_, shortest)| compare_segments(segment, shortest).is_lt()) {
                best = Some((pick, segment));
            }
        }
        variant += best.map_or(0, |(pick, _)| pick) * radix;
        radix *= candidates.len();
    }
    Some(variant)
}

/// Maps one child of a decomposition onto vertices of the actual facet.
///
/// Odd permutations swap the child's last two vertices so the child keeps the parent's
/// orientation.
fn instantiate<const N: usize, const E: usize>(
    child: &[u8; N],
    permutation: &Permutation<N, E>,
    extended: &[Option<VertexRef>],
) -> Option<[VertexRef; N]> {
    let mut corners = [VertexRef::Input(0); N];
    for (slot, &index) in corners.iter_mut().zip(child) {
        *slot = lookup(extended, permutation, index)?;
    }
    if permutation.is_odd() {
        corners.swap(N - 2, N - 1);
    }
    Some(corners)
}

/// The actual vertex behind canonical extended index `index`, if the node has it.
#[inline]
fn lookup<V: Copy, const N: usize, const E: usize>(
    extended: &[Option<V>],
    permutation: &Permutation<N, E>,
    index: u8,
) -> Option<V> {
    extended
        .get(permutation.map_extended_index(usize::from(index)))
        .copied()
        .flatten()
}

fn resolve<'v, T, const N: usize>(
    inputs: &[&'v [T]; N],
    arena: &'v [T],
    width: usize,
    vertices: &[VertexRef; N],
) -> [&'v [T]; N] {
    (*vertices).map(|v| resolve_vertex(inputs, arena, width, v))
}

#[inline]
fn resolve_vertex<'v, T>(inputs: &[&'v [T]], arena: &'v [T], width: usize, vertex: VertexRef) -> &'v [T] {
    match vertex {
        VertexRef::Input(position) => inputs[position],
        VertexRef::Generated(offset) => &arena[offset..offset + width],
    }
}

// =============================================================================
// TESTS
// =============================================================================
