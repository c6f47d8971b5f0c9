//! Case classification for simplex subdivision.
//!
//! When the subdivider has decided which edges of a facet to split, it packs the decisions into
//! an *edge code* (bit `e` set when edge `e` is split). Every code is equivalent, under some
//! relabeling of the facet's vertices, to one of a handful of *canonical* codes. The tables in
//! this module map each code to that canonical case and to the relabeling (a [`Permutation`])
//! that carries the canonical configuration onto the actual one. The canonical case then
//! supplies the decomposition template that the subdivider instantiates.
//!
//! | facet        | edges | codes | canonical cases | permutations |
//! |--------------|-------|-------|-----------------|--------------|
//! | edge         | 1     | 2     | 2               | 2            |
//! | triangle     | 3     | 8     | 4               | 6            |
//! | tetrahedron  | 6     | 64    | 11              | 24           |
//!
//! # Extended vertex indices
//!
//! Decomposition templates index into the *extended vertex set* of the canonical facet:
//! corners `0..N`, the midpoint of edge `e` at `N + e`, and, for the tetrahedral
//! decompositions that need a Steiner point, the centroid at `N + E`.
//!
//! # Examples
//!
//! ```rust
//! use adaptive_tessellation::core::case_table::TETRAHEDRON_TOPOLOGY;
//!
//! // Edges (0,1), (1,2), (0,2) split: the "face triangle" case.
//! let entry = TETRAHEDRON_TOPOLOGY.classify(0b000111).unwrap();
//! assert_eq!(entry.case_id(), 4);
//!
//! // The permutation reproduces the input code from the canonical one.
//! let case = TETRAHEDRON_TOPOLOGY.case(entry.case_id()).unwrap();
//! let permutation = TETRAHEDRON_TOPOLOGY.permutation(entry.permutation_id()).unwrap();
//! assert_eq!(permutation.map_edge_code(case.edge_code()), 0b000111);
//! ```

use crate::core::facet::FacetOrder;
use crate::core::tables::{
    EDGE_CANONICAL_CASES, EDGE_CASES, EDGE_PERMUTATIONS, TETRAHEDRON_CANONICAL_CASES,
    TETRAHEDRON_CASES, TETRAHEDRON_PERMUTATIONS, TRIANGLE_CANONICAL_CASES, TRIANGLE_CASES,
    TRIANGLE_PERMUTATIONS,
};

// =============================================================================
// CASE ENTRY
// =============================================================================

/// Classification result for one edge code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CaseEntry {
    case_id: u8,
    permutation_id: u8,
}

impl CaseEntry {
    /// Creates an entry.
    #[must_use]
    pub const fn new(case_id: u8, permutation_id: u8) -> Self {
        Self {
            case_id,
            permutation_id,
        }
    }

    /// Index of the canonical case.
    #[inline]
    #[must_use]
    pub const fn case_id(self) -> usize {
        self.case_id as usize
    }

    /// Index of the permutation that maps the canonical case onto the input.
    #[inline]
    #[must_use]
    pub const fn permutation_id(self) -> usize {
        self.permutation_id as usize
    }

    /// Whether this is the case with no split edges.
    #[inline]
    #[must_use]
    pub const fn is_no_split(self) -> bool {
        self.case_id == 0
    }
}

// =============================================================================
// PERMUTATION
// =============================================================================

/// A relabeling of the `N` vertices of a simplex with `E` edges.
///
/// Canonical vertex `i` corresponds to facet vertex `vertices()[i]`, and canonical edge `e`
/// corresponds to facet edge `edges()[e]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Permutation<const N: usize, const E: usize> {
    vertices: [u8; N],
    edges: [u8; E],
    odd: bool,
}

impl<const N: usize, const E: usize> Permutation<N, E> {
    /// Creates a permutation from its vertex map, induced edge map, and parity.
    #[must_use]
    pub const fn new(vertices: [u8; N], edges: [u8; E], odd: bool) -> Self {
        Self {
            vertices,
            edges,
            odd,
        }
    }

    /// Image of each canonical vertex.
    #[inline]
    #[must_use]
    pub const fn vertices(&self) -> &[u8; N] {
        &self.vertices
    }

    /// Image of each canonical edge.
    #[inline]
    #[must_use]
    pub const fn edges(&self) -> &[u8; E] {
        &self.edges
    }

    /// Whether the permutation reverses orientation.
    #[inline]
    #[must_use]
    pub const fn is_odd(&self) -> bool {
        self.odd
    }

    /// Relabels the edges of `code`.
    #[must_use]
    pub fn map_edge_code(&self, code: u8) -> u8 {
        self.edges
            .iter()
            .enumerate()
            .filter(|&(edge, _)| code & (1 << edge) != 0)
            .fold(0, |mapped, (_, &image)| mapped | (1 << image))
    }

    /// Maps an extended vertex index of the canonical facet to the actual facet.
    ///
    /// Corners follow the vertex map, midpoints follow the edge map, and the centroid (or any
    /// index past the midpoints) maps to itself.
    #[must_use]
    pub fn map_extended_index(&self, index: usize) -> usize {
        if index < N {
            usize::from(self.vertices[index])
        } else if index < N + E {
            N + usize::from(self.edges[index - N])
        } else {
            index
        }
    }
}

// =============================================================================
// DECOMPOSITIONS
// =============================================================================

/// One way of splitting a canonical facet into children.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decomposition<const N: usize> {
    children: &'static [[u8; N]],
    uses_centroid: bool,
}

impl<const N: usize> Decomposition<N> {
    /// Creates a decomposition from extended-index children.
    #[must_use]
    pub const fn new(children: &'static [[u8; N]], uses_centroid: bool) -> Self {
        Self {
            children,
            uses_centroid,
        }
    }

    /// The child simplices, each as extended vertex indices.
    #[inline]
    #[must_use]
    pub const fn children(&self) -> &'static [[u8; N]] {
        self.children
    }

    /// Whether any child references the centroid.
    #[inline]
    #[must_use]
    pub const fn uses_centroid(&self) -> bool {
        self.uses_centroid
    }
}

/// A canonical subdivision case.
///
/// Cases whose split pattern leaves quadrilateral faces (or the inner octahedron) carry one
/// *diagonal choice* per ambiguous region. Each choice lists the candidate diagonals as
/// extended-index pairs; the decomposition for a combination of picks sits at the mixed-radix
/// index whose least significant digit is the first choice.
#[derive(Clone, Copy, Debug)]
pub struct CanonicalCase<const N: usize> {
    name: &'static str,
    edge_code: u8,
    diagonal_choices: &'static [&'static [[u8; 2]]],
    decompositions: &'static [Decomposition<N>],
}

impl<const N: usize> CanonicalCase<N> {
    /// Creates a case.
    #[must_use]
    pub const fn new(
        name: &'static str,
        edge_code: u8,
        diagonal_choices: &'static [&'static [[u8; 2]]],
        decompositions: &'static [Decomposition<N>],
    ) -> Self {
        Self {
            name,
            edge_code,
            diagonal_choices,
            decompositions,
        }
    }

    /// Human-readable name of the split pattern.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The canonical edge code.
    #[inline]
    #[must_use]
    pub const fn edge_code(&self) -> u8 {
        self.edge_code
    }

    /// Candidate diagonals for each ambiguous region.
    #[inline]
    #[must_use]
    pub const fn diagonal_choices(&self) -> &'static [&'static [[u8; 2]]] {
        self.diagonal_choices
    }

    /// All decompositions, in mixed-radix order of the diagonal picks.
    #[inline]
    #[must_use]
    pub const fn decompositions(&self) -> &'static [Decomposition<N>] {
        self.decompositions
    }

    /// The decomposition at `variant`.
    #[inline]
    #[must_use]
    pub fn decomposition(&self, variant: usize) -> Option<&'static Decomposition<N>> {
        self.decompositions.get(variant)
    }

    /// Number of diagonal-pick combinations.
    #[must_use]
    pub fn variant_count(&self) -> usize {
        self.diagonal_choices.iter().map(|choice| choice.len()).product()
    }
}

// =============================================================================
// SIMPLEX TOPOLOGY
// =============================================================================

/// All classification data for one simplex arity: `N` vertices and `E` edges.
#[derive(Debug)]
pub struct SimplexTopology<const N: usize, const E: usize> {
    order: FacetOrder,
    edges: [[u8; 2]; E],
    cases: &'static [CanonicalCase<N>],
    permutations: &'static [Permutation<N, E>],
    case_table: &'static [CaseEntry],
}

impl<const N: usize, const E: usize> SimplexTopology<N, E> {
    /// Facet order described by this topology.
    #[inline]
    #[must_use]
    pub const fn order(&self) -> FacetOrder {
        self.order
    }

    /// Vertex pairs of each edge, in edge-code bit order.
    #[inline]
    #[must_use]
    pub const fn edges(&self) -> &[[u8; 2]; E] {
        &self.edges
    }

    /// The canonical cases.
    #[inline]
    #[must_use]
    pub const fn cases(&self) -> &'static [CanonicalCase<N>] {
        self.cases
    }

    /// All vertex permutations, in lexicographic order.
    #[inline]
    #[must_use]
    pub const fn permutations(&self) -> &'static [Permutation<N, E>] {
        self.permutations
    }

    /// Extended index of the centroid.
    #[inline]
    #[must_use]
    pub const fn centroid_index(&self) -> usize {
        N + E
    }

    /// Number of distinct edge codes.
    #[inline]
    #[must_use]
    pub const fn code_count(&self) -> usize {
        1 << E
    }

    /// Maps `edge_code` to its canonical case and permutation.
    ///
    /// Returns `None` only for codes with bits beyond the facet's edges.
    #[inline]
    #[must_use]
    pub fn classify(&self, edge_code: u8) -> Option<CaseEntry> {
        self.case_table.get(usize::from(edge_code)).copied()
    }

    /// The canonical case with index `case_id`.
    #[inline]
    #[must_use]
    pub fn case(&self, case_id: usize) -> Option<&'static CanonicalCase<N>> {
        self.cases.get(case_id)
    }

    /// The permutation with index `permutation_id`.
    #[inline]
    #[must_use]
    pub fn permutation(&self, permutation_id: usize) -> Option<&'static Permutation<N, E>> {
        self.permutations.get(permutation_id)
    }

    /// The edge code an entry describes, rebuilt from its canonical case and permutation.
    #[must_use]
    pub fn edge_code_of(&self, entry: CaseEntry) -> Option<u8> {
        let case = self.case(entry.case_id())?;
        let permutation = self.permutation(entry.permutation_id())?;
        Some(permutation.map_edge_code(case.edge_code()))
    }
}

/// Classification data for edges.
pub static EDGE_TOPOLOGY: SimplexTopology<2, 1> = SimplexTopology {
    order: FacetOrder::Edge,
    edges: [[0, 1]],
    cases: &EDGE_CANONICAL_CASES,
    permutations: &EDGE_PERMUTATIONS,
    case_table: &EDGE_CASES,
};

/// Classification data for triangles.
pub static TRIANGLE_TOPOLOGY: SimplexTopology<3, 3> = SimplexTopology {
    order: FacetOrder::Triangle,
    edges: [[0, 1], [1, 2], [0, 2]],
    cases: &TRIANGLE_CANONICAL_CASES,
    permutations: &TRIANGLE_PERMUTATIONS,
    case_table: &TRIANGLE_CASES,
};

/// Classification data for tetrahedra.
pub static TETRAHEDRON_TOPOLOGY: SimplexTopology<4, 6> = SimplexTopology {
    order: FacetOrder::Tetrahedron,
    edges: [[0, 1], [1, 2], [0, 2], [0, 3], [1, 3], [2, 3]],
    cases: &TETRAHEDRON_CANONICAL_CASES,
    permutations: &TETRAHEDRON_PERMUTATIONS,
    case_table: &TETRAHEDRON_CASES,
};

/// [`TRIANGLE_TOPOLOGY`] with a classification table covering only the first `known_codes`
/// edge codes.
#[cfg(test)]
pub(crate) fn truncated_triangle_topology(known_codes: usize) -> SimplexTopology<3, 3> {
    SimplexTopology {
        case_table: &TRIANGLE_CASES[..known_codes],
        ..TRIANGLE_TOPOLOGY
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_tables_consistent<const N: usize, const E: usize>(topology: &SimplexTopology<N, E>) {
        assert_eq!(topology.case_table.len(), topology.code_count());
        for code in 0..topology.code_count() {
            let code = code as u8;
            let entry = topology.classify(code).unwrap();
            assert_eq!(topology.edge_code_of(entry), Some(code), "code {code:#b}");

            // The chosen permutation is the lowest one that reproduces the code.
            let case = topology.case(entry.case_id()).unwrap();
            let first = topology
                .permutations()
                .iter()
                .position(|p| p.map_edge_code(case.edge_code()) == code);
            assert_eq!(first, Some(entry.permutation_id()));
        }
        for case in topology.cases() {
            assert_eq!(case.variant_count(), case.decompositions().len(), "{}", case.name());
        }
    }

    #[test]
    fn edge_tables_are_consistent() {
        assert_tables_consistent(&EDGE_TOPOLOGY);
        assert_eq!(EDGE_TOPOLOGY.cases().len(), 2);
    }

    #[test]
    fn triangle_tables_are_consistent() {
        assert_tables_consistent(&TRIANGLE_TOPOLOGY);
        assert_eq!(TRIANGLE_TOPOLOGY.cases().len(), 4);
    }

    #[test]
    fn tetrahedron_tables_are_consistent() {
        assert_tables_consistent(&TETRAHEDRON_TOPOLOGY);
        assert_eq!(TETRAHEDRON_TOPOLOGY.cases().len(), 11);
    }

    #[test]
    fn codes_beyond_the_facet_are_unresolved() {
        assert_eq!(EDGE_TOPOLOGY.classify(0b10), None);
        assert_eq!(TRIANGLE_TOPOLOGY.classify(0b1000), None);
        assert_eq!(TETRAHEDRON_TOPOLOGY.classify(64), None);
    }

    #[test]
    fn permutation_edge_map_matches_vertex_map() {
        for permutation in TETRAHEDRON_TOPOLOGY.permutations() {
            for (edge, &[a, b]) in TETRAHEDRON_TOPOLOGY.edges().iter().enumerate() {
                let pa = permutation.vertices()[usize::from(a)];
                let pb = permutation.vertices()[usize::from(b)];
                let [x, y] = TETRAHEDRON_TOPOLOGY.edges()[usize::from(permutation.edges()[edge])];
                assert!((x, y) == (pa, pb) || (x, y) == (pb, pa));
            }
        }
    }

    #[test]
    fn extended_indices_follow_the_permutation() {
        // Vertex order [1, 2, 0, 3].
        let permutation = TETRAHEDRON_TOPOLOGY.permutation(8).unwrap();
        assert_eq!(permutation.vertices(), &[1, 2, 0, 3]);
        assert!(!permutation.is_odd());
        assert_eq!(permutation.map_extended_index(0), 1);
        // Canonical edge (0,1) becomes (1,2), edge 1, midpoint index 5.
        assert_eq!(permutation.map_extended_index(4), 5);
        assert_eq!(permutation.map_extended_index(10), 10);
    }

    #[test]
    fn no_split_entries() {
        assert!(TETRAHEDRON_TOPOLOGY.classify(0).unwrap().is_no_split());
        assert!(!TRIANGLE_TOPOLOGY.classify(0b111).unwrap().is_no_split());
        assert_eq!(TETRAHEDRON_TOPOLOGY.centroid_index(), 10);
    }
}
