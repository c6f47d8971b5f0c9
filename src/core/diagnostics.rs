//! Case coverage counters.
//!
//! With the `case-counts` feature enabled the subdivider records, for every classified facet,
//! which canonical case it fell into and which permutation mapped it. Without the feature the
//! recording calls compile to nothing and every counter reads zero.

use crate::core::facet::FacetOrder;
use serde::Serialize;

const EDGE_CASES: usize = 2;
const EDGE_PERMUTATIONS: usize = 2;
const TRIANGLE_CASES: usize = 4;
const TRIANGLE_PERMUTATIONS: usize = 6;
const TETRAHEDRON_CASES: usize = 11;
const TETRAHEDRON_PERMUTATIONS: usize = 24;

/// Per-case and per-(case, permutation) hit counts for each subdividable facet order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CaseCounts {
    edge: [[u64; EDGE_PERMUTATIONS]; EDGE_CASES],
    triangle: [[u64; TRIANGLE_PERMUTATIONS]; TRIANGLE_CASES],
    tetrahedron: [[u64; TETRAHEDRON_PERMUTATIONS]; TETRAHEDRON_CASES],
}

impl CaseCounts {
    /// Clears every counter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Records one classification. Out-of-range indices are ignored.
    #[cfg_attr(not(feature = "case-counts"), allow(unused_variables))]
    #[inline]
    pub(crate) fn record(&mut self, order: FacetOrder, case_id: usize, permutation_id: usize) {
        #[cfg(feature = "case-counts")]
        if let Some(count) = self.row_mut(order, case_id).and_then(|row| row.get_mut(permutation_id)) {
            *count += 1;
        }
    }

    /// Hits of canonical case `case_id` for `order`, over all permutations.
    #[must_use]
    pub fn case_count(&self, order: FacetOrder, case_id: usize) -> u64 {
        self.row(order, case_id).map_or(0, |row| row.iter().sum())
    }

    /// Hits of canonical case `case_id` reached through permutation `permutation_id`.
    #[must_use]
    pub fn subcase_count(&self, order: FacetOrder, case_id: usize, permutation_id: usize) -> u64 {
        self.row(order, case_id)
            .and_then(|row| row.get(permutation_id))
            .copied()
            .unwrap_or(0)
    }

    /// Total classifications recorded for `order`.
    #[must_use]
    pub fn total(&self, order: FacetOrder) -> u64 {
        let rows: &[u64] = match order {
            FacetOrder::Vertex => &[],
            FacetOrder::Edge => self.edge.as_flattened(),
            FacetOrder::Triangle => self.triangle.as_flattened(),
            FacetOrder::Tetrahedron => self.tetrahedron.as_flattened(),
        };
        rows.iter().sum()
    }

    fn row(&self, order: FacetOrder, case_id: usize) -> Option<&[u64]> {
        match order {
            FacetOrder::Vertex => None,
            FacetOrder::Edge => self.edge.get(case_id).map(|row| &row[..]),
            FacetOrder::Triangle => self.triangle.get(case_id).map(|row| &row[..]),
            FacetOrder::Tetrahedron => self.tetrahedron.get(case_id).map(|row| &row[..]),
        }
    }

    #[cfg(feature = "case-counts")]
    fn row_mut(&mut self, order: FacetOrder, case_id: usize) -> Option<&mut [u64]> {
        match order {
            FacetOrder::Vertex => None,
            FacetOrder::Edge => self.edge.get_mut(case_id).map(|row| &mut row[..]),
            FacetOrder::Triangle => self.triangle.get_mut(case_id).map(|row| &mut row[..]),
            FacetOrder::Tetrahedron => self.tetrahedron.get_mut(case_id).map(|row| &mut row[..]),
        }
    }
}
