//! Property-based tests for adaptive subdivision.
//!
//! Random simplices are tessellated with random edge-length thresholds and depth limits. Every
//! run must satisfy:
//! - leaves keep the orientation of the input and tile it exactly (length, area, volume)
//! - uniform refinement yields `2^d`, `4^d`, `8^d` leaves and never exceeds the depth limit
//! - linearly interpolated fields stay exact for linear fields
//! - a never-subdivide criterion reproduces the input unchanged

#![forbid(unsafe_code)]

use adaptive_tessellation::prelude::*;
use proptest::prelude::*;

/// Strategy for generating finite `f64` coordinates in a reasonable range.
fn finite_coordinate() -> impl Strategy<Value = f64> {
    (-10.0..10.0).prop_filter("must be finite", |x: &f64| x.is_finite())
}

fn point() -> impl Strategy<Value = [f64; 3]> {
    prop::array::uniform3(finite_coordinate())
}

/// Tetrahedra with a volume bounded away from zero, oriented positively.
fn tetrahedron() -> impl Strategy<Value = [[f64; 3]; 4]> {
    prop::array::uniform4(point())
        .prop_filter("non-degenerate", |[a, b, c, d]| {
            signed_tetrahedron_volume(a, b, c, d).abs() > 1e-2
        })
        .prop_map(|[a, b, c, d]| {
            if signed_tetrahedron_volume(&a, &b, &c, &d) > 0.0 {
                [a, b, c, d]
            } else {
                [a, b, d, c]
            }
        })
}

/// Triangles in the z = 0 plane, oriented counter-clockwise.
fn planar_triangle() -> impl Strategy<Value = [[f64; 3]; 3]> {
    prop::array::uniform3((finite_coordinate(), finite_coordinate()).prop_map(|(x, y)| [x, y, 0.0]))
        .prop_filter("non-degenerate", |[a, b, c]| triangle_area_vector(a, b, c)[2].abs() > 1e-2)
        .prop_map(|[a, b, c]| {
            if triangle_area_vector(&a, &b, &c)[2] > 0.0 {
                [a, b, c]
            } else {
                [a, c, b]
            }
        })
}

fn geometry_only<C: EdgeSubdivisionCriterion<f64>>(
    criterion: C,
    depth: u32,
) -> AdaptiveTessellator<C, f64, Vec<f64>> {
    let mut tessellator = AdaptiveTessellator::new(criterion);
    tessellator.set_embedding_dimension(ALL_FACET_ORDERS, 0);
    tessellator.set_maximum_number_of_subdivisions(depth);
    tessellator
}

proptest! {
    /// Property: tetrahedral leaves are positively oriented and their volumes sum to the input.
    #[test]
    fn prop_tetrahedron_volume_conserved(
        tet in tetrahedron(),
        max_length in 0.5..20.0_f64,
        depth in 0_u32..=3,
    ) {
        let mut tessellator = geometry_only(EdgeLengthCriterion::new(max_length), depth);
        tessellator.set_tetrahedron_callback(|a, b, c, d, _, volumes: &mut Vec<f64>, _| {
            volumes.push(signed_tetrahedron_volume(a, b, c, d));
        });
        let [a, b, c, d] = tet;
        tessellator.adaptively_sample_tetrahedron(&a, &b, &c, &d).unwrap();

        let volumes = tessellator.private_data();
        prop_assert!(!volumes.is_empty());
        prop_assert!(volumes.len() <= 8_usize.pow(depth));
        prop_assert!(volumes.iter().all(|&v| v > 0.0), "every leaf keeps the input orientation");
        let total: f64 = volumes.iter().sum();
        let expected = signed_tetrahedron_volume(&a, &b, &c, &d);
        prop_assert!((total - expected).abs() <= 1e-9 * expected.abs().max(1.0));
    }

    /// Property: triangular leaves keep the winding and tile the input.
    #[test]
    fn prop_triangle_area_conserved(
        tri in planar_triangle(),
        max_length in 0.5..20.0_f64,
        depth in 0_u32..=4,
    ) {
        let mut tessellator = geometry_only(EdgeLengthCriterion::new(max_length), depth);
        tessellator.set_triangle_callback(|a, b, c, _, areas: &mut Vec<f64>, _| {
            areas.push(triangle_area_vector(a, b, c)[2]);
        });
        let [a, b, c] = tri;
        tessellator.adaptively_sample_triangle(&a, &b, &c).unwrap();

        let areas = tessellator.private_data();
        prop_assert!(areas.len() <= 4_usize.pow(depth));
        prop_assert!(areas.iter().all(|&s| s > 0.0));
        let total: f64 = areas.iter().sum();
        let expected = triangle_area_vector(&a, &b, &c)[2];
        prop_assert!((total - expected).abs() <= 1e-9 * expected.max(1.0));
    }

    /// Property: edge leaves are contiguous, ordered, and cover the input.
    #[test]
    fn prop_edge_pieces_are_contiguous(
        a in point(),
        b in point(),
        max_length in 0.5..20.0_f64,
        depth in 0_u32..=5,
    ) {
        let mut tessellator: AdaptiveTessellator<_, f64, Vec<[[f64; 3]; 2]>> =
            AdaptiveTessellator::new(EdgeLengthCriterion::new(max_length));
        tessellator.set_embedding_dimension(1, 0);
        tessellator.set_maximum_number_of_subdivisions(depth);
        tessellator.set_edge_callback(|p, q, _, pieces: &mut Vec<[[f64; 3]; 2]>, _| {
            pieces.push([[p[0], p[1], p[2]], [q[0], q[1], q[2]]]);
        });
        tessellator.adaptively_sample_edge(&a, &b).unwrap();

        let pieces = tessellator.private_data();
        prop_assert!(pieces.len() <= 1 << depth);
        prop_assert_eq!(pieces.first().map(|p| p[0]), Some(a));
        prop_assert_eq!(pieces.last().map(|p| p[1]), Some(b));
        for pair in pieces.windows(2) {
            prop_assert_eq!(pair[0][1], pair[1][0]);
        }
    }

    /// Property: uniform refinement produces exactly 8^depth tetrahedra.
    #[test]
    fn prop_uniform_refinement_leaf_count(tet in tetrahedron(), depth in 0_u32..=3) {
        let mut tessellator = geometry_only(AlwaysSubdivide, depth);
        tessellator.set_tetrahedron_callback(|_, _, _, _, _, count: &mut Vec<f64>, _| count.push(1.0));
        let [a, b, c, d] = tet;
        tessellator.adaptively_sample_tetrahedron(&a, &b, &c, &d).unwrap();
        prop_assert_eq!(tessellator.private_data().len(), 8_usize.pow(depth));
    }

    /// Property: a never-subdivide criterion reproduces the input exactly.
    #[test]
    fn prop_never_subdivide_is_identity(tet in tetrahedron(), depth in 0_u32..=6) {
        let mut tessellator: AdaptiveTessellator<_, f64, Vec<Vec<f64>>> =
            AdaptiveTessellator::new(NeverSubdivide);
        tessellator.set_maximum_number_of_subdivisions(depth);
        tessellator.set_tetrahedron_callback(|a, b, c, d, _, out: &mut Vec<Vec<f64>>, _| {
            for v in [a, b, c, d] {
                out.push(v.to_vec());
            }
        });
        // Default tetrahedron layout: three parametric coordinates.
        let input: Vec<Vec<f64>> = tet
            .iter()
            .zip([[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
            .map(|(x, r)| x.iter().chain(&r).copied().collect())
            .collect();
        tessellator
            .adaptively_sample_tetrahedron(&input[0], &input[1], &input[2], &input[3])
            .unwrap();
        prop_assert_eq!(tessellator.private_data(), &input);
    }

    /// Property: with a linear field and a criterion that leaves midpoints alone, every leaf
    /// vertex carries the field value at its position.
    #[test]
    fn prop_linear_fields_interpolate_exactly(
        tet in tetrahedron(),
        max_length in 1.0..20.0_f64,
        gradient in prop::array::uniform3(-5.0..5.0_f64),
    ) {
        let field = move |x: &[f64]| gradient[0] * x[0] + gradient[1] * x[1] + gradient[2] * x[2];

        let mut tessellator = geometry_only(EdgeLengthCriterion::new(max_length), 3);
        tessellator.set_field_size(3, 1);
        tessellator.set_const_private_data(());
        tessellator.set_tetrahedron_callback(move |a, b, c, d, _, errors: &mut Vec<f64>, _| {
            for v in [a, b, c, d] {
                errors.push((v[3] - field(v)).abs());
            }
        });
        let vertices: Vec<Vec<f64>> = tet
            .iter()
            .map(|x| vec![x[0], x[1], x[2], field(x)])
            .collect();
        tessellator
            .adaptively_sample_tetrahedron(&vertices[0], &vertices[1], &vertices[2], &vertices[3])
            .unwrap();
        for &error in tessellator.private_data() {
            prop_assert!(error < 1e-9);
        }
    }
}
