//! Conformity of tessellations across shared faces.
//!
//! Two tetrahedra sharing a face, and the face sampled on its own as a triangle, must all
//! triangulate that face identically: same vertices bit for bit, same triangles.

#![forbid(unsafe_code)]

use adaptive_tessellation::prelude::*;
use proptest::prelude::*;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::collections::BTreeSet;

/// A triangle keyed by the bit patterns of its sorted vertices.
type FaceKey = [[u64; 3]; 3];

fn key(vertices: [&[f64]; 3]) -> FaceKey {
    let mut points = vertices.map(|v| [v[0].to_bits(), v[1].to_bits(), v[2].to_bits()]);
    points.sort_unstable();
    points
}

/// Collects every leaf triangle lying in the plane `z = 0`.
#[derive(Debug, Default)]
struct PlanarFaces(BTreeSet<FaceKey>);

impl PlanarFaces {
    fn insert_if_planar(&mut self, vertices: [&[f64]; 3]) {
        if vertices.iter().all(|v| v[2] == 0.0) {
            self.0.insert(key(vertices));
        }
    }
}

fn tessellator(max_length: f64, depth: u32) -> AdaptiveTessellator<EdgeLengthCriterion<f64>, f64, PlanarFaces> {
    let mut tessellator = AdaptiveTessellator::new(EdgeLengthCriterion::new(max_length));
    tessellator.set_embedding_dimension(ALL_FACET_ORDERS, 0);
    tessellator.set_maximum_number_of_subdivisions(depth);
    tessellator.set_triangle_callback(|a, b, c, _, faces: &mut PlanarFaces, _| {
        faces.insert_if_planar([a, b, c]);
    });
    tessellator.set_tetrahedron_callback(|a, b, c, d, _, faces: &mut PlanarFaces, _| {
        for face in [[a, b, c], [a, b, d], [a, c, d], [b, c, d]] {
            faces.insert_if_planar(face);
        }
    });
    tessellator
}

/// Samples the shared face from both tetrahedra and on its own.
fn face_triangulations(
    shared: [[f64; 3]; 3],
    above: [f64; 3],
    below: [f64; 3],
    max_length: f64,
    depth: u32,
) -> [BTreeSet<FaceKey>; 3] {
    let [a, b, c] = shared;
    let mut tessellator = tessellator(max_length, depth);

    let (upper, lower) = if signed_tetrahedron_volume(&a, &b, &c, &above) > 0.0 {
        ([a, b, c, above], [b, a, c, below])
    } else {
        ([b, a, c, above], [a, b, c, below])
    };

    tessellator
        .adaptively_sample_tetrahedron(&upper[0], &upper[1], &upper[2], &upper[3])
        .unwrap();
    let from_upper = tessellator.take_private_data().0;
    tessellator
        .adaptively_sample_tetrahedron(&lower[0], &lower[1], &lower[2], &lower[3])
        .unwrap();
    let from_lower = tessellator.take_private_data().0;
    tessellator.adaptively_sample_triangle(&c, &a, &b).unwrap();
    let from_triangle = tessellator.take_private_data().0;

    [from_upper, from_lower, from_triangle]
}

#[test]
fn neighbors_agree_on_the_unit_face() {
    let shared = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
    for max_length in [0.3, 0.6, 0.8, 1.2] {
        let [upper, lower, triangle] =
            face_triangulations(shared, [0.2, 0.3, 1.0], [0.6, -0.4, -2.0], max_length, 3);
        assert!(!upper.is_empty());
        assert_eq!(upper, lower, "max_length = {max_length}");
        assert_eq!(upper, triangle, "max_length = {max_length}");
    }
}

#[test]
fn neighbors_agree_on_random_faces() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..64 {
        let mut planar = || -> [f64; 3] { [rng.random_range(-4.0..4.0), rng.random_range(-4.0..4.0), 0.0] };
        let shared = [planar(), planar(), planar()];
        let area: f64 = triangle_area_vector(&shared[0], &shared[1], &shared[2])[2];
        if area.abs() < 1e-2 {
            continue;
        }
        let above = [rng.random_range(-4.0..4.0), rng.random_range(-4.0..4.0), rng.random_range(0.5..4.0)];
        let below = [rng.random_range(-4.0..4.0), rng.random_range(-4.0..4.0), rng.random_range(-4.0..-0.5)];
        let max_length = rng.random_range(0.5..6.0);

        let [upper, lower, triangle] = face_triangulations(shared, above, below, max_length, 3);
        assert_eq!(upper, lower);
        assert_eq!(upper, triangle);
    }
}

proptest! {
    /// Property: the shared face's triangulation does not depend on which side samples it.
    #[test]
    fn prop_shared_face_is_conforming(
        shared in prop::array::uniform3(prop::array::uniform2(-5.0..5.0_f64)),
        above in (-5.0..5.0_f64, -5.0..5.0_f64, 0.25..5.0_f64),
        below in (-5.0..5.0_f64, -5.0..5.0_f64, -5.0..-0.25_f64),
        max_length in 0.5..8.0_f64,
        depth in 1_u32..=3,
    ) {
        let shared = shared.map(|[x, y]| [x, y, 0.0]);
        prop_assume!(triangle_area_vector(&shared[0], &shared[1], &shared[2])[2].abs() > 1e-2);

        let [upper, lower, triangle] = face_triangulations(
            shared,
            [above.0, above.1, above.2],
            [below.0, below.1, below.2],
            max_length,
            depth,
        );
        prop_assert_eq!(&upper, &lower);
        prop_assert_eq!(&upper, &triangle);
    }
}
