//! Geometric utility functions on tessellation vertices.
//!
//! Vertices are plain slices laid out as `[x, y, z, parameters.., fields..]`; every helper
//! here reads only the three leading geometric coordinates and ignores the rest. The
//! functions are used by the subdivider to pick conforming face diagonals and by the
//! built-in subdivision criteria.

use crate::core::vertex::GEOMETRIC_DIMENSION;
use crate::geometry::traits::coordinate::CoordinateScalar;
use std::cmp::Ordering;

/// Returns the geometric coordinates of a vertex as a fixed-size array.
///
/// # Panics
///
/// Panics if `vertex` holds fewer than three values.
#[inline]
#[must_use]
pub fn position<T: CoordinateScalar>(vertex: &[T]) -> [T; GEOMETRIC_DIMENSION] {
    [vertex[0], vertex[1], vertex[2]]
}

/// Squared Euclidean distance between the geometric coordinates of two vertices.
///
/// # Examples
///
/// ```rust
/// use adaptive_tessellation::geometry::util::squared_distance;
///
/// let a = [0.0, 0.0, 0.0, 0.25];
/// let b = [1.0, 2.0, 2.0, 0.75];
/// assert_eq!(squared_distance(&a, &b), 9.0);
/// ```
#[inline]
#[must_use]
pub fn squared_distance<T: CoordinateScalar>(a: &[T], b: &[T]) -> T {
    a[..GEOMETRIC_DIMENSION]
        .iter()
        .zip(&b[..GEOMETRIC_DIMENSION])
        .fold(T::zero(), |acc, (&p, &q)| {
            let d = p - q;
            acc + d * d
        })
}

/// Euclidean distance between the geometric coordinates of two vertices.
#[inline]
#[must_use]
pub fn distance<T: CoordinateScalar>(a: &[T], b: &[T]) -> T {
    squared_distance(a, b).sqrt()
}

/// Lexicographic comparison of the geometric coordinates of two vertices.
///
/// NaN components compare as equal so the ordering stays total for the callers that only
/// need a deterministic tie-break.
#[must_use]
pub fn compare_lexicographic<T: CoordinateScalar>(a: &[T], b: &[T]) -> Ordering {
    a[..GEOMETRIC_DIMENSION]
        .iter()
        .zip(&b[..GEOMETRIC_DIMENSION])
        .map(|(p, q)| p.partial_cmp(q).unwrap_or(Ordering::Equal))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Orders a segment's endpoints so the lexicographically smaller one comes first.
#[inline]
#[must_use]
pub fn sorted_segment<'a, T: CoordinateScalar>(a: &'a [T], b: &'a [T]) -> (&'a [T], &'a [T]) {
    if compare_lexicographic(a, b) == Ordering::Greater {
        (b, a)
    } else {
        (a, b)
    }
}

/// Compares two segments for the diagonal selection rule: shorter first, then by the
/// lexicographic order of their sorted endpoints.
///
/// The result depends only on the segments' coordinates, never on how the endpoints are
/// labeled.
#[must_use]
pub fn compare_segments<T: CoordinateScalar>(first: (&[T], &[T]), second: (&[T], &[T])) -> Ordering {
    let first_length = squared_distance(first.0, first.1);
    let second_length = squared_distance(second.0, second.1);
    match first_length.partial_cmp(&second_length) {
        Some(Ordering::Equal) | None => {
            let (a0, a1) = sorted_segment(first.0, first.1);
            let (b0, b1) = sorted_segment(second.0, second.1);
            compare_lexicographic(a0, b0).then_with(|| compare_lexicographic(a1, b1))
        }
        Some(ordering) => ordering,
    }
}

/// Signed volume of the tetrahedron `(a, b, c, d)`.
///
/// Positive when `d` lies on the side of the plane `(a, b, c)` that the right-hand rule
/// normal points to.
///
/// # Examples
///
/// ```rust
/// use adaptive_tessellation::geometry::util::signed_tetrahedron_volume;
/// use approx::assert_relative_eq;
///
/// let volume = signed_tetrahedron_volume(
///     &[0.0, 0.0, 0.0],
///     &[1.0, 0.0, 0.0],
///     &[0.0, 1.0, 0.0],
///     &[0.0, 0.0, 1.0],
/// );
/// assert_relative_eq!(volume, 1.0 / 6.0);
/// ```
#[must_use]
pub fn signed_tetrahedron_volume<T: CoordinateScalar>(a: &[T], b: &[T], c: &[T], d: &[T]) -> T {
    let u = difference(b, a);
    let v = difference(c, a);
    let w = difference(d, a);
    let det = u[0] * (v[1] * w[2] - v[2] * w[1]) - u[1] * (v[0] * w[2] - v[2] * w[0])
        + u[2] * (v[0] * w[1] - v[1] * w[0]);
    let three = T::one() + T::one() + T::one();
    det / (three + three)
}

/// Area-weighted normal of the triangle `(a, b, c)`: half the cross product of its edges.
///
/// Its length is the triangle's area and its direction follows the vertex winding.
#[must_use]
pub fn triangle_area_vector<T: CoordinateScalar>(a: &[T], b: &[T], c: &[T]) -> [T; 3] {
    let u = difference(b, a);
    let v = difference(c, a);
    let half = T::half();
    [
        (u[1] * v[2] - u[2] * v[1]) * half,
        (u[2] * v[0] - u[0] * v[2]) * half,
        (u[0] * v[1] - u[1] * v[0]) * half,
    ]
}

/// Dot product of two 3-vectors.
#[inline]
#[must_use]
pub fn dot<T: CoordinateScalar>(a: [T; 3], b: [T; 3]) -> T {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

#[inline]
fn difference<T: CoordinateScalar>(a: &[T], b: &[T]) -> [T; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

// =============================================================================
// TESTS
// =============================================================================
