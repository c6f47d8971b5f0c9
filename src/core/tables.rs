//! Static case, permutation, and decomposition tables.
//!
//! Extended vertex indices: corners `0..N`, then the midpoint of edge `e` at `N + e`, then
//! (tetrahedra only) the centroid at `N + E`. Edge order for a tetrahedron is
//! `(0,1) (1,2) (0,2) (0,3) (1,3) (2,3)`; a triangle uses the first three of those and an
//! edge has just `(0,1)`. Bit `e` of an edge code is set when edge `e` is split.
//!
//! Canonical edge codes are the smallest code of each orbit under vertex relabeling.
//! Permutations are listed in lexicographic order and map canonical vertex `i` to facet
//! vertex `vertices[i]`. Every child in a decomposition is positively oriented relative to
//! the canonical parent and the children tile the parent exactly.

use crate::core::case_table::{CanonicalCase, CaseEntry, Decomposition, Permutation};

// =============================================================================
// EDGES
// =============================================================================

pub(crate) static EDGE_PERMUTATIONS: [Permutation<2, 1>; 2] = [
    Permutation::new([0, 1], [0], false),
    Permutation::new([1, 0], [0], true),
];

pub(crate) static EDGE_CASES: [CaseEntry; 2] = [CaseEntry::new(0, 0), CaseEntry::new(1, 0)];

pub(crate) static EDGE_CANONICAL_CASES: [CanonicalCase<2>; 2] = [
    CanonicalCase::new("no split", 0b0, &[], &[Decomposition::new(&[[0, 1]], false)]),
    CanonicalCase::new(
        "split",
        0b1,
        &[],
        &[Decomposition::new(&[[0, 2], [2, 1]], false)],
    ),
];

// =============================================================================
// TRIANGLES
// =============================================================================

pub(crate) static TRIANGLE_PERMUTATIONS: [Permutation<3, 3>; 6] = [
    Permutation::new([0, 1, 2], [0, 1, 2], false),
    Permutation::new([0, 2, 1], [2, 1, 0], true),
    Permutation::new([1, 0, 2], [0, 2, 1], true),
    Permutation::new([1, 2, 0], [1, 2, 0], false),
    Permutation::new([2, 0, 1], [2, 0, 1], false),
    Permutation::new([2, 1, 0], [1, 0, 2], true),
];

pub(crate) static TRIANGLE_CASES: [CaseEntry; 8] = [
    CaseEntry::new(0, 0), // 0b000
    CaseEntry::new(1, 0), // 0b001
    CaseEntry::new(1, 3), // 0b010
    CaseEntry::new(2, 0), // 0b011
    CaseEntry::new(1, 1), // 0b100
    CaseEntry::new(2, 2), // 0b101
    CaseEntry::new(2, 1), // 0b110
    CaseEntry::new(3, 0), // 0b111
];

pub(crate) static TRIANGLE_CANONICAL_CASES: [CanonicalCase<3>; 4] = [
    CanonicalCase::new(
        "no split",
        0b000,
        &[],
        &[Decomposition::new(&[[0, 1, 2]], false)],
    ),
    CanonicalCase::new(
        "one edge",
        0b001,
        &[],
        &[Decomposition::new(&[[0, 3, 2], [3, 1, 2]], false)],
    ),
    // The quadrilateral (0, m01, m12, 2) is cut along (m01, 2) or (m12, 0).
    CanonicalCase::new(
        "two edges",
        0b011,
        &[&[[3, 2], [4, 0]]],
        &[
            Decomposition::new(&[[0, 3, 2], [3, 1, 4], [3, 4, 2]], false),
            Decomposition::new(&[[0, 3, 4], [3, 1, 4], [0, 4, 2]], false),
        ],
    ),
    CanonicalCase::new(
        "all edges",
        0b111,
        &[],
        &[Decomposition::new(
            &[[0, 3, 5], [3, 1, 4], [5, 4, 2], [3, 4, 5]],
            false,
        )],
    ),
];

// =============================================================================
// TETRAHEDRA
// =============================================================================

pub(crate) static TETRAHEDRON_PERMUTATIONS: [Permutation<4, 6>; 24] = [
    Permutation::new([0, 1, 2, 3], [0, 1, 2, 3, 4, 5], false),
    Permutation::new([0, 1, 3, 2], [0, 4, 3, 2, 1, 5], true),
    Permutation::new([0, 2, 1, 3], [2, 1, 0, 3, 5, 4], true),
    Permutation::new([0, 2, 3, 1], [2, 5, 3, 0, 1, 4], false),
    Permutation::new([0, 3, 1, 2], [3, 4, 0, 2, 5, 1], false),
    Permutation::new([0, 3, 2, 1], [3, 5, 2, 0, 4, 1], true),
    Permutation::new([1, 0, 2, 3], [0, 2, 1, 4, 3, 5], true),
    Permutation::new([1, 0, 3, 2], [0, 3, 4, 1, 2, 5], false),
    Permutation::new([1, 2, 0, 3], [1, 2, 0, 4, 5, 3], false),
    Permutation::new([1, 2, 3, 0], [1, 5, 4, 0, 2, 3], true),
    Permutation::new([1, 3, 0, 2], [4, 3, 0, 1, 5, 2], true),
    Permutation::new([1, 3, 2, 0], [4, 5, 1, 0, 3, 2], false),
    Permutation::new([2, 0, 1, 3], [2, 0, 1, 5, 3, 4], false),
    Permutation::new([2, 0, 3, 1], [2, 3, 5, 1, 0, 4], true),
    Permutation::new([2, 1, 0, 3], [1, 0, 2, 5, 4, 3], true),
    Permutation::new([2, 1, 3, 0], [1, 4, 5, 2, 0, 3], false),
    Permutation::new([2, 3, 0, 1], [5, 3, 2, 1, 4, 0], false),
    Permutation::new([2, 3, 1, 0], [5, 4, 1, 2, 3, 0], true),
    Permutation::new([3, 0, 1, 2], [3, 0, 4, 5, 2, 1], true),
    Permutation::new([3, 0, 2, 1], [3, 2, 5, 4, 0, 1], false),
    Permutation::new([3, 1, 0, 2], [4, 0, 3, 5, 1, 2], false),
    Permutation::new([3, 1, 2, 0], [4, 1, 5, 3, 0, 2], true),
    Permutation::new([3, 2, 0, 1], [5, 2, 3, 4, 1, 0], true),
    Permutation::new([3, 2, 1, 0], [5, 1, 4, 3, 2, 0], false),
];

pub(crate) static TETRAHEDRON_CASES: [CaseEntry; 64] = [
    CaseEntry::new(0, 0), // 0b000000
    CaseEntry::new(1, 0), // 0b000001
    CaseEntry::new(1, 8), // 0b000010
    CaseEntry::new(2, 0), // 0b000011
    CaseEntry::new(1, 2), // 0b000100
    CaseEntry::new(2, 6), // 0b000101
    CaseEntry::new(2, 2), // 0b000110
    CaseEntry::new(4, 0), // 0b000111
    CaseEntry::new(1, 4), // 0b001000
    CaseEntry::new(2, 7), // 0b001001
    CaseEntry::new(3, 0), // 0b001010
    CaseEntry::new(5, 0), // 0b001011
    CaseEntry::new(2, 13), // 0b001100
    CaseEntry::new(6, 0), // 0b001101
    CaseEntry::new(5, 2), // 0b001110
    CaseEntry::new(7, 0), // 0b001111
    CaseEntry::new(1, 10), // 0b010000
    CaseEntry::new(2, 1), // 0b010001
    CaseEntry::new(2, 15), // 0b010010
    CaseEntry::new(6, 6), // 0b010011
    CaseEntry::new(3, 1), // 0b010100
    CaseEntry::new(5, 1), // 0b010101
    CaseEntry::new(5, 8), // 0b010110
    CaseEntry::new(7, 6), // 0b010111
    CaseEntry::new(2, 4), // 0b011000
    CaseEntry::new(4, 1), // 0b011001
    CaseEntry::new(5, 10), // 0b011010
    CaseEntry::new(7, 7), // 0b011011
    CaseEntry::new(5, 4), // 0b011100
    CaseEntry::new(7, 1), // 0b011101
    CaseEntry::new(8, 0), // 0b011110
    CaseEntry::new(9, 0), // 0b011111
    CaseEntry::new(1, 16), // 0b100000
    CaseEntry::new(3, 3), // 0b100001
    CaseEntry::new(2, 9), // 0b100010
    CaseEntry::new(5, 9), // 0b100011
    CaseEntry::new(2, 3), // 0b100100
    CaseEntry::new(5, 3), // 0b100101
    CaseEntry::new(6, 12), // 0b100110
    CaseEntry::new(7, 12), // 0b100111
    CaseEntry::new(2, 5), // 0b101000
    CaseEntry::new(5, 5), // 0b101001
    CaseEntry::new(5, 16), // 0b101010
    CaseEntry::new(8, 2), // 0b101011
    CaseEntry::new(4, 3), // 0b101100
    CaseEntry::new(7, 3), // 0b101101
    CaseEntry::new(7, 13), // 0b101110
    CaseEntry::new(9, 2), // 0b101111
    CaseEntry::new(2, 11), // 0b110000
    CaseEntry::new(5, 11), // 0b110001
    CaseEntry::new(4, 9), // 0b110010
    CaseEntry::new(7, 9), // 0b110011
    CaseEntry::new(5, 17), // 0b110100
    CaseEntry::new(8, 4), // 0b110101
    CaseEntry::new(7, 15), // 0b110110
    CaseEntry::new(9, 8), // 0b110111
    CaseEntry::new(6, 18), // 0b111000
    CaseEntry::new(7, 18), // 0b111001
    CaseEntry::new(7, 21), // 0b111010
    CaseEntry::new(9, 10), // 0b111011
    CaseEntry::new(7, 19), // 0b111100
    CaseEntry::new(9, 4), // 0b111101
    CaseEntry::new(9, 16), // 0b111110
    CaseEntry::new(10, 0), // 0b111111
];

pub(crate) static TETRAHEDRON_CANONICAL_CASES: [CanonicalCase<4>; 11] = [
    CanonicalCase::new(
        "no split",
        0b000000,
        &[],
        &[
            Decomposition::new(&[[0, 1, 2, 3]], false),
        ],
    ),
    CanonicalCase::new(
        "one edge",
        0b000001,
        &[],
        &[
            Decomposition::new(&[[0, 2, 3, 4], [1, 2, 4, 3]], false),
        ],
    ),
    CanonicalCase::new(
        "two adjacent edges",
        0b000011,
        &[
            &[[4, 2], [5, 0]],
        ],
        &[
            Decomposition::new(&[[1, 3, 5, 4], [0, 2, 3, 4], [2, 3, 4, 5]], false),
            Decomposition::new(&[[1, 3, 5, 4], [0, 2, 3, 5], [0, 3, 4, 5]], false),
        ],
    ),
    CanonicalCase::new(
        "two opposite edges",
        0b001010,
        &[],
        &[
            Decomposition::new(&[[0, 1, 5, 7], [0, 2, 7, 5], [1, 3, 5, 7], [2, 3, 7, 5]], false),
        ],
    ),
    CanonicalCase::new(
        "face triangle",
        0b000111,
        &[],
        &[
            Decomposition::new(&[[0, 3, 4, 6], [1, 3, 5, 4], [2, 3, 6, 5], [3, 4, 6, 5]], false),
        ],
    ),
    CanonicalCase::new(
        "path of three edges",
        0b001011,
        &[
            &[[4, 2], [5, 0]],
            &[[4, 3], [7, 1]],
        ],
        &[
            Decomposition::new(&[[1, 3, 5, 4], [0, 2, 7, 4], [2, 3, 4, 5], [2, 3, 7, 4]], false),
            Decomposition::new(
                &[
                    [1, 3, 5, 4],
                    [0, 2, 7, 5],
                    [0, 4, 5, 7],
                    [3, 4, 7, 5],
                    [2, 3, 7, 5],
                ],
                false,
            ),
            Decomposition::new(
                &[
                    [1, 4, 7, 5],
                    [0, 2, 7, 4],
                    [2, 4, 5, 7],
                    [1, 3, 5, 7],
                    [2, 3, 7, 5],
                ],
                false,
            ),
            Decomposition::new(
                &[
                    [1, 4, 7, 5],
                    [0, 2, 7, 5],
                    [0, 4, 5, 7],
                    [1, 3, 5, 7],
                    [2, 3, 7, 5],
                ],
                false,
            ),
        ],
    ),
    CanonicalCase::new(
        "star of three edges",
        0b001101,
        &[
            &[[4, 2], [6, 1]],
            &[[4, 3], [7, 1]],
            &[[6, 3], [7, 2]],
        ],
        &[
            Decomposition::new(&[[0, 4, 6, 7], [1, 2, 4, 3], [2, 3, 6, 4], [3, 4, 7, 6]], false),
            Decomposition::new(&[[0, 4, 6, 7], [1, 2, 6, 3], [1, 3, 6, 4], [3, 4, 7, 6]], false),
            Decomposition::new(
                &[
                    [0, 4, 6, 10],
                    [1, 2, 4, 10],
                    [2, 4, 10, 6],
                    [0, 4, 10, 7],
                    [1, 3, 10, 7],
                    [1, 4, 7, 10],
                    [0, 6, 7, 10],
                    [2, 3, 6, 10],
                    [3, 6, 10, 7],
                    [1, 2, 10, 3],
                ],
                true,
            ),
            Decomposition::new(&[[0, 4, 6, 7], [1, 2, 6, 3], [1, 4, 7, 6], [1, 3, 6, 7]], false),
            Decomposition::new(&[[0, 4, 6, 7], [1, 2, 4, 3], [2, 4, 7, 6], [2, 3, 7, 4]], false),
            Decomposition::new(
                &[
                    [0, 4, 6, 10],
                    [1, 2, 6, 10],
                    [1, 4, 10, 6],
                    [0, 4, 10, 7],
                    [1, 3, 10, 4],
                    [3, 4, 7, 10],
                    [0, 6, 7, 10],
                    [2, 3, 7, 10],
                    [2, 6, 10, 7],
                    [1, 2, 10, 3],
                ],
                true,
            ),
            Decomposition::new(&[[0, 4, 6, 7], [1, 2, 4, 7], [2, 4, 7, 6], [1, 2, 7, 3]], false),
            Decomposition::new(&[[0, 4, 6, 7], [1, 2, 6, 7], [1, 4, 7, 6], [1, 2, 7, 3]], false),
        ],
    ),
    CanonicalCase::new(
        "triangle with pendant edge",
        0b001111,
        &[
            &[[4, 3], [7, 1]],
            &[[6, 3], [7, 2]],
        ],
        &[
            Decomposition::new(
                &[
                    [0, 4, 6, 7],
                    [1, 3, 5, 4],
                    [2, 3, 6, 5],
                    [3, 4, 6, 5],
                    [3, 4, 7, 6],
                ],
                false,
            ),
            Decomposition::new(
                &[
                    [0, 4, 6, 7],
                    [1, 4, 7, 5],
                    [2, 3, 6, 5],
                    [4, 5, 6, 7],
                    [1, 3, 5, 7],
                    [3, 5, 7, 6],
                ],
                false,
            ),
            Decomposition::new(
                &[
                    [0, 4, 6, 7],
                    [1, 3, 5, 4],
                    [2, 5, 7, 6],
                    [4, 5, 6, 7],
                    [3, 4, 7, 5],
                    [2, 3, 7, 5],
                ],
                false,
            ),
            Decomposition::new(
                &[
                    [0, 4, 6, 7],
                    [1, 4, 7, 5],
                    [2, 5, 7, 6],
                    [4, 5, 6, 7],
                    [1, 3, 5, 7],
                    [2, 3, 7, 5],
                ],
                false,
            ),
        ],
    ),
    CanonicalCase::new(
        "four-cycle",
        0b011110,
        &[
            &[[6, 1], [5, 0]],
            &[[7, 1], [8, 0]],
            &[[6, 3], [7, 2]],
            &[[5, 3], [8, 2]],
        ],
        &[
            Decomposition::new(
                &[
                    [2, 3, 6, 5],
                    [0, 1, 6, 7],
                    [1, 5, 6, 7],
                    [3, 5, 8, 7],
                    [1, 5, 7, 8],
                    [3, 5, 7, 6],
                ],
                false,
            ),
            Decomposition::new(
                &[
                    [2, 3, 6, 5],
                    [0, 1, 5, 7],
                    [0, 5, 6, 7],
                    [3, 5, 8, 7],
                    [1, 5, 7, 8],
                    [3, 5, 7, 6],
                ],
                false,
            ),
            Decomposition::new(
                &[
                    [2, 3, 6, 5],
                    [0, 1, 6, 8],
                    [1, 5, 6, 8],
                    [3, 6, 8, 7],
                    [0, 6, 7, 8],
                    [3, 5, 8, 6],
                ],
                false,
            ),
            Decomposition::new(
                &[
                    [2, 3, 6, 5],
                    [0, 1, 5, 8],
                    [0, 5, 6, 7],
                    [3, 5, 8, 7],
                    [0, 5, 7, 8],
                    [3, 5, 7, 6],
                ],
                false,
            ),
            Decomposition::new(
                &[
                    [2, 5, 7, 6],
                    [0, 1, 6, 7],
                    [1, 5, 6, 7],
                    [3, 5, 8, 7],
                    [1, 5, 7, 8],
                    [2, 3, 7, 5],
                ],
                false,
            ),
            Decomposition::new(
                &[
                    [2, 5, 7, 6],
                    [0, 1, 5, 7],
                    [0, 5, 6, 7],
                    [3, 5, 8, 7],
                    [1, 5, 7, 8],
                    [2, 3, 7, 5],
                ],
                false,
            ),
            Decomposition::new(
                &[
                    [2, 5, 10, 6],
                    [0, 1, 6, 10],
                    [1, 5, 6, 10],
                    [3, 7, 10, 8],
                    [0, 1, 10, 8],
                    [0, 7, 8, 10],
                    [0, 6, 7, 10],
                    [2, 3, 7, 10],
                    [2, 6, 10, 7],
                    [1, 5, 10, 8],
                    [2, 3, 10, 5],
                    [3, 5, 8, 10],
                ],
                true,
            ),
            Decomposition::new(
                &[
                    [2, 5, 7, 6],
                    [0, 1, 5, 8],
                    [0, 5, 6, 7],
                    [3, 5, 8, 7],
                    [0, 5, 7, 8],
                    [2, 3, 7, 5],
                ],
                false,
            ),
            Decomposition::new(
                &[
                    [2, 5, 8, 6],
                    [0, 1, 6, 7],
                    [1, 5, 6, 8],
                    [3, 6, 8, 7],
                    [1, 6, 7, 8],
                    [2, 3, 6, 8],
                ],
                false,
            ),
            Decomposition::new(
                &[
                    [2, 5, 10, 6],
                    [0, 1, 5, 10],
                    [0, 5, 6, 10],
                    [3, 7, 10, 8],
                    [0, 1, 10, 7],
                    [1, 7, 8, 10],
                    [0, 6, 7, 10],
                    [2, 3, 6, 10],
                    [3, 6, 10, 7],
                    [1, 5, 10, 8],
                    [2, 3, 10, 8],
                    [2, 5, 8, 10],
                ],
                true,
            ),
            Decomposition::new(
                &[
                    [2, 5, 8, 6],
                    [0, 1, 6, 8],
                    [1, 5, 6, 8],
                    [3, 6, 8, 7],
                    [0, 6, 7, 8],
                    [2, 3, 6, 8],
                ],
                false,
            ),
            Decomposition::new(
                &[
                    [2, 5, 8, 6],
                    [0, 1, 5, 8],
                    [0, 5, 6, 8],
                    [3, 6, 8, 7],
                    [0, 6, 7, 8],
                    [2, 3, 6, 8],
                ],
                false,
            ),
            Decomposition::new(
                &[
                    [2, 5, 7, 6],
                    [0, 1, 6, 7],
                    [1, 5, 6, 7],
                    [2, 3, 7, 8],
                    [1, 5, 7, 8],
                    [2, 5, 8, 7],
                ],
                false,
            ),
            Decomposition::new(
                &[
                    [2, 5, 7, 6],
                    [0, 1, 5, 7],
                    [0, 5, 6, 7],
                    [2, 3, 7, 8],
                    [1, 5, 7, 8],
                    [2, 5, 8, 7],
                ],
                false,
            ),
            Decomposition::new(
                &[
                    [2, 5, 8, 6],
                    [0, 1, 6, 8],
                    [1, 5, 6, 8],
                    [2, 3, 7, 8],
                    [0, 6, 7, 8],
                    [2, 6, 8, 7],
                ],
                false,
            ),
            Decomposition::new(
                &[
                    [2, 5, 7, 6],
                    [0, 1, 5, 8],
                    [0, 5, 6, 7],
                    [2, 3, 7, 8],
                    [0, 5, 7, 8],
                    [2, 5, 8, 7],
                ],
                false,
            ),
        ],
    ),
    CanonicalCase::new(
        "five edges",
        0b011111,
        &[
            &[[6, 3], [7, 2]],
            &[[5, 3], [8, 2]],
        ],
        &[
            Decomposition::new(
                &[
                    [0, 4, 6, 7],
                    [1, 4, 8, 5],
                    [2, 3, 6, 5],
                    [4, 5, 6, 7],
                    [3, 5, 8, 7],
                    [4, 5, 7, 8],
                    [3, 5, 7, 6],
                ],
                false,
            ),
            Decomposition::new(
                &[
                    [0, 4, 6, 7],
                    [1, 4, 8, 5],
                    [2, 5, 7, 6],
                    [4, 5, 6, 7],
                    [3, 5, 8, 7],
                    [4, 5, 7, 8],
                    [2, 3, 7, 5],
                ],
                false,
            ),
            Decomposition::new(
                &[
                    [0, 4, 6, 7],
                    [1, 4, 8, 5],
                    [2, 5, 8, 6],
                    [4, 5, 6, 8],
                    [3, 6, 8, 7],
                    [4, 6, 7, 8],
                    [2, 3, 6, 8],
                ],
                false,
            ),
            Decomposition::new(
                &[
                    [0, 4, 6, 7],
                    [1, 4, 8, 5],
                    [2, 5, 7, 6],
                    [4, 5, 6, 7],
                    [2, 3, 7, 8],
                    [4, 5, 7, 8],
                    [2, 5, 8, 7],
                ],
                false,
            ),
        ],
    ),
    CanonicalCase::new(
        "all six edges",
        0b111111,
        &[
            &[[4, 9], [5, 7], [6, 8]],
        ],
        &[
            Decomposition::new(
                &[
                    [0, 4, 6, 7],
                    [1, 4, 8, 5],
                    [2, 5, 9, 6],
                    [4, 5, 6, 9],
                    [3, 7, 9, 8],
                    [4, 7, 8, 9],
                    [4, 6, 7, 9],
                    [4, 5, 9, 8],
                ],
                false,
            ),
            Decomposition::new(
                &[
                    [0, 4, 6, 7],
                    [1, 4, 8, 5],
                    [2, 5, 9, 6],
                    [4, 5, 6, 7],
                    [3, 7, 9, 8],
                    [4, 5, 7, 8],
                    [5, 6, 7, 9],
                    [5, 7, 8, 9],
                ],
                false,
            ),
            Decomposition::new(
                &[
                    [0, 4, 6, 7],
                    [1, 4, 8, 5],
                    [2, 5, 9, 6],
                    [4, 5, 6, 8],
                    [3, 7, 9, 8],
                    [4, 6, 7, 8],
                    [6, 7, 8, 9],
                    [5, 6, 8, 9],
                ],
                false,
            ),
        ],
    ),
];
