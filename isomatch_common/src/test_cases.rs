//! Common test cases for the isomatch solver.
//!
//! This module defines the structure for solver test cases (a graph snapshot,
//! a matrix snapshot, and the expected number of assignments) and provides a
//! collection of pre-defined cases shared by the solver's integration tests.

use crate::matches::{AdjacencyMap, MatrixData};

/// A complete solver test case definition.
#[derive(Debug, Clone)]
pub struct TestCase {
    /// The name of the test case.
    pub name: &'static str,
    /// The adjacency snapshot to match.
    pub graph: AdjacencyMap,
    /// The matrix snapshot to match against.
    pub matrix: MatrixData,
    /// The expected number of valid assignments.
    pub expected_matches: usize,
}

/// Build an [`AdjacencyMap`] from `(node, neighbors)` entries.
#[must_use]
pub fn adjacency(entries: &[(&str, &[&str])]) -> AdjacencyMap {
    entries
        .iter()
        .map(|(node, neighbors)| {
            (
                (*node).to_string(),
                neighbors.iter().map(|n| (*n).to_string()).collect(),
            )
        })
        .collect()
}

/// Build a [`MatrixData`] snapshot from row slices.
#[must_use]
pub fn matrix(rows: &[&[&str]]) -> MatrixData {
    rows.iter()
        .map(|row| row.iter().map(|cell| (*cell).to_string()).collect())
        .collect()
}

// #####################
// TEST CASES
// #####################
lazy_static::lazy_static! {
    static ref TRIANGLE_COMPLETE: TestCase = TestCase {
        name: "triangle_complete",
        graph: adjacency(&[("A", &["B", "C"]), ("B", &["A", "C"]), ("C", &["A", "B"])]),
        matrix: matrix(&[
            &["", "1", "1"],
            &["1", "", "1"],
            &["1", "1", ""],
        ]),
        // Every permutation of a complete graph is an isomorphism.
        expected_matches: 6,
    };

    static ref TWO_NODE_WEIGHTED: TestCase = TestCase {
        name: "two_node_weighted",
        graph: adjacency(&[("A", &["B"]), ("B", &["A"])]),
        matrix: matrix(&[
            &["", "7"],
            &["7", ""],
        ]),
        expected_matches: 2,
    };

    static ref SIZE_MISMATCH: TestCase = TestCase {
        name: "size_mismatch",
        graph: adjacency(&[("A", &["B"]), ("B", &["A"])]),
        matrix: matrix(&[
            &["", "", ""],
            &["", "", ""],
            &["", "", ""],
        ]),
        expected_matches: 0,
    };

    static ref PATH_THREE: TestCase = TestCase {
        name: "path_three",
        graph: adjacency(&[("A", &["B"]), ("B", &["A", "C"]), ("C", &["B"])]),
        matrix: matrix(&[
            &["", "5", ""],
            &["5", "", "8"],
            &["", "8", ""],
        ]),
        // The middle vertex is pinned to index 1; the endpoints swap freely.
        expected_matches: 2,
    };

    static ref SQUARE_CYCLE: TestCase = TestCase {
        name: "square_cycle",
        graph: adjacency(&[
            ("A", &["B", "D"]),
            ("B", &["A", "C"]),
            ("C", &["B", "D"]),
            ("D", &["A", "C"]),
        ]),
        matrix: matrix(&[
            &["", "1", "", "4"],
            &["1", "", "2", ""],
            &["", "2", "", "3"],
            &["4", "", "3", ""],
        ]),
        // Dihedral symmetry of the 4-cycle: 4 rotations x 2 reflections.
        expected_matches: 8,
    };

    static ref ISOLATED_VERTEX: TestCase = TestCase {
        name: "isolated_vertex",
        graph: adjacency(&[("A", &["B"]), ("B", &["A"]), ("C", &[])]),
        matrix: matrix(&[
            &["", "2", ""],
            &["2", "", ""],
            &["", "", ""],
        ]),
        expected_matches: 2,
    };

    static ref ZERO_LITERAL_NO_EDGE: TestCase = TestCase {
        name: "zero_literal_no_edge",
        graph: adjacency(&[("A", &[]), ("B", &[])]),
        matrix: matrix(&[
            &["", "0"],
            &["0", ""],
        ]),
        // "0" cells count as absent edges, so the empty graph matches.
        expected_matches: 2,
    };

    static ref TOPOLOGY_MISMATCH: TestCase = TestCase {
        name: "topology_mismatch",
        graph: adjacency(&[("A", &["B", "C"]), ("B", &["A", "C"]), ("C", &["A", "B"])]),
        matrix: matrix(&[
            &["", "5", ""],
            &["5", "", "8"],
            &["", "8", ""],
        ]),
        expected_matches: 0,
    };

    /// All pre-defined solver test cases.
    pub static ref ALL_TEST_CASES: Vec<&'static TestCase> = vec![
        &TRIANGLE_COMPLETE,
        &TWO_NODE_WEIGHTED,
        &SIZE_MISMATCH,
        &PATH_THREE,
        &SQUARE_CYCLE,
        &ISOLATED_VERTEX,
        &ZERO_LITERAL_NO_EDGE,
        &TOPOLOGY_MISMATCH,
    ];
}
