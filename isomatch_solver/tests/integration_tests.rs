//! Integration tests driving the solver over the shared case catalog.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use rstest::rstest;

use isomatch_common::{ALL_TEST_CASES, MatrixData, TestCase, adjacency, matrix};
use isomatch_solver::{SolveError, solve};

fn init_test_logger() {
    static INIT: OnceLock<()> = OnceLock::new();
    let _ = INIT.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Independent reconstruction of the table's neighbor sets, for checking the
/// adjacency-preservation property on every returned assignment.
fn matrix_neighbor_sets(matrix: &MatrixData) -> Vec<BTreeSet<usize>> {
    matrix
        .iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .filter(|(_, cell)| {
                    let label = cell.trim();
                    !label.is_empty() && label != "0"
                })
                .map(|(c, _)| c)
                .collect()
        })
        .collect()
}

fn run_case(tc: &TestCase) -> Result<(), String> {
    let results = solve(&tc.graph, &tc.matrix)
        .map_err(|e| format!("case '{}': solver error: {e}", tc.name))?;

    if results.len() != tc.expected_matches {
        return Err(format!(
            "case '{}': expected {} assignments, got {}",
            tc.name,
            tc.expected_matches,
            results.len()
        ));
    }

    let table_adj = matrix_neighbor_sets(&tc.matrix);
    for result in &results {
        for (node, neighbors) in &tc.graph {
            let row = result.mapping[node] - 1;
            let mapped: BTreeSet<usize> = neighbors.iter().map(|n| result.mapping[n] - 1).collect();
            if table_adj[row] != mapped {
                return Err(format!(
                    "case '{}': assignment {:?} does not preserve adjacency at '{node}'",
                    tc.name, result.mapping
                ));
            }
        }
    }

    Ok(())
}

#[rstest]
fn solver_all_cases() {
    init_test_logger();

    let failures: Vec<_> = ALL_TEST_CASES
        .iter()
        .map(|tc| run_case(tc))
        .filter_map(Result::err)
        .collect();

    if !failures.is_empty() {
        let mut error_msg = format!("{} solver test cases failed", failures.len());
        for failure in failures {
            error_msg.push_str(&format!("\n - {failure}"));
        }
        panic!("{}", error_msg);
    }
}

#[rstest]
fn two_node_weighted_reports_the_weight() {
    init_test_logger();

    let graph = adjacency(&[("A", &["B"]), ("B", &["A"])]);
    let table = matrix(&[&["", "7"], &["7", ""]]);
    let results = solve(&graph, &table).unwrap();

    assert_eq!(results.len(), 2);
    assert!(
        results
            .iter()
            .any(|r| r.matched_edges == ["A-B (P1-P2): 7"])
    );
    assert!(
        results
            .iter()
            .all(|r| r.matched_edges.iter().all(|line| line.ends_with(": 7")))
    );
}

#[rstest]
fn path_three_edge_report_is_deterministic() {
    init_test_logger();

    let graph = adjacency(&[("A", &["B"]), ("B", &["A", "C"]), ("C", &["B"])]);
    let table = matrix(&[&["", "5", ""], &["5", "", "8"], &["", "8", ""]]);
    let results = solve(&graph, &table).unwrap();

    assert_eq!(results.len(), 2);
    // Identity permutation comes first; the reversal follows.
    assert_eq!(
        results[0].matched_edges,
        ["A-B (P1-P2): 5", "B-C (P2-P3): 8"]
    );
    assert_eq!(
        results[1].matched_edges,
        ["A-B (P3-P2): 8", "B-C (P2-P1): 5"]
    );
}

#[rstest]
fn size_mismatch_is_a_defined_empty_outcome() {
    init_test_logger();

    let graph = adjacency(&[("A", &["B"]), ("B", &["A"])]);
    let table = matrix(&[&["", "", ""], &["", "", ""], &["", "", ""]]);

    assert_eq!(solve(&graph, &table).unwrap(), vec![]);
}

#[rstest]
fn ragged_matrix_is_an_error_not_an_empty_result() {
    init_test_logger();

    let graph = adjacency(&[("A", &["B"]), ("B", &["A"])]);
    let table = matrix(&[&["", "1"], &["1"]]);

    assert_eq!(
        solve(&graph, &table).unwrap_err(),
        SolveError::RaggedMatrix {
            row: 1,
            expected: 2,
            found: 1
        }
    );
}

#[rstest]
fn corrupt_adjacency_is_an_error_not_an_empty_result() {
    init_test_logger();

    let graph = adjacency(&[("A", &["B"]), ("B", &["A", "GHOST"])]);
    let table = matrix(&[&["", "1"], &["1", ""]]);

    assert_eq!(
        solve(&graph, &table).unwrap_err(),
        SolveError::UnknownNeighbor {
            node: "B".to_string(),
            neighbor: "GHOST".to_string()
        }
    );
}
