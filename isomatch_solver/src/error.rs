//! Error types for the solver.

use thiserror::Error;

/// Failures that indicate a malformed input snapshot.
///
/// A legitimately empty result (size mismatch, no isomorphism) is reported as
/// an empty match list, never as an error; these variants are reserved for
/// inputs the editing models can never produce, such as a hand-edited project
/// file with non-square matrix rows.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum SolveError {
    #[error("matrix row {row} has {found} cells, expected {expected}")]
    RaggedMatrix {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("adjacency for '{node}' references unknown node '{neighbor}'")]
    UnknownNeighbor { node: String, neighbor: String },
}

/// Result alias for solver operations.
pub type Result<T> = std::result::Result<T, SolveError>;
