//! Brute-force assignment search between a graph and a weight table.
//!
//! Given an adjacency snapshot of a drawn graph and a symmetric weight table,
//! this crate enumerates every vertex-to-index bijection under which the
//! graph's edge structure coincides exactly with the table's nonzero cells.
//! The search is exhaustive over all `n!` index permutations, with no pruning
//! and no deduplication of automorphic assignments — a deliberate tradeoff
//! that keeps the enumeration order deterministic and is acceptable for
//! single-digit vertex counts.

mod error;
mod index;
mod matcher;

pub use crate::error::{Result, SolveError};
pub use crate::matcher::IsoMatcher;

use isomatch_common::{AdjacencyMap, MatchResult, MatrixData};

/// Enumerate every valid assignment of `graph_adj` onto `matrix`.
///
/// The two snapshots are copied into private index structures before the
/// search starts; the solver holds no state between calls. An empty list is a
/// defined outcome covering both "vertex count differs from table size" and
/// "no permutation preserves adjacency".
///
/// # Errors
///
/// Returns [`SolveError`] only for malformed snapshots: non-square matrix
/// rows, or adjacency entries referencing a node that is not itself a key.
pub fn solve(graph_adj: &AdjacencyMap, matrix: &MatrixData) -> Result<Vec<MatchResult>> {
    Ok(IsoMatcher::build(graph_adj, matrix)?.enumerate_assignments())
}
