//! Solver input and output contract.
//!
//! The solver consumes two snapshots: an adjacency map taken from the graph
//! model and a row-major matrix snapshot taken from the weight table. It
//! produces a list of [`MatchResult`]s, one per vertex-to-index assignment
//! under which the graph's edges coincide exactly with the table's nonzero
//! cells.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Set-valued neighbor relation over node names.
///
/// Invariant: symmetric (`b ∈ adj[a] ⟺ a ∈ adj[b]`); nodes with no edges are
/// present with an empty neighbor set.
pub type AdjacencyMap = BTreeMap<String, BTreeSet<String>>;

/// Row-major snapshot of the weight table.
///
/// Cells hold opaque weight labels; an empty string or the literal `"0"`
/// denotes "no edge". The diagonal is always empty.
pub type MatrixData = Vec<Vec<String>>;

/// A bijection from node name to table index, presented 1-based.
pub type Mapping = BTreeMap<String, usize>;

/// One valid assignment of graph nodes to table indices.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Node name to 1-based table index.
    pub mapping: Mapping,
    /// Edge report under this assignment: one line per matched edge, in the
    /// form `"A-B (P1-P2): 7"`, sorted lexicographically.
    pub matched_edges: Vec<String>,
}

impl Display for MatchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let pairs: Vec<String> = self
            .mapping
            .iter()
            .map(|(name, idx)| format!("{name} -> P{idx}"))
            .collect();
        write!(f, "Mapping: [{}]", pairs.join(", "))?;
        for line in &self.matched_edges {
            write!(f, "\n  {line}")?;
        }
        Ok(())
    }
}
