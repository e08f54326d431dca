//! Exhaustive assignment search implementation.
//!
//! The matcher scans every permutation of table indices in lexicographic
//! order and keeps those under which each vertex's mapped neighbor set equals
//! the nonzero-cell set of its assigned table row. Exact set equality checks
//! both directions at once: a missing edge on either side breaks it.

use std::collections::BTreeSet;

use itertools::Itertools;

use isomatch_common::{AdjacencyMap, Mapping, MatchResult, MatrixData};

use crate::error::Result;
use crate::index::{GraphIndex, MatrixIndex, ordered};

/// Entry point for assignment searches.
pub struct IsoMatcher {
    graph: GraphIndex,
    matrix: MatrixIndex,
}

impl IsoMatcher {
    /// Copy both snapshots into search indices.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SolveError`] when a snapshot is malformed (ragged
    /// matrix rows, adjacency referencing an unknown node).
    pub fn build(graph_adj: &AdjacencyMap, matrix: &MatrixData) -> Result<Self> {
        Ok(Self {
            graph: GraphIndex::build(graph_adj)?,
            matrix: MatrixIndex::build(matrix)?,
        })
    }

    /// Execute the search and return every valid assignment, in
    /// permutation-enumeration order.
    ///
    /// A vertex count that differs from the table size yields an empty list
    /// immediately; so does a search in which no permutation survives
    /// validation. Callers must not assume a unique answer: a symmetric
    /// graph/table pair yields one result per automorphism.
    #[must_use]
    pub fn enumerate_assignments(&self) -> Vec<MatchResult> {
        let n = self.matrix.size();
        if self.graph.len() != n {
            tracing::info!(
                "vertex count {} does not match table size {}, nothing to enumerate",
                self.graph.len(),
                n
            );
            return Vec::new();
        }

        tracing::info!("starting assignment search over {} vertices", n);

        let mut results = Vec::new();
        for perm in (0..n).permutations(n) {
            if self.is_consistent(&perm) {
                tracing::debug!("assignment {:?} preserves adjacency", perm);
                results.push(self.render(&perm));
            } else {
                tracing::trace!("assignment {:?} rejected", perm);
            }
        }

        tracing::info!("search complete: {} valid assignments", results.len());
        results
    }

    /// Check that mapping vertex `i` to row `perm[i]` preserves adjacency for
    /// every vertex.
    fn is_consistent(&self, perm: &[usize]) -> bool {
        (0..perm.len()).all(|i| {
            let mapped: BTreeSet<usize> = self.graph.neighbors(i).iter().map(|&j| perm[j]).collect();
            *self.matrix.neighbors(perm[i]) == mapped
        })
    }

    /// Build the reported result for a validated permutation: the 1-based
    /// mapping and one line per matched edge, each edge reported once.
    fn render(&self, perm: &[usize]) -> MatchResult {
        let names = self.graph.names();
        let mut reported: BTreeSet<(usize, usize)> = BTreeSet::new();
        let mut matched_edges = Vec::new();

        for (i, name) in names.iter().enumerate() {
            for &j in self.graph.neighbors(i) {
                if !reported.insert(ordered(perm[i], perm[j])) {
                    continue;
                }
                let weight = self.matrix.weight(perm[i], perm[j]).unwrap_or("?");
                matched_edges.push(format!(
                    "{}-{} (P{}-P{}): {}",
                    name,
                    names[j],
                    perm[i] + 1,
                    perm[j] + 1,
                    weight
                ));
            }
        }
        matched_edges.sort();

        let mapping: Mapping = names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), perm[i] + 1))
            .collect();

        MatchResult {
            mapping,
            matched_edges,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use isomatch_common::{adjacency, matrix};

    #[test]
    fn empty_inputs_yield_the_single_empty_assignment() {
        let matcher = IsoMatcher::build(&adjacency(&[]), &matrix(&[])).unwrap();
        let results = matcher.enumerate_assignments();

        assert_eq!(results.len(), 1);
        assert!(results[0].mapping.is_empty());
        assert!(results[0].matched_edges.is_empty());
    }

    #[test]
    fn results_follow_permutation_order() {
        let graph = adjacency(&[("A", &["B", "C"]), ("B", &["A", "C"]), ("C", &["A", "B"])]);
        let table = matrix(&[&["", "1", "1"], &["1", "", "1"], &["1", "1", ""]]);
        let results = IsoMatcher::build(&graph, &table)
            .unwrap()
            .enumerate_assignments();

        assert_eq!(results.len(), 6);
        // First permutation is the identity, last is the full reversal.
        assert_eq!(results[0].mapping["A"], 1);
        assert_eq!(results[0].mapping["B"], 2);
        assert_eq!(results[0].mapping["C"], 3);
        assert_eq!(results[5].mapping["A"], 3);
        assert_eq!(results[5].mapping["B"], 2);
        assert_eq!(results[5].mapping["C"], 1);
    }

    #[test]
    fn validated_assignments_never_report_missing_weights() {
        let graph = adjacency(&[("A", &["B"]), ("B", &["A"])]);
        let table = matrix(&[&["", "9"], &["9", ""]]);
        let results = IsoMatcher::build(&graph, &table)
            .unwrap()
            .enumerate_assignments();

        assert!(
            results
                .iter()
                .all(|r| r.matched_edges.iter().all(|line| !line.ends_with('?')))
        );
    }
}
