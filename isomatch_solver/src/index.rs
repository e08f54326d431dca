//! Pre-built lookup structures for the permutation search.
//!
//! Both inputs are copied into index form before the search starts, so the
//! solver never reads the live models while enumerating.

use std::collections::{BTreeSet, HashMap};

use isomatch_common::{AdjacencyMap, MatrixData};

use crate::error::{Result, SolveError};

/// Index over the matrix snapshot.
///
/// `adj[r]` holds the columns whose cells are nonzero in row `r`; `weights`
/// holds the label of every nonzero cell keyed by its ordered index pair.
#[derive(Clone, Debug)]
pub(crate) struct MatrixIndex {
    size: usize,
    adj: Vec<BTreeSet<usize>>,
    weights: HashMap<(usize, usize), String>,
}

impl MatrixIndex {
    /// Build the index, verifying that every row has exactly `size` cells.
    pub(crate) fn build(matrix: &MatrixData) -> Result<Self> {
        let size = matrix.len();
        for (row, cells) in matrix.iter().enumerate() {
            if cells.len() != size {
                return Err(SolveError::RaggedMatrix {
                    row,
                    expected: size,
                    found: cells.len(),
                });
            }
        }

        let mut adj = vec![BTreeSet::new(); size];
        let mut weights = HashMap::new();
        for (r, cells) in matrix.iter().enumerate() {
            for (c, cell) in cells.iter().enumerate() {
                let label = cell.trim();
                if label.is_empty() || label == "0" {
                    continue;
                }
                adj[r].insert(c);
                weights.insert(ordered(r, c), label.to_string());
            }
        }

        Ok(Self { size, adj, weights })
    }

    pub(crate) const fn size(&self) -> usize {
        self.size
    }

    pub(crate) fn neighbors(&self, row: usize) -> &BTreeSet<usize> {
        &self.adj[row]
    }

    pub(crate) fn weight(&self, a: usize, b: usize) -> Option<&str> {
        self.weights.get(&ordered(a, b)).map(String::as_str)
    }
}

/// Index over the graph snapshot.
///
/// Names are held in sorted order; neighbor sets are rewritten as positions
/// into that order so the search compares index sets directly.
#[derive(Clone, Debug)]
pub(crate) struct GraphIndex {
    names: Vec<String>,
    neighbors: Vec<BTreeSet<usize>>,
}

impl GraphIndex {
    pub(crate) fn build(graph_adj: &AdjacencyMap) -> Result<Self> {
        // BTreeMap iteration yields the keys already name-sorted.
        let names: Vec<String> = graph_adj.keys().cloned().collect();
        let position: HashMap<&str, usize> = names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.as_str(), i))
            .collect();

        let mut neighbors = Vec::with_capacity(names.len());
        for (node, nbrs) in graph_adj {
            let mut set = BTreeSet::new();
            for neighbor in nbrs {
                let Some(&idx) = position.get(neighbor.as_str()) else {
                    return Err(SolveError::UnknownNeighbor {
                        node: node.clone(),
                        neighbor: neighbor.clone(),
                    });
                };
                set.insert(idx);
            }
            neighbors.push(set);
        }

        Ok(Self { names, neighbors })
    }

    pub(crate) fn len(&self) -> usize {
        self.names.len()
    }

    pub(crate) fn names(&self) -> &[String] {
        &self.names
    }

    pub(crate) fn neighbors(&self, idx: usize) -> &BTreeSet<usize> {
        &self.neighbors[idx]
    }
}

/// Normalize an index pair so undirected lookups share one key.
pub(crate) const fn ordered(a: usize, b: usize) -> (usize, usize) {
    if a <= b { (a, b) } else { (b, a) }
}
