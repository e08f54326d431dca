//! Project persistence.
//!
//! The JSON shape here is shared with external editors and must round-trip
//! the topology and matrix exactly. Node ids are assigned at save time by
//! sorting nodes by name and using the array position — they are not stable
//! identities, merely save-time indices for the edge list to reference.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use isomatch_common::MatrixData;

use crate::graph::{GraphModel, Point};
use crate::matrix::WeightMatrix;

/// Failures while saving or loading a project file.
#[derive(Error, Debug)]
pub enum ProjectError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("project file contains duplicate node name '{name}'")]
    DuplicateNodeName { name: String },

    #[error("edge references unknown node id {id}")]
    UnknownNodeId { id: usize },
}

/// Result alias for persistence operations.
pub type Result<T> = std::result::Result<T, ProjectError>;

/// On-disk project shape: the graph section plus the raw matrix snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectFile {
    /// Topology section.
    pub graph: GraphSection,
    /// Row-major matrix cell text, assumed already symmetric.
    pub matrix: MatrixData,
}

/// Persisted topology: nodes, edges by node id, and the name counter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphSection {
    /// Saved nodes, in name order.
    pub nodes: Vec<NodeRecord>,
    /// Saved edges, referencing `nodes[].id`.
    pub edges: Vec<EdgeRecord>,
    /// Name-counter value at save time.
    pub node_counter: u64,
}

/// A saved node. `id` is the node's position in the name-sorted node array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: usize,
    pub name: String,
    pub x: f64,
    pub y: f64,
}

/// A saved undirected edge between two node ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub u: usize,
    pub v: usize,
}

impl ProjectFile {
    /// Snapshot both models into the persisted shape.
    #[must_use]
    pub fn capture(graph: &GraphModel, matrix: &WeightMatrix) -> Self {
        // Node iteration is already name-ordered, so ids fall out of the
        // enumeration directly.
        let nodes: Vec<NodeRecord> = graph
            .nodes()
            .enumerate()
            .map(|(id, node)| NodeRecord {
                id,
                name: node.name.clone(),
                x: node.pos.x,
                y: node.pos.y,
            })
            .collect();

        let id_by_name: HashMap<&str, usize> = nodes
            .iter()
            .map(|record| (record.name.as_str(), record.id))
            .collect();

        let edges: Vec<EdgeRecord> = graph
            .edges()
            .filter_map(|(u, v)| {
                Some(EdgeRecord {
                    u: *id_by_name.get(u)?,
                    v: *id_by_name.get(v)?,
                })
            })
            .collect();

        Self {
            graph: GraphSection {
                nodes,
                edges,
                node_counter: graph.node_counter(),
            },
            matrix: matrix.data(),
        }
    }

    /// Rebuild both models from the persisted shape.
    ///
    /// Clears existing state first. Node re-creation goes through the
    /// counter-advancing path (see `GraphModel::create_node` on the naming
    /// quirk) but skips the placement distance check; the file's counter
    /// value is restored afterwards and wins. Matrix text is loaded directly,
    /// bypassing the mirroring side effect.
    ///
    /// # Errors
    ///
    /// [`ProjectError::DuplicateNodeName`] when two saved nodes share a name;
    /// [`ProjectError::UnknownNodeId`] when an edge references an id with no
    /// node record.
    pub fn restore(&self, graph: &mut GraphModel, matrix: &mut WeightMatrix) -> Result<()> {
        graph.clear();

        let mut name_by_id: HashMap<usize, &str> = HashMap::new();
        for record in &self.graph.nodes {
            if !graph.restore_node(record.name.clone(), Point::new(record.x, record.y)) {
                return Err(ProjectError::DuplicateNodeName {
                    name: record.name.clone(),
                });
            }
            name_by_id.insert(record.id, record.name.as_str());
        }

        for edge in &self.graph.edges {
            let u = name_by_id
                .get(&edge.u)
                .ok_or(ProjectError::UnknownNodeId { id: edge.u })?;
            let v = name_by_id
                .get(&edge.v)
                .ok_or(ProjectError::UnknownNodeId { id: edge.v })?;
            graph.create_edge(u, v);
        }

        graph.set_node_counter(self.graph.node_counter);
        matrix.load_data(self.matrix.clone());

        tracing::info!(
            "project restored: {} nodes, {} edges, {}x{} matrix",
            graph.node_count(),
            graph.edge_count(),
            matrix.size(),
            matrix.size()
        );
        Ok(())
    }

    /// Write the project as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// IO and serialization failures.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }

    /// Read a project from a JSON file.
    ///
    /// # Errors
    ///
    /// IO and deserialization failures.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }
}
