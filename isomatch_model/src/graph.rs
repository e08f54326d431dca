//! Interactive graph topology model.
//!
//! Nodes carry unique names and a canvas position; edges are undirected,
//! with no self-loops and at most one edge per unordered pair. Invalid
//! mutations are prevented silently rather than signaled: the presentation
//! layer calls straight through on every gesture and relies on the model to
//! keep itself consistent.

use std::collections::{BTreeMap, BTreeSet};

use isomatch_common::{AdjacencyMap, Config};

/// A 2-D position on the editing canvas.
///
/// Positions only matter for construction constraints (minimum placement
/// distance); the solver never sees them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a point from its coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance_to(&self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A named node with its canvas position.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    /// Unique name within the topology.
    pub name: String,
    /// Canvas position.
    pub pos: Point,
}

/// Editable graph topology.
#[derive(Clone, Debug)]
pub struct GraphModel {
    config: Config,
    nodes: BTreeMap<String, Node>,
    edges: BTreeSet<(String, String)>,
    node_counter: u64,
    active: Option<String>,
}

impl Default for GraphModel {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl GraphModel {
    /// Create an empty topology with the given editing configuration.
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self {
            config,
            nodes: BTreeMap::new(),
            edges: BTreeSet::new(),
            node_counter: 0,
            active: None,
        }
    }

    /// Create a node at `pos`, generating the next spreadsheet-column name
    /// (A, B, …, Z, AA, AB, …) when `name` is `None`.
    ///
    /// Returns `None` without creating anything when the position is within
    /// `min_node_distance` of an existing node, or when the name is already
    /// taken. The name counter advances only on success — but it advances for
    /// explicitly named nodes too, so generated names are never reused within
    /// a session even after interleaved explicit creations.
    pub fn create_node(&mut self, pos: Point, name: Option<String>) -> Option<&Node> {
        if !self.is_position_free(pos) {
            tracing::debug!(
                "placement at ({}, {}) rejected: too close to an existing node",
                pos.x,
                pos.y
            );
            return None;
        }

        let name = name.unwrap_or_else(|| Self::column_name(self.node_counter));
        if self.nodes.contains_key(&name) {
            tracing::debug!("node '{name}' rejected: name already in use");
            return None;
        }

        self.node_counter += 1;
        Some(self.insert(name, pos))
    }

    /// Re-create a node from a saved project, bypassing the distance check.
    ///
    /// Saved layouts may legally contain nodes closer than the editing
    /// threshold (nodes are draggable after placement). The counter still
    /// advances; the loader overwrites it with the saved value afterwards.
    pub(crate) fn restore_node(&mut self, name: String, pos: Point) -> bool {
        if self.nodes.contains_key(&name) {
            return false;
        }
        self.node_counter += 1;
        self.insert(name, pos);
        true
    }

    fn insert(&mut self, name: String, pos: Point) -> &Node {
        tracing::debug!("created node '{name}' at ({}, {})", pos.x, pos.y);
        self.nodes
            .entry(name.clone())
            .or_insert(Node { name, pos })
    }

    /// Insert an undirected edge between `u` and `v`.
    ///
    /// Self-loops, unknown endpoints, and already-connected pairs are silent
    /// no-ops.
    pub fn create_edge(&mut self, u: &str, v: &str) {
        if u == v || !self.nodes.contains_key(u) || !self.nodes.contains_key(v) {
            return;
        }
        if self.edges.insert(Self::edge_key(u, v)) {
            tracing::debug!("created edge {u}-{v}");
        }
    }

    /// Remove the edge between `u` and `v`, if present.
    pub fn delete_edge(&mut self, u: &str, v: &str) {
        if self.edges.remove(&Self::edge_key(u, v)) {
            tracing::debug!("deleted edge {u}-{v}");
        }
    }

    /// Remove a node: every incident edge first, then the node itself.
    ///
    /// Clears the chain selection when it pointed at the deleted node.
    pub fn delete_node(&mut self, name: &str) {
        if !self.nodes.contains_key(name) {
            return;
        }
        self.edges.retain(|(a, b)| a != name && b != name);
        self.nodes.remove(name);
        if self.active.as_deref() == Some(name) {
            self.active = None;
        }
        tracing::debug!("deleted node '{name}'");
    }

    /// Move an existing node. No distance check applies to dragging.
    pub fn move_node(&mut self, name: &str, pos: Point) {
        if let Some(node) = self.nodes.get_mut(name) {
            node.pos = pos;
        }
    }

    /// Chain gesture: make `name` the active selection, creating an edge from
    /// the previously active node when there is one and it differs.
    ///
    /// Returns the pair the gesture linked, if any. Unknown names are
    /// ignored and leave the selection untouched.
    pub fn select(&mut self, name: &str) -> Option<(String, String)> {
        if !self.nodes.contains_key(name) {
            return None;
        }
        let previous = self.active.replace(name.to_string());
        match previous {
            Some(prev) if prev != name => {
                self.create_edge(&prev, name);
                Some((prev, name.to_string()))
            }
            _ => None,
        }
    }

    /// Clear the chain selection without creating an edge.
    pub fn reset_selection(&mut self) {
        self.active = None;
    }

    /// The currently active chain node, if any.
    #[must_use]
    pub fn active_node(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Remove all nodes and edges and reset the name counter.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.active = None;
        self.node_counter = 0;
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Look up a node by name.
    #[must_use]
    pub fn node(&self, name: &str) -> Option<&Node> {
        self.nodes.get(name)
    }

    /// Iterate nodes in name order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Iterate edges as name pairs.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.edges.iter().map(|(u, v)| (u.as_str(), v.as_str()))
    }

    /// Whether an edge exists between `u` and `v` (in either direction).
    #[must_use]
    pub fn has_edge(&self, u: &str, v: &str) -> bool {
        self.edges.contains(&Self::edge_key(u, v))
    }

    /// Current value of the name counter.
    #[must_use]
    pub const fn node_counter(&self) -> u64 {
        self.node_counter
    }

    pub(crate) const fn set_node_counter(&mut self, value: u64) {
        self.node_counter = value;
    }

    /// Snapshot the topology as a name-keyed neighbor relation.
    ///
    /// Every edge is visited exactly once, inserting each endpoint into the
    /// other's set; isolated nodes appear with an empty set.
    #[must_use]
    pub fn adjacency(&self) -> AdjacencyMap {
        let mut adj: AdjacencyMap = self
            .nodes
            .keys()
            .map(|name| (name.clone(), BTreeSet::new()))
            .collect();
        for (u, v) in &self.edges {
            adj.entry(u.clone()).or_default().insert(v.clone());
            adj.entry(v.clone()).or_default().insert(u.clone());
        }
        adj
    }

    fn is_position_free(&self, pos: Point) -> bool {
        self.nodes
            .values()
            .all(|node| node.pos.distance_to(pos) >= self.config.min_node_distance)
    }

    /// Spreadsheet-column name for a counter value: A…Z, AA, AB, …
    fn column_name(counter: u64) -> String {
        let mut n = counter;
        let mut name = String::new();
        loop {
            name.insert(0, char::from(b'A' + (n % 26) as u8));
            match (n / 26).checked_sub(1) {
                Some(next) => n = next,
                None => break,
            }
        }
        name
    }

    fn edge_key(u: &str, v: &str) -> (String, String) {
        if u <= v {
            (u.to_string(), v.to_string())
        } else {
            (v.to_string(), u.to_string())
        }
    }
}
