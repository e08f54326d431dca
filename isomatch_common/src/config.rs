//! Configuration for the interactive graph editor model.
//!
//! The solver itself takes no knobs: it always enumerates every valid
//! assignment, in permutation order, with no deduplication. The only tunable
//! behavior in the system is on the editing side, where node placement is
//! rejected when it would land too close to an existing node.

/// Editing configuration.
///
/// - `min_node_distance`: placements closer than this (in scene units) to any
///   existing node are silently rejected by `create_node`. The restore path
///   used when loading a saved project ignores this threshold, since a saved
///   layout may legally contain nodes that were dragged close together.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Minimum allowed distance between two node centers at creation time.
    pub min_node_distance: f64,
}

impl Config {
    /// Create a configuration with the given placement threshold.
    #[must_use]
    pub const fn new(min_node_distance: f64) -> Self {
        Self { min_node_distance }
    }
}

impl Default for Config {
    /// Default configuration mirrors the historical editor behavior:
    /// a 50-unit minimum distance between nodes.
    fn default() -> Self {
        Self::new(50.0)
    }
}
