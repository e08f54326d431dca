//! Common types shared across the isomatch workspace.
//!
//! This crate provides the solver input/output contract (adjacency maps,
//! matrix snapshots, match results), editing configuration, and the common
//! test-case catalog used by the solver's integration tests.

mod config;
mod matches;
mod test_cases;

pub use crate::config::*;
pub use crate::matches::*;
pub use crate::test_cases::*;
