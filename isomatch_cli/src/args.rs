use std::path::PathBuf;

use clap::Parser;

/// Isomatch - match a drawn graph against a symmetric weight table
#[derive(Parser, Debug)]
#[command(name = "isomatch")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the project file (JSON)
    pub project: PathBuf,

    /// Emit results as JSON instead of text
    #[arg(long, default_value_t = false)]
    pub json: bool,
}
