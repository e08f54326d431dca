//! Isomatch CLI
//!
//! Entry point for the isomatch command-line tool. Loads a saved project
//! (graph topology plus weight table) and enumerates every assignment of
//! graph vertices to table indices under which the edge structures coincide.

mod args;

use clap::Parser;
use tracing::info;

use isomatch_model::{GraphModel, ProjectFile, WeightMatrix};
use isomatch_solver::solve;

use args::Args;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    info!("Loading project: {}", args.project.display());
    let project = ProjectFile::load(&args.project)?;

    let mut graph = GraphModel::default();
    let mut matrix = WeightMatrix::new(0);
    project.restore(&mut graph, &mut matrix)?;

    if graph.node_count() == 0 {
        println!("The project contains no nodes; draw a graph first.");
        return Ok(());
    }

    let results = solve(&graph.adjacency(), &matrix.data())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No assignment found.");
        println!("Possible causes:");
        println!("  - the graph topology does not match the filled table cells");
        println!("  - the vertex count differs from the table size");
        println!("  - an edge or a table cell is missing");
        return Ok(());
    }

    println!("Found {} variant(s)", results.len());
    for (i, result) in results.iter().enumerate() {
        println!("\nVariant {}", i + 1);
        println!("{result}");
    }

    Ok(())
}
