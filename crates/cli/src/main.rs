use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use idegen_core::process_graph;

mod graph_file;
mod host;

use graph_file::GraphFile;
use host::FsHost;

/// Generate IDE build information from an evaluated target graph
#[derive(Parser)]
#[command(name = "idegen")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process a target graph and emit per-target info files
    Analyze {
        /// Path to the JSON target-graph description
        graph: PathBuf,

        /// Output directory for derived files
        #[arg(short, long, default_value = "ide-out")]
        out: PathBuf,

        /// List every emitted record
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    // Initialize tracing based on RUST_LOG env var
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Analyze {
            graph,
            out,
            verbose,
        } => analyze_command(&graph, &out, verbose),
    }
}

fn analyze_command(graph_path: &Path, out_dir: &Path, verbose: bool) -> Result<()> {
    let text = fs::read_to_string(graph_path)
        .with_context(|| format!("reading {}", graph_path.display()))?;
    let graph = GraphFile::parse(&text)?.into_graph()?;
    info!("loaded {} targets from {}", graph.len(), graph_path.display());

    let mut host = FsHost::new(out_dir);
    let result = process_graph(&graph, &mut host).context("processing target graph")?;

    println!(
        "Processed {} targets, emitted {} records into {}",
        result.summaries.len(),
        result.records.len(),
        out_dir.display()
    );
    for (name, artifacts) in host.groups() {
        println!("  {name}: {} artifacts", artifacts.len());
    }

    if verbose {
        for (label, record) in &result.records {
            println!("{label} ({:?})", record.kind);
            for dep in &record.dependencies {
                println!("    dep {dep}");
            }
        }
    }

    Ok(())
}
