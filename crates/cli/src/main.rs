//! dupscan CLI
//!
//! Scans a designated column across multiple CSV files in parallel and
//! fails the moment any value is seen twice.

use anyhow::Result;
use clap::Parser;
use dupscan_core::{process_sources, CancelToken};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "dupscan")]
#[command(version, about = "Cross-file duplicate detection for a CSV column", long_about = None)]
struct Cli {
    /// CSV files to scan (plain or gzip-compressed `.gz`)
    #[arg(required = true, value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Column whose values must be unique across every file combined
    #[arg(short, long, default_value = "code")]
    field: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let names: Vec<String> = cli.files.iter().map(|p| p.display().to_string()).collect();

    let summary = process_sources(CancelToken::new(), cli.files, &cli.field)?;

    info!(
        "no duplicate `{}` values ({} distinct) in: {}",
        cli.field,
        summary.unique_values,
        names.join(", ")
    );
    Ok(())
}
