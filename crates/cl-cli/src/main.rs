//! CostLens — natural-language AWS cost queries from the terminal.
//!
//! Wires the query interpreter, the Cost Explorer fetch, and the persisted
//! configuration into a single binary. All interactive prompting lives here;
//! the core crates only ever receive plain values.

mod app;
mod cli;
mod config;
mod prompt;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Diagnostics on stderr; stdout carries only the report.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();

    if let Err(e) = app::run(cli).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
