// File: crates/scatter-cli/src/main.rs
// Summary: `scatter` CLI: loads the cyclist dataset and writes the chart as SVG, HTML and/or PNG.

use std::process::ExitCode;

use clap::Parser;
use scatter_cli::{run, Cli};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
