//! Binary crate for the `tripsite` command-line host.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive booking form entry
//! - Human-friendly output of what the page would show

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
