//! Trellis CLI
//!
//! Declares the existence or absence of container networks and converges
//! the live system with at most one engine command per invocation.

use clap::Parser;
use std::process;
use tracing::Level;

mod cli;
mod commands;

use cli::Cli;

#[tokio::main]
async fn main() {
    // Parse command-line arguments
    let cli = Cli::parse();

    // Setup logging based on verbosity
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    // Execute the command
    if let Err(e) = commands::dispatch(cli).await {
        eprintln!("❌ Error: {e:#}");
        process::exit(1);
    }
}
