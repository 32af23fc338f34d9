//! CLI argument definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "trellis")]
#[command(about = "Declarative container network reconciler", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Engine binary override (default: podman from the system path)
    #[arg(long, global = true)]
    pub engine: Option<PathBuf>,

    /// Timeout for each engine invocation, in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Reconcile a network to its declared state
    Apply {
        /// Path to a JSON network spec
        #[arg(short, long)]
        spec: PathBuf,
    },

    /// Remove a network if it exists
    Remove {
        /// Network name
        name: String,

        /// Execute as this non-privileged account
        #[arg(long)]
        user: Option<String>,
    },

    /// Report whether a network exists
    Status {
        /// Network name
        name: String,

        /// Execute as this non-privileged account
        #[arg(long)]
        user: Option<String>,
    },
}
