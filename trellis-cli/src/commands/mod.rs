use crate::cli::{Cli, Commands};
use anyhow::Result;
use std::time::Duration;
use trellis_engine::PodmanCli;

pub mod apply;
pub mod remove;
pub mod status;

/// Build the engine backend from the global CLI options
fn engine_from(cli: &Cli) -> PodmanCli {
    let mut engine = PodmanCli::new();

    if let Some(ref binary) = cli.engine {
        engine = engine.with_binary(binary);
    }

    if let Some(secs) = cli.timeout {
        engine = engine.with_timeout(Duration::from_secs(secs));
    }

    engine
}

/// Dispatch command to appropriate handler
pub async fn dispatch(cli: Cli) -> Result<()> {
    let engine = engine_from(&cli);

    match cli.command {
        Commands::Apply { spec } => apply::execute(engine, &spec).await,

        Commands::Remove { name, user } => remove::execute(engine, &name, user).await,

        Commands::Status { name, user } => status::execute(engine, &name, user).await,
    }
}
