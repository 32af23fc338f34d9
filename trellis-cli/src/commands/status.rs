//! Status command implementation

use anyhow::{Context, Result};
use trellis_core::NetworkName;
use trellis_engine::{ExecContext, NetworkEngine, PodmanCli, PrincipalResolver, SystemResolver};

pub async fn execute(engine: PodmanCli, name: &str, user: Option<String>) -> Result<()> {
    let name = NetworkName::new(name).context("Invalid network name")?;

    let ctx = match user.as_deref() {
        Some(u) if !u.is_empty() => ExecContext::Principal(SystemResolver::new().resolve(u)?),
        _ => ExecContext::System,
    };

    let exists = engine.exists(&name, &ctx).await?;

    if exists {
        println!("present");
        Ok(())
    } else {
        println!("absent");
        // Scriptable exit status, mirroring the engine's own exists query
        std::process::exit(1);
    }
}
