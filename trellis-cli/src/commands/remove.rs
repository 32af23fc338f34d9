//! Remove command implementation
//!
//! Convenience for an `ensure: absent` spec; goes through the reconciler
//! so the idempotency guard applies.

use anyhow::{Context, Result};
use trellis_core::{Ensure, NetworkName, NetworkSpec};
use trellis_engine::{PodmanCli, Reconciler, SystemResolver};

pub async fn execute(engine: PodmanCli, name: &str, user: Option<String>) -> Result<()> {
    tracing::info!(network = name, "Removing network");

    let name = NetworkName::new(name).context("Invalid network name")?;

    let mut spec = NetworkSpec::new(name);
    spec.ensure = Ensure::Absent;
    spec.user = user;

    let reconciler = Reconciler::new(engine, SystemResolver::new());
    let outcome = reconciler.reconcile(&spec).await?;

    println!("✅ Network '{}': {}", spec.name, outcome);

    Ok(())
}
