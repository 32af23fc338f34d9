//! Apply command implementation

use anyhow::{Context, Result};
use std::path::Path;
use trellis_core::NetworkSpec;
use trellis_engine::{PodmanCli, Reconciler, SystemResolver};

pub async fn execute(engine: PodmanCli, spec_path: &Path) -> Result<()> {
    tracing::info!(spec = %spec_path.display(), "Applying network spec");

    let raw = tokio::fs::read_to_string(spec_path)
        .await
        .with_context(|| format!("Failed to read spec file '{}'", spec_path.display()))?;

    // A bad ensure value fails here, before any engine command
    let spec: NetworkSpec =
        serde_json::from_str(&raw).context("Invalid network spec")?;

    let reconciler = Reconciler::new(engine, SystemResolver::new());
    let outcome = reconciler.reconcile(&spec).await?;

    println!("✅ Network '{}': {}", spec.name, outcome);

    Ok(())
}
