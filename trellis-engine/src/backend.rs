//! Network engine trait for pluggable implementations

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::context::ExecContext;
use trellis_core::{NetworkName, NetworkSpec, Result};

/// Captured result of a mutating engine command
///
/// Streams are carried verbatim; diagnostics reach the operator without
/// interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOutput {
    /// Command line that was executed, for diagnostics
    pub command: String,
    /// Exit code reported by the engine
    pub exit_code: i32,
    /// Captured standard output
    pub stdout: String,
    /// Captured standard error
    pub stderr: String,
}

impl EngineOutput {
    /// Whether the command exited zero
    #[must_use]
    pub const fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Trait for container network engine backends
///
/// This allows for different implementations:
/// - [`PodmanCli`](crate::PodmanCli) - Production podman CLI
/// - [`MockEngine`] - Testing without a container engine
///
/// # Thread Safety
/// All implementations must be `Send + Sync` for use across async tasks.
#[async_trait]
pub trait NetworkEngine: Send + Sync {
    /// Read-only existence check by network name
    ///
    /// # Errors
    /// Returns error if the engine cannot be queried
    async fn exists(&self, name: &NetworkName, ctx: &ExecContext) -> Result<bool>;

    /// Create the network described by the spec
    ///
    /// # Errors
    /// Returns error if the command cannot be launched; a launched command
    /// that exits non-zero is reported through [`EngineOutput`]
    async fn create(&self, spec: &NetworkSpec, ctx: &ExecContext) -> Result<EngineOutput>;

    /// Remove the network by name
    ///
    /// # Errors
    /// Returns error if the command cannot be launched
    async fn remove(&self, name: &NetworkName, ctx: &ExecContext) -> Result<EngineOutput>;
}

/// Mock engine for testing (no container engine required)
///
/// Holds an in-memory network set whose state persists between calls, and
/// records every call for assertion.
#[derive(Clone)]
pub struct MockEngine {
    state: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    networks: HashSet<String>,
    calls: Vec<String>,
    fail_create: Option<(i32, String)>,
    fail_remove: Option<(i32, String)>,
}

impl MockEngine {
    /// Create a new mock engine with no networks
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState::default())),
        }
    }

    /// Seed an existing network
    pub async fn seed_network(&self, name: &str) {
        self.state.lock().await.networks.insert(name.to_string());
    }

    /// Script the next create call to fail with the given exit code and
    /// stderr
    pub async fn fail_create_with(&self, exit_code: i32, stderr: &str) {
        self.state.lock().await.fail_create = Some((exit_code, stderr.to_string()));
    }

    /// Script the next remove call to fail with the given exit code and
    /// stderr
    pub async fn fail_remove_with(&self, exit_code: i32, stderr: &str) {
        self.state.lock().await.fail_remove = Some((exit_code, stderr.to_string()));
    }

    /// Whether a network exists in the mock state
    pub async fn has_network(&self, name: &str) -> bool {
        self.state.lock().await.networks.contains(name)
    }

    /// Number of engine calls made (for testing)
    pub async fn call_count(&self) -> usize {
        self.state.lock().await.calls.len()
    }

    /// Recorded calls, in order (for testing)
    pub async fn calls(&self) -> Vec<String> {
        self.state.lock().await.calls.clone()
    }
}

impl Default for MockEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MockEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockEngine").finish_non_exhaustive()
    }
}

#[async_trait]
impl NetworkEngine for MockEngine {
    async fn exists(&self, name: &NetworkName, _ctx: &ExecContext) -> Result<bool> {
        let mut state = self.state.lock().await;
        state.calls.push(format!("exists {name}"));

        let found = state.networks.contains(name.as_str());
        tracing::debug!(network = %name, found, "Mock: existence check");

        Ok(found)
    }

    async fn create(&self, spec: &NetworkSpec, _ctx: &ExecContext) -> Result<EngineOutput> {
        let mut state = self.state.lock().await;
        state.calls.push(format!("create {}", spec.name));

        let command = format!("podman network create {}", spec.create_args().join(" "));

        if let Some((exit_code, stderr)) = state.fail_create.take() {
            tracing::debug!(network = %spec.name, exit_code, "Mock: scripted create failure");
            return Ok(EngineOutput {
                command,
                exit_code,
                stdout: String::new(),
                stderr,
            });
        }

        state.networks.insert(spec.name.as_str().to_string());
        tracing::debug!(network = %spec.name, "Mock: created network");

        Ok(EngineOutput {
            command,
            exit_code: 0,
            stdout: format!("{}\n", spec.name),
            stderr: String::new(),
        })
    }

    async fn remove(&self, name: &NetworkName, _ctx: &ExecContext) -> Result<EngineOutput> {
        let mut state = self.state.lock().await;
        state.calls.push(format!("rm {name}"));

        let command = format!("podman network rm {name}");

        if let Some((exit_code, stderr)) = state.fail_remove.take() {
            tracing::debug!(network = %name, exit_code, "Mock: scripted remove failure");
            return Ok(EngineOutput {
                command,
                exit_code,
                stdout: String::new(),
                stderr,
            });
        }

        state.networks.remove(name.as_str());
        tracing::debug!(network = %name, "Mock: removed network");

        Ok(EngineOutput {
            command,
            exit_code: 0,
            stdout: format!("{name}\n"),
            stderr: String::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> NetworkName {
        NetworkName::new(s).unwrap()
    }

    #[tokio::test]
    async fn test_mock_engine_lifecycle() {
        let engine = MockEngine::new();
        let ctx = ExecContext::System;
        let mnet = name("mnet");

        // Nothing exists yet
        assert!(!engine.exists(&mnet, &ctx).await.unwrap());
        assert_eq!(engine.call_count().await, 1);

        // Create persists between calls
        let spec = NetworkSpec::new(mnet.clone());
        let out = engine.create(&spec, &ctx).await.unwrap();
        assert!(out.success());
        assert!(engine.exists(&mnet, &ctx).await.unwrap());

        // Remove clears it again
        let out = engine.remove(&mnet, &ctx).await.unwrap();
        assert!(out.success());
        assert!(!engine.exists(&mnet, &ctx).await.unwrap());

        assert_eq!(
            engine.calls().await,
            vec!["exists mnet", "create mnet", "exists mnet", "rm mnet", "exists mnet"]
        );
    }

    #[tokio::test]
    async fn test_mock_engine_scripted_failure() {
        let engine = MockEngine::new();
        let ctx = ExecContext::System;

        engine.fail_create_with(125, "subnet already in use").await;

        let spec = NetworkSpec::new(name("mnet"));
        let out = engine.create(&spec, &ctx).await.unwrap();

        assert_eq!(out.exit_code, 125);
        assert_eq!(out.stderr, "subnet already in use");
        assert!(!engine.has_network("mnet").await);

        // Failure is one-shot; the next create succeeds
        let out = engine.create(&spec, &ctx).await.unwrap();
        assert!(out.success());
        assert!(engine.has_network("mnet").await);
    }

    #[tokio::test]
    async fn test_mock_engine_seeding() {
        let engine = MockEngine::new();
        engine.seed_network("prewired").await;

        assert!(engine
            .exists(&name("prewired"), &ExecContext::System)
            .await
            .unwrap());
    }
}
