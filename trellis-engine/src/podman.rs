//! Podman CLI engine backend
//!
//! Invokes the podman binary as an async subprocess. Each command runs with
//! a cleared environment and a search path restricted to the standard
//! system binary directories, plus whatever the execution context derives
//! from its principal. Installation of the engine binary itself is an
//! external precondition; this backend assumes it is present.

use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::backend::{EngineOutput, NetworkEngine};
use crate::context::ExecContext;
use trellis_core::{Error, NetworkName, NetworkSpec, Result};

/// Restricted search path for engine invocations
const SYSTEM_PATH: &str = "/sbin:/bin:/usr/sbin:/usr/bin";

/// Production engine backed by the podman CLI
#[derive(Debug, Clone)]
pub struct PodmanCli {
    /// Engine binary, resolved via the restricted path by default
    binary: PathBuf,

    /// Optional timeout at the process boundary
    ///
    /// External commands can hang; none is configured by default.
    timeout: Option<Duration>,
}

impl PodmanCli {
    /// Create a backend using the `podman` binary from the restricted path
    #[must_use]
    pub fn new() -> Self {
        Self {
            binary: PathBuf::from("podman"),
            timeout: None,
        }
    }

    /// Override the engine binary path
    #[must_use]
    pub fn with_binary(mut self, binary: impl Into<PathBuf>) -> Self {
        self.binary = binary.into();
        self
    }

    /// Set a timeout for each engine invocation
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Run one engine command and capture its output
    async fn run(&self, args: &[String], ctx: &ExecContext) -> Result<EngineOutput> {
        let command_line = format!("{} {}", self.binary.display(), args.join(" "));
        debug!(command = %command_line, "Invoking engine");

        let mut cmd = Command::new(&self.binary);
        cmd.args(args)
            .env_clear()
            .env("PATH", SYSTEM_PATH)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        for (key, value) in ctx.env() {
            cmd.env(key, value);
        }

        if let Some(dir) = ctx.working_dir() {
            cmd.current_dir(dir);
        }

        #[cfg(unix)]
        if let Some(uid) = ctx.uid() {
            cmd.uid(uid);
        }

        let output = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, cmd.output())
                .await
                .map_err(|_| Error::EngineTimeout {
                    command: command_line.clone(),
                    seconds: limit.as_secs(),
                })??,
            None => cmd.output().await?,
        };

        // Exit-by-signal has no code; report it as -1
        let exit_code = output.status.code().unwrap_or(-1);
        debug!(command = %command_line, exit_code, "Engine command finished");

        Ok(EngineOutput {
            command: command_line,
            exit_code,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

impl Default for PodmanCli {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NetworkEngine for PodmanCli {
    async fn exists(&self, name: &NetworkName, ctx: &ExecContext) -> Result<bool> {
        let args = vec![
            "network".to_string(),
            "exists".to_string(),
            name.as_str().to_string(),
        ];

        let out = self.run(&args, ctx).await?;

        // podman reserves exit 1 for "no such network"; anything else
        // (usage errors, daemon failures) must not read as "absent"
        match out.exit_code {
            0 => Ok(true),
            1 => Ok(false),
            code => Err(Error::EngineCommand {
                command: out.command,
                exit_code: code,
                stdout: out.stdout,
                stderr: out.stderr,
            }),
        }
    }

    async fn create(&self, spec: &NetworkSpec, ctx: &ExecContext) -> Result<EngineOutput> {
        let mut args = vec!["network".to_string(), "create".to_string()];
        args.extend(spec.create_args());

        self.run(&args, ctx).await
    }

    async fn remove(&self, name: &NetworkName, ctx: &ExecContext) -> Result<EngineOutput> {
        let args = vec![
            "network".to_string(),
            "rm".to_string(),
            name.as_str().to_string(),
        ];

        self.run(&args, ctx).await
    }
}
