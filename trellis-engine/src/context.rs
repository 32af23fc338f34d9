//! Execution context for engine commands
//!
//! Commands run either in the default system context or scoped to a
//! resolved principal. The two cases are modeled as enum variants so the
//! command-building code never branches on a raw username.

use std::path::Path;

use crate::principal::{Principal, PrincipalResolver};
use trellis_core::{NetworkSpec, Result};

/// Execution context for a single reconciliation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecContext {
    /// Default context: no environment overrides, invoking identity
    System,
    /// Rootless context scoped to a resolved principal
    Principal(Principal),
}

impl ExecContext {
    /// Derive the context for a spec, resolving the principal if one is
    /// declared
    ///
    /// An empty or missing `user` field means the default system context.
    ///
    /// # Errors
    /// Returns [`trellis_core::Error::PrincipalResolution`] if a declared
    /// principal does not resolve. This happens before any engine command.
    pub fn for_spec(spec: &NetworkSpec, resolver: &dyn PrincipalResolver) -> Result<Self> {
        match spec.user.as_deref() {
            Some(user) if !user.is_empty() => Ok(Self::Principal(resolver.resolve(user)?)),
            _ => Ok(Self::System),
        }
    }

    /// Environment entries for the child process
    ///
    /// The principal-scoped context marks the home directory, the runtime
    /// directory for the resolved uid, and the session bus address the
    /// login manager provides there.
    #[must_use]
    pub fn env(&self) -> Vec<(String, String)> {
        match self {
            Self::System => Vec::new(),
            Self::Principal(p) => vec![
                ("HOME".to_string(), p.home.display().to_string()),
                ("XDG_RUNTIME_DIR".to_string(), format!("/run/user/{}", p.uid)),
                (
                    "DBUS_SESSION_BUS_ADDRESS".to_string(),
                    format!("unix:path=/run/user/{}/bus", p.uid),
                ),
            ],
        }
    }

    /// Working directory for the child process, if overridden
    #[must_use]
    pub fn working_dir(&self) -> Option<&Path> {
        match self {
            Self::System => None,
            Self::Principal(p) => Some(&p.home),
        }
    }

    /// Uid to execute under, if not the invoking identity
    #[must_use]
    pub const fn uid(&self) -> Option<u32> {
        match self {
            Self::System => None,
            Self::Principal(p) => Some(p.uid),
        }
    }
}
