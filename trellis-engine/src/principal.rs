//! Principal resolution for rootless execution
//!
//! A reconciliation may declare a non-privileged OS account to execute
//! under. The resolver is injected so tests run without real accounts.

use std::collections::HashMap;
use std::path::PathBuf;

use trellis_core::{Error, Result};

/// A resolved OS account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    /// Account name
    pub name: String,
    /// Numeric uid
    pub uid: u32,
    /// Home directory
    pub home: PathBuf,
}

/// Trait for principal lookup backends
///
/// Implementations:
/// - [`SystemResolver`] - the system account database
/// - [`MockResolver`] - in-memory accounts for testing
pub trait PrincipalResolver: Send + Sync {
    /// Resolve an account name to its attributes
    ///
    /// # Errors
    /// Returns [`Error::PrincipalResolution`] if the account is unknown or
    /// the database cannot be read. Resolution failure is fatal to the
    /// caller; there is no fallback to a default context.
    fn resolve(&self, username: &str) -> Result<Principal>;
}

/// Resolver backed by the system account database
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

impl SystemResolver {
    /// Create a new system resolver
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl PrincipalResolver for SystemResolver {
    fn resolve(&self, username: &str) -> Result<Principal> {
        let user = nix::unistd::User::from_name(username)
            .map_err(|e| Error::PrincipalResolution {
                user: username.to_string(),
                message: format!("account database lookup failed: {e}"),
            })?
            .ok_or_else(|| Error::PrincipalResolution {
                user: username.to_string(),
                message: "no such account".to_string(),
            })?;

        tracing::debug!(user = username, uid = user.uid.as_raw(), "Resolved principal");

        Ok(Principal {
            name: username.to_string(),
            uid: user.uid.as_raw(),
            home: user.dir,
        })
    }
}

/// In-memory resolver for testing
#[derive(Debug, Clone, Default)]
pub struct MockResolver {
    accounts: HashMap<String, Principal>,
}

impl MockResolver {
    /// Create an empty mock resolver (every lookup fails)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an account
    #[must_use]
    pub fn with_account(mut self, name: &str, uid: u32, home: &str) -> Self {
        self.accounts.insert(
            name.to_string(),
            Principal {
                name: name.to_string(),
                uid,
                home: PathBuf::from(home),
            },
        );
        self
    }
}

impl PrincipalResolver for MockResolver {
    fn resolve(&self, username: &str) -> Result<Principal> {
        self.accounts
            .get(username)
            .cloned()
            .ok_or_else(|| Error::PrincipalResolution {
                user: username.to_string(),
                message: "no such account".to_string(),
            })
    }
}
