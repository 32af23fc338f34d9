//! Core type definitions with strong typing and validation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// Network identifier with validation
///
/// Acts as the primary key within the target system; the engine's own
/// namespace table is the source of truth for what exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(try_from = "String", into = "String")]
pub struct NetworkName(String);

impl NetworkName {
    /// Maximum length for network names
    pub const MAX_LENGTH: usize = 128;

    /// Create a new `NetworkName` with validation
    ///
    /// # Errors
    /// Returns error if the name is invalid (empty, too long, or contains
    /// invalid characters)
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        Self::validate(&name)?;
        Ok(Self(name))
    }

    /// Validate a network name
    fn validate(name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(Error::InvalidSpec {
                message: "Network name cannot be empty".to_string(),
            });
        }

        if name.len() > Self::MAX_LENGTH {
            return Err(Error::InvalidSpec {
                message: format!("Network name too long (max {} chars)", Self::MAX_LENGTH),
            });
        }

        if !name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_' || c == '.')
        {
            return Err(Error::InvalidSpec {
                message: "Network name can only contain alphanumeric, dash, underscore, and dot"
                    .to_string(),
            });
        }

        Ok(())
    }

    /// Get the network name as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NetworkName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NetworkName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for NetworkName {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::new(s)
    }
}

impl From<NetworkName> for String {
    fn from(name: NetworkName) -> Self {
        name.0
    }
}

/// Desired state of a network
///
/// Parsed from the closed string set `{"present", "absent"}`. Any other
/// value is a fatal [`Error::InvalidSpec`], never a silently-ignored
/// default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Ensure {
    /// The network must exist
    #[default]
    Present,
    /// The network must not exist
    Absent,
}

impl Ensure {
    /// Canonical string form
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::Absent => "absent",
        }
    }
}

impl fmt::Display for Ensure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Ensure {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "present" => Ok(Self::Present),
            "absent" => Ok(Self::Absent),
            other => Err(Error::InvalidSpec {
                message: format!("ensure must be 'present' or 'absent', got '{other}'"),
            }),
        }
    }
}

impl TryFrom<String> for Ensure {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Ensure> for String {
    fn from(e: Ensure) -> Self {
        e.as_str().to_string()
    }
}

/// Network driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Driver {
    /// Standard bridge network (default)
    #[default]
    Bridge,
    /// Macvlan network attached to a host interface
    Macvlan,
}

impl Driver {
    /// String form expected by the engine
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bridge => "bridge",
            Self::Macvlan => "macvlan",
        }
    }
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Driver {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "bridge" => Ok(Self::Bridge),
            "macvlan" => Ok(Self::Macvlan),
            other => Err(Error::InvalidSpec {
                message: format!("driver must be 'bridge' or 'macvlan', got '{other}'"),
            }),
        }
    }
}

impl TryFrom<String> for Driver {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Driver> for String {
    fn from(d: Driver) -> Self {
        d.as_str().to_string()
    }
}

/// Label value: a single string or a fan-out over several strings
///
/// A fan-out value renders one flag occurrence per element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LabelValue {
    /// Single `key=value` label
    Single(String),
    /// Repeated flag, one occurrence per element
    Many(Vec<String>),
}

impl From<&str> for LabelValue {
    fn from(s: &str) -> Self {
        Self::Single(s.to_string())
    }
}

impl From<Vec<String>> for LabelValue {
    fn from(v: Vec<String>) -> Self {
        Self::Many(v)
    }
}

/// Terminal outcome of a reconciliation that did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// A command ran and succeeded
    Applied,
    /// Live state already matched the spec; no command ran
    Skipped,
}

impl fmt::Display for ReconcileOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Applied => write!(f, "applied"),
            Self::Skipped => write!(f, "skipped"),
        }
    }
}
