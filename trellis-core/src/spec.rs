//! Desired-state descriptor for a container network
//!
//! A [`NetworkSpec`] is constructed once per reconciliation, is immutable
//! for the run, and is never persisted. Live state belongs entirely to the
//! engine.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::types::{Driver, Ensure, LabelValue, NetworkName};

/// Declarative description of a container network
///
/// This record is the declared configuration surface of the system: it is
/// validated and rendered into a single engine command line, nothing more.
///
/// `gateway`, `ip_range`, and `subnet` are validated only by the engine.
/// No cross-field validation (e.g. gateway inside subnet) happens at this
/// layer; the engine owns address semantics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NetworkSpec {
    /// Network name, unique within the target system
    pub name: NetworkName,

    /// Desired state, default present
    #[serde(default)]
    pub ensure: Ensure,

    /// Network driver, default bridge
    #[serde(default)]
    pub driver: Driver,

    /// Disable the engine's embedded DNS for this network
    #[serde(default)]
    pub disable_dns: bool,

    /// Restrict external access to the network
    #[serde(default)]
    pub internal: bool,

    /// Enable IPv6 networking
    #[serde(default)]
    pub ipv6: bool,

    /// Opaque driver options, passed through in input order
    #[serde(default)]
    pub opts: Vec<String>,

    /// Gateway for the subnet
    #[serde(default)]
    pub gateway: Option<String>,

    /// IP range to allocate container addresses from
    #[serde(default)]
    pub ip_range: Option<String>,

    /// Subnet in CIDR notation
    #[serde(default)]
    pub subnet: Option<String>,

    /// Labels; a list value fans out to one flag occurrence per element
    #[serde(default)]
    pub labels: BTreeMap<String, LabelValue>,

    /// Non-privileged execution principal for rootless operation
    #[serde(default)]
    pub user: Option<String>,
}

impl NetworkSpec {
    /// Create a minimal spec with defaults for everything but the name
    #[must_use]
    pub fn new(name: NetworkName) -> Self {
        Self {
            name,
            ensure: Ensure::default(),
            driver: Driver::default(),
            disable_dns: false,
            internal: false,
            ipv6: false,
            opts: Vec::new(),
            gateway: None,
            ip_range: None,
            subnet: None,
            labels: BTreeMap::new(),
            user: None,
        }
    }

    /// Render the create-command argument tokens
    ///
    /// The token sequence is deterministic: identical specs always render
    /// the identical sequence, in the same order. Absent optional fields
    /// emit no tokens at all. Tokens are discrete argv entries; no shell
    /// quoting is involved anywhere.
    ///
    /// Scalar labels render as `--label key=value`. List labels fan out to
    /// `--<key> <element>` per element, the flag name switching from the
    /// literal `--label` to the key itself. That switch is inherited
    /// behavior kept for command-line compatibility (see DESIGN.md).
    #[must_use]
    pub fn create_args(&self) -> Vec<String> {
        let mut args = Vec::new();

        args.push("--driver".to_string());
        args.push(self.driver.as_str().to_string());

        if self.disable_dns {
            args.push("--disable-dns".to_string());
        }

        if let Some(ref gateway) = self.gateway {
            args.push("--gateway".to_string());
            args.push(gateway.clone());
        }

        if self.internal {
            args.push("--internal".to_string());
        }

        if let Some(ref ip_range) = self.ip_range {
            args.push("--ip-range".to_string());
            args.push(ip_range.clone());
        }

        if self.ipv6 {
            args.push("--ipv6".to_string());
        }

        if let Some(ref subnet) = self.subnet {
            args.push("--subnet".to_string());
            args.push(subnet.clone());
        }

        for opt in &self.opts {
            args.push("--opt".to_string());
            args.push(opt.clone());
        }

        // BTreeMap iteration is key-ordered, so label output is stable
        for (key, value) in &self.labels {
            match value {
                LabelValue::Single(v) => {
                    args.push("--label".to_string());
                    args.push(format!("{key}={v}"));
                }
                LabelValue::Many(values) => {
                    for v in values {
                        args.push(format!("--{key}"));
                        args.push(v.clone());
                    }
                }
            }
        }

        args.push(self.name.as_str().to_string());

        args
    }
}
