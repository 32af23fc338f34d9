//! Trellis Core - Foundation types for declarative network reconciliation
//!
//! This crate provides the core abstractions used throughout Trellis: the
//! desired-state descriptor, its deterministic flag rendering, and the
//! shared error taxonomy.

#![warn(missing_docs, clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod spec;
pub mod types;

pub use error::{Error, Result};
pub use spec::NetworkSpec;
pub use types::{Driver, Ensure, LabelValue, NetworkName, ReconcileOutcome};
