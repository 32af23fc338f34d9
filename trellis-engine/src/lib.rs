//! Network engine backends and the reconciliation state machine
//!
//! This crate provides a trait-based abstraction over the container
//! engine's network commands, production and mock implementations, and the
//! reconciler that drives a spec to convergence with at most one mutating
//! command.

#![warn(missing_docs, clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod backend;
pub mod context;
pub mod podman;
pub mod principal;
pub mod reconciler;

pub use backend::{EngineOutput, MockEngine, NetworkEngine};
pub use context::ExecContext;
pub use podman::PodmanCli;
pub use principal::{MockResolver, Principal, PrincipalResolver, SystemResolver};
pub use reconciler::Reconciler;

// Re-export commonly used types
pub use trellis_core::{NetworkSpec, ReconcileOutcome};
