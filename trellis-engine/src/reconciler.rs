//! Network reconciliation state machine
//!
//! Each invocation recomputes from scratch; nothing persists between runs.
//! The machine is:
//!
//! ```text
//! Start -> Validating -> Failed
//!          Validating -> CheckingExistence -> Skipped
//!                        CheckingExistence -> Executing -> Applied
//!                                             Executing -> Failed
//! ```
//!
//! The check-then-act sequence is not atomic. Another actor can change the
//! engine's network table between the existence check and the mutating
//! command; two concurrent reconciliations of the same name can both pass
//! the check, and the second create then fails at the engine and surfaces
//! as an engine-command error. Accepted for the domain (infrequent,
//! operator-driven convergence).

use tracing::{debug, info};

use crate::backend::NetworkEngine;
use crate::context::ExecContext;
use crate::principal::PrincipalResolver;
use trellis_core::{Ensure, Error, NetworkSpec, ReconcileOutcome, Result};

/// Drives a spec to convergence against an injected engine
pub struct Reconciler<E, P> {
    engine: E,
    principals: P,
}

/// Per-invocation phase of the reconcile state machine
enum Phase {
    Validating,
    CheckingExistence(ExecContext),
    Executing(ExecContext),
}

impl<E, P> Reconciler<E, P>
where
    E: NetworkEngine,
    P: PrincipalResolver,
{
    /// Create a reconciler over an engine and a principal resolver
    pub const fn new(engine: E, principals: P) -> Self {
        Self { engine, principals }
    }

    /// Reconcile live state to the spec, executing at most one mutating
    /// command
    ///
    /// # Errors
    /// - [`Error::InvalidSpec`] / [`Error::PrincipalResolution`] before any
    ///   engine command is issued
    /// - [`Error::EngineCommand`] when the single mutating command exits
    ///   non-zero, carrying its diagnostics verbatim
    pub async fn reconcile(&self, spec: &NetworkSpec) -> Result<ReconcileOutcome> {
        let mut phase = Phase::Validating;

        loop {
            phase = match phase {
                Phase::Validating => {
                    debug!(network = %spec.name, ensure = %spec.ensure, "Validating spec");

                    // Bad ensure/driver/name values were already rejected at
                    // construction; what remains is context derivation, which
                    // fails fatally on an unknown principal
                    let ctx = ExecContext::for_spec(spec, &self.principals)?;

                    Phase::CheckingExistence(ctx)
                }

                Phase::CheckingExistence(ctx) => {
                    let exists = self.engine.exists(&spec.name, &ctx).await?;
                    debug!(network = %spec.name, exists, "Existence check");

                    let converged = match spec.ensure {
                        Ensure::Present => exists,
                        Ensure::Absent => !exists,
                    };

                    if converged {
                        info!(network = %spec.name, ensure = %spec.ensure, "Already converged, skipping");
                        return Ok(ReconcileOutcome::Skipped);
                    }

                    Phase::Executing(ctx)
                }

                Phase::Executing(ctx) => {
                    let output = match spec.ensure {
                        Ensure::Present => {
                            info!(network = %spec.name, driver = %spec.driver, "Creating network");
                            self.engine.create(spec, &ctx).await?
                        }
                        Ensure::Absent => {
                            info!(network = %spec.name, "Removing network");
                            self.engine.remove(&spec.name, &ctx).await?
                        }
                    };

                    if output.success() {
                        return Ok(ReconcileOutcome::Applied);
                    }

                    return Err(Error::EngineCommand {
                        command: output.command,
                        exit_code: output.exit_code,
                        stdout: output.stdout,
                        stderr: output.stderr,
                    });
                }
            };
        }
    }
}
