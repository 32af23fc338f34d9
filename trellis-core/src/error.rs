//! Error types for Trellis

use thiserror::Error;

/// Trellis error types
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Spec failed validation before any command was attempted
    #[error("Invalid network spec: {message}")]
    InvalidSpec {
        /// Error message
        message: String,
    },

    /// Declared execution principal could not be resolved
    #[error("Principal resolution failed for '{user}': {message}")]
    PrincipalResolution {
        /// Principal name that failed to resolve
        user: String,
        /// Error message
        message: String,
    },

    /// Engine command exited non-zero
    ///
    /// Carries the captured streams verbatim for operator visibility.
    /// No interpretation or retry happens at this layer.
    #[error("Engine command `{command}` failed with exit code {exit_code}: {stderr}")]
    EngineCommand {
        /// Command line that was executed
        command: String,
        /// Exit code reported by the engine
        exit_code: i32,
        /// Captured standard output
        stdout: String,
        /// Captured standard error
        stderr: String,
    },

    /// Engine command exceeded the configured timeout
    #[error("Engine command `{command}` timed out after {seconds}s")]
    EngineTimeout {
        /// Command line that was executed
        command: String,
        /// Configured timeout in seconds
        seconds: u64,
    },

    /// System error from nix
    #[error("System error: {0}")]
    System(#[from] nix::Error),
}

/// Result type alias for Trellis operations
pub type Result<T> = std::result::Result<T, Error>;
