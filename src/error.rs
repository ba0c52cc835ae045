//! Error types for registry probe runs.
//!
//! This module defines [`ProbeError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Only build and configuration failures abort a run
//! - Per-registry problems (missing credentials, failed installs, timeouts)
//!   are folded into a [`crate::runner::Outcome`] instead of an error
//! - Use `anyhow::Error` (via `ProbeError::Other`) for unexpected errors

use thiserror::Error;

/// Core error type for probe operations.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The build step exited non-zero.
    #[error("Cargo failed to build: {stderr}")]
    BuildFailed { stderr: String },

    /// `UV_TEST_TIMEOUT` (or another timeout source) was not a number of seconds.
    #[error("Invalid timeout '{value}': expected a whole number of seconds")]
    InvalidTimeout { value: String },

    /// The external program could not be found.
    #[error("'{program}' command not found")]
    ToolNotFound { program: String },

    /// Spawning or waiting on a command failed.
    #[error("Command '{command}' failed: {message}")]
    CommandFailed { command: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for probe operations.
pub type Result<T> = std::result::Result<T, ProbeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_failed_displays_stderr() {
        let err = ProbeError::BuildFailed {
            stderr: "error[E0425]: cannot find value".into(),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("Cargo failed to build"));
        assert!(msg.contains("E0425"));
    }

    #[test]
    fn invalid_timeout_displays_value() {
        let err = ProbeError::InvalidTimeout {
            value: "soon".into(),
        };
        assert!(err.to_string().contains("'soon'"));
    }

    #[test]
    fn tool_not_found_displays_program() {
        let err = ProbeError::ToolNotFound {
            program: "cargo".into(),
        };
        assert_eq!(err.to_string(), "'cargo' command not found");
    }

    #[test]
    fn command_failed_displays_command_and_message() {
        let err = ProbeError::CommandFailed {
            command: "cargo build".into(),
            message: "permission denied".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("cargo build"));
        assert!(msg.contains("permission denied"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: ProbeError = io_err.into();
        assert!(matches!(err, ProbeError::Io(_)));
    }
}
