//! CLI-specific error types and mappings.
//!
//! This module provides error types for the CLI adapter and mappings
//! from supervisor errors to exit codes and user-facing messages.

use svcguard_core::{PathError, SettingsError, SupervisorError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument parsing error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Process signalling error.
    #[error("Process error: {0}")]
    Process(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Arguments(_) => 2, // EX_USAGE
            CliError::Io(_) => 74,       // EX_IOERR
            CliError::Config(_) => 78,   // EX_CONFIG
            CliError::Process(_) => 71,  // EX_OSERR
        }
    }
}

impl From<SupervisorError> for CliError {
    fn from(err: SupervisorError) -> Self {
        match err {
            SupervisorError::Path(path_err) => CliError::Config(path_err.to_string()),
            SupervisorError::PidFile(file_err) => CliError::Io(file_err.to_string()),
            err @ SupervisorError::AlreadyRunning { .. } => CliError::Process(err.to_string()),
        }
    }
}

impl From<PathError> for CliError {
    fn from(err: PathError) -> Self {
        CliError::Config(err.to_string())
    }
}

impl From<SettingsError> for CliError {
    fn from(err: SettingsError) -> Self {
        CliError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn directory_failures_map_to_config_exit_code() {
        let err: CliError = SupervisorError::Path(PathError::CreateFailed {
            path: PathBuf::from("/srv/app/var/run"),
            reason: "permission denied".to_string(),
        })
        .into();

        assert_eq!(err.exit_code(), 78);
        assert!(err.to_string().contains("/srv/app/var/run"));
    }

    #[test]
    fn signal_failures_map_to_os_error_exit_code() {
        assert_eq!(CliError::Process("boom".to_string()).exit_code(), 71);
        assert_eq!(CliError::Arguments("bad".to_string()).exit_code(), 2);
    }
}
