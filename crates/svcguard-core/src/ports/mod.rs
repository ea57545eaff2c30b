//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the supervisor expects from the OS and
//! from the services it runs. They contain no implementation details.
//!
//! # Design Rules
//!
//! - No `nix`/`libc` types in any signature
//! - Optional capabilities are explicit traits installed once, never probed per call
//! - Intent-based methods (`terminate`, `kill`), not raw signal numbers

pub mod diagnostic_sink;
pub mod pid_record_hooks;
pub mod process_control;
pub mod supervised_service;

use std::path::PathBuf;

use thiserror::Error;

pub use diagnostic_sink::{DiagnosticSink, TracingSink};
pub use pid_record_hooks::PidRecordHooks;
pub use process_control::{ProcessControlPort, SignalError};
pub use supervised_service::SupervisedService;

use crate::domain::{Pid, ServiceName};
use crate::paths::PathError;

/// Failures reading or changing a PID record on disk.
#[derive(Debug, Error)]
pub enum PidFileError {
    #[error("Failed to read PID record {path}: {reason}")]
    Read { path: PathBuf, reason: String },

    #[error("Failed to write PID record {path}: {reason}")]
    Write { path: PathBuf, reason: String },

    #[error("Failed to remove PID record {path}: {reason}")]
    Remove { path: PathBuf, reason: String },

    #[error("Failed to list PID records in {path}: {reason}")]
    List { path: PathBuf, reason: String },
}

/// Errors that stop the supervisor before the service can start.
///
/// Stale records and termination timeouts are recovered locally and never
/// show up here.
#[derive(Debug, Error)]
pub enum SupervisorError {
    /// The runtime directory is missing and could not be created.
    #[error(transparent)]
    Path(#[from] PathError),

    /// A PID record could not be read or changed.
    #[error(transparent)]
    PidFile(#[from] PidFileError),

    /// Another live process already holds the service's record.
    #[error("{service} is already running as PID {pid}")]
    AlreadyRunning { service: ServiceName, pid: Pid },
}
