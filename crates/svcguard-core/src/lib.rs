//! Core domain types and port definitions for svcguard.
//!
//! This crate contains no OS-level code. Process signalling, PID file I/O and
//! the supervisor itself live in `svcguard-runtime`; this crate only defines
//! the vocabulary they share:
//!
//! - [`domain`]: service names, process ids, descriptors and outcomes
//! - [`paths`]: project root and runtime directory resolution
//! - [`ports`]: trait abstractions the runtime implements or consumes
//! - [`settings`]: termination timing knobs

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod paths;
pub mod ports;
pub mod settings;

// Re-export commonly used types for convenience
pub use domain::{
    ConflictOutcome, ConflictReport, FAILURE_STATUS, LifecycleReport, LifecycleStage, Pid,
    PidParseError, RecordState, RecordStatus, SUCCESS_STATUS, ServiceDescriptor, ServiceName,
    ServiceNameError, TerminationOutcome,
};
pub use ports::{
    DiagnosticSink, PidFileError, PidRecordHooks, ProcessControlPort, SignalError,
    SupervisedService, SupervisorError, TracingSink,
};
pub use settings::{SettingsError, SupervisorSettings, validate_settings};

// Re-export path utilities
pub use paths::{
    DEFAULT_PID_PREFIX, PathError, RUNTIME_DIR_RELATIVE, SupervisorPaths, ensure_directory,
    resolve_project_root,
};
