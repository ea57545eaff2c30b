//! Path utilities for svcguard runtime directories and PID files.
//!
//! This module provides the canonical path resolution for all svcguard components:
//! - Project root (explicit argument or current directory)
//! - Runtime directory (`<project-root>/var/run`)
//! - PID file names (`<prefix>-<service>.pid`)
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O - adapters handle user prompts separately
//! - Environment lookups are left to the caller; nothing here reads env vars

mod ensure;
mod error;
mod platform;
mod runtime;

// Error type
pub use error::PathError;

// Directory operations
pub use ensure::ensure_directory;

// Project root resolution
pub use platform::resolve_project_root;

// Runtime directory and PID file naming
pub use runtime::{DEFAULT_PID_PREFIX, PID_FILE_EXTENSION, RUNTIME_DIR_RELATIVE, SupervisorPaths};
