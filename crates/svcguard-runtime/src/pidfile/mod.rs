//! PID file management for tracking supervised services.
//!
//! Provides atomic I/O, the named record store, and the default hooks the
//! lifecycle runner uses for a service's own record.
//!
//! # Safety guarantees
//! - Atomic writes via temp file + rename
//! - Corrupt records are discarded on read, never trusted
//! - Removal is idempotent

mod hooks;
mod io;
mod store;

pub use hooks::FilePidRecordHooks;
pub use io::{PidFileContent, delete_pid_file, read_pid_file, write_pid_file};
pub use store::PidFileStore;
