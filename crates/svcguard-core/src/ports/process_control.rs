//! Process liveness and signalling port.
//!
//! Implemented over POSIX signals in `svcguard-runtime`; tests substitute a
//! mock to pin the exact probe/signal sequence.

use thiserror::Error;

use crate::domain::Pid;

/// A signal could not be delivered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignalError {
    /// The target does not exist (already exited, or the id was never valid).
    #[error("no such process {0}")]
    NoSuchProcess(Pid),

    /// The target exists but belongs to someone we may not signal.
    #[error("permission denied signalling PID {0}")]
    PermissionDenied(Pid),

    #[error("failed to signal PID {pid}: {reason}")]
    Other { pid: Pid, reason: String },

    #[error("process signals are not supported on this platform")]
    Unsupported,
}

/// Liveness probing and termination signals for arbitrary process ids.
pub trait ProcessControlPort: Send + Sync {
    /// Whether `pid` currently exists.
    ///
    /// Must not affect the target. A process we lack permission to signal
    /// still counts as alive: it occupies the slot.
    fn is_alive(&self, pid: Pid) -> bool;

    /// Ask `pid` to exit (SIGTERM).
    fn terminate(&self, pid: Pid) -> Result<(), SignalError>;

    /// End `pid` unconditionally (SIGKILL).
    fn kill(&self, pid: Pid) -> Result<(), SignalError>;
}
