//! Normalized result of a supervised run.

use std::fmt;

/// Status returned when the supervised routine succeeds without a code.
pub const SUCCESS_STATUS: i32 = 0;

/// Status returned for every supervisor-level failure.
pub const FAILURE_STATUS: i32 = 1;

/// Stage of `run_with_lifecycle` that can abort before the service starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleStage {
    ResolveConflicts,
    WritePidRecord,
}

impl fmt::Display for LifecycleStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ResolveConflicts => f.write_str("resolve conflicts"),
            Self::WritePidRecord => f.write_str("write PID record"),
        }
    }
}

/// Exit status plus the diagnostics the caller should show the user.
///
/// A non-zero `status` is always accompanied by at least one diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifecycleReport {
    pub status: i32,
    pub diagnostics: Vec<String>,
}

impl LifecycleReport {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status == SUCCESS_STATUS
    }
}
