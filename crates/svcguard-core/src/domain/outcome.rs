//! Results of evicting processes and clearing conflicts.

use serde::Serialize;

use super::{Pid, ServiceName};

/// How an eviction of a live process concluded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TerminationOutcome {
    /// The process exited within the grace window after SIGTERM.
    Graceful,
    /// The grace window elapsed and SIGKILL was delivered.
    Forced,
    /// A signal could not be delivered; the process may still be running.
    SignalFailed { reason: String },
}

impl TerminationOutcome {
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::SignalFailed { .. })
    }
}

/// What conflict resolution found for one service name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ConflictOutcome {
    /// No record existed.
    Absent,
    /// A record pointed at a dead process and was discarded.
    Stale { pid: Pid },
    /// A live process was terminated and its record discarded.
    Evicted {
        pid: Pid,
        outcome: TerminationOutcome,
    },
    /// The record names the calling process itself; left untouched.
    CurrentProcess { pid: Pid },
}

/// Per-service outcomes of one conflict resolution pass, in resolution order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConflictReport {
    pub entries: Vec<(ServiceName, ConflictOutcome)>,
}

impl ConflictReport {
    /// Human-readable warnings for evictions that need an operator.
    #[must_use]
    pub fn warnings(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter_map(|(name, outcome)| match outcome {
                ConflictOutcome::Evicted {
                    pid,
                    outcome: TerminationOutcome::SignalFailed { reason },
                } => Some(format!(
                    "Could not terminate {name} (PID {pid}): {reason}; manual intervention may be required"
                )),
                _ => None,
            })
            .collect()
    }

    /// Number of live processes that were signalled successfully.
    #[must_use]
    pub fn evicted(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, outcome)| {
                matches!(outcome, ConflictOutcome::Evicted { outcome, .. } if !outcome.is_failure())
            })
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warnings_only_cover_failed_signals() {
        let pid = Pid::new(77).unwrap();
        let report = ConflictReport {
            entries: vec![
                (ServiceName::new("a").unwrap(), ConflictOutcome::Absent),
                (
                    ServiceName::new("b").unwrap(),
                    ConflictOutcome::Evicted {
                        pid,
                        outcome: TerminationOutcome::Forced,
                    },
                ),
                (
                    ServiceName::new("c").unwrap(),
                    ConflictOutcome::Evicted {
                        pid,
                        outcome: TerminationOutcome::SignalFailed {
                            reason: "permission denied".to_string(),
                        },
                    },
                ),
            ],
        };

        let warnings = report.warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with("Could not terminate c (PID 77): permission denied"));
        assert_eq!(report.evicted(), 1);
    }
}
