//! Run command handler.
//!
//! Claims the service slot, runs the wrapped program, and releases the slot
//! when the program exits.

use std::time::Duration;

use anyhow::Result;
use svcguard_core::{ServiceDescriptor, SupervisorSettings};

use crate::bootstrap::CliContext;
use crate::commands::{CHILD_SHUTDOWN_MARGIN_MS, RunArgs};
use crate::error::CliError;
use crate::service::{ChildConfig, CommandService};

/// Execute the run command and return the process exit status.
///
/// Diagnostics are already on stderr through the context's sink by the time
/// this returns.
pub async fn execute(ctx: &CliContext, args: RunArgs) -> Result<i32> {
    let RunArgs {
        service,
        conflicts_with,
        replace,
        grace_ms,
        cwd,
        command,
    } = args;

    let shutdown_grace = child_grace(grace_ms, &ctx.settings)?;

    let mut descriptor = ServiceDescriptor::new(service).with_conflicts(conflicts_with);
    if replace {
        descriptor = descriptor.replacing_previous();
    }

    let service = CommandService::new(descriptor, command)?;
    let config = ChildConfig {
        working_dir: cwd,
        shutdown_grace,
    };

    let report = ctx.runner.run_with_lifecycle(&service, &config).await;
    Ok(report.status)
}

/// Grace period for the wrapped program on shutdown.
///
/// A supervisor evicting this one sends SIGKILL once its escalation window
/// elapses, and a SIGKILLed supervisor leaves its child running. The child
/// must therefore be stopped and reaped with [`CHILD_SHUTDOWN_MARGIN_MS`] to
/// spare. Supervisors sharing a runtime directory are expected to share
/// timing settings.
pub fn child_grace(
    requested_ms: Option<u64>,
    settings: &SupervisorSettings,
) -> Result<Duration, CliError> {
    let window = settings.escalation_window_ms();
    let limit = window.saturating_sub(CHILD_SHUTDOWN_MARGIN_MS);

    match requested_ms {
        None => Ok(Duration::from_millis(limit)),
        Some(ms) if ms <= limit => Ok(Duration::from_millis(ms)),
        Some(ms) => Err(CliError::Arguments(format!(
            "--grace-ms {ms} exceeds {limit}: the program must be stopped \
             {CHILD_SHUTDOWN_MARGIN_MS}ms before the {window}ms termination window ends"
        ))),
    }
}

#[cfg(test)]
mod grace_tests {
    use super::*;

    fn settings(term_timeout_ms: u64, poll_interval_ms: u64) -> SupervisorSettings {
        SupervisorSettings {
            term_timeout_ms,
            poll_interval_ms,
            settle_ms: 0,
        }
    }

    #[test]
    fn default_grace_ends_before_the_evictor_escalates() {
        let grace = child_grace(None, &SupervisorSettings::with_defaults()).unwrap();
        assert_eq!(grace, Duration::from_millis(2_500));

        // Window is whole polls: 3 x 300ms
        let grace = child_grace(None, &settings(1_000, 300)).unwrap();
        assert_eq!(grace, Duration::from_millis(400));
    }

    #[test]
    fn explicit_grace_within_the_window_is_kept() {
        let grace = child_grace(Some(1_000), &settings(3_000, 500)).unwrap();
        assert_eq!(grace, Duration::from_secs(1));
    }

    #[test]
    fn grace_outliving_the_window_is_rejected() {
        let err = child_grace(Some(5_000), &settings(3_000, 500)).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("--grace-ms 5000 exceeds 2500"));
    }

    #[test]
    fn tiny_window_leaves_no_grace() {
        let grace = child_grace(None, &settings(400, 100)).unwrap();
        assert_eq!(grace, Duration::ZERO);
    }
}
