//! Stop command handler.

use anyhow::Result;
use svcguard_core::{ConflictOutcome, ServiceName, TerminationOutcome};

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Stop `service` using the same protocol as conflict eviction.
pub async fn execute(ctx: &CliContext, service: &ServiceName) -> Result<()> {
    match ctx.runner.resolver().evict(service).await? {
        ConflictOutcome::Absent => println!("{service} is not running"),
        ConflictOutcome::Stale { pid } => {
            println!("{service} was not running (removed stale record for PID {pid})");
        }
        ConflictOutcome::CurrentProcess { pid } => {
            println!("{service} is recorded as this process (PID {pid}), leaving it alone");
        }
        ConflictOutcome::Evicted { pid, outcome } => match outcome {
            TerminationOutcome::Graceful => println!("Stopped {service} (PID {pid})"),
            TerminationOutcome::Forced => {
                println!("Killed {service} (PID {pid}) after it ignored SIGTERM");
            }
            TerminationOutcome::SignalFailed { reason } => {
                return Err(CliError::Process(format!(
                    "could not stop {service} (PID {pid}): {reason}"
                ))
                .into());
            }
        },
    }
    Ok(())
}
