//! Status command handler.

use anyhow::Result;
use svcguard_core::{RecordState, RecordStatus, ServiceName};

use crate::bootstrap::CliContext;

/// Collect the state of one service, or of every recorded service.
///
/// Never removes records, stale or corrupt; the next run of a service that
/// conflicts with them cleans them up.
pub fn collect(ctx: &CliContext, service: Option<&ServiceName>) -> Result<Vec<RecordStatus>> {
    let records = match service {
        Some(service) => ctx
            .store
            .peek(service)?
            .map(|pid| vec![(service.clone(), pid)])
            .unwrap_or_default(),
        None => ctx.store.list()?,
    };

    Ok(records
        .into_iter()
        .map(|(service, pid)| {
            let state = if ctx.control.is_alive(pid) {
                RecordState::Running
            } else {
                RecordState::Stale
            };
            RecordStatus {
                service,
                pid,
                state,
            }
        })
        .collect())
}

/// Execute the status command.
pub fn execute(ctx: &CliContext, service: Option<&ServiceName>, json: bool) -> Result<()> {
    let statuses = collect(ctx, service)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&statuses)?);
        return Ok(());
    }

    if statuses.is_empty() {
        match service {
            Some(service) => println!("{service} is not running"),
            None => println!("No services recorded"),
        }
        return Ok(());
    }

    println!("{:<24} {:>8}  STATE", "SERVICE", "PID");
    for status in &statuses {
        let state = match status.state {
            RecordState::Running => "running",
            RecordState::Stale => "stale",
        };
        println!("{:<24} {:>8}  {}", status.service, status.pid, state);
    }
    Ok(())
}
