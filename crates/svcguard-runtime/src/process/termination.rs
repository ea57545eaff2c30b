//! Graceful-then-forceful termination of a known-alive process.

use std::sync::Arc;

use svcguard_core::{Pid, ProcessControlPort, SignalError, SupervisorSettings, TerminationOutcome};
use tokio::time::sleep;
use tracing::{debug, info, warn};

/// Stops a specific process with SIGTERM, escalating to SIGKILL if needed.
///
/// # Strategy
/// 1. Send SIGTERM
/// 2. Re-probe every `poll_interval` for up to `term_timeout`
/// 3. On exit, pause `settle_delay` and report [`TerminationOutcome::Graceful`]
/// 4. Otherwise send SIGKILL once, pause `settle_delay` and report
///    [`TerminationOutcome::Forced`]; the target is not probed again
///
/// If SIGTERM cannot be delivered the protocol stops there with
/// [`TerminationOutcome::SignalFailed`]; it never escalates against an id
/// that may no longer be the original target.
#[derive(Clone)]
pub struct TerminationProtocol {
    control: Arc<dyn ProcessControlPort>,
    settings: SupervisorSettings,
}

impl TerminationProtocol {
    pub fn new(control: Arc<dyn ProcessControlPort>, settings: SupervisorSettings) -> Self {
        Self { control, settings }
    }

    /// Run the protocol against `pid`, which the caller has just probed alive.
    pub async fn terminate(&self, pid: Pid) -> TerminationOutcome {
        if let Err(e) = self.control.terminate(pid) {
            warn!(
                "Could not send SIGTERM to PID {}: {}. Manual intervention may be required.",
                pid, e
            );
            return TerminationOutcome::SignalFailed {
                reason: e.to_string(),
            };
        }

        let polls = self.settings.poll_count();
        for attempt in 1..=polls {
            sleep(self.settings.poll_interval()).await;

            if !self.control.is_alive(pid) {
                debug!("PID {} exited after SIGTERM ({} polls)", pid, attempt);
                sleep(self.settings.settle_delay()).await;
                return TerminationOutcome::Graceful;
            }
        }

        warn!(
            "PID {} still alive {}ms after SIGTERM, sending SIGKILL",
            pid, self.settings.term_timeout_ms
        );

        match self.control.kill(pid) {
            Ok(()) => {
                sleep(self.settings.settle_delay()).await;
                info!("PID {} killed", pid);
                TerminationOutcome::Forced
            }
            Err(SignalError::NoSuchProcess(_)) => {
                // Exited between the last probe and the kill
                debug!("PID {} exited just before SIGKILL", pid);
                sleep(self.settings.settle_delay()).await;
                TerminationOutcome::Graceful
            }
            Err(e) => {
                warn!("Could not send SIGKILL to PID {}: {}", pid, e);
                TerminationOutcome::SignalFailed {
                    reason: e.to_string(),
                }
            }
        }
    }
}
