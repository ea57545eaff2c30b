//! Supervisor settings and validation.
//!
//! Timing knobs for the termination protocol. These are pure values; the
//! CLI fills them from flags and environment variables.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default grace window between SIGTERM and SIGKILL.
pub const DEFAULT_TERM_TIMEOUT_MS: u64 = 3_000;

/// Default delay between liveness probes while waiting for exit.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 500;

/// Default pause after a process exits, before the caller reuses its resources.
pub const DEFAULT_SETTLE_MS: u64 = 500;

/// Upper bound on the grace window.
const MAX_TERM_TIMEOUT_MS: u64 = 300_000;

/// Timing settings for evicting a running process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupervisorSettings {
    /// How long to wait for a process to exit after SIGTERM.
    pub term_timeout_ms: u64,

    /// How often to re-probe liveness inside the grace window.
    pub poll_interval_ms: u64,

    /// Pause after confirmed exit or SIGKILL so sockets and descriptors are released.
    pub settle_ms: u64,
}

impl Default for SupervisorSettings {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl SupervisorSettings {
    #[must_use]
    pub const fn with_defaults() -> Self {
        Self {
            term_timeout_ms: DEFAULT_TERM_TIMEOUT_MS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            settle_ms: DEFAULT_SETTLE_MS,
        }
    }

    #[must_use]
    pub const fn term_timeout(&self) -> Duration {
        Duration::from_millis(self.term_timeout_ms)
    }

    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    #[must_use]
    pub const fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }

    /// Number of liveness probes that fit in the grace window (at least one).
    #[must_use]
    pub const fn poll_count(&self) -> u64 {
        if self.poll_interval_ms == 0 {
            return 1;
        }
        let count = self.term_timeout_ms / self.poll_interval_ms;
        if count == 0 { 1 } else { count }
    }

    /// Milliseconds from SIGTERM to SIGKILL: every poll that fits the window.
    #[must_use]
    pub const fn escalation_window_ms(&self) -> u64 {
        self.poll_count().saturating_mul(self.poll_interval_ms)
    }
}

/// Settings validation error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SettingsError {
    #[error("Poll interval must be greater than zero")]
    ZeroPollInterval,

    #[error("Termination timeout must be between {min} and 300000 ms, got {got}")]
    InvalidTermTimeout { min: u64, got: u64 },
}

/// Validate settings values.
pub fn validate_settings(settings: &SupervisorSettings) -> Result<(), SettingsError> {
    if settings.poll_interval_ms == 0 {
        return Err(SettingsError::ZeroPollInterval);
    }

    // The window must hold at least one poll
    if !(settings.poll_interval_ms..=MAX_TERM_TIMEOUT_MS).contains(&settings.term_timeout_ms) {
        return Err(SettingsError::InvalidTermTimeout {
            min: settings.poll_interval_ms,
            got: settings.term_timeout_ms,
        });
    }

    Ok(())
}
