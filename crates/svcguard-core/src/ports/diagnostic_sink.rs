//! Output sink for user-facing supervisor diagnostics.

/// Receives each diagnostic line as the runner produces it.
///
/// The lines are also returned in the `LifecycleReport`; a sink is only
/// needed when they must be seen before the run finishes.
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, line: &str);
}

/// Default sink: forwards diagnostics to `tracing` at error level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, line: &str) {
        tracing::error!("{}", line);
    }
}
