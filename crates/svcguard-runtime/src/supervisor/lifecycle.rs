//! Single-instance lifecycle around a supervised start routine.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures_util::FutureExt;
use svcguard_core::{
    DiagnosticSink, FAILURE_STATUS, LifecycleReport, LifecycleStage, Pid, PidFileError,
    PidRecordHooks, ProcessControlPort, SUCCESS_STATUS, ServiceName, SupervisedService,
    SupervisorError, SupervisorSettings, TracingSink,
};
use tracing::info;

use super::conflict::ConflictResolver;
use super::guard::PidRecordGuard;
use crate::pidfile::{FilePidRecordHooks, PidFileStore};

/// The entry point external callers use to run a service as a single instance.
///
/// Optional capabilities (custom PID record hooks, a diagnostic sink) are
/// fixed at construction with [`with_hooks`] and [`with_sink`].
///
/// [`with_hooks`]: LifecycleRunner::with_hooks
/// [`with_sink`]: LifecycleRunner::with_sink
pub struct LifecycleRunner {
    store: PidFileStore,
    resolver: ConflictResolver,
    control: Arc<dyn ProcessControlPort>,
    hooks: Arc<dyn PidRecordHooks>,
    sink: Arc<dyn DiagnosticSink>,
}

impl LifecycleRunner {
    pub fn new(
        store: PidFileStore,
        control: Arc<dyn ProcessControlPort>,
        settings: SupervisorSettings,
    ) -> Self {
        let resolver = ConflictResolver::new(store.clone(), Arc::clone(&control), settings);
        Self {
            store,
            resolver,
            control,
            hooks: Arc::new(FilePidRecordHooks),
            sink: Arc::new(TracingSink),
        }
    }

    /// Replace how the service's own record is written and removed.
    #[must_use]
    pub fn with_hooks(mut self, hooks: Arc<dyn PidRecordHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    /// Replace where diagnostics are emitted as they happen.
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn store(&self) -> &PidFileStore {
        &self.store
    }

    pub fn resolver(&self) -> &ConflictResolver {
        &self.resolver
    }

    /// Evict conflicts, claim the slot, run `service.start`, release the slot.
    ///
    /// Conflict resolution finishes before the own record is written, and the
    /// own record is gone before this returns, whether `start` returns,
    /// fails or panics. Dropping the returned future mid-run also removes it.
    pub async fn run_with_lifecycle<S: SupervisedService>(
        &self,
        service: &S,
        config: &S::Config,
    ) -> LifecycleReport {
        let descriptor = service.descriptor();
        let name = &descriptor.name;
        let mut diagnostics = Vec::new();

        let conflicts = match self.resolver.resolve(&descriptor.conflicts_with).await {
            Ok(report) => report,
            Err(e) => return self.abort(name, LifecycleStage::ResolveConflicts, &e, diagnostics),
        };
        for warning in conflicts.warnings() {
            self.report(&mut diagnostics, warning);
        }
        if conflicts.evicted() > 0 {
            info!(
                "Evicted {} conflicting process(es) before starting {}",
                conflicts.evicted(),
                name
            );
        }

        let guard = match self.claim(name) {
            Ok(guard) => guard,
            Err(e) => return self.abort(name, LifecycleStage::WritePidRecord, &e, diagnostics),
        };

        let result = AssertUnwindSafe(service.start(config)).catch_unwind().await;

        if let Err(e) = guard.release() {
            self.report(
                &mut diagnostics,
                format!("Could not remove PID record for {name}: {e}"),
            );
        }

        let status = match result {
            Ok(Ok(status)) => {
                if status != SUCCESS_STATUS {
                    self.report(
                        &mut diagnostics,
                        format!("Service {name} exited with status {status}"),
                    );
                }
                status
            }
            Ok(Err(e)) => {
                self.report(&mut diagnostics, format!("Service {name} failed: {e:#}"));
                FAILURE_STATUS
            }
            Err(panic) => {
                self.report(
                    &mut diagnostics,
                    format!("Service {name} failed: {}", panic_message(panic.as_ref())),
                );
                FAILURE_STATUS
            }
        };

        info!("Service {} finished with status {}", name, status);
        LifecycleReport {
            status,
            diagnostics,
        }
    }

    /// Write this process's record for `name` and arm its removal.
    ///
    /// Refuses to overwrite a record held by another live process; evicting
    /// a previous instance is the job of the conflict list.
    fn claim(&self, name: &ServiceName) -> Result<PidRecordGuard, SupervisorError> {
        let pid = Pid::current();
        if let Some(holder) = self.store.read(name)? {
            if holder != pid && self.control.is_alive(holder) {
                return Err(SupervisorError::AlreadyRunning {
                    service: name.clone(),
                    pid: holder,
                });
            }
        }

        let path = self.store.path(name)?;

        if let Err(e) = self.hooks.write_pid_file(&path, pid) {
            // Never leave a partially written record behind
            let _ = self.hooks.remove_pid_file(&path);
            return Err(PidFileError::Write {
                path,
                reason: e.to_string(),
            }
            .into());
        }

        let guard = PidRecordGuard::new(path, Arc::clone(&self.hooks));
        info!(
            "Claimed {} for PID {} ({})",
            name,
            pid,
            guard.path().display()
        );
        Ok(guard)
    }

    fn abort(
        &self,
        name: &ServiceName,
        stage: LifecycleStage,
        err: &SupervisorError,
        mut diagnostics: Vec<String>,
    ) -> LifecycleReport {
        self.report(
            &mut diagnostics,
            format!("Service {name} failed to {stage}: {err}"),
        );
        LifecycleReport {
            status: FAILURE_STATUS,
            diagnostics,
        }
    }

    fn report(&self, diagnostics: &mut Vec<String>, line: String) {
        self.sink.emit(&line);
        diagnostics.push(line);
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        format!("panicked: {msg}")
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        format!("panicked: {msg}")
    } else {
        "panicked".to_string()
    }
}
