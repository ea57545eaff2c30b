//! Evicting conflicting sibling services before a service claims its slot.

use std::sync::Arc;

use svcguard_core::{
    ConflictOutcome, ConflictReport, Pid, ProcessControlPort, ServiceName, SupervisorError,
    SupervisorSettings,
};
use tracing::{debug, info};

use crate::pidfile::PidFileStore;
use crate::process::TerminationProtocol;

/// Clears the field of known-conflicting siblings.
///
/// Resolution is sequential in the order given. Two sibling records can name
/// the same process, so resolving them concurrently could signal one process
/// twice.
#[derive(Clone)]
pub struct ConflictResolver {
    store: PidFileStore,
    control: Arc<dyn ProcessControlPort>,
    protocol: TerminationProtocol,
}

impl ConflictResolver {
    pub fn new(
        store: PidFileStore,
        control: Arc<dyn ProcessControlPort>,
        settings: SupervisorSettings,
    ) -> Self {
        let protocol = TerminationProtocol::new(Arc::clone(&control), settings);
        Self {
            store,
            control,
            protocol,
        }
    }

    /// Evict every live service named in `conflicts`, discarding their records.
    ///
    /// Duplicate names are resolved once. Aborts on the first record that
    /// cannot be read or removed.
    pub async fn resolve(&self, conflicts: &[ServiceName]) -> Result<ConflictReport, SupervisorError> {
        let mut report = ConflictReport::default();

        for service in conflicts {
            if report.entries.iter().any(|(seen, _)| seen == service) {
                continue;
            }
            let outcome = self.evict(service).await?;
            report.entries.push((service.clone(), outcome));
        }

        Ok(report)
    }

    /// Evict a single service if its record points at a live process.
    ///
    /// | Record                  | Action                                 |
    /// |-------------------------|----------------------------------------|
    /// | absent or corrupt       | nothing                                |
    /// | names this process      | nothing (never signal ourselves)       |
    /// | dead process            | remove record                          |
    /// | live process            | terminate, then remove record          |
    pub async fn evict(&self, service: &ServiceName) -> Result<ConflictOutcome, SupervisorError> {
        let Some(pid) = self.store.read(service)? else {
            debug!("No PID record for {}", service);
            return Ok(ConflictOutcome::Absent);
        };

        if pid == Pid::current() {
            debug!("PID record for {} names this process, skipping", service);
            return Ok(ConflictOutcome::CurrentProcess { pid });
        }

        if !self.control.is_alive(pid) {
            info!("Removing stale PID record for {} (PID {})", service, pid);
            self.store.remove(service)?;
            return Ok(ConflictOutcome::Stale { pid });
        }

        info!("Stopping running {} (PID {})", service, pid);
        let outcome = self.protocol.terminate(pid).await;

        // Discarded whatever the outcome; retrying against a possibly-gone
        // PID cannot be made safe
        self.store.remove(service)?;

        Ok(ConflictOutcome::Evicted { pid, outcome })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;
    use std::fs;
    use svcguard_core::{SignalError, SupervisorPaths, TerminationOutcome};
    use tempfile::TempDir;

    use crate::test_support::MockControl;

    fn store(tmp: &TempDir) -> PidFileStore {
        PidFileStore::new(SupervisorPaths::new(tmp.path(), "svcguard").unwrap())
    }

    fn name(s: &str) -> ServiceName {
        ServiceName::new(s).unwrap()
    }

    fn pid(raw: u32) -> Pid {
        Pid::new(raw).unwrap()
    }

    fn settings() -> SupervisorSettings {
        SupervisorSettings {
            term_timeout_ms: 20,
            poll_interval_ms: 10,
            settle_ms: 0,
        }
    }

    fn resolver(store: &PidFileStore, control: MockControl) -> ConflictResolver {
        ConflictResolver::new(store.clone(), Arc::new(control), settings())
    }

    #[tokio::test]
    async fn absent_records_are_skipped() {
        let tmp = TempDir::new().unwrap();
        let store = store(&tmp);
        let mut control = MockControl::new();
        control.expect_is_alive().never();
        control.expect_terminate().never();

        let report = resolver(&store, control)
            .resolve(&[name("b")])
            .await
            .unwrap();

        assert_eq!(report.entries, vec![(name("b"), ConflictOutcome::Absent)]);
    }

    #[tokio::test]
    async fn stale_records_are_removed_without_signalling() {
        let tmp = TempDir::new().unwrap();
        let store = store(&tmp);
        let path = store.write(&name("b"), pid(31337)).unwrap();

        let mut control = MockControl::new();
        control
            .expect_is_alive()
            .with(eq(pid(31337)))
            .times(1)
            .returning(|_| false);
        control.expect_terminate().never();
        control.expect_kill().never();

        let report = resolver(&store, control)
            .resolve(&[name("b")])
            .await
            .unwrap();

        assert_eq!(
            report.entries,
            vec![(name("b"), ConflictOutcome::Stale { pid: pid(31337) })]
        );
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn live_sibling_is_terminated_and_record_removed() {
        let tmp = TempDir::new().unwrap();
        let store = store(&tmp);
        let path = store.write(&name("b"), pid(4000)).unwrap();

        let mut control = MockControl::new();
        let mut probes = 0;
        control.expect_is_alive().returning(move |_| {
            probes += 1;
            probes == 1 // alive for the initial check, gone on the first poll
        });
        control
            .expect_terminate()
            .with(eq(pid(4000)))
            .times(1)
            .returning(|_| Ok(()));
        control.expect_kill().never();

        let report = resolver(&store, control)
            .resolve(&[name("b")])
            .await
            .unwrap();

        assert_eq!(
            report.entries,
            vec![(
                name("b"),
                ConflictOutcome::Evicted {
                    pid: pid(4000),
                    outcome: TerminationOutcome::Graceful
                }
            )]
        );
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn record_is_discarded_even_when_signal_fails() {
        let tmp = TempDir::new().unwrap();
        let store = store(&tmp);
        let path = store.write(&name("b"), pid(7000)).unwrap();

        let mut control = MockControl::new();
        control.expect_is_alive().returning(|_| true);
        control
            .expect_terminate()
            .returning(|pid| Err(SignalError::PermissionDenied(pid)));
        control.expect_kill().never();

        let report = resolver(&store, control)
            .resolve(&[name("b")])
            .await
            .unwrap();

        assert_eq!(report.warnings().len(), 1);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn own_pid_is_never_signalled() {
        let tmp = TempDir::new().unwrap();
        let store = store(&tmp);
        let path = store.write(&name("a"), Pid::current()).unwrap();

        let mut control = MockControl::new();
        control.expect_is_alive().never();
        control.expect_terminate().never();

        let outcome = resolver(&store, control).evict(&name("a")).await.unwrap();

        assert_eq!(
            outcome,
            ConflictOutcome::CurrentProcess {
                pid: Pid::current()
            }
        );
        assert!(path.exists());
    }

    #[tokio::test]
    async fn duplicates_resolve_once_in_order() {
        let tmp = TempDir::new().unwrap();
        let store = store(&tmp);
        store.write(&name("c"), pid(900)).unwrap();

        let mut control = MockControl::new();
        control.expect_is_alive().times(1).returning(|_| false);

        let report = resolver(&store, control)
            .resolve(&[name("b"), name("c"), name("b"), name("c")])
            .await
            .unwrap();

        assert_eq!(
            report.entries,
            vec![
                (name("b"), ConflictOutcome::Absent),
                (name("c"), ConflictOutcome::Stale { pid: pid(900) }),
            ]
        );
    }

    #[tokio::test]
    async fn unusable_runtime_dir_aborts_resolution() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("var"), "not a directory").unwrap();
        let store = store(&tmp);

        let mut control = MockControl::new();
        control.expect_terminate().never();

        let err = resolver(&store, control)
            .resolve(&[name("b")])
            .await
            .unwrap_err();

        assert!(matches!(err, SupervisorError::Path(_)));
    }
}
