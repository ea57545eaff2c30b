//! POSIX-signal implementation of `ProcessControlPort`.

use svcguard_core::{Pid, ProcessControlPort, SignalError};

use super::probe::pid_exists;

/// Probes and signals real processes via `kill(2)`.
///
/// Stateless; construct once and share it behind an `Arc`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NixProcessControl;

impl NixProcessControl {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ProcessControlPort for NixProcessControl {
    fn is_alive(&self, pid: Pid) -> bool {
        pid_exists(pid)
    }

    fn terminate(&self, pid: Pid) -> Result<(), SignalError> {
        send(pid, Sig::Term)
    }

    fn kill(&self, pid: Pid) -> Result<(), SignalError> {
        send(pid, Sig::Kill)
    }
}

#[derive(Debug, Clone, Copy)]
enum Sig {
    Term,
    Kill,
}

#[cfg(unix)]
fn send(pid: Pid, sig: Sig) -> Result<(), SignalError> {
    use nix::errno::Errno;
    use nix::sys::signal::{self, Signal};
    use nix::unistd::Pid as NixPid;

    let signal = match sig {
        Sig::Term => Signal::SIGTERM,
        Sig::Kill => Signal::SIGKILL,
    };

    signal::kill(NixPid::from_raw(pid.as_raw()), signal).map_err(|e| match e {
        Errno::ESRCH => SignalError::NoSuchProcess(pid),
        Errno::EPERM => SignalError::PermissionDenied(pid),
        other => SignalError::Other {
            pid,
            reason: other.desc().to_string(),
        },
    })
}

#[cfg(not(unix))]
fn send(_pid: Pid, _sig: Sig) -> Result<(), SignalError> {
    Err(SignalError::Unsupported)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn signalling_a_missing_process_reports_no_such_process() {
        let pid = Pid::new(999_999_999).unwrap();
        let control = NixProcessControl::new();

        assert!(!control.is_alive(pid));
        assert_eq!(control.terminate(pid), Err(SignalError::NoSuchProcess(pid)));
        assert_eq!(control.kill(pid), Err(SignalError::NoSuchProcess(pid)));
    }
}
