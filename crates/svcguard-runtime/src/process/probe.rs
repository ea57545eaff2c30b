//! Non-destructive process liveness probe.

use svcguard_core::Pid;

/// Check if a PID exists.
///
/// Uses `kill` with the null signal, which performs the existence and
/// permission checks without delivering anything.
#[cfg(unix)]
pub fn pid_exists(pid: Pid) -> bool {
    use nix::errno::Errno;
    use nix::sys::signal;
    use nix::unistd::Pid as NixPid;

    match signal::kill(NixPid::from_raw(pid.as_raw()), None) {
        Ok(()) => true,
        Err(Errno::ESRCH) => false, // No such process
        Err(_) => true,             // Process exists but we lack permission
    }
}

#[cfg(not(unix))]
pub fn pid_exists(_pid: Pid) -> bool {
    false // Not implemented on non-Unix
}
