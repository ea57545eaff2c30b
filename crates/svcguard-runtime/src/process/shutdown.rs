//! Graceful shutdown logic for `tokio::process::Child` with SIGTERM → SIGKILL escalation.
//!
//! Used by supervised routines that wrap a child program: when the
//! supervisor itself is asked to stop, the child gets the same courtesy.

use std::io;
use std::process::ExitStatus;
use std::time::Duration;

use tokio::process::Child;

#[cfg(unix)]
use tokio::time::timeout;

#[cfg(unix)]
use nix::errno::Errno;
#[cfg(unix)]
use nix::sys::signal::{self, Signal};
#[cfg(unix)]
use nix::unistd::{Pid as NixPid, getpgid};

/// Gracefully shut down a child process with SIGTERM, escalating to SIGKILL if needed.
///
/// # Strategy
/// 1. Send SIGTERM and wait up to `grace` for graceful exit
/// 2. If still running, send SIGKILL
/// 3. Wait for process reaping (required to avoid zombies)
///
/// When the child leads its own process group, both signals go to the whole
/// group so grandchildren are stopped with it.
///
/// # Platform behavior
/// - Unix: Uses nix crate for SIGTERM, then SIGKILL via `.kill()`
/// - Windows: Immediately calls `.kill()` (no graceful shutdown available)
pub async fn shutdown_child(child: &mut Child, grace: Duration) -> io::Result<ExitStatus> {
    #[cfg(unix)]
    {
        shutdown_unix(child, grace).await
    }

    #[cfg(not(unix))]
    {
        let _ = grace;
        child.kill().await?;
        child.wait().await
    }
}

#[cfg(unix)]
async fn shutdown_unix(child: &mut Child, grace: Duration) -> io::Result<ExitStatus> {
    // Already reaped: nothing left to signal
    let Some(raw) = child.id() else {
        return child.wait().await;
    };
    let pid = i32::try_from(raw)
        .map(NixPid::from_raw)
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "child PID out of range"))?;
    let group = getpgid(Some(pid)).is_ok_and(|pgid| pgid == pid);

    // Phase 1: SIGTERM with grace period
    if let Err(e) = signal_tree(pid, group, Signal::SIGTERM) {
        // Process may have already exited
        if e == Errno::ESRCH {
            return child.wait().await;
        }
        return Err(io::Error::other(e));
    }

    if let Ok(result) = timeout(grace, child.wait()).await {
        return result;
    }

    // Phase 2: SIGKILL
    tracing::warn!("Child PID {} ignored SIGTERM for {:?}, killing", pid, grace);
    if group {
        match signal::killpg(pid, Signal::SIGKILL) {
            Ok(()) | Err(Errno::ESRCH) => {}
            Err(e) => return Err(io::Error::other(e)),
        }
    } else {
        child.kill().await?;
    }

    // Phase 3: Wait for reaping (should be fast after SIGKILL)
    child.wait().await
}

#[cfg(unix)]
fn signal_tree(pid: NixPid, group: bool, sig: Signal) -> nix::Result<()> {
    if group {
        signal::killpg(pid, sig)
    } else {
        signal::kill(pid, sig)
    }
}
