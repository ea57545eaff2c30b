//! Optional override for how a service's own PID record is written.

use std::io;
use std::path::Path;

use crate::domain::Pid;

/// Writes and removes the supervised service's own PID record.
///
/// The runner installs the default file-based implementation unless a
/// service supplies its own through `LifecycleRunner::with_hooks`. Eviction
/// of other services always goes through the PID file store.
pub trait PidRecordHooks: Send + Sync {
    fn write_pid_file(&self, path: &Path, pid: Pid) -> io::Result<()>;

    /// Must succeed when the file is already gone.
    fn remove_pid_file(&self, path: &Path) -> io::Result<()>;
}
