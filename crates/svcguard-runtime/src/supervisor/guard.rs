//! RAII ownership of a service's own PID record.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use svcguard_core::PidRecordHooks;
use tracing::{debug, warn};

/// Removes the record exactly once: explicitly through [`release`], or on
/// drop if the owning future is cancelled or unwinds first.
///
/// [`release`]: PidRecordGuard::release
pub(crate) struct PidRecordGuard {
    path: PathBuf,
    hooks: Arc<dyn PidRecordHooks>,
    armed: bool,
}

impl PidRecordGuard {
    pub(crate) fn new(path: PathBuf, hooks: Arc<dyn PidRecordHooks>) -> Self {
        Self {
            path,
            hooks,
            armed: true,
        }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn release(mut self) -> io::Result<()> {
        self.armed = false;
        self.hooks.remove_pid_file(&self.path)?;
        debug!("Released PID record {}", self.path.display());
        Ok(())
    }
}

impl Drop for PidRecordGuard {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        self.armed = false;
        match self.hooks.remove_pid_file(&self.path) {
            Ok(()) => debug!("Released PID record {} on drop", self.path.display()),
            Err(e) => warn!(
                "Failed to remove PID record {} on drop: {}",
                self.path.display(),
                e
            ),
        }
    }
}
