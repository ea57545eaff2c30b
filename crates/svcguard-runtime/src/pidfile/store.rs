//! Named PID records under the runtime directory.

use std::fs;
use std::path::{Path, PathBuf};

use svcguard_core::{
    PathError, Pid, PidFileError, ServiceName, SupervisorError, SupervisorPaths, ensure_directory,
};
use tracing::debug;

use super::io::{PidFileContent, delete_pid_file, read_pid_file, write_pid_file};

/// Single source of truth for where a service's record lives and what it says.
///
/// Cheap to clone; holds only the resolved paths. No locking is performed:
/// exclusivity comes from the supervisor protocol, not from the file.
#[derive(Debug, Clone)]
pub struct PidFileStore {
    paths: SupervisorPaths,
    runtime_dir: PathBuf,
}

impl PidFileStore {
    #[must_use]
    pub fn new(paths: SupervisorPaths) -> Self {
        let runtime_dir = paths.runtime_dir();
        Self { paths, runtime_dir }
    }

    #[must_use]
    pub fn paths(&self) -> &SupervisorPaths {
        &self.paths
    }

    #[must_use]
    pub fn runtime_dir(&self) -> &Path {
        &self.runtime_dir
    }

    /// Path of the record for `service`, creating the runtime directory if needed.
    pub fn path(&self, service: &ServiceName) -> Result<PathBuf, PathError> {
        ensure_directory(&self.runtime_dir)?;
        Ok(self.runtime_dir.join(self.paths.pid_file_name(service)))
    }

    /// Read the recorded process id.
    ///
    /// A record that does not hold a positive integer is deleted and treated
    /// as absent.
    pub fn read(&self, service: &ServiceName) -> Result<Option<Pid>, SupervisorError> {
        let path = self.path(service)?;
        let content = read_pid_file(&path).map_err(|e| PidFileError::Read {
            path: path.clone(),
            reason: e.to_string(),
        })?;

        match content {
            PidFileContent::Missing => Ok(None),
            PidFileContent::Valid(pid) => Ok(Some(pid)),
            PidFileContent::Corrupt(reason) => {
                debug!(
                    "Discarding corrupt PID record {} ({})",
                    path.display(),
                    reason
                );
                delete_pid_file(&path).map_err(|e| PidFileError::Remove {
                    path,
                    reason: e.to_string(),
                })?;
                Ok(None)
            }
        }
    }

    /// Read the recorded process id without discarding a corrupt record.
    pub fn peek(&self, service: &ServiceName) -> Result<Option<Pid>, SupervisorError> {
        let path = self.path(service)?;
        match read_pid_file(&path) {
            Ok(PidFileContent::Valid(pid)) => Ok(Some(pid)),
            Ok(PidFileContent::Missing | PidFileContent::Corrupt(_)) => Ok(None),
            Err(e) => Err(PidFileError::Read {
                path,
                reason: e.to_string(),
            }
            .into()),
        }
    }

    /// Record `pid` as the owner of `service`, replacing any previous record.
    pub fn write(&self, service: &ServiceName, pid: Pid) -> Result<PathBuf, SupervisorError> {
        let path = self.path(service)?;
        write_pid_file(&path, pid).map_err(|e| PidFileError::Write {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        Ok(path)
    }

    /// Delete the record for `service`; a missing record is not an error.
    pub fn remove(&self, service: &ServiceName) -> Result<(), SupervisorError> {
        let path = self.path(service)?;
        delete_pid_file(&path).map_err(|e| PidFileError::Remove {
            path,
            reason: e.to_string(),
        })?;
        Ok(())
    }

    /// List every parseable record carrying this store's prefix.
    ///
    /// Silently ignores foreign and malformed files; corrupt records are
    /// left for the next `read` to discard.
    pub fn list(&self) -> Result<Vec<(ServiceName, Pid)>, SupervisorError> {
        if !self.runtime_dir.exists() {
            return Ok(Vec::new());
        }

        let list_err = |e: std::io::Error| PidFileError::List {
            path: self.runtime_dir.clone(),
            reason: e.to_string(),
        };

        let mut results = Vec::new();
        for entry in fs::read_dir(&self.runtime_dir).map_err(list_err)? {
            let path = entry.map_err(list_err)?.path();

            let Some(service) = path
                .file_name()
                .and_then(|s| s.to_str())
                .and_then(|name| self.paths.service_from_file_name(name))
            else {
                continue;
            };

            if let Ok(PidFileContent::Valid(pid)) = read_pid_file(&path) {
                results.push((service, pid));
            }
        }

        results.sort();
        Ok(results)
    }
}
