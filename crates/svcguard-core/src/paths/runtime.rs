//! Runtime directory and PID file naming.
//!
//! PID records live at `<project-root>/var/run/<prefix>-<service>.pid`.

use std::path::{Path, PathBuf};

use super::PathError;
use crate::domain::ServiceName;

/// Runtime directory, relative to the project root.
pub const RUNTIME_DIR_RELATIVE: &str = "var/run";

/// Prefix used for PID file names when none is configured.
pub const DEFAULT_PID_PREFIX: &str = "svcguard";

/// File extension of PID records.
pub const PID_FILE_EXTENSION: &str = "pid";

/// Resolved locations for one supervisor installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupervisorPaths {
    project_root: PathBuf,
    prefix: String,
}

impl SupervisorPaths {
    /// Build paths for a project root and PID file prefix.
    ///
    /// The prefix follows the same character rules as service names.
    pub fn new(project_root: impl Into<PathBuf>, prefix: impl Into<String>) -> Result<Self, PathError> {
        let prefix = prefix.into();
        if ServiceName::new(prefix.clone()).is_err() {
            return Err(PathError::InvalidPrefix(prefix));
        }
        Ok(Self {
            project_root: project_root.into(),
            prefix,
        })
    }

    #[must_use]
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Directory holding every PID record. Not created here.
    #[must_use]
    pub fn runtime_dir(&self) -> PathBuf {
        self.project_root.join(RUNTIME_DIR_RELATIVE)
    }

    /// File name of the record for `service`.
    #[must_use]
    pub fn pid_file_name(&self, service: &ServiceName) -> String {
        format!("{}-{}.{}", self.prefix, service, PID_FILE_EXTENSION)
    }

    /// Recover the service name from a record file name carrying this prefix.
    #[must_use]
    pub fn service_from_file_name(&self, file_name: &str) -> Option<ServiceName> {
        let stem = file_name.strip_suffix(PID_FILE_EXTENSION)?.strip_suffix('.')?;
        let service = stem.strip_prefix(&self.prefix)?.strip_prefix('-')?;
        ServiceName::new(service).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths() -> SupervisorPaths {
        SupervisorPaths::new("/srv/app", "svcguard").unwrap()
    }

    #[test]
    fn runtime_dir_is_under_project_root() {
        let paths = paths();
        assert!(paths.runtime_dir().starts_with("/srv/app"));
        assert!(paths.runtime_dir().ends_with("var/run"));
    }

    #[test]
    fn pid_file_name_round_trips_through_listing() {
        let paths = paths();
        let sse = ServiceName::new("sse").unwrap();

        let file = paths.pid_file_name(&sse);
        assert_eq!(file, "svcguard-sse.pid");
        assert_eq!(paths.service_from_file_name(&file), Some(sse));
    }

    #[test]
    fn foreign_files_are_not_services() {
        let paths = paths();
        assert_eq!(paths.service_from_file_name("other-sse.pid"), None);
        assert_eq!(paths.service_from_file_name("svcguard-sse.pid.tmp"), None);
        assert_eq!(paths.service_from_file_name("svcguard-.pid"), None);
        assert_eq!(paths.service_from_file_name("svcguardsse.pid"), None);
    }

    #[test]
    fn prefix_must_be_file_name_safe() {
        assert!(matches!(
            SupervisorPaths::new("/srv/app", "a/b"),
            Err(PathError::InvalidPrefix(_))
        ));
    }
}
