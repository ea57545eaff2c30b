//! Default file-based implementation of `PidRecordHooks`.

use std::io;
use std::path::Path;

use svcguard_core::{Pid, PidRecordHooks};

use super::io::{delete_pid_file, write_pid_file};

/// Writes the service's own record with the same atomic I/O the store uses.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilePidRecordHooks;

impl PidRecordHooks for FilePidRecordHooks {
    fn write_pid_file(&self, path: &Path, pid: Pid) -> io::Result<()> {
        write_pid_file(path, pid)
    }

    fn remove_pid_file(&self, path: &Path) -> io::Result<()> {
        delete_pid_file(path)
    }
}
