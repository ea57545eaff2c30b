//! Atomic PID file I/O operations.
//!
//! Format: the decimal process id and nothing else
//! ```text
//! <pid>
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use svcguard_core::{Pid, PidParseError};

/// What a PID file currently says.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PidFileContent {
    Missing,
    Valid(Pid),
    Corrupt(PidParseError),
}

/// Write a PID file atomically using temp file + rename.
///
/// # Atomicity
/// 1. Write to `.<file>.<writer-pid>.tmp` in the same directory
/// 2. Rename over `<file>` (atomic on Unix/macOS)
///
/// On failure the temp file is removed, so no partial record is left behind.
pub fn write_pid_file(path: &Path, pid: Pid) -> io::Result<()> {
    let temp_path = temp_path_for(path)?;

    let result = fs::write(&temp_path, pid.to_string()).and_then(|()| fs::rename(&temp_path, path));
    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

/// Read and parse a PID file without modifying it.
pub fn read_pid_file(path: &Path) -> io::Result<PidFileContent> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(PidFileContent::Missing),
        // Non-UTF-8 bytes cannot be a decimal id
        Err(e) if e.kind() == io::ErrorKind::InvalidData => {
            return Ok(PidFileContent::Corrupt(PidParseError::NotANumber(
                "<binary data>".to_string(),
            )));
        }
        Err(e) => return Err(e),
    };

    Ok(match content.parse::<Pid>() {
        Ok(pid) => PidFileContent::Valid(pid),
        Err(e) => PidFileContent::Corrupt(e),
    })
}

/// Delete a PID file (idempotent - no error if missing).
pub fn delete_pid_file(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

fn temp_path_for(path: &Path) -> io::Result<PathBuf> {
    let file_name = path
        .file_name()
        .and_then(|s| s.to_str())
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "PID file path has no file name"))?;
    Ok(path.with_file_name(format!(
        ".{}.{}.tmp",
        file_name,
        std::process::id()
    )))
}
