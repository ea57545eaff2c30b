//! Directory creation for the runtime directory.

use std::fs;
use std::path::Path;

use tracing::debug;

use super::error::PathError;

/// Ensure the provided directory exists, creating it (and parents) if missing.
///
/// A failed create is not an error when the directory exists afterwards:
/// another supervisor may have created it concurrently.
pub fn ensure_directory(path: &Path) -> Result<(), PathError> {
    if path.exists() {
        if !path.is_dir() {
            return Err(PathError::NotADirectory(path.to_path_buf()));
        }
        return Ok(());
    }

    match fs::create_dir_all(path) {
        Ok(()) => {
            debug!("Created runtime directory {}", path.display());
            Ok(())
        }
        Err(_) if path.is_dir() => {
            debug!(
                "Runtime directory {} appeared concurrently",
                path.display()
            );
            Ok(())
        }
        Err(e) => Err(PathError::CreateFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn creates_nested_directories() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("var").join("run");

        ensure_directory(&dir).expect("create failed");
        assert!(dir.is_dir());

        // Idempotent on an existing directory
        ensure_directory(&dir).expect("second call failed");
    }

    #[test]
    fn rejects_a_regular_file() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("run");
        fs::write(&file, "not a dir").unwrap();

        assert!(matches!(
            ensure_directory(&file),
            Err(PathError::NotADirectory(_))
        ));
    }

    #[test]
    fn reports_create_failure_under_a_file() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("var");
        fs::write(&blocker, "blocks the parent").unwrap();

        let err = ensure_directory(&blocker.join("run")).unwrap_err();
        assert!(matches!(err, PathError::CreateFailed { .. }));
        assert!(err.to_string().contains("Failed to create directory"));
    }
}
