//! Project root resolution.
//!
//! The project root anchors the runtime directory. Callers pass an explicit
//! override (from a flag or env var they read themselves); otherwise the
//! current working directory is used.

use std::env;
use std::path::PathBuf;

use super::error::PathError;

/// Resolve the project root from an optional user-provided path.
///
/// Resolution order:
/// 1. `explicit`, with `~` expanded and made absolute
/// 2. The current working directory
pub fn resolve_project_root(explicit: Option<&str>) -> Result<PathBuf, PathError> {
    match explicit {
        Some(raw) => normalize_user_path(raw),
        None => env::current_dir().map_err(|e| PathError::CurrentDirError(e.to_string())),
    }
}

/// Normalize a user-provided path, expanding `~` and making it absolute.
fn normalize_user_path(raw: &str) -> Result<PathBuf, PathError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PathError::EmptyPath);
    }

    let expanded = if trimmed.starts_with("~/") || trimmed == "~" {
        let home = dirs::home_dir().ok_or(PathError::NoHomeDir)?;
        if trimmed == "~" {
            home
        } else {
            home.join(trimmed.trim_start_matches("~/"))
        }
    } else {
        PathBuf::from(trimmed)
    };

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(expanded))
            .map_err(|e| PathError::CurrentDirError(e.to_string()))
    }
}
