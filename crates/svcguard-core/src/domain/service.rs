//! Service identity and descriptors.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Identifier of a supervised role (e.g. `sse`).
///
/// Used verbatim as part of the PID file name, so only ASCII alphanumerics,
/// `-`, `_` and `.` are accepted, and `.`/`..` are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ServiceName(String);

/// Error returned for names that cannot be used as a PID file component.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceNameError {
    #[error("Service name cannot be empty")]
    Empty,

    #[error("Service name '{name}' contains invalid character {ch:?}")]
    InvalidCharacter { name: String, ch: char },

    #[error("Service name '{0}' is reserved")]
    Reserved(String),
}

impl ServiceName {
    pub fn new(name: impl Into<String>) -> Result<Self, ServiceNameError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ServiceNameError::Empty);
        }
        if name == "." || name == ".." {
            return Err(ServiceNameError::Reserved(name));
        }
        if let Some(ch) = name
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
        {
            return Err(ServiceNameError::InvalidCharacter { name, ch });
        }
        Ok(Self(name))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ServiceName {
    type Err = ServiceNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ServiceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Static description of a supervised service.
///
/// `conflicts_with` is ordered; siblings are evicted in that order before
/// the service claims its own slot. Listing the service's own name evicts a
/// previous instance of the same service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceDescriptor {
    /// Name of the slot this service claims.
    pub name: ServiceName,
    /// Siblings that must not run alongside this service.
    pub conflicts_with: Vec<ServiceName>,
}

impl ServiceDescriptor {
    #[must_use]
    pub const fn new(name: ServiceName) -> Self {
        Self {
            name,
            conflicts_with: Vec::new(),
        }
    }

    /// Append conflicting siblings, skipping names already listed.
    #[must_use]
    pub fn with_conflicts(mut self, conflicts: impl IntoIterator<Item = ServiceName>) -> Self {
        for name in conflicts {
            if !self.conflicts_with.contains(&name) {
                self.conflicts_with.push(name);
            }
        }
        self
    }

    /// Also evict a previous instance of this same service before starting.
    #[must_use]
    pub fn replacing_previous(self) -> Self {
        let own = self.name.clone();
        self.with_conflicts([own])
    }
}
