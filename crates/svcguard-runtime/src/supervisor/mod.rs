//! The single-instance supervisor.
//!
//! `LifecycleRunner` → `ConflictResolver` → (`PidFileStore`,
//! `ProcessControlPort`, `TerminationProtocol`) to clear the field, then the
//! runner claims its own record, runs the service and releases the record.

mod conflict;
mod guard;
mod lifecycle;

pub use conflict::ConflictResolver;
pub use lifecycle::LifecycleRunner;
