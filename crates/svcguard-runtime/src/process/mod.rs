//! Process probing, signalling and termination.
//!
//! - `pid_exists` / `NixProcessControl`: the OS side of `ProcessControlPort`
//! - `TerminationProtocol`: SIGTERM → poll → SIGKILL for PIDs we do not own
//! - `shutdown_child`: the same escalation for a `Child` handle (includes reaping)

mod control;
mod probe;
mod shutdown;
mod termination;

pub use control::NixProcessControl;
pub use probe::pid_exists;
pub use shutdown::shutdown_child;
pub use termination::TerminationProtocol;
