//! Process runtime and OS-level concerns for svcguard.
//!
//! Implements the ports from `svcguard-core` over the filesystem and POSIX
//! signals, and hosts the supervisor that ties them together.

#![deny(unsafe_code)]

pub mod pidfile;
pub mod process;
pub mod supervisor;

// Re-export the supervisor entry points
pub use supervisor::{ConflictResolver, LifecycleRunner};

// Re-export OS adapters
pub use pidfile::{FilePidRecordHooks, PidFileStore};
pub use process::{NixProcessControl, TerminationProtocol, pid_exists, shutdown_child};

#[cfg(test)]
pub(crate) mod test_support {
    use mockall::mock;
    use svcguard_core::{Pid, ProcessControlPort, SignalError};

    mock! {
        pub Control {}

        impl ProcessControlPort for Control {
            fn is_alive(&self, pid: Pid) -> bool;
            fn terminate(&self, pid: Pid) -> Result<(), SignalError>;
            fn kill(&self, pid: Pid) -> Result<(), SignalError>;
        }
    }
}
