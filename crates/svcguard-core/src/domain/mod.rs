//! Domain types shared by the supervisor and its adapters.
//!
//! These are plain data types with no I/O. Validation happens at
//! construction, so a `ServiceName` or `Pid` that exists is always usable
//! as a file name component or a signal target.

mod lifecycle;
mod outcome;
mod pid;
mod service;
mod status;

pub use lifecycle::{FAILURE_STATUS, LifecycleReport, LifecycleStage, SUCCESS_STATUS};
pub use outcome::{ConflictOutcome, ConflictReport, TerminationOutcome};
pub use pid::{Pid, PidParseError};
pub use service::{ServiceDescriptor, ServiceName, ServiceNameError};
pub use status::{RecordState, RecordStatus};
