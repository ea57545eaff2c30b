//! Point-in-time view of a PID record, used by status listings.

use serde::Serialize;

use super::{Pid, ServiceName};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordState {
    /// The recorded process answers the liveness probe.
    Running,
    /// The recorded process is gone; the next supervisor run discards it.
    Stale,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordStatus {
    pub service: ServiceName,
    pub pid: Pid,
    pub state: RecordState,
}
