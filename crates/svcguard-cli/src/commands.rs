//! Top-level command definitions.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use svcguard_core::ServiceName;

/// Time left between the wrapped program's shutdown and an evicting
/// supervisor's SIGKILL, for reaping and releasing the record.
pub const CHILD_SHUTDOWN_MARGIN_MS: u64 = 500;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a program as the single instance of a service
    Run(RunArgs),

    /// Show recorded services and whether they are still running
    Status {
        /// Only show this service
        service: Option<ServiceName>,

        /// Print machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Stop a running service and discard its PID record
    Stop {
        /// Service to stop
        service: ServiceName,
    },

    /// Show the project root, runtime directory and PID file prefix
    Paths,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Service name to claim
    pub service: ServiceName,

    /// Sibling service to stop before starting (repeatable)
    #[arg(long = "conflicts-with", value_name = "SERVICE")]
    pub conflicts_with: Vec<ServiceName>,

    /// Also stop a previous instance of this same service
    #[arg(long)]
    pub replace: bool,

    /// Grace period for the program after SIGTERM, in milliseconds
    /// [default: termination timeout less 500 ms]
    #[arg(long = "grace-ms")]
    pub grace_ms: Option<u64>,

    /// Working directory for the program
    #[arg(long)]
    pub cwd: Option<PathBuf>,

    /// Program and arguments, after `--`
    #[arg(last = true, required = true, value_name = "COMMAND")]
    pub command: Vec<String>,
}
