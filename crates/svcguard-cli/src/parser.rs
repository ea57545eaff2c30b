//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options. Every
//! global option can also come from an environment variable (or `.env`).

use clap::Parser;
use svcguard_core::DEFAULT_PID_PREFIX;
use svcguard_core::settings::{DEFAULT_POLL_INTERVAL_MS, DEFAULT_SETTLE_MS, DEFAULT_TERM_TIMEOUT_MS};

use crate::commands::Commands;

/// Command-line interface for the single-instance service supervisor.
#[derive(Parser)]
#[command(name = "svcguard")]
#[command(about = "Run long-lived services as a single instance per host")]
#[command(version)]
pub struct Cli {
    /// Project root; PID records live in <project-root>/var/run
    #[arg(long = "project-root", env = "SVCGUARD_PROJECT_ROOT", global = true)]
    pub project_root: Option<String>,

    /// Prefix for PID file names
    #[arg(long, env = "SVCGUARD_PID_PREFIX", default_value = DEFAULT_PID_PREFIX, global = true)]
    pub prefix: String,

    /// Grace period after SIGTERM before SIGKILL, in milliseconds
    #[arg(long = "term-timeout-ms", env = "SVCGUARD_TERM_TIMEOUT_MS", default_value_t = DEFAULT_TERM_TIMEOUT_MS, global = true)]
    pub term_timeout_ms: u64,

    /// Interval between liveness probes during the grace period, in milliseconds
    #[arg(long = "poll-interval-ms", env = "SVCGUARD_POLL_INTERVAL_MS", default_value_t = DEFAULT_POLL_INTERVAL_MS, global = true)]
    pub poll_interval_ms: u64,

    /// Pause after a process exits before continuing, in milliseconds
    #[arg(long = "settle-ms", env = "SVCGUARD_SETTLE_MS", default_value_t = DEFAULT_SETTLE_MS, global = true)]
    pub settle_ms: u64,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
