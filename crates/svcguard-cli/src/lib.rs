//! Command-line adapter for the svcguard supervisor.
//!
//! Parses arguments, resolves configuration, and hands each command to a
//! handler in [`handlers`]. The `svcguard` binary in `main.rs` is a thin
//! wrapper around this library.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used only by the binary
use dotenvy as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod service;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, ConsoleSink, bootstrap};
pub use commands::{Commands, RunArgs};
pub use error::CliError;
pub use parser::Cli;
pub use service::{ChildConfig, CommandService};
