//! CLI composition root.
//!
//! Resolves paths and timing from the parsed arguments and wires the
//! runtime adapters into a [`CliContext`] shared by every handler.

use std::sync::Arc;

use svcguard_core::{
    DiagnosticSink, ProcessControlPort, SupervisorPaths, SupervisorSettings, ensure_directory,
    resolve_project_root, validate_settings,
};
use svcguard_runtime::{LifecycleRunner, NixProcessControl, PidFileStore};
use tracing::debug;

use crate::error::CliError;
use crate::parser::Cli;

/// Resolved configuration for one CLI invocation.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub paths: SupervisorPaths,
    pub settings: SupervisorSettings,
}

impl CliConfig {
    /// Resolve the project root and validate timing options.
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let root = resolve_project_root(cli.project_root.as_deref())?;
        let paths = SupervisorPaths::new(root, cli.prefix.clone())?;

        let settings = SupervisorSettings {
            term_timeout_ms: cli.term_timeout_ms,
            poll_interval_ms: cli.poll_interval_ms,
            settle_ms: cli.settle_ms,
        };
        validate_settings(&settings)?;

        Ok(Self { paths, settings })
    }
}

/// Writes diagnostics straight to stderr as they are produced.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl DiagnosticSink for ConsoleSink {
    fn emit(&self, line: &str) {
        eprintln!("{line}");
    }
}

/// Everything a command handler needs.
pub struct CliContext {
    pub store: PidFileStore,
    pub control: Arc<dyn ProcessControlPort>,
    pub runner: LifecycleRunner,
    pub settings: SupervisorSettings,
}

/// Build the CLI context from resolved configuration.
pub fn bootstrap(config: CliConfig) -> Result<CliContext, CliError> {
    ensure_directory(&config.paths.runtime_dir())?;
    debug!(
        "Using runtime directory {}",
        config.paths.runtime_dir().display()
    );

    let store = PidFileStore::new(config.paths);
    let control: Arc<dyn ProcessControlPort> = Arc::new(NixProcessControl::new());
    let runner = LifecycleRunner::new(store.clone(), Arc::clone(&control), config.settings)
        .with_sink(Arc::new(ConsoleSink));

    Ok(CliContext {
        store,
        control,
        runner,
        settings: config.settings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("svcguard").chain(args.iter().copied()))
    }

    #[test]
    fn config_uses_explicit_project_root() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().to_str().unwrap();
        let cli = parse(&["--project-root", root, "--prefix", "acme", "paths"]);

        let config = CliConfig::from_cli(&cli).unwrap();

        assert_eq!(config.paths.project_root(), tmp.path());
        assert_eq!(config.paths.prefix(), "acme");
        assert_eq!(config.paths.runtime_dir(), tmp.path().join("var/run"));
    }

    #[test]
    fn zero_poll_interval_is_a_config_error() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().to_str().unwrap();
        let cli = parse(&["--project-root", root, "--poll-interval-ms", "0", "paths"]);

        let err = CliConfig::from_cli(&cli).unwrap_err();

        assert_eq!(err.exit_code(), 78);
    }

    #[test]
    fn bootstrap_creates_runtime_dir() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().to_str().unwrap();
        let config = CliConfig::from_cli(&parse(&["--project-root", root, "paths"])).unwrap();

        let ctx = bootstrap(config).unwrap();

        assert!(ctx.store.runtime_dir().is_dir());
    }
}
