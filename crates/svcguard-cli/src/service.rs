//! Wrapping an external program as a supervised service.

use std::path::PathBuf;
use std::process::ExitStatus;
use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use svcguard_core::{FAILURE_STATUS, SUCCESS_STATUS, ServiceDescriptor, SupervisedService};
use svcguard_runtime::shutdown_child;
use tokio::process::Command;
use tracing::info;

use crate::error::CliError;

/// How the wrapped program is launched and stopped.
#[derive(Debug, Clone)]
pub struct ChildConfig {
    pub working_dir: Option<PathBuf>,
    pub shutdown_grace: Duration,
}

/// Runs a program until it exits or the supervisor is asked to stop.
///
/// On SIGTERM or Ctrl-C the program is given `shutdown_grace` to exit
/// before it is killed; a program that dies from that SIGTERM counts as a
/// clean stop.
#[derive(Debug)]
pub struct CommandService {
    descriptor: ServiceDescriptor,
    program: String,
    args: Vec<String>,
}

impl CommandService {
    pub fn new(descriptor: ServiceDescriptor, command: Vec<String>) -> Result<Self, CliError> {
        let mut parts = command.into_iter();
        let program = parts
            .next()
            .ok_or_else(|| CliError::Arguments("no program given after `--`".to_string()))?;
        Ok(Self {
            descriptor,
            program,
            args: parts.collect(),
        })
    }
}

#[async_trait]
impl SupervisedService for CommandService {
    type Config = ChildConfig;

    fn descriptor(&self) -> &ServiceDescriptor {
        &self.descriptor
    }

    async fn start(&self, config: &ChildConfig) -> anyhow::Result<i32> {
        // Listen before the child exists, so an early SIGTERM is forwarded
        let mut shutdown =
            ShutdownListener::install().context("listening for shutdown signals")?;

        let mut std_command = std::process::Command::new(&self.program);
        std_command.args(&self.args);
        #[cfg(unix)]
        {
            // Own process group, so shutdown reaches the program's whole tree
            use std::os::unix::process::CommandExt;
            std_command.process_group(0);
        }

        let mut command = Command::from(std_command);
        command.kill_on_drop(true);
        if let Some(dir) = &config.working_dir {
            command.current_dir(dir);
        }

        let mut child = command
            .spawn()
            .with_context(|| format!("spawning '{}'", self.program))?;
        info!(
            "Started {} for {} (PID {:?})",
            self.program,
            self.descriptor.name,
            child.id()
        );

        tokio::select! {
            status = child.wait() => {
                let status = status.context("waiting for child")?;
                Ok(exit_code(status))
            }
            signal = shutdown.recv() => {
                signal.context("listening for shutdown signals")?;
                info!("Shutdown requested, stopping {}", self.program);
                let status = shutdown_child(&mut child, config.shutdown_grace)
                    .await
                    .context("stopping child")?;
                Ok(stopped_code(status))
            }
        }
    }
}

/// SIGTERM and SIGINT handlers, registered for the lifetime of the run.
struct ShutdownListener {
    #[cfg(unix)]
    terminate: tokio::signal::unix::Signal,
    #[cfg(unix)]
    interrupt: tokio::signal::unix::Signal,
}

impl ShutdownListener {
    fn install() -> std::io::Result<Self> {
        #[cfg(unix)]
        {
            use tokio::signal::unix::{SignalKind, signal};

            Ok(Self {
                terminate: signal(SignalKind::terminate())?,
                interrupt: signal(SignalKind::interrupt())?,
            })
        }

        #[cfg(not(unix))]
        {
            Ok(Self {})
        }
    }

    async fn recv(&mut self) -> std::io::Result<()> {
        #[cfg(unix)]
        {
            tokio::select! {
                _ = self.terminate.recv() => {}
                _ = self.interrupt.recv() => {}
            }
            Ok(())
        }

        #[cfg(not(unix))]
        {
            tokio::signal::ctrl_c().await
        }
    }
}

/// Shell convention: exit code if any, otherwise 128 + terminating signal.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    FAILURE_STATUS
}

fn stopped_code(status: ExitStatus) -> i32 {
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if status.signal() == Some(nix::sys::signal::Signal::SIGTERM as i32) {
            return SUCCESS_STATUS;
        }
    }
    exit_code(status)
}
