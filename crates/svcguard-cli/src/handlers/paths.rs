//! Paths command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;

/// Print where PID records live, in `key = value` format.
pub fn execute(ctx: &CliContext) -> Result<()> {
    let paths = ctx.store.paths();
    println!("project_root = {}", paths.project_root().display());
    println!("runtime_dir = {}", paths.runtime_dir().display());
    println!("pid_prefix = {}", paths.prefix());
    println!("term_timeout_ms = {}", ctx.settings.term_timeout_ms);
    println!("poll_interval_ms = {}", ctx.settings.poll_interval_ms);
    println!("settle_ms = {}", ctx.settings.settle_ms);
    Ok(())
}
