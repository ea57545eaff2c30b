//! Command handlers.
//!
//! Handlers follow one pattern: `execute(ctx, ...)` validates CLI-specific
//! input, calls into the runtime, and formats output for the terminal.
//! Supervision rules live in `svcguard-runtime`, not here.

pub mod paths;
pub mod run;
pub mod status;
pub mod stop;
