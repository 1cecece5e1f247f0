//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Feeds lines to the [`crate::translate::Translator`]
//! 2. Renders results through the configured message catalog
//! 3. Formats and displays output, as text or JSON
//!
//! Handlers never touch a repository; direct commands run against a
//! [`crate::translate::RecordingEngine`] and report what they did.

mod completion;
mod list;
mod repl;
mod translate;

pub use completion::completion;
pub use list::list;
pub use repl::repl;
pub use translate::translate;

use anyhow::Result;

use crate::cli::args::Command;
use crate::cli::Context;

/// Dispatch a parsed command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    tracing::debug!(?command, json = ctx.json, "dispatching");
    match command {
        Command::Translate { line } => translate(ctx, &line),
        Command::Repl => repl(ctx),
        Command::List => list(ctx),
        Command::Completion { shell } => completion(shell),
    }
}
