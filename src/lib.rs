//! hgshim - Translate Mercurial-style commands into Git operations
//!
//! hgshim takes a line written in the `hg` dialect, matches it against an
//! ordered registry of command definitions, and either performs the effect
//! through an execution engine or names the canonical Git command (with
//! rewritten options and arguments) that should run instead.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to translate)
//! - [`translate`] - Registry, option parser, handlers, and error reporting
//! - [`intl`] - Message keys and the catalog that renders them
//! - [`core`] - Domain types and configuration
//! - [`ui`] - Output utilities
//!
//! # Correctness Invariants
//!
//! 1. The first matching definition handles a line
//! 2. Every check for a line completes before any engine call
//! 3. A failed line never affects the next one

pub mod cli;
pub mod core;
pub mod intl;
pub mod translate;
pub mod ui;
