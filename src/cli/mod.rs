//! cli
//!
//! Command-line interface layer for hgshim.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Load configuration and install logging
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and hands each line to
//! the [`crate::translate`] module. Rendering of message keys happens here,
//! through the configured [`Messages`] catalog.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use anyhow::{Context as _, Result};
use tracing_subscriber::EnvFilter;

use crate::core::config::Config;
use crate::intl::Messages;
use crate::ui::output::{self, Verbosity};

/// Settings shared by every command handler.
#[derive(Debug, Clone)]
pub struct Context {
    pub verbosity: Verbosity,
    /// Emit JSON instead of text.
    pub json: bool,
    /// Print advisory warnings for successful lines.
    pub show_warnings: bool,
    /// Catalog used to render message keys.
    pub messages: Messages,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::Normal,
            json: false,
            show_warnings: true,
            messages: Messages::default(),
        }
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    init_logging(cli.debug);

    let loaded = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    let verbosity = Verbosity::from_flags(cli.quiet, cli.debug);
    for warning in &loaded.warnings {
        output::warn(
            format!("{} ({})", warning.message, warning.path.display()),
            verbosity,
        );
    }

    // CLI flags take precedence over config.
    let config = loaded.config;
    match config.loaded_from() {
        Some(path) => tracing::debug!(path = %path.display(), "configuration loaded"),
        None => tracing::debug!("no configuration file, using defaults"),
    }
    let ctx = Context {
        verbosity,
        json: cli.json || config.json(),
        show_warnings: config.show_warnings(),
        messages: config.messages(),
    };

    commands::dispatch(cli.command, &ctx)
}

/// Install the tracing subscriber.
///
/// `--debug` enables debug output for this crate; otherwise `RUST_LOG` is
/// honored, defaulting to warnings only.
fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("hgshim=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A subscriber may already be installed when run from tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();
}
