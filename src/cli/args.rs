//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output
//! - `--json`: Machine-readable output
//! - `--config <path>`: Use this config file instead of the default locations

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// hgshim - Translate Mercurial-style commands into Git commands
#[derive(Parser, Debug)]
#[command(name = "hgshim")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output; warnings are suppressed
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Emit one JSON object per translated line
    #[arg(long, global = true)]
    pub json: bool,

    /// Read configuration from this file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Translate a single hg command line
    #[command(
        name = "translate",
        long_about = "Translate a single Mercurial-style command line.\n\n\
            The line must start with `hg`. Delegated commands print the equivalent \
            git command line; direct commands print the engine operation they \
            performed. Unsupported or invalid lines exit with a non-zero status.",
        after_help = "\
EXAMPLES:
    hgshim translate hg bookmark -r C1 feature
        git branch feature C1

    hgshim translate 'hg histedit C2'
        git rebase -i C2

    hgshim --json translate hg commit -A"
    )]
    Translate {
        /// The command line; words are joined with single spaces
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true, trailing_var_arg = true)]
        line: Vec<String>,
    },

    /// Translate lines read from standard input, one per line
    #[command(
        name = "repl",
        long_about = "Read hg command lines from standard input and translate each one.\n\n\
            A failing line is reported and the loop continues with the next line. \
            Blank lines and lines starting with '#' are skipped."
    )]
    Repl,

    /// List the recognized hg commands
    #[command(name = "list")]
    List,

    /// Generate shell completion scripts
    #[command(name = "completion")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn translate_keeps_hyphen_words() {
        let cli = Cli::try_parse_from(["hgshim", "translate", "hg", "commit", "-A", "-m"]).unwrap();
        match cli.command {
            Command::Translate { line } => assert_eq!(line, vec!["hg", "commit", "-A", "-m"]),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn global_flags_before_subcommand() {
        let cli = Cli::try_parse_from(["hgshim", "--json", "-q", "list"]).unwrap();
        assert!(cli.json);
        assert!(cli.quiet);
        assert!(!cli.debug);
        assert!(matches!(cli.command, Command::List));
    }

    #[test]
    fn translate_requires_a_line() {
        assert!(Cli::try_parse_from(["hgshim", "translate"]).is_err());
    }
}
