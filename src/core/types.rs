//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`Vcs`] - The command dialect a translation is expressed in
//! - [`CanonicalCommand`] - A Git command a translation may delegate to
//!
//! # Validation
//!
//! Canonical command names form a closed set. A delegated translation can only
//! name a command that the canonical command table actually provides.
//!
//! # Examples
//!
//! ```
//! use hgshim::core::types::{CanonicalCommand, Vcs};
//!
//! assert_eq!(Vcs::Git.as_str(), "git");
//! assert_eq!(CanonicalCommand::CherryPick.as_str(), "cherrypick");
//! assert_eq!("checkout".parse::<CanonicalCommand>().unwrap(), CanonicalCommand::Checkout);
//! assert!("status".parse::<CanonicalCommand>().is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Symbolic name of the current checked-out position in the canonical dialect.
pub const HEAD: &str = "HEAD";

/// Placeholder for the current checked-out position in the alternate dialect.
pub const DOT: &str = ".";

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("unknown canonical command: {0}")]
    UnknownCommand(String),
}

/// The dialect a delegated translation is expressed in.
///
/// Only the canonical dialect is a translation target; input lines are
/// always in the alternate one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vcs {
    Git,
}

impl Vcs {
    /// The invocation word that starts a line in this dialect.
    pub fn as_str(&self) -> &'static str {
        match self {
            Vcs::Git => "git",
        }
    }
}

impl fmt::Display for Vcs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A command in the canonical dialect that a translation can delegate to.
///
/// Names follow the canonical command table of the tutorial environment,
/// which spells cherry-pick without the hyphen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CanonicalCommand {
    Branch,
    Checkout,
    #[serde(rename = "cherrypick")]
    CherryPick,
    Commit,
    Log,
    Pull,
    Rebase,
    Revert,
    Show,
}

impl CanonicalCommand {
    /// All canonical commands, in name order.
    pub const ALL: [CanonicalCommand; 9] = [
        CanonicalCommand::Branch,
        CanonicalCommand::Checkout,
        CanonicalCommand::CherryPick,
        CanonicalCommand::Commit,
        CanonicalCommand::Log,
        CanonicalCommand::Pull,
        CanonicalCommand::Rebase,
        CanonicalCommand::Revert,
        CanonicalCommand::Show,
    ];

    /// The command name as registered in the canonical command table.
    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalCommand::Branch => "branch",
            CanonicalCommand::Checkout => "checkout",
            CanonicalCommand::CherryPick => "cherrypick",
            CanonicalCommand::Commit => "commit",
            CanonicalCommand::Log => "log",
            CanonicalCommand::Pull => "pull",
            CanonicalCommand::Rebase => "rebase",
            CanonicalCommand::Revert => "revert",
            CanonicalCommand::Show => "show",
        }
    }
}

impl fmt::Display for CanonicalCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CanonicalCommand {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CanonicalCommand::ALL
            .into_iter()
            .find(|cmd| cmd.as_str() == s)
            .ok_or_else(|| TypeError::UnknownCommand(s.to_string()))
    }
}
