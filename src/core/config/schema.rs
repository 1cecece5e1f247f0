//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Location
//!
//! Searched in order:
//! 1. `$HGSHIM_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/hgshim/config.toml`
//! 3. `~/.hgshim/config.toml`
//!
//! # Validation
//!
//! Config values are validated after parsing. Message overrides must name a
//! key the translation engine can actually emit.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::intl::MessageKey;

/// User configuration.
///
/// # Example
///
/// ```toml
/// json = false
/// show_warnings = true
///
/// [messages]
/// "hg-a-option" = "No need for -A here, every change is committed."
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Emit JSON instead of text by default
    pub json: Option<bool>,

    /// Print advisory warnings alongside successful translations
    pub show_warnings: Option<bool>,

    /// Message text overrides, keyed by catalog key
    pub messages: Option<BTreeMap<String, String>>,
}

impl GlobalConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an unknown message key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(messages) = &self.messages {
            for key in messages.keys() {
                if key.parse::<MessageKey>().is_err() {
                    return Err(ConfigError::InvalidValue(format!(
                        "unknown message key '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}
