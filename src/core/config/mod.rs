//! core::config
//!
//! Configuration schema and loading.
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Config file
//! 3. CLI flags (not handled here)
//!
//! # Config Locations
//!
//! An explicit path (`--config`) is used as given and must exist. Otherwise
//! the first existing file wins:
//! 1. `$HGSHIM_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/hgshim/config.toml`
//! 3. `~/.hgshim/config.toml`
//!
//! # Example
//!
//! ```no_run
//! use hgshim::core::config::Config;
//!
//! let result = Config::load(None).unwrap();
//! let config = result.config;
//!
//! println!("JSON output: {}", config.json());
//! println!("Show warnings: {}", config.show_warnings());
//! ```

pub mod schema;

pub use schema::GlobalConfig;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::intl::{MessageKey, Messages};

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Warnings generated during config loading.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    /// The warning message.
    pub message: String,
    /// The path that triggered the warning.
    pub path: PathBuf,
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    /// The loaded configuration.
    pub config: Config,
    /// Any warnings generated during loading.
    pub warnings: Vec<ConfigWarning>,
}

/// Loaded configuration with defaults applied by the accessors.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub global: GlobalConfig,
    /// Path to the config file (if loaded)
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be parsed or
    /// validated, or if an explicit path cannot be read. A missing default
    /// config file is not an error.
    pub fn load(explicit: Option<&Path>) -> Result<ConfigLoadResult, ConfigError> {
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => Self::find_default(),
        };

        let Some(path) = path else {
            tracing::debug!("no config file found, using defaults");
            return Ok(ConfigLoadResult {
                config: Config::default(),
                warnings: Vec::new(),
            });
        };

        let global = Self::read_config(&path)?;
        global.validate()?;

        let mut warnings = Vec::new();
        if let Some(messages) = &global.messages {
            for (key, text) in messages {
                if text.trim().is_empty() {
                    warnings.push(ConfigWarning {
                        message: format!(
                            "message override for '{}' is empty; using the built-in text",
                            key
                        ),
                        path: path.clone(),
                    });
                }
            }
        }

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(ConfigLoadResult {
            config: Config {
                global,
                path: Some(path),
            },
            warnings,
        })
    }

    /// The first existing default config location.
    fn find_default() -> Option<PathBuf> {
        // 1. Check $HGSHIM_CONFIG
        if let Ok(path) = std::env::var("HGSHIM_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        // 2. Check $XDG_CONFIG_HOME/hgshim/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("hgshim/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        // 3. Check ~/.hgshim/config.toml
        dirs::home_dir()
            .map(|home| home.join(".hgshim/config.toml"))
            .filter(|path| path.exists())
    }

    /// Read and parse a config file.
    fn read_config(path: &Path) -> Result<GlobalConfig, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    // =========================================================================
    // Accessor methods with defaults
    // =========================================================================

    /// Check if JSON output is the default.
    ///
    /// Defaults to `false` if not configured.
    pub fn json(&self) -> bool {
        self.global.json.unwrap_or(false)
    }

    /// Check if warnings are shown.
    ///
    /// Defaults to `true` if not configured.
    pub fn show_warnings(&self) -> bool {
        self.global.show_warnings.unwrap_or(true)
    }

    /// Build the message catalog, applying non-empty overrides.
    pub fn messages(&self) -> Messages {
        let overrides: BTreeMap<MessageKey, String> = self
            .global
            .messages
            .iter()
            .flatten()
            .filter(|(_, text)| !text.trim().is_empty())
            .filter_map(|(key, text)| key.parse().ok().map(|key| (key, text.clone())))
            .collect();
        Messages::with_overrides(overrides)
    }

    /// Get the path to the loaded config file.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
