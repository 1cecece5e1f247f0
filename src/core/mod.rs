//! core
//!
//! Core domain types and configuration for hgshim.
//!
//! # Modules
//!
//! - [`types`] - Canonical commands, version-control systems, shared constants
//! - [`config`] - Configuration schema and loading

pub mod config;
pub mod types;
