//! translate::report
//!
//! Typed failures and non-fatal advisories for a single translation.
//!
//! # Channels
//!
//! - A terminal [`TranslateError`], at most one per line. It ends processing
//!   of that line only; the registry and later lines are unaffected.
//! - Zero or more [`Warning`]s collected by a [`Reporter`] in insertion order.
//!   Warnings ride along with a successful result.
//!
//! Both carry a [`Message`] so the caller decides how to render them.

use serde::Serialize;
use thiserror::Error;

use super::engine::EngineError;
use crate::intl::{Message, MessageKey};

/// Classification tag for a [`TranslateError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    UnrecognizedCommand,
    UnsupportedOperation,
    IncompatibleOptions,
    MissingRequiredOption,
    ArgumentCountViolation,
    EngineFailure,
}

impl ErrorKind {
    /// Stable tag string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::UnrecognizedCommand => "unrecognized_command",
            ErrorKind::UnsupportedOperation => "unsupported_operation",
            ErrorKind::IncompatibleOptions => "incompatible_options",
            ErrorKind::MissingRequiredOption => "missing_required_option",
            ErrorKind::ArgumentCountViolation => "argument_count_violation",
            ErrorKind::EngineFailure => "engine_failure",
        }
    }
}

/// Terminal failure for one input line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    /// No registry entry matched the line.
    #[error("{0}")]
    UnrecognizedCommand(Message),

    /// A definition matched but the dialect has no mapping for it.
    #[error("{0}")]
    UnsupportedOperation(Message),

    /// Two or more mutually exclusive flags were given.
    #[error("{0}")]
    IncompatibleOptions(Message),

    /// A flag needed for disambiguation is absent.
    #[error("{0}")]
    MissingRequiredOption(Message),

    /// Argument count outside the declared bounds.
    #[error("{0}")]
    ArgumentCountViolation(Message),

    /// The execution engine rejected a direct operation.
    #[error("{0}")]
    Engine(Message),
}

impl TranslateError {
    /// The classification tag.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TranslateError::UnrecognizedCommand(_) => ErrorKind::UnrecognizedCommand,
            TranslateError::UnsupportedOperation(_) => ErrorKind::UnsupportedOperation,
            TranslateError::IncompatibleOptions(_) => ErrorKind::IncompatibleOptions,
            TranslateError::MissingRequiredOption(_) => ErrorKind::MissingRequiredOption,
            TranslateError::ArgumentCountViolation(_) => ErrorKind::ArgumentCountViolation,
            TranslateError::Engine(_) => ErrorKind::EngineFailure,
        }
    }

    /// The message to render for this failure.
    pub fn message(&self) -> &Message {
        match self {
            TranslateError::UnrecognizedCommand(m)
            | TranslateError::UnsupportedOperation(m)
            | TranslateError::IncompatibleOptions(m)
            | TranslateError::MissingRequiredOption(m)
            | TranslateError::ArgumentCountViolation(m)
            | TranslateError::Engine(m) => m,
        }
    }

    pub(crate) fn unrecognized(line: &str) -> Self {
        TranslateError::UnrecognizedCommand(
            Message::new(MessageKey::CommandNotSupported).with("command", line),
        )
    }

    pub(crate) fn incompatible(first: &str, second: &str) -> Self {
        TranslateError::IncompatibleOptions(
            Message::new(MessageKey::OptionsIncompatible)
                .with("first", first)
                .with("second", second),
        )
    }

    pub(crate) fn option_required(option: &str, command: &str) -> Self {
        TranslateError::MissingRequiredOption(
            Message::new(MessageKey::OptionRequired)
                .with("option", option)
                .with("command", command),
        )
    }
}

impl From<EngineError> for TranslateError {
    fn from(err: EngineError) -> Self {
        TranslateError::Engine(
            Message::new(MessageKey::EngineFailure).with("message", err.to_string()),
        )
    }
}

/// A non-fatal advisory attached to an invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Warning(pub Message);

impl Warning {
    pub fn message(&self) -> &Message {
        &self.0
    }
}

/// Collects the warnings raised while translating one line.
#[derive(Debug, Clone, Default)]
pub struct Reporter {
    warnings: Vec<Warning>,
}

impl Reporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an advisory. Never aborts processing.
    pub fn warn(&mut self, message: Message) {
        tracing::debug!(key = %message.key, "advisory warning");
        self.warnings.push(Warning(message));
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn into_warnings(self) -> Vec<Warning> {
        self.warnings
    }
}
