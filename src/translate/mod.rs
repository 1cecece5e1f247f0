//! translate
//!
//! Turns a Mercurial-style line into a canonical Git operation.
//!
//! # Pipeline
//!
//! ```text
//! raw line -> match (registry order) -> parse options -> handler -> outcome
//! ```
//!
//! A handler either performs its effect through the [`ExecutionEngine`]
//! (direct) or names a canonical command (delegating). A delegated outcome
//! carries the rewritten options and general arguments; the caller
//! re-dispatches them through the canonical command's own path.
//!
//! # Invariants
//!
//! - First match wins; the registry is never mutated after startup.
//! - Validation completes before any engine call, so a failed line has no
//!   side effects.
//! - A failure ends the current line only.
//!
//! # Example
//!
//! ```
//! use hgshim::core::types::CanonicalCommand;
//! use hgshim::translate::{Outcome, Translator};
//! use hgshim::translate::engine::RecordingEngine;
//!
//! let translator = Translator::new();
//! let mut engine = RecordingEngine::new();
//!
//! let translation = translator.translate("hg bookmark -d oldname", &mut engine).unwrap();
//! match &translation.outcome {
//!     Outcome::Delegated { descriptor, options, .. } => {
//!         assert_eq!(descriptor.command, CanonicalCommand::Branch);
//!         assert_eq!(options["-D"], vec!["oldname".to_string()]);
//!     }
//!     Outcome::Executed => unreachable!(),
//! }
//! assert_eq!(translation.to_command_line().as_deref(), Some("git branch -D oldname"));
//! ```

pub mod definitions;
pub mod engine;
pub mod invocation;
pub mod matcher;
pub mod options;
pub mod registry;
pub mod report;

pub use engine::{EngineCall, EngineError, ExecutionEngine, RecordingEngine};
pub use invocation::ParsedInvocation;
pub use matcher::match_line;
pub use options::{parse_options, tokenize, OptionMap, ParsedOptions};
pub use registry::{CommandDefinition, CommandDescriptor, CommandRegistry, Handler};
pub use report::{ErrorKind, Reporter, TranslateError, Warning};

use serde::Serialize;

/// What a translated line resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Outcome {
    /// A direct handler performed its effect through the engine.
    Executed,

    /// A delegating handler named a canonical command.
    Delegated {
        descriptor: CommandDescriptor,
        options: OptionMap,
        general_args: Vec<String>,
    },
}

/// A successfully translated line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Translation {
    /// Name of the matched definition.
    pub command: &'static str,
    /// Whether the command is excluded from level scoring.
    pub exempt_from_golf: bool,
    pub outcome: Outcome,
    /// Advisories raised along the way, in order.
    pub warnings: Vec<Warning>,
}

impl Translation {
    /// The delegated canonical command as a single command line.
    ///
    /// Flags come first in map order, each followed by its arguments, then
    /// the general arguments. Returns `None` for direct outcomes.
    pub fn to_command_line(&self) -> Option<String> {
        let Outcome::Delegated {
            descriptor,
            options,
            general_args,
        } = &self.outcome
        else {
            return None;
        };

        let mut parts = vec![
            descriptor.vcs.as_str().to_string(),
            descriptor.command.as_str().to_string(),
        ];
        for (flag, args) in options {
            parts.push(flag.clone());
            parts.extend(args.iter().cloned());
        }
        parts.extend(general_args.iter().cloned());
        Some(parts.join(" "))
    }
}

/// Resolves lines against a registry.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'r> {
    registry: &'r CommandRegistry,
}

impl Default for Translator<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl Translator<'static> {
    /// Translator over the built-in registry.
    pub fn new() -> Self {
        Self {
            registry: CommandRegistry::global(),
        }
    }
}

impl<'r> Translator<'r> {
    /// Translator over a custom registry.
    pub fn with_registry(registry: &'r CommandRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'r CommandRegistry {
        self.registry
    }

    /// Translate one line.
    ///
    /// # Errors
    ///
    /// Any [`TranslateError`]; the engine is untouched unless every check for
    /// the line passed.
    pub fn translate(
        &self,
        line: &str,
        engine: &mut dyn ExecutionEngine,
    ) -> Result<Translation, TranslateError> {
        let mut inv = match_line(self.registry, line)?;
        let definition = inv.definition();

        let resolved = match definition.handler() {
            Handler::Execute(execute) => execute(engine, &mut inv).map(|()| None),
            Handler::Delegate(delegate) => delegate(&mut inv).map(Some),
        };
        let descriptor = resolved.inspect_err(|err| {
            tracing::debug!(
                command = definition.name(),
                kind = err.kind().as_str(),
                "handler rejected line"
            );
        })?;

        let (options, general_args, reporter) = inv.into_parts();
        let outcome = match descriptor {
            Some(descriptor) => Outcome::Delegated {
                descriptor,
                options,
                general_args,
            },
            None => Outcome::Executed,
        };

        Ok(Translation {
            command: definition.name(),
            exempt_from_golf: definition.exempt_from_golf(),
            outcome,
            warnings: reporter.into_warnings(),
        })
    }
}
