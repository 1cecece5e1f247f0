//! translate::registry
//!
//! The ordered, immutable table of alternate-dialect command definitions.
//!
//! # Design
//!
//! Definitions are declared as static [`DefinitionSpec`] records and compiled
//! once into a [`CommandRegistry`]. Each record carries exactly one
//! [`Handler`]: a direct handler that calls the execution engine, or a
//! delegating handler that returns a [`CommandDescriptor`]. The enum makes a
//! definition with both, or with neither, unrepresentable.
//!
//! # Invariants
//!
//! - Registry order is match order. The first pattern that matches wins.
//! - The global registry is built on first use and never mutated.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use super::definitions;
use super::engine::ExecutionEngine;
use super::invocation::ParsedInvocation;
use super::report::TranslateError;
use crate::core::types::{CanonicalCommand, Vcs};

static GLOBAL: LazyLock<CommandRegistry> = LazyLock::new(|| {
    CommandRegistry::compile(definitions::HG_COMMANDS)
        .expect("built-in command patterns are valid regexes")
});

/// Errors from compiling a registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("invalid pattern for '{name}': {source}")]
    InvalidPattern {
        name: &'static str,
        source: regex::Error,
    },

    #[error("duplicate definition name: {0}")]
    DuplicateName(&'static str),
}

/// The canonical command a delegating handler resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommandDescriptor {
    pub vcs: Vcs,
    pub command: CanonicalCommand,
}

impl CommandDescriptor {
    /// Descriptor for a canonical-dialect command.
    pub fn git(command: CanonicalCommand) -> Self {
        Self {
            vcs: Vcs::Git,
            command,
        }
    }
}

/// Direct handler: validates, then performs its effect through the engine.
pub type ExecuteFn =
    for<'r> fn(&mut dyn ExecutionEngine, &mut ParsedInvocation<'r>) -> Result<(), TranslateError>;

/// Delegating handler: validates and rewrites, then names a canonical command.
pub type DelegateFn =
    for<'r> fn(&mut ParsedInvocation<'r>) -> Result<CommandDescriptor, TranslateError>;

/// The single handler a definition carries.
#[derive(Clone, Copy)]
pub enum Handler {
    Execute(ExecuteFn),
    Delegate(DelegateFn),
}

impl Handler {
    pub fn is_direct(&self) -> bool {
        matches!(self, Handler::Execute(_))
    }

    pub fn is_delegating(&self) -> bool {
        matches!(self, Handler::Delegate(_))
    }

    /// Short tag for listings.
    pub fn kind(&self) -> &'static str {
        match self {
            Handler::Execute(_) => "direct",
            Handler::Delegate(_) => "delegate",
        }
    }
}

impl std::fmt::Debug for Handler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.kind())
    }
}

/// Static declaration of one command definition.
#[derive(Debug, Clone, Copy)]
pub struct DefinitionSpec {
    pub name: &'static str,
    /// Regex matched against the whole trimmed line.
    pub pattern: &'static str,
    /// Flags the option parser recognizes for this command.
    pub options: &'static [&'static str],
    /// Excluded from level scoring.
    pub exempt_from_golf: bool,
    pub handler: Handler,
}

/// A compiled command definition.
#[derive(Debug)]
pub struct CommandDefinition {
    spec: DefinitionSpec,
    regex: Regex,
}

impl CommandDefinition {
    /// Compile a definition from its static declaration.
    pub fn compile(spec: DefinitionSpec) -> Result<Self, RegistryError> {
        let regex = Regex::new(spec.pattern).map_err(|source| RegistryError::InvalidPattern {
            name: spec.name,
            source,
        })?;
        Ok(Self { spec, regex })
    }

    pub fn name(&self) -> &'static str {
        self.spec.name
    }

    pub fn pattern(&self) -> &'static str {
        self.spec.pattern
    }

    pub fn options(&self) -> &'static [&'static str] {
        self.spec.options
    }

    pub fn exempt_from_golf(&self) -> bool {
        self.spec.exempt_from_golf
    }

    pub fn handler(&self) -> Handler {
        self.spec.handler
    }

    /// If the line matches, the byte offset where the arguments begin.
    pub fn match_end(&self, line: &str) -> Option<usize> {
        self.regex.find(line).map(|m| m.end())
    }
}

/// Ordered collection of command definitions.
#[derive(Debug)]
pub struct CommandRegistry {
    definitions: Vec<CommandDefinition>,
}

impl CommandRegistry {
    /// Compile a registry from static declarations, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns an error if a pattern does not compile or a name repeats.
    pub fn compile(specs: &[DefinitionSpec]) -> Result<Self, RegistryError> {
        let mut definitions: Vec<CommandDefinition> = Vec::with_capacity(specs.len());
        for spec in specs {
            if definitions.iter().any(|d| d.name() == spec.name) {
                return Err(RegistryError::DuplicateName(spec.name));
            }
            definitions.push(CommandDefinition::compile(*spec)?);
        }
        tracing::debug!(count = definitions.len(), "compiled command registry");
        Ok(Self { definitions })
    }

    /// The process-wide registry of built-in definitions.
    pub fn global() -> &'static CommandRegistry {
        &GLOBAL
    }

    /// Definitions in match order.
    pub fn iter(&self) -> impl Iterator<Item = &CommandDefinition> {
        self.definitions.iter()
    }

    /// Look up a definition by name.
    pub fn get(&self, name: &str) -> Option<&CommandDefinition> {
        self.definitions.iter().find(|d| d.name() == name)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn never(_: &mut ParsedInvocation<'_>) -> Result<CommandDescriptor, TranslateError> {
        Ok(CommandDescriptor::git(CanonicalCommand::Log))
    }

    fn spec(name: &'static str, pattern: &'static str) -> DefinitionSpec {
        DefinitionSpec {
            name,
            pattern,
            options: &[],
            exempt_from_golf: false,
            handler: Handler::Delegate(never),
        }
    }

    #[test]
    fn global_registry_compiles() {
        let registry = CommandRegistry::global();
        assert_eq!(registry.len(), definitions::HG_COMMANDS.len());
        assert!(!registry.is_empty());
    }

    #[test]
    fn every_definition_has_exactly_one_handler_kind() {
        for def in CommandRegistry::global().iter() {
            let handler = def.handler();
            assert_ne!(
                handler.is_direct(),
                handler.is_delegating(),
                "{} must be direct xor delegating",
                def.name()
            );
        }
    }

    #[test]
    fn order_is_declaration_order() {
        let names: Vec<_> = CommandRegistry::global().iter().map(|d| d.name()).collect();
        let declared: Vec<_> = definitions::HG_COMMANDS.iter().map(|s| s.name).collect();
        assert_eq!(names, declared);
    }

    #[test]
    fn direct_definitions() {
        let registry = CommandRegistry::global();
        let direct: Vec<_> = registry
            .iter()
            .filter(|d| d.handler().is_direct())
            .map(|d| d.name())
            .collect();
        assert_eq!(direct, vec!["status", "rebase"]);
    }

    #[test]
    fn golf_exempt_definitions() {
        let registry = CommandRegistry::global();
        let exempt: Vec<_> = registry
            .iter()
            .filter(|d| d.exempt_from_golf())
            .map(|d| d.name())
            .collect();
        assert_eq!(exempt, vec!["status", "export", "log"]);
    }

    #[test]
    fn invalid_pattern_is_reported() {
        let err = CommandRegistry::compile(&[spec("broken", "^hg +(")]).unwrap_err();
        assert!(matches!(err, RegistryError::InvalidPattern { name: "broken", .. }));
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let err =
            CommandRegistry::compile(&[spec("a", "^hg +a$"), spec("a", "^hg +b$")]).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateName("a")));
    }

    #[test]
    fn match_end_points_past_command_word() {
        let registry = CommandRegistry::global();
        let commit = registry.get("commit").unwrap();
        assert_eq!(commit.match_end("hg ci -m"), Some(6));
        assert_eq!(commit.match_end("hg commit"), Some(9));
        assert_eq!(commit.match_end("hg commits"), None);
    }

    #[test]
    fn descriptor_serializes() {
        let desc = CommandDescriptor::git(CanonicalCommand::CherryPick);
        assert_eq!(
            serde_json::to_string(&desc).unwrap(),
            r#"{"vcs":"git","command":"cherrypick"}"#
        );
    }
}
