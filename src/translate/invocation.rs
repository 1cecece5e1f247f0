//! translate::invocation
//!
//! The structured form of one input line and the helpers handlers use on it.
//!
//! # Lifetime
//!
//! A [`ParsedInvocation`] is created by the matcher for a single line, handed
//! to exactly one handler by `&mut`, and discarded after dispatch. Handlers
//! may rewrite the option map and general arguments freely; the final state
//! is what a delegated translation reports to the caller.

use std::fmt;

use super::options::{OptionMap, ParsedOptions};
use super::registry::CommandDefinition;
use super::report::{Reporter, TranslateError};
use crate::core::types::{DOT, HEAD};
use crate::intl::{Message, MessageKey};

/// One matched input line.
pub struct ParsedInvocation<'r> {
    definition: &'r CommandDefinition,
    options: OptionMap,
    general_args: Vec<String>,
    reporter: Reporter,
}

impl fmt::Debug for ParsedInvocation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParsedInvocation")
            .field("command", &self.definition.name())
            .field("options", &self.options)
            .field("general_args", &self.general_args)
            .field("warnings", &self.reporter.warnings())
            .finish()
    }
}

impl<'r> ParsedInvocation<'r> {
    pub fn new(definition: &'r CommandDefinition, parsed: ParsedOptions) -> Self {
        Self {
            definition,
            options: parsed.options,
            general_args: parsed.general_args,
            reporter: Reporter::new(),
        }
    }

    /// The definition this line matched.
    pub fn definition(&self) -> &'r CommandDefinition {
        self.definition
    }

    pub fn options(&self) -> &OptionMap {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut OptionMap {
        &mut self.options
    }

    /// Replace the option map wholesale.
    pub fn set_options(&mut self, options: OptionMap) {
        self.options = options;
    }

    /// Whether a flag was given, with or without arguments.
    pub fn has_option(&self, flag: &str) -> bool {
        self.options.contains_key(flag)
    }

    /// Arguments of a flag, empty when the flag is absent.
    pub fn option_args(&self, flag: &str) -> &[String] {
        self.options.get(flag).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Remove a flag, returning its arguments if it was present.
    pub fn take_option(&mut self, flag: &str) -> Option<Vec<String>> {
        self.options.remove(flag)
    }

    pub fn general_args(&self) -> &[String] {
        &self.general_args
    }

    pub fn set_general_args(&mut self, args: Vec<String>) {
        self.general_args = args;
    }

    /// Require `min <= general_args.len() <= max`.
    ///
    /// # Errors
    ///
    /// `ArgumentCountViolation` when the count falls outside the bounds.
    pub fn validate_arg_bounds(&self, min: usize, max: usize) -> Result<(), TranslateError> {
        let what = format!("with hg {}", self.definition.name());
        check_bounds(self.general_args.len(), min, max, what)
    }

    /// Require a flag's argument count to lie within `[min, max]`.
    ///
    /// An absent flag counts as zero arguments.
    pub fn validate_option_bounds(
        &self,
        flag: &str,
        min: usize,
        max: usize,
    ) -> Result<(), TranslateError> {
        let what = format!("with hg {} {}", self.definition.name(), flag);
        check_bounds(self.option_args(flag).len(), min, max, what)
    }

    /// Reject any general arguments.
    pub fn accept_no_general_args(&self) -> Result<(), TranslateError> {
        if self.general_args.is_empty() {
            Ok(())
        } else {
            Err(TranslateError::ArgumentCountViolation(Message::new(
                MessageKey::NoGeneralArgs,
            )))
        }
    }

    /// Replace the `.` placeholder with `HEAD` in general arguments and in
    /// every option's arguments. Idempotent.
    ///
    /// A revision expression rooted at `.` is rewritten too, so `.^` becomes
    /// `HEAD^` and `.~2` becomes `HEAD~2`. Other tokens containing a dot,
    /// such as `./path` or `v1.2`, are left alone.
    pub fn map_dot_to_head(&mut self) {
        self.general_args.iter_mut().for_each(swap_dot);
        self.options.values_mut().flatten().for_each(swap_dot);
    }

    /// Attach a non-fatal advisory.
    pub fn add_warning(&mut self, message: Message) {
        self.reporter.warn(message);
    }

    pub fn reporter(&self) -> &Reporter {
        &self.reporter
    }

    /// Split into the final options, general arguments, and reporter.
    pub fn into_parts(self) -> (OptionMap, Vec<String>, Reporter) {
        (self.options, self.general_args, self.reporter)
    }
}

fn swap_dot(arg: &mut String) {
    let Some(suffix) = arg.strip_prefix(DOT) else {
        return;
    };
    if suffix.is_empty() || suffix.starts_with(['^', '~']) {
        *arg = format!("{}{}", HEAD, suffix);
    }
}

fn check_bounds(len: usize, min: usize, max: usize, what: String) -> Result<(), TranslateError> {
    if len < min {
        return Err(TranslateError::ArgumentCountViolation(
            Message::new(MessageKey::ArgsFew)
                .with("lower", min.to_string())
                .with("what", what),
        ));
    }
    if len > max {
        return Err(TranslateError::ArgumentCountViolation(
            Message::new(MessageKey::ArgsMany)
                .with("upper", max.to_string())
                .with("what", what),
        ));
    }
    Ok(())
}
