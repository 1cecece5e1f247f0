//! translate::matcher
//!
//! Selects the registry entry for a raw input line.
//!
//! # Ordering
//!
//! Definitions are tried in registry order and the first match wins. Patterns
//! are written to be disjoint for expected input, but that is not enforced;
//! registry order is the tie-break.

use super::invocation::ParsedInvocation;
use super::options::{parse_options, tokenize};
use super::registry::CommandRegistry;
use super::report::TranslateError;

/// Match a line against the registry and parse its options.
///
/// The line is trimmed first. Matching is case-sensitive.
///
/// # Errors
///
/// `UnrecognizedCommand` if no definition matches.
///
/// # Example
///
/// ```
/// use hgshim::translate::matcher::match_line;
/// use hgshim::translate::registry::CommandRegistry;
///
/// let inv = match_line(CommandRegistry::global(), "hg book -r C1 feature").unwrap();
/// assert_eq!(inv.definition().name(), "bookmark");
/// assert_eq!(inv.option_args("-r"), ["C1", "feature"]);
///
/// assert!(match_line(CommandRegistry::global(), "HG status").is_err());
/// ```
pub fn match_line<'r>(
    registry: &'r CommandRegistry,
    line: &str,
) -> Result<ParsedInvocation<'r>, TranslateError> {
    let line = line.trim();

    for definition in registry.iter() {
        let Some(end) = definition.match_end(line) else {
            continue;
        };
        let tokens = tokenize(&line[end..]);
        let parsed = parse_options(&tokens, definition.options());
        tracing::debug!(
            command = definition.name(),
            options = ?parsed.options,
            general_args = ?parsed.general_args,
            "matched line"
        );
        return Ok(ParsedInvocation::new(definition, parsed));
    }

    tracing::debug!(line, "no definition matched");
    Err(TranslateError::unrecognized(line))
}
