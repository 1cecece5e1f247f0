//! translate::options
//!
//! Tokenizing and option extraction for the text after a command word.
//!
//! # Rules
//!
//! - A recognized flag absorbs every following token up to the next
//!   recognized flag or the end of input.
//! - Tokens before the first recognized flag are general arguments.
//! - A token with a leading dash that the definition does not declare is an
//!   ordinary token. Recognition is purely table-driven.
//! - A flag given twice keeps one entry; the second occurrence appends.
//!
//! Every input token ends up in exactly one place, in its original relative
//! order.

use std::collections::BTreeMap;

/// Mapping from recognized flag to the arguments that followed it.
///
/// A flag absent from the input is absent from the map. A flag given with no
/// arguments maps to an empty list.
pub type OptionMap = BTreeMap<String, Vec<String>>;

/// Result of [`parse_options`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedOptions {
    pub options: OptionMap,
    pub general_args: Vec<String>,
}

/// Split the remainder of a line into tokens.
///
/// Whitespace separates tokens, except inside a `'...'` or `"..."` run, which
/// stays a single token with its quotes. An unterminated quote runs to the
/// end of input.
pub fn tokenize(input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;

    for c in input.chars() {
        match quote {
            Some(q) => {
                current.push(c);
                if c == q {
                    quote = None;
                }
            }
            None if c.is_whitespace() => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            None => {
                if (c == '\'' || c == '"') && current.is_empty() {
                    quote = Some(c);
                }
                current.push(c);
            }
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

/// Extract recognized flags and their arguments from a token list.
///
/// # Example
///
/// ```
/// use hgshim::translate::options::parse_options;
///
/// let tokens: Vec<String> = ["extra", "-r", "C1", "name", "-x", "-f"]
///     .iter().map(|s| s.to_string()).collect();
/// let parsed = parse_options(&tokens, &["-r", "-f"]);
///
/// assert_eq!(parsed.general_args, vec!["extra"]);
/// assert_eq!(parsed.options["-r"], vec!["C1", "name", "-x"]);
/// assert!(parsed.options["-f"].is_empty());
/// ```
pub fn parse_options(tokens: &[String], recognized: &[&str]) -> ParsedOptions {
    let mut parsed = ParsedOptions::default();
    let mut current: Option<&String> = None;

    for token in tokens {
        if recognized.contains(&token.as_str()) {
            parsed.options.entry(token.clone()).or_default();
            current = Some(token);
        } else if let Some(flag) = current {
            parsed
                .options
                .entry(flag.clone())
                .or_default()
                .push(token.clone());
        } else {
            parsed.general_args.push(token.clone());
        }
    }

    parsed
}
