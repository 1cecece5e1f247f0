//! intl
//!
//! Message keys and the catalog that renders them.
//!
//! # Design
//!
//! The translation engine never builds user-facing text. Errors and warnings
//! carry a [`Message`]: a [`MessageKey`] plus named parameters. Rendering
//! happens here, against a [`Catalog`]. The built-in [`EnglishCatalog`] covers
//! every key; [`Messages`] layers configured overrides on top of it.
//!
//! Templates use `{name}` placeholders. A placeholder with no matching
//! parameter is left as written.
//!
//! # Example
//!
//! ```
//! use hgshim::intl::{Message, MessageKey, Messages};
//!
//! let msg = Message::new(MessageKey::OptionRequired)
//!     .with("option", "-r")
//!     .with("command", "graft");
//! let rendered = Messages::default().render(&msg);
//! assert_eq!(rendered, "The -r option is required for hg graft");
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Every message the translation engine can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "&'static str")]
pub enum MessageKey {
    CommandNotSupported,
    HgAOption,
    HgErrorNoStatus,
    HgErrorLogNoFollow,
    HgBookmarkExtraArgs,
    HgGraftExtraArgs,
    HgErrorRebaseNoDestination,
    OptionsIncompatible,
    OptionRequired,
    ArgsFew,
    ArgsMany,
    NoGeneralArgs,
    EngineFailure,
}

impl MessageKey {
    /// All keys, in declaration order.
    pub const ALL: [MessageKey; 13] = [
        MessageKey::CommandNotSupported,
        MessageKey::HgAOption,
        MessageKey::HgErrorNoStatus,
        MessageKey::HgErrorLogNoFollow,
        MessageKey::HgBookmarkExtraArgs,
        MessageKey::HgGraftExtraArgs,
        MessageKey::HgErrorRebaseNoDestination,
        MessageKey::OptionsIncompatible,
        MessageKey::OptionRequired,
        MessageKey::ArgsFew,
        MessageKey::ArgsMany,
        MessageKey::NoGeneralArgs,
        MessageKey::EngineFailure,
    ];

    /// The catalog key string.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKey::CommandNotSupported => "git-error-command-not-supported",
            MessageKey::HgAOption => "hg-a-option",
            MessageKey::HgErrorNoStatus => "hg-error-no-status",
            MessageKey::HgErrorLogNoFollow => "hg-error-log-no-follow",
            MessageKey::HgBookmarkExtraArgs => "hg-bookmark-extra-args",
            MessageKey::HgGraftExtraArgs => "hg-graft-extra-args",
            MessageKey::HgErrorRebaseNoDestination => "hg-error-rebase-no-destination",
            MessageKey::OptionsIncompatible => "git-error-options-incompatible",
            MessageKey::OptionRequired => "git-error-option-required",
            MessageKey::ArgsFew => "git-error-args-few",
            MessageKey::ArgsMany => "git-error-args-many",
            MessageKey::NoGeneralArgs => "git-error-no-general-args",
            MessageKey::EngineFailure => "engine-error",
        }
    }
}

impl From<MessageKey> for &'static str {
    fn from(key: MessageKey) -> Self {
        key.as_str()
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MessageKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// A message key plus its named parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub key: MessageKey,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub params: BTreeMap<&'static str, String>,
}

impl Message {
    /// Create a message with no parameters.
    pub fn new(key: MessageKey) -> Self {
        Self {
            key,
            params: BTreeMap::new(),
        }
    }

    /// Attach a named parameter.
    pub fn with(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.params.insert(name, value.into());
        self
    }
}

/// Renders with the built-in English catalog.
impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_with(&EnglishCatalog, self))
    }
}

/// Source of message templates.
pub trait Catalog {
    /// Look up the template for a key.
    fn lookup(&self, key: MessageKey) -> Option<&str>;
}

/// The built-in English catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishCatalog;

impl Catalog for EnglishCatalog {
    fn lookup(&self, key: MessageKey) -> Option<&str> {
        let template = match key {
            MessageKey::CommandNotSupported => "The command \"{command}\" isn't supported, sorry!",
            MessageKey::HgAOption => "The -A option is not needed for this app, just commit away!",
            MessageKey::HgErrorNoStatus => {
                "There is no status command for this app, since there is no staging of files. \
                 Try hg summary instead"
            }
            MessageKey::HgErrorLogNoFollow => {
                "hg log without -f is currently not supported, use -f"
            }
            MessageKey::HgBookmarkExtraArgs => {
                "Only one bookmark is moved at a time; ignoring {ignored}"
            }
            MessageKey::HgGraftExtraArgs => {
                "Revisions to graft are taken from -r; ignoring {ignored}"
            }
            MessageKey::HgErrorRebaseNoDestination => {
                "hg rebase needs a destination, use -d"
            }
            MessageKey::OptionsIncompatible => "{first} and {second} are incompatible",
            MessageKey::OptionRequired => "The {option} option is required for hg {command}",
            MessageKey::ArgsFew => {
                "I expect at least {lower} argument(s), not including any options, {what}"
            }
            MessageKey::ArgsMany => "I expect at most {upper} argument(s), {what}",
            MessageKey::NoGeneralArgs => "That command accepts no general arguments",
            MessageKey::EngineFailure => "{message}",
        };
        Some(template)
    }
}

/// Catalog with configured overrides layered over the English catalog.
#[derive(Debug, Clone, Default)]
pub struct Messages {
    overrides: BTreeMap<MessageKey, String>,
}

impl Messages {
    /// Create a catalog with the given overrides.
    pub fn with_overrides(overrides: BTreeMap<MessageKey, String>) -> Self {
        Self { overrides }
    }

    /// Render a message against this catalog.
    pub fn render(&self, message: &Message) -> String {
        render_with(self, message)
    }
}

impl Catalog for Messages {
    fn lookup(&self, key: MessageKey) -> Option<&str> {
        self.overrides
            .get(&key)
            .map(String::as_str)
            .or_else(|| EnglishCatalog.lookup(key))
    }
}

/// Render a message against any catalog, falling back to the key itself.
pub fn render_with(catalog: &dyn Catalog, message: &Message) -> String {
    let Some(template) = catalog.lookup(message.key) else {
        return message.key.as_str().to_string();
    };

    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let name = &after[..close];
                match message.params.get(name) {
                    Some(value) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}
