//! translate::definitions
//!
//! The Mercurial-style command table and the handler for each entry.
//!
//! # Table
//!
//! | hg command                  | handler  | canonical result            |
//! |-----------------------------|----------|-----------------------------|
//! | `commit`, `ci`              | delegate | `commit`                    |
//! | `status`, `st`              | direct   | always unsupported          |
//! | `export`                    | delegate | `show`                      |
//! | `graft -r`                  | delegate | `cherrypick`                |
//! | `log -f`                    | delegate | `log`                       |
//! | `bookmark`, `bookmarks`, `book` | delegate | `branch` or `checkout`  |
//! | `rebase -d`                 | direct   | engine `hg_rebase`          |
//! | `update`, `up`              | delegate | `checkout`                  |
//! | `backout`                   | delegate | `revert`                    |
//! | `histedit`                  | delegate | `rebase -i`                 |
//! | `pull`                      | delegate | `pull`                      |
//! | `summary`, `sum`            | delegate | `branch`                    |
//!
//! Order matters: the matcher takes the first entry whose pattern matches.
//!
//! # Conventions
//!
//! Handlers validate everything before rewriting or calling the engine.
//! Flags that only steer the translation are removed from the option map
//! once consumed, so the canonical command never sees a flag it does not
//! understand.

use super::engine::ExecutionEngine;
use super::invocation::ParsedInvocation;
use super::options::OptionMap;
use super::registry::{CommandDescriptor, DefinitionSpec, Handler};
use super::report::TranslateError;
use crate::core::types::{CanonicalCommand, DOT};
use crate::intl::{Message, MessageKey};

/// Built-in definitions, in match order.
pub static HG_COMMANDS: &[DefinitionSpec] = &[
    DefinitionSpec {
        name: "commit",
        pattern: r"^hg +(commit|ci)($|\s)",
        options: &["--amend", "-A", "-m"],
        exempt_from_golf: false,
        handler: Handler::Delegate(commit),
    },
    DefinitionSpec {
        name: "status",
        pattern: r"^hg +(status|st) *$",
        options: &[],
        exempt_from_golf: true,
        handler: Handler::Execute(status),
    },
    DefinitionSpec {
        name: "export",
        pattern: r"^hg +export($|\s)",
        options: &[],
        exempt_from_golf: true,
        handler: Handler::Delegate(export),
    },
    DefinitionSpec {
        name: "graft",
        pattern: r"^hg +graft($|\s)",
        options: &["-r"],
        exempt_from_golf: false,
        handler: Handler::Delegate(graft),
    },
    DefinitionSpec {
        name: "log",
        pattern: r"^hg +log($|\s)",
        options: &["-f"],
        exempt_from_golf: true,
        handler: Handler::Delegate(log),
    },
    DefinitionSpec {
        name: "bookmark",
        pattern: r"^hg +(bookmarks|bookmark|book)($|\s)",
        options: &["-r", "-f", "-d", "-m"],
        exempt_from_golf: false,
        handler: Handler::Delegate(bookmark),
    },
    DefinitionSpec {
        name: "rebase",
        pattern: r"^hg +rebase($|\s)",
        options: &["-d", "-s", "-b"],
        exempt_from_golf: false,
        handler: Handler::Execute(rebase),
    },
    DefinitionSpec {
        name: "update",
        pattern: r"^hg +(update|up)($|\s)",
        options: &[],
        exempt_from_golf: false,
        handler: Handler::Delegate(update),
    },
    DefinitionSpec {
        name: "backout",
        pattern: r"^hg +backout($|\s)",
        options: &[],
        exempt_from_golf: false,
        handler: Handler::Delegate(backout),
    },
    DefinitionSpec {
        name: "histedit",
        pattern: r"^hg +histedit($|\s)",
        options: &[],
        exempt_from_golf: false,
        handler: Handler::Delegate(histedit),
    },
    DefinitionSpec {
        name: "pull",
        pattern: r"^hg +pull($|\s)",
        options: &[],
        exempt_from_golf: false,
        handler: Handler::Delegate(pull),
    },
    DefinitionSpec {
        name: "summary",
        pattern: r"^hg +(summary|sum) *$",
        options: &[],
        exempt_from_golf: false,
        handler: Handler::Delegate(summary),
    },
];

fn commit(inv: &mut ParsedInvocation<'_>) -> Result<CommandDescriptor, TranslateError> {
    // Every change is committed; there is no staging area to add to.
    if inv.take_option("-A").is_some() {
        inv.add_warning(Message::new(MessageKey::HgAOption));
    }
    Ok(CommandDescriptor::git(CanonicalCommand::Commit))
}

fn status(
    _engine: &mut dyn ExecutionEngine,
    _inv: &mut ParsedInvocation<'_>,
) -> Result<(), TranslateError> {
    Err(TranslateError::UnsupportedOperation(Message::new(
        MessageKey::HgErrorNoStatus,
    )))
}

fn export(inv: &mut ParsedInvocation<'_>) -> Result<CommandDescriptor, TranslateError> {
    inv.map_dot_to_head();
    Ok(CommandDescriptor::git(CanonicalCommand::Show))
}

fn graft(inv: &mut ParsedInvocation<'_>) -> Result<CommandDescriptor, TranslateError> {
    let revisions = match inv.take_option("-r") {
        Some(revs) if !revs.is_empty() => revs,
        _ => return Err(TranslateError::option_required("-r", "graft")),
    };
    if !inv.general_args().is_empty() {
        let ignored = inv.general_args().join(" ");
        inv.add_warning(Message::new(MessageKey::HgGraftExtraArgs).with("ignored", ignored));
    }
    inv.set_general_args(revisions);
    Ok(CommandDescriptor::git(CanonicalCommand::CherryPick))
}

fn log(inv: &mut ParsedInvocation<'_>) -> Result<CommandDescriptor, TranslateError> {
    inv.accept_no_general_args()?;

    // Without --follow hg walks every revision; the canonical log cannot.
    let Some(revisions) = inv.take_option("-f") else {
        return Err(TranslateError::MissingRequiredOption(Message::new(
            MessageKey::HgErrorLogNoFollow,
        )));
    };
    // Revisions given after -f are what the canonical log starts from.
    inv.set_general_args(revisions);
    inv.map_dot_to_head();
    Ok(CommandDescriptor::git(CanonicalCommand::Log))
}

fn bookmark(inv: &mut ParsedInvocation<'_>) -> Result<CommandDescriptor, TranslateError> {
    const INCOMPATIBLE: [(&str, &str); 3] = [("-m", "-d"), ("-d", "-r"), ("-m", "-r")];
    for (first, second) in INCOMPATIBLE {
        if inv.has_option(first) && inv.has_option(second) {
            return Err(TranslateError::incompatible(first, second));
        }
    }

    if let Some(mut names) = inv.take_option("-m") {
        // hg accepts the new name before or after `-m OLD`; the canonical
        // rename wants `-m OLD NEW`.
        names.extend(inv.general_args().iter().cloned());
        inv.options_mut().insert("-m".to_string(), names);
        inv.set_general_args(Vec::new());
        return Ok(CommandDescriptor::git(CanonicalCommand::Branch));
    }

    let named =
        inv.general_args().len() + inv.option_args("-r").len() + inv.option_args("-d").len();
    if named == 0 {
        // Lists bookmarks, possibly with -f.
        return Ok(CommandDescriptor::git(CanonicalCommand::Branch));
    }

    if let Some(names) = inv.take_option("-d") {
        inv.options_mut().insert("-D".to_string(), names);
        return Ok(CommandDescriptor::git(CanonicalCommand::Branch));
    }

    if inv.has_option("-r") {
        // hg takes the revision first, the canonical branch takes the name first.
        let mut values = inv.option_args("-r").to_vec();
        values.extend_from_slice(inv.general_args());
        let [rev, name] = <[String; 2]>::try_from(values)
            .map_err(|values| bookmark_rev_count(values.len()))?;
        inv.take_option("-r");
        inv.set_general_args(vec![name, rev]);
        return Ok(CommandDescriptor::git(CanonicalCommand::Branch));
    }

    let mut args = inv.general_args().to_vec();
    let name = args.remove(0);
    if !args.is_empty() {
        inv.add_warning(
            Message::new(MessageKey::HgBookmarkExtraArgs).with("ignored", args.join(" ")),
        );
    }
    let mut options = OptionMap::new();
    options.insert("-b".to_string(), vec![name]);
    inv.set_options(options);
    inv.set_general_args(Vec::new());
    Ok(CommandDescriptor::git(CanonicalCommand::Checkout))
}

fn bookmark_rev_count(found: usize) -> TranslateError {
    let what = "with hg bookmark -r (a revision and a bookmark name)";
    let message = if found < 2 {
        Message::new(MessageKey::ArgsFew).with("lower", "2")
    } else {
        Message::new(MessageKey::ArgsMany).with("upper", "2")
    };
    TranslateError::ArgumentCountViolation(message.with("what", what))
}

fn rebase(
    engine: &mut dyn ExecutionEngine,
    inv: &mut ParsedInvocation<'_>,
) -> Result<(), TranslateError> {
    match (inv.has_option("-d"), inv.has_option("-s")) {
        (true, true) => return Err(TranslateError::incompatible("-d", "-s")),
        (false, false) => {
            return Err(TranslateError::MissingRequiredOption(Message::new(
                MessageKey::HgErrorRebaseNoDestination,
            )))
        }
        // Rebasing by source still needs somewhere to go.
        (false, true) => return Err(TranslateError::option_required("-d", "rebase")),
        (true, false) => {}
    }

    inv.validate_option_bounds("-d", 1, 1)?;
    inv.validate_option_bounds("-b", 0, 1)?;

    if inv.option_args("-b").is_empty() {
        inv.options_mut()
            .insert("-b".to_string(), vec![DOT.to_string()]);
    }
    inv.map_dot_to_head();

    let destination = inv.option_args("-d")[0].clone();
    let base = inv.option_args("-b")[0].clone();
    tracing::debug!(%destination, %base, "dispatching rebase to engine");
    engine
        .hg_rebase(&destination, &base)
        .inspect_err(|err| tracing::warn!(%err, "engine rejected rebase"))?;
    Ok(())
}

fn update(_inv: &mut ParsedInvocation<'_>) -> Result<CommandDescriptor, TranslateError> {
    Ok(CommandDescriptor::git(CanonicalCommand::Checkout))
}

fn backout(_inv: &mut ParsedInvocation<'_>) -> Result<CommandDescriptor, TranslateError> {
    Ok(CommandDescriptor::git(CanonicalCommand::Revert))
}

fn histedit(inv: &mut ParsedInvocation<'_>) -> Result<CommandDescriptor, TranslateError> {
    inv.validate_arg_bounds(1, 1)?;
    let root = inv.general_args().to_vec();
    let mut options = OptionMap::new();
    options.insert("-i".to_string(), root);
    inv.set_options(options);
    inv.set_general_args(Vec::new());
    Ok(CommandDescriptor::git(CanonicalCommand::Rebase))
}

fn pull(_inv: &mut ParsedInvocation<'_>) -> Result<CommandDescriptor, TranslateError> {
    Ok(CommandDescriptor::git(CanonicalCommand::Pull))
}

fn summary(_inv: &mut ParsedInvocation<'_>) -> Result<CommandDescriptor, TranslateError> {
    Ok(CommandDescriptor::git(CanonicalCommand::Branch))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translate::engine::{EngineCall, RecordingEngine};
    use crate::translate::matcher::match_line;
    use crate::translate::registry::CommandRegistry;
    use crate::translate::report::ErrorKind;

    fn delegate(
        line: &str,
    ) -> Result<(CommandDescriptor, ParsedInvocation<'static>), TranslateError> {
        let mut inv = match_line(CommandRegistry::global(), line)?;
        match inv.definition().handler() {
            Handler::Delegate(f) => f(&mut inv).map(|d| (d, inv)),
            Handler::Execute(_) => panic!("{} is not delegating", line),
        }
    }

    fn execute(line: &str, engine: &mut RecordingEngine) -> Result<(), TranslateError> {
        let mut inv = match_line(CommandRegistry::global(), line)?;
        match inv.definition().handler() {
            Handler::Execute(f) => f(engine, &mut inv),
            Handler::Delegate(_) => panic!("{} is not direct", line),
        }
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    mod commit {
        use super::*;

        #[test]
        fn plain_commit_delegates() {
            let (desc, inv) = delegate("hg commit").unwrap();
            assert_eq!(desc.command, CanonicalCommand::Commit);
            assert!(inv.reporter().warnings().is_empty());
        }

        #[test]
        fn dash_a_warns_and_is_dropped() {
            let (desc, inv) = delegate("hg ci -A -m").unwrap();
            assert_eq!(desc.command, CanonicalCommand::Commit);
            assert!(!inv.has_option("-A"));
            assert!(inv.has_option("-m"));
            let warnings = inv.reporter().warnings();
            assert_eq!(warnings.len(), 1);
            assert_eq!(warnings[0].message().key, MessageKey::HgAOption);
        }

        #[test]
        fn amend_and_message_pass_through() {
            let (_, inv) = delegate("hg commit --amend -m \"fix it\"").unwrap();
            assert!(inv.option_args("--amend").is_empty());
            assert_eq!(inv.option_args("-m"), ["\"fix it\""]);
        }
    }

    mod status {
        use super::*;

        #[test]
        fn always_unsupported() {
            let mut engine = RecordingEngine::new();
            let err = execute("hg st", &mut engine).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::UnsupportedOperation);
            assert_eq!(err.message().key, MessageKey::HgErrorNoStatus);
            assert!(engine.calls().is_empty());
        }
    }

    mod export {
        use super::*;

        #[test]
        fn maps_dot_to_head() {
            let (desc, inv) = delegate("hg export .").unwrap();
            assert_eq!(desc.command, CanonicalCommand::Show);
            assert_eq!(inv.general_args(), ["HEAD"]);
        }
    }

    mod graft {
        use super::*;

        #[test]
        fn revisions_become_general_args() {
            let (desc, inv) = delegate("hg graft -r C2 C3").unwrap();
            assert_eq!(desc.command, CanonicalCommand::CherryPick);
            assert_eq!(inv.general_args(), strings(&["C2", "C3"]).as_slice());
            assert!(inv.options().is_empty());
        }

        #[test]
        fn stray_general_args_warn() {
            let (desc, inv) = delegate("hg graft C2 -r C3").unwrap();
            assert_eq!(desc.command, CanonicalCommand::CherryPick);
            assert_eq!(inv.general_args(), ["C3"]);
            let warnings = inv.reporter().warnings();
            assert_eq!(warnings.len(), 1);
            assert_eq!(warnings[0].message().key, MessageKey::HgGraftExtraArgs);
            assert_eq!(warnings[0].message().params["ignored"], "C2");
        }

        #[test]
        fn revisions_alone_do_not_warn() {
            let (_, inv) = delegate("hg graft -r C2").unwrap();
            assert!(inv.reporter().warnings().is_empty());
        }

        #[test]
        fn requires_revision_flag() {
            let err = delegate("hg graft C2").unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MissingRequiredOption);
        }

        #[test]
        fn empty_revision_flag_is_missing() {
            let err = delegate("hg graft -r").unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MissingRequiredOption);
        }
    }

    mod log {
        use super::*;

        #[test]
        fn follow_delegates() {
            let (desc, inv) = delegate("hg log -f").unwrap();
            assert_eq!(desc.command, CanonicalCommand::Log);
            assert!(inv.options().is_empty());
        }

        #[test]
        fn follow_args_map_dot() {
            let (_, inv) = delegate("hg log -f .").unwrap();
            assert!(inv.options().is_empty());
            assert_eq!(inv.general_args(), ["HEAD"]);
        }

        #[test]
        fn follow_revisions_become_general_args() {
            let (desc, inv) = delegate("hg log -f C2 C3").unwrap();
            assert_eq!(desc.command, CanonicalCommand::Log);
            assert!(!inv.has_option("-f"));
            assert_eq!(inv.general_args(), strings(&["C2", "C3"]).as_slice());
        }

        #[test]
        fn without_follow_fails() {
            let err = delegate("hg log").unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MissingRequiredOption);
            assert_eq!(err.message().key, MessageKey::HgErrorLogNoFollow);
        }

        #[test]
        fn general_args_checked_first() {
            let err = delegate("hg log C1").unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ArgumentCountViolation);
        }
    }

    mod bookmark {
        use super::*;

        #[test]
        fn no_args_lists() {
            let (desc, inv) = delegate("hg bookmarks").unwrap();
            assert_eq!(desc.command, CanonicalCommand::Branch);
            assert!(inv.options().is_empty());
            assert!(inv.general_args().is_empty());
        }

        #[test]
        fn rename_passes_through() {
            let (desc, inv) = delegate("hg book -m old new").unwrap();
            assert_eq!(desc.command, CanonicalCommand::Branch);
            assert_eq!(inv.option_args("-m"), strings(&["old", "new"]).as_slice());
        }

        #[test]
        fn rename_with_new_name_first() {
            let (desc, inv) = delegate("hg bookmark new -m old").unwrap();
            assert_eq!(desc.command, CanonicalCommand::Branch);
            assert_eq!(inv.option_args("-m"), strings(&["old", "new"]).as_slice());
            assert!(!inv.has_option("-b"));
            assert!(inv.general_args().is_empty());
            assert!(inv.reporter().warnings().is_empty());
        }

        #[test]
        fn rename_never_checks_out() {
            for line in ["hg book new -m old", "hg book -m old new", "hg bookmarks new -m old"] {
                let (desc, inv) = delegate(line).unwrap();
                assert_eq!(desc.command, CanonicalCommand::Branch, "{}", line);
                assert!(inv.has_option("-m"), "{}", line);
            }
        }

        #[test]
        fn delete_becomes_force_delete() {
            let (desc, inv) = delegate("hg bookmark -d oldname").unwrap();
            assert_eq!(desc.command, CanonicalCommand::Branch);
            assert!(!inv.has_option("-d"));
            assert_eq!(inv.option_args("-D"), ["oldname"]);
        }

        #[test]
        fn revision_flips_argument_order() {
            let (desc, inv) = delegate("hg bookmark -r C1 feature").unwrap();
            assert_eq!(desc.command, CanonicalCommand::Branch);
            assert_eq!(inv.general_args(), strings(&["feature", "C1"]).as_slice());
            assert!(!inv.has_option("-r"));
        }

        #[test]
        fn revision_with_trailing_name() {
            let (_, inv) = delegate("hg bookmark feature -r C1").unwrap();
            assert_eq!(inv.general_args(), strings(&["feature", "C1"]).as_slice());
        }

        #[test]
        fn revision_keeps_force() {
            let (_, inv) = delegate("hg bookmark -f -r C1 feature").unwrap();
            assert!(inv.has_option("-f"));
            assert_eq!(inv.general_args(), strings(&["feature", "C1"]).as_slice());
        }

        #[test]
        fn revision_without_name_is_count_violation() {
            let err = delegate("hg bookmark -r C1").unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ArgumentCountViolation);
            let err = delegate("hg bookmark -r C1 a b").unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ArgumentCountViolation);
        }

        #[test]
        fn single_name_switches_to_new_branch() {
            let (desc, inv) = delegate("hg bookmark feature").unwrap();
            assert_eq!(desc.command, CanonicalCommand::Checkout);
            assert_eq!(inv.option_args("-b"), ["feature"]);
            assert!(inv.general_args().is_empty());
            assert!(inv.reporter().warnings().is_empty());
        }

        #[test]
        fn extra_names_are_ignored_with_warning() {
            let (desc, inv) = delegate("hg bookmark feature C3").unwrap();
            assert_eq!(desc.command, CanonicalCommand::Checkout);
            assert_eq!(inv.options().len(), 1);
            assert_eq!(inv.option_args("-b"), ["feature"]);
            assert!(inv.general_args().is_empty());
            let warnings = inv.reporter().warnings();
            assert_eq!(warnings.len(), 1);
            assert_eq!(warnings[0].message().params["ignored"], "C3");
        }

        #[test]
        fn incompatible_pairs() {
            for line in [
                "hg bookmark -d a -r C1",
                "hg bookmark -r C1 a -d",
                "hg bookmark -m a -d b",
                "hg bookmark -m a b -r C1",
            ] {
                let err = delegate(line).unwrap_err();
                assert_eq!(err.kind(), ErrorKind::IncompatibleOptions, "{}", line);
            }
        }

        #[test]
        fn incompatible_checked_before_empty_case() {
            let err = delegate("hg bookmark -d -r").unwrap_err();
            assert_eq!(err.kind(), ErrorKind::IncompatibleOptions);
        }
    }

    mod rebase {
        use super::*;

        #[test]
        fn destination_defaults_base_to_head() {
            let mut engine = RecordingEngine::new();
            execute("hg rebase -d C3", &mut engine).unwrap();
            assert_eq!(
                engine.calls(),
                &[EngineCall::HgRebase {
                    destination: "C3".into(),
                    base: "HEAD".into()
                }]
            );
        }

        #[test]
        fn explicit_base_and_dot_destination() {
            let mut engine = RecordingEngine::new();
            execute("hg rebase -b bugFix -d .", &mut engine).unwrap();
            assert_eq!(
                engine.calls(),
                &[EngineCall::HgRebase {
                    destination: "HEAD".into(),
                    base: "bugFix".into()
                }]
            );
        }

        #[test]
        fn both_destination_styles_are_incompatible() {
            let mut engine = RecordingEngine::new();
            let err = execute("hg rebase -d C1 -s C2", &mut engine).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::IncompatibleOptions);
            assert!(engine.calls().is_empty());
        }

        #[test]
        fn neither_destination_style_is_missing() {
            let mut engine = RecordingEngine::new();
            let err = execute("hg rebase", &mut engine).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MissingRequiredOption);
            assert!(engine.calls().is_empty());
        }

        #[test]
        fn source_only_requires_destination() {
            let mut engine = RecordingEngine::new();
            let err = execute("hg rebase -s C2", &mut engine).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MissingRequiredOption);
            assert_eq!(err.message().key, MessageKey::OptionRequired);
            assert_eq!(err.message().params["option"], "-d");
            assert!(engine.calls().is_empty());
        }

        #[test]
        fn destination_needs_exactly_one_value() {
            let mut engine = RecordingEngine::new();
            let err = execute("hg rebase -d", &mut engine).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ArgumentCountViolation);
            let err = execute("hg rebase -d C1 C2", &mut engine).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ArgumentCountViolation);
            assert!(engine.calls().is_empty());
        }

        #[test]
        fn engine_failure_surfaces() {
            let mut engine = RecordingEngine::failing("no such commit");
            let err = execute("hg rebase -d C9", &mut engine).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::EngineFailure);
        }
    }

    mod histedit {
        use super::*;

        #[test]
        fn root_becomes_interactive_option() {
            let (desc, inv) = delegate("hg histedit C1").unwrap();
            assert_eq!(desc.command, CanonicalCommand::Rebase);
            assert_eq!(inv.option_args("-i"), ["C1"]);
            assert!(inv.general_args().is_empty());
        }

        #[test]
        fn two_args_violate_bounds() {
            let err = delegate("hg histedit C1 C2").unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ArgumentCountViolation);
        }

        #[test]
        fn zero_args_violate_bounds() {
            let err = delegate("hg histedit").unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ArgumentCountViolation);
        }
    }

    mod passthrough {
        use super::*;

        #[test]
        fn simple_mappings() {
            let cases = [
                ("hg update C1", CanonicalCommand::Checkout),
                ("hg up C1", CanonicalCommand::Checkout),
                ("hg backout C2", CanonicalCommand::Revert),
                ("hg pull", CanonicalCommand::Pull),
                ("hg summary", CanonicalCommand::Branch),
                ("hg sum", CanonicalCommand::Branch),
            ];
            for (line, expected) in cases {
                let (desc, _) = delegate(line).unwrap();
                assert_eq!(desc.command, expected, "{}", line);
            }
        }

        #[test]
        fn update_keeps_arguments() {
            let (_, inv) = delegate("hg update -C C1").unwrap();
            assert_eq!(inv.general_args(), strings(&["-C", "C1"]).as_slice());
        }
    }
}
