//! translate command - Translate one hg command line

use anyhow::{bail, Result};
use serde::Serialize;

use crate::cli::Context;
use crate::intl::MessageKey;
use crate::translate::{
    EngineCall, ErrorKind, Outcome, RecordingEngine, TranslateError, Translation, Translator,
};
use crate::ui::output;

/// Translate a single line given as command-line words.
pub fn translate(ctx: &Context, words: &[String]) -> Result<()> {
    let line = words.join(" ");
    let translator = Translator::new();
    let mut engine = RecordingEngine::new();

    if let Some(failure) = translate_line(ctx, &translator, &mut engine, &line)? {
        bail!(failure);
    }
    Ok(())
}

/// Translate and report one line.
///
/// Returns the rendered failure message if the line was rejected. The
/// failure is already part of the JSON report in JSON mode; in text mode the
/// caller decides how to show it.
pub(crate) fn translate_line(
    ctx: &Context,
    translator: &Translator<'_>,
    engine: &mut RecordingEngine,
    line: &str,
) -> Result<Option<String>> {
    match translator.translate(line, engine) {
        Ok(translation) => {
            let calls = engine.take_calls();
            if ctx.json {
                output::json(&LineReport::success(ctx, line, &translation, calls))?;
            } else {
                print_success(ctx, &translation, &calls);
            }
            Ok(None)
        }
        Err(err) => {
            let rendered = ctx.messages.render(err.message());
            if ctx.json {
                output::json(&LineReport::failure(line, &err, rendered.clone()))?;
            }
            Ok(Some(rendered))
        }
    }
}

fn print_success(ctx: &Context, translation: &Translation, calls: &[EngineCall]) {
    match translation.to_command_line() {
        Some(command_line) => println!("{}", command_line),
        None => {
            for call in calls {
                println!("{}", call);
            }
        }
    }

    if ctx.show_warnings {
        for warning in &translation.warnings {
            output::warn(ctx.messages.render(warning.message()), ctx.verbosity);
        }
    }
}

/// One line of `--json` output.
#[derive(Debug, Serialize)]
struct LineReport<'a> {
    line: &'a str,
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    command: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exempt_from_golf: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    outcome: Option<&'a Outcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    git: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    engine_calls: Vec<EngineCall>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    warnings: Vec<RenderedMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorReport>,
}

#[derive(Debug, Serialize)]
struct RenderedMessage {
    key: MessageKey,
    text: String,
}

#[derive(Debug, Serialize)]
struct ErrorReport {
    kind: ErrorKind,
    key: MessageKey,
    message: String,
}

impl<'a> LineReport<'a> {
    fn success(
        ctx: &Context,
        line: &'a str,
        translation: &'a Translation,
        engine_calls: Vec<EngineCall>,
    ) -> Self {
        let warnings = translation
            .warnings
            .iter()
            .map(|w| RenderedMessage {
                key: w.message().key,
                text: ctx.messages.render(w.message()),
            })
            .collect();

        Self {
            line,
            ok: true,
            command: Some(translation.command),
            exempt_from_golf: Some(translation.exempt_from_golf),
            outcome: Some(&translation.outcome),
            git: translation.to_command_line(),
            engine_calls,
            warnings,
            error: None,
        }
    }

    fn failure(line: &'a str, err: &TranslateError, message: String) -> Self {
        Self {
            line,
            ok: false,
            command: None,
            exempt_from_golf: None,
            outcome: None,
            git: None,
            engine_calls: Vec::new(),
            warnings: Vec::new(),
            error: Some(ErrorReport {
                kind: err.kind(),
                key: err.message().key,
                message,
            }),
        }
    }
}
