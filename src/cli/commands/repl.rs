//! repl command - Translate lines read from standard input

use std::io::{self, BufRead};

use anyhow::{Context as _, Result};

use crate::cli::Context;
use crate::translate::{RecordingEngine, Translator};
use crate::ui::output;

use super::translate::translate_line;

/// Translate every line of standard input.
///
/// A rejected line is reported and the loop moves on to the next one.
pub fn repl(ctx: &Context) -> Result<()> {
    let summary = process(ctx, io::stdin().lock())?;
    tracing::debug!(
        translated = summary.translated,
        failed = summary.failed,
        "input exhausted"
    );
    Ok(())
}

/// Summary of a processed input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ReplSummary {
    pub translated: usize,
    pub failed: usize,
}

pub(crate) fn process(ctx: &Context, input: impl BufRead) -> Result<ReplSummary> {
    let translator = Translator::new();
    let mut engine = RecordingEngine::new();
    let mut summary = ReplSummary::default();

    for line in input.lines() {
        let line = line.context("failed to read standard input")?;
        let line = line.trim();
        if is_skipped(line) {
            continue;
        }

        match translate_line(ctx, &translator, &mut engine, line)? {
            None => summary.translated += 1,
            Some(failure) => {
                summary.failed += 1;
                if !ctx.json {
                    output::error(failure);
                }
            }
        }
    }

    Ok(summary)
}

fn is_skipped(line: &str) -> bool {
    line.is_empty() || line.starts_with('#')
}
