//! list command - Show the recognized hg commands

use anyhow::Result;
use serde::Serialize;

use crate::cli::Context;
use crate::translate::{CommandDefinition, CommandRegistry};
use crate::ui::output;

/// List registry entries in match order.
pub fn list(ctx: &Context) -> Result<()> {
    let registry = CommandRegistry::global();

    if ctx.json {
        let entries: Vec<ListEntry> = registry.iter().map(ListEntry::from).collect();
        output::json(&entries)?;
        return Ok(());
    }

    println!("{}", render_table(registry));
    Ok(())
}

#[derive(Debug, Serialize)]
struct ListEntry {
    name: &'static str,
    handler: &'static str,
    options: &'static [&'static str],
    exempt_from_golf: bool,
    pattern: &'static str,
}

impl From<&CommandDefinition> for ListEntry {
    fn from(definition: &CommandDefinition) -> Self {
        Self {
            name: definition.name(),
            handler: definition.handler().kind(),
            options: definition.options(),
            exempt_from_golf: definition.exempt_from_golf(),
            pattern: definition.pattern(),
        }
    }
}

fn render_table(registry: &CommandRegistry) -> String {
    let mut rows = vec![vec![
        "NAME".to_string(),
        "HANDLER".to_string(),
        "OPTIONS".to_string(),
        "GOLF".to_string(),
        "PATTERN".to_string(),
    ]];

    for definition in registry.iter() {
        let options = if definition.options().is_empty() {
            "-".to_string()
        } else {
            definition.options().join(",")
        };
        rows.push(vec![
            definition.name().to_string(),
            definition.handler().kind().to_string(),
            options,
            if definition.exempt_from_golf() { "exempt" } else { "scored" }.to_string(),
            definition.pattern().to_string(),
        ]);
    }

    output::format_columns(&rows)
}
