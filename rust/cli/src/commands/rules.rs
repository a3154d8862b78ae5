//! Rules command handler: prints the configured rule catalog.

use crate::config::Config;
use crate::error::CliError;
use crate::formatters::format_rule;
use std::io::Write;

/// Handle the rules command.
///
/// Lists rules in catalog order, which is also the tie-break order used when
/// two rules are worth the same. Inactive rules are shown only with `all`.
pub fn handle_rules_command(all: bool, cfg: &Config, out: &mut dyn Write) -> Result<(), CliError> {
    let shown: Vec<_> = cfg.rules.iter().filter(|r| all || r.active).collect();
    let width = shown.iter().map(|r| r.name.len()).max().unwrap_or(0);
    for rule in &shown {
        writeln!(out, "{}", format_rule(rule, width))?;
    }
    writeln!(out, "{} rule(s)", shown.len())?;
    Ok(())
}
