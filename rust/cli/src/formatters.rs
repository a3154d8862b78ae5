//! Dice, rule, and match formatters for terminal display.
//!
//! Pure functions that turn engine values into text. Dice render as Unicode
//! die faces (⚀ ⚁ ⚂ ⚃ ⚄ ⚅) where the terminal supports them and as digits
//! otherwise.
//!
//! ## Example
//!
//! ```rust
//! use farkle_cli::formatters::{format_die, format_criteria};
//! use farkle_engine::rules::Criterion;
//!
//! assert!(format_die(6) == "⚅" || format_die(6) == "6");
//! assert_eq!(format_criteria(&[Criterion::any(2), Criterion::any(2)]), "2x* + 2x*");
//! ```

use farkle_engine::dice::{format_roll, Face};
use farkle_engine::rules::{Criterion, Rule};
use farkle_engine::search::RuleMatch;

/// Check if the terminal supports Unicode die symbols by detecting modern terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_die(face: Face) -> String {
    const FACES: [&str; 6] = ["⚀", "⚁", "⚂", "⚃", "⚄", "⚅"];
    match face {
        1..=6 if supports_unicode() => FACES[(face - 1) as usize].to_string(),
        _ => face.to_string(),
    }
}

/// Format dice as `[⚀ ⚄ ⚄]`, or as the parseable `[1, 5, 5]` without
/// Unicode support.
pub fn format_dice(roll: &[Face]) -> String {
    if !supports_unicode() {
        return format_roll(roll);
    }
    let dice: Vec<String> = roll.iter().map(|&f| format_die(f)).collect();
    format!("[{}]", dice.join(" "))
}

/// Format criteria as `3x1` terms joined by ` + `, with `*` for wildcards.
pub fn format_criteria(criteria: &[Criterion]) -> String {
    criteria
        .iter()
        .map(|c| format!("{}x{}", c.quantity, c.target))
        .collect::<Vec<_>>()
        .join(" + ")
}

/// One catalog line: name, points, dice used and criteria, column aligned.
pub fn format_rule(rule: &Rule, name_width: usize) -> String {
    let flag = if rule.active { "" } else { " (inactive)" };
    format!(
        "{:<width$}  {:>5} pts  {} dice  {}{}",
        rule.name,
        rule.point_value,
        rule.total_dice,
        format_criteria(&rule.criteria),
        flag,
        width = name_width
    )
}

pub fn format_match(m: &RuleMatch<'_>) -> String {
    format!("{} x{} = {}", m.rule.name, m.multiplier, m.points())
}
