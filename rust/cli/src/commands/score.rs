//! Score command handler.
//!
//! Scores a roll typed on the command line against the active rules of the
//! configured catalog and prints each selected rule, the total and the
//! dice left over.

use crate::config::Config;
use crate::error::CliError;
use crate::formatters::{format_dice, format_match};
use chrono::Utc;
use farkle_engine::dice::{parse_roll, Face};
use farkle_engine::logger::{ScoreLogger, ScoreRecord};
use farkle_engine::rules::active_rules;
use farkle_engine::score::{resolve, ResolvedCombination};
use std::io::Write;

/// Handle the score command.
///
/// # Arguments
///
/// * `faces` - Die faces as typed; each argument may hold several faces
///   separated by commas
/// * `json` - Print a [`ScoreRecord`] as JSON instead of text
/// * `cfg` - Resolved configuration supplying the rule catalog
/// * `out` - Output stream for the result
///
/// # Errors
///
/// Returns `CliError::Engine` when a face is outside 1-6.
pub fn handle_score_command(
    faces: &[String],
    json: bool,
    cfg: &Config,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let roll = parse_roll(&faces.join(" "))?;
    let rules = active_rules(&cfg.rules);
    let resolved = resolve(&roll, &rules);

    if json {
        let mut ids = ScoreLogger::detached(&Utc::now().format("%Y%m%d").to_string());
        let record = ScoreRecord::from_resolved(ids.next_id(), None, &roll, &resolved);
        let json_str = serde_json::to_string_pretty(&record).map_err(std::io::Error::other)?;
        writeln!(out, "{}", json_str)?;
    } else {
        write_scored_roll(out, &roll, &resolved)?;
    }
    Ok(())
}

/// Text report shared by the score and roll commands.
pub(crate) fn write_scored_roll(
    out: &mut dyn Write,
    roll: &[Face],
    resolved: &ResolvedCombination<'_>,
) -> std::io::Result<()> {
    writeln!(out, "Roll: {}", format_dice(roll))?;
    if resolved.is_bust() {
        writeln!(out, "Bust! No scoring dice.")?;
    }
    for m in &resolved.matches {
        writeln!(out, "  {}", format_match(m))?;
    }
    writeln!(out, "Total: {}", resolved.total_points())?;
    writeln!(out, "Leftover dice: {}", resolved.leftover)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(faces: &[&str]) -> Vec<String> {
        faces.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_score_prints_matches_and_total() {
        let mut out = Vec::new();
        handle_score_command(&args(&["1", "1", "1", "5"]), false, &Config::default(), &mut out)
            .unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Triple 1s x1 = 1000"));
        assert!(output.contains("Standard 50 x1 = 50"));
        assert!(output.contains("Total: 1050"));
        assert!(output.contains("Leftover dice: 0"));
        assert!(!output.contains("Bust"));
    }

    #[test]
    fn test_score_accepts_comma_separated_argument() {
        let mut out = Vec::new();
        handle_score_command(&args(&["2,2,3,3,5,5"]), false, &Config::default(), &mut out)
            .unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Three Pair x1 = 1500"));
    }

    #[test]
    fn test_score_reports_bust() {
        let mut out = Vec::new();
        handle_score_command(&args(&["2", "3", "4"]), false, &Config::default(), &mut out)
            .unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Bust!"));
        assert!(output.contains("Total: 0"));
        assert!(output.contains("Leftover dice: 3"));
    }

    #[test]
    fn test_score_json_output_is_a_record() {
        let mut out = Vec::new();
        handle_score_command(&args(&["1", "1", "1", "1", "1", "1"]), true, &Config::default(), &mut out)
            .unwrap();
        let rec: ScoreRecord = serde_json::from_slice(&out).expect("valid record");
        assert_eq!(rec.points, 2000);
        assert_eq!(rec.matches.len(), 1);
        assert_eq!(rec.matches[0].multiplier, 2);
        assert!(!rec.bust);
    }

    #[test]
    fn test_score_skips_inactive_rules() {
        let mut cfg = Config::default();
        for r in cfg.rules.iter_mut() {
            if r.name == "Triple 1s" {
                r.active = false;
            }
        }
        let mut out = Vec::new();
        handle_score_command(&args(&["1", "1", "1"]), false, &cfg, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Standard 100 x3 = 300"));
    }

    #[test]
    fn test_score_rejects_invalid_face() {
        let mut out = Vec::new();
        let result = handle_score_command(&args(&["1", "7"]), false, &Config::default(), &mut out);
        assert!(matches!(result, Err(CliError::Engine(_))));
        assert!(out.is_empty());
    }
}
