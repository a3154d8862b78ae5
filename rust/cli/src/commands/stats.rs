//! Statistics aggregation command for score logs.
//!
//! Aggregates JSONL score records (plain or `.zst`, a single file or a
//! directory tree) into record counts, bust rate, point totals and how often
//! each rule was applied. Records whose totals disagree with their own
//! matches are reported and fail the command.

use crate::error::{BatchValidationError, CliError};
use crate::io_utils::{collect_jsonl_files, read_text_auto};
use crate::ui;
use farkle_engine::logger::ScoreRecord;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

#[derive(Default)]
struct StatsState {
    rolls: u64,
    busts: u64,
    points: u64,
    dice: u64,
    leftover: u64,
    rules: BTreeMap<String, u64>,
    corrupted: Vec<BatchValidationError<String>>,
    inconsistent: u64,
}

/// Handle the stats command.
///
/// # Arguments
///
/// * `input` - Path to a JSONL file or a directory containing score logs
/// * `out` - Output stream for the JSON summary
/// * `err` - Output stream for error messages and warnings
///
/// # Returns
///
/// `Ok(())` when every counted record is consistent, otherwise an `Err`
/// that maps to exit code `2`.
pub fn handle_stats_command(
    input: String,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let path = Path::new(&input);
    let mut state = StatsState::default();

    if path.is_dir() {
        for file in collect_jsonl_files(path) {
            let name = file.to_string_lossy().into_owned();
            match read_text_auto(&name) {
                Ok(content) => consume(&name, &content, &mut state, err)?,
                Err(e) => ui::display_warning(err, &format!("Skipping {}: {}", name, e))?,
            }
        }
    } else {
        match read_text_auto(&input) {
            Ok(s) => consume(&input, &s, &mut state, err)?,
            Err(e) => {
                ui::write_error(err, &format!("Failed to read {}: {}", input, e))?;
                return Err(CliError::InvalidInput(format!(
                    "Failed to read {}: {}",
                    input, e
                )));
            }
        }
    }

    for bad in &state.corrupted {
        ui::display_warning(err, &format!("corrupted record at {}", bad))?;
    }
    if !state.corrupted.is_empty() {
        ui::write_error(
            err,
            &format!("Skipped {} corrupted record(s)", state.corrupted.len()),
        )?;
    }
    if !path.is_dir() && state.rolls == 0 && !state.corrupted.is_empty() {
        ui::write_error(err, "Invalid record")?;
        return Err(CliError::InvalidInput("Invalid record".to_string()));
    }

    let average = if state.rolls == 0 {
        0.0
    } else {
        state.points as f64 / state.rolls as f64
    };
    let summary = serde_json::json!({
        "rolls": state.rolls,
        "busts": state.busts,
        "points": state.points,
        "average_points": average,
        "dice": state.dice,
        "leftover_dice": state.leftover,
        "rules": state.rules,
    });
    let json_output = serde_json::to_string_pretty(&summary)
        .map_err(|e| CliError::InvalidInput(format!("Failed to serialize stats: {}", e)))?;
    writeln!(out, "{}", json_output)?;

    if state.inconsistent == 0 {
        Ok(())
    } else {
        Err(CliError::InvalidInput(format!(
            "{} record(s) failed consistency checks",
            state.inconsistent
        )))
    }
}

fn consume(
    source: &str,
    content: &str,
    state: &mut StatsState,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    for (i, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let rec: ScoreRecord = match serde_json::from_str(line) {
            Ok(r) => r,
            Err(e) => {
                state.corrupted.push(BatchValidationError {
                    item_context: format!("{}:{}", source, i + 1),
                    message: e.to_string(),
                });
                continue;
            }
        };

        let matched = rec
            .matches
            .iter()
            .map(|m| m.points)
            .fold(0u64, u64::saturating_add);
        if matched != rec.points || rec.bust != rec.matches.is_empty() {
            state.inconsistent += 1;
            ui::write_error(
                err,
                &format!("Inconsistent totals in roll {}", rec.roll_id),
            )?;
        }

        state.rolls += 1;
        state.points = state.points.saturating_add(rec.points);
        state.dice += rec.roll.len() as u64;
        state.leftover += rec.leftover as u64;
        if rec.bust {
            state.busts += 1;
        }
        for m in &rec.matches {
            *state.rules.entry(m.rule.clone()).or_insert(0) += u64::from(m.multiplier);
        }
    }
    Ok(())
}
