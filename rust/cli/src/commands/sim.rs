//! Simulation command handler for large-scale roll scoring.
//!
//! Throws and scores many rolls with one seeded roller, optionally writing a
//! [`ScoreRecord`] per roll to a JSONL file, and prints a summary.
//!
//! # Examples
//!
//! ```no_run
//! use farkle_cli::run;
//! use std::io;
//!
//! let code = run(
//!     ["farkle", "sim", "--rolls", "1000", "--seed", "42", "--output", "data/scores.jsonl"],
//!     &mut io::stdout(),
//!     &mut io::stderr(),
//! );
//! assert_eq!(code, 0);
//! ```

use crate::config::Config;
use crate::error::CliError;
use crate::ui;
use chrono::Utc;
use farkle_engine::dice::DiceRoller;
use farkle_engine::logger::{ScoreLogger, ScoreRecord};
use farkle_engine::rules::active_rules;
use farkle_engine::score::resolve;
use std::io::Write;

/// Handle the sim command.
///
/// # Arguments
///
/// * `rolls` - Number of throws to score (must be >= 1)
/// * `dice` - Dice per throw; falls back to `cfg.dice`
/// * `seed` - Roller seed; falls back to `cfg.seed`, then a random seed
/// * `output` - Optional JSONL path for score records
/// * `cfg` - Resolved configuration
/// * `out` - Output stream for the summary
/// * `err` - Output stream for error messages
pub fn handle_sim_command(
    rolls: u64,
    dice: Option<u8>,
    seed: Option<u64>,
    output: Option<String>,
    cfg: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if rolls == 0 {
        ui::write_error(err, "rolls must be >= 1")?;
        return Err(CliError::InvalidInput("rolls must be >= 1".to_string()));
    }

    let count = dice.map(usize::from).unwrap_or(cfg.dice);
    let base_seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let mut roller = DiceRoller::new_with_seed(base_seed);
    let rules = active_rules(&cfg.rules);

    let mut logger = match output.as_deref() {
        Some(path) => match ScoreLogger::create(path) {
            Ok(logger) => logger,
            Err(e) => {
                ui::write_error(err, &format!("Failed to create {}: {}", path, e))?;
                return Err(CliError::Io(e));
            }
        },
        None => ScoreLogger::detached(&Utc::now().format("%Y%m%d").to_string()),
    };

    let mut busts = 0u64;
    let mut points = 0u64;
    for _ in 0..rolls {
        let roll = roller.roll(count);
        let resolved = resolve(&roll, &rules);
        if resolved.is_bust() {
            busts += 1;
        }
        points = points.saturating_add(resolved.total_points());
        if output.is_some() {
            let record =
                ScoreRecord::from_resolved(logger.next_id(), Some(base_seed), &roll, &resolved);
            logger.write(&record)?;
        }
    }

    let thrown = roller.dice_thrown();
    tracing::info!(rolls, busts, points, thrown, seed = base_seed, "simulation finished");

    writeln!(out, "Simulated {} rolls of {} dice", rolls, count)?;
    writeln!(out, "Seed: {}", base_seed)?;
    writeln!(out, "Dice thrown: {}", thrown)?;
    writeln!(
        out,
        "Busts: {} ({:.1}%)",
        busts,
        busts as f64 * 100.0 / rolls as f64
    )?;
    writeln!(out, "Average points: {:.2}", points as f64 / rolls as f64)?;
    if let Some(path) = output {
        writeln!(out, "Wrote {} records to {}", rolls, path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sim_rejects_zero_rolls() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_sim_command(0, None, Some(1), None, &Config::default(), &mut out, &mut err);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
        assert!(String::from_utf8(err).unwrap().contains("rolls must be >= 1"));
    }

    #[test]
    fn test_sim_summary_is_deterministic() {
        let run_once = || {
            let mut out = Vec::new();
            let mut err = Vec::new();
            handle_sim_command(200, None, Some(42), None, &Config::default(), &mut out, &mut err)
                .unwrap();
            String::from_utf8(out).unwrap()
        };
        let a = run_once();
        assert_eq!(a, run_once());
        assert!(a.contains("Simulated 200 rolls of 6 dice"));
        assert!(a.contains("Seed: 42"));
        assert!(a.contains("Dice thrown: 1200"));
        assert!(a.contains("Busts: "));
        assert!(a.contains("Average points: "));
    }

    #[test]
    fn test_sim_writes_one_record_per_roll() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("scores.jsonl");
        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_sim_command(
            25,
            Some(3),
            Some(5),
            Some(path.to_string_lossy().into_owned()),
            &Config::default(),
            &mut out,
            &mut err,
        )
        .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let records: Vec<ScoreRecord> = content
            .lines()
            .map(|l| serde_json::from_str(l).expect("valid record"))
            .collect();
        assert_eq!(records.len(), 25);
        assert!(records.iter().all(|r| r.roll.len() == 3 && r.seed == Some(5)));
        assert!(records.iter().all(|r| r.leftover <= 3));
        assert!(String::from_utf8(out).unwrap().contains("Wrote 25 records"));
    }

    #[test]
    fn test_sim_reports_unwritable_output() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();
        let path = blocker.join("scores.jsonl");
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_sim_command(
            3,
            None,
            Some(1),
            Some(path.to_string_lossy().into_owned()),
            &Config::default(),
            &mut out,
            &mut err,
        );
        assert!(matches!(result, Err(CliError::Io(_))));
        assert!(String::from_utf8(err).unwrap().contains("Failed to create"));
    }

    #[test]
    fn test_sim_propagates_stderr_failure() {
        struct Closed;
        impl Write for Closed {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("closed"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();
        let path = blocker.join("scores.jsonl");
        let mut out = Vec::new();
        let result = handle_sim_command(
            3,
            None,
            Some(1),
            Some(path.to_string_lossy().into_owned()),
            &Config::default(),
            &mut out,
            &mut Closed,
        );
        match result {
            Err(CliError::Io(e)) => assert_eq!(e.to_string(), "closed"),
            other => panic!("expected the stderr write error, got {:?}", other),
        }
    }
}
