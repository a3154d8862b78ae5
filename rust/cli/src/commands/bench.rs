//! Bench command handler for scoring performance benchmarking.
//!
//! Scores a fixed number of six-dice throws from a roller seeded with 1 and
//! reports iteration count, elapsed time and throughput.

use crate::config::Config;
use crate::error::CliError;
use farkle_engine::dice::DiceRoller;
use farkle_engine::rules::active_rules;
use farkle_engine::score::resolve;
use std::io::Write;

/// Handle the bench command.
///
/// # Arguments
///
/// * `iterations` - Number of throws to score (must be >= 1)
/// * `cfg` - Resolved configuration supplying rules and dice count
/// * `out` - Output stream for benchmark results
pub fn handle_bench_command(
    iterations: u64,
    cfg: &Config,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if iterations == 0 {
        return Err(CliError::InvalidInput("iterations must be >= 1".into()));
    }
    let rules = active_rules(&cfg.rules);
    // rolls are generated up front so only scoring is timed
    let mut roller = DiceRoller::new_with_seed(1);
    let rolls: Vec<_> = (0..iterations).map(|_| roller.roll(cfg.dice)).collect();

    let start = std::time::Instant::now();
    let mut points = 0u64;
    for roll in &rolls {
        points = points.saturating_add(resolve(roll, &rules).total_points());
    }
    let dur = start.elapsed();

    let per_sec = iterations as f64 / dur.as_secs_f64().max(f64::EPSILON);
    writeln!(out, "Benchmark: {} iters in {:?}", iterations, dur)?;
    writeln!(out, "Throughput: {:.0} rolls/sec", per_sec)?;
    writeln!(out, "Points scored: {}", points)?;
    Ok(())
}
