//! Roll command handler.
//!
//! Throws dice with the seeded [`DiceRoller`] and scores the result, the
//! way one throw of a Farkle turn would be scored.

use crate::commands::score::write_scored_roll;
use crate::config::Config;
use crate::error::CliError;
use farkle_engine::dice::DiceRoller;
use farkle_engine::rules::active_rules;
use farkle_engine::score::resolve;
use std::io::Write;

/// Handle the roll command.
///
/// # Arguments
///
/// * `dice` - Dice to throw; falls back to `cfg.dice`
/// * `seed` - RNG seed; falls back to `cfg.seed`, then to a random seed
/// * `cfg` - Resolved configuration
/// * `out` - Output stream for the result
pub fn handle_roll_command(
    dice: Option<u8>,
    seed: Option<u64>,
    cfg: &Config,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let count = dice.map(usize::from).unwrap_or(cfg.dice);
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let mut roller = DiceRoller::new_with_seed(seed);
    let roll = roller.roll(count);

    let rules = active_rules(&cfg.rules);
    let resolved = resolve(&roll, &rules);
    writeln!(out, "Seed: {}", seed)?;
    write_scored_roll(out, &roll, &resolved)?;
    Ok(())
}
