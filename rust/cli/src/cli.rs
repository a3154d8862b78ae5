//! Command-line argument definitions.

use clap::{Parser, Subcommand};

use crate::config::MAX_DICE;

#[derive(Debug, Parser)]
#[command(
    name = "farkle",
    version,
    about = "Score Farkle dice rolls against a configurable rule catalog"
)]
pub struct FarkleCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Score a roll given as die faces, e.g. `farkle score 1 1 1 5`
    Score {
        /// Die faces (1-6), separated by spaces or commas
        #[arg(required = true, num_args = 1..)]
        faces: Vec<String>,
        /// Print the score record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Roll dice with a seeded roller and score them
    Roll {
        /// Number of dice to throw (defaults to the configured count)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=MAX_DICE as i64))]
        dice: Option<u8>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// List the rule catalog
    Rules {
        /// Include inactive rules
        #[arg(long)]
        all: bool,
    },
    /// Roll and score many throws, optionally writing JSONL score records
    Sim {
        #[arg(long)]
        rolls: u64,
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=MAX_DICE as i64))]
        dice: Option<u8>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        output: Option<String>,
    },
    /// Aggregate statistics from JSONL score records
    Stats {
        #[arg(long)]
        input: String,
    },
    /// Measure scoring throughput
    Bench {
        #[arg(long, default_value_t = 10_000)]
        iterations: u64,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
