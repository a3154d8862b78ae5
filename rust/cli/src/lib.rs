//! # Farkle CLI Library
//!
//! Command-line front end for the farkle scoring engine. It loads the rule
//! catalog from configuration, scores rolls typed by the user or thrown by a
//! seeded roller, simulates many throws into JSONL score logs, and
//! summarizes those logs.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Available Subcommands
//!
//! - `score`: Score a roll given as die faces
//! - `roll`: Throw dice with a seeded roller and score them
//! - `rules`: List the configured rule catalog
//! - `sim`: Score many throws and optionally record them as JSONL
//! - `stats`: Aggregate statistics from JSONL score logs
//! - `bench`: Benchmark scoring throughput
//! - `cfg`: Display the resolved configuration
//!
//! ## Configuration
//!
//! - `FARKLE_CONFIG`: path to a TOML file with `dice`, `seed` and `[[rules]]`
//! - `FARKLE_DICE`, `FARKLE_SEED`: override the file and defaults

use clap::Parser;
use std::io::Write;
pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
mod macros;
pub mod ui;

use cli::{Commands, FarkleCli};
use commands::{
    handle_bench_command, handle_cfg_command, handle_roll_command, handle_rules_command,
    handle_score_command, handle_sim_command, handle_stats_command,
};

pub use error::{BatchValidationError, CliError};

const COMMANDS: &[&str] = &["score", "roll", "rules", "sim", "stats", "bench", "cfg"];

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["farkle", "score", "1", "1", "1"];
/// let code = farkle_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match FarkleCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    write_or_exit!(out, "{}", e);
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "Farkle scoring CLI");
                    write_or_exit!(err, "Usage: farkle <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: farkle --help");
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match cli.cmd {
        Commands::Stats { input } => handle_stats_command(input, out, err),
        Commands::Cfg => config::load_with_sources()
            .map_err(CliError::from)
            .and_then(|resolved| handle_cfg_command(&resolved, out)),
        Commands::Score { faces, json } => {
            with_config(|cfg| handle_score_command(&faces, json, cfg, out))
        }
        Commands::Roll { dice, seed } => {
            with_config(|cfg| handle_roll_command(dice, seed, cfg, out))
        }
        Commands::Rules { all } => with_config(|cfg| handle_rules_command(all, cfg, out)),
        Commands::Sim {
            rolls,
            dice,
            seed,
            output,
        } => with_config(|cfg| handle_sim_command(rolls, dice, seed, output, cfg, out, err)),
        Commands::Bench { iterations } => {
            with_config(|cfg| handle_bench_command(iterations, cfg, out))
        }
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

/// Loads the configuration and hands it to a command handler.
fn with_config<F>(handler: F) -> Result<(), CliError>
where
    F: FnOnce(&config::Config) -> Result<(), CliError>,
{
    let cfg = config::load()?;
    handler(&cfg)
}
