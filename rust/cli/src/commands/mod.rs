//! Command handler modules for the farkle CLI.
//!
//! Each command is implemented in its own module file with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers: Helper functions specific to that command
//! - Dependency injection: Output streams (`&mut dyn Write`) and the resolved
//!   [`crate::config::Config`] are passed as parameters
//! - Error propagation: All errors propagated via `CliError` enum

mod bench;
mod cfg;
mod roll;
mod rules;
mod score;
mod sim;
mod stats;

pub use bench::handle_bench_command;
pub use cfg::handle_cfg_command;
pub use roll::handle_roll_command;
pub use rules::handle_rules_command;
pub use score::handle_score_command;
pub use sim::handle_sim_command;
pub use stats::handle_stats_command;
