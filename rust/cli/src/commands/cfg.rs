//! Configuration display command.
//!
//! Shows the resolved configuration as JSON, with the source of every
//! value (default, environment, or configuration file).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "dice": {
//!     "value": 6,
//!     "source": "default"
//!   },
//!   "seed": {
//!     "value": null,
//!     "source": "default"
//!   },
//!   "rules": {
//!     "value": ["Standard 100", ...],
//!     "source": "default"
//!   }
//! }
//! ```

use crate::config::ConfigResolved;
use crate::error::CliError;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Io` if writing to the output stream fails.
pub fn handle_cfg_command(resolved: &ConfigResolved, out: &mut dyn Write) -> Result<(), CliError> {
    let ConfigResolved { config, sources } = resolved;
    let rule_names: Vec<&str> = config.rules.iter().map(|r| r.name.as_str()).collect();
    let display = serde_json::json!({
        "dice": {
            "value": config.dice,
            "source": sources.dice,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "rules": {
            "value": rule_names,
            "source": sources.rules,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
