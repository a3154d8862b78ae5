//! Error types for the CLI application.
//!
//! This module defines the error types used throughout the CLI for better
//! error propagation and handling.
//!
//! ## Batch Validation Errors
//!
//! The `BatchValidationError<T>` type records which item of a batch failed
//! and why. The stats command uses it to report corrupted score records by
//! line number.

use crate::config::ConfigError;
use farkle_engine::errors::GameError;
use std::fmt;

/// Custom error type for CLI operations.
///
/// This enum encompasses all error types that can occur during CLI execution,
/// allowing for proper error propagation using the `?` operator.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (file operations, stdout/stderr writes, etc.)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Configuration error
    Config(String),

    /// Engine-related error (bad roll, bad catalog)
    Engine(GameError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Invalid configuration: {}", msg),
            CliError::Engine(e) => write!(f, "Engine error: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            CliError::Engine(e) => Some(e),
            _ => None,
        }
    }
}

// Automatic conversion from std::io::Error to CliError
impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<GameError> for CliError {
    fn from(error: GameError) -> Self {
        CliError::Engine(error)
    }
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        CliError::Config(error.to_string())
    }
}

/// Generic error type for batch validation operations.
///
/// Used by commands that process multiple items and need to collect errors
/// with context for user-friendly error reporting. Each error tracks the item
/// that failed and a descriptive error message.
///
/// # Type Parameters
///
/// * `T` - Context type identifying the failed item (e.g., `usize` for a line
///   number, `String` for a file path). Must implement `Display`.
///
/// # Examples
///
/// ```rust
/// use farkle_cli::BatchValidationError;
///
/// let error = BatchValidationError {
///     item_context: 5,
///     message: "invalid JSON".to_string(),
/// };
/// assert_eq!(error.to_string(), "5: invalid JSON");
/// ```
#[derive(Debug)]
pub struct BatchValidationError<T> {
    /// Context identifying the item that failed validation
    pub item_context: T,
    /// Descriptive error message
    pub message: String,
}

impl<T: std::fmt::Display> std::fmt::Display for BatchValidationError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.item_context, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_validation_error_with_usize() {
        let error = BatchValidationError {
            item_context: 42,
            message: "Test error".to_string(),
        };
        assert_eq!(error.to_string(), "42: Test error");
    }

    #[test]
    fn test_batch_validation_error_with_string() {
        let error = BatchValidationError {
            item_context: "scores.jsonl:3".to_string(),
            message: "missing field `roll`".to_string(),
        };
        assert_eq!(error.to_string(), "scores.jsonl:3: missing field `roll`");
    }

    #[test]
    fn test_engine_error_display_and_source() {
        use std::error::Error;
        let e = CliError::from(GameError::EmptyRoll);
        assert_eq!(e.to_string(), "Engine error: Roll contains no dice");
        assert!(e.source().is_some());
    }
}
