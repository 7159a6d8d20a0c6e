//! Error types for the terminal app.
//!
//! Bad checkout input never reaches here: the session re-prompts on every
//! [`RentalError`](rental_core::RentalError). What is left are real failures
//! of the terminal and the JSON encoder. Configuration problems surface
//! before the session starts as [`ConfigError`](crate::ConfigError).

use thiserror::Error;

/// Terminal app errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode agreement as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CliResult<T> = Result<T, CliError>;
