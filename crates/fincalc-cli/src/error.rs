//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid cash-flow entry.
    #[error("Invalid cash flow '{0}'. Use a comma-separated list of numbers.")]
    InvalidCashFlow(String),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
