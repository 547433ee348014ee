//! Error types for the fincalc calculation engine.

use thiserror::Error;

/// A specialized Result type for calculation operations.
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors produced by the calculation policies.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// A calculation input failed a policy precondition.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl CalcError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}
