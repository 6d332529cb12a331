//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Two kinds cover every failure in this system. Both are raised before any
/// state mutation, so a caller that sees an error can assume the machine it
/// called is unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The caller supplied a structurally invalid value (empty name,
    /// negative or non-finite amount, zero restock quantity).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The operation is well-formed but impossible given current state
    /// (unknown product, empty stock, balance below price).
    #[error("invalid state: {0}")]
    InvalidState(String),
}

impl DomainError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }
}
