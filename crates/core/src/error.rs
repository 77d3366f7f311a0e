//! Domain error model.

use thiserror::Error;

/// Result type used across the storefront domain.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every operation in the storefront core is pure and deterministic, so the only
/// failure is bad input from the caller. Errors are reported as-is; recovery
/// (placeholder rendering, skipping a card) is the caller's decision.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value was rejected (unparseable date, negative count or amount, ...).
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl DomainError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
