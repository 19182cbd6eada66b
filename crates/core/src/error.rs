//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures. Presentation
/// concerns (how a rejection is shown to the user) belong to the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A form or value failed validation (e.g. blank field, malformed number).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The operation exists at the boundary but has no implementation yet.
    #[error("unsupported operation: {0}")]
    Unsupported(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported(msg.into())
    }
}
