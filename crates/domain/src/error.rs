//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur while validating expansion input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The options record could not be read.
    #[error("invalid options: {0}")]
    InvalidOptions(String),

    /// The configuration record does not have the expected shape.
    #[error("invalid config record: {0}")]
    InvalidRecord(String),

    /// A configuration key is not identifier-like.
    #[error("invalid key: {0:?}")]
    InvalidKey(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
