//! Application error types

use envexpand_domain::DomainError;
use thiserror::Error;

/// Application-level errors.
///
/// Only strict expansion surfaces these; the default expansion path
/// degrades instead of failing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// A domain validation error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// A key's value refers back to itself, directly or through other keys.
    #[error("cyclic reference to {key} (via {})", .chain.join(" -> "))]
    CyclicReference {
        /// The key that closed the cycle.
        key: String,
        /// Keys being resolved when the cycle was found, outermost first.
        chain: Vec<String>,
    },

    /// Nested references went deeper than the configured bound.
    #[error("reference to {key} nested deeper than {max_depth} levels")]
    DepthExceeded {
        /// The key being resolved when the bound was hit.
        key: String,
        /// The configured bound.
        max_depth: usize,
    },
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_message_shows_chain() {
        let error = ApplicationError::CyclicReference {
            key: "A".to_string(),
            chain: vec!["A".to_string(), "B".to_string()],
        };
        assert_eq!(error.to_string(), "cyclic reference to A (via A -> B)");
    }

    #[test]
    fn test_domain_error_converts() {
        let error: ApplicationError = DomainError::InvalidKey("BAD KEY".to_string()).into();
        assert_eq!(error.to_string(), "domain error: invalid key: \"BAD KEY\"");
    }
}
