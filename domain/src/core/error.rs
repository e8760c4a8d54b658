//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Both variants are setup-time failures: a discussion that hits one of
/// them never starts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown character: {0}")]
    UnknownCharacter(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl DomainError {
    /// Check if this error was caused by an unregistered character id
    pub fn is_unknown_character(&self) -> bool {
        matches!(self, DomainError::UnknownCharacter(_))
    }

    /// Check if this error was caused by rejected discussion parameters
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, DomainError::InvalidConfiguration(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_character_display() {
        let error = DomainError::UnknownCharacter("nobita".to_string());
        assert_eq!(error.to_string(), "Unknown character: nobita");
    }

    #[test]
    fn test_error_kind_checks() {
        assert!(DomainError::UnknownCharacter("x".into()).is_unknown_character());
        assert!(!DomainError::UnknownCharacter("x".into()).is_invalid_configuration());
        assert!(DomainError::InvalidConfiguration("empty".into()).is_invalid_configuration());
    }
}
