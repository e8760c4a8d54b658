//! Response provider port
//!
//! Defines the interface for text-generation providers that speak for a
//! character. One implementation exists per provider class; the
//! infrastructure layer routes each character to the right one.

use async_trait::async_trait;
use roundtable_domain::{Character, Message, Topic};
use thiserror::Error;

/// Errors a provider call can end with
///
/// Both variants are absorbed by the discussion use case and replaced by a
/// fallback line; they never abort a discussion.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// No response: transport failure, timeout, non-success status, or no
    /// adapter configured for the character's provider class
    #[error("Provider unavailable: {0}")]
    Unavailable(String),

    /// The provider answered but the reply is unusable: malformed body, no
    /// choices, or empty text
    #[error("Provider rejected the request: {0}")]
    Rejected(String),
}

impl ProviderError {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, ProviderError::Unavailable(_))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ProviderError::Unavailable(_) => "unavailable",
            ProviderError::Rejected(_) => "rejected",
        }
    }
}

/// Text-generation capability for one character at a time
///
/// Implementations build a provider-specific request from the persona, the
/// topic and a bounded window of the transcript, and return plain text
/// bounded to their configured maximum length.
#[async_trait]
pub trait ResponseProvider: Send + Sync {
    /// Generate one discussion turn for `character` in `round`
    async fn generate_turn(
        &self,
        character: &Character,
        topic: &Topic,
        transcript: &[Message],
        round: u32,
    ) -> Result<String, ProviderError>;

    /// Generate the moderator's closing summary over the full transcript
    async fn generate_summary(
        &self,
        moderator: &Character,
        topic: &Topic,
        transcript: &[Message],
    ) -> Result<String, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_and_kind() {
        let err = ProviderError::Unavailable("connection refused".to_string());
        assert_eq!(err.to_string(), "Provider unavailable: connection refused");
        assert!(err.is_unavailable());
        assert_eq!(err.kind(), "unavailable");

        let err = ProviderError::Rejected("no choices".to_string());
        assert!(!err.is_unavailable());
        assert_eq!(err.kind(), "rejected");
    }
}
