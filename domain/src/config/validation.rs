//! Structured configuration issues
//!
//! Configuration loaders report problems as [`ConfigIssue`] values instead of
//! failing on the first one, so every problem can be shown at once.

use std::fmt;

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// `rounds = 0`: a discussion needs at least one round.
    ZeroRounds,
    /// `rounds` is above the largest accepted round count.
    TooManyRounds,
    /// A participant or moderator id is an empty string.
    EmptyCharacterId,
    /// A participant or moderator id is not in the character registry.
    UnknownCharacter,
    /// The moderator is not one of the configured participants.
    ModeratorNotParticipant,
    /// A routing override names a provider that does not exist.
    UnknownRoutingTarget,
    /// A length or window setting is zero.
    ZeroLimit,
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{level}: {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_severity() {
        let err = ConfigIssue::error(ConfigIssueCode::ZeroRounds, "rounds must be >= 1");
        assert!(err.is_error());
        assert_eq!(err.to_string(), "error: rounds must be >= 1");

        let warn = ConfigIssue::warning(ConfigIssueCode::UnknownRoutingTarget, "x");
        assert!(!warn.is_error());
        assert_eq!(warn.code, ConfigIssueCode::UnknownRoutingTarget);
    }
}
