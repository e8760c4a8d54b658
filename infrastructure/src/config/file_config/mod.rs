//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod discussion;
mod generation;
mod logging;
mod output;
mod providers;
mod store;

pub use discussion::FileDiscussionConfig;
pub use generation::FileGenerationConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use providers::{FileBedrockConfig, FileOpenAiConfig, FileProvidersConfig};
pub use store::FileStoreConfig;

use crate::providers::ProviderKind;
use roundtable_domain::{
    CharacterId, CharacterRegistry, ConfigIssue, ConfigIssueCode, DiscussionPlan, ProviderClass,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration that cannot be used as-is
#[derive(Error, Debug)]
pub enum ConfigValidationError {
    #[error("invalid configuration:\n{}", format_issues(.0))]
    Invalid(Vec<ConfigIssue>),
}

fn format_issues(issues: &[ConfigIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("  - {}", issue.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Discussion defaults
    pub discussion: FileDiscussionConfig,
    /// Prompt and reply bounds
    pub generation: FileGenerationConfig,
    /// Provider settings and class routing
    pub providers: FileProvidersConfig,
    /// Store location
    pub store: FileStoreConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Conversation log settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Character ids are checked against `registry`.
    pub fn validate(&self, registry: &CharacterRegistry) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        self.validate_discussion(registry, &mut issues);
        self.validate_limits(&mut issues);
        self.validate_routing(&mut issues);
        issues
    }

    /// Validate and split the result: errors fail, warnings are returned.
    pub fn check(
        &self,
        registry: &CharacterRegistry,
    ) -> Result<Vec<ConfigIssue>, ConfigValidationError> {
        let (errors, warnings): (Vec<_>, Vec<_>) = self
            .validate(registry)
            .into_iter()
            .partition(|issue| issue.is_error());
        if errors.is_empty() {
            Ok(warnings)
        } else {
            Err(ConfigValidationError::Invalid(errors))
        }
    }

    fn validate_discussion(&self, registry: &CharacterRegistry, issues: &mut Vec<ConfigIssue>) {
        let discussion = &self.discussion;

        if discussion.rounds == Some(0) {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroRounds,
                "discussion.rounds: a discussion needs at least one round",
            ));
        }
        if let Some(rounds) = discussion.rounds
            && rounds > DiscussionPlan::MAX_ROUND_COUNT
        {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::TooManyRounds,
                format!(
                    "discussion.rounds: {} exceeds the maximum of {}",
                    rounds,
                    DiscussionPlan::MAX_ROUND_COUNT
                ),
            ));
        }

        let participants = discussion.participant_ids();
        for id in participants.iter().flatten() {
            check_character_id("discussion.participants", id, registry, issues);
        }

        if let Some(moderator) = discussion.moderator_id() {
            check_character_id("discussion.moderator", &moderator, registry, issues);
            if let Some(participants) = &participants
                && !moderator.as_str().is_empty()
                && !participants.contains(&moderator)
            {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::ModeratorNotParticipant,
                    format!(
                        "discussion.moderator: '{}' is not one of discussion.participants",
                        moderator
                    ),
                ));
            }
        }

        if discussion.turn_timeout_seconds == Some(0) {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::ZeroLimit,
                "discussion.turn_timeout_seconds: 0 disables the per-call timeout",
            ));
        }
    }

    fn validate_limits(&self, issues: &mut Vec<ConfigIssue>) {
        let limits = [
            ("generation.transcript_window", self.generation.transcript_window),
            ("generation.max_response_chars", self.generation.max_response_chars),
            ("generation.max_summary_chars", self.generation.max_summary_chars),
            (
                "providers.openai.max_tokens",
                self.providers.openai.max_tokens as usize,
            ),
            (
                "providers.bedrock.max_tokens",
                self.providers.bedrock.max_tokens as usize,
            ),
        ];
        for (field, value) in limits {
            if value == 0 {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::ZeroLimit,
                    format!("{field}: must be greater than 0"),
                ));
            }
        }
    }

    fn validate_routing(&self, issues: &mut Vec<ConfigIssue>) {
        let mut entries: Vec<_> = self.providers.routing.iter().collect();
        entries.sort();
        for (class, provider) in entries {
            if class.parse::<ProviderClass>().is_err() {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::UnknownRoutingTarget,
                    format!("providers.routing: unknown provider class '{class}', ignored"),
                ));
            }
            if ProviderKind::from_name(provider).is_none() {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::UnknownRoutingTarget,
                    format!(
                        "providers.routing.{class}: unknown provider '{provider}', ignored"
                    ),
                ));
            }
        }
    }
}

fn check_character_id(
    field: &str,
    id: &CharacterId,
    registry: &CharacterRegistry,
    issues: &mut Vec<ConfigIssue>,
) {
    if id.as_str().is_empty() {
        issues.push(ConfigIssue::error(
            ConfigIssueCode::EmptyCharacterId,
            format!("{field}: character id cannot be empty"),
        ));
    } else if !registry.contains(id) {
        issues.push(ConfigIssue::error(
            ConfigIssueCode::UnknownCharacter,
            format!("{field}: unknown character '{id}'"),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roundtable_domain::OutputFormat;

    fn codes(config: &FileConfig) -> Vec<ConfigIssueCode> {
        config
            .validate(&CharacterRegistry::builtin())
            .iter()
            .map(|issue| issue.code)
            .collect()
    }

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[discussion]
participants = ["tamako", "tomi"]
rounds = 3
moderator = "tomi"

[generation]
transcript_window = 4
max_response_chars = 80

[providers.openai]
url = "http://localhost:8080/v1/chat/completions"
model = "gpt-4o-mini"
timeout_seconds = 10

[providers.bedrock]
region = "us-east-1"
profile = "work"

[providers.routing]
bedrock = "openai"

[store]
data_dir = "/tmp/roundtable"

[output]
format = "json"
color = false

[logging]
conversation_log = "/tmp/roundtable/log.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.discussion.participant_ids(),
            Some(vec![CharacterId::from("tamako"), CharacterId::from("tomi")])
        );
        assert_eq!(config.discussion.rounds, Some(3));
        assert_eq!(config.discussion.moderator_id(), Some(CharacterId::from("tomi")));
        assert_eq!(config.generation.transcript_window, 4);
        assert_eq!(config.generation.max_summary_chars, 150);
        assert_eq!(config.providers.openai.model, "gpt-4o-mini");
        assert_eq!(config.providers.openai.api_key_env, "OPENAI_API_KEY");
        assert_eq!(config.providers.bedrock.profile.as_deref(), Some("work"));
        assert_eq!(
            config.providers.routing.get("bedrock").map(String::as_str),
            Some("openai")
        );
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(config.logging.conversation_log.is_some());
        assert!(codes(&config).is_empty());
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = FileConfig::default();
        assert!(config.discussion.participants.is_none());
        assert_eq!(config.discussion.turn_timeout_seconds, Some(60));
        assert_eq!(config.generation.to_params().transcript_window, 6);
        assert!(config.output.color);
        assert!(codes(&config).is_empty());
    }

    #[test]
    fn test_zero_rounds_and_limits_are_errors() {
        let toml_str = r#"
[discussion]
rounds = 0

[generation]
max_response_chars = 0
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let codes = codes(&config);
        assert!(codes.contains(&ConfigIssueCode::ZeroRounds));
        assert!(codes.contains(&ConfigIssueCode::ZeroLimit));
        assert!(config.check(&CharacterRegistry::builtin()).is_err());
    }

    #[test]
    fn test_round_count_above_maximum_is_error() {
        let config: FileConfig = toml::from_str("[discussion]\nrounds = 4294967295\n").unwrap();
        assert!(codes(&config).contains(&ConfigIssueCode::TooManyRounds));
        assert!(config.check(&CharacterRegistry::builtin()).is_err());
    }

    #[test]
    fn test_character_ids_are_checked() {
        let toml_str = r#"
[discussion]
participants = ["tamako", "", "nobita"]
moderator = "suneko"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let codes = codes(&config);
        assert_eq!(
            codes,
            vec![
                ConfigIssueCode::EmptyCharacterId,
                ConfigIssueCode::UnknownCharacter,
                ConfigIssueCode::ModeratorNotParticipant,
            ]
        );

        let err = config.check(&CharacterRegistry::builtin()).unwrap_err();
        assert!(err.to_string().contains("nobita"));
    }

    #[test]
    fn test_unknown_routing_is_a_warning() {
        let toml_str = r#"
[providers.routing]
openai = "gemini"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let warnings = config.check(&CharacterRegistry::builtin()).unwrap();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].code, ConfigIssueCode::UnknownRoutingTarget);
        assert!(!warnings[0].is_error());
    }

    #[test]
    fn test_api_key_is_not_serialized() {
        let mut config = FileConfig::default();
        config.providers.openai.api_key = Some("sk-secret".to_string());
        let rendered = toml::to_string(&config).unwrap();
        assert!(!rendered.contains("sk-secret"));
    }
}
