//! Transcript message value object

use crate::character::entities::{Character, CharacterId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Where the text of a message came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageSource {
    /// Generated by the character's text-generation provider
    #[default]
    Provider,
    /// Produced by the deterministic fallback generator
    Fallback,
}

impl MessageSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageSource::Provider => "provider",
            MessageSource::Fallback => "fallback",
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, MessageSource::Fallback)
    }
}

/// One transcript entry (Value Object)
///
/// Immutable once appended to a transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub character_id: CharacterId,
    /// Display name of the speaker at the time of generation
    pub speaker_name: String,
    pub text: String,
    /// 1..=N for turns, N + 1 for the summary
    pub round: u32,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub is_summary: bool,
    #[serde(default)]
    pub source: MessageSource,
}

impl Message {
    /// Create a regular turn message
    pub fn turn(
        character: &Character,
        text: impl Into<String>,
        round: u32,
        source: MessageSource,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            character_id: character.id.clone(),
            speaker_name: character.name.clone(),
            text: text.into(),
            round,
            timestamp: Utc::now(),
            is_summary: false,
            source,
        }
    }

    /// Create the moderator's closing summary message
    pub fn summary(
        moderator: &Character,
        text: impl Into<String>,
        round: u32,
        source: MessageSource,
    ) -> Self {
        Self {
            is_summary: true,
            ..Self::turn(moderator, text, round, source)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::registry::CharacterRegistry;

    #[test]
    fn test_turn_and_summary_flags() {
        let registry = CharacterRegistry::builtin();
        let tamako = registry.lookup(&"tamako".into()).unwrap();

        let turn = Message::turn(tamako, "こんにちは", 1, MessageSource::Provider);
        assert!(!turn.is_summary);
        assert_eq!(turn.speaker_name, "野比玉子");

        let summary = Message::summary(tamako, "まとめです", 3, MessageSource::Fallback);
        assert!(summary.is_summary);
        assert_eq!(summary.round, 3);
        assert!(summary.source.is_fallback());
        assert_ne!(turn.id, summary.id);
    }

    #[test]
    fn test_missing_optional_fields_deserialize_with_defaults() {
        let json = r#"{
            "id": "m1",
            "character_id": "tomi",
            "speaker_name": "福士とみ",
            "text": "だべ",
            "round": 1,
            "timestamp": "2024-05-01T10:00:00Z"
        }"#;
        let message: Message = serde_json::from_str(json).unwrap();
        assert!(!message.is_summary);
        assert_eq!(message.source, MessageSource::Provider);
    }
}
