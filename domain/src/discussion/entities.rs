//! Discussion entities

use super::message::Message;
use crate::character::entities::{Character, CharacterId};
use crate::character::registry::CharacterRegistry;
use crate::core::error::DomainError;
use crate::core::topic::Topic;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Validated parameters of one discussion run
///
/// Construction is the only place discussion parameters are checked; a
/// `DiscussionPlan` that exists always satisfies `moderator ∈ participants`.
#[derive(Debug, Clone)]
pub struct DiscussionPlan {
    topic: Topic,
    participants: Vec<Character>,
    round_count: u32,
    moderator: Character,
}

impl DiscussionPlan {
    /// Round count used when neither the caller nor stored preferences set one
    pub const DEFAULT_ROUND_COUNT: u32 = 2;

    /// Largest accepted round count
    pub const MAX_ROUND_COUNT: u32 = 20;

    /// Validate raw discussion parameters against the registry.
    ///
    /// With `moderator = None` the first participant moderates.
    ///
    /// # Errors
    /// - `InvalidConfiguration` for no participants, a `round_count` outside
    ///   `1..=MAX_ROUND_COUNT`, a blank topic, duplicate participants, or a
    ///   moderator outside the participants
    /// - `UnknownCharacter` for an id missing from the registry
    pub fn new(
        topic: &str,
        participants: &[CharacterId],
        round_count: u32,
        moderator: Option<&CharacterId>,
        registry: &CharacterRegistry,
    ) -> Result<Self, DomainError> {
        if participants.is_empty() {
            return Err(DomainError::InvalidConfiguration(
                "at least one participant is required".to_string(),
            ));
        }
        if round_count < 1 {
            return Err(DomainError::InvalidConfiguration(
                "round count must be at least 1".to_string(),
            ));
        }
        if round_count > Self::MAX_ROUND_COUNT {
            return Err(DomainError::InvalidConfiguration(format!(
                "round count {round_count} exceeds the maximum of {}",
                Self::MAX_ROUND_COUNT
            )));
        }
        let topic = Topic::try_new(topic).ok_or_else(|| {
            DomainError::InvalidConfiguration("topic cannot be empty".to_string())
        })?;

        let mut seen = HashSet::new();
        if let Some(dup) = participants.iter().find(|id| !seen.insert(*id)) {
            return Err(DomainError::InvalidConfiguration(format!(
                "participant '{dup}' is listed more than once"
            )));
        }

        let moderator_id = moderator.unwrap_or(&participants[0]);
        if !participants.contains(moderator_id) {
            return Err(DomainError::InvalidConfiguration(format!(
                "moderator '{moderator_id}' is not a participant"
            )));
        }

        let participants = participants
            .iter()
            .map(|id| registry.lookup(id).cloned())
            .collect::<Result<Vec<_>, _>>()?;
        let moderator = registry.lookup(moderator_id)?.clone();

        Ok(Self {
            topic,
            participants,
            round_count,
            moderator,
        })
    }

    pub fn topic(&self) -> &Topic {
        &self.topic
    }

    pub fn participants(&self) -> &[Character] {
        &self.participants
    }

    pub fn participant_ids(&self) -> Vec<CharacterId> {
        self.participants.iter().map(|c| c.id.clone()).collect()
    }

    pub fn round_count(&self) -> u32 {
        self.round_count
    }

    pub fn moderator(&self) -> &Character {
        &self.moderator
    }

    /// Round number carried by the summary message
    pub fn summary_round(&self) -> u32 {
        self.round_count + 1
    }

    /// Number of messages a completed transcript holds (turns + summary)
    pub fn expected_message_count(&self) -> usize {
        self.participants.len() * self.round_count as usize + 1
    }
}

/// A completed discussion record (Entity)
///
/// `conversation` is kept in generation order; use [`Discussion::rounds`]
/// to view it grouped by round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Discussion {
    pub id: String,
    pub topic: String,
    pub participants: Vec<CharacterId>,
    pub moderator: CharacterId,
    pub round_count: u32,
    pub conversation: Vec<Message>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_complete: bool,
}

impl Discussion {
    /// The moderator's summary message, if present
    pub fn summary(&self) -> Option<&Message> {
        self.conversation.iter().find(|m| m.is_summary)
    }

    /// Non-summary messages in generation order
    pub fn turns(&self) -> impl Iterator<Item = &Message> {
        self.conversation.iter().filter(|m| !m.is_summary)
    }

    /// Messages grouped by round number, each group in generation order
    pub fn rounds(&self) -> BTreeMap<u32, Vec<&Message>> {
        let mut rounds: BTreeMap<u32, Vec<&Message>> = BTreeMap::new();
        for message in &self.conversation {
            rounds.entry(message.round).or_default().push(message);
        }
        rounds
    }

    /// Number of messages that came from the fallback generator
    pub fn fallback_count(&self) -> usize {
        self.conversation
            .iter()
            .filter(|m| m.source.is_fallback())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(items: &[&str]) -> Vec<CharacterId> {
        items.iter().map(|s| CharacterId::from(*s)).collect()
    }

    #[test]
    fn test_valid_plan_defaults_moderator_to_first_participant() {
        let registry = CharacterRegistry::builtin();
        let plan =
            DiscussionPlan::new("日焼け止め", &ids(&["suneko", "tomi"]), 2, None, &registry)
                .unwrap();
        assert_eq!(plan.moderator().id.as_str(), "suneko");
        assert_eq!(plan.summary_round(), 3);
        assert_eq!(plan.expected_message_count(), 5);
    }

    #[test]
    fn test_empty_participants_rejected_regardless_of_other_parameters() {
        let registry = CharacterRegistry::builtin();
        let moderator = CharacterId::from("nobody");
        for (topic, rounds) in [("話題", 2), ("", 0)] {
            let err =
                DiscussionPlan::new(topic, &[], rounds, Some(&moderator), &registry).unwrap_err();
            assert!(err.is_invalid_configuration());
        }
    }

    #[test]
    fn test_moderator_outside_participants_rejected() {
        let registry = CharacterRegistry::builtin();
        let err = DiscussionPlan::new(
            "話題",
            &ids(&["tamako", "suneko"]),
            1,
            Some(&CharacterId::from("tomi")),
            &registry,
        )
        .unwrap_err();
        assert!(err.is_invalid_configuration());
    }

    #[test]
    fn test_zero_rounds_rejected() {
        let registry = CharacterRegistry::builtin();
        let err = DiscussionPlan::new("話題", &ids(&["tamako"]), 0, None, &registry).unwrap_err();
        assert!(err.is_invalid_configuration());
    }

    #[test]
    fn test_round_count_above_maximum_rejected() {
        let registry = CharacterRegistry::builtin();
        let max = DiscussionPlan::MAX_ROUND_COUNT;
        let plan = DiscussionPlan::new("話題", &ids(&["tamako"]), max, None, &registry).unwrap();
        assert_eq!(plan.summary_round(), max + 1);

        let participants = ids(&["tamako", "tomi"]);
        for rounds in [max + 1, u32::MAX] {
            let err = DiscussionPlan::new("話題", &participants, rounds, None, &registry)
                .unwrap_err();
            assert!(err.is_invalid_configuration());
        }
    }

    #[test]
    fn test_blank_topic_rejected() {
        let registry = CharacterRegistry::builtin();
        let err = DiscussionPlan::new("  ", &ids(&["tamako"]), 1, None, &registry).unwrap_err();
        assert!(err.is_invalid_configuration());
    }

    #[test]
    fn test_duplicate_participants_rejected() {
        let registry = CharacterRegistry::builtin();
        let err = DiscussionPlan::new("話題", &ids(&["tomi", "tomi"]), 1, None, &registry)
            .unwrap_err();
        assert!(err.is_invalid_configuration());
    }

    #[test]
    fn test_unknown_participant_rejected() {
        let registry = CharacterRegistry::builtin();
        let err = DiscussionPlan::new("話題", &ids(&["tamako", "shizuka"]), 1, None, &registry)
            .unwrap_err();
        assert_eq!(err, DomainError::UnknownCharacter("shizuka".to_string()));
    }
}
