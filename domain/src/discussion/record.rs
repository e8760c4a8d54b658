//! Discussion record builder

use super::entities::{Discussion, DiscussionPlan};
use super::message::Message;
use crate::character::entities::CharacterId;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Assembles a finished transcript and its request parameters into a
/// persistable [`Discussion`].
///
/// Pure assembly: whatever transcript is given is passed through unchanged.
pub struct DiscussionRecordBuilder {
    id: String,
    topic: String,
    participants: Vec<CharacterId>,
    moderator: CharacterId,
    round_count: u32,
    created_at: DateTime<Utc>,
}

impl DiscussionRecordBuilder {
    /// Start a record for `plan`, stamping the creation time now
    pub fn new(plan: &DiscussionPlan) -> Self {
        Self::with_created_at(plan, Utc::now())
    }

    pub fn with_created_at(plan: &DiscussionPlan, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            topic: plan.topic().text().to_string(),
            participants: plan.participant_ids(),
            moderator: plan.moderator().id.clone(),
            round_count: plan.round_count(),
            created_at,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Wrap the transcript, stamp the completion time and mark it complete
    pub fn build(self, conversation: Vec<Message>) -> Discussion {
        Discussion {
            id: self.id,
            topic: self.topic,
            participants: self.participants,
            moderator: self.moderator,
            round_count: self.round_count,
            conversation,
            created_at: self.created_at,
            completed_at: Some(Utc::now()),
            is_complete: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CharacterRegistry, MessageSource};

    #[test]
    fn test_build_copies_plan_and_transcript() {
        let registry = CharacterRegistry::builtin();
        let participants = vec![CharacterId::from("tamako"), CharacterId::from("tsubaki")];
        let plan = DiscussionPlan::new("お弁当のおかず", &participants, 1, None, &registry)
            .unwrap();
        let tamako = registry.lookup(&participants[0]).unwrap();

        let builder = DiscussionRecordBuilder::new(&plan);
        let id = builder.id().to_string();
        let discussion = builder.build(vec![
            Message::turn(tamako, "卵焼きですね", 1, MessageSource::Provider),
            Message::summary(tamako, "まとめ", 2, MessageSource::Fallback),
        ]);

        assert_eq!(discussion.id, id);
        assert_eq!(discussion.topic, "お弁当のおかず");
        assert_eq!(discussion.participants, participants);
        assert_eq!(discussion.moderator.as_str(), "tamako");
        assert!(discussion.is_complete);
        assert!(discussion.completed_at.unwrap() >= discussion.created_at);
        assert_eq!(discussion.summary().unwrap().text, "まとめ");
        assert_eq!(discussion.fallback_count(), 1);
        assert_eq!(discussion.rounds().len(), 2);
    }
}
