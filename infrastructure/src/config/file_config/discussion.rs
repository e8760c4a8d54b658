//! Discussion defaults from TOML (`[discussion]` section)

use roundtable_domain::CharacterId;
use serde::{Deserialize, Serialize};

/// Raw discussion configuration from TOML
///
/// Every field is optional: an unset field falls through to the stored
/// preference and then to the built-in default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDiscussionConfig {
    /// Participant character ids, in registration order
    pub participants: Option<Vec<String>>,
    /// Number of discussion rounds
    pub rounds: Option<u32>,
    /// Moderator character id (default: first participant)
    pub moderator: Option<String>,
    /// Upper bound on one provider call, in seconds (0 disables)
    pub turn_timeout_seconds: Option<u64>,
}

impl Default for FileDiscussionConfig {
    fn default() -> Self {
        Self {
            participants: None,
            rounds: None,
            moderator: None,
            turn_timeout_seconds: Some(60),
        }
    }
}

impl FileDiscussionConfig {
    pub fn participant_ids(&self) -> Option<Vec<CharacterId>> {
        self.participants
            .as_ref()
            .map(|ids| ids.iter().map(|id| CharacterId::new(id.trim())).collect())
    }

    pub fn moderator_id(&self) -> Option<CharacterId> {
        self.moderator.as_deref().map(|id| CharacterId::new(id.trim()))
    }
}
