//! Discussion store port
//!
//! Durable storage for completed discussions and the user's discussion
//! preferences. The engine only reads preferences before a run and appends
//! one record after it; nothing is written mid-discussion.

use async_trait::async_trait;
use roundtable_domain::{CharacterId, Discussion};
use thiserror::Error;

/// Errors that can occur while reading or writing the store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store serialization error: {0}")]
    Serialization(String),

    #[error("Store error: {0}")]
    Other(String),
}

/// Persistent store for discussions and preferences
#[async_trait]
pub trait DiscussionStore: Send + Sync {
    /// Append a completed discussion to the history
    async fn append_discussion(&self, discussion: Discussion) -> Result<(), StoreError>;

    /// The saved participant roster, if any
    async fn load_participant_roster(&self) -> Result<Option<Vec<CharacterId>>, StoreError>;

    /// The saved round-count preference, if any
    async fn load_round_count_preference(&self) -> Result<Option<u32>, StoreError>;

    /// Replace the saved participant roster
    async fn save_participant_roster(&self, roster: &[CharacterId]) -> Result<(), StoreError>;

    /// Replace the saved round-count preference
    async fn save_round_count_preference(&self, round_count: u32) -> Result<(), StoreError>;

    /// All stored discussions, oldest first
    async fn load_discussions(&self) -> Result<Vec<Discussion>, StoreError>;
}

/// Store that keeps nothing; every load is empty.
pub struct NoStore;

#[async_trait]
impl DiscussionStore for NoStore {
    async fn append_discussion(&self, _discussion: Discussion) -> Result<(), StoreError> {
        Ok(())
    }

    async fn load_participant_roster(&self) -> Result<Option<Vec<CharacterId>>, StoreError> {
        Ok(None)
    }

    async fn load_round_count_preference(&self) -> Result<Option<u32>, StoreError> {
        Ok(None)
    }

    async fn save_participant_roster(&self, _roster: &[CharacterId]) -> Result<(), StoreError> {
        Ok(())
    }

    async fn save_round_count_preference(&self, _round_count: u32) -> Result<(), StoreError> {
        Ok(())
    }

    async fn load_discussions(&self) -> Result<Vec<Discussion>, StoreError> {
        Ok(Vec::new())
    }
}
