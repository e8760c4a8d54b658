//! Prepare Discussion use case
//!
//! Resolves the participant roster and round count for the next discussion
//! from explicit overrides, stored preferences and built-in defaults, and
//! saves preferences back on request.

use crate::ports::discussion_store::{DiscussionStore, StoreError};
use crate::use_cases::run_discussion::RunDiscussionInput;
use roundtable_domain::{CharacterId, CharacterRegistry, Discussion, DiscussionPlan};
use std::sync::Arc;
use tracing::{debug, warn};

/// Values set explicitly by the caller (CLI flags or configuration file)
#[derive(Debug, Clone, Default)]
pub struct PreferenceOverrides {
    pub participants: Option<Vec<CharacterId>>,
    pub round_count: Option<u32>,
    pub moderator: Option<CharacterId>,
}

/// Resolved discussion parameters
#[derive(Debug, Clone, PartialEq)]
pub struct DiscussionPreferences {
    pub participants: Vec<CharacterId>,
    pub round_count: u32,
    pub moderator: Option<CharacterId>,
}

impl DiscussionPreferences {
    /// Turn the preferences into a run request for `topic`
    pub fn into_input(self, topic: impl Into<String>) -> RunDiscussionInput {
        let mut input = RunDiscussionInput::new(topic, self.participants, self.round_count);
        input.moderator = self.moderator;
        input
    }
}

/// Use case for resolving and saving discussion preferences
pub struct PrepareDiscussionUseCase<S: DiscussionStore + 'static> {
    store: Arc<S>,
    registry: Arc<CharacterRegistry>,
}

impl<S: DiscussionStore + 'static> PrepareDiscussionUseCase<S> {
    pub fn new(store: Arc<S>, registry: Arc<CharacterRegistry>) -> Self {
        Self { store, registry }
    }

    /// Resolve preferences with precedence overrides > store > defaults.
    ///
    /// Defaults are every registered character and
    /// [`DiscussionPlan::DEFAULT_ROUND_COUNT`] rounds. A store that cannot be
    /// read is treated as empty. Stored ids no longer in the registry are
    /// dropped. Explicit overrides are passed through unvalidated so the run
    /// reports them.
    pub async fn resolve(&self, overrides: PreferenceOverrides) -> DiscussionPreferences {
        let participants = match overrides.participants {
            Some(participants) => participants,
            None => self
                .stored_roster()
                .await
                .unwrap_or_else(|| self.registry.ids()),
        };

        let round_count = match overrides.round_count {
            Some(round_count) => round_count,
            None => self
                .stored_round_count()
                .await
                .unwrap_or(DiscussionPlan::DEFAULT_ROUND_COUNT),
        };

        DiscussionPreferences {
            participants,
            round_count,
            moderator: overrides.moderator,
        }
    }

    /// Save the roster and round count for later runs
    pub async fn remember(&self, preferences: &DiscussionPreferences) -> Result<(), StoreError> {
        self.store
            .save_participant_roster(&preferences.participants)
            .await?;
        self.store
            .save_round_count_preference(preferences.round_count)
            .await?;
        debug!(
            "Saved preferences: {} participants, {} rounds",
            preferences.participants.len(),
            preferences.round_count
        );
        Ok(())
    }

    /// Stored discussions, newest first
    pub async fn history(&self) -> Result<Vec<Discussion>, StoreError> {
        let mut discussions = self.store.load_discussions().await?;
        discussions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(discussions)
    }

    async fn stored_roster(&self) -> Option<Vec<CharacterId>> {
        let roster = match self.store.load_participant_roster().await {
            Ok(roster) => roster?,
            Err(e) => {
                warn!("Could not read stored participants, using defaults: {}", e);
                return None;
            }
        };

        let (known, unknown): (Vec<_>, Vec<_>) = roster
            .into_iter()
            .partition(|id| self.registry.contains(id));
        if !unknown.is_empty() {
            warn!(
                "Ignoring stored participants not in the registry: {:?}",
                unknown.iter().map(|id| id.as_str()).collect::<Vec<_>>()
            );
        }
        (!known.is_empty()).then_some(known)
    }

    async fn stored_round_count(&self) -> Option<u32> {
        match self.store.load_round_count_preference().await {
            Ok(Some(round_count))
                if round_count == 0 || round_count > DiscussionPlan::MAX_ROUND_COUNT =>
            {
                warn!("Ignoring stored round count {}", round_count);
                None
            }
            Ok(round_count) => round_count,
            Err(e) => {
                warn!("Could not read stored round count, using default: {}", e);
                None
            }
        }
    }
}
