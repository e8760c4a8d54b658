//! Run Discussion use case
//!
//! Orchestrates one round-table discussion: validates the request, runs
//! every round and the moderator's summary, then hands the finished record
//! to the store.

mod scheduler;
mod summary;

use crate::config::BehaviorConfig;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::discussion_store::{DiscussionStore, StoreError};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::response_provider::ResponseProvider;
use crate::use_cases::shared::TurnContext;
use rand::SeedableRng;
use rand::rngs::StdRng;
use roundtable_domain::{
    CharacterId, CharacterRegistry, Discussion, DiscussionPlan, DiscussionRecordBuilder,
    DomainError,
};
use scheduler::TurnScheduler;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur while running a discussion
#[derive(Error, Debug)]
pub enum RunDiscussionError {
    /// The request was rejected before any provider call
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The discussion completed but could not be appended to the store
    #[error("Discussion completed but could not be stored: {source}")]
    Store {
        discussion: Box<Discussion>,
        #[source]
        source: StoreError,
    },
}

impl RunDiscussionError {
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, RunDiscussionError::Domain(e) if e.is_invalid_configuration())
    }

    pub fn is_unknown_character(&self) -> bool {
        matches!(self, RunDiscussionError::Domain(e) if e.is_unknown_character())
    }

    /// The completed discussion, when the failure happened after completion
    pub fn discussion(&self) -> Option<&Discussion> {
        match self {
            RunDiscussionError::Store { discussion, .. } => Some(discussion.as_ref()),
            RunDiscussionError::Domain(_) => None,
        }
    }
}

/// Input for the RunDiscussion use case
#[derive(Debug, Clone)]
pub struct RunDiscussionInput {
    /// Free-text topic
    pub topic: String,
    /// Participants in registration order of the request
    pub participants: Vec<CharacterId>,
    pub round_count: u32,
    /// Moderator; the first participant when `None`
    pub moderator: Option<CharacterId>,
    /// Seed for turn order and fallback choice; entropy when `None`
    pub seed: Option<u64>,
    /// Whether to append the finished discussion to the store
    pub persist: bool,
}

impl RunDiscussionInput {
    pub fn new(
        topic: impl Into<String>,
        participants: Vec<CharacterId>,
        round_count: u32,
    ) -> Self {
        Self {
            topic: topic.into(),
            participants,
            round_count,
            moderator: None,
            seed: None,
            persist: true,
        }
    }

    pub fn with_moderator(mut self, moderator: impl Into<CharacterId>) -> Self {
        self.moderator = Some(moderator.into());
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn without_persist(mut self) -> Self {
        self.persist = false;
        self
    }
}

/// Use case for running a round-table discussion
pub struct RunDiscussionUseCase<P: ResponseProvider + 'static, S: DiscussionStore + 'static> {
    provider: Arc<P>,
    store: Arc<S>,
    registry: Arc<CharacterRegistry>,
    behavior: BehaviorConfig,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl<P: ResponseProvider + 'static, S: DiscussionStore + 'static> RunDiscussionUseCase<P, S> {
    pub fn new(provider: Arc<P>, store: Arc<S>, registry: Arc<CharacterRegistry>) -> Self {
        Self {
            provider,
            store,
            registry,
            behavior: BehaviorConfig::default(),
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_behavior(mut self, behavior: BehaviorConfig) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        input: RunDiscussionInput,
    ) -> Result<Discussion, RunDiscussionError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    ///
    /// Validation errors are returned before any provider call. Once the
    /// first round starts the discussion always completes: provider failures
    /// are replaced by fallback lines.
    pub async fn execute_with_progress(
        &self,
        input: RunDiscussionInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<Discussion, RunDiscussionError> {
        let plan = DiscussionPlan::new(
            &input.topic,
            &input.participants,
            input.round_count,
            input.moderator.as_ref(),
            &self.registry,
        )?;

        let rng = match input.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let record = DiscussionRecordBuilder::new(&plan);

        info!(
            "Starting discussion on \"{}\" with {} participants, {} rounds, moderator {}",
            plan.topic(),
            plan.participants().len(),
            plan.round_count(),
            plan.moderator().id
        );
        self.conversation_logger.log(ConversationEvent::new(
            "discussion_started",
            serde_json::json!({
                "discussion_id": record.id(),
                "topic": plan.topic().text(),
                "topic_kind": plan.topic().kind().as_str(),
                "topic_category": plan.topic().category().as_str(),
                "participants": plan.participant_ids(),
                "moderator": plan.moderator().id.as_str(),
                "round_count": plan.round_count(),
            }),
        ));

        let ctx = TurnContext {
            provider: self.provider.as_ref(),
            progress,
            logger: self.conversation_logger.as_ref(),
            timeout: self.behavior.timeout,
            discussion_id: record.id(),
        };
        let transcript = TurnScheduler::new(&plan, rng).run(&ctx).await;
        let discussion = record.build(transcript);

        info!(
            "Discussion {} complete: {} messages, {} from fallback",
            discussion.id,
            discussion.conversation.len(),
            discussion.fallback_count()
        );
        self.conversation_logger.log(ConversationEvent::new(
            "discussion_completed",
            serde_json::json!({
                "discussion_id": discussion.id,
                "message_count": discussion.conversation.len(),
                "fallback_count": discussion.fallback_count(),
                "persisted": input.persist,
            }),
        ));

        if input.persist
            && let Err(source) = self.store.append_discussion(discussion.clone()).await
        {
            warn!("Failed to store discussion {}: {}", discussion.id, source);
            return Err(RunDiscussionError::Store {
                discussion: Box::new(discussion),
                source,
            });
        }

        Ok(discussion)
    }
}
