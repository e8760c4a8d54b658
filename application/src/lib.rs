//! Application layer for roundtable
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{BehaviorConfig, GenerationParams};
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    discussion_store::{DiscussionStore, StoreError},
    progress::{NoProgress, ProgressNotifier},
    response_provider::{ProviderError, ResponseProvider},
};
pub use use_cases::prepare_discussion::{
    DiscussionPreferences, PrepareDiscussionUseCase, PreferenceOverrides,
};
pub use use_cases::run_discussion::{RunDiscussionError, RunDiscussionInput, RunDiscussionUseCase};
