//! Domain layer for roundtable
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Round-table discussion
//!
//! A fixed roster of characters discusses a free-text topic over a number of
//! rounds. Every participant speaks exactly once per round, in a freshly
//! shuffled order, and the moderator closes the discussion with one summary.
//!
//! ## Fallback lines
//!
//! When a text-generation provider cannot answer, the
//! [`FallbackGenerator`] produces a canned, character-flavored line so a
//! discussion never fails once it has started.

pub mod character;
pub mod config;
pub mod core;
pub mod discussion;
pub mod fallback;
pub mod prompt;

// Re-export commonly used types
pub use character::{
    entities::{Character, CharacterId, Persona, ProviderClass},
    registry::CharacterRegistry,
    speaking_style::SpeakingStyle,
};
pub use config::{
    OutputFormat,
    validation::{ConfigIssue, ConfigIssueCode, Severity},
};
pub use core::{
    error::DomainError,
    string::truncate_chars,
    topic::{Topic, TopicCategory, TopicKind},
};
pub use discussion::{
    entities::{Discussion, DiscussionPlan},
    message::{Message, MessageSource},
    phase::DiscussionPhase,
    record::DiscussionRecordBuilder,
};
pub use fallback::{FallbackGenerator, UsedLines};
pub use prompt::PersonaPromptTemplate;
