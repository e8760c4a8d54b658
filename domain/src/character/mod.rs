//! Character domain
//!
//! Reference data for the round-table participants: who they are, how they
//! speak, and which provider class answers for them.

pub mod entities;
pub mod registry;
pub mod speaking_style;
