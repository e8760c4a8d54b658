//! Discussion domain
//!
//! Transcript messages, the validated plan a discussion runs against, the
//! scheduler phase machine, and the persistable discussion record.

pub mod entities;
pub mod message;
pub mod phase;
pub mod record;
