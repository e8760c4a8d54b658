//! Deterministic fallback lines
//!
//! Character-flavored canned lines produced without any provider call.
//! Used for every turn or summary whose provider call failed.

pub mod generator;
pub mod lines;
pub mod used;

pub use generator::FallbackGenerator;
pub use used::UsedLines;
