//! Core domain concepts shared across all subdomains.
//!
//! - [`topic::Topic`]: a validated discussion topic and its classifications
//! - [`error::DomainError`]: domain-level errors
//! - [`string`]: character-count aware string helpers

pub mod error;
pub mod string;
pub mod topic;
