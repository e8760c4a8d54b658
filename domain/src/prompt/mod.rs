//! Prompt domain
//!
//! Persona-driven prompt templates shared by every provider adapter.

mod template;

pub use template::PersonaPromptTemplate;
