//! OpenAI-compatible chat completions provider
//!
//! Talks to any endpoint that accepts the `/v1/chat/completions` request
//! shape, authenticated with a bearer key.

mod adapter;
mod types;

pub use adapter::OpenAiProviderAdapter;
