//! OpenAI provider adapter
//!
//! Implements `ProviderAdapter` to plug into the `RoutingProvider`.

use super::types::{self, ChatCompletionRequest};
use crate::config::FileOpenAiConfig;
use crate::providers::{ProviderAdapter, ProviderInitError, ProviderKind};
use async_trait::async_trait;
use roundtable_application::GenerationParams;
use roundtable_application::ports::response_provider::{ProviderError, ResponseProvider};
use roundtable_domain::{Character, Message, PersonaPromptTemplate, Topic, truncate_chars};
use std::time::Duration;
use tracing::{debug, info, warn};

pub struct OpenAiProviderAdapter {
    client: reqwest::Client,
    url: String,
    api_key: String,
    model: String,
    max_tokens: u32,
    params: GenerationParams,
}

impl OpenAiProviderAdapter {
    /// Create a new adapter.
    ///
    /// The key is taken from `api_key` if set, otherwise from the
    /// environment variable named by `api_key_env`.
    pub fn new(
        config: &FileOpenAiConfig,
        params: GenerationParams,
    ) -> Result<Self, ProviderInitError> {
        let api_key = match &config.api_key {
            Some(key) if !key.trim().is_empty() => key.clone(),
            _ => std::env::var(&config.api_key_env)
                .ok()
                .filter(|key| !key.trim().is_empty())
                .ok_or_else(|| ProviderInitError::MissingApiKey(config.api_key_env.clone()))?,
        };

        let mut builder = reqwest::Client::builder();
        if let Some(seconds) = config.timeout_seconds.filter(|s| *s > 0) {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let client = builder
            .build()
            .map_err(|e| ProviderInitError::Client(e.to_string()))?;

        Ok(Self {
            client,
            url: config.url.clone(),
            api_key,
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            params,
        })
    }

    /// Try to create the adapter.
    ///
    /// Returns `None` if no API key is configured. Used for auto-detection
    /// during DI assembly.
    pub fn try_new(config: &FileOpenAiConfig, params: GenerationParams) -> Option<Self> {
        match Self::new(config, params) {
            Ok(adapter) => {
                info!(model = %adapter.model, "OpenAI provider initialized");
                Some(adapter)
            }
            Err(e) => {
                warn!("OpenAI provider not available: {}", e);
                None
            }
        }
    }

    async fn complete(
        &self,
        system: &str,
        user: &str,
        temperature: f32,
        max_chars: usize,
    ) -> Result<String, ProviderError> {
        let request =
            ChatCompletionRequest::new(&self.model, system, user, self.max_tokens, temperature);

        debug!(model = %self.model, url = %self.url, "Calling chat completions");

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::Unavailable(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Unavailable(format!(
                "HTTP error: {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::Unavailable(format!("failed to read body: {}", e)))?;

        let text = types::parse_reply(&body)?;
        Ok(truncate_chars(&text, max_chars))
    }
}

#[async_trait]
impl ResponseProvider for OpenAiProviderAdapter {
    async fn generate_turn(
        &self,
        character: &Character,
        topic: &Topic,
        transcript: &[Message],
        round: u32,
    ) -> Result<String, ProviderError> {
        let max_chars = self.params.max_response_chars;
        let system = PersonaPromptTemplate::system_prompt(character, max_chars);
        let user = PersonaPromptTemplate::turn_prompt(
            character,
            topic,
            transcript,
            round,
            self.params.transcript_window,
            max_chars,
            None,
        );
        self.complete(&system, &user, character.persona.temperature, max_chars)
            .await
    }

    async fn generate_summary(
        &self,
        moderator: &Character,
        topic: &Topic,
        transcript: &[Message],
    ) -> Result<String, ProviderError> {
        let max_chars = self.params.max_summary_chars;
        let system = PersonaPromptTemplate::system_prompt(moderator, max_chars);
        let user = PersonaPromptTemplate::summary_prompt(moderator, topic, transcript, max_chars);
        self.complete(&system, &user, moderator.persona.temperature, max_chars)
            .await
    }
}

impl ProviderAdapter for OpenAiProviderAdapter {
    fn kind(&self) -> ProviderKind {
        ProviderKind::OpenAi
    }
}
