//! Bedrock provider adapter
//!
//! Implements `ProviderAdapter` to plug into the `RoutingProvider`.
//! Handles AWS credential initialization and one Converse call per turn.

use super::types;
use crate::config::FileBedrockConfig;
use crate::providers::{ProviderAdapter, ProviderInitError, ProviderKind, character_knowledge};
use async_trait::async_trait;
use aws_sdk_bedrockruntime::Client as BedrockClient;
use aws_sdk_bedrockruntime::types as bedrock;
use roundtable_application::GenerationParams;
use roundtable_application::ports::response_provider::{ProviderError, ResponseProvider};
use roundtable_domain::{Character, Message, PersonaPromptTemplate, Topic, truncate_chars};
use tracing::{debug, info, warn};

pub struct BedrockProviderAdapter {
    client: BedrockClient,
    region: String,
    model_id: String,
    max_tokens: i32,
    params: GenerationParams,
}

impl BedrockProviderAdapter {
    /// Create a new Bedrock provider adapter.
    ///
    /// Initializes AWS credentials and creates a Bedrock Runtime client.
    pub async fn new(
        config: &FileBedrockConfig,
        params: GenerationParams,
    ) -> Result<Self, ProviderInitError> {
        let mut aws_config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.region.clone()));

        if let Some(ref profile) = config.profile {
            aws_config_loader = aws_config_loader.profile_name(profile);
        }

        let aws_config = aws_config_loader.load().await;
        if aws_config.credentials_provider().is_none() {
            return Err(ProviderInitError::Credentials(
                "no AWS credentials provider configured".to_string(),
            ));
        }

        Ok(Self {
            client: BedrockClient::new(&aws_config),
            region: config.region.clone(),
            model_id: config.model_id.clone(),
            max_tokens: i32::try_from(config.max_tokens).unwrap_or(i32::MAX),
            params,
        })
    }

    /// Try to create a new Bedrock provider adapter.
    ///
    /// Returns `None` if AWS credential initialization fails.
    /// Used for auto-detection during DI assembly.
    pub async fn try_new(config: &FileBedrockConfig, params: GenerationParams) -> Option<Self> {
        match Self::new(config, params).await {
            Ok(adapter) => {
                info!(
                    region = %adapter.region,
                    model = %adapter.model_id,
                    "Bedrock provider initialized"
                );
                Some(adapter)
            }
            Err(e) => {
                warn!("Bedrock provider not available: {}", e);
                None
            }
        }
    }

    async fn converse(
        &self,
        system: String,
        user: &str,
        temperature: f32,
        max_chars: usize,
    ) -> Result<String, ProviderError> {
        debug!(model = %self.model_id, "Calling Bedrock Converse API");

        let response = self
            .client
            .converse()
            .model_id(&self.model_id)
            .set_system(Some(vec![bedrock::SystemContentBlock::Text(system)]))
            .messages(types::user_message(user)?)
            .inference_config(
                bedrock::InferenceConfiguration::builder()
                    .max_tokens(self.max_tokens)
                    .temperature(temperature)
                    .build(),
            )
            .send()
            .await
            .map_err(|e| types::convert_converse_error(&e))?;

        let text = types::extract_text(response.output())?;
        Ok(truncate_chars(&text, max_chars))
    }
}

#[async_trait]
impl ResponseProvider for BedrockProviderAdapter {
    async fn generate_turn(
        &self,
        character: &Character,
        topic: &Topic,
        transcript: &[Message],
        round: u32,
    ) -> Result<String, ProviderError> {
        let max_chars = self.params.max_response_chars;
        let knowledge = character_knowledge(&character.id, topic);
        let system = PersonaPromptTemplate::system_prompt(character, max_chars);
        let user = PersonaPromptTemplate::turn_prompt(
            character,
            topic,
            transcript,
            round,
            self.params.transcript_window,
            max_chars,
            knowledge,
        );
        self.converse(system, &user, character.persona.temperature, max_chars)
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
        self.converse(system, &user, moderator.persona.temperature, max_chars)
            .await
    }
}

impl ProviderAdapter for BedrockProviderAdapter {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Bedrock
    }
}
