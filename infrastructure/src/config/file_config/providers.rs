//! Provider configuration from TOML (`[providers]` section)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// OpenAI-compatible chat completions settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOpenAiConfig {
    /// Full chat completions endpoint URL.
    pub url: String,
    /// Environment variable name for the API key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// Direct API key. Prefer the environment variable; never written back out.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Model name sent with every request.
    pub model: String,
    /// Max tokens per response.
    pub max_tokens: u32,
    /// HTTP request timeout in seconds.
    pub timeout_seconds: Option<u64>,
}

impl Default for FileOpenAiConfig {
    fn default() -> Self {
        Self {
            url: "https://api.openai.com/v1/chat/completions".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            model: "gpt-3.5-turbo".to_string(),
            max_tokens: 300,
            timeout_seconds: Some(30),
        }
    }
}

/// AWS Bedrock settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBedrockConfig {
    /// AWS region (default: "ap-northeast-1")
    pub region: String,
    /// AWS profile name for credentials
    pub profile: Option<String>,
    /// Bedrock model id
    pub model_id: String,
    /// Max tokens per response
    pub max_tokens: u32,
}

impl Default for FileBedrockConfig {
    fn default() -> Self {
        Self {
            region: "ap-northeast-1".to_string(),
            profile: None,
            model_id: "anthropic.claude-3-5-sonnet-20240620-v1:0".to_string(),
            max_tokens: 300,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    /// OpenAI-compatible endpoint settings.
    pub openai: FileOpenAiConfig,
    /// AWS Bedrock settings.
    pub bedrock: FileBedrockConfig,
    /// Provider class → provider name overrides, e.g. `bedrock = "openai"`.
    pub routing: HashMap<String, String>,
}
