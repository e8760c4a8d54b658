pub mod openai;
pub mod routing;

#[cfg(feature = "bedrock")]
pub mod bedrock;

mod knowledge;

pub use knowledge::character_knowledge;

use roundtable_application::ports::response_provider::ResponseProvider;
use thiserror::Error;

/// Concrete provider backends an adapter can speak to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProviderKind {
    #[default]
    OpenAi,
    Bedrock,
}

impl ProviderKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "openai" => Some(ProviderKind::OpenAi),
            "bedrock" => Some(ProviderKind::Bedrock),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "openai",
            ProviderKind::Bedrock => "bedrock",
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A [`ResponseProvider`] backed by one concrete provider, pluggable into
/// [`routing::RoutingProvider`]
pub trait ProviderAdapter: ResponseProvider {
    fn kind(&self) -> ProviderKind;
}

/// Errors raised while constructing a provider adapter
#[derive(Error, Debug)]
pub enum ProviderInitError {
    #[error("API key not found (set the {0} environment variable)")]
    MissingApiKey(String),

    #[error("Credentials unavailable: {0}")]
    Credentials(String),

    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}
