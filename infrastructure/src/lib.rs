//! Infrastructure layer for roundtable
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod providers;
pub mod store;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileBedrockConfig, FileConfig, FileDiscussionConfig,
    FileGenerationConfig, FileLoggingConfig, FileOpenAiConfig, FileOutputConfig,
    FileProvidersConfig, FileStoreConfig,
};
pub use logging::JsonlConversationLogger;
#[cfg(feature = "bedrock")]
pub use providers::bedrock::BedrockProviderAdapter;
pub use providers::{
    ProviderAdapter, ProviderInitError, ProviderKind, openai::OpenAiProviderAdapter,
    routing::RoutingProvider,
};
pub use store::JsonFileStore;
