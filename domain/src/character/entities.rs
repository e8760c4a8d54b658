//! Character entities and identifiers

use super::speaking_style::SpeakingStyle;
use serde::{Deserialize, Serialize};

/// Unique key of a character in the registry (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterId(String);

impl CharacterId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CharacterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CharacterId {
    fn from(s: &str) -> Self {
        CharacterId::new(s)
    }
}

impl From<String> for CharacterId {
    fn from(s: String) -> Self {
        CharacterId(s)
    }
}

/// Provider class a character is answered by
///
/// The class is resolved to a concrete adapter by the routing provider in
/// the infrastructure layer; the domain never talks to a provider directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderClass {
    /// OpenAI-compatible chat completions endpoint
    OpenAi,
    /// AWS Bedrock (Anthropic Claude models)
    Bedrock,
}

impl ProviderClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderClass::OpenAi => "openai",
            ProviderClass::Bedrock => "bedrock",
        }
    }
}

impl std::fmt::Display for ProviderClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ProviderClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(ProviderClass::OpenAi),
            "bedrock" => Ok(ProviderClass::Bedrock),
            other => Err(format!("unknown provider class: {other}")),
        }
    }
}

/// Persona attributes that shape every generated line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Persona {
    /// Speaking-style tag (phrase patterns and sentence endings)
    pub speaking_style: SpeakingStyle,
    /// Price-sensitivity band, e.g. "～5000円"
    pub price_range: String,
    /// Media the character quotes as sources
    pub media_sources: Vec<String>,
    /// Personality traits listed in the instruction block
    pub traits: Vec<String>,
    /// Sentence endings the character uses (口調)
    pub tone_markers: Vec<String>,
    /// How the character talks (話し方)
    pub speech_habits: String,
    /// Example source citations the character should imitate
    pub citation_examples: Vec<String>,
    /// Sampling temperature requested from providers
    pub temperature: f32,
}

/// A round-table participant (Entity)
///
/// Immutable reference data created from the registry at process start.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    /// Display name
    pub name: String,
    /// Age or age descriptor ("非公表（35-40歳）")
    pub age: String,
    /// Short role descriptor ("のび太のママ")
    pub role: String,
    pub avatar: String,
    pub description: String,
    pub persona: Persona,
    /// Provider class that answers for this character
    pub provider: ProviderClass,
}

impl Character {
    /// Sentence-ending particles of this character's speaking style
    pub fn endings(&self) -> &'static [&'static str] {
        self.persona.speaking_style.endings()
    }
}
