//! Prompt and reply bounds from TOML (`[generation]` section)

use roundtable_application::GenerationParams;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerationConfig {
    /// Recent non-summary messages shown in a turn prompt
    pub transcript_window: usize,
    /// Character cap for a turn reply
    pub max_response_chars: usize,
    /// Character cap for the summary
    pub max_summary_chars: usize,
}

impl Default for FileGenerationConfig {
    fn default() -> Self {
        let params = GenerationParams::default();
        Self {
            transcript_window: params.transcript_window,
            max_response_chars: params.max_response_chars,
            max_summary_chars: params.max_summary_chars,
        }
    }
}

impl FileGenerationConfig {
    pub fn to_params(&self) -> GenerationParams {
        GenerationParams::default()
            .with_transcript_window(self.transcript_window)
            .with_max_response_chars(self.max_response_chars)
            .with_max_summary_chars(self.max_summary_chars)
    }
}
