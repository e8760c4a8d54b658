//! Generation parameters: prompt and reply bounds.
//!
//! [`GenerationParams`] groups the static limits every provider adapter
//! applies when it builds a prompt and trims a reply. These are
//! application-layer concerns, not domain policy.

use serde::{Deserialize, Serialize};

/// Prompt window and reply length limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Number of most recent non-summary messages shown in a turn prompt.
    pub transcript_window: usize,
    /// Maximum characters of a turn reply.
    pub max_response_chars: usize,
    /// Maximum characters of the summary reply.
    pub max_summary_chars: usize,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            transcript_window: 6,
            max_response_chars: 100,
            max_summary_chars: 150,
        }
    }
}

impl GenerationParams {
    pub fn with_transcript_window(mut self, window: usize) -> Self {
        self.transcript_window = window;
        self
    }

    pub fn with_max_response_chars(mut self, max: usize) -> Self {
        self.max_response_chars = max;
        self
    }

    pub fn with_max_summary_chars(mut self, max: usize) -> Self {
        self.max_summary_chars = max;
        self
    }
}
