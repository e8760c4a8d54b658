//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for a finished discussion
///
/// This is a domain concept representing how the output should be formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Full transcript grouped by round, followed by the summary
    Full,
    /// Only the moderator's summary (default)
    #[default]
    Summary,
    /// JSON output of the whole discussion record
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_summary() {
        assert_eq!(OutputFormat::default(), OutputFormat::Summary);
    }

    #[test]
    fn test_serialize_lowercase() {
        let json = serde_json::to_string(&OutputFormat::Full).unwrap();
        assert_eq!(json, "\"full\"");
    }

    #[test]
    fn test_deserialize_lowercase() {
        let format: OutputFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(format, OutputFormat::Json);
    }
}
