//! Output formatter trait

use roundtable_domain::{Discussion, OutputFormat};

/// Trait for formatting finished discussions
pub trait OutputFormatter {
    /// Full transcript grouped by round, then the summary
    fn format(&self, discussion: &Discussion) -> String;

    /// Format as JSON
    fn format_json(&self, discussion: &Discussion) -> String;

    /// Summary only (concise output)
    fn format_summary_only(&self, discussion: &Discussion) -> String;

    /// Dispatch on the requested output format
    fn render(&self, discussion: &Discussion, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => self.format(discussion),
            OutputFormat::Summary => self.format_summary_only(discussion),
            OutputFormat::Json => self.format_json(discussion),
        }
    }
}
