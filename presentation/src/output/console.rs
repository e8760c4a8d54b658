//! Console output formatter for discussions

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use roundtable_domain::{Character, CharacterRegistry, Discussion, Message, truncate_chars};

const HISTORY_SUMMARY_CHARS: usize = 60;

/// Formats discussions, the character list and history for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Force colored output on or off for the rest of the process
    pub fn set_color(enabled: bool) {
        colored::control::set_override(enabled);
    }

    /// Format the complete discussion
    pub fn format(discussion: &Discussion) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Round-table Discussion"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n",
            "Topic:".cyan().bold(),
            discussion.topic
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Participants:".cyan().bold(),
            Self::participant_names(discussion).join(", ")
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Rounds:".cyan().bold(),
            discussion.round_count
        ));

        for (round, messages) in discussion.rounds() {
            let turns: Vec<&Message> = messages.into_iter().filter(|m| !m.is_summary).collect();
            if turns.is_empty() {
                continue;
            }
            output.push_str(&Self::section_header(&format!("Round {}", round)));
            for message in turns {
                output.push_str(&Self::message_block(message));
            }
        }

        if let Some(summary) = discussion.summary() {
            output.push_str(&Self::section_header("Summary"));
            output.push_str(&Self::message_block(summary));
        }

        let fallbacks = discussion.fallback_count();
        if fallbacks > 0 {
            output.push_str(&format!(
                "\n{}\n",
                format!("{} message(s) used fallback lines", fallbacks).dimmed()
            ));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format as JSON
    pub fn format_json(discussion: &Discussion) -> String {
        serde_json::to_string_pretty(discussion).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the summary only (concise output)
    pub fn format_summary_only(discussion: &Discussion) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{}\n\n",
            "=== Round-table Summary ===".cyan().bold()
        ));
        output.push_str(&format!("{} {}\n\n", "Topic:".bold(), discussion.topic));
        output.push_str(&format!(
            "{} {}\n\n",
            "Participants:".dimmed(),
            Self::participant_names(discussion).join(", ")
        ));

        match discussion.summary() {
            Some(summary) => {
                output.push_str(&format!("{}\n", summary.speaker_name.yellow().bold()));
                output.push_str(&summary.text);
            }
            None => output.push_str(&"(no summary)".dimmed().to_string()),
        }
        output.push('\n');
        output
    }

    /// Format the registered characters
    pub fn format_characters(registry: &CharacterRegistry) -> String {
        let mut output = String::new();
        output.push_str(&Self::section_header("Characters"));
        for character in registry.all() {
            output.push_str(&Self::character_line(character));
        }
        output
    }

    /// Format stored discussions, in the order given
    pub fn format_history(discussions: &[Discussion]) -> String {
        if discussions.is_empty() {
            return format!("{}\n", "No stored discussions.".dimmed());
        }

        let mut output = String::new();
        output.push_str(&Self::section_header("Discussion History"));
        for discussion in discussions {
            output.push_str(&format!(
                "\n{} {}\n",
                discussion
                    .created_at
                    .format("%Y-%m-%d %H:%M")
                    .to_string()
                    .dimmed(),
                discussion.topic.bold()
            ));
            output.push_str(&format!(
                "  {} rounds, {}\n",
                discussion.round_count,
                Self::participant_names(discussion).join(", ")
            ));
            if let Some(summary) = discussion.summary() {
                output.push_str(&format!(
                    "  {} {}\n",
                    format!("{}:", summary.speaker_name).yellow(),
                    Self::first_line(&summary.text)
                ));
            }
        }
        output
    }

    fn character_line(character: &Character) -> String {
        format!(
            "{} {} {}\n    {} / {} / {}\n",
            character.avatar,
            character.id.as_str().yellow().bold(),
            character.name,
            character.role,
            character.persona.speaking_style.as_str(),
            character.provider.as_str().dimmed()
        )
    }

    fn message_block(message: &Message) -> String {
        let name = format!("── {} ──", message.speaker_name);
        let name = if message.source.is_fallback() {
            format!("{} {}", name.yellow().bold(), "(fallback)".dimmed())
        } else {
            name.yellow().bold().to_string()
        };
        format!("\n{}\n{}\n", name, message.text)
    }

    /// Display names in seating order, taken from the transcript
    fn participant_names(discussion: &Discussion) -> Vec<String> {
        discussion
            .participants
            .iter()
            .map(|id| {
                discussion
                    .conversation
                    .iter()
                    .find(|m| &m.character_id == id)
                    .map(|m| m.speaker_name.clone())
                    .unwrap_or_else(|| id.to_string())
            })
            .collect()
    }

    fn first_line(text: &str) -> String {
        let line = text.lines().next().unwrap_or_default();
        let short = truncate_chars(line, HISTORY_SUMMARY_CHARS);
        if short.len() < text.len() {
            format!("{short}…")
        } else {
            short
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, discussion: &Discussion) -> String {
        Self::format(discussion)
    }

    fn format_json(&self, discussion: &Discussion) -> String {
        Self::format_json(discussion)
    }

    fn format_summary_only(&self, discussion: &Discussion) -> String {
        Self::format_summary_only(discussion)
    }
}
