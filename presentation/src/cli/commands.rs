//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for discussion results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Full transcript grouped by round, then the summary
    Full,
    /// Only the moderator's summary
    Summary,
    /// The discussion record as JSON
    Json,
}

impl From<OutputFormat> for roundtable_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => roundtable_domain::OutputFormat::Full,
            OutputFormat::Summary => roundtable_domain::OutputFormat::Summary,
            OutputFormat::Json => roundtable_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for roundtable
#[derive(Parser, Debug)]
#[command(name = "roundtable")]
#[command(author, version, about = "Round-table discussion between character personas")]
#[command(long_about = r#"
roundtable runs a round-table discussion on a topic between a roster of
characters. Every participant speaks once per round, in a freshly shuffled
order, and a moderator closes with a summary. A character whose provider
cannot answer speaks a canned line instead, so a started discussion always
completes.

Configuration files are loaded from (in priority order):
1. ROUNDTABLE_* environment variables (e.g. ROUNDTABLE_DISCUSSION__ROUNDS=3)
2. --config <path>       Explicit config file
3. ./roundtable.toml     Project-level config
4. ~/.config/roundtable/config.toml   Global config

Example:
  roundtable "運動会のお弁当のおかず"
  roundtable -p suneko -p tsubaki -r 3 "おすすめの日焼け止めは？"
  roundtable --list-characters
  roundtable --history
"#)]
pub struct Cli {
    /// The discussion topic (not required with --list-characters or --history)
    pub topic: Option<String>,

    /// Characters to seat at the table (can be specified multiple times)
    #[arg(short, long, value_name = "ID")]
    pub participant: Vec<String>,

    /// Character that writes the closing summary (default: first participant)
    #[arg(long, value_name = "ID")]
    pub moderator: Option<String>,

    /// Number of discussion rounds
    #[arg(short, long, value_name = "N")]
    pub rounds: Option<u32>,

    /// Output format (default: from config, else summary)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and the merged configuration, then exit
    #[arg(long)]
    pub show_config: bool,

    /// Do not store the finished discussion
    #[arg(long)]
    pub no_save: bool,

    /// Remember the resolved participants and round count for later runs
    #[arg(long)]
    pub save_preferences: bool,

    /// List the available characters and exit
    #[arg(long)]
    pub list_characters: bool,

    /// Show stored discussions, newest first, and exit
    #[arg(long, value_name = "N", num_args = 0..=1, default_missing_value = "10")]
    pub history: Option<usize>,

    /// Seed for turn order and fallback choices (reproducible runs)
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Also write operational logs to a daily-rolling file in this directory
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_discussion_flags() {
        let cli = Cli::try_parse_from([
            "roundtable",
            "-p",
            "suneko",
            "--participant",
            "tsubaki",
            "--moderator",
            "tsubaki",
            "-r",
            "3",
            "-o",
            "full",
            "--seed",
            "42",
            "-vv",
            "おすすめの日焼け止めは？",
        ])
        .unwrap();

        assert_eq!(cli.topic.as_deref(), Some("おすすめの日焼け止めは？"));
        assert_eq!(cli.participant, vec!["suneko", "tsubaki"]);
        assert_eq!(cli.moderator.as_deref(), Some("tsubaki"));
        assert_eq!(cli.rounds, Some(3));
        assert_eq!(cli.output, Some(OutputFormat::Full));
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.verbose, 2);
        assert!(!cli.no_save);
    }

    #[test]
    fn test_history_limit_is_optional() {
        let cli = Cli::try_parse_from(["roundtable", "--history"]).unwrap();
        assert_eq!(cli.history, Some(10));
        let cli = Cli::try_parse_from(["roundtable", "--history", "3"]).unwrap();
        assert_eq!(cli.history, Some(3));
        let cli = Cli::try_parse_from(["roundtable", "topic"]).unwrap();
        assert_eq!(cli.history, None);
    }

    #[test]
    fn test_output_format_maps_to_domain() {
        assert_eq!(
            roundtable_domain::OutputFormat::from(OutputFormat::Summary),
            roundtable_domain::OutputFormat::Summary
        );
        assert!(Cli::try_parse_from(["roundtable", "-o", "synthesis", "x"]).is_err());
    }
}
