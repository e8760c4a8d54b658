//! CLI entrypoint for roundtable
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use roundtable_application::{
    BehaviorConfig, ConversationLogger, GenerationParams, NoProgress, PrepareDiscussionUseCase,
    PreferenceOverrides, ProgressNotifier, RunDiscussionError, RunDiscussionUseCase,
};
use roundtable_domain::{CharacterId, CharacterRegistry, OutputFormat};
use roundtable_infrastructure::{
    ConfigLoader, FileConfig, JsonFileStore, JsonlConversationLogger, OpenAiProviderAdapter,
    ProviderAdapter, RoutingProvider,
};
use roundtable_presentation::{
    Cli, ConsoleFormatter, OutputFormatter, ProgressReporter, SimpleProgress,
};
use std::io::IsTerminal;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = init_logging(cli.verbose, cli.quiet, cli.log_dir.as_deref());

    info!("Starting roundtable");

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow!("{}", e))?
    };

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        println!();
        println!(
            "{}",
            toml::to_string_pretty(&config).context("failed to render configuration")?
        );
        return Ok(());
    }

    let registry = Arc::new(CharacterRegistry::builtin());
    for issue in config.check(&registry)? {
        warn!("{}", issue.message);
    }

    if !config.output.color {
        ConsoleFormatter::set_color(false);
    }

    if cli.list_characters {
        print!("{}", ConsoleFormatter::format_characters(&registry));
        return Ok(());
    }

    // === Dependency Injection ===
    let store = Arc::new(JsonFileStore::new(config.store.resolved_data_dir()));
    let prepare = PrepareDiscussionUseCase::new(store.clone(), registry.clone());

    if let Some(limit) = cli.history {
        let discussions = prepare.history().await?;
        let shown: Vec<_> = discussions.into_iter().take(limit).collect();
        print!("{}", ConsoleFormatter::format_history(&shown));
        return Ok(());
    }

    let Some(topic) = cli.topic.clone() else {
        bail!("A topic is required. Use --list-characters or --history to browse instead.");
    };

    let overrides = PreferenceOverrides {
        participants: if cli.participant.is_empty() {
            config.discussion.participant_ids()
        } else {
            Some(cli.participant.iter().map(|id| CharacterId::new(id.trim())).collect())
        },
        round_count: cli.rounds.or(config.discussion.rounds),
        moderator: cli
            .moderator
            .as_deref()
            .map(|id| CharacterId::new(id.trim()))
            .or_else(|| config.discussion.moderator_id()),
    };
    let preferences = prepare.resolve(overrides).await;

    if cli.save_preferences {
        prepare
            .remember(&preferences)
            .await
            .context("failed to save preferences")?;
    }

    let provider = Arc::new(build_provider(&config, config.generation.to_params()).await);

    let mut use_case = RunDiscussionUseCase::new(provider, store, registry.clone())
        .with_behavior(BehaviorConfig::from_timeout_seconds(
            config.discussion.turn_timeout_seconds,
        ));
    if let Some(path) = &config.logging.conversation_log
        && let Some(logger) = JsonlConversationLogger::new(path)
    {
        info!("Conversation log: {}", logger.path().display());
        let logger: Arc<dyn ConversationLogger> = Arc::new(logger);
        use_case = use_case.with_conversation_logger(logger);
    }

    let mut input = preferences.into_input(topic.clone());
    if let Some(seed) = cli.seed {
        input = input.with_seed(seed);
    }
    if cli.no_save {
        input = input.without_persist();
    }

    let format: OutputFormat = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();

    // Print header
    let interactive = !cli.quiet && format != OutputFormat::Json;
    if interactive {
        println!();
        println!("+============================================================+");
        println!("|              roundtable - 井戸端会議                       |");
        println!("+============================================================+");
        println!();
        println!("Topic: {}", topic);
        println!(
            "Participants: {}",
            input
                .participants
                .iter()
                .map(|id| id.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
        println!("Rounds: {}", input.round_count);
        println!();
    }

    let progress: Box<dyn ProgressNotifier> = if !interactive {
        Box::new(NoProgress)
    } else if std::io::stdout().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };

    let result = use_case
        .execute_with_progress(input, progress.as_ref())
        .await;

    match result {
        Ok(discussion) => {
            println!("{}", ConsoleFormatter.render(&discussion, format));
            Ok(())
        }
        Err(RunDiscussionError::Store { discussion, source }) => {
            // The discussion finished; only saving it failed
            println!("{}", ConsoleFormatter.render(&discussion, format));
            Err(anyhow!(source).context("discussion completed but could not be saved"))
        }
        Err(e) => Err(e.into()),
    }
}

/// Install the tracing subscriber.
///
/// Console logs go to stderr at a level chosen by `-v`/`-q`. With
/// `--log-dir`, logs are also written to a daily-rolling file; the returned
/// guard must live until exit so buffered lines are flushed.
fn init_logging(verbose: u8, quiet: bool, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let filter = match (quiet, verbose) {
        (true, _) => EnvFilter::new("error"),
        (false, 0) => EnvFilter::new("warn"),
        (false, 1) => EnvFilter::new("info"),
        (false, 2) => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "roundtable.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .init();

    guard
}

/// Build the routing provider from every adapter that can be initialized.
///
/// A provider class with no adapter answers `Unavailable`, so its
/// characters speak fallback lines.
async fn build_provider(config: &FileConfig, params: GenerationParams) -> RoutingProvider {
    let mut providers: Vec<Arc<dyn ProviderAdapter>> = Vec::new();

    if let Some(adapter) = OpenAiProviderAdapter::try_new(&config.providers.openai, params.clone())
    {
        providers.push(Arc::new(adapter));
    }

    #[cfg(feature = "bedrock")]
    if let Some(adapter) = roundtable_infrastructure::BedrockProviderAdapter::try_new(
        &config.providers.bedrock,
        params.clone(),
    )
    .await
    {
        providers.push(Arc::new(adapter));
    }

    let router = RoutingProvider::new(providers, &config.providers.routing);
    if router.kinds().is_empty() {
        warn!("No text-generation provider is configured; every line will be a fallback line");
    }
    router
}
