//! Progress reporting for discussion runs

use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use roundtable_application::ports::progress::ProgressNotifier;
use roundtable_domain::{Character, DiscussionPhase, MessageSource};
use std::sync::Mutex;

/// Reports progress with one bar per round and one for the summary
pub struct ProgressReporter {
    multi: MultiProgress,
    phase_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            phase_bar: Mutex::new(None),
        }
    }

    fn phase_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn turn_status(character: &Character, source: MessageSource) -> String {
        match source {
            MessageSource::Provider => format!("{} {}", "v".green(), character.name),
            MessageSource::Fallback => format!("{} {} (fallback)", "~".yellow(), character.name),
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_phase_start(&self, phase: &DiscussionPhase, total_turns: usize) {
        let pb = self.multi.add(ProgressBar::new(total_turns as u64));
        pb.set_style(Self::phase_style());
        pb.set_prefix(phase.display_name());
        pb.set_message("Starting...");

        if let Ok(mut bar) = self.phase_bar.lock() {
            *bar = Some(pb);
        }
    }

    fn on_turn_complete(
        &self,
        _phase: &DiscussionPhase,
        character: &Character,
        source: MessageSource,
    ) {
        if let Ok(bar) = self.phase_bar.lock()
            && let Some(pb) = bar.as_ref()
        {
            pb.set_message(Self::turn_status(character, source));
            pb.inc(1);
        }
    }

    fn on_phase_complete(&self, phase: &DiscussionPhase) {
        if let Ok(mut bar) = self.phase_bar.lock()
            && let Some(pb) = bar.take()
        {
            pb.finish_with_message(format!("{} complete!", phase.display_name().green()));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_phase_start(&self, phase: &DiscussionPhase, total_turns: usize) {
        println!(
            "{} {} ({} turns)",
            "->".cyan(),
            phase.display_name().bold(),
            total_turns
        );
    }

    fn on_turn_complete(
        &self,
        _phase: &DiscussionPhase,
        character: &Character,
        source: MessageSource,
    ) {
        println!("  {}", ProgressReporter::turn_status(character, source));
    }

    fn on_phase_complete(&self, _phase: &DiscussionPhase) {
        println!();
    }
}
