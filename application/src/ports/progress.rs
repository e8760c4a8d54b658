//! Progress notification port
//!
//! Defines the interface for reporting progress while a discussion runs.

use roundtable_domain::{Character, DiscussionPhase, MessageSource};

/// Callback for progress updates during a discussion
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console spinners, plain log lines, etc.)
pub trait ProgressNotifier: Send + Sync {
    /// Called when a round or the summary phase starts
    fn on_phase_start(&self, phase: &DiscussionPhase, total_turns: usize);

    /// Called when a character's message has been appended
    fn on_turn_complete(
        &self,
        phase: &DiscussionPhase,
        character: &Character,
        source: MessageSource,
    );

    /// Called when a round or the summary phase completes
    fn on_phase_complete(&self, phase: &DiscussionPhase);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_phase_start(&self, _phase: &DiscussionPhase, _total_turns: usize) {}
    fn on_turn_complete(
        &self,
        _phase: &DiscussionPhase,
        _character: &Character,
        _source: MessageSource,
    ) {
    }
    fn on_phase_complete(&self, _phase: &DiscussionPhase) {}
}
