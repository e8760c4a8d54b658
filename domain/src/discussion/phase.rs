//! Scheduler phase machine

use serde::{Deserialize, Serialize};

/// Phase of one discussion run
///
/// `Idle → RoundInProgress(1) → … → RoundInProgress(N) → Summarizing → Complete`.
/// There is no transition back to an earlier phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiscussionPhase {
    Idle,
    RoundInProgress(u32),
    Summarizing,
    Complete,
}

impl DiscussionPhase {
    /// The phase that follows this one for a discussion of `round_count` rounds
    pub fn next(self, round_count: u32) -> Self {
        match self {
            DiscussionPhase::Idle => DiscussionPhase::RoundInProgress(1),
            DiscussionPhase::RoundInProgress(r) if r < round_count => {
                DiscussionPhase::RoundInProgress(r + 1)
            }
            DiscussionPhase::RoundInProgress(_) => DiscussionPhase::Summarizing,
            DiscussionPhase::Summarizing | DiscussionPhase::Complete => DiscussionPhase::Complete,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, DiscussionPhase::Complete)
    }

    pub fn display_name(&self) -> String {
        match self {
            DiscussionPhase::Idle => "Idle".to_string(),
            DiscussionPhase::RoundInProgress(r) => format!("Round {r}"),
            DiscussionPhase::Summarizing => "Summary".to_string(),
            DiscussionPhase::Complete => "Complete".to_string(),
        }
    }
}

impl std::fmt::Display for DiscussionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_sequence() {
        let mut phase = DiscussionPhase::Idle;
        let mut seen = vec![phase];
        while !phase.is_complete() {
            phase = phase.next(3);
            seen.push(phase);
        }
        assert_eq!(
            seen,
            vec![
                DiscussionPhase::Idle,
                DiscussionPhase::RoundInProgress(1),
                DiscussionPhase::RoundInProgress(2),
                DiscussionPhase::RoundInProgress(3),
                DiscussionPhase::Summarizing,
                DiscussionPhase::Complete,
            ]
        );
    }

    #[test]
    fn test_single_round_goes_straight_to_summary() {
        assert_eq!(
            DiscussionPhase::RoundInProgress(1).next(1),
            DiscussionPhase::Summarizing
        );
    }

    #[test]
    fn test_complete_is_terminal() {
        assert_eq!(DiscussionPhase::Complete.next(2), DiscussionPhase::Complete);
    }
}
