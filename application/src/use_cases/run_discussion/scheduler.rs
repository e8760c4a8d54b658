//! Turn scheduler
//!
//! Drives a discussion through its phases, one awaited provider call at a
//! time, and owns the transcript while it is being generated.

use super::summary;
use crate::ports::conversation_logger::ConversationEvent;
use crate::ports::response_provider::ResponseProvider;
use crate::use_cases::shared::{TurnContext, bounded_call};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use roundtable_domain::{
    DiscussionPhase, DiscussionPlan, FallbackGenerator, Message, MessageSource, UsedLines,
};
use tracing::{debug, info, warn};

/// Phase machine for one discussion run.
///
/// `run` consumes the scheduler, so `Complete` is reached exactly once and a
/// finished scheduler cannot be restarted.
pub(crate) struct TurnScheduler<'a> {
    plan: &'a DiscussionPlan,
    phase: DiscussionPhase,
    transcript: Vec<Message>,
    used: UsedLines,
    rng: StdRng,
}

impl<'a> TurnScheduler<'a> {
    pub(crate) fn new(plan: &'a DiscussionPlan, rng: StdRng) -> Self {
        Self {
            plan,
            phase: DiscussionPhase::Idle,
            transcript: Vec::with_capacity(plan.expected_message_count()),
            used: UsedLines::new(),
            rng,
        }
    }

    /// Run every round and the summary, returning the finished transcript.
    pub(crate) async fn run<P: ResponseProvider + ?Sized>(
        mut self,
        ctx: &TurnContext<'_, P>,
    ) -> Vec<Message> {
        loop {
            self.phase = self.phase.next(self.plan.round_count());
            match self.phase {
                DiscussionPhase::RoundInProgress(round) => self.run_round(round, ctx).await,
                DiscussionPhase::Summarizing => {
                    let message = summary::run(
                        self.plan,
                        &self.transcript,
                        &mut self.used,
                        &mut self.rng,
                        ctx,
                    )
                    .await;
                    self.transcript.push(message);
                }
                DiscussionPhase::Complete => return self.transcript,
                DiscussionPhase::Idle => {}
            }
        }
    }

    /// One round: every participant speaks once, in a fresh random order.
    async fn run_round<P: ResponseProvider + ?Sized>(
        &mut self,
        round: u32,
        ctx: &TurnContext<'_, P>,
    ) {
        let plan = self.plan;
        let phase = self.phase;
        let participants = plan.participants();

        info!("Round {}/{}", round, plan.round_count());
        ctx.progress.on_phase_start(&phase, participants.len());

        let mut order: Vec<usize> = (0..participants.len()).collect();
        order.shuffle(&mut self.rng);
        debug!(
            "Speaking order: {:?}",
            order
                .iter()
                .map(|&i| participants[i].id.as_str())
                .collect::<Vec<_>>()
        );

        for index in order {
            let character = &participants[index];
            let result = bounded_call(
                ctx.timeout,
                ctx.provider
                    .generate_turn(character, plan.topic(), &self.transcript, round),
            )
            .await;

            let message = match result {
                Ok(text) => Message::turn(character, text, round, MessageSource::Provider),
                Err(e) => {
                    warn!(
                        "Provider failed for {} in round {}: {}; using fallback line",
                        character.id, round, e
                    );
                    ctx.logger.log(ConversationEvent::new(
                        "provider_failed",
                        serde_json::json!({
                            "discussion_id": ctx.discussion_id,
                            "character_id": character.id.as_str(),
                            "provider": character.provider.as_str(),
                            "round": round,
                            "mode": "turn",
                            "kind": e.kind(),
                            "error": e.to_string(),
                        }),
                    ));
                    let text = FallbackGenerator::turn(
                        character,
                        plan.topic(),
                        round,
                        &self.transcript,
                        &mut self.used,
                        &mut self.rng,
                    );
                    Message::turn(character, text, round, MessageSource::Fallback)
                }
            };

            debug!("{} ({}): {}", character.name, message.source.as_str(), message.text);
            ctx.logger.log(ConversationEvent::new(
                "turn_generated",
                serde_json::json!({
                    "discussion_id": ctx.discussion_id,
                    "message_id": message.id,
                    "character_id": character.id.as_str(),
                    "round": round,
                    "source": message.source.as_str(),
                    "text": message.text,
                }),
            ));
            ctx.progress.on_turn_complete(&phase, character, message.source);
            self.transcript.push(message);
        }

        ctx.progress.on_phase_complete(&phase);
    }
}
