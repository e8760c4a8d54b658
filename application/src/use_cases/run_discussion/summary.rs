//! Summary phase

use crate::ports::conversation_logger::ConversationEvent;
use crate::ports::response_provider::ResponseProvider;
use crate::use_cases::shared::{TurnContext, bounded_call};
use rand::rngs::StdRng;
use roundtable_domain::{
    DiscussionPhase, DiscussionPlan, FallbackGenerator, Message, MessageSource, UsedLines,
};
use tracing::{info, warn};

/// Produce the moderator's summary message over the full transcript.
///
/// Never fails: a provider failure is replaced by a fallback summary.
pub(super) async fn run<P: ResponseProvider + ?Sized>(
    plan: &DiscussionPlan,
    transcript: &[Message],
    used: &mut UsedLines,
    rng: &mut StdRng,
    ctx: &TurnContext<'_, P>,
) -> Message {
    let phase = DiscussionPhase::Summarizing;
    let moderator = plan.moderator();
    let topic = plan.topic();

    info!(
        "Summary by {} ({} topic)",
        moderator.name,
        topic.kind().as_str()
    );
    ctx.progress.on_phase_start(&phase, 1);

    let result = bounded_call(
        ctx.timeout,
        ctx.provider.generate_summary(moderator, topic, transcript),
    )
    .await;

    let message = match result {
        Ok(text) => Message::summary(
            moderator,
            text,
            plan.summary_round(),
            MessageSource::Provider,
        ),
        Err(e) => {
            warn!(
                "Summary provider failed for {}: {}; using fallback summary",
                moderator.id, e
            );
            ctx.logger.log(ConversationEvent::new(
                "provider_failed",
                serde_json::json!({
                    "discussion_id": ctx.discussion_id,
                    "character_id": moderator.id.as_str(),
                    "provider": moderator.provider.as_str(),
                    "round": plan.summary_round(),
                    "mode": "summary",
                    "kind": e.kind(),
                    "error": e.to_string(),
                }),
            ));
            let text = FallbackGenerator::summary(moderator, topic, transcript, used, rng);
            Message::summary(moderator, text, plan.summary_round(), MessageSource::Fallback)
        }
    };

    ctx.logger.log(ConversationEvent::new(
        "summary_generated",
        serde_json::json!({
            "discussion_id": ctx.discussion_id,
            "message_id": message.id,
            "moderator": moderator.id.as_str(),
            "round": message.round,
            "topic_kind": topic.kind().as_str(),
            "source": message.source.as_str(),
            "text": message.text,
        }),
    ));
    ctx.progress.on_turn_complete(&phase, moderator, message.source);
    ctx.progress.on_phase_complete(&phase);
    message
}
