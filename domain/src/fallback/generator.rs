//! Fallback line selection

use super::lines::{GENERIC_SUMMARY, GENERIC_TURN, summary_templates, turn_pool};
use super::used::UsedLines;
use crate::character::entities::Character;
use crate::core::topic::{Topic, TopicKind};
use crate::discussion::message::Message;
use rand::Rng;
use rand::seq::SliceRandom;

/// Produces canned lines for turns and summaries.
///
/// Total: every call returns a non-empty line for any character and topic.
/// The output does not depend on why a provider call failed, only on the
/// character, the topic, the lines already used and the random source.
pub struct FallbackGenerator;

impl FallbackGenerator {
    /// A turn line for `character` in `round`.
    ///
    /// Round 1 opens with one of the speaking style's stock phrases followed
    /// by a line from the character's pool for the topic category (falling
    /// back to its default pool). In later rounds, when the last message in
    /// `transcript` came from someone else, the line instead opens by
    /// reacting to that speaker by name. Characters without a pool use the
    /// generic pool.
    ///
    /// A composed line already in `used` is not picked again while fresh
    /// ones remain; once all are used a sentence-ending particle of the
    /// character's speaking style is appended to a reused line.
    pub fn turn<R: Rng + ?Sized>(
        character: &Character,
        topic: &Topic,
        round: u32,
        transcript: &[Message],
        used: &mut UsedLines,
        rng: &mut R,
    ) -> String {
        let candidates = turn_candidates(character, topic, round, transcript);
        pick(&candidates, character.endings(), used, rng)
    }

    /// The moderator's closing summary line.
    ///
    /// Recommendation topics use answer-style templates with the question
    /// marks stripped from the topic; open topics use thank-you style
    /// templates. Templates already present in `transcript` or `used` are
    /// avoided when possible. An ending particle is always appended.
    pub fn summary<R: Rng + ?Sized>(
        moderator: &Character,
        topic: &Topic,
        transcript: &[Message],
        used: &mut UsedLines,
        rng: &mut R,
    ) -> String {
        let kind = topic.kind();
        let Some(templates) = summary_templates(moderator.id.as_str(), kind) else {
            let line = fill(GENERIC_SUMMARY, moderator, topic.text());
            used.insert(line.clone());
            return line;
        };

        let topic_text = match kind {
            TopicKind::Recommendation => topic.without_question_marks(),
            TopicKind::Open => topic.text().to_string(),
        };
        let candidates: Vec<String> = templates
            .iter()
            .map(|t| fill(t, moderator, &topic_text))
            .collect();
        let fresh: Vec<&String> = candidates
            .iter()
            .filter(|c| !used.contains(c) && !transcript.iter().any(|m| m.text.starts_with(*c)))
            .collect();

        let base = fresh
            .choose(rng)
            .map(|c| (*c).clone())
            .or_else(|| candidates.choose(rng).cloned())
            .unwrap_or_default();
        used.insert(base.clone());

        let ending = moderator.endings().choose(rng).copied().unwrap_or_default();
        format!("{base}{ending}")
    }
}

/// Every composed line `character` may say in `round`
fn turn_candidates(
    character: &Character,
    topic: &Topic,
    round: u32,
    transcript: &[Message],
) -> Vec<String> {
    let style = character.persona.speaking_style;
    let pool = turn_pool(character.id.as_str(), topic.category());
    let bodies: Vec<String> = match pool {
        Some(lines) => lines
            .iter()
            .map(|l| fill(l, character, topic.text()))
            .collect(),
        None => generic_pool(character, topic),
    };

    let previous_speaker = transcript
        .last()
        .filter(|m| round > 1 && !m.is_summary && m.character_id != character.id);
    let leads: Vec<String> = match previous_speaker {
        Some(previous) => style
            .reactions()
            .iter()
            .map(|r| r.replace("{speaker}", &previous.speaker_name))
            .collect(),
        // The generic pool already holds the style phrases
        None if pool.is_none() => return bodies,
        None => style
            .patterns()
            .iter()
            .map(|p| fill(p, character, topic.text()))
            .collect(),
    };

    leads
        .iter()
        .flat_map(|lead| bodies.iter().map(move |body| join(lead, body)))
        .collect()
}

/// Join a lead-in and a body line into one utterance
fn join(lead: &str, body: &str) -> String {
    let continues = lead.ends_with(['。', '、', '.', '？', '?', '！', '!'])
        || lead.ends_with("でも");
    if continues {
        format!("{lead}{body}")
    } else {
        format!("{lead}。{body}")
    }
}

/// Pool for characters without canned lines: the generic self-introduction
/// plus the speaking style's stock phrases.
fn generic_pool(character: &Character, topic: &Topic) -> Vec<String> {
    std::iter::once(GENERIC_TURN)
        .chain(character.persona.speaking_style.patterns().iter().copied())
        .map(|l| fill(l, character, topic.text()))
        .collect()
}

fn fill(template: &str, character: &Character, topic: &str) -> String {
    template
        .replace("{name}", &character.name)
        .replace("{topic}", topic)
}

fn pick<R: Rng + ?Sized>(
    pool: &[String],
    endings: &[&str],
    used: &mut UsedLines,
    rng: &mut R,
) -> String {
    let fresh: Vec<&String> = pool.iter().filter(|l| !used.contains(l)).collect();
    let line = match fresh.choose(rng) {
        Some(line) => (*line).clone(),
        None => {
            let variants: Vec<String> = pool
                .iter()
                .flat_map(|l| endings.iter().map(move |e| format!("{l}{e}")))
                .filter(|v| !used.contains(v))
                .collect();
            match variants.choose(rng) {
                Some(variant) => variant.clone(),
                None => {
                    let base = pool.choose(rng).cloned().unwrap_or_default();
                    let ending = endings.choose(rng).copied().unwrap_or_default();
                    format!("{base}{ending}")
                }
            }
        }
    };
    used.insert(line.clone());
    line
}
