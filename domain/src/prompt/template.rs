//! Persona prompt templates for turns and summaries

use crate::character::entities::Character;
use crate::core::topic::{Topic, TopicKind};
use crate::discussion::message::Message;

/// Templates for generating provider prompts from a character's persona
pub struct PersonaPromptTemplate;

impl PersonaPromptTemplate {
    /// System prompt carrying the persona instruction block
    ///
    /// Lists traits and preferred media, the tone markers, the speech habits,
    /// a directive to cite one of the preferred media, and the length cap.
    pub fn system_prompt(character: &Character, max_chars: usize) -> String {
        let persona = &character.persona;
        let mut prompt = format!(
            "あなたは{}（{}）、{}です。\n\nキャラクター特性:\n",
            character.name, character.age, character.role
        );
        for trait_ in &persona.traits {
            prompt.push_str(&format!("- {trait_}\n"));
        }
        prompt.push_str(&format!(
            "- 価格帯: {}\n- よく見るメディア: {}\n\n",
            persona.price_range,
            persona.media_sources.join("、")
        ));

        let tone = persona
            .tone_markers
            .iter()
            .map(|m| format!("「{m}」"))
            .collect::<String>();
        prompt.push_str(&format!("口調: {tone}\n話し方: {}\n\n", persona.speech_habits));

        let citations = persona
            .citation_examples
            .iter()
            .map(|c| format!("「{c}」"))
            .collect::<String>();
        prompt.push_str(&format!(
            "重要: 可能な限り{citations}など、よく見るメディアを出典として言及してください。\n\n"
        ));
        prompt.push_str(&format!(
            "回答は{max_chars}文字以内で、キャラクターらしい表現で答えてください。"
        ));
        prompt
    }

    /// The last `size` non-summary messages, oldest first
    pub fn recent_window(transcript: &[Message], size: usize) -> Vec<&Message> {
        let turns: Vec<&Message> = transcript.iter().filter(|m| !m.is_summary).collect();
        let start = turns.len().saturating_sub(size);
        turns[start..].to_vec()
    }

    /// User prompt for one turn
    ///
    /// Round 1 asks for an opening opinion; later rounds ask the character to
    /// react to what has been said. `knowledge` is an optional reference line
    /// some providers add for the character.
    pub fn turn_prompt(
        character: &Character,
        topic: &Topic,
        transcript: &[Message],
        round: u32,
        window: usize,
        max_chars: usize,
        knowledge: Option<&str>,
    ) -> String {
        let mut prompt = format!("お題: \"{}\"\n\n", topic.text());

        let recent = Self::recent_window(transcript, window);
        if !recent.is_empty() {
            prompt.push_str("これまでの会話:\n");
            for message in recent {
                prompt.push_str(&format!("{}: {}\n", message.speaker_name, message.text));
            }
            prompt.push('\n');
        }

        if let Some(knowledge) = knowledge {
            prompt.push_str(&format!("参考情報: {knowledge}\n\n"));
        }

        if round <= 1 {
            prompt.push_str(&format!(
                "{}として、このお題について最初の意見を述べてください。",
                character.name
            ));
        } else {
            prompt.push_str(&format!(
                "{}として、これまでの会話を踏まえて自然に会話を続けてください。他の人の意見に対して反応したり、新しい視点を加えたりしてください。",
                character.name
            ));
        }

        prompt.push_str(&format!(
            r#"

注意事項:
- {name}の性格と口調を必ず保ってください
- {max_chars}文字以内で簡潔に回答してください
- 井戸端会議らしい自然な会話になるように心がけてください
- キャラクターらしい特徴的な表現を使ってください"#,
            name = character.name
        ));
        prompt
    }

    /// User prompt for the moderator's summary
    ///
    /// Includes every participant's opinions from the whole transcript,
    /// grouped by speaker in order of first appearance, then branches on the
    /// topic kind.
    pub fn summary_prompt(
        moderator: &Character,
        topic: &Topic,
        transcript: &[Message],
        max_chars: usize,
    ) -> String {
        let mut prompt = format!("お題: \"{}\"\n\n参加者の意見:\n", topic.text());

        for (speaker, opinions) in Self::opinions_by_speaker(transcript) {
            prompt.push_str(&format!("\n{speaker}の意見:\n"));
            for (i, opinion) in opinions.iter().enumerate() {
                prompt.push_str(&format!("{}. {}\n", i + 1, opinion));
            }
        }

        match topic.kind() {
            TopicKind::Recommendation => prompt.push_str(&format!(
                r#"
{name}として、司会者の立場でお題の質問に対する具体的な回答を提供してください：

1. 各参加者が推奨した具体的な商品・ブランド・選択肢を整理
2. 最も支持された推奨事項を明確に特定
3. お題の質問に対する明確で具体的な答えを提示
4. その推奨理由を参加者の意見を基に説明

{max_chars}文字以内で、お題の質問に対する実用的で具体的な回答を提供してください。「〜がおすすめです」「〜を選ぶと良いでしょう」のような明確な結論を含めてください。"#,
                name = moderator.name
            )),
            TopicKind::Open => prompt.push_str(&format!(
                r#"
{name}として、司会者の立場で議論を集約してください：

1. 各参加者の主要な意見を整理
2. 共通点と相違点を明確化
3. 全体的な総評を提供
4. 実用的な結論やアドバイスを含める

{max_chars}文字以内で、司会者らしい丁寧で包括的な集約を行ってください。"#,
                name = moderator.name
            )),
        }
        prompt
    }

    fn opinions_by_speaker(transcript: &[Message]) -> Vec<(&str, Vec<&str>)> {
        let mut grouped: Vec<(&str, Vec<&str>)> = Vec::new();
        for message in transcript.iter().filter(|m| !m.is_summary) {
            match grouped
                .iter_mut()
                .find(|(speaker, _)| *speaker == message.speaker_name)
            {
                Some((_, opinions)) => opinions.push(&message.text),
                None => grouped.push((&message.speaker_name, vec![&message.text])),
            }
        }
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::entities::CharacterId;
    use crate::character::registry::CharacterRegistry;
    use crate::discussion::message::MessageSource;

    fn character(id: &str) -> Character {
        CharacterRegistry::builtin()
            .lookup(&CharacterId::from(id))
            .unwrap()
            .clone()
    }

    fn transcript(count: usize) -> Vec<Message> {
        let tamako = character("tamako");
        let tomi = character("tomi");
        (0..count)
            .map(|i| {
                let speaker = if i % 2 == 0 { &tamako } else { &tomi };
                let round = 1 + i as u32 / 2;
                Message::turn(speaker, format!("発言{i}"), round, MessageSource::Provider)
            })
            .collect()
    }

    #[test]
    fn test_system_prompt_contains_persona_block() {
        let tamako = character("tamako");
        let prompt = PersonaPromptTemplate::system_prompt(&tamako, 100);
        assert!(prompt.contains("野比玉子"));
        assert!(prompt.contains("STORY、美ST、VOCE、X（twitter）"));
        assert!(prompt.contains("「〜かしら」"));
        assert!(prompt.contains("STORYで読んだのですが〜"));
        assert!(prompt.contains("100文字以内"));
    }

    #[test]
    fn test_recent_window_skips_summary_and_keeps_last() {
        let mut messages = transcript(8);
        let tamako = character("tamako");
        messages.push(Message::summary(&tamako, "まとめ", 5, MessageSource::Provider));

        let window = PersonaPromptTemplate::recent_window(&messages, 6);
        assert_eq!(window.len(), 6);
        assert_eq!(window[0].text, "発言2");
        assert_eq!(window[5].text, "発言7");
    }

    #[test]
    fn test_first_round_prompt_has_no_history() {
        let tomi = character("tomi");
        let topic = Topic::try_new("冬の保湿").unwrap();
        let prompt = PersonaPromptTemplate::turn_prompt(&tomi, &topic, &[], 1, 6, 100, None);
        assert!(prompt.contains("お題: \"冬の保湿\""));
        assert!(!prompt.contains("これまでの会話"));
        assert!(prompt.contains("最初の意見"));
    }

    #[test]
    fn test_later_round_prompt_includes_window_and_knowledge() {
        let suneko = character("suneko");
        let topic = Topic::try_new("スキンケア").unwrap();
        let prompt = PersonaPromptTemplate::turn_prompt(
            &suneko,
            &topic,
            &transcript(10),
            2,
            6,
            100,
            Some("高級美容液がおすすめ"),
        );
        assert!(prompt.contains("これまでの会話"));
        assert!(!prompt.contains("発言3"));
        assert!(prompt.contains("福士とみ: 発言9"));
        assert!(prompt.contains("参考情報: 高級美容液がおすすめ"));
        assert!(prompt.contains("会話を続けて"));
    }

    #[test]
    fn test_summary_prompt_branches_on_topic_kind() {
        let tamako = character("tamako");
        let messages = transcript(4);

        let question = Topic::try_new("どのファンデーションがいいですか？").unwrap();
        let prompt = PersonaPromptTemplate::summary_prompt(&tamako, &question, &messages, 150);
        assert!(prompt.contains("最も支持された推奨事項"));
        assert!(prompt.contains("150文字以内"));

        let open = Topic::try_new("最近の美容事情").unwrap();
        let prompt = PersonaPromptTemplate::summary_prompt(&tamako, &open, &messages, 150);
        assert!(prompt.contains("共通点と相違点"));
    }

    #[test]
    fn test_summary_prompt_groups_full_transcript_by_speaker() {
        let tamako = character("tamako");
        let topic = Topic::try_new("旅行").unwrap();
        let prompt = PersonaPromptTemplate::summary_prompt(&tamako, &topic, &transcript(10), 150);
        assert!(prompt.contains("野比玉子の意見:\n1. 発言0\n2. 発言2"));
        assert!(prompt.contains("5. 発言9"));
    }
}
