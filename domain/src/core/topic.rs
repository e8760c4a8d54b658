//! Topic value object and its classifications

use serde::{Deserialize, Serialize};

/// Markers that turn a topic into a recommendation-seeking question.
const QUESTION_MARKERS: &[&str] = &[
    "？", "?", "おすすめ", "どれ", "どの", "何", "選ぶ", "良い", "recommend", "which",
];

/// How a topic asks to be closed by the moderator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopicKind {
    /// The topic asks for a concrete answer ("どのファンデーションがいいですか？")
    Recommendation,
    /// The topic is an open theme to talk around
    Open,
}

impl TopicKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TopicKind::Recommendation => "recommendation",
            TopicKind::Open => "open",
        }
    }
}

/// Coarse subject bucket of a topic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopicCategory {
    Skincare,
    Makeup,
    Haircare,
    Diet,
    Health,
    General,
}

impl TopicCategory {
    /// Keyword table, checked in order; the first bucket with a hit wins.
    const KEYWORDS: &'static [(TopicCategory, &'static [&'static str])] = &[
        (
            TopicCategory::Skincare,
            &["スキンケア", "美容液", "化粧水", "乳液", "クリーム"],
        ),
        (
            TopicCategory::Makeup,
            &["メイク", "ファンデーション", "リップ", "アイシャドウ", "マスカラ"],
        ),
        (
            TopicCategory::Haircare,
            &["シャンプー", "トリートメント", "ヘアケア", "髪"],
        ),
        (TopicCategory::Diet, &["ダイエット", "痩せる", "体重", "運動"]),
        (TopicCategory::Health, &["健康", "栄養", "サプリ", "食事"]),
    ];

    /// Classify free text by substring match against the keyword table.
    pub fn classify(text: &str) -> Self {
        Self::KEYWORDS
            .iter()
            .find(|(_, words)| words.iter().any(|w| text.contains(w)))
            .map(|(category, _)| *category)
            .unwrap_or(TopicCategory::General)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TopicCategory::Skincare => "skincare",
            TopicCategory::Makeup => "makeup",
            TopicCategory::Haircare => "haircare",
            TopicCategory::Diet => "diet",
            TopicCategory::Health => "health",
            TopicCategory::General => "general",
        }
    }
}

/// A discussion topic (Value Object)
///
/// Classifications are derived on demand and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    text: String,
}

impl Topic {
    /// Try to create a topic, returning None if it is empty or whitespace
    pub fn try_new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            None
        } else {
            Some(Self { text })
        }
    }

    /// Get the topic text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Recommendation-seeking or open discussion
    pub fn kind(&self) -> TopicKind {
        let lower = self.text.to_lowercase();
        if QUESTION_MARKERS.iter().any(|m| lower.contains(m)) {
            TopicKind::Recommendation
        } else {
            TopicKind::Open
        }
    }

    pub fn is_recommendation(&self) -> bool {
        self.kind() == TopicKind::Recommendation
    }

    /// Subject bucket used to pick canned lines and reference knowledge
    pub fn category(&self) -> TopicCategory {
        TopicCategory::classify(&self.text)
    }

    /// The topic with question marks removed, for embedding into sentences
    pub fn without_question_marks(&self) -> String {
        self.text.replace(['？', '?'], "")
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_new_rejects_blank() {
        assert!(Topic::try_new("").is_none());
        assert!(Topic::try_new("   ").is_none());
        assert!(Topic::try_new("日焼け止め").is_some());
    }

    #[test]
    fn test_interrogative_topic_is_recommendation() {
        let topic = Topic::try_new("どのファンデーションがいいですか？").unwrap();
        assert_eq!(topic.kind(), TopicKind::Recommendation);
    }

    #[test]
    fn test_keyword_topics_are_recommendation() {
        for text in ["おすすめの化粧水", "選ぶならどれ", "Which sunscreen should I buy"] {
            let topic = Topic::try_new(text).unwrap();
            assert!(topic.is_recommendation(), "{text}");
        }
    }

    #[test]
    fn test_plain_topic_is_open() {
        let topic = Topic::try_new("最近の美容事情について").unwrap();
        assert_eq!(topic.kind(), TopicKind::Open);
    }

    #[test]
    fn test_category_classification() {
        assert_eq!(TopicCategory::classify("化粧水の使い方"), TopicCategory::Skincare);
        assert_eq!(
            TopicCategory::classify("どのファンデーションがいいですか？"),
            TopicCategory::Makeup
        );
        assert_eq!(TopicCategory::classify("髪のパサつき"), TopicCategory::Haircare);
        assert_eq!(TopicCategory::classify("夏までに痩せる"), TopicCategory::Diet);
        assert_eq!(TopicCategory::classify("サプリは必要？"), TopicCategory::Health);
        assert_eq!(TopicCategory::classify("休日の過ごし方"), TopicCategory::General);
    }

    #[test]
    fn test_first_matching_bucket_wins() {
        // "クリーム" (skincare) is listed before "メイク" (makeup)
        assert_eq!(
            TopicCategory::classify("メイク前のクリーム"),
            TopicCategory::Skincare
        );
    }

    #[test]
    fn test_without_question_marks() {
        let topic = Topic::try_new("どれがいい？それとも?").unwrap();
        assert_eq!(topic.without_question_marks(), "どれがいいそれとも");
    }
}
