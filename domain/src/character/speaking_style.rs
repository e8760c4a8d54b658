//! Speaking-style tags

use serde::{Deserialize, Serialize};

/// Speaking style of a character
///
/// Each style carries a set of stock phrases (with an optional `{topic}`
/// slot) and the sentence-ending particles the character closes lines with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeakingStyle {
    /// Polite, caring, budget-minded mother
    GentleMother,
    /// Refined, brand-conscious mother
    SophisticatedMother,
    /// Bold, practical, cost-performance mother
    StrongMother,
    /// Elderly speaker of the Tsugaru dialect
    TsugaruDialect,
}

impl SpeakingStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpeakingStyle::GentleMother => "gentle_mother",
            SpeakingStyle::SophisticatedMother => "sophisticated_mother",
            SpeakingStyle::StrongMother => "strong_mother",
            SpeakingStyle::TsugaruDialect => "tsugaru_dialect",
        }
    }

    /// Stock phrases; `{topic}` is replaced with the discussion topic
    pub fn patterns(&self) -> &'static [&'static str] {
        match self {
            SpeakingStyle::GentleMother => &[
                "そうですね、{topic}について考えてみると...",
                "あら、それは素敵ですね",
                "でも、ちょっと心配なのは...",
                "のび太にも教えてあげたいわ",
                "家計のことを考えると...",
                "お母さんとしては...",
            ],
            SpeakingStyle::SophisticatedMother => &[
                "まあ、{topic}なんて...",
                "うちでは当然のことですけど",
                "スネ夫にはいつも言っているの",
                "やはり品質の良いものでないと",
                "お値段が高くても価値があるものは...",
                "セレブな奥様方の間では...",
            ],
            SpeakingStyle::StrongMother => &[
                "{topic}かい？そりゃあ...",
                "ジャイアンにも言ってるんだけどね",
                "うちは庶民だからさ",
                "でも、これだけは譲れないよ",
                "安くて良いものが一番だね",
                "テレビで見たんだけど...",
            ],
            SpeakingStyle::TsugaruDialect => &[
                "{topic}だべが...",
                "わだしの若い頃はな",
                "ドラッグストアで聞いたんだけんど",
                "まんず、これが大事だべ",
                "昔からの知恵でな",
                "みんなそう言ってるべ",
            ],
        }
    }

    /// Lead-ins reacting to the previous speaker; `{speaker}` is replaced
    /// with that speaker's name
    pub fn reactions(&self) -> &'static [&'static str] {
        match self {
            SpeakingStyle::GentleMother => &[
                "{speaker}さんのおっしゃる通りですね。",
                "{speaker}さん、そうですね。でも",
                "なるほど、{speaker}さんのお話もよく分かります。",
                "私も{speaker}さんに同感です。",
            ],
            SpeakingStyle::SophisticatedMother => &[
                "まあ、{speaker}さん。",
                "{speaker}さん、それはそうですけど、",
                "{speaker}さんのお宅とうちでは違いますの。",
                "{speaker}さんの言う通り、やはりそうですわね。",
            ],
            SpeakingStyle::StrongMother => &[
                "{speaker}さん、それは分かるよ。",
                "{speaker}さん、そうかもしれないけど、",
                "{speaker}さんはそうでも、うちの場合は違うね。",
                "なるほどね、{speaker}さん。",
            ],
            SpeakingStyle::TsugaruDialect => &[
                "{speaker}さんの言う通りだべ。",
                "{speaker}さん、そうだべな。でも",
                "わだしも{speaker}さんとおんなじに思うじゃ。",
                "{speaker}さん、昔からそう言うべ。",
            ],
        }
    }

    /// Sentence-ending particles
    pub fn endings(&self) -> &'static [&'static str] {
        match self {
            SpeakingStyle::GentleMother => &["ですね", "ですわ", "かしら", "のよ", "ですもの"],
            SpeakingStyle::SophisticatedMother => {
                &["ですのよ", "ですわよ", "でしてよ", "ざますの", "ですもの"]
            }
            SpeakingStyle::StrongMother => &["だよ", "だね", "さ", "よ", "だからね"],
            SpeakingStyle::TsugaruDialect => &["だべ", "だべな", "じゃ", "はんで", "っちゃ"],
        }
    }
}

impl std::fmt::Display for SpeakingStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_style_has_patterns_and_endings() {
        for style in [
            SpeakingStyle::GentleMother,
            SpeakingStyle::SophisticatedMother,
            SpeakingStyle::StrongMother,
            SpeakingStyle::TsugaruDialect,
        ] {
            assert!(!style.patterns().is_empty(), "{style}");
            assert!(
                style.reactions().iter().all(|r| r.contains("{speaker}")),
                "{style}"
            );
            assert!(!style.endings().is_empty(), "{style}");
        }
    }

    #[test]
    fn test_serde_uses_snake_case_tag() {
        let json = serde_json::to_string(&SpeakingStyle::TsugaruDialect).unwrap();
        assert_eq!(json, "\"tsugaru_dialect\"");
    }
}
