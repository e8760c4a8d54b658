//! Per-character reference lines added to provider prompts
//!
//! Each entry is a topic keyword and the line the character draws on when
//! the topic mentions it. Entries are checked in order; the first keyword
//! found in the topic wins.

use roundtable_domain::{CharacterId, Topic};

const SUNEKO: &[(&str, &str)] = &[
    ("スキンケア", "SK-IIやクレ・ド・ポー ボーテなどの高級美容液がおすすめ"),
    ("メイク", "シャネルやディオールなどの上質なコスメを愛用"),
    ("ファンデーション", "エスティローダーやランコムの仕上がりが美しい"),
    ("化粧品", "15000円以下でも品質の良いデパコスブランドを選択"),
    ("ブランド", "セレブな奥様方の間で評判の高級ブランドを重視"),
];

const TSUBAKI: &[(&str, &str)] = &[
    ("スキンケア", "ちふれや無印良品などドラッグストアの定番商品で十分"),
    ("メイク", "キャンメイクやセザンヌなどプチプラコスメが優秀"),
    ("ファンデーション", "レブロンやメイベリンでもカバー力は十分"),
    ("化粧品", "1500円以下でコスパの良い商品を重視"),
    ("節約", "テレビで紹介された実用的で安い商品を選択"),
];

fn table(character_id: &CharacterId) -> Option<&'static [(&'static str, &'static str)]> {
    match character_id.as_str() {
        "suneko" => Some(SUNEKO),
        "tsubaki" => Some(TSUBAKI),
        _ => None,
    }
}

/// Reference line for `character_id` on `topic`, if any keyword matches
pub fn character_knowledge(character_id: &CharacterId, topic: &Topic) -> Option<&'static str> {
    let text = topic.text().to_lowercase();
    table(character_id)?
        .iter()
        .find(|(keyword, _)| text.contains(&keyword.to_lowercase()))
        .map(|(_, line)| *line)
}
