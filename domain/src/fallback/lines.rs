//! Canned line pools
//!
//! `{topic}` marks where the discussion topic is substituted.

use crate::core::topic::{TopicCategory, TopicKind};

/// Turn line used for a character without any canned pool
pub const GENERIC_TURN: &str = "{name}です。{topic}について考えてみますね。";

/// Summary line used for a moderator without summary templates
pub const GENERIC_SUMMARY: &str =
    "{name}です。皆さんの貴重なご意見をありがとうございました。{topic}について活発な議論ができました。";

/// Canned turn lines for a character and topic category.
///
/// Returns the character's category pool when it has one, otherwise its
/// default pool, and `None` for characters with no canned lines at all.
pub fn turn_pool(character_id: &str, category: TopicCategory) -> Option<&'static [&'static str]> {
    let pool: &'static [&'static str] = match (character_id, category) {
        ("tamako", _) => &[
            "STORYで読んだのですが、{topic}は家族のことを考えると大切ですね",
            "美STに載っていた記事で、のび太にも教えてあげたいと思いました",
            "VOCEで紹介されていて、お母さんとしては心配になります",
            "Xで話題になっていて、家計に優しいものがいいですね",
            "STORYの特集で見て、安全で安心なものを選びたいです",
        ],
        ("suneko", TopicCategory::Skincare) => &[
            "まあ、スキンケアでしたら、やはりSK-IIやクレ・ド・ポー ボーテがおすすめですわ。セレブな奥様方の間でも評判ですの",
            "デパコスの美容液は確かにお値段が張りますけれど、長期的に見れば投資する価値がありますわね",
            "うちでは15000円以下でも上質なものを選んでいますの。品質重視で選ぶのが大切ですわ",
        ],
        ("suneko", TopicCategory::Makeup) => &[
            "メイクでしたら、シャネルやディオールの発色の美しさは格別ですわ。スネ夫にも将来良いものを使わせてあげたいの",
            "やはり上質なコスメは持ちが違いますわね。セレブな奥様方もそうおっしゃっていますの",
            "お値段が高くても、仕上がりの美しさを考えれば納得できますわ",
        ],
        ("suneko", _) => &[
            "まあ、それは興味深いお話ですわね。うちでも品質の良いものを選ぶよう心がけていますの",
            "セレブな奥様方の間でも話題になっているような、上質なものがおすすめですわ",
            "やはり投資する価値のあるものを選ぶのが大切ですわね",
            "美的で特集されていましたが、やはり品質の良いものでないと",
            "VERYに掲載されていて、スネ夫には最高のものを与えたいの",
        ],
        ("tsubaki", TopicCategory::Skincare) => &[
            "スキンケアなら、ちふれや無印良品で十分だよ。ドラッグストアの商品でも効果があるからね",
            "ジャイアンにも言ってるんだけど、高いものが良いとは限らないよ。実際に使ってみて良かったものが一番さ",
            "1500円以下でも優秀な商品がたくさんあるよ。テレビでも紹介されてたし",
        ],
        ("tsubaki", TopicCategory::Makeup) => &[
            "メイクならキャンメイクやセザンヌがコスパ最高だね。プチプラでも上手に使えば綺麗になれるよ",
            "うちは庶民だから、安くて良いものを探すのが得意なんだ。実用性重視で選んでるよ",
            "ジャイアンにも「安くて良いもの使え」って言ってるよ。庶民の知恵だね",
        ],
        ("tsubaki", _) => &[
            "そうだね、実用的で長持ちするものが一番だよ。コスパを考えて選ぶのが大事だね",
            "うちは庶民だから、みんなで情報交換して良い商品を見つけるのが一番だよ",
            "テレビで紹介されたような、安くて良いものを選ぶのがおすすめだね",
            "めざましTVで紹介されてて、ジャイアンにも言ってるんだけどね",
            "YouTubeで見たんだけど、うちは庶民だから実用性重視よ",
        ],
        ("tomi", _) => &[
            "ドラッグストアで薬剤師さんに聞いただべ、わだしの若い頃はな",
            "ドラッグストアで聞いたんだけんど、{topic}は昔から大事にされてきたもんだ",
            "近所の人から教わっただべ、まんず、これが大事だべ",
            "ドラッグストアの店員さんが言ってたべ、昔からの知恵でな",
            "薬剤師さんもそう言ってるべ",
        ],
        _ => return None,
    };
    Some(pool)
}

/// Moderator summary templates for a topic kind.
pub fn summary_templates(moderator_id: &str, kind: TopicKind) -> Option<&'static [&'static str]> {
    let templates: &'static [&'static str] = match (moderator_id, kind) {
        ("tamako", TopicKind::Recommendation) => &[
            "皆さんのご意見を聞いて、{topic}については、お手頃で安全なものが一番良いと思います。家計に優しくて、のび太にも安心して使えるものを選びたい",
            "今日の議論で、価格と品質のバランスが大切だということが分かりました。お母さんとしては、5000円以下で良い商品を選ぶのがおすすめ",
            "皆さんの意見を参考にすると、実用性を重視した選択が良さそうです。家族みんなで使えるものを選ぶのが一番",
        ],
        ("tamako", TopicKind::Open) => &[
            "皆さん、{topic}について貴重なご意見をありがとうございました。それぞれ違った視点があって勉強になりました",
            "今日の議論を聞いていて、{topic}については様々な考え方があることがよく分かりました",
            "お母さんとしては、皆さんの意見を参考にして家族にも伝えたいと思います",
        ],
        ("suneko", TopicKind::Recommendation) => &[
            "皆様のご意見を総合すると、やはり品質の良いものを選ぶのが正解ですわね。多少お値段が張っても、長く使えるものがおすすめ",
            "今回の議論で、投資する価値のある商品の見極め方が分かりました。スネ夫にも良いものを選んであげたいと思います",
            "セレブな奥様方の間でも話題になっているような、上質なものを選ぶのが間違いありません",
        ],
        ("suneko", TopicKind::Open) => &[
            "皆様、{topic}について活発な議論をありがとうございました。さすが皆様、それぞれ素晴らしい見識をお持ち",
            "今回の{topic}の件、皆様のご意見を伺って大変参考になりました",
            "やはり品質の良い情報交換ができて、有意義な時間でした",
        ],
        ("tsubaki", TopicKind::Recommendation) => &[
            "みんなの話を聞いて、コスパの良いものが一番だってことが分かったよ。実用的で長持ちするものを選ぶのがおすすめ",
            "庶民の知恵を集めると、やっぱり安くて良いものが見つかるもんだ。1500円以下でも十分良いものがある",
            "ジャイアンにも教えてやりたいけど、実際に使ってみて良かったものを選ぶのが一番確実",
        ],
        ("tsubaki", TopicKind::Open) => &[
            "みんな、{topic}についていろんな意見が聞けて良かったよ。それぞれの立場がある",
            "今日の{topic}の話、実用的な意見がたくさん出て参考になった",
            "庶民の知恵が集まると、やっぱり良いアイデアが生まれるもんだ",
        ],
        ("tomi", TopicKind::Recommendation) => &[
            "みなさんの意見を聞いて、昔からの知恵で選ぶのが一番だと思っただべ。ドラッグストアで相談して、8000円以下で良いものを選ぶのがおすすめ",
            "若い人たちの意見も参考になったけど、やっぱり長年使ってみて良かったものが確実だべ。わだしの経験からもそう思う",
            "長生きしてると分かるけど、値段じゃなくて自分に合うものを選ぶのが大事だべ。みんなで話し合って決めるのが良いもんだ",
        ],
        ("tomi", TopicKind::Open) => &[
            "みなさん、{topic}についてたくさんお話しできて良かっただべ。わだしも勉強になった",
            "{topic}のこと、若い人たちの意見も聞けて、昔とは違うもんだなと思った",
            "長生きしてると、いろんな考え方があるのが分かって面白いもんだ",
        ],
        _ => return None,
    };
    Some(templates)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_pool_preferred_over_default() {
        let skincare = turn_pool("suneko", TopicCategory::Skincare).unwrap();
        let general = turn_pool("suneko", TopicCategory::General).unwrap();
        assert!(skincare[0].contains("SK-II"));
        assert_ne!(skincare, general);
    }

    #[test]
    fn test_unknown_character_has_no_pool() {
        assert!(turn_pool("shizuka", TopicCategory::General).is_none());
        assert!(summary_templates("shizuka", TopicKind::Open).is_none());
    }

    #[test]
    fn test_every_builtin_moderator_has_both_template_kinds() {
        for id in ["tamako", "suneko", "tsubaki", "tomi"] {
            assert!(summary_templates(id, TopicKind::Recommendation).is_some(), "{id}");
            assert!(summary_templates(id, TopicKind::Open).is_some(), "{id}");
        }
    }
}
