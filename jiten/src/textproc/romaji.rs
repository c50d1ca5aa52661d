//! ローマ字からひらがなへの変換
//!
//! 最長一致優先の置換テーブルによる変換です。テーブルは順に適用されるため、
//! 促音(二重子音)のエントリが先頭、その後に長さ4・3・2・1のエントリと
//! 記号類が続きます。

use super::kana::{HIRAGANA_SMALL_TSU, KATAKANA_SMALL_TSU};

/// ローマ字→ひらがな置換テーブル。記載順に適用します。
#[rustfmt::skip]
const ROMAJI_TO_HIRAGANA: &[(&str, &str)] = &[
    // 二重子音は最初に処理する
    ("qq", "っq"), ("vv", "っv"), ("ll", "っl"), ("xx", "っx"),
    ("kk", "っk"), ("gg", "っg"), ("ss", "っs"), ("zz", "っz"),
    ("jj", "っj"), ("tt", "っt"), ("dd", "っd"), ("hh", "っh"),
    ("ff", "っf"), ("bb", "っb"), ("pp", "っp"), ("mm", "っm"),
    ("yy", "っy"), ("rr", "っr"), ("ww", "っw"), ("cc", "っc"),

    // 長さ4
    ("hwyu", "ふゅ"), ("xtsu", "っ"), ("ltsu", "っ"),

    // 長さ3
    ("vya", "ゔゃ"), ("vyi", "ゔぃ"), ("vyu", "ゔゅ"), ("vye", "ゔぇ"), ("vyo", "ゔょ"),
    ("kya", "きゃ"), ("kyi", "きぃ"), ("kyu", "きゅ"), ("kye", "きぇ"), ("kyo", "きょ"),
    ("gya", "ぎゃ"), ("gyi", "ぎぃ"), ("gyu", "ぎゅ"), ("gye", "ぎぇ"), ("gyo", "ぎょ"),
    ("sya", "しゃ"), ("syi", "しぃ"), ("syu", "しゅ"), ("sye", "しぇ"), ("syo", "しょ"),
    ("sha", "しゃ"), ("shi", "し"),   ("shu", "しゅ"), ("she", "しぇ"), ("sho", "しょ"),
    ("zya", "じゃ"), ("zyi", "じぃ"), ("zyu", "じゅ"), ("zye", "じぇ"), ("zyo", "じょ"),
    ("tya", "ちゃ"), ("tyi", "ちぃ"), ("tyu", "ちゅ"), ("tye", "ちぇ"), ("tyo", "ちょ"),
    ("cha", "ちゃ"), ("chi", "ち"),   ("chu", "ちゅ"), ("che", "ちぇ"), ("cho", "ちょ"),
    ("cya", "ちゃ"), ("cyi", "ちぃ"), ("cyu", "ちゅ"), ("cye", "ちぇ"), ("cyo", "ちょ"),
    ("dya", "ぢゃ"), ("dyi", "ぢぃ"), ("dyu", "ぢゅ"), ("dye", "ぢぇ"), ("dyo", "ぢょ"),
    ("tsa", "つぁ"), ("tsi", "つぃ"), ("tse", "つぇ"), ("tso", "つぉ"),
    ("tha", "てゃ"), ("thi", "てぃ"), ("thu", "てゅ"), ("the", "てぇ"), ("tho", "てょ"),
    ("dha", "でゃ"), ("dhi", "でぃ"), ("dhu", "でゅ"), ("dhe", "でぇ"), ("dho", "でょ"),
    ("twa", "とぁ"), ("twi", "とぃ"), ("twu", "とぅ"), ("twe", "とぇ"), ("two", "とぉ"),
    ("dwa", "どぁ"), ("dwi", "どぃ"), ("dwu", "どぅ"), ("dwe", "どぇ"), ("dwo", "どぉ"),
    ("nya", "にゃ"), ("nyi", "にぃ"), ("nyu", "にゅ"), ("nye", "にぇ"), ("nyo", "にょ"),
    ("hya", "ひゃ"), ("hyi", "ひぃ"), ("hyu", "ひゅ"), ("hye", "ひぇ"), ("hyo", "ひょ"),
    ("bya", "びゃ"), ("byi", "びぃ"), ("byu", "びゅ"), ("bye", "びぇ"), ("byo", "びょ"),
    ("pya", "ぴゃ"), ("pyi", "ぴぃ"), ("pyu", "ぴゅ"), ("pye", "ぴぇ"), ("pyo", "ぴょ"),
    ("fya", "ふゃ"), ("fyu", "ふゅ"), ("fyo", "ふょ"),
    ("hwa", "ふぁ"), ("hwi", "ふぃ"), ("hwe", "ふぇ"), ("hwo", "ふぉ"),
    ("mya", "みゃ"), ("myi", "みぃ"), ("myu", "みゅ"), ("mye", "みぇ"), ("myo", "みょ"),
    ("rya", "りゃ"), ("ryi", "りぃ"), ("ryu", "りゅ"), ("rye", "りぇ"), ("ryo", "りょ"),
    ("lyi", "ぃ"),   ("xyi", "ぃ"),   ("lye", "ぇ"),   ("xye", "ぇ"),
    ("xka", "ヵ"),   ("xke", "ヶ"),   ("lka", "ヵ"),   ("lke", "ヶ"),
    ("kwa", "くぁ"), ("kwi", "くぃ"), ("kwu", "くぅ"), ("kwe", "くぇ"), ("kwo", "くぉ"),
    ("gwa", "ぐぁ"), ("gwi", "ぐぃ"), ("gwu", "ぐぅ"), ("gwe", "ぐぇ"), ("gwo", "ぐぉ"),
    ("swa", "すぁ"), ("swi", "すぃ"), ("swu", "すぅ"), ("swe", "すぇ"), ("swo", "すぉ"),
    ("zwa", "ずぁ"), ("zwi", "ずぃ"), ("zwu", "ずぅ"), ("zwe", "ずぇ"), ("zwo", "ずぉ"),
    ("jya", "じゃ"), ("jyi", "じぃ"), ("jyu", "じゅ"), ("jye", "じぇ"), ("jyo", "じょ"),
    ("tsu", "つ"),
    ("xtu", "っ"),   ("ltu", "っ"),
    ("xya", "ゃ"),   ("lya", "ゃ"),
    ("wyi", "ゐ"),
    ("xyu", "ゅ"),   ("lyu", "ゅ"),
    ("wye", "ゑ"),
    ("xyo", "ょ"),   ("lyo", "ょ"),
    ("xwa", "ゎ"),   ("lwa", "ゎ"),
    ("wha", "うぁ"), ("whi", "うぃ"), ("whu", "う"),   ("whe", "うぇ"), ("who", "うぉ"),

    // 長さ2
    ("nn", "ん"),   ("n'", "ん"),
    ("va", "ゔぁ"), ("vi", "ゔぃ"), ("vu", "ゔ"),   ("ve", "ゔぇ"), ("vo", "ゔぉ"),
    ("fa", "ふぁ"), ("fi", "ふぃ"), ("fe", "ふぇ"), ("fo", "ふぉ"),
    ("xn", "ん"),   ("wu", "う"),
    ("xa", "ぁ"),   ("xi", "ぃ"),   ("xu", "ぅ"),   ("xe", "ぇ"),   ("xo", "ぉ"),
    ("la", "ぁ"),   ("li", "ぃ"),   ("lu", "ぅ"),   ("le", "ぇ"),   ("lo", "ぉ"),
    ("ye", "いぇ"),
    ("ka", "か"),   ("ki", "き"),   ("ku", "く"),   ("ke", "け"),   ("ko", "こ"),
    ("ga", "が"),   ("gi", "ぎ"),   ("gu", "ぐ"),   ("ge", "げ"),   ("go", "ご"),
    ("sa", "さ"),   ("si", "し"),   ("su", "す"),   ("se", "せ"),   ("so", "そ"),
    ("ca", "か"),   ("ci", "し"),   ("cu", "く"),   ("ce", "せ"),   ("co", "こ"),
    ("qa", "くぁ"), ("qi", "くぃ"), ("qu", "く"),   ("qe", "くぇ"), ("qo", "くぉ"),
    ("za", "ざ"),   ("zi", "じ"),   ("zu", "ず"),   ("ze", "ぜ"),   ("zo", "ぞ"),
    ("ja", "じゃ"), ("ji", "じ"),   ("ju", "じゅ"), ("je", "じぇ"), ("jo", "じょ"),
    ("ta", "た"),   ("ti", "ち"),   ("tu", "つ"),   ("te", "て"),   ("to", "と"),
    ("da", "だ"),   ("di", "ぢ"),   ("du", "づ"),   ("de", "で"),   ("do", "ど"),
    ("na", "な"),   ("ni", "に"),   ("nu", "ぬ"),   ("ne", "ね"),   ("no", "の"),
    ("ha", "は"),   ("hi", "ひ"),   ("hu", "ふ"),   ("fu", "ふ"),   ("he", "へ"),   ("ho", "ほ"),
    ("ba", "ば"),   ("bi", "び"),   ("bu", "ぶ"),   ("be", "べ"),   ("bo", "ぼ"),
    ("pa", "ぱ"),   ("pi", "ぴ"),   ("pu", "ぷ"),   ("pe", "ぺ"),   ("po", "ぽ"),
    ("ma", "ま"),   ("mi", "み"),   ("mu", "む"),   ("me", "め"),   ("mo", "も"),
    ("ya", "や"),   ("yu", "ゆ"),   ("yo", "よ"),
    ("ra", "ら"),   ("ri", "り"),   ("ru", "る"),   ("re", "れ"),   ("ro", "ろ"),
    ("wa", "わ"),   ("wi", "うぃ"), ("we", "うぇ"), ("wo", "を"),

    // 長さ1
    ("a", "あ"), ("i", "い"), ("u", "う"), ("e", "え"), ("o", "お"),

    // 長さ1の記号類
    (".", "。"), (",", "、"), (":", "："), ("/", "・"),
    ("!", "！"), ("?", "？"), ("~", "〜"), ("-", "ー"),
    ("\u{2018}", "「"), ("\u{2019}", "」"),
    ("\u{201c}", "『"), ("\u{201d}", "』"),
    ("[", "［"), ("]", "］"), ("(", "（"), (")", "）"),
    ("{", "｛"), ("}", "｝"), (" ", "\u{3000}"),

    // n→んは最後に処理する特殊ケース
    ("n", "ん"),
];

/// 置換が非反復的なために残る促音の隙間を埋めます。
///
/// 例: っtっtっつ → っっっっっつ
fn fill_sokuon_gaps(text: &str) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    let mut changed = true;
    while changed {
        changed = false;
        for i in 0..chars.len().saturating_sub(2) {
            if chars[i] == HIRAGANA_SMALL_TSU
                && chars[i + 1].is_ascii_lowercase()
                && chars[i + 2] == HIRAGANA_SMALL_TSU
            {
                chars[i + 1] = HIRAGANA_SMALL_TSU;
                changed = true;
            }
        }
    }
    changed = true;
    while changed {
        changed = false;
        for i in 0..chars.len().saturating_sub(2) {
            if chars[i] == KATAKANA_SMALL_TSU
                && chars[i + 1].is_ascii_uppercase()
                && chars[i + 2] == KATAKANA_SMALL_TSU
            {
                chars[i + 1] = KATAKANA_SMALL_TSU;
                changed = true;
            }
        }
    }
    chars.into_iter().collect()
}

/// 小文字化済みのローマ字断片をひらがなへ変換します。
fn to_hiragana(part: &str) -> String {
    let mut text = part.to_ascii_lowercase();
    for (romaji, kana) in ROMAJI_TO_HIRAGANA {
        if text.contains(romaji) {
            text = text.replace(romaji, kana);
        }
    }
    fill_sokuon_gaps(&text)
}

/// テキスト中のラテン文字の連なりをひらがなへ変換します。
///
/// ASCIIと全角のラテン文字を小文字に正規化して断片にまとめ、断片ごとに
/// ローマ字変換を適用します。それ以外の文字はそのまま通します。
pub(crate) fn alphabetic_to_kana(text: &str) -> String {
    let mut part = String::new();
    let mut result = String::with_capacity(text.len());

    for c in text.chars() {
        let cp = c as u32;
        let normalized = match cp {
            0x41..=0x5a => Some(char::from_u32(cp + 0x20).unwrap_or(c)),
            0x61..=0x7a => Some(c),
            0xff21..=0xff3a => char::from_u32(cp - 0xff21 + 0x61),
            0xff41..=0xff5a => char::from_u32(cp - 0xff41 + 0x61),
            // 半角・全角のハイフンは長音として扱う
            0x2d | 0xff0d => Some('-'),
            _ => None,
        };
        match normalized {
            Some(n) => part.push(n),
            None => {
                if !part.is_empty() {
                    result.push_str(&to_hiragana(&part));
                    part.clear();
                }
                result.push(c);
            }
        }
    }

    if !part.is_empty() {
        result.push_str(&to_hiragana(&part));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_conversion() {
        assert_eq!(alphabetic_to_kana("yomitan"), "よみたん");
        assert_eq!(alphabetic_to_kana("konnnichiha"), "こんにちは");
        assert_eq!(alphabetic_to_kana("shashin"), "しゃしん");
    }

    #[test]
    fn test_case_and_fullwidth() {
        assert_eq!(alphabetic_to_kana("YOMITAN"), "よみたん");
        assert_eq!(alphabetic_to_kana("ｙｏｍｉｔａｎ"), "よみたん");
    }

    #[test]
    fn test_sokuon() {
        assert_eq!(alphabetic_to_kana("gakki"), "がっき");
        assert_eq!(alphabetic_to_kana("zutto"), "ずっと");
    }

    #[test]
    fn test_mixed_text() {
        assert_eq!(alphabetic_to_kana("ka日本ki"), "か日本き");
    }

    #[test]
    fn test_prolonged_dash() {
        assert_eq!(alphabetic_to_kana("ra-men"), "らーめん");
    }
}
