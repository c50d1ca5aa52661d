//! かな変換テーブル
//!
//! 半角カタカナの全角化、結合濁点・半濁点の正規化、ひらがな・カタカナの
//! 相互変換、強調表記の圧縮を提供します。

/// 促音(ひらがな小さい「っ」)
pub(crate) const HIRAGANA_SMALL_TSU: char = '\u{3063}';
/// 促音(カタカナ小さい「ッ」)
pub(crate) const KATAKANA_SMALL_TSU: char = '\u{30c3}';
const KATAKANA_SMALL_KA: char = '\u{30f5}';
const KATAKANA_SMALL_KE: char = '\u{30f6}';
/// 長音記号「ー」
pub(crate) const PROLONGED_SOUND_MARK: char = '\u{30fc}';

const HIRAGANA_RANGE: std::ops::RangeInclusive<u32> = 0x3041..=0x3096;
const KATAKANA_RANGE: std::ops::RangeInclusive<u32> = 0x30a1..=0x30f6;
const KANA_OFFSET: u32 = 0x30a1 - 0x3041;

const HALFWIDTH_DAKUTEN: char = '\u{ff9e}';
const HALFWIDTH_HANDAKUTEN: char = '\u{ff9f}';

const COMBINING_DAKUTEN: char = '\u{3099}';
const COMBINING_HANDAKUTEN: char = '\u{309a}';

/// 半角カタカナの全角対応: (基底, 濁点付き, 半濁点付き)
fn halfwidth_katakana(c: char) -> Option<(char, Option<char>, Option<char>)> {
    Some(match c {
        '･' => ('・', None, None),
        'ｦ' => ('ヲ', Some('ヺ'), None),
        'ｧ' => ('ァ', None, None),
        'ｨ' => ('ィ', None, None),
        'ｩ' => ('ゥ', None, None),
        'ｪ' => ('ェ', None, None),
        'ｫ' => ('ォ', None, None),
        'ｬ' => ('ャ', None, None),
        'ｭ' => ('ュ', None, None),
        'ｮ' => ('ョ', None, None),
        'ｯ' => ('ッ', None, None),
        'ｰ' => ('ー', None, None),
        'ｱ' => ('ア', None, None),
        'ｲ' => ('イ', None, None),
        'ｳ' => ('ウ', Some('ヴ'), None),
        'ｴ' => ('エ', None, None),
        'ｵ' => ('オ', None, None),
        'ｶ' => ('カ', Some('ガ'), None),
        'ｷ' => ('キ', Some('ギ'), None),
        'ｸ' => ('ク', Some('グ'), None),
        'ｹ' => ('ケ', Some('ゲ'), None),
        'ｺ' => ('コ', Some('ゴ'), None),
        'ｻ' => ('サ', Some('ザ'), None),
        'ｼ' => ('シ', Some('ジ'), None),
        'ｽ' => ('ス', Some('ズ'), None),
        'ｾ' => ('セ', Some('ゼ'), None),
        'ｿ' => ('ソ', Some('ゾ'), None),
        'ﾀ' => ('タ', Some('ダ'), None),
        'ﾁ' => ('チ', Some('ヂ'), None),
        'ﾂ' => ('ツ', Some('ヅ'), None),
        'ﾃ' => ('テ', Some('デ'), None),
        'ﾄ' => ('ト', Some('ド'), None),
        'ﾅ' => ('ナ', None, None),
        'ﾆ' => ('ニ', None, None),
        'ﾇ' => ('ヌ', None, None),
        'ﾈ' => ('ネ', None, None),
        'ﾉ' => ('ノ', None, None),
        'ﾊ' => ('ハ', Some('バ'), Some('パ')),
        'ﾋ' => ('ヒ', Some('ビ'), Some('ピ')),
        'ﾌ' => ('フ', Some('ブ'), Some('プ')),
        'ﾍ' => ('ヘ', Some('ベ'), Some('ペ')),
        'ﾎ' => ('ホ', Some('ボ'), Some('ポ')),
        'ﾏ' => ('マ', None, None),
        'ﾐ' => ('ミ', None, None),
        'ﾑ' => ('ム', None, None),
        'ﾒ' => ('メ', None, None),
        'ﾓ' => ('モ', None, None),
        'ﾔ' => ('ヤ', None, None),
        'ﾕ' => ('ユ', None, None),
        'ﾖ' => ('ヨ', None, None),
        'ﾗ' => ('ラ', None, None),
        'ﾘ' => ('リ', None, None),
        'ﾙ' => ('ル', None, None),
        'ﾚ' => ('レ', None, None),
        'ﾛ' => ('ロ', None, None),
        'ﾜ' => ('ワ', None, None),
        'ﾝ' => ('ン', None, None),
        _ => return None,
    })
}

/// 半角カタカナを全角へ変換します。
///
/// 基底文字の直後にU+FF9E/U+FF9Fが続き、結合した形が存在する場合は
/// 2文字を1つの全角文字に畳み込みます。
pub(crate) fn halfwidth_to_fullwidth(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut result = String::with_capacity(text.len());

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        let Some((base, dakuten, handakuten)) = halfwidth_katakana(c) else {
            result.push(c);
            i += 1;
            continue;
        };

        let combined = match chars.get(i + 1) {
            Some(&HALFWIDTH_DAKUTEN) => dakuten,
            Some(&HALFWIDTH_HANDAKUTEN) => handakuten,
            _ => None,
        };

        if let Some(folded) = combined {
            result.push(folded);
            i += 2;
        } else {
            result.push(base);
            i += 1;
        }
    }
    result
}

fn dakuten_allowed(c: char) -> bool {
    let cp = c as u32;
    (0x304b..=0x3068).contains(&cp)
        || (0x306f..=0x307b).contains(&cp)
        || (0x30ab..=0x30c8).contains(&cp)
        || (0x30cf..=0x30db).contains(&cp)
}

fn handakuten_allowed(c: char) -> bool {
    let cp = c as u32;
    (0x306f..=0x307b).contains(&cp) || (0x30cf..=0x30db).contains(&cp)
}

/// 結合濁点・半濁点を合成済みの形に畳み込みます。
///
/// 右から左へ走査し、`(基底, U+3099)`は基底+1、`(基底, U+309A)`は基底+2に
/// 畳み込みます。対象範囲外の基底には結合記号をそのまま残します。
pub(crate) fn fold_combining_marks(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= 1 {
        return text.to_string();
    }

    let mut reversed: Vec<char> = Vec::with_capacity(chars.len());
    let mut i = chars.len() - 1;
    loop {
        if i == 0 {
            reversed.push(chars[0]);
            break;
        }
        let prev = chars[i - 1];
        let folded = match chars[i] {
            COMBINING_DAKUTEN if dakuten_allowed(prev) => char::from_u32(prev as u32 + 1),
            COMBINING_HANDAKUTEN if handakuten_allowed(prev) => char::from_u32(prev as u32 + 2),
            _ => None,
        };
        match folded {
            Some(f) => {
                reversed.push(f);
                if i < 2 {
                    break;
                }
                i -= 2;
            }
            None => {
                reversed.push(chars[i]);
                i -= 1;
            }
        }
    }
    reversed.iter().rev().collect()
}

/// 母音クラスごとのかな一覧。長音記号の解決に使用します。
const VOWEL_TO_KANA: [(char, &str); 5] = [
    (
        'a',
        "ぁあかがさざただなはばぱまゃやらゎわヵァアカガサザタダナハバパマャヤラヮワヵヷ",
    ),
    (
        'i',
        "ぃいきぎしじちぢにひびぴみりゐィイキギシジチヂニヒビピミリヰヸ",
    ),
    (
        'u',
        "ぅうくぐすずっつづぬふぶぷむゅゆるゥウクグスズッツヅヌフブプムュユルヴ",
    ),
    (
        'e',
        "ぇえけげせぜてでねへべぺめれゑヶェエケゲセゼテデネヘベペメレヱヶヹ",
    ),
    (
        'o',
        "ぉおこごそぞとどのほぼぽもょよろをォオコゴソゾトドノホボポモョヨロヲヺ",
    ),
];

fn kana_to_vowel(kana: char) -> Option<char> {
    VOWEL_TO_KANA
        .iter()
        .find(|(_, kana_list)| kana_list.contains(kana))
        .map(|(vowel, _)| *vowel)
}

/// 直前のかなの母音に応じた長音記号の読み替え先。
///
/// 歴史的仮名遣いの慣習により、母音`o`の長音は「お」ではなく「う」です。
fn prolonged_hiragana(prev: char) -> Option<char> {
    match kana_to_vowel(prev)? {
        'a' => Some('あ'),
        'i' => Some('い'),
        'u' => Some('う'),
        'e' => Some('え'),
        'o' => Some('う'),
        _ => None,
    }
}

/// ひらがなをカタカナへ変換します。
pub(crate) fn hiragana_to_katakana(text: &str) -> String {
    text.chars()
        .map(|c| {
            if HIRAGANA_RANGE.contains(&(c as u32)) {
                char::from_u32(c as u32 + KANA_OFFSET).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// カタカナをひらがなへ変換します。
///
/// 小さいヵ・ヶはひらがな対応を持たないためそのまま残します。
/// 長音記号は直前のかなの母音に読み替えます。
pub(crate) fn katakana_to_hiragana(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        let mapped = match c {
            KATAKANA_SMALL_KA | KATAKANA_SMALL_KE => c,
            PROLONGED_SOUND_MARK => match result.chars().last().and_then(prolonged_hiragana) {
                Some(prolonged) => prolonged,
                None => c,
            },
            _ if KATAKANA_RANGE.contains(&(c as u32)) => {
                char::from_u32(c as u32 - KANA_OFFSET).unwrap_or(c)
            }
            _ => c,
        };
        result.push(mapped);
    }
    result
}

fn is_emphatic(c: char) -> bool {
    c == HIRAGANA_SMALL_TSU || c == KATAKANA_SMALL_TSU || c == PROLONGED_SOUND_MARK
}

/// 強調のための促音・長音の連続を圧縮します。
///
/// 文字列の先頭と末尾に連なる強調文字は保持します。中間部では、
/// `full`が偽の場合は隣接する連続ごとに1文字だけ残し、真の場合は
/// すべて取り除きます。
pub(crate) fn collapse_emphatic(text: &str, full: bool) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return String::new();
    }

    let left = chars.iter().take_while(|c| is_emphatic(**c)).count();
    let right_run = chars.iter().rev().take_while(|c| is_emphatic(**c)).count();

    // 全体が強調文字の場合はそのまま
    if left + right_run >= chars.len() {
        return text.to_string();
    }
    let right = chars.len() - right_run;

    let mut result: String = chars[..left].iter().collect();
    let mut current: Option<char> = None;
    for &c in &chars[left..right] {
        if is_emphatic(c) {
            if current != Some(c) {
                current = Some(c);
                if !full {
                    result.push(c);
                }
            }
        } else {
            current = None;
            result.push(c);
        }
    }
    result.extend(&chars[right..]);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_halfwidth_to_fullwidth() {
        assert_eq!(halfwidth_to_fullwidth("ｶﾞｷ"), "ガキ");
        assert_eq!(halfwidth_to_fullwidth("ﾊﾟﾝ"), "パン");
        assert_eq!(halfwidth_to_fullwidth("ﾖﾐﾁｬﾝ"), "ヨミチャン");
        // 濁点が結合できない基底には独立した記号が残る
        assert_eq!(halfwidth_to_fullwidth("ｱﾞ"), "ア\u{ff9e}");
    }

    #[test]
    fn test_fold_combining_marks() {
        assert_eq!(fold_combining_marks("ト\u{3099}"), "ド");
        assert_eq!(fold_combining_marks("ハ\u{309a}ン"), "パン");
        assert_eq!(fold_combining_marks("か\u{3099}き"), "がき");
        // 許可範囲外の基底はそのまま
        assert_eq!(fold_combining_marks("ア\u{3099}"), "ア\u{3099}");
    }

    #[test]
    fn test_kana_conversion() {
        assert_eq!(hiragana_to_katakana("よみちゃん"), "ヨミチャン");
        assert_eq!(katakana_to_hiragana("ヨミチャン"), "よみちゃん");
        // 長音記号は直前の母音に解決される
        assert_eq!(katakana_to_hiragana("スキー"), "すきい");
        assert_eq!(katakana_to_hiragana("ロープ"), "ろうぷ");
    }

    #[test]
    fn test_collapse_emphatic() {
        assert_eq!(collapse_emphatic("すっっごーーい", false), "すっごーい");
        assert_eq!(collapse_emphatic("すっっごーーい", true), "すごい");
        // 先頭・末尾の強調文字は保持される
        assert_eq!(collapse_emphatic("っすっっごい", false), "っすっごい");
        assert_eq!(collapse_emphatic("ーーー", true), "ーーー");
    }
}
