//! クエリ断片の表記ゆれ展開
//!
//! このモジュールは、検索対象の断片を辞書の見出し語と一致し得るすべての
//! 表記に展開します。9つの変換器を固定順で適用し、各変換器の後に
//! (変換元, オプション)の全組み合わせの出力を集合にまとめます。
//! テキストで重複排除し、同一テキストには最小のステップ数を保持します。
//! ステップ数は元の断片から変形に要した非恒等変換の回数で、照合結果の
//! ランキングで変形の少ない候補を優先するために使われます。

pub(crate) mod kana;
pub(crate) mod romaji;
pub(crate) mod unicode;

use std::collections::BTreeMap;

/// 1つの表記候補
///
/// `steps`は元のテキストからこの候補に到達するまでに適用した
/// 非恒等変換の回数です。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextVariant {
    /// 候補テキスト
    pub text: String,
    /// 適用した非恒等変換の回数
    pub steps: u32,
}

/// 変換器: オプション数と、(テキスト, オプション)を出力へ写す関数。
/// オプション0は常に恒等変換です。
struct Transformer {
    options: u8,
    apply: fn(&str, u8) -> String,
}

/// 変換器の適用順は固定で、辞書の見出し語表記への正規化として
/// 意味を持つ順序です。
const TRANSFORMERS: &[Transformer] = &[
    // 1. 半角カタカナ → 全角: ﾖﾐﾁｬﾝ → ヨミチャン
    Transformer {
        options: 2,
        apply: |text, opt| match opt {
            1 => kana::halfwidth_to_fullwidth(text),
            _ => text.to_string(),
        },
    },
    // 2. ラテン文字 → ひらがな: yomitan → よみたん
    Transformer {
        options: 2,
        apply: |text, opt| match opt {
            1 => romaji::alphabetic_to_kana(text),
            _ => text.to_string(),
        },
    },
    // 3. 結合濁点・半濁点の畳み込み: ト+U+3099 → ド
    Transformer {
        options: 2,
        apply: |text, opt| match opt {
            1 => kana::fold_combining_marks(text),
            _ => text.to_string(),
        },
    },
    // 4. CJK互換文字のNFKD分解: ㍍ → メートル
    Transformer {
        options: 2,
        apply: |text, opt| match opt {
            1 => unicode::normalize_cjk_compatibility(text),
            _ => text.to_string(),
        },
    },
    // 5. CJK部首文字のNFKD分解: ⼀ → 一
    Transformer {
        options: 2,
        apply: |text, opt| match opt {
            1 => unicode::normalize_radicals(text),
            _ => text.to_string(),
        },
    },
    // 6. 英数字の全角・半角: ｙｏｍｉｔａｎ ⇔ yomitan
    Transformer {
        options: 3,
        apply: |text, opt| match opt {
            1 => unicode::alphanumeric_to_halfwidth(text),
            2 => unicode::alphanumeric_to_fullwidth(text),
            _ => text.to_string(),
        },
    },
    // 7. ひらがな ⇔ カタカナ: よみちゃん ⇔ ヨミチャン
    Transformer {
        options: 3,
        apply: |text, opt| match opt {
            1 => kana::katakana_to_hiragana(text),
            2 => kana::hiragana_to_katakana(text),
            _ => text.to_string(),
        },
    },
    // 8. 強調表記の圧縮: すっっごーーい → すっごーい / すごい
    Transformer {
        options: 3,
        apply: |text, opt| match opt {
            1 => kana::collapse_emphatic(text, false),
            2 => kana::collapse_emphatic(text, true),
            _ => text.to_string(),
        },
    },
    // 9. 異体字の標準化: 萬 → 万
    Transformer {
        options: 2,
        apply: |text, opt| match opt {
            1 => unicode::standardize_kanji(text),
            _ => text.to_string(),
        },
    },
];

/// テキストの表記候補を列挙します。
///
/// 出力はテキストで重複排除された集合で、元のテキストがステップ数0で
/// 必ず含まれます。同一テキストに複数の経路で到達した場合は最小の
/// ステップ数が採用されます。
///
/// # 引数
///
/// * `text` - 展開するクエリ断片
///
/// # 戻り値
///
/// 表記候補のリスト。テキストの辞書順で整列されます。
pub fn process(text: &str) -> Vec<TextVariant> {
    let mut variants: BTreeMap<String, u32> = BTreeMap::new();
    variants.insert(text.to_string(), 0);

    for transformer in TRANSFORMERS {
        let mut next: BTreeMap<String, u32> = BTreeMap::new();
        for (variant, steps) in &variants {
            for option in 0..transformer.options {
                let processed = (transformer.apply)(variant, option);
                let new_steps = if processed == *variant {
                    *steps
                } else {
                    *steps + 1
                };
                next.entry(processed)
                    .and_modify(|s| *s = (*s).min(new_steps))
                    .or_insert(new_steps);
            }
        }
        variants = next;
    }

    variants
        .into_iter()
        .map(|(text, steps)| TextVariant { text, steps })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steps_of(variants: &[TextVariant], text: &str) -> Option<u32> {
        variants.iter().find(|v| v.text == text).map(|v| v.steps)
    }

    #[test]
    fn test_identity() {
        let variants = process("食べる");
        assert_eq!(steps_of(&variants, "食べる"), Some(0));
    }

    #[test]
    fn test_halfwidth_dakuten_fold() {
        // 半角の基底+濁点記号が1ステップで1つの全角文字になる
        let variants = process("ｶﾞｷ");
        assert_eq!(steps_of(&variants, "ガキ"), Some(1));
    }

    #[test]
    fn test_romaji_and_width() {
        let variants = process("yomitan");
        assert_eq!(steps_of(&variants, "よみたん"), Some(1));
        assert_eq!(steps_of(&variants, "ｙｏｍｉｔａｎ"), Some(1));
    }

    #[test]
    fn test_emphatic_collapse() {
        let variants = process("すっっごーーい");
        assert_eq!(steps_of(&variants, "すっごーい"), Some(1));
        assert_eq!(steps_of(&variants, "すごい"), Some(1));
    }

    #[test]
    fn test_katakana_variant() {
        let variants = process("よみちゃん");
        assert_eq!(steps_of(&variants, "ヨミチャン"), Some(1));
    }

    #[test]
    fn test_minimum_steps_kept() {
        // 恒等変換を経ても元テキストのステップ数は0のまま
        let variants = process("ガキ");
        assert_eq!(steps_of(&variants, "ガキ"), Some(0));
        assert_eq!(steps_of(&variants, "がき"), Some(1));
    }
}
