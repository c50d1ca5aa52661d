//! Unicode正規化と漢字異体字の変換
//!
//! CJK互換文字・部首文字のNFKD分解、英数字の全角・半角変換、
//! 異体字から標準字体への置き換えを提供します。

use unicode_normalization::UnicodeNormalization;

const CJK_COMPAT_RANGE: std::ops::RangeInclusive<u32> = 0x3300..=0x33ff;
const KANGXI_RADICALS_RANGE: std::ops::RangeInclusive<u32> = 0x2f00..=0x2fdf;
const CJK_RADICALS_SUPPLEMENT_RANGE: std::ops::RangeInclusive<u32> = 0x2e80..=0x2eff;

/// ASCII英数字を全角形へ変換します。
pub(crate) fn alphanumeric_to_fullwidth(text: &str) -> String {
    text.chars()
        .map(|c| {
            let cp = c as u32;
            let mapped = match cp {
                0x30..=0x39 => cp + 0xff10 - 0x30,
                0x41..=0x5a => cp + 0xff21 - 0x41,
                0x61..=0x7a => cp + 0xff41 - 0x61,
                _ => cp,
            };
            char::from_u32(mapped).unwrap_or(c)
        })
        .collect()
}

/// 全角英数字をASCII形へ変換します。
pub(crate) fn alphanumeric_to_halfwidth(text: &str) -> String {
    text.chars()
        .map(|c| {
            let cp = c as u32;
            let mapped = match cp {
                0xff10..=0xff19 => cp - (0xff10 - 0x30),
                0xff21..=0xff3a => cp - (0xff21 - 0x41),
                0xff41..=0xff5a => cp - (0xff41 - 0x61),
                _ => cp,
            };
            char::from_u32(mapped).unwrap_or(c)
        })
        .collect()
}

/// CJK互換ブロック(U+3300..U+33FF)の文字をNFKD分解します。
///
/// 例: ㌀ → アハ\u{309a}ート (分解後の結合記号は後段の処理対象外のまま残る)
pub(crate) fn normalize_cjk_compatibility(text: &str) -> String {
    expand_in_ranges(text, |cp| CJK_COMPAT_RANGE.contains(&cp))
}

/// 康熙部首(U+2F00..U+2FDF)とCJK部首補助(U+2E80..U+2EFF)をNFKD分解します。
///
/// 例: ⼀ (U+2F00) → 一 (U+4E00)
pub(crate) fn normalize_radicals(text: &str) -> String {
    expand_in_ranges(text, |cp| {
        KANGXI_RADICALS_RANGE.contains(&cp) || CJK_RADICALS_SUPPLEMENT_RANGE.contains(&cp)
    })
}

fn expand_in_ranges(text: &str, in_range: impl Fn(u32) -> bool) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        if in_range(c as u32) {
            result.extend(std::iter::once(c).nfkd());
        } else {
            result.push(c);
        }
    }
    result
}

/// 異体字(主に旧字体)を標準字体へ置き換えます。
///
/// コードポイント単位の1対1対応のみを扱う静的なテーブルです。
pub(crate) fn standardize_kanji(text: &str) -> String {
    text.chars().map(kanji_variant).collect()
}

#[rustfmt::skip]
fn kanji_variant(c: char) -> char {
    match c {
        '萬' => '万', '亞' => '亜', '惡' => '悪', '壓' => '圧', '圍' => '囲',
        '爲' => '為', '醫' => '医', '壹' => '壱', '稻' => '稲', '飮' => '飲',
        '隱' => '隠', '營' => '営', '榮' => '栄', '衞' => '衛', '驛' => '駅',
        '圓' => '円', '鹽' => '塩', '奧' => '奥', '應' => '応', '歐' => '欧',
        '毆' => '殴', '櫻' => '桜', '假' => '仮', '價' => '価', '畫' => '画',
        '擴' => '拡', '覺' => '覚', '學' => '学', '樂' => '楽', '勸' => '勧',
        '觀' => '観', '歸' => '帰', '氣' => '気', '舊' => '旧', '據' => '拠',
        '擧' => '挙', '峽' => '峡', '狹' => '狭', '曉' => '暁', '區' => '区',
        '驅' => '駆', '勳' => '勲', '徑' => '径', '惠' => '恵', '溪' => '渓',
        '經' => '経', '繼' => '継', '縣' => '県', '儉' => '倹', '劍' => '剣',
        '險' => '険', '圈' => '圏', '檢' => '検', '獻' => '献', '權' => '権',
        '顯' => '顕', '嚴' => '厳', '廣' => '広', '鑛' => '鉱', '號' => '号',
        '國' => '国', '濟' => '済', '碎' => '砕', '齋' => '斎', '劑' => '剤',
        '參' => '参', '慘' => '惨', '棧' => '桟', '蠶' => '蚕', '贊' => '賛',
        '殘' => '残', '絲' => '糸', '齒' => '歯', '兒' => '児', '辭' => '辞',
        '濕' => '湿', '實' => '実', '寫' => '写', '釋' => '釈', '壽' => '寿',
        '收' => '収', '從' => '従', '澁' => '渋', '獸' => '獣', '縱' => '縦',
        '肅' => '粛', '處' => '処', '敍' => '叙', '燒' => '焼', '稱' => '称',
        '證' => '証', '乘' => '乗', '剩' => '剰', '壤' => '壌', '孃' => '嬢',
        '條' => '条', '淨' => '浄', '狀' => '状', '疊' => '畳', '讓' => '譲',
        '釀' => '醸', '觸' => '触', '寢' => '寝', '愼' => '慎', '眞' => '真',
        '盡' => '尽', '圖' => '図', '粹' => '粋', '醉' => '酔', '隨' => '随',
        '髓' => '髄', '數' => '数', '樞' => '枢', '聲' => '声', '靜' => '静',
        '齊' => '斉', '攝' => '摂', '竊' => '窃', '專' => '専', '戰' => '戦',
        '淺' => '浅', '潛' => '潜', '纖' => '繊', '錢' => '銭', '禪' => '禅',
        '雙' => '双', '壯' => '壮', '搜' => '捜', '插' => '挿', '巢' => '巣',
        '爭' => '争', '總' => '総', '莊' => '荘', '裝' => '装', '藏' => '蔵',
        '臟' => '臓', '續' => '続', '墮' => '堕', '體' => '体', '對' => '対',
        '帶' => '帯', '滯' => '滞', '臺' => '台', '瀧' => '滝', '擇' => '択',
        '澤' => '沢', '單' => '単', '擔' => '担', '膽' => '胆', '團' => '団',
        '彈' => '弾', '斷' => '断', '晝' => '昼', '蟲' => '虫', '鑄' => '鋳',
        '廳' => '庁', '聽' => '聴', '鎭' => '鎮', '遞' => '逓', '鐵' => '鉄',
        '點' => '点', '傳' => '伝', '黨' => '党', '盜' => '盗', '燈' => '灯',
        '當' => '当', '獨' => '独', '讀' => '読', '屆' => '届', '繩' => '縄',
        '貳' => '弐', '惱' => '悩', '腦' => '脳', '廢' => '廃', '拜' => '拝',
        '賣' => '売', '麥' => '麦', '發' => '発', '髮' => '髪', '拔' => '抜',
        '蠻' => '蛮', '祕' => '秘', '佛' => '仏', '變' => '変', '邊' => '辺',
        '辨' => '弁', '瓣' => '弁', '辯' => '弁', '豐' => '豊', '寶' => '宝',
        '滿' => '満', '默' => '黙', '藥' => '薬', '譯' => '訳', '豫' => '予',
        '餘' => '余', '與' => '与', '譽' => '誉', '搖' => '揺', '樣' => '様',
        '來' => '来', '賴' => '頼', '亂' => '乱', '覽' => '覧', '龍' => '竜',
        '兩' => '両', '獵' => '猟', '綠' => '緑', '壘' => '塁', '淚' => '涙',
        '勵' => '励', '禮' => '礼', '靈' => '霊', '齡' => '齢', '戀' => '恋',
        '爐' => '炉', '勞' => '労', '樓' => '楼', '灣' => '湾',
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_conversion() {
        assert_eq!(alphanumeric_to_fullwidth("abc123XYZ"), "ａｂｃ１２３ＸＹＺ");
        assert_eq!(alphanumeric_to_halfwidth("ａｂｃ１２３ＸＹＺ"), "abc123XYZ");
        // かなは影響を受けない
        assert_eq!(alphanumeric_to_fullwidth("aあ"), "ａあ");
    }

    #[test]
    fn test_radical_normalization() {
        assert_eq!(normalize_radicals("\u{2f00}"), "一");
        assert_eq!(normalize_radicals("\u{2f08}"), "人");
        // 範囲外の通常の漢字はそのまま
        assert_eq!(normalize_radicals("一人"), "一人");
    }

    #[test]
    fn test_cjk_compatibility() {
        // ㍍ → メートル (NFKD)
        assert_eq!(normalize_cjk_compatibility("\u{334d}"), "メートル");
    }

    #[test]
    fn test_standardize_kanji() {
        assert_eq!(standardize_kanji("萬"), "万");
        assert_eq!(standardize_kanji("來日"), "来日");
        assert_eq!(standardize_kanji("学校"), "学校");
    }
}
