//! 辞書アーカイブ内のJSONスキーマ
//!
//! `index.json`と各バンクファイルの構造を定義します。バンクのレコードは
//! 固定アリティのJSON配列で、位置ごとの意味は上流フォーマットが規定
//! します。語釈(glossary)とメタデータのペイロードは任意のJSON値であり、
//! [`RawValue`]でバイト列のまま保持します。

use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use serde_json::Value;

/// `index.json`のメタデータ
#[derive(Debug, Serialize, Deserialize)]
pub struct DictIndex {
    /// 辞書の表示名。出力バンドルのディレクトリ名にもなります。
    pub title: String,
    /// リビジョン文字列
    #[serde(default)]
    pub revision: String,
    /// フォーマット番号
    #[serde(default = "default_format")]
    pub format: i64,
}

fn default_format() -> i64 {
    3
}

/// 用語バンクの1レコード:
/// (表記, 読み, 定義タグ, 規則タグ, スコア, 語釈, 連番, 用語タグ)
pub(crate) type TermRow = (
    String,
    String,
    Option<String>,
    String,
    Value,
    Box<RawValue>,
    Value,
    String,
);

/// メタバンクの1レコード: (表記, モード, データ)
pub(crate) type MetaRow = (String, String, Box<RawValue>);

/// タグバンクの1レコード: (名前, カテゴリ, 順序, 注記, スコア)
pub(crate) type TagRow = (String, String, Value, String, Value);

/// 先頭のUTF-8 BOMを取り除きます。一部の辞書はBOM付きで配布されます。
pub(crate) fn strip_bom(bytes: &[u8]) -> &[u8] {
    bytes.strip_prefix(b"\xef\xbb\xbf").unwrap_or(bytes)
}

/// 頻度メタデータの多態ペイロード
///
/// ソースレベルではタグ無しのユニオンです:
/// 整数リテラル、`{value, displayValue?}`、またはそのどちらかを
/// `frequency`に入れ子にして任意の`reading`を伴う形。
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum FrequencyData {
    Scalar(i64),
    Nested {
        #[serde(default)]
        reading: Option<String>,
        frequency: FrequencyValue,
    },
    Detail {
        value: i64,
        #[serde(default, rename = "displayValue")]
        display_value: Option<String>,
    },
}

/// 入れ子になった頻度値
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum FrequencyValue {
    Scalar(i64),
    Detail {
        value: i64,
        #[serde(default, rename = "displayValue")]
        display_value: Option<String>,
    },
}

impl FrequencyData {
    /// 正準形 `(読み, 値, 表示文字列)` へ射影します。
    ///
    /// 表示文字列が無い場合は値の10進表記を使います。
    pub(crate) fn project(&self) -> (Option<&str>, i64, String) {
        match self {
            FrequencyData::Scalar(value) => (None, *value, value.to_string()),
            FrequencyData::Detail {
                value,
                display_value,
            } => (
                None,
                *value,
                display_value.clone().unwrap_or_else(|| value.to_string()),
            ),
            FrequencyData::Nested { reading, frequency } => {
                let (value, display) = match frequency {
                    FrequencyValue::Scalar(value) => (*value, value.to_string()),
                    FrequencyValue::Detail {
                        value,
                        display_value,
                    } => (
                        *value,
                        display_value.clone().unwrap_or_else(|| value.to_string()),
                    ),
                };
                (reading.as_deref(), value, display)
            }
        }
    }
}

/// ピッチアクセントのペイロード: 読みと下降位置のリスト
#[derive(Debug, Deserialize)]
pub(crate) struct PitchData {
    #[serde(default)]
    pub(crate) reading: Option<String>,
    #[serde(default)]
    pub(crate) pitches: Vec<PitchPosition>,
}

/// 1つのアクセント位置。位置以外のキーは無視します。
#[derive(Debug, Deserialize)]
pub(crate) struct PitchPosition {
    #[serde(default)]
    pub(crate) position: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_scalar() {
        let data: FrequencyData = serde_json::from_str("1234").unwrap();
        assert_eq!(data.project(), (None, 1234, "1234".to_string()));
    }

    #[test]
    fn test_frequency_detail() {
        let data: FrequencyData =
            serde_json::from_str(r#"{"value": 7, "displayValue": "7❋"}"#).unwrap();
        assert_eq!(data.project(), (None, 7, "7❋".to_string()));
    }

    #[test]
    fn test_frequency_nested() {
        let data: FrequencyData =
            serde_json::from_str(r#"{"reading": "にほん", "frequency": 12}"#).unwrap();
        assert_eq!(data.project(), (Some("にほん"), 12, "12".to_string()));

        let data: FrequencyData = serde_json::from_str(
            r#"{"reading": "にほん", "frequency": {"value": 12, "displayValue": "12k"}}"#,
        )
        .unwrap();
        assert_eq!(data.project(), (Some("にほん"), 12, "12k".to_string()));
    }

    #[test]
    fn test_frequency_malformed() {
        assert!(serde_json::from_str::<FrequencyData>(r#""high""#).is_err());
    }

    #[test]
    fn test_pitch() {
        let data: PitchData = serde_json::from_str(
            r#"{"reading": "はし", "pitches": [{"position": 0}, {"position": 2, "tags": []}]}"#,
        )
        .unwrap();
        assert_eq!(data.reading.as_deref(), Some("はし"));
        let positions: Vec<i64> = data.pitches.iter().map(|p| p.position).collect();
        assert_eq!(positions, [0, 2]);
    }

    #[test]
    fn test_strip_bom() {
        assert_eq!(strip_bom(b"\xef\xbb\xbf[]"), b"[]");
        assert_eq!(strip_bom(b"[]"), b"[]");
    }

    #[test]
    fn test_term_row() {
        let json = r#"[["日本", "にほん", null, "", 0, "Japan", 1, ""]]"#;
        let rows: Vec<TermRow> = serde_json::from_str(json).unwrap();
        assert_eq!(rows[0].0, "日本");
        assert_eq!(rows[0].1, "にほん");
        assert_eq!(rows[0].5.get(), "\"Japan\"");
    }

    #[test]
    fn test_index_defaults() {
        let index: DictIndex = serde_json::from_str(r#"{"title": "testdict"}"#).unwrap();
        assert_eq!(index.title, "testdict");
        assert_eq!(index.format, 3);
        assert!(index.revision.is_empty());
    }
}
