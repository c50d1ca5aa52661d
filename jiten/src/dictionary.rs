//! 辞書バンドルの読み取り
//!
//! このモジュールは、インポータが出力した不変のバンドルディレクトリを
//! マウントし、見出しキーに対する点クエリを提供します。
//!
//! バンドルは次のファイルで構成されます:
//!
//! - `info.json`: タイトル・リビジョン・フォーマット番号
//! - `styles.css`: 任意の表示スタイル(不透明データ)
//! - `blobs.bin`: 用語・メタレコードの列とオフセット索引領域
//! - `offsets.bin`: 完全ハッシュの値で添字する密なu64オフセット配列
//! - `hash.mph`: 全キー上の最小完全ハッシュ
//! - `media.bin` / `media_index.bin`: 任意のメディア(照合では未使用)
//!
//! `offsets.bin`と`blobs.bin`はリーダーの生存期間にわたって読み取り専用で
//! メモリマップされます。マップ後の状態は不変なので、複数の呼び出し元が
//! 共有読み取りしても安全です。クエリ結果はマッピングからコピーした
//! 所有文字列を持ち、リーダーの操作より長く生存できます。

pub mod bank;
pub mod importer;

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::ops::Deref;
use std::path::Path;

use memmap2::Mmap;

use crate::bytes::ByteReader;
use crate::dictionary::bank::{strip_bom, DictIndex, FrequencyData, PitchData};
use crate::errors::{JitenError, Result};
use crate::hash::KeyIndex;

/// 用語レコードの型タグ
pub(crate) const TAG_TERM: u8 = 0;
/// メタレコードの型タグ
pub(crate) const TAG_META: u8 = 1;

/// 展開後の語釈サイズの上限。これを超えるフレームは破損とみなします。
const MAX_GLOSSARY_SIZE: u64 = 256 * 1024 * 1024;

/// 1つの辞書が1つの用語に与える語釈
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlossaryEntry {
    /// 出典辞書の表示名
    pub dict_name: String,
    /// 展開済みの語釈JSON
    pub glossary: String,
    /// 定義タグ
    pub definition_tags: String,
    /// 用語タグ
    pub term_tags: String,
}

/// 1つの頻度値
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frequency {
    /// 順位などの数値。小さいほど高頻度です。
    pub value: i64,
    /// 表示用文字列
    pub display_value: String,
}

/// 出典辞書ごとの頻度の束
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyEntry {
    /// 出典辞書の表示名
    pub dict_name: String,
    /// 頻度値のリスト
    pub frequencies: Vec<Frequency>,
}

/// 出典辞書ごとのピッチアクセント位置の束
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PitchEntry {
    /// 出典辞書の表示名
    pub dict_name: String,
    /// 下降位置のリスト
    pub pitch_positions: Vec<i64>,
}

/// (表記, 読み)で集約された1つの照合結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermResult {
    /// 見出しの表記
    pub expression: String,
    /// 読み。ソースに読みが無い用語では表記と等しくなります。
    pub reading: String,
    /// 空白区切りの品詞タグ
    pub rules: String,
    /// マウント順に並んだ語釈
    pub glossaries: Vec<GlossaryEntry>,
    /// マウント順に並んだ頻度
    pub frequencies: Vec<FrequencyEntry>,
    /// マウント順に並んだピッチアクセント
    pub pitches: Vec<PitchEntry>,
}

/// 辞書のスタイルシート
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryStyle {
    /// 辞書の表示名
    pub dict_name: String,
    /// `styles.css`の内容
    pub styles: String,
}

/// mmapまたはヒープのバッファ
///
/// 空のファイルはマップできないプラットフォームがあるため、
/// 長さ0のバッファはヒープ側で表現します。
enum Buffer {
    Mmap(Mmap),
    Owned(Vec<u8>),
}

impl Deref for Buffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            Buffer::Mmap(mmap) => mmap,
            Buffer::Owned(vec) => vec,
        }
    }
}

/// マウント済みの1つのバンドル
struct Mount {
    name: String,
    styles: String,
    hash: KeyIndex,
    offsets: Buffer,
    blobs: Buffer,
}

impl Mount {
    fn open(path: &Path) -> Result<Self> {
        let info_raw = fs::read(path.join("info.json")).map_err(|e| {
            JitenError::invalid_argument("path", format!("failed to read info.json: {e}"))
        })?;
        let info: DictIndex = serde_json::from_slice(strip_bom(&info_raw))?;

        let name = if info.title.is_empty() {
            path.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default()
        } else {
            info.title
        };

        let styles = fs::read_to_string(path.join("styles.css")).unwrap_or_default();
        let hash = KeyIndex::load(&path.join("hash.mph"))?;
        let offsets = map_file(&path.join("offsets.bin"))?;
        let blobs = map_file(&path.join("blobs.bin"))?;

        Ok(Self {
            name,
            styles,
            hash,
            offsets,
            blobs,
        })
    }

    /// キーに対応するblobオフセットのリストを返します。
    ///
    /// ハッシュは構築時の集合外のキーに任意の添字を返すため、ここで
    /// 得られるオフセット列はまだ信用できません。呼び出し側はレコードの
    /// 表記・読みとキーを比較して検証します。
    fn blob_offsets(&self, key: &str) -> Vec<u64> {
        let Some(h) = self.hash.index_of(key) else {
            return Vec::new();
        };
        let mut offsets_rdr = ByteReader::at(&self.offsets, (h as usize).saturating_mul(8));
        let Some(index_pos) = offsets_rdr.u64() else {
            return Vec::new();
        };

        let mut rdr = ByteReader::at(&self.blobs, index_pos as usize);
        let Some(count) = rdr.u32() else {
            return Vec::new();
        };
        let mut offsets = Vec::with_capacity(count.min(1024) as usize);
        for _ in 0..count {
            match rdr.u64() {
                Some(offset) => offsets.push(offset),
                None => return Vec::new(),
            }
        }
        offsets
    }
}

fn map_file(path: &Path) -> Result<Buffer> {
    let file = File::open(path).map_err(|e| {
        JitenError::invalid_argument("path", format!("failed to open {}: {e}", path.display()))
    })?;
    if file.metadata()?.len() == 0 {
        return Ok(Buffer::Owned(Vec::new()));
    }
    let mmap = unsafe { Mmap::map(&file)? };
    Ok(Buffer::Mmap(mmap))
}

/// デコード済みの用語レコード
struct TermRecord<'a> {
    expression: &'a str,
    reading: &'a str,
    glossary: &'a [u8],
    definition_tags: &'a str,
    rules: &'a str,
    term_tags: &'a str,
}

fn decode_term_record<'a>(blobs: &'a [u8], offset: u64) -> Option<TermRecord<'a>> {
    let mut rdr = ByteReader::at(blobs, offset as usize);
    if rdr.u8()? != TAG_TERM {
        return None;
    }
    let expression_len = rdr.u16()? as usize;
    let expression = rdr.str(expression_len)?;
    let reading_len = rdr.u16()? as usize;
    let reading = rdr.str(reading_len)?;
    let glossary_len = rdr.u32()? as usize;
    let glossary = rdr.bytes(glossary_len)?;
    let definition_tags_len = rdr.u8()? as usize;
    let definition_tags = rdr.str(definition_tags_len)?;
    let rules_len = rdr.u8()? as usize;
    let rules = rdr.str(rules_len)?;
    let term_tags_len = rdr.u8()? as usize;
    let term_tags = rdr.str(term_tags_len)?;
    Some(TermRecord {
        expression,
        reading,
        glossary,
        definition_tags,
        rules,
        term_tags,
    })
}

/// デコード済みのメタレコード
struct MetaRecord<'a> {
    expression: &'a str,
    mode: &'a str,
    data: &'a [u8],
}

fn decode_meta_record<'a>(blobs: &'a [u8], offset: u64) -> Option<MetaRecord<'a>> {
    let mut rdr = ByteReader::at(blobs, offset as usize);
    if rdr.u8()? != TAG_META {
        return None;
    }
    let expression_len = rdr.u16()? as usize;
    let expression = rdr.str(expression_len)?;
    let mode_len = rdr.u8()? as usize;
    let mode = rdr.str(mode_len)?;
    let data_len = rdr.u32()? as usize;
    let data = rdr.bytes(data_len)?;
    Some(MetaRecord {
        expression,
        mode,
        data,
    })
}

fn decompress_glossary(data: &[u8]) -> String {
    if data.is_empty() {
        return String::new();
    }
    let size = match zstd::zstd_safe::get_frame_content_size(data) {
        Ok(Some(size)) if size <= MAX_GLOSSARY_SIZE => size,
        _ => return String::new(),
    };
    match zstd::bulk::decompress(data, size as usize) {
        Ok(bytes) => String::from_utf8(bytes).unwrap_or_default(),
        Err(_) => String::new(),
    }
}

/// 用語・頻度・ピッチ辞書のリーダー
///
/// 3種類の辞書を独立にマウントします。マウント順が利用者に見える
/// 優先順位であり、照合結果のランキングのタイブレークに使われます。
#[derive(Default)]
pub struct Reader {
    term_dicts: Vec<Mount>,
    freq_dicts: Vec<Mount>,
    pitch_dicts: Vec<Mount>,
}

impl Reader {
    /// 空のリーダーを作成します。
    pub fn new() -> Self {
        Self::default()
    }

    /// 用語辞書のバンドルをマウントします。
    ///
    /// # 引数
    ///
    /// * `path` - バンドルディレクトリへのパス
    ///
    /// # エラー
    ///
    /// ファイルの欠落や内容の破損でエラーを返します。失敗しても
    /// マウント済みの辞書は引き続き利用できます。
    pub fn mount_term(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.term_dicts.push(Mount::open(path.as_ref())?);
        Ok(())
    }

    /// 頻度辞書のバンドルをマウントします。
    ///
    /// # エラー
    ///
    /// ファイルの欠落や内容の破損でエラーを返します。
    pub fn mount_freq(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.freq_dicts.push(Mount::open(path.as_ref())?);
        Ok(())
    }

    /// ピッチアクセント辞書のバンドルをマウントします。
    ///
    /// # エラー
    ///
    /// ファイルの欠落や内容の破損でエラーを返します。
    pub fn mount_pitch(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.pitch_dicts.push(Mount::open(path.as_ref())?);
        Ok(())
    }

    /// 1つの見出しキーを全用語辞書から検索します。
    ///
    /// キーは表記と読みのどちらにも一致し得ます。複数の辞書が同じ
    /// (表記, 読み)を持つ場合、語釈は1つの[`TermResult`]に集約され、
    /// 後続の辞書が新しい品詞タグを追加する場合のみ`rules`に空白区切りで
    /// 連結されます。結果には頻度とピッチのメタデータも付与されます。
    ///
    /// # 引数
    ///
    /// * `key` - 検索する見出しキー
    ///
    /// # 戻り値
    ///
    /// 照合結果のリスト。キーがどの辞書にも無ければ空になります。
    pub fn query(&self, key: &str) -> Vec<TermResult> {
        let mut term_map: BTreeMap<(String, String), TermResult> = BTreeMap::new();

        for mount in &self.term_dicts {
            for offset in mount.blob_offsets(key) {
                let Some(record) = decode_term_record(&mount.blobs, offset) else {
                    continue;
                };
                // ハッシュの未定義動作とバケット内の別キーをここで吸収する
                if record.expression != key && record.reading != key {
                    continue;
                }

                let entry = GlossaryEntry {
                    dict_name: mount.name.clone(),
                    glossary: decompress_glossary(record.glossary),
                    definition_tags: record.definition_tags.to_string(),
                    term_tags: record.term_tags.to_string(),
                };

                let term = term_map
                    .entry((record.expression.to_string(), record.reading.to_string()))
                    .or_insert_with(|| TermResult {
                        expression: record.expression.to_string(),
                        reading: record.reading.to_string(),
                        rules: String::new(),
                        glossaries: Vec::new(),
                        frequencies: Vec::new(),
                        pitches: Vec::new(),
                    });
                merge_rules(&mut term.rules, record.rules);
                term.glossaries.push(entry);
            }
        }

        let mut results: Vec<TermResult> = term_map.into_values().collect();
        self.query_freq(&mut results);
        self.query_pitch(&mut results);
        results
    }

    /// 照合結果へ頻度メタデータを付与します。
    fn query_freq(&self, terms: &mut [TermResult]) {
        for term in terms.iter_mut() {
            for mount in &self.freq_dicts {
                let mut frequencies = Vec::new();
                for offset in mount.blob_offsets(&term.expression) {
                    let Some(record) = decode_meta_record(&mount.blobs, offset) else {
                        continue;
                    };
                    if record.expression != term.expression || record.mode != "freq" {
                        continue;
                    }
                    let Ok(data) = serde_json::from_slice::<FrequencyData>(record.data) else {
                        log::debug!("skipping malformed frequency payload in {}", mount.name);
                        continue;
                    };
                    let (reading, value, display_value) = data.project();
                    if reading.is_some_and(|r| r != term.reading) {
                        continue;
                    }
                    frequencies.push(Frequency {
                        value,
                        display_value,
                    });
                }
                if !frequencies.is_empty() {
                    term.frequencies.push(FrequencyEntry {
                        dict_name: mount.name.clone(),
                        frequencies,
                    });
                }
            }
        }
    }

    /// 照合結果へピッチアクセントのメタデータを付与します。
    fn query_pitch(&self, terms: &mut [TermResult]) {
        for term in terms.iter_mut() {
            for mount in &self.pitch_dicts {
                let mut positions = Vec::new();
                for offset in mount.blob_offsets(&term.expression) {
                    let Some(record) = decode_meta_record(&mount.blobs, offset) else {
                        continue;
                    };
                    if record.expression != term.expression || record.mode != "pitch" {
                        continue;
                    }
                    let Ok(data) = serde_json::from_slice::<PitchData>(record.data) else {
                        log::debug!("skipping malformed pitch payload in {}", mount.name);
                        continue;
                    };
                    if data.reading.as_deref().is_some_and(|r| r != term.reading) {
                        continue;
                    }
                    positions.extend(data.pitches.iter().map(|p| p.position));
                }
                if !positions.is_empty() {
                    term.pitches.push(PitchEntry {
                        dict_name: mount.name.clone(),
                        pitch_positions: positions,
                    });
                }
            }
        }
    }

    /// 1つの見出し・読みの組に対する頻度メタデータを返します。
    ///
    /// # 引数
    ///
    /// * `expression` - 見出しの表記
    /// * `reading` - 見出しの読み。読み付きの頻度レコードはこの値と
    ///   一致する場合のみ採用されます。
    pub fn frequency_for(&self, expression: &str, reading: &str) -> Vec<FrequencyEntry> {
        let mut terms = vec![TermResult {
            expression: expression.to_string(),
            reading: reading.to_string(),
            rules: String::new(),
            glossaries: Vec::new(),
            frequencies: Vec::new(),
            pitches: Vec::new(),
        }];
        self.query_freq(&mut terms);
        terms.pop().map(|t| t.frequencies).unwrap_or_default()
    }

    /// 用語辞書のスタイルシートを返します。
    ///
    /// 空でない`styles.css`を持つ辞書の(名前, CSS)の組を
    /// マウント順で返します。
    pub fn styles(&self) -> Vec<DictionaryStyle> {
        self.term_dicts
            .iter()
            .filter(|m| !m.styles.is_empty())
            .map(|m| DictionaryStyle {
                dict_name: m.name.clone(),
                styles: m.styles.clone(),
            })
            .collect()
    }

    /// 頻度辞書の名前をマウント順で返します。
    ///
    /// この順序がランキングのタイブレーク順です。
    pub fn freq_dict_names(&self) -> Vec<&str> {
        self.freq_dicts.iter().map(|m| m.name.as_str()).collect()
    }
}

/// 既存の`rules`文字列に、未登場のタグのみを空白区切りで追加します。
fn merge_rules(rules: &mut String, incoming: &str) {
    for tag in incoming.split_whitespace() {
        if !rules.split_whitespace().any(|existing| existing == tag) {
            if !rules.is_empty() {
                rules.push(' ');
            }
            rules.push_str(tag);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_rules() {
        let mut rules = String::new();
        merge_rules(&mut rules, "v5u vt");
        assert_eq!(rules, "v5u vt");
        merge_rules(&mut rules, "vt v1");
        assert_eq!(rules, "v5u vt v1");
        merge_rules(&mut rules, "");
        assert_eq!(rules, "v5u vt v1");
    }

    #[test]
    fn test_decode_rejects_wrong_tag() {
        let mut buf = Vec::new();
        crate::bytes::put_u8(&mut buf, TAG_META);
        crate::bytes::put_u16(&mut buf, 0);
        assert!(decode_term_record(&buf, 0).is_none());
    }

    #[test]
    fn test_decompress_garbage_is_empty() {
        assert_eq!(decompress_glossary(&[]), "");
        assert_eq!(decompress_glossary(b"not a zstd frame"), "");
    }
}
