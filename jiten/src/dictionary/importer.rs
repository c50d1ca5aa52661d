//! 辞書アーカイブのインポート
//!
//! ベンダー形式のzipアーカイブ(index.json + バンクファイル + メディア)を、
//! 照合時にメモリマップで読める不変のバンドルディレクトリへ変換します。
//!
//! 変換は次の順序で進みます:
//!
//! 1. `index.json`を読んでタイトル・リビジョン・フォーマットを得る
//! 2. エントリ名の接頭辞でバンクを分類する
//! 3. 用語バンクをワーカーで並列にパースし語釈をzstd圧縮する。
//!    書き込みは単一スレッドが投入順に消費し、blobオフセットが追記順と
//!    一致するようにする
//! 4. メタバンクを書き、タグバンクは数えるだけにする
//! 5. オフセット索引領域を書き、キーごとの位置を記録する
//! 6. 全キー上の最小完全ハッシュを構築・保存する
//! 7. `dense[mph(key)] = キーの索引位置` の密な配列を`offsets.bin`に書く
//! 8. メディアを`media.bin`へ詰め、`media_index.bin`を並走させる
//!
//! インポートはファイル粒度のベストエフォートです。壊れたバンクは
//! エラーを記録して他のバンクの処理を続けますが、エラーが1つでもあれば
//! 結果の`success`は偽になります。出力の原子的な置き換えは行いません。

use std::fs::{self, File};
use std::io::Read;
use std::path::Path;
use std::thread;

use zip::ZipArchive;

use crate::bytes::{put_u16, put_u32, put_u64, put_u8};
use crate::dictionary::bank::{strip_bom, DictIndex, MetaRow, TagRow, TermRow};
use crate::dictionary::{TAG_META, TAG_TERM};
use crate::errors::{JitenError, Result};
use crate::hash::KeyIndex;

/// 語釈の圧縮レベル。インポート速度を優先します。
const GLOSSARY_COMPRESSION_LEVEL: i32 = 1;

/// インポートの結果
#[derive(Debug, Default)]
pub struct ImportResult {
    /// エラーなしで完了したかどうか
    pub success: bool,
    /// 辞書のタイトル。バンドルディレクトリ名になります。
    pub title: String,
    /// 取り込んだ用語レコード数
    pub term_count: usize,
    /// 取り込んだメタレコード数
    pub meta_count: usize,
    /// パースしたタグレコード数
    pub tag_count: usize,
    /// 取り込んだメディアファイル数
    pub media_count: usize,
    /// 発生したエラーの一覧
    pub errors: Vec<String>,
}

/// パース・圧縮済みの1つの用語
struct TermEntry {
    expression: String,
    reading: String,
    definition_tags: String,
    rules: String,
    glossary_z: Vec<u8>,
    term_tags: String,
}

/// zipアーカイブをバンドルディレクトリへインポートします。
///
/// 出力は`output_dir`直下に辞書タイトルの名前で作られ、既存のファイルは
/// 上書きされます。
///
/// # 引数
///
/// * `zip_path` - 辞書zipアーカイブへのパス
/// * `output_dir` - バンドルの親ディレクトリ
///
/// # 戻り値
///
/// 件数とエラー一覧を持つ[`ImportResult`]。zipが開けない、
/// `index.json`が無いなどの致命的な失敗でも`errors`に理由が入ります。
pub fn import(zip_path: impl AsRef<Path>, output_dir: impl AsRef<Path>) -> ImportResult {
    let mut result = ImportResult::default();
    if let Err(e) = import_inner(zip_path.as_ref(), output_dir.as_ref(), &mut result) {
        result.errors.push(e.to_string());
    }
    result.success = result.errors.is_empty();
    result
}

fn import_inner(zip_path: &Path, output_dir: &Path, result: &mut ImportResult) -> Result<()> {
    let mut archive = ZipArchive::new(File::open(zip_path)?)?;

    let index_raw = read_by_name(&mut archive, "index.json").map_err(|_| {
        JitenError::invalid_format("index.json", "could not find or read index.json")
    })?;
    let index: DictIndex = serde_json::from_slice(strip_bom(&index_raw))?;
    result.title = index.title.clone();

    let bundle_dir = output_dir.join(&index.title);
    fs::create_dir_all(&bundle_dir)?;
    fs::write(bundle_dir.join("info.json"), serde_json::to_vec_pretty(&index)?)?;

    if let Ok(styles) = read_by_name(&mut archive, "styles.css") {
        if !styles.is_empty() {
            fs::write(bundle_dir.join("styles.css"), &styles)?;
        }
    }

    let (term_banks, meta_banks, tag_banks, media_entries) = classify_entries(&mut archive);

    let mut blob: Vec<u8> = Vec::new();
    let mut key_offsets: hashbrown::HashMap<String, Vec<u64>> = hashbrown::HashMap::new();

    write_term_banks(
        &mut archive,
        &term_banks,
        &mut blob,
        &mut key_offsets,
        result,
    );
    write_meta_banks(
        &mut archive,
        &meta_banks,
        &mut blob,
        &mut key_offsets,
        result,
    );
    count_tag_banks(&mut archive, &tag_banks, result);

    // オフセット索引領域: キーごとに u32 count + count×u64 offset
    let mut index_positions: Vec<(String, u64)> = Vec::with_capacity(key_offsets.len());
    for (key, offsets) in &key_offsets {
        let position = blob.len() as u64;
        put_u32(&mut blob, offsets.len() as u32);
        for &offset in offsets {
            put_u64(&mut blob, offset);
        }
        index_positions.push((key.clone(), position));
    }
    fs::write(bundle_dir.join("blobs.bin"), &blob)?;

    let keys: Vec<String> = index_positions.iter().map(|(key, _)| key.clone()).collect();
    let key_index = KeyIndex::build(&keys);
    key_index.save(&bundle_dir.join("hash.mph"))?;

    let mut dense = vec![0u64; keys.len()];
    for (key, position) in &index_positions {
        let slot = key_index
            .index_of(key)
            .and_then(|h| dense.get_mut(h as usize))
            .ok_or_else(|| {
                JitenError::invalid_state("perfect hash rejected its own key", key.clone())
            })?;
        *slot = *position;
    }
    let mut offsets_bytes = Vec::with_capacity(dense.len() * 8);
    for position in &dense {
        put_u64(&mut offsets_bytes, *position);
    }
    fs::write(bundle_dir.join("offsets.bin"), &offsets_bytes)?;

    write_media(&mut archive, &media_entries, &bundle_dir, result)?;

    Ok(())
}

/// エントリ名の接頭辞でzipの中身を分類します。
fn classify_entries(
    archive: &mut ZipArchive<File>,
) -> (Vec<usize>, Vec<usize>, Vec<usize>, Vec<usize>) {
    let mut term_banks = Vec::new();
    let mut meta_banks = Vec::new();
    let mut tag_banks = Vec::new();
    let mut media = Vec::new();

    for i in 0..archive.len() {
        let Ok(entry) = archive.by_index_raw(i) else {
            continue;
        };
        if entry.is_dir() {
            continue;
        }
        let name = entry.name();
        if name == "index.json" || name == "styles.css" {
            continue;
        }
        if name.starts_with("term_meta_bank_") {
            meta_banks.push(i);
        } else if name.starts_with("term_bank_") {
            term_banks.push(i);
        } else if name.starts_with("tag_bank_") {
            tag_banks.push(i);
        } else {
            media.push(i);
        }
    }
    (term_banks, meta_banks, tag_banks, media)
}

fn read_by_name(archive: &mut ZipArchive<File>, name: &str) -> Result<Vec<u8>> {
    let mut entry = archive.by_name(name)?;
    let mut buf = Vec::with_capacity(entry.size() as usize);
    entry.read_to_end(&mut buf)?;
    Ok(buf)
}

fn read_by_index(archive: &mut ZipArchive<File>, index: usize) -> Result<(String, Vec<u8>)> {
    let mut entry = archive.by_index(index)?;
    let name = entry.name().to_string();
    let mut buf = Vec::with_capacity(entry.size() as usize);
    entry.read_to_end(&mut buf)?;
    Ok((name, buf))
}

/// 用語バンクをパース・圧縮し、レコードをblobへ追記します。
///
/// パースと圧縮はワーカーへファン・アウトしますが、同時実行数は
/// `available_parallelism`に制限し、blobへの書き込みはこのスレッドが
/// 投入順に行います。オフセット索引に書かれる位置が追記順と一致する
/// ことがこの規律の目的です。
fn write_term_banks(
    archive: &mut ZipArchive<File>,
    bank_indices: &[usize],
    blob: &mut Vec<u8>,
    key_offsets: &mut hashbrown::HashMap<String, Vec<u64>>,
    result: &mut ImportResult,
) {
    let mut banks: Vec<(String, Vec<u8>)> = Vec::with_capacity(bank_indices.len());
    for &i in bank_indices {
        match read_by_index(archive, i) {
            Ok(bank) => banks.push(bank),
            Err(e) => result.errors.push(format!("term bank #{i}: {e}")),
        }
    }

    let workers = thread::available_parallelism().map(|n| n.get()).unwrap_or(1);

    for chunk in banks.chunks(workers) {
        let parsed: Vec<Result<Vec<TermEntry>>> = thread::scope(|scope| {
            let handles: Vec<_> = chunk
                .iter()
                .map(|(_, data)| scope.spawn(move || parse_term_bank(data)))
                .collect();
            handles
                .into_iter()
                .map(|handle| {
                    handle.join().unwrap_or_else(|_| {
                        Err(JitenError::invalid_state("term bank worker panicked", ""))
                    })
                })
                .collect()
        });

        for ((name, _), bank) in chunk.iter().zip(parsed) {
            let entries = match bank {
                Ok(entries) => entries,
                Err(e) => {
                    log::warn!("skipping term bank {name}: {e}");
                    result.errors.push(format!("{name}: {e}"));
                    continue;
                }
            };
            for entry in entries {
                let position = blob.len() as u64;
                if let Err(e) = encode_term_record(blob, &entry) {
                    blob.truncate(position as usize);
                    result.errors.push(format!("{name}: {e}"));
                    continue;
                }
                key_offsets
                    .entry(entry.expression.clone())
                    .or_default()
                    .push(position);
                if entry.reading != entry.expression {
                    key_offsets.entry(entry.reading).or_default().push(position);
                }
                result.term_count += 1;
            }
        }
    }
}

/// 1つの用語バンクをパースし、語釈を圧縮します。
fn parse_term_bank(data: &[u8]) -> Result<Vec<TermEntry>> {
    let rows: Vec<TermRow> = serde_json::from_slice(strip_bom(data))?;
    let mut entries = Vec::with_capacity(rows.len());
    for row in rows {
        let (expression, reading, definition_tags, rules, _score, glossary, _sequence, term_tags) =
            row;
        let glossary_z = zstd::bulk::compress(glossary.get().as_bytes(), GLOSSARY_COMPRESSION_LEVEL)?;
        // 読みが無い用語は表記を読みとして扱う
        let reading = if reading.is_empty() {
            expression.clone()
        } else {
            reading
        };
        entries.push(TermEntry {
            expression,
            reading,
            definition_tags: definition_tags.unwrap_or_default(),
            rules,
            glossary_z,
            term_tags,
        });
    }
    Ok(entries)
}

fn encode_term_record(blob: &mut Vec<u8>, entry: &TermEntry) -> Result<()> {
    put_u8(blob, TAG_TERM);
    put_u16(blob, fit_u16(entry.expression.len(), "expression")?);
    blob.extend_from_slice(entry.expression.as_bytes());
    put_u16(blob, fit_u16(entry.reading.len(), "reading")?);
    blob.extend_from_slice(entry.reading.as_bytes());
    put_u32(blob, fit_u32(entry.glossary_z.len(), "glossary")?);
    blob.extend_from_slice(&entry.glossary_z);
    put_u8(blob, fit_u8(entry.definition_tags.len(), "definition_tags")?);
    blob.extend_from_slice(entry.definition_tags.as_bytes());
    put_u8(blob, fit_u8(entry.rules.len(), "rules")?);
    blob.extend_from_slice(entry.rules.as_bytes());
    put_u8(blob, fit_u8(entry.term_tags.len(), "term_tags")?);
    blob.extend_from_slice(entry.term_tags.as_bytes());
    Ok(())
}

fn encode_meta_record(blob: &mut Vec<u8>, expression: &str, mode: &str, data: &str) -> Result<()> {
    put_u8(blob, TAG_META);
    put_u16(blob, fit_u16(expression.len(), "expression")?);
    blob.extend_from_slice(expression.as_bytes());
    put_u8(blob, fit_u8(mode.len(), "mode")?);
    blob.extend_from_slice(mode.as_bytes());
    put_u32(blob, fit_u32(data.len(), "data")?);
    blob.extend_from_slice(data.as_bytes());
    Ok(())
}

fn fit_u8(len: usize, field: &'static str) -> Result<u8> {
    u8::try_from(len).map_err(|_| JitenError::invalid_format(field, "field too long for record"))
}

fn fit_u16(len: usize, field: &'static str) -> Result<u16> {
    u16::try_from(len).map_err(|_| JitenError::invalid_format(field, "field too long for record"))
}

fn fit_u32(len: usize, field: &'static str) -> Result<u32> {
    u32::try_from(len).map_err(|_| JitenError::invalid_format(field, "field too long for record"))
}

/// メタバンクをパースし、レコードをblobへ追記します。
fn write_meta_banks(
    archive: &mut ZipArchive<File>,
    bank_indices: &[usize],
    blob: &mut Vec<u8>,
    key_offsets: &mut hashbrown::HashMap<String, Vec<u64>>,
    result: &mut ImportResult,
) {
    for &i in bank_indices {
        let (name, data) = match read_by_index(archive, i) {
            Ok(bank) => bank,
            Err(e) => {
                result.errors.push(format!("meta bank #{i}: {e}"));
                continue;
            }
        };
        let rows: Vec<MetaRow> = match serde_json::from_slice(strip_bom(&data)) {
            Ok(rows) => rows,
            Err(e) => {
                log::warn!("skipping meta bank {name}: {e}");
                result.errors.push(format!("{name}: {e}"));
                continue;
            }
        };
        for (expression, mode, payload) in rows {
            let position = blob.len() as u64;
            if let Err(e) = encode_meta_record(blob, &expression, &mode, payload.get()) {
                blob.truncate(position as usize);
                result.errors.push(format!("{name}: {e}"));
                continue;
            }
            key_offsets.entry(expression).or_default().push(position);
            result.meta_count += 1;
        }
    }
}

/// タグバンクをパースして数えます。照合時の読み取り経路では使いません。
fn count_tag_banks(archive: &mut ZipArchive<File>, bank_indices: &[usize], result: &mut ImportResult) {
    for &i in bank_indices {
        let (name, data) = match read_by_index(archive, i) {
            Ok(bank) => bank,
            Err(e) => {
                result.errors.push(format!("tag bank #{i}: {e}"));
                continue;
            }
        };
        match serde_json::from_slice::<Vec<TagRow>>(strip_bom(&data)) {
            Ok(rows) => result.tag_count += rows.len(),
            Err(e) => {
                log::warn!("skipping tag bank {name}: {e}");
                result.errors.push(format!("{name}: {e}"));
            }
        }
    }
}

/// メディアを`media.bin`へ背中合わせに詰め、並走する索引を書きます。
///
/// 索引の1レコードは u16 パス長 + パス + u64 オフセット + u64 長さ です。
fn write_media(
    archive: &mut ZipArchive<File>,
    media_indices: &[usize],
    bundle_dir: &Path,
    result: &mut ImportResult,
) -> Result<()> {
    if media_indices.is_empty() {
        return Ok(());
    }

    let mut media = Vec::new();
    let mut media_index = Vec::new();
    for &i in media_indices {
        let (name, data) = match read_by_index(archive, i) {
            Ok(entry) => entry,
            Err(e) => {
                result.errors.push(format!("media #{i}: {e}"));
                continue;
            }
        };
        let Ok(name_len) = u16::try_from(name.len()) else {
            result.errors.push(format!("media {name}: path too long"));
            continue;
        };
        let offset = media.len() as u64;
        media.extend_from_slice(&data);
        put_u16(&mut media_index, name_len);
        media_index.extend_from_slice(name.as_bytes());
        put_u64(&mut media_index, offset);
        put_u64(&mut media_index, data.len() as u64);
        result.media_count += 1;
    }
    fs::write(bundle_dir.join("media.bin"), &media)?;
    fs::write(bundle_dir.join("media_index.bin"), &media_index)?;
    Ok(())
}
