//! 照合のコーディネータ
//!
//! 入力断片の先頭から縮んでいく各接頭辞について、前処理器で表記候補を
//! 列挙し、各候補を逆変換エンジンで辞書形候補へ展開し、各辞書形を
//! リーダーで検索します。生き残った候補は(表記, 読み)で重複排除され、
//! ランク付け・切り詰めの後に返されます。

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::deinflect::Deinflector;
use crate::dictionary::{Reader, TermResult};
use crate::textproc;

/// 1件の照合結果
#[derive(Debug, Clone)]
pub struct LookupResult {
    /// 一致した入力の接頭辞(表記ゆれ展開前の原文)
    pub matched: String,
    /// 実際に辞書へ問い合わせた辞書形
    pub deinflected: String,
    /// 接頭辞から表記候補に至るまでの前処理ステップ数
    pub preprocessor_steps: u32,
    /// 逆変換の変換群インデックス列
    pub trace: Vec<usize>,
    /// 照合された用語
    pub term: TermResult,
}

/// 接頭辞走査・展開・ランク付けを束ねる照合器
pub struct Lookup<'a> {
    reader: &'a Reader,
    deinflector: &'a Deinflector,
}

impl<'a> Lookup<'a> {
    /// リーダーと逆変換エンジンから照合器を作成します。
    pub fn new(reader: &'a Reader, deinflector: &'a Deinflector) -> Self {
        Self {
            reader,
            deinflector,
        }
    }

    /// テキスト断片を照合します。
    ///
    /// 入力の先頭`scan_length`コードポイントまでの各接頭辞を長い順に
    /// 調べます。同じ(表記, 読み)が複数の経路で得られた場合は、一致した
    /// 接頭辞がコードポイント数で最長のものを保持します。結果は
    /// (a) 一致が長い、(b) 前処理ステップが少ない、(c) トレースが短い、
    /// (d) 頻度辞書のマウント順での最小頻度、の辞書式順で並びます。
    ///
    /// # 引数
    ///
    /// * `text` - 照合するUTF-8断片
    /// * `max_results` - 返す結果の最大数。`0`は空リストになります。
    /// * `scan_length` - 調べる先頭コードポイント数の上限。`0`は空リストになります。
    ///
    /// # 戻り値
    ///
    /// ランク順に並んだ照合結果(高々`max_results`件)
    pub fn lookup(&self, text: &str, max_results: usize, scan_length: usize) -> Vec<LookupResult> {
        if max_results == 0 || scan_length == 0 {
            return Vec::new();
        }

        let char_starts: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        let text_len = char_starts.len();

        let mut result_map: BTreeMap<(String, String), LookupResult> = BTreeMap::new();

        for prefix_chars in (1..=scan_length.min(text_len)).rev() {
            let prefix_end = if prefix_chars == text_len {
                text.len()
            } else {
                char_starts[prefix_chars]
            };
            let prefix = &text[..prefix_end];

            for variant in textproc::process(prefix) {
                for deinflection in self.deinflector.deinflect(&variant.text) {
                    for term in self.reader.query(&deinflection.text) {
                        if !compatible(&term, deinflection.conditions) {
                            continue;
                        }

                        let key = (term.expression.clone(), term.reading.clone());
                        let candidate = LookupResult {
                            matched: prefix.to_string(),
                            deinflected: deinflection.text.clone(),
                            preprocessor_steps: variant.steps,
                            trace: deinflection.trace.clone(),
                            term,
                        };
                        match result_map.get_mut(&key) {
                            Some(existing) => {
                                // 最長の一致のみ残す。同長なら先着を保持する。
                                if prefix_chars > existing.matched.chars().count() {
                                    *existing = candidate;
                                }
                            }
                            None => {
                                result_map.insert(key, candidate);
                            }
                        }
                    }
                }
            }
        }

        let freq_order: Vec<String> = self
            .reader
            .freq_dict_names()
            .iter()
            .map(|name| name.to_string())
            .collect();

        let mut results: Vec<LookupResult> = result_map.into_values().collect();
        if results.len() > max_results {
            results.select_nth_unstable_by(max_results, |a, b| rank(a, b, &freq_order));
            results.truncate(max_results);
        }
        results.sort_by(|a, b| rank(a, b, &freq_order));
        results
    }
}

/// 文法的な適合性の判定
///
/// 逆変換が条件を要求しているのに辞書側が品詞タグを宣言していない
/// 場合は通します。逆変換に対応していない辞書を落とさないためです。
/// 辞書がタグを宣言している場合のみ通常の交差判定を行います。
fn compatible(term: &TermResult, conditions: u32) -> bool {
    if conditions == 0 {
        return true;
    }
    let dict_conditions = Deinflector::conditions_for_tags(&term.rules);
    dict_conditions == 0 || dict_conditions & conditions != 0
}

fn rank(a: &LookupResult, b: &LookupResult, freq_order: &[String]) -> Ordering {
    let matched_a = a.matched.chars().count();
    let matched_b = b.matched.chars().count();
    if matched_a != matched_b {
        return matched_b.cmp(&matched_a);
    }

    if a.preprocessor_steps != b.preprocessor_steps {
        return a.preprocessor_steps.cmp(&b.preprocessor_steps);
    }

    if a.trace.len() != b.trace.len() {
        return a.trace.len().cmp(&b.trace.len());
    }

    for dict_name in freq_order {
        let freq_a = min_frequency(&a.term, dict_name);
        let freq_b = min_frequency(&b.term, dict_name);
        if freq_a != freq_b {
            return freq_a.cmp(&freq_b);
        }
    }
    Ordering::Equal
}

/// 指定の頻度辞書における最小の非負頻度値。辞書に無ければ最大値です。
fn min_frequency(term: &TermResult, dict_name: &str) -> i64 {
    term.frequencies
        .iter()
        .find(|entry| entry.dict_name == dict_name)
        .map(|entry| {
            entry
                .frequencies
                .iter()
                .filter(|f| f.value >= 0)
                .map(|f| f.value)
                .min()
                .unwrap_or(i64::MAX)
        })
        .unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::io::Write;

    use crate::dictionary::importer;
    use crate::dictionary::Reader;

    use super::*;

    fn build_zip(files: &[(&str, &str)]) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
        let options = zip::write::SimpleFileOptions::default();
        for (name, data) in files {
            writer.start_file(*name, options).unwrap();
            writer.write_all(data.as_bytes()).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    fn import_zip(dir: &std::path::Path, files: &[(&str, &str)]) -> std::path::PathBuf {
        let zip_path = dir.join("dict.zip");
        fs::write(&zip_path, build_zip(files)).unwrap();
        let result = importer::import(&zip_path, dir);
        assert!(result.success, "{:?}", result.errors);
        dir.join(&result.title)
    }

    #[test]
    fn test_nihon_scenario() {
        let dir = tempfile::tempdir().unwrap();
        let bundle = import_zip(
            dir.path(),
            &[
                ("index.json", r#"{"title": "testdict", "revision": "1", "format": 3}"#),
                (
                    "term_bank_1.json",
                    r#"[["日本", "にほん", "", "", 0, "Japan", 1, ""]]"#,
                ),
            ],
        );

        let mut reader = Reader::new();
        reader.mount_term(&bundle).unwrap();
        let deinflector = Deinflector::new();
        let lookup = Lookup::new(&reader, &deinflector);

        let results = lookup.lookup("日本では", 1, 8);
        assert_eq!(results.len(), 1);
        let result = &results[0];
        assert_eq!(result.term.expression, "日本");
        assert_eq!(result.term.reading, "にほん");
        assert_eq!(result.matched.chars().count(), 2);
        assert_eq!(result.term.glossaries[0].glossary, "\"Japan\"");
        assert_eq!(result.term.glossaries[0].dict_name, "testdict");
    }

    #[test]
    fn test_unknown_key_returns_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let bundle = import_zip(
            dir.path(),
            &[
                ("index.json", r#"{"title": "testdict"}"#),
                (
                    "term_bank_1.json",
                    r#"[["日本", "にほん", "", "", 0, "Japan", 1, ""]]"#,
                ),
            ],
        );

        let mut reader = Reader::new();
        reader.mount_term(&bundle).unwrap();
        assert!(reader.query("まったく無関係な語").is_empty());
        assert!(reader.query("x").is_empty());
    }

    #[test]
    fn test_deinflected_lookup_keeps_longest_match() {
        let dir = tempfile::tempdir().unwrap();
        let bundle = import_zip(
            dir.path(),
            &[
                ("index.json", r#"{"title": "testdict"}"#),
                (
                    "term_bank_1.json",
                    r#"[["ます", "ます", "", "", 0, "polite suffix", 1, ""]]"#,
                ),
            ],
        );

        let mut reader = Reader::new();
        reader.mount_term(&bundle).unwrap();
        let deinflector = Deinflector::new();
        let lookup = Lookup::new(&reader, &deinflector);

        // 接頭辞「ました」と「ましたら」の両方が「ます」に至るが、
        // 最長の一致だけが残る
        let results = lookup.lookup("ましたら", 8, 8);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].matched, "ましたら");
        assert_eq!(results[0].deinflected, "ます");
        assert!(!results[0].trace.is_empty());
    }

    #[test]
    fn test_pos_filter_drops_mismatched_terms() {
        let dir = tempfile::tempdir().unwrap();
        let bundle = import_zip(
            dir.path(),
            &[
                ("index.json", r#"{"title": "testdict"}"#),
                (
                    "term_bank_1.json",
                    r#"[["高い", "たかい", "", "adj-i", 0, "tall", 1, ""],
                       ["高い", "だかい", "", "vk", 0, "(bogus verb)", 2, ""]]"#,
                ),
            ],
        );

        let mut reader = Reader::new();
        reader.mount_term(&bundle).unwrap();
        let deinflector = Deinflector::new();
        let lookup = Lookup::new(&reader, &deinflector);

        let results = lookup.lookup("高くない", 8, 8);
        // 形容詞のエントリだけが「高くない」全体に一致する。動詞エントリは
        // 条件が交差しないので落ちる。
        let full = results
            .iter()
            .filter(|r| r.matched == "高くない")
            .collect::<Vec<_>>();
        assert_eq!(full.len(), 1);
        assert_eq!(full[0].term.reading, "たかい");
    }

    #[test]
    fn test_untagged_dictionary_passes_filter() {
        let dir = tempfile::tempdir().unwrap();
        let bundle = import_zip(
            dir.path(),
            &[
                ("index.json", r#"{"title": "testdict"}"#),
                (
                    "term_bank_1.json",
                    r#"[["食べる", "たべる", "", "", 0, "to eat", 1, ""]]"#,
                ),
            ],
        );

        let mut reader = Reader::new();
        reader.mount_term(&bundle).unwrap();
        let deinflector = Deinflector::new();
        let lookup = Lookup::new(&reader, &deinflector);

        // 品詞タグを宣言しない辞書は、逆変換が条件を要求しても通る
        let results = lookup.lookup("食べれば", 8, 8);
        assert!(results.iter().any(|r| r.deinflected == "食べる"));
    }

    #[test]
    fn test_preprocessor_steps_recorded() {
        let dir = tempfile::tempdir().unwrap();
        let bundle = import_zip(
            dir.path(),
            &[
                ("index.json", r#"{"title": "testdict"}"#),
                (
                    "term_bank_1.json",
                    r#"[["ガキ", "がき", "", "", 0, "brat", 1, ""]]"#,
                ),
            ],
        );

        let mut reader = Reader::new();
        reader.mount_term(&bundle).unwrap();
        let deinflector = Deinflector::new();
        let lookup = Lookup::new(&reader, &deinflector);

        let results = lookup.lookup("ｶﾞｷ", 4, 8);
        assert!(!results.is_empty());
        assert_eq!(results[0].term.expression, "ガキ");
        assert_eq!(results[0].preprocessor_steps, 1);
    }

    #[test]
    fn test_frequency_rank_follows_mount_order() {
        let dir = tempfile::tempdir().unwrap();
        let term_bundle = import_zip(
            dir.path(),
            &[
                ("index.json", r#"{"title": "terms"}"#),
                (
                    "term_bank_1.json",
                    r#"[["犬", "いぬ", "", "n", 0, "dog", 1, ""],
                       ["犬", "けん", "", "n", 0, "dog (on-reading)", 2, ""]]"#,
                ),
            ],
        );
        let freq_dir = tempfile::tempdir().unwrap();
        let freq_bundle = import_zip(
            freq_dir.path(),
            &[
                ("index.json", r#"{"title": "freqs"}"#),
                (
                    "term_meta_bank_1.json",
                    r#"[["犬", "freq", {"reading": "いぬ", "frequency": 1}],
                       ["犬", "freq", {"reading": "けん", "frequency": 900}]]"#,
                ),
            ],
        );

        let mut reader = Reader::new();
        reader.mount_term(&term_bundle).unwrap();
        reader.mount_freq(&freq_bundle).unwrap();
        let deinflector = Deinflector::new();
        let lookup = Lookup::new(&reader, &deinflector);

        let results = lookup.lookup("犬", 8, 8);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].term.reading, "いぬ");
        assert_eq!(results[1].term.reading, "けん");

        let freqs = &results[0].term.frequencies;
        assert_eq!(freqs.len(), 1);
        assert_eq!(freqs[0].dict_name, "freqs");
        assert_eq!(freqs[0].frequencies[0].value, 1);
    }

    #[test]
    fn test_query_by_reading() {
        let dir = tempfile::tempdir().unwrap();
        let bundle = import_zip(
            dir.path(),
            &[
                ("index.json", r#"{"title": "testdict"}"#),
                (
                    "term_bank_1.json",
                    r#"[["日本", "にほん", "", "", 0, "Japan", 1, ""]]"#,
                ),
            ],
        );

        let mut reader = Reader::new();
        reader.mount_term(&bundle).unwrap();

        // 表記と読みのどちらでも同じレコードに到達する
        let by_expression = reader.query("日本");
        let by_reading = reader.query("にほん");
        assert_eq!(by_expression.len(), 1);
        assert_eq!(by_expression[0].expression, by_reading[0].expression);
        assert_eq!(by_expression[0].reading, by_reading[0].reading);
    }

    #[test]
    fn test_empty_reading_falls_back_to_expression() {
        let dir = tempfile::tempdir().unwrap();
        let bundle = import_zip(
            dir.path(),
            &[
                ("index.json", r#"{"title": "testdict"}"#),
                (
                    "term_bank_1.json",
                    r#"[["ねこ", "", "", "", 0, "cat", 1, ""]]"#,
                ),
            ],
        );

        let mut reader = Reader::new();
        reader.mount_term(&bundle).unwrap();

        let results = reader.query("ねこ");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].reading, "ねこ");
    }

    #[test]
    fn test_truncation() {
        let dir = tempfile::tempdir().unwrap();
        let bundle = import_zip(
            dir.path(),
            &[
                ("index.json", r#"{"title": "testdict"}"#),
                (
                    "term_bank_1.json",
                    r#"[["犬", "いぬ", "", "n", 0, "dog", 1, ""],
                       ["犬", "けん", "", "n", 0, "dog (on-reading)", 2, ""]]"#,
                ),
            ],
        );

        let mut reader = Reader::new();
        reader.mount_term(&bundle).unwrap();
        let deinflector = Deinflector::new();
        let lookup = Lookup::new(&reader, &deinflector);

        assert_eq!(lookup.lookup("犬", 1, 8).len(), 1);
        assert!(lookup.lookup("犬", 0, 8).is_empty());
        assert!(lookup.lookup("犬", 8, 0).is_empty());
    }
}
