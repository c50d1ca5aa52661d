//! 活用の逆変換エンジン
//!
//! このモジュールは、活用された表層形から利用者が意図した可能性のある
//! 辞書形の集合を導出します。形態素解析器は持たず、文法状態のビット
//! マスクで制約された接尾辞書き換え規則のみで動作します。
//!
//! 各規則は「候補が`from`で終わり、現在の条件ビットマップが未制約
//! (`NONE`)か`conditions_in`と交差するなら、接尾辞を`to`に置き換えて
//! `conditions_out`の状態で続行してよい」という形をとります。変換群は
//! フラットなベクタに保持し、規則は群のインデックスを持ちます。

mod transforms;

use hashbrown::HashMap;

/// 文法カテゴリの条件ビット
///
/// 広いカテゴリは狭いカテゴリの和集合です。`V`を出力する規則は、
/// 任意の動詞サブクラスを受理する規則の前提になれます。
pub mod conditions {
    /// 制約なし
    pub const NONE: u32 = 0;
    /// 一段動詞(主要)
    pub const V1D: u32 = 1 << 0;
    /// 一段動詞(周辺的: -てる等の縮約で現れる)
    pub const V1P: u32 = 1 << 1;
    /// 五段動詞(主要)
    pub const V5D: u32 = 1 << 2;
    /// 五段動詞(特殊・す縮約)
    pub const V5SS: u32 = 1 << 3;
    /// 五段動詞(特殊・音便)
    pub const V5SP: u32 = 1 << 4;
    /// カ変動詞(来る)
    pub const VK: u32 = 1 << 5;
    /// サ変動詞(する)
    pub const VS: u32 = 1 << 6;
    /// ザ変動詞(ずる)
    pub const VZ: u32 = 1 << 7;
    /// い形容詞
    pub const ADJ_I: u32 = 1 << 8;
    /// -ます
    pub const MASU: u32 = 1 << 9;
    /// -ません
    pub const MASEN: u32 = 1 << 10;
    /// て形
    pub const TE: u32 = 1 << 11;
    /// ば形
    pub const BA: u32 = 1 << 12;
    /// く形(形容詞連用形)
    pub const KU: u32 = 1 << 13;
    /// た形
    pub const TA: u32 = 1 << 14;
    /// -ん(ぬの音変化)
    pub const NN: u32 = 1 << 15;
    /// -なさい
    pub const NASAI: u32 = 1 << 16;
    /// -ゃ(ばの縮約)
    pub const YA: u32 = 1 << 17;
    /// 一段動詞
    pub const V1: u32 = V1D | V1P;
    /// 五段動詞(特殊)
    pub const V5S: u32 = V5SS | V5SP;
    /// 五段動詞
    pub const V5: u32 = V5D | V5S;
    /// 任意の動詞
    pub const V: u32 = V1 | V5 | VK | VS | VZ;
}

/// 1つの変換群
///
/// 説明を共有する規則の束で、逆変換のトレースに1単位として現れます。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformGroup {
    /// 群の名前(例: `-ます`)
    pub name: &'static str,
    /// 文法的な説明
    pub description: &'static str,
}

/// 接尾辞書き換え規則
struct Rule {
    to: &'static str,
    conditions_in: u32,
    conditions_out: u32,
    group: usize,
}

/// 1つの逆変換候補
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deinflection {
    /// 候補テキスト(辞書形の可能性があるもの)
    pub text: String,
    /// 条件ビットマップ。未変換の入力では`0`、それ以外は最後に適用した
    /// 規則の`conditions_out`。
    pub conditions: u32,
    /// 適用した変換群のインデックス列。[`Deinflector::group`]で解決します。
    pub trace: Vec<usize>,
}

/// 規則駆動の逆変換エンジン
///
/// 規則表はUTF-8バイト列で正確な接尾辞を引くマップで、接尾辞の長さは
/// コードポイント数で測ります。
pub struct Deinflector {
    rules: HashMap<&'static str, Vec<Rule>>,
    groups: Vec<TransformGroup>,
    max_suffix_len: usize,
}

impl Deinflector {
    /// 変換規則一式を組み込んだエンジンを作成します。
    pub fn new() -> Self {
        let mut deinflector = Self {
            rules: HashMap::new(),
            groups: Vec::new(),
            max_suffix_len: 0,
        };
        transforms::install(&mut deinflector);
        deinflector
    }

    /// 変換群を登録し、そのインデックスを返します。
    pub(crate) fn add_group(&mut self, name: &'static str, description: &'static str) -> usize {
        self.groups.push(TransformGroup { name, description });
        self.groups.len() - 1
    }

    /// 規則を登録します。
    pub(crate) fn add_rule(
        &mut self,
        from: &'static str,
        to: &'static str,
        conditions_in: u32,
        conditions_out: u32,
        group: usize,
    ) {
        self.max_suffix_len = self.max_suffix_len.max(from.chars().count());
        self.rules.entry(from).or_default().push(Rule {
            to,
            conditions_in,
            conditions_out,
            group,
        });
    }

    /// 表層形を辞書形候補へ展開します。
    ///
    /// 結果は常に空ではなく、先頭は恒等の三つ組
    /// `(入力, 0, [])`です。挿入順で安定しており、条件やトレースの異なる
    /// 同一テキストが複数含まれることがあります。
    ///
    /// # 引数
    ///
    /// * `text` - 活用された表層形
    ///
    /// # 戻り値
    ///
    /// 逆変換候補のリスト
    pub fn deinflect(&self, text: &str) -> Vec<Deinflection> {
        let mut results = Vec::new();
        let mut trace = Vec::new();
        self.expand(text, conditions::NONE, &mut trace, &mut results);
        results
    }

    fn expand(
        &self,
        text: &str,
        current: u32,
        trace: &mut Vec<usize>,
        results: &mut Vec<Deinflection>,
    ) {
        results.push(Deinflection {
            text: text.to_string(),
            conditions: current,
            trace: trace.clone(),
        });
        if text.is_empty() {
            return;
        }

        let char_starts: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        let text_len = char_starts.len();

        for suffix_len in (2..=self.max_suffix_len.min(text_len)).rev() {
            let boundary = char_starts[text_len - suffix_len];
            let Some(rules) = self.rules.get(&text[boundary..]) else {
                continue;
            };

            let prefix = &text[..boundary];
            for rule in rules {
                if current != conditions::NONE && current & rule.conditions_in == 0 {
                    continue;
                }

                let mut transformed = String::with_capacity(prefix.len() + rule.to.len());
                transformed.push_str(prefix);
                transformed.push_str(rule.to);

                trace.push(rule.group);
                self.expand(&transformed, rule.conditions_out, trace, results);
                trace.pop();
            }
        }
    }

    /// トレースのインデックスを変換群に解決します。
    #[inline(always)]
    pub fn group(&self, id: usize) -> &TransformGroup {
        &self.groups[id]
    }

    /// 登録されたすべての変換群を返します。
    #[inline(always)]
    pub fn groups(&self) -> &[TransformGroup] {
        &self.groups
    }

    /// 空白区切りの品詞タグ文字列を条件ビットマップへ変換します。
    ///
    /// タグは前方一致で解釈されます: `v*`は`V`、`v1*`は`V1`、`v5*`は
    /// `V5`を含み、`vk`/`vs`/`vz`/`adj-i`は対応するビットになります。
    ///
    /// # 引数
    ///
    /// * `tags` - 品詞タグ文字列(例: `"v5u vt"`)
    pub fn conditions_for_tags(tags: &str) -> u32 {
        use conditions::*;

        let mut result = NONE;
        for tag in tags.split_whitespace() {
            if tag.starts_with('v') {
                result |= V;
            }
            if tag.starts_with("v1") {
                result |= V1;
            }
            if tag.starts_with("v5") {
                result |= V5;
            }
            match tag {
                "vk" => result |= VK,
                "vs" => result |= VS,
                "vz" => result |= VZ,
                "adj-i" => result |= ADJ_I,
                _ => {}
            }
        }
        result
    }
}

impl Default for Deinflector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::conditions::*;
    use super::*;

    fn trace_names<'a>(d: &'a Deinflector, deinflection: &Deinflection) -> Vec<&'a str> {
        deinflection
            .trace
            .iter()
            .map(|&id| d.group(id).name)
            .collect()
    }

    #[test]
    fn test_identity_first() {
        let d = Deinflector::new();
        for text in ["食べる", "ねこ", "", "abc"] {
            let results = d.deinflect(text);
            assert_eq!(results[0].text, text);
            assert_eq!(results[0].conditions, NONE);
            assert!(results[0].trace.is_empty());
        }
    }

    #[test]
    fn test_taberaremashita() {
        let d = Deinflector::new();
        let results = d.deinflect("食べられました");

        let taberu = results
            .iter()
            .find(|r| r.text == "食べる" && r.conditions & V1 != 0)
            .expect("食べる with a V1 condition");
        let names = trace_names(&d, taberu);
        assert!(names.contains(&"-ます"));
        assert!(names.contains(&"-た"));
        assert!(names
            .iter()
            .any(|n| n.contains("potential") || n.contains("passive")));
    }

    #[test]
    fn test_takakunai() {
        let d = Deinflector::new();
        let results = d.deinflect("高くない");

        let takai = results
            .iter()
            .find(|r| r.text == "高い" && r.conditions & ADJ_I != 0)
            .expect("高い with adj-i condition");
        assert!(!takai.trace.is_empty());
    }

    #[test]
    fn test_trace_soundness() {
        // すべての非恒等候補は、トレースの各群のいずれかの規則を順に
        // 適用して再現できる
        let d = Deinflector::new();
        for input in ["食べました", "行かなかった", "高くなければ"] {
            for result in d.deinflect(input) {
                if result.trace.is_empty() {
                    continue;
                }
                assert!(replayable(&d, input, &result), "{input} -> {result:?}");
            }
        }
    }

    fn replayable(d: &Deinflector, input: &str, target: &Deinflection) -> bool {
        // トレースの各群について、その群に属する規則を1つ選んで順に
        // 適用する経路が存在するかを幅優先で確かめる
        let mut frontier = vec![(input.to_string(), NONE)];
        for &group in &target.trace {
            let mut next = Vec::new();
            for (text, cond) in &frontier {
                for (from, rules) in &d.rules {
                    if !text.ends_with(*from) {
                        continue;
                    }
                    for rule in rules {
                        if rule.group != group {
                            continue;
                        }
                        if *cond != NONE && cond & rule.conditions_in == 0 {
                            continue;
                        }
                        let stem = &text[..text.len() - from.len()];
                        next.push((format!("{stem}{}", rule.to), rule.conditions_out));
                    }
                }
            }
            frontier = next;
        }
        frontier
            .iter()
            .any(|(text, cond)| *text == target.text && *cond == target.conditions)
    }

    #[test]
    fn test_masen_chain() {
        let d = Deinflector::new();
        let results = d.deinflect("行きません");
        assert!(results
            .iter()
            .any(|r| r.text == "行く" && r.conditions & V5 != 0));
    }

    #[test]
    fn test_conditions_for_tags() {
        assert_eq!(Deinflector::conditions_for_tags("v1"), V | V1);
        assert_eq!(Deinflector::conditions_for_tags("v5u vt"), V | V5);
        assert_eq!(Deinflector::conditions_for_tags("adj-i"), ADJ_I);
        assert_eq!(Deinflector::conditions_for_tags("n"), NONE);
        assert_eq!(Deinflector::conditions_for_tags(""), NONE);
        assert_eq!(Deinflector::conditions_for_tags("vk"), V | VK);
    }

    #[test]
    fn test_duplicate_surfaces_kept() {
        // 同じ表層形を生む規則が複数ある場合、conditions_outの異なる
        // エントリは別々に保持される
        let d = Deinflector::new();
        let results = d.deinflect("見まい");
        let mi: Vec<_> = results.iter().filter(|r| r.text == "見る").collect();
        assert!(!mi.is_empty());
    }
}
