//! 最小完全ハッシュのアダプタ
//!
//! このモジュールは、[`boomphf`]の最小完全ハッシュ関数を辞書バンドルの
//! キー索引として使うための薄いラッパーを提供します。ハッシュは構築時の
//! キー集合上でのみ定義されます。集合外のキーに対する評価は任意の値
//! (または`None`)を返すため、呼び出し側は必ず格納された表記・読みとの
//! 比較で候補を検証しなければなりません。

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use boomphf::Mphf;

use crate::errors::Result;

/// boomphf推奨のロードファクタ。大きいほど構築が速く、表が少し大きくなります。
const GAMMA: f64 = 1.7;

/// キー集合上の最小完全ハッシュ
///
/// キーを`[0, |keys|)`の密なインデックスへ写像します。
/// `offsets.bin`の添字はこのインデックスです。
/// キー集合が空の辞書では内部のハッシュを持たず、すべての問い合わせが
/// `None`になります。
pub(crate) struct KeyIndex {
    mphf: Option<Mphf<String>>,
}

impl KeyIndex {
    /// キー集合から新しいインデックスを構築します。
    ///
    /// # 引数
    ///
    /// * `keys` - 重複のないキーの集合
    pub(crate) fn build(keys: &[String]) -> Self {
        Self {
            mphf: (!keys.is_empty()).then(|| Mphf::new(GAMMA, keys)),
        }
    }

    /// キーを密なインデックスへ写像します。
    ///
    /// 構築時の集合に含まれないキーは`None`または任意のインデックスに
    /// なり得ます。membershipテストは存在しません。
    #[inline(always)]
    pub(crate) fn index_of(&self, key: &str) -> Option<u64> {
        self.mphf.as_ref()?.try_hash(key)
    }

    /// インデックスをファイルへシリアライズします。
    ///
    /// # エラー
    ///
    /// ファイル作成またはシリアライゼーションに失敗した場合にエラーを返します。
    pub(crate) fn save(&self, path: &Path) -> Result<()> {
        let wtr = BufWriter::new(File::create(path)?);
        bincode::serialize_into(wtr, &self.mphf)?;
        Ok(())
    }

    /// ファイルからインデックスを復元します。
    ///
    /// # エラー
    ///
    /// ファイルが存在しない、または内容が不正な場合にエラーを返します。
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let rdr = BufReader::new(File::open(path)?);
        let mphf = bincode::deserialize_from(rdr)?;
        Ok(Self { mphf })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dense_codomain() {
        let keys: Vec<String> = ["日本", "にほん", "食べる", "たべる"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let index = KeyIndex::build(&keys);

        let mut seen = vec![false; keys.len()];
        for key in &keys {
            let h = index.index_of(key).unwrap() as usize;
            assert!(h < keys.len());
            assert!(!seen[h]);
            seen[h] = true;
        }
    }

    #[test]
    fn test_empty_key_set() {
        let index = KeyIndex::build(&[]);
        assert_eq!(index.index_of("日本"), None);
    }

    #[test]
    fn test_save_load() {
        let keys: Vec<String> = ["高い", "たかい"].iter().map(|s| s.to_string()).collect();
        let index = KeyIndex::build(&keys);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hash.mph");
        index.save(&path).unwrap();

        let reloaded = KeyIndex::load(&path).unwrap();
        for key in &keys {
            assert_eq!(index.index_of(key), reloaded.index_of(key));
        }
    }
}
