//! # jiten
//!
//! jitenは、オフラインで動作する日本語辞書の検索エンジンです。
//!
//! ## 概要
//!
//! このライブラリは、利用者が与えたテキスト断片(例えばマウスカーソル下の
//! 文)に対して、その接頭辞に見出し語が一致する辞書エントリを返します。
//! 一致の前に日本語の活用を逆変換し、表記のゆれを正規化します。
//! 見出し語には頻度とピッチアクセントのメタデータも付与されます。
//!
//! ## 主な構成要素
//!
//! - **辞書ストア**: ベンダー形式のzip JSONアーカイブをコンパクトで
//!   不変のバンドルに変換するインポータ([`dictionary::importer`])と、
//!   メモリマップI/Oと最小完全ハッシュで点クエリに答えるリーダー
//!   ([`dictionary::Reader`])
//! - **逆変換エンジン**: 活用された表層形を、その逆変換が有効となる
//!   文法的前提条件付きで辞書形候補へ展開する規則駆動のエンジン
//!   ([`deinflect::Deinflector`])
//! - **前処理器と照合器**: 表記ゆれのデカルト展開([`textproc`])と、
//!   接頭辞走査・フィルタ・重複排除・ランク付けを統合した照合器
//!   ([`lookup::Lookup`])
//!
//! ## 使用例
//!
//! ```no_run
//! # fn main() -> jiten::errors::Result<()> {
//! use jiten::deinflect::Deinflector;
//! use jiten::dictionary::Reader;
//! use jiten::lookup::Lookup;
//!
//! let mut reader = Reader::new();
//! reader.mount_term("bundles/JMdict")?;
//!
//! let deinflector = Deinflector::new();
//! let lookup = Lookup::new(&reader, &deinflector);
//!
//! for result in lookup.lookup("食べられました", 16, 16) {
//!     println!("{} [{}]", result.term.expression, result.term.reading);
//! }
//! # Ok(())
//! # }
//! ```

/// リトルエンディアンのバイト入出力ヘルパー
mod bytes;

/// 活用の逆変換エンジン
pub mod deinflect;

/// 辞書バンドルのインポートと読み取り
pub mod dictionary;

/// エラー型の定義
pub mod errors;

/// 最小完全ハッシュのアダプタ
mod hash;

/// 照合のコーディネータ
pub mod lookup;

/// クエリ断片の表記ゆれ展開
pub mod textproc;

pub use crate::deinflect::{Deinflection, Deinflector};
pub use crate::dictionary::importer::ImportResult;
pub use crate::dictionary::{Reader, TermResult};
pub use crate::errors::{JitenError, Result};
pub use crate::lookup::{Lookup, LookupResult};
pub use crate::textproc::TextVariant;
