//! jiten CLIのメインエントリーポイント
//!
//! このモジュールは、辞書エンジンの各機能を試すためのサブコマンドを
//! 提供します。アーカイブのインポート、逆変換と前処理の確認、
//! バンドルへの点クエリ、複数辞書を跨ぐ照合など、コアの操作を薄い
//! プリンタとして束ねたCLIツールです。

mod deinflect;
mod freq;
mod import;
mod lookup;
mod preprocess;
mod query;

use clap::Parser;
use thiserror::Error;

use crate::{freq::FreqError, import::ImportError, lookup::LookupError, query::QueryError};

/// コマンドライン引数の構造体
///
/// `clap`を使用してコマンドライン引数をパースします。
#[derive(Parser, Debug)]
#[clap(name = "jiten-cli", version)]
struct Cli {
    /// 実行するサブコマンド
    #[clap(subcommand)]
    command: Command,
}

/// 利用可能なサブコマンド
#[derive(Parser, Debug)]
enum Command {
    /// 辞書zipアーカイブをバンドルへインポートします
    ///
    /// index.jsonとバンクファイルをパースし、照合時にメモリマップで
    /// 読めるバンドルディレクトリを出力します。
    Import(import::Args),

    /// 活用形の逆変換候補を表示します
    ///
    /// 表層形から導かれるすべての辞書形候補を、条件ビットと変換の
    /// トレース付きで出力します。
    Deinflect(deinflect::Args),

    /// 表記ゆれの展開結果を表示します
    ///
    /// 前処理器が列挙する表記候補をステップ数付きで出力します。
    Preprocess(preprocess::Args),

    /// 1つのバンドルに見出しキーを問い合わせます
    ///
    /// 逆変換や前処理を介さず、リーダーの点クエリを直接実行します。
    Query(query::Args),

    /// 複数のバンドルを跨いでテキスト断片を照合します
    ///
    /// 接頭辞走査・表記ゆれ展開・逆変換を統合した完全な照合経路です。
    Lookup(lookup::Args),

    /// 1つの見出し・読みの組の頻度メタデータを表示します
    Freq(freq::Args),
}

/// CLIの実行中に発生する可能性のあるエラー
///
/// 各サブコマンドで発生したエラーをラップします。
#[derive(Debug, Error)]
pub enum CliError {
    /// インポート実行中のエラー
    #[error(transparent)]
    Import(#[from] ImportError),
    /// 点クエリ実行中のエラー
    #[error(transparent)]
    Query(#[from] QueryError),
    /// 照合実行中のエラー
    #[error(transparent)]
    Lookup(#[from] LookupError),
    /// 頻度クエリ実行中のエラー
    #[error(transparent)]
    Freq(#[from] FreqError),
}

/// メイン関数
///
/// コマンドライン引数をパースし、指定されたサブコマンドを実行します。
///
/// # エラー
///
/// 各サブコマンドの実行中にエラーが発生した場合、そのエラーが返されます。
fn main() -> Result<(), CliError> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Import(args) => Ok(import::run(args)?),
        Command::Deinflect(args) => {
            deinflect::run(args);
            Ok(())
        }
        Command::Preprocess(args) => {
            preprocess::run(args);
            Ok(())
        }
        Command::Query(args) => Ok(query::run(args)?),
        Command::Lookup(args) => Ok(lookup::run(args)?),
        Command::Freq(args) => Ok(freq::run(args)?),
    }
}
