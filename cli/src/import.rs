//! インポートサブコマンド
//!
//! 辞書zipアーカイブをバンドルディレクトリへ変換します。

use std::path::PathBuf;

use clap::Parser;

/// インポートコマンドの引数
#[derive(Parser, Debug)]
#[clap(name = "import", about = "A program to import a dictionary archive.")]
pub struct Args {
    /// Dictionary zip archive to import.
    zip: PathBuf,

    /// Directory the bundle is written into.
    ///
    /// Defaults to the directory containing the archive.
    #[clap(short = 'o', long)]
    out_dir: Option<PathBuf>,
}

/// インポート処理中に発生する可能性のあるエラー
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// 1つ以上のエラーでインポートが失敗
    ///
    /// 個々の理由は標準エラー出力に列挙されます。
    #[error("the dictionary could not be imported")]
    Failed,
}

/// インポートコマンドを実行する
///
/// # 引数
///
/// * `args` - インポートコマンドの引数
///
/// # エラー
///
/// アーカイブが読めない、またはバンクの変換に失敗した場合、
/// `ImportError`を返します。
pub fn run(args: Args) -> Result<(), ImportError> {
    let out_dir = args.out_dir.clone().unwrap_or_else(|| {
        let parent = args.zip.parent().map(PathBuf::from).unwrap_or_default();
        if parent.as_os_str().is_empty() {
            PathBuf::from(".")
        } else {
            parent
        }
    });

    let result = jiten::dictionary::importer::import(&args.zip, &out_dir);

    if !result.success {
        eprintln!("could not import dictionary:");
        for error in &result.errors {
            eprintln!("  {error}");
        }
        return Err(ImportError::Failed);
    }

    println!("title: {}", result.title);
    println!("term_count: {}", result.term_count);
    println!("meta_count: {}", result.meta_count);
    println!("tag_count: {}", result.tag_count);
    println!("media_count: {}", result.media_count);
    Ok(())
}
