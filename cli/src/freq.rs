//! 頻度クエリサブコマンド

use std::path::PathBuf;

use clap::Parser;
use jiten::dictionary::Reader;
use jiten::errors::JitenError;

/// 頻度コマンドの引数
#[derive(Parser, Debug)]
#[clap(
    name = "freq",
    about = "A program to print frequency metadata for one headword."
)]
pub struct Args {
    /// Frequency dictionary bundle.
    bundle: PathBuf,

    /// Headword expression.
    word: String,

    /// Headword reading.
    reading: String,
}

/// 頻度クエリ実行中に発生する可能性のあるエラー
#[derive(Debug, thiserror::Error)]
pub enum FreqError {
    /// バンドルのマウントに失敗
    #[error("failed to mount bundle: {0}")]
    Mount(#[from] JitenError),
}

/// 頻度コマンドを実行する
///
/// # エラー
///
/// バンドルのマウントに失敗した場合、`FreqError`を返します。
pub fn run(args: Args) -> Result<(), FreqError> {
    let mut reader = Reader::new();
    reader.mount_freq(&args.bundle)?;

    let entries = reader.frequency_for(&args.word, &args.reading);

    println!("frequencies for: {} [{}]", args.word, args.reading);
    if entries.is_empty() {
        println!("no frequency data");
        return Ok(());
    }
    for entry in &entries {
        let values: Vec<String> = entry
            .frequencies
            .iter()
            .map(|f| format!("{} ({})", f.display_value, f.value))
            .collect();
        println!("{}: {}", entry.dict_name, values.join(", "));
    }
    Ok(())
}
