//! 点クエリサブコマンド

use std::path::PathBuf;

use clap::Parser;
use jiten::dictionary::Reader;
use jiten::errors::JitenError;

/// クエリコマンドの引数
#[derive(Parser, Debug)]
#[clap(name = "query", about = "A program to query a bundle for one key.")]
pub struct Args {
    /// Bundle directory to query.
    bundle: PathBuf,

    /// Lookup key (expression or reading).
    word: String,
}

/// 点クエリ実行中に発生する可能性のあるエラー
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// バンドルのマウントに失敗
    #[error("failed to mount bundle: {0}")]
    Mount(#[from] JitenError),
}

/// クエリコマンドを実行する
///
/// # エラー
///
/// バンドルのマウントに失敗した場合、`QueryError`を返します。
pub fn run(args: Args) -> Result<(), QueryError> {
    let mut reader = Reader::new();
    reader.mount_term(&args.bundle)?;

    let results = reader.query(&args.word);

    println!(
        "query results for: {} length: {}",
        args.word,
        args.word.chars().count()
    );
    println!("{} entries", results.len());
    for result in &results {
        println!("---------------------------------------------------------------");
        println!("{} {} {}", result.expression, result.reading, result.rules);
        println!("{} glossary entries", result.glossaries.len());
        for glossary in &result.glossaries {
            println!("------");
            println!("{}", glossary.dict_name);
            println!("{}", glossary.glossary);
        }
    }
    Ok(())
}
