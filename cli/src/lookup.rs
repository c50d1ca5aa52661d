//! 照合サブコマンド
//!
//! 接頭辞走査・表記ゆれ展開・逆変換を統合した完全な照合経路を実行します。

use std::path::PathBuf;

use clap::Parser;
use jiten::deinflect::Deinflector;
use jiten::dictionary::Reader;
use jiten::errors::JitenError;
use jiten::lookup::Lookup;

/// 照合コマンドの引数
#[derive(Parser, Debug)]
#[clap(name = "lookup", about = "A program to look up a text fragment.")]
pub struct Args {
    /// Text fragment to look up.
    word: String,

    /// Term dictionary bundle. May be repeated; order is priority order.
    #[clap(short = 't', long = "term", required = true)]
    term_bundles: Vec<PathBuf>,

    /// Frequency dictionary bundle. May be repeated; order is the ranking
    /// tiebreaker order.
    #[clap(short = 'f', long = "freq")]
    freq_bundles: Vec<PathBuf>,

    /// Pitch-accent dictionary bundle. May be repeated.
    #[clap(short = 'p', long = "pitch")]
    pitch_bundles: Vec<PathBuf>,

    /// Maximum number of results.
    #[clap(short = 'm', long, default_value_t = 8)]
    max_results: usize,

    /// Maximum number of leading codepoints to scan.
    #[clap(short = 's', long, default_value_t = 16)]
    scan_length: usize,
}

/// 照合実行中に発生する可能性のあるエラー
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// バンドルのマウントに失敗
    #[error("failed to mount bundle: {0}")]
    Mount(#[from] JitenError),
}

/// 照合コマンドを実行する
///
/// # エラー
///
/// いずれかのバンドルのマウントに失敗した場合、`LookupError`を返します。
pub fn run(args: Args) -> Result<(), LookupError> {
    let mut reader = Reader::new();
    for bundle in &args.term_bundles {
        reader.mount_term(bundle)?;
    }
    for bundle in &args.freq_bundles {
        reader.mount_freq(bundle)?;
    }
    for bundle in &args.pitch_bundles {
        reader.mount_pitch(bundle)?;
    }

    let deinflector = Deinflector::new();
    let lookup = Lookup::new(&reader, &deinflector);
    let results = lookup.lookup(&args.word, args.max_results, args.scan_length);

    println!(
        "lookup results for: {} max_results: {} scan_length: {}",
        args.word, args.max_results, args.scan_length
    );
    println!("{} results", results.len());

    for result in &results {
        println!("---------------------------------------------------------------");
        println!("{} (steps: {})", result.matched, result.preprocessor_steps);
        if !result.trace.is_empty() {
            let names: Vec<&str> = result
                .trace
                .iter()
                .map(|&id| deinflector.group(id).name)
                .collect();
            println!("  {}", names.join(" -> "));
        }
        println!("{} {}", result.term.expression, result.term.reading);
        for glossary in &result.term.glossaries {
            println!("------");
            println!("{}", glossary.dict_name);
            println!("{}", glossary.glossary);
        }
        for frequency_entry in &result.term.frequencies {
            let values: Vec<&str> = frequency_entry
                .frequencies
                .iter()
                .map(|f| f.display_value.as_str())
                .collect();
            println!("freq [{}]: {}", frequency_entry.dict_name, values.join(", "));
        }
        for pitch_entry in &result.term.pitches {
            let positions: Vec<String> = pitch_entry
                .pitch_positions
                .iter()
                .map(|p| p.to_string())
                .collect();
            println!("pitch [{}]: {}", pitch_entry.dict_name, positions.join(", "));
        }
    }

    println!("styles:");
    for style in reader.styles() {
        println!("{}", style.dict_name);
        println!("{}", style.styles);
    }
    Ok(())
}
