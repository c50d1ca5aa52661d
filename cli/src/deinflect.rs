//! 逆変換サブコマンド

use clap::Parser;
use jiten::deinflect::Deinflector;

/// 逆変換コマンドの引数
#[derive(Parser, Debug)]
#[clap(name = "deinflect", about = "A program to print deinflection candidates.")]
pub struct Args {
    /// Inflected surface form.
    word: String,
}

/// 逆変換コマンドを実行する
///
/// すべての辞書形候補を条件ビットマップと変換トレース付きで表示します。
pub fn run(args: Args) {
    let deinflector = Deinflector::new();
    let results = deinflector.deinflect(&args.word);

    println!(
        "deinflections for: {} length: {}",
        args.word,
        args.word.chars().count()
    );
    println!("found {} candidates\n", results.len());

    for result in &results {
        println!("{} (conditions: {})", result.text, result.conditions);
        if !result.trace.is_empty() {
            let names: Vec<&str> = result
                .trace
                .iter()
                .map(|&id| deinflector.group(id).name)
                .collect();
            println!("  {}", names.join(" -> "));
        }
    }
}
