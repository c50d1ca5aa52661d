//! 前処理サブコマンド

use clap::Parser;

/// 前処理コマンドの引数
#[derive(Parser, Debug)]
#[clap(name = "preprocess", about = "A program to print text variants.")]
pub struct Args {
    /// Query fragment to expand.
    word: String,
}

/// 前処理コマンドを実行する
///
/// 表記候補をステップ数付きで表示します。
pub fn run(args: Args) {
    let variants = jiten::textproc::process(&args.word);

    println!("variants for: {}", args.word);
    println!("found {} variants\n", variants.len());

    for variant in &variants {
        println!("{} (steps: {})", variant.text, variant.steps);
    }
}
