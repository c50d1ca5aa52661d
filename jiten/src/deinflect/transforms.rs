//! 日本語の活用変換規則表
//!
//! 規則と説明はyomitanの日本語変換定義に準拠しています。
//! <https://github.com/yomidevs/yomitan/blob/master/ext/js/language/ja/japanese-transforms.js>

use super::conditions::*;
use super::Deinflector;

/// 変換規則一式をエンジンへ登録します。
#[rustfmt::skip]
pub(super) fn install(d: &mut Deinflector) {
    let g = d.add_group("-ば",
        "1. Conditional form; shows that the previous stated condition's establishment is the \
         condition for the latter stated condition to occur.\n\
         2. Shows a trigger for a latter stated perception or judgment.\n\
         Usage: Attach ば to the hypothetical form (仮定形) of verbs and i-adjectives.");
    d.add_rule("ければ", "い", BA, ADJ_I, g);
    d.add_rule("えば", "う", BA, V5, g);
    d.add_rule("けば", "く", BA, V5, g);
    d.add_rule("げば", "ぐ", BA, V5, g);
    d.add_rule("せば", "す", BA, V5, g);
    d.add_rule("てば", "つ", BA, V5, g);
    d.add_rule("ねば", "ぬ", BA, V5, g);
    d.add_rule("べば", "ぶ", BA, V5, g);
    d.add_rule("めば", "む", BA, V5, g);
    d.add_rule("れば", "る", BA, V1 | V5 | VK | VS | VZ, g);
    d.add_rule("れば", "", BA, MASU, g);

    let g = d.add_group("-ゃ", "Contraction of -ば.");
    d.add_rule("けりゃ", "ければ", YA, BA, g);
    d.add_rule("きゃ", "ければ", YA, BA, g);
    d.add_rule("や", "えば", YA, BA, g);
    d.add_rule("きゃ", "けば", YA, BA, g);
    d.add_rule("ぎゃ", "げば", YA, BA, g);
    d.add_rule("しゃ", "せば", YA, BA, g);
    d.add_rule("ちゃ", "てば", YA, BA, g);
    d.add_rule("にゃ", "ねば", YA, BA, g);
    d.add_rule("びゃ", "べば", YA, BA, g);
    d.add_rule("みゃ", "めば", YA, BA, g);
    d.add_rule("りゃ", "れば", YA, BA, g);

    let g = d.add_group("-ちゃ",
        "Contraction of ～ては.\n\
         1. Explains how something always happens under the condition that it marks.\n\
         2. Expresses the repetition (of a series of) actions.\n\
         3. Indicates a hypothetical situation in which the speaker gives a (negative) \
         evaluation about the other party's intentions.\n\
         4. Used in \"Must Not\" patterns like ～てはいけない.\n\
         Usage: Attach は after the て-form of verbs, contract ては into ちゃ.");
    d.add_rule("ちゃ", "る", V5, V1, g);
    d.add_rule("いじゃ", "ぐ", V5, V5, g);
    d.add_rule("いちゃ", "く", V5, V5, g);
    d.add_rule("しちゃ", "す", V5, V5, g);
    d.add_rule("っちゃ", "う", V5, V5, g);
    d.add_rule("っちゃ", "く", V5, V5, g);
    d.add_rule("っちゃ", "つ", V5, V5, g);
    d.add_rule("っちゃ", "る", V5, V5, g);
    d.add_rule("んじゃ", "ぬ", V5, V5, g);
    d.add_rule("んじゃ", "ぶ", V5, V5, g);
    d.add_rule("んじゃ", "む", V5, V5, g);
    d.add_rule("じちゃ", "ずる", V5, VZ, g);
    d.add_rule("しちゃ", "する", V5, VS, g);
    d.add_rule("為ちゃ", "為る", V5, VS, g);
    d.add_rule("きちゃ", "くる", V5, VK, g);
    d.add_rule("来ちゃ", "来る", V5, VK, g);
    d.add_rule("來ちゃ", "來る", V5, VK, g);

    let g = d.add_group("-ちゃう",
        "Contraction of -しまう.\n\
         Usage: Attach しまう after the て-form of verbs, contract てしまう into ちゃう.");
    d.add_rule("ちゃう", "る", V5, V1, g);
    d.add_rule("いじゃう", "ぐ", V5, V5, g);
    d.add_rule("いちゃう", "く", V5, V5, g);
    d.add_rule("しちゃう", "す", V5, V5, g);
    d.add_rule("っちゃう", "う", V5, V5, g);
    d.add_rule("っちゃう", "く", V5, V5, g);
    d.add_rule("っちゃう", "つ", V5, V5, g);
    d.add_rule("っちゃう", "る", V5, V5, g);
    d.add_rule("んじゃう", "ぬ", V5, V5, g);
    d.add_rule("んじゃう", "ぶ", V5, V5, g);
    d.add_rule("んじゃう", "む", V5, V5, g);
    d.add_rule("じちゃう", "ずる", V5, VZ, g);
    d.add_rule("しちゃう", "する", V5, VS, g);
    d.add_rule("為ちゃう", "為る", V5, VS, g);
    d.add_rule("きちゃう", "くる", V5, VK, g);
    d.add_rule("来ちゃう", "来る", V5, VK, g);
    d.add_rule("來ちゃう", "來る", V5, VK, g);

    let g = d.add_group("-ちまう",
        "Contraction of -しまう.\n\
         Usage: Attach しまう after the て-form of verbs, contract てしまう into ちまう.");
    d.add_rule("ちまう", "る", V5, V1, g);
    d.add_rule("いじまう", "ぐ", V5, V5, g);
    d.add_rule("いちまう", "く", V5, V5, g);
    d.add_rule("しちまう", "す", V5, V5, g);
    d.add_rule("っちまう", "う", V5, V5, g);
    d.add_rule("っちまう", "く", V5, V5, g);
    d.add_rule("っちまう", "つ", V5, V5, g);
    d.add_rule("っちまう", "る", V5, V5, g);
    d.add_rule("んじまう", "ぬ", V5, V5, g);
    d.add_rule("んじまう", "ぶ", V5, V5, g);
    d.add_rule("んじまう", "む", V5, V5, g);
    d.add_rule("じちまう", "ずる", V5, VZ, g);
    d.add_rule("しちまう", "する", V5, VS, g);
    d.add_rule("為ちまう", "為る", V5, VS, g);
    d.add_rule("きちまう", "くる", V5, VK, g);
    d.add_rule("来ちまう", "来る", V5, VK, g);
    d.add_rule("來ちまう", "來る", V5, VK, g);

    let g = d.add_group("-しまう",
        "1. Shows a sense of regret/surprise when you did have volition in doing something, \
         but it turned out to be bad to do.\n\
         2. Shows perfective/punctual achievement. This shows that an action has been \
         completed.\n\
         3. Shows unintentional action-\"accidentally\".\n\
         Usage: Attach しまう after the て-form of verbs.");
    d.add_rule("てしまう", "て", V5, TE, g);
    d.add_rule("でしまう", "で", V5, TE, g);

    let g = d.add_group("-なさい",
        "Polite imperative suffix.\n\
         Usage: Attach なさい after the continuative form (連用形) of verbs.");
    d.add_rule("なさい", "る", NASAI, V1, g);
    d.add_rule("いなさい", "う", NASAI, V5, g);
    d.add_rule("きなさい", "く", NASAI, V5, g);
    d.add_rule("ぎなさい", "ぐ", NASAI, V5, g);
    d.add_rule("しなさい", "す", NASAI, V5, g);
    d.add_rule("ちなさい", "つ", NASAI, V5, g);
    d.add_rule("になさい", "ぬ", NASAI, V5, g);
    d.add_rule("びなさい", "ぶ", NASAI, V5, g);
    d.add_rule("みなさい", "む", NASAI, V5, g);
    d.add_rule("りなさい", "る", NASAI, V5, g);
    d.add_rule("じなさい", "ずる", NASAI, VZ, g);
    d.add_rule("しなさい", "する", NASAI, VS, g);
    d.add_rule("為なさい", "為る", NASAI, VS, g);
    d.add_rule("きなさい", "くる", NASAI, VK, g);
    d.add_rule("来なさい", "来る", NASAI, VK, g);
    d.add_rule("來なさい", "來る", NASAI, VK, g);

    let g = d.add_group("-そう",
        "Appearing that; looking like.\n\
         Usage: Attach そう to the continuative form (連用形) of verbs, or to the stem of \
         adjectives.");
    d.add_rule("そう", "い", NONE, ADJ_I, g);
    d.add_rule("そう", "る", NONE, V1, g);
    d.add_rule("いそう", "う", NONE, V5, g);
    d.add_rule("きそう", "く", NONE, V5, g);
    d.add_rule("ぎそう", "ぐ", NONE, V5, g);
    d.add_rule("しそう", "す", NONE, V5, g);
    d.add_rule("ちそう", "つ", NONE, V5, g);
    d.add_rule("にそう", "ぬ", NONE, V5, g);
    d.add_rule("びそう", "ぶ", NONE, V5, g);
    d.add_rule("みそう", "む", NONE, V5, g);
    d.add_rule("りそう", "る", NONE, V5, g);
    d.add_rule("じそう", "ずる", NONE, VZ, g);
    d.add_rule("しそう", "する", NONE, VS, g);
    d.add_rule("為そう", "為る", NONE, VS, g);
    d.add_rule("きそう", "くる", NONE, VK, g);
    d.add_rule("来そう", "来る", NONE, VK, g);
    d.add_rule("來そう", "來る", NONE, VK, g);

    let g = d.add_group("-すぎる",
        "Shows something \"is too...\" or someone is doing something \"too much\".\n\
         Usage: Attach すぎる to the continuative form (連用形) of verbs, or to the stem of \
         adjectives.");
    d.add_rule("すぎる", "い", V1, ADJ_I, g);
    d.add_rule("すぎる", "る", V1, V1, g);
    d.add_rule("いすぎる", "う", V1, V5, g);
    d.add_rule("きすぎる", "く", V1, V5, g);
    d.add_rule("ぎすぎる", "ぐ", V1, V5, g);
    d.add_rule("しすぎる", "す", V1, V5, g);
    d.add_rule("ちすぎる", "つ", V1, V5, g);
    d.add_rule("にすぎる", "ぬ", V1, V5, g);
    d.add_rule("びすぎる", "ぶ", V1, V5, g);
    d.add_rule("みすぎる", "む", V1, V5, g);
    d.add_rule("りすぎる", "る", V1, V5, g);
    d.add_rule("じすぎる", "ずる", V1, VZ, g);
    d.add_rule("しすぎる", "する", V1, VS, g);
    d.add_rule("為すぎる", "為る", V1, VS, g);
    d.add_rule("きすぎる", "くる", V1, VK, g);
    d.add_rule("来すぎる", "来る", V1, VK, g);
    d.add_rule("來すぎる", "來る", V1, VK, g);

    let g = d.add_group("-過ぎる",
        "Shows something \"is too...\" or someone is doing something \"too much\".\n\
         Usage: Attach すぎる to the continuative form (連用形) of verbs, or to the stem of \
         adjectives.");
    d.add_rule("過ぎる", "い", V1, ADJ_I, g);
    d.add_rule("過ぎる", "る", V1, V1, g);
    d.add_rule("い過ぎる", "う", V1, V5, g);
    d.add_rule("き過ぎる", "く", V1, V5, g);
    d.add_rule("ぎ過ぎる", "ぐ", V1, V5, g);
    d.add_rule("し過ぎる", "す", V1, V5, g);
    d.add_rule("ち過ぎる", "つ", V1, V5, g);
    d.add_rule("に過ぎる", "ぬ", V1, V5, g);
    d.add_rule("び過ぎる", "ぶ", V1, V5, g);
    d.add_rule("み過ぎる", "む", V1, V5, g);
    d.add_rule("り過ぎる", "る", V1, V5, g);
    d.add_rule("じ過ぎる", "ずる", V1, VZ, g);
    d.add_rule("し過ぎる", "する", V1, VS, g);
    d.add_rule("為過ぎる", "為る", V1, VS, g);
    d.add_rule("き過ぎる", "くる", V1, VK, g);
    d.add_rule("来過ぎる", "来る", V1, VK, g);
    d.add_rule("來過ぎる", "來る", V1, VK, g);

    let g = d.add_group("-たい",
        "1. Expresses the feeling of desire or hope.\n\
         2. Used in ...たいと思います, an indirect way of saying what the speaker intends to \
         do.\n\
         Usage: Attach たい to the continuative form (連用形) of verbs. たい itself conjugates \
         as i-adjective.");
    d.add_rule("たい", "る", ADJ_I, V1, g);
    d.add_rule("いたい", "う", ADJ_I, V5, g);
    d.add_rule("きたい", "く", ADJ_I, V5, g);
    d.add_rule("ぎたい", "ぐ", ADJ_I, V5, g);
    d.add_rule("したい", "す", ADJ_I, V5, g);
    d.add_rule("ちたい", "つ", ADJ_I, V5, g);
    d.add_rule("にたい", "ぬ", ADJ_I, V5, g);
    d.add_rule("びたい", "ぶ", ADJ_I, V5, g);
    d.add_rule("みたい", "む", ADJ_I, V5, g);
    d.add_rule("りたい", "る", ADJ_I, V5, g);
    d.add_rule("じたい", "ずる", ADJ_I, VZ, g);
    d.add_rule("したい", "する", ADJ_I, VS, g);
    d.add_rule("為たい", "為る", ADJ_I, VS, g);
    d.add_rule("きたい", "くる", ADJ_I, VK, g);
    d.add_rule("来たい", "来る", ADJ_I, VK, g);
    d.add_rule("來たい", "來る", ADJ_I, VK, g);

    let g = d.add_group("-たら",
        "1. Denotes the latter stated event is a continuation of the previous stated event.\n\
         2. Assumes that a matter has been completed or concluded.\n\
         Usage: Attach たら to the continuative form (連用形) of verbs after euphonic change \
         form, かったら to the stem of i-adjectives.");
    d.add_rule("かったら", "い", NONE, ADJ_I, g);
    d.add_rule("たら", "る", NONE, V1, g);
    d.add_rule("いたら", "く", NONE, V5, g);
    d.add_rule("いだら", "ぐ", NONE, V5, g);
    d.add_rule("したら", "す", NONE, V5, g);
    d.add_rule("ったら", "う", NONE, V5, g);
    d.add_rule("ったら", "つ", NONE, V5, g);
    d.add_rule("ったら", "る", NONE, V5, g);
    d.add_rule("んだら", "ぬ", NONE, V5, g);
    d.add_rule("んだら", "ぶ", NONE, V5, g);
    d.add_rule("んだら", "む", NONE, V5, g);
    d.add_rule("じたら", "ずる", NONE, VZ, g);
    d.add_rule("したら", "する", NONE, VS, g);
    d.add_rule("為たら", "為る", NONE, VS, g);
    d.add_rule("きたら", "くる", NONE, VK, g);
    d.add_rule("来たら", "来る", NONE, VK, g);
    d.add_rule("來たら", "來る", NONE, VK, g);
    d.add_rule("いったら", "いく", NONE, V5S, g);
    d.add_rule("行ったら", "行く", NONE, V5S, g);
    d.add_rule("ましたら", "ます", NONE, MASU, g);

    let g = d.add_group("-たり",
        "1. Shows two actions occurring back and forth (when used with two verbs).\n\
         2. Shows examples of actions and states (when used with multiple verbs and \
         adjectives).\n\
         Usage: Attach たり to the continuative form (連用形) of verbs after euphonic change \
         form, かったり to the stem of i-adjectives");
    d.add_rule("かったり", "い", NONE, ADJ_I, g);
    d.add_rule("たり", "る", NONE, V1, g);
    d.add_rule("いたり", "く", NONE, V5, g);
    d.add_rule("いだり", "ぐ", NONE, V5, g);
    d.add_rule("したり", "す", NONE, V5, g);
    d.add_rule("ったり", "う", NONE, V5, g);
    d.add_rule("ったり", "つ", NONE, V5, g);
    d.add_rule("ったり", "る", NONE, V5, g);
    d.add_rule("んだり", "ぬ", NONE, V5, g);
    d.add_rule("んだり", "ぶ", NONE, V5, g);
    d.add_rule("んだり", "む", NONE, V5, g);
    d.add_rule("じたり", "ずる", NONE, VZ, g);
    d.add_rule("したり", "する", NONE, VS, g);
    d.add_rule("為たり", "為る", NONE, VS, g);
    d.add_rule("きたり", "くる", NONE, VK, g);
    d.add_rule("来たり", "来る", NONE, VK, g);
    d.add_rule("來たり", "來る", NONE, VK, g);
    d.add_rule("いったり", "いく", NONE, V5S, g);
    d.add_rule("行ったり", "行く", NONE, V5S, g);

    let g = d.add_group("-て",
        "て-form.\n\
         It has a myriad of meanings. Primarily, it is a conjunctive particle that connects \
         two clauses together.\n\
         Usage: Attach て to the continuative form (連用形) of verbs after euphonic change \
         form, くて to the stem of i-adjectives.");
    d.add_rule("くて", "い", TE, ADJ_I, g);
    d.add_rule("て", "る", TE, V1, g);
    d.add_rule("いて", "く", TE, V5, g);
    d.add_rule("いで", "ぐ", TE, V5, g);
    d.add_rule("して", "す", TE, V5, g);
    d.add_rule("って", "う", TE, V5, g);
    d.add_rule("って", "つ", TE, V5, g);
    d.add_rule("って", "る", TE, V5, g);
    d.add_rule("んで", "ぬ", TE, V5, g);
    d.add_rule("んで", "ぶ", TE, V5, g);
    d.add_rule("んで", "む", TE, V5, g);
    d.add_rule("じて", "ずる", TE, VZ, g);
    d.add_rule("して", "する", TE, VS, g);
    d.add_rule("為て", "為る", TE, VS, g);
    d.add_rule("きて", "くる", TE, VK, g);
    d.add_rule("来て", "来る", TE, VK, g);
    d.add_rule("來て", "來る", TE, VK, g);
    d.add_rule("いって", "いく", TE, V5S, g);
    d.add_rule("行って", "行く", TE, V5S, g);
    d.add_rule("まして", "ます", NONE, MASU, g);

    let g = d.add_group("-ず",
        "1. Negative form of verbs.\n\
         2. Continuative form (連用形) of the particle ぬ (nu).\n\
         Usage: Attach ず to the irrealis form (未然形) of verbs.");
    d.add_rule("ず", "る", NONE, V1, g);
    d.add_rule("かず", "く", NONE, V5, g);
    d.add_rule("がず", "ぐ", NONE, V5, g);
    d.add_rule("さず", "す", NONE, V5, g);
    d.add_rule("たず", "つ", NONE, V5, g);
    d.add_rule("なず", "ぬ", NONE, V5, g);
    d.add_rule("ばず", "ぶ", NONE, V5, g);
    d.add_rule("まず", "む", NONE, V5, g);
    d.add_rule("らず", "る", NONE, V5, g);
    d.add_rule("わず", "う", NONE, V5, g);
    d.add_rule("ぜず", "ずる", NONE, VZ, g);
    d.add_rule("せず", "する", NONE, VS, g);
    d.add_rule("為ず", "為る", NONE, VS, g);
    d.add_rule("こず", "くる", NONE, VK, g);
    d.add_rule("来ず", "来る", NONE, VK, g);
    d.add_rule("來ず", "來る", NONE, VK, g);

    let g = d.add_group("-ぬ",
        "Negative form of verbs.\n\
         Usage: Attach ぬ to the irrealis form (未然形) of verbs.\n\
         する becomes せぬ");
    d.add_rule("ぬ", "る", NONE, V1, g);
    d.add_rule("かぬ", "く", NONE, V5, g);
    d.add_rule("がぬ", "ぐ", NONE, V5, g);
    d.add_rule("さぬ", "す", NONE, V5, g);
    d.add_rule("たぬ", "つ", NONE, V5, g);
    d.add_rule("なぬ", "ぬ", NONE, V5, g);
    d.add_rule("ばぬ", "ぶ", NONE, V5, g);
    d.add_rule("まぬ", "む", NONE, V5, g);
    d.add_rule("らぬ", "る", NONE, V5, g);
    d.add_rule("わぬ", "う", NONE, V5, g);
    d.add_rule("ぜぬ", "ずる", NONE, VZ, g);
    d.add_rule("せぬ", "する", NONE, VS, g);
    d.add_rule("為ぬ", "為る", NONE, VS, g);
    d.add_rule("こぬ", "くる", NONE, VK, g);
    d.add_rule("来ぬ", "来る", NONE, VK, g);
    d.add_rule("來ぬ", "來る", NONE, VK, g);

    let g = d.add_group("-ん",
        "Negative form of verbs; a sound change of ぬ.\n\
         Usage: Attach ん to the irrealis form (未然形) of verbs.\n\
         する becomes せん");
    d.add_rule("ん", "る", NN, V1, g);
    d.add_rule("かん", "く", NN, V5, g);
    d.add_rule("がん", "ぐ", NN, V5, g);
    d.add_rule("さん", "す", NN, V5, g);
    d.add_rule("たん", "つ", NN, V5, g);
    d.add_rule("なん", "ぬ", NN, V5, g);
    d.add_rule("ばん", "ぶ", NN, V5, g);
    d.add_rule("まん", "む", NN, V5, g);
    d.add_rule("らん", "る", NN, V5, g);
    d.add_rule("わん", "う", NN, V5, g);
    d.add_rule("ぜん", "ずる", NN, VZ, g);
    d.add_rule("せん", "する", NN, VS, g);
    d.add_rule("為ん", "為る", NN, VS, g);
    d.add_rule("こん", "くる", NN, VK, g);
    d.add_rule("来ん", "来る", NN, VK, g);
    d.add_rule("來ん", "來る", NN, VK, g);

    let g = d.add_group("-んばかり",
        "Shows an action or condition is on the verge of occurring, or an excessive/extreme \
         degree.\n\
         Usage: Attach んばかり to the irrealis form (未然形) of verbs.\n\
         する becomes せんばかり");
    d.add_rule("んばかり", "る", NONE, V1, g);
    d.add_rule("かんばかり", "く", NONE, V5, g);
    d.add_rule("がんばかり", "ぐ", NONE, V5, g);
    d.add_rule("さんばかり", "す", NONE, V5, g);
    d.add_rule("たんばかり", "つ", NONE, V5, g);
    d.add_rule("なんばかり", "ぬ", NONE, V5, g);
    d.add_rule("ばんばかり", "ぶ", NONE, V5, g);
    d.add_rule("まんばかり", "む", NONE, V5, g);
    d.add_rule("らんばかり", "る", NONE, V5, g);
    d.add_rule("わんばかり", "う", NONE, V5, g);
    d.add_rule("ぜんばかり", "ずる", NONE, VZ, g);
    d.add_rule("せんばかり", "する", NONE, VS, g);
    d.add_rule("為んばかり", "為る", NONE, VS, g);
    d.add_rule("こんばかり", "くる", NONE, VK, g);
    d.add_rule("来んばかり", "来る", NONE, VK, g);
    d.add_rule("來んばかり", "來る", NONE, VK, g);

    let g = d.add_group("-んとする",
        "1. Shows the speaker's will or intention.\n\
         2. Shows an action or condition is on the verge of occurring.\n\
         Usage: Attach んとする to the irrealis form (未然形) of verbs.\n\
         する becomes せんとする");
    d.add_rule("んとする", "る", VS, V1, g);
    d.add_rule("かんとする", "く", VS, V5, g);
    d.add_rule("がんとする", "ぐ", VS, V5, g);
    d.add_rule("さんとする", "す", VS, V5, g);
    d.add_rule("たんとする", "つ", VS, V5, g);
    d.add_rule("なんとする", "ぬ", VS, V5, g);
    d.add_rule("ばんとする", "ぶ", VS, V5, g);
    d.add_rule("まんとする", "む", VS, V5, g);
    d.add_rule("らんとする", "る", VS, V5, g);
    d.add_rule("わんとする", "う", VS, V5, g);
    d.add_rule("ぜんとする", "ずる", VS, VZ, g);
    d.add_rule("せんとする", "する", VS, VS, g);
    d.add_rule("為んとする", "為る", VS, VS, g);
    d.add_rule("こんとする", "くる", VS, VK, g);
    d.add_rule("来んとする", "来る", VS, VK, g);
    d.add_rule("來んとする", "來る", VS, VK, g);

    let g = d.add_group("-む",
        "Archaic.\n\
         1. Shows an inference of a certain matter.\n\
         2. Shows speaker's intention.\n\
         Usage: Attach む to the irrealis form (未然形) of verbs.\n\
         する becomes せむ");
    d.add_rule("む", "る", NONE, V1, g);
    d.add_rule("かむ", "く", NONE, V5, g);
    d.add_rule("がむ", "ぐ", NONE, V5, g);
    d.add_rule("さむ", "す", NONE, V5, g);
    d.add_rule("たむ", "つ", NONE, V5, g);
    d.add_rule("なむ", "ぬ", NONE, V5, g);
    d.add_rule("ばむ", "ぶ", NONE, V5, g);
    d.add_rule("まむ", "む", NONE, V5, g);
    d.add_rule("らむ", "る", NONE, V5, g);
    d.add_rule("わむ", "う", NONE, V5, g);
    d.add_rule("ぜむ", "ずる", NONE, VZ, g);
    d.add_rule("せむ", "する", NONE, VS, g);
    d.add_rule("為む", "為る", NONE, VS, g);
    d.add_rule("こむ", "くる", NONE, VK, g);
    d.add_rule("来む", "来る", NONE, VK, g);
    d.add_rule("來む", "來る", NONE, VK, g);

    let g = d.add_group("-ざる",
        "Negative form of verbs.\n\
         Usage: Attach ざる to the irrealis form (未然形) of verbs.\n\
         する becomes せざる");
    d.add_rule("ざる", "る", NONE, V1, g);
    d.add_rule("かざる", "く", NONE, V5, g);
    d.add_rule("がざる", "ぐ", NONE, V5, g);
    d.add_rule("さざる", "す", NONE, V5, g);
    d.add_rule("たざる", "つ", NONE, V5, g);
    d.add_rule("なざる", "ぬ", NONE, V5, g);
    d.add_rule("ばざる", "ぶ", NONE, V5, g);
    d.add_rule("まざる", "む", NONE, V5, g);
    d.add_rule("らざる", "る", NONE, V5, g);
    d.add_rule("わざる", "う", NONE, V5, g);
    d.add_rule("ぜざる", "ずる", NONE, VZ, g);
    d.add_rule("せざる", "する", NONE, VS, g);
    d.add_rule("為ざる", "為る", NONE, VS, g);
    d.add_rule("こざる", "くる", NONE, VK, g);
    d.add_rule("来ざる", "来る", NONE, VK, g);
    d.add_rule("來ざる", "來る", NONE, VK, g);

    let g = d.add_group("-ねば",
        "1. Shows a hypothetical negation; if not ...\n\
         2. Shows a must. Used with or without ならぬ.\n\
         Usage: Attach ねば to the irrealis form (未然形) of verbs.\n\
         する becomes せねば");
    d.add_rule("ねば", "る", BA, V1, g);
    d.add_rule("かねば", "く", BA, V5, g);
    d.add_rule("がねば", "ぐ", BA, V5, g);
    d.add_rule("さねば", "す", BA, V5, g);
    d.add_rule("たねば", "つ", BA, V5, g);
    d.add_rule("なねば", "ぬ", BA, V5, g);
    d.add_rule("ばねば", "ぶ", BA, V5, g);
    d.add_rule("まねば", "む", BA, V5, g);
    d.add_rule("らねば", "る", BA, V5, g);
    d.add_rule("わねば", "う", BA, V5, g);
    d.add_rule("ぜねば", "ずる", BA, VZ, g);
    d.add_rule("せねば", "する", BA, VS, g);
    d.add_rule("為ねば", "為る", BA, VS, g);
    d.add_rule("こねば", "くる", BA, VK, g);
    d.add_rule("来ねば", "来る", BA, VK, g);
    d.add_rule("來ねば", "來る", BA, VK, g);

    let g = d.add_group("-く", "Adverbial form of i-adjectives.");
    d.add_rule("く", "い", KU, ADJ_I, g);

    let g = d.add_group("causative",
        "Describes the intention to make someone do something.\n\
         Usage: Attach させる to the irrealis form (未然形) of ichidan verbs and くる.\n\
         Attach せる to the irrealis form (未然形) of godan verbs and する.\n\
         It itself conjugates as an ichidan verb.");
    d.add_rule("させる", "る", V1, V1, g);
    d.add_rule("かせる", "く", V1, V5, g);
    d.add_rule("がせる", "ぐ", V1, V5, g);
    d.add_rule("させる", "す", V1, V5, g);
    d.add_rule("たせる", "つ", V1, V5, g);
    d.add_rule("なせる", "ぬ", V1, V5, g);
    d.add_rule("ばせる", "ぶ", V1, V5, g);
    d.add_rule("ませる", "む", V1, V5, g);
    d.add_rule("らせる", "る", V1, V5, g);
    d.add_rule("わせる", "う", V1, V5, g);
    d.add_rule("じさせる", "ずる", V1, VZ, g);
    d.add_rule("ぜさせる", "ずる", V1, VZ, g);
    d.add_rule("させる", "する", V1, VS, g);
    d.add_rule("為せる", "為る", V1, VS, g);
    d.add_rule("せさせる", "する", V1, VS, g);
    d.add_rule("為させる", "為る", V1, VS, g);
    d.add_rule("こさせる", "くる", V1, VK, g);
    d.add_rule("来させる", "来る", V1, VK, g);
    d.add_rule("來させる", "來る", V1, VK, g);

    let g = d.add_group("short causative",
        "Contraction of the causative form.\n\
         Describes the intention to make someone do something.\n\
         Usage: Attach す to the irrealis form (未然形) of godan verbs.\n\
         Attach さす to the dictionary form (終止形) of ichidan verbs.\n\
         する becomes さす, くる becomes こさす.\n\
         It itself conjugates as an godan verb.");
    d.add_rule("さす", "る", V5SS, V1, g);
    d.add_rule("かす", "く", V5SP, V5, g);
    d.add_rule("がす", "ぐ", V5SP, V5, g);
    d.add_rule("さす", "す", V5SS, V5, g);
    d.add_rule("たす", "つ", V5SP, V5, g);
    d.add_rule("なす", "ぬ", V5SP, V5, g);
    d.add_rule("ばす", "ぶ", V5SP, V5, g);
    d.add_rule("ます", "む", V5SP, V5, g);
    d.add_rule("らす", "る", V5SP, V5, g);
    d.add_rule("わす", "う", V5SP, V5, g);
    d.add_rule("じさす", "ずる", V5SS, VZ, g);
    d.add_rule("ぜさす", "ずる", V5SS, VZ, g);
    d.add_rule("さす", "する", V5SS, VS, g);
    d.add_rule("為す", "為る", V5SS, VS, g);
    d.add_rule("こさす", "くる", V5SS, VK, g);
    d.add_rule("来さす", "来る", V5SS, VK, g);
    d.add_rule("來さす", "來る", V5SS, VK, g);

    let g = d.add_group("imperative",
        "1. To give orders.\n\
         2. (As あれ) Represents the fact that it will never change no matter the \
         circumstances.\n\
         3. Express a feeling of hope.");
    d.add_rule("ろ", "る", NONE, V1, g);
    d.add_rule("よ", "る", NONE, V1, g);
    d.add_rule("え", "う", NONE, V5, g);
    d.add_rule("け", "く", NONE, V5, g);
    d.add_rule("げ", "ぐ", NONE, V5, g);
    d.add_rule("せ", "す", NONE, V5, g);
    d.add_rule("て", "つ", NONE, V5, g);
    d.add_rule("ね", "ぬ", NONE, V5, g);
    d.add_rule("べ", "ぶ", NONE, V5, g);
    d.add_rule("め", "む", NONE, V5, g);
    d.add_rule("れ", "る", NONE, V5, g);
    d.add_rule("じろ", "ずる", NONE, VZ, g);
    d.add_rule("ぜよ", "ずる", NONE, VZ, g);
    d.add_rule("しろ", "する", NONE, VS, g);
    d.add_rule("せよ", "する", NONE, VS, g);
    d.add_rule("為ろ", "為る", NONE, VS, g);
    d.add_rule("為よ", "為る", NONE, VS, g);
    d.add_rule("こい", "くる", NONE, VK, g);
    d.add_rule("来い", "来る", NONE, VK, g);
    d.add_rule("來い", "來る", NONE, VK, g);

    let g = d.add_group("continuative",
        "Used to indicate actions that are (being) carried out.\n\
         Refers to 連用形, the part of the verb after conjugating with -ます and dropping \
         ます.");
    d.add_rule("い", "いる", NONE, V1D, g);
    d.add_rule("え", "える", NONE, V1D, g);
    d.add_rule("き", "きる", NONE, V1D, g);
    d.add_rule("ぎ", "ぎる", NONE, V1D, g);
    d.add_rule("け", "ける", NONE, V1D, g);
    d.add_rule("げ", "げる", NONE, V1D, g);
    d.add_rule("じ", "じる", NONE, V1D, g);
    d.add_rule("せ", "せる", NONE, V1D, g);
    d.add_rule("ぜ", "ぜる", NONE, V1D, g);
    d.add_rule("ち", "ちる", NONE, V1D, g);
    d.add_rule("て", "てる", NONE, V1D, g);
    d.add_rule("で", "でる", NONE, V1D, g);
    d.add_rule("に", "にる", NONE, V1D, g);
    d.add_rule("ね", "ねる", NONE, V1D, g);
    d.add_rule("ひ", "ひる", NONE, V1D, g);
    d.add_rule("び", "びる", NONE, V1D, g);
    d.add_rule("へ", "へる", NONE, V1D, g);
    d.add_rule("べ", "べる", NONE, V1D, g);
    d.add_rule("み", "みる", NONE, V1D, g);
    d.add_rule("め", "める", NONE, V1D, g);
    d.add_rule("り", "りる", NONE, V1D, g);
    d.add_rule("れ", "れる", NONE, V1D, g);
    d.add_rule("い", "う", NONE, V5, g);
    d.add_rule("き", "く", NONE, V5, g);
    d.add_rule("ぎ", "ぐ", NONE, V5, g);
    d.add_rule("し", "す", NONE, V5, g);
    d.add_rule("ち", "つ", NONE, V5, g);
    d.add_rule("に", "ぬ", NONE, V5, g);
    d.add_rule("び", "ぶ", NONE, V5, g);
    d.add_rule("み", "む", NONE, V5, g);
    d.add_rule("り", "る", NONE, V5, g);
    d.add_rule("き", "くる", NONE, VK, g);
    d.add_rule("し", "する", NONE, VS, g);
    d.add_rule("来", "来る", NONE, VK, g);
    d.add_rule("來", "來る", NONE, VK, g);

    let g = d.add_group("negative",
        "1. Negative form of verbs.\n\
         2. Expresses a feeling of solicitation to the other party.\n\
         Usage: Attach ない to the irrealis form (未然形) of verbs, くない to the stem of \
         i-adjectives. ない itself conjugates as i-adjective. ます becomes ません.");
    d.add_rule("くない", "い", ADJ_I, ADJ_I, g);
    d.add_rule("ない", "る", ADJ_I, V1, g);
    d.add_rule("かない", "く", ADJ_I, V5, g);
    d.add_rule("がない", "ぐ", ADJ_I, V5, g);
    d.add_rule("さない", "す", ADJ_I, V5, g);
    d.add_rule("たない", "つ", ADJ_I, V5, g);
    d.add_rule("なない", "ぬ", ADJ_I, V5, g);
    d.add_rule("ばない", "ぶ", ADJ_I, V5, g);
    d.add_rule("まない", "む", ADJ_I, V5, g);
    d.add_rule("らない", "る", ADJ_I, V5, g);
    d.add_rule("わない", "う", ADJ_I, V5, g);
    d.add_rule("じない", "ずる", ADJ_I, VZ, g);
    d.add_rule("しない", "する", ADJ_I, VS, g);
    d.add_rule("為ない", "為る", ADJ_I, VS, g);
    d.add_rule("こない", "くる", ADJ_I, VK, g);
    d.add_rule("来ない", "来る", ADJ_I, VK, g);
    d.add_rule("來ない", "來る", ADJ_I, VK, g);
    d.add_rule("ません", "ます", MASEN, MASU, g);

    let g = d.add_group("-さ",
        "Nominalizing suffix of i-adjectives indicating nature, state, mind or degree.\n\
         Usage: Attach さ to the stem of i-adjectives.");
    d.add_rule("さ", "い", NONE, ADJ_I, g);

    let g = d.add_group("passive",
        "1. Expression of being affected by an action (Passive).\n\
         2. Respectful expression (Honorific).\n\
         3. Spontaneity.\n\
         4. Potential.\n\
         Usage: Attach れる to the irrealis form (未然形) of godan verbs.");
    d.add_rule("かれる", "く", V1, V5, g);
    d.add_rule("がれる", "ぐ", V1, V5, g);
    d.add_rule("される", "す", V1, V5D | V5SP, g);
    d.add_rule("たれる", "つ", V1, V5, g);
    d.add_rule("なれる", "ぬ", V1, V5, g);
    d.add_rule("ばれる", "ぶ", V1, V5, g);
    d.add_rule("まれる", "む", V1, V5, g);
    d.add_rule("われる", "う", V1, V5, g);
    d.add_rule("られる", "る", V1, V5, g);
    d.add_rule("じされる", "ずる", V1, VZ, g);
    d.add_rule("ぜされる", "ずる", V1, VZ, g);
    d.add_rule("される", "する", V1, VS, g);
    d.add_rule("為れる", "為る", V1, VS, g);
    d.add_rule("こられる", "くる", V1, VK, g);
    d.add_rule("来られる", "来る", V1, VK, g);
    d.add_rule("來られる", "來る", V1, VK, g);

    let g = d.add_group("-た",
        "1. Indicates a reality that has happened in the past.\n\
         2. Indicates the completion of an action.\n\
         3. Indicates the confirmation of a matter.\n\
         4. Indicates the speaker's confidence that the action will definitely be \
         fulfilled.\n\
         5. Indicates the events that occur before the main clause are represented as \
         relative past.\n\
         6. Indicates a mild imperative/command.\n\
         Usage: Attach た to the continuative form (連用形) of verbs after euphonic change \
         form, かった to the stem of i-adjectives.");
    d.add_rule("かった", "い", TA, ADJ_I, g);
    d.add_rule("た", "る", TA, V1, g);
    d.add_rule("いた", "く", TA, V5, g);
    d.add_rule("いだ", "ぐ", TA, V5, g);
    d.add_rule("した", "す", TA, V5, g);
    d.add_rule("った", "う", TA, V5, g);
    d.add_rule("った", "つ", TA, V5, g);
    d.add_rule("った", "る", TA, V5, g);
    d.add_rule("んだ", "ぬ", TA, V5, g);
    d.add_rule("んだ", "ぶ", TA, V5, g);
    d.add_rule("んだ", "む", TA, V5, g);
    d.add_rule("じた", "ずる", TA, VZ, g);
    d.add_rule("した", "する", TA, VS, g);
    d.add_rule("為た", "為る", TA, VS, g);
    d.add_rule("きた", "くる", TA, VK, g);
    d.add_rule("来た", "来る", TA, VK, g);
    d.add_rule("來た", "來る", TA, VK, g);
    d.add_rule("いった", "いく", TA, V5S, g);
    d.add_rule("行った", "行く", TA, V5S, g);
    d.add_rule("ました", "ます", TA, MASU, g);
    d.add_rule("でした", "", TA, MASEN, g);
    d.add_rule("かった", "", TA, MASEN | NN, g);

    let g = d.add_group("-ます",
        "Polite conjugation of verbs and adjectives.\n\
         Usage: Attach ます to the continuative form (連用形) of verbs.");
    d.add_rule("ます", "る", MASU, V1, g);
    d.add_rule("います", "う", MASU, V5D, g);
    d.add_rule("きます", "く", MASU, V5D, g);
    d.add_rule("ぎます", "ぐ", MASU, V5D, g);
    d.add_rule("します", "す", MASU, V5D | V5S, g);
    d.add_rule("ちます", "つ", MASU, V5D, g);
    d.add_rule("にます", "ぬ", MASU, V5D, g);
    d.add_rule("びます", "ぶ", MASU, V5D, g);
    d.add_rule("みます", "む", MASU, V5D, g);
    d.add_rule("ります", "る", MASU, V5D, g);
    d.add_rule("じます", "ずる", MASU, VZ, g);
    d.add_rule("します", "する", MASU, VS, g);
    d.add_rule("為ます", "為る", MASU, VS, g);
    d.add_rule("きます", "くる", MASU, VK, g);
    d.add_rule("来ます", "来る", MASU, VK, g);
    d.add_rule("來ます", "來る", MASU, VK, g);
    d.add_rule("くあります", "い", MASU, ADJ_I, g);

    let g = d.add_group("potential",
        "Indicates a state of being (naturally) capable of doing an action.\n\
         Usage: Attach (ら)れる to the irrealis form (未然形) of ichidan verbs.\n\
         Attach る to the imperative form (命令形) of godan verbs.\n\
         する becomes できる, くる becomes こ(ら)れる");
    d.add_rule("れる", "る", V1, V1 | V5D, g);
    d.add_rule("える", "う", V1, V5D, g);
    d.add_rule("ける", "く", V1, V5D, g);
    d.add_rule("げる", "ぐ", V1, V5D, g);
    d.add_rule("せる", "す", V1, V5D, g);
    d.add_rule("てる", "つ", V1, V5D, g);
    d.add_rule("ねる", "ぬ", V1, V5D, g);
    d.add_rule("べる", "ぶ", V1, V5D, g);
    d.add_rule("める", "む", V1, V5D, g);
    d.add_rule("できる", "する", V1, VS, g);
    d.add_rule("出来る", "する", V1, VS, g);
    d.add_rule("これる", "くる", V1, VK, g);
    d.add_rule("来れる", "来る", V1, VK, g);
    d.add_rule("來れる", "來る", V1, VK, g);

    let g = d.add_group("potential or passive",
        "1. Expression of being affected by an action (Passive).\n\
         2. Respectful expression (Honorific).\n\
         3. Spontaneity.\n\
         4. Potential.\n\
         5. Indicates a state of being (naturally) capable of doing an action.\n\
         Usage: Attach られる to the irrealis form (未然形) of ichidan verbs.\n\
         する becomes せられる, くる becomes こられる");
    d.add_rule("られる", "る", V1, V1, g);
    d.add_rule("ざれる", "ずる", V1, VZ, g);
    d.add_rule("ぜられる", "ずる", V1, VZ, g);
    d.add_rule("せられる", "する", V1, VS, g);
    d.add_rule("為られる", "為る", V1, VS, g);
    d.add_rule("こられる", "くる", V1, VK, g);
    d.add_rule("来られる", "来る", V1, VK, g);
    d.add_rule("來られる", "來る", V1, VK, g);

    let g = d.add_group("volitional",
        "1. Expresses speaker's will or intention.\n\
         2. Expresses an invitation to the other party.\n\
         3. (Used in …ようとする) Indicates being on the verge of initiating an action or \
         transforming a state.\n\
         4. Indicates an inference of a matter.\n\
         Usage: Attach よう to the irrealis form (未然形) of ichidan verbs.\n\
         Attach う to the irrealis form (未然形) of godan verbs after -o euphonic change \
         form.\n\
         Attach かろう to the stem of i-adjectives (4th meaning only).");
    d.add_rule("よう", "る", NONE, V1, g);
    d.add_rule("おう", "う", NONE, V5, g);
    d.add_rule("こう", "く", NONE, V5, g);
    d.add_rule("ごう", "ぐ", NONE, V5, g);
    d.add_rule("そう", "す", NONE, V5, g);
    d.add_rule("とう", "つ", NONE, V5, g);
    d.add_rule("のう", "ぬ", NONE, V5, g);
    d.add_rule("ぼう", "ぶ", NONE, V5, g);
    d.add_rule("もう", "む", NONE, V5, g);
    d.add_rule("ろう", "る", NONE, V5, g);
    d.add_rule("じよう", "ずる", NONE, VZ, g);
    d.add_rule("しよう", "する", NONE, VS, g);
    d.add_rule("為よう", "為る", NONE, VS, g);
    d.add_rule("こよう", "くる", NONE, VK, g);
    d.add_rule("来よう", "来る", NONE, VK, g);
    d.add_rule("來よう", "來る", NONE, VK, g);
    d.add_rule("ましょう", "ます", NONE, MASU, g);
    d.add_rule("かろう", "い", NONE, ADJ_I, g);

    let g = d.add_group("volitional slang",
        "Contraction of volitional form + か\n\
         1. Expresses speaker's will or intention.\n\
         2. Expresses an invitation to the other party.\n\
         Usage: Replace final う with っ of volitional form then add か.\n\
         For example: 行こうか -> 行こっか.");
    d.add_rule("よっか", "る", NONE, V1, g);
    d.add_rule("おっか", "う", NONE, V5, g);
    d.add_rule("こっか", "く", NONE, V5, g);
    d.add_rule("ごっか", "ぐ", NONE, V5, g);
    d.add_rule("そっか", "す", NONE, V5, g);
    d.add_rule("とっか", "つ", NONE, V5, g);
    d.add_rule("のっか", "ぬ", NONE, V5, g);
    d.add_rule("ぼっか", "ぶ", NONE, V5, g);
    d.add_rule("もっか", "む", NONE, V5, g);
    d.add_rule("ろっか", "る", NONE, V5, g);
    d.add_rule("じよっか", "ずる", NONE, VZ, g);
    d.add_rule("しよっか", "する", NONE, VS, g);
    d.add_rule("為よっか", "為る", NONE, VS, g);
    d.add_rule("こよっか", "くる", NONE, VK, g);
    d.add_rule("来よっか", "来る", NONE, VK, g);
    d.add_rule("來よっか", "來る", NONE, VK, g);
    d.add_rule("ましょっか", "ます", NONE, MASU, g);

    let g = d.add_group("-まい",
        "Negative volitional form of verbs.\n\
         1. Expresses speaker's assumption that something is likely not true.\n\
         2. Expresses speaker's will or intention not to do something.\n\
         Usage: Attach まい to the dictionary form (終止形) of verbs.\n\
         Attach まい to the irrealis form (未然形) of ichidan verbs.\n\
         する becomes しまい, くる becomes こまい");
    d.add_rule("まい", "", NONE, V, g);
    d.add_rule("まい", "る", NONE, V1, g);
    d.add_rule("じまい", "ずる", NONE, VZ, g);
    d.add_rule("しまい", "する", NONE, VS, g);
    d.add_rule("為まい", "為る", NONE, VS, g);
    d.add_rule("こまい", "くる", NONE, VK, g);
    d.add_rule("来まい", "来る", NONE, VK, g);
    d.add_rule("來まい", "來る", NONE, VK, g);
    d.add_rule("まい", "", NONE, MASU, g);

    let g = d.add_group("-おく",
        "To do certain things in advance in preparation (or in anticipation) of latter \
         needs.\n\
         Usage: Attach おく to the て-form of verbs.\n\
         Attach でおく after ない negative form of verbs.\n\
         Contracts to とく・どく in speech.");
    d.add_rule("ておく", "て", V5, TE, g);
    d.add_rule("でおく", "で", V5, TE, g);
    d.add_rule("とく", "て", V5, TE, g);
    d.add_rule("どく", "で", V5, TE, g);
    d.add_rule("ないでおく", "ない", V5, ADJ_I, g);
    d.add_rule("ないどく", "ない", V5, ADJ_I, g);

    let g = d.add_group("-いる",
        "1. Indicates an action continues or progresses to a point in time.\n\
         2. Indicates an action is completed and remains as is.\n\
         3. Indicates a state or condition that can be taken to be the result of undergoing \
         some change.\n\
         Usage: Attach いる to the て-form of verbs. い can be dropped in speech.\n\
         Attach でいる after ない negative form of verbs.\n\
         (Slang) Attach おる to the て-form of verbs. Contracts to とる・でる in speech.");
    d.add_rule("ている", "て", V1, TE, g);
    d.add_rule("ておる", "て", V5, TE, g);
    d.add_rule("てる", "て", V1P, TE, g);
    d.add_rule("でいる", "で", V1, TE, g);
    d.add_rule("でおる", "で", V5, TE, g);
    d.add_rule("でる", "で", V1P, TE, g);
    d.add_rule("とる", "て", V5, TE, g);
    d.add_rule("ないでいる", "ない", V1, ADJ_I, g);

    let g = d.add_group("-き",
        "Attributive form (連体形) of i-adjectives. An archaic form that remains in modern \
         Japanese.");
    d.add_rule("き", "い", NONE, ADJ_I, g);

    let g = d.add_group("-げ",
        "Describes a person's appearance. Shows feelings of the person.\n\
         Usage: Attach げ or 気 to the stem of i-adjectives");
    d.add_rule("げ", "い", NONE, ADJ_I, g);
    d.add_rule("気", "い", NONE, ADJ_I, g);

    let g = d.add_group("-がる",
        "1. Shows subject's feelings contrast with what is thought/known about them.\n\
         2. Indicates subject's behavior (stands out).\n\
         Usage: Attach がる to the stem of i-adjectives. It itself conjugates as a godan \
         verb.");
    d.add_rule("がる", "い", V5, ADJ_I, g);
}
