//! 食材名の正規化
//!
//! 自由記述の食材名を比較可能なトークンに変換する。
//!
//! ## 処理フロー
//! 1. 小文字化、最初のカンマ以降と括弧書きを除去
//! 2. 先頭の分量（`2`, `1/2`, `½`, `2-3`）と単位（`cups`, `tbsp` …）を除去
//! 3. 記号を除去（ハイフン・アンダースコアは空白扱い）
//! 4. 形容語（`fresh`, `chopped` …）を除去
//! 5. 空白を1つに畳んでトリム
//!
//! どの段階でも失敗しない。除去しすぎて空になった場合は記号だけ落とした元の文字列を返す。

use regex::Regex;

/// 単位語（先頭の分量の直後、または `of` の直前にある場合のみ除去）
const UNIT_WORDS: &[&str] = &[
    "cup", "cups", "c",
    "tablespoon", "tablespoons", "tbsp", "tbs", "tbl",
    "teaspoon", "teaspoons", "tsp",
    "g", "gram", "grams", "kg", "kilogram", "kilograms",
    "mg", "ml", "milliliter", "milliliters", "l", "liter", "liters", "litre", "litres",
    "oz", "ounce", "ounces", "lb", "lbs", "pound", "pounds",
    "pint", "pints", "quart", "quarts", "gallon", "gallons",
    "pinch", "pinches", "dash", "dashes", "handful", "handfuls",
    "clove", "cloves", "can", "cans", "jar", "jars", "package", "packages", "pkg",
    "slice", "slices", "piece", "pieces", "stick", "sticks",
    "bunch", "bunches", "sprig", "sprigs", "head", "heads", "whole",
];

/// 比較時に無視する形容語・調理状態
const DESCRIPTOR_WORDS: &[&str] = &[
    "fresh", "freshly", "chopped", "diced", "minced", "sliced", "grated", "shredded",
    "crushed", "ground", "peeled", "cubed", "julienned", "halved", "quartered",
    "finely", "roughly", "coarsely", "thinly", "thickly", "lightly",
    "large", "medium", "small", "big",
    "ripe", "raw", "cooked", "frozen", "thawed", "dried", "canned",
    "boneless", "skinless", "softened", "melted", "beaten", "sifted", "optional",
];

/// 食材名を比較用トークンに正規化する
///
/// 空文字・空白のみ・記号のみの入力は空文字を返し、後段の照合から除外される。
pub fn normalize_ingredient(raw: &str) -> String {
    lazy_static::lazy_static! {
        static ref PAREN_RE: Regex = Regex::new(r"\([^)]*\)?").unwrap();
    }

    let lowered = raw.to_lowercase();
    let head = lowered.split(',').next().unwrap_or_default();
    let head = PAREN_RE.replace_all(head, " ");

    let words: Vec<&str> = head.split_whitespace().collect();
    let rest = strip_leading_measure(&words);

    let stripped: Vec<String> = clean_words(&rest.join(" "))
        .into_iter()
        .filter(|w| !DESCRIPTOR_WORDS.contains(&w.as_str()))
        .collect();

    if !stripped.is_empty() {
        return stripped.join(" ");
    }

    // 除去しすぎた場合は記号を落とした元の文字列
    clean_words(&lowered).join(" ")
}

/// 表示用に食材名を整える（空白の畳み込みと最初のカンマ以降の除去）
pub fn clean_display_name(raw: &str) -> String {
    let head = raw.split(',').next().unwrap_or_default();
    head.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// 分量として扱う語か判定
fn is_quantity_word(word: &str) -> bool {
    lazy_static::lazy_static! {
        // 2, 1.5, 1/2, 2-3, 1½, ½
        static ref QTY_RE: Regex =
            Regex::new(r"^(\d+([.,/]\d+)?)?[½⅓⅔¼¾⅛]?(-(\d+([./]\d+)?)?)?$").unwrap();
    }

    !word.is_empty() && QTY_RE.is_match(word)
}

fn is_unit_word(word: &str) -> bool {
    let word = word.trim_end_matches('.');
    UNIT_WORDS.contains(&word)
}

/// 先頭の分量・単位・`of` を除去した残りの語を返す
fn strip_leading_measure<'a>(words: &[&'a str]) -> Vec<&'a str> {
    let mut idx = 0;
    let mut saw_quantity = false;

    while idx < words.len() && is_quantity_word(words[idx]) {
        saw_quantity = true;
        idx += 1;
    }

    // "2 cups flour" / "pinch of salt"
    let followed_by_of = words.get(idx + 1).is_some_and(|w| *w == "of");
    if idx < words.len() && is_unit_word(words[idx]) && (saw_quantity || followed_by_of) {
        idx += 1;
    }

    if words.get(idx).is_some_and(|w| *w == "of") && idx > 0 {
        idx += 1;
    }

    words[idx..].to_vec()
}

/// 記号を除去して語に分割する
fn clean_words(text: &str) -> Vec<String> {
    let replaced: String = text
        .chars()
        .map(|c| if c == '-' || c == '_' { ' ' } else { c })
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();

    replaced.split_whitespace().map(str::to_string).collect()
}
