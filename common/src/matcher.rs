//! 食材トークンの一対一照合
//!
//! 正規化済みトークン同士が「一致」するかを判定する。
//! 意味的な照合ではなく部分文字列ベースのヒューリスティックで、
//! "onion" は "green onion" にも "onion powder" にも一致する（既知の不正確さ）。

/// 語単位照合で対象にする最小文字数（これ以下の語は無視）
const MIN_WORD_LEN: usize = 2;

/// 2つの正規化済みトークンが一致するか判定
///
/// 1. 完全一致
/// 2. どちらかがもう一方の部分文字列
/// 3. 複数語の場合、短い方の各語（3文字以上）がすべて長い方に含まれる
pub fn tokens_match(a: &str, b: &str) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }

    if a == b || a.contains(b) || b.contains(a) {
        return true;
    }

    let multi_word = a.contains(' ') || b.contains(' ');
    if !multi_word {
        return false;
    }

    let (shorter, longer) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    let mut significant = shorter
        .split_whitespace()
        .filter(|w| w.chars().count() > MIN_WORD_LEN)
        .peekable();

    // 有効な語がなければ一致とはみなさない
    if significant.peek().is_none() {
        return false;
    }

    significant.all(|word| longer.contains(word))
}
