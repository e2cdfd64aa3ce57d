//! レシピのスコアリング
//!
//! 1つのパントリーと1つのレシピから照合結果を算出する。副作用なしの純粋関数。

use crate::matcher::tokens_match;
use crate::normalizer::normalize_ingredient;
use crate::types::{MatchResult, Recipe};

/// パントリー（ユーザーが持っている食材）
///
/// 正規化済み・空でないトークンの順序付き集合。重複は最初の出現のみ残す。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pantry {
    tokens: Vec<String>,
}

impl Pantry {
    /// 生の食材名から構築（正規化・空除去・重複除去）
    pub fn from_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tokens: Vec<String> = Vec::new();

        for item in items {
            let token = normalize_ingredient(item.as_ref());
            if !token.is_empty() && !tokens.contains(&token) {
                tokens.push(token);
            }
        }

        Self { tokens }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// いずれかのパントリー食材が指定トークンに一致するか
    pub fn covers(&self, token: &str) -> bool {
        self.tokens.iter().any(|p| tokens_match(p, token))
    }
}

/// 割合を0-100の整数で算出（分母0なら0、0.5は切り上げ）
pub fn percentage(count: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }

    let count = count.min(total);
    ((200 * count + total) / (2 * total)) as u8
}

/// レシピの材料を正規化済みトークンに変換（空は除外）
pub fn recipe_tokens(recipe: &Recipe) -> Vec<String> {
    recipe
        .ingredient_names()
        .map(normalize_ingredient)
        .filter(|t| !t.is_empty())
        .collect()
}

/// 1レシピをパントリーと照合する
pub fn score_recipe(pantry: &Pantry, recipe: &Recipe) -> MatchResult {
    let recipe_tokens = recipe_tokens(recipe);

    let matched_ingredients: Vec<String> = pantry
        .tokens()
        .iter()
        .filter(|p| recipe_tokens.iter().any(|r| tokens_match(p, r)))
        .cloned()
        .collect();

    let recipe_match_count = recipe_tokens.iter().filter(|r| pantry.covers(r)).count();

    let pantry_match_count = matched_ingredients.len();

    MatchResult {
        pantry_match_count,
        recipe_match_count,
        pantry_match_percentage: percentage(pantry_match_count, pantry.len()),
        recipe_coverage_percentage: percentage(recipe_match_count, recipe_tokens.len()),
        matched_ingredients,
        has_all_pantry_ingredients: !pantry.is_empty() && pantry_match_count == pantry.len(),
        pantry_size: pantry.len(),
    }
}
