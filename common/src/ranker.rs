//! 候補レシピのランキング
//!
//! カタログ全体をスコアリングし、一致のないレシピを除外して一致率順に並べる。

use crate::error::{Error, Result};
use crate::scorer::{score_recipe, Pantry};
use crate::types::{Recipe, ScoredRecipe};
use serde::Serialize;

/// 代替食材で作れるとみなすパントリー一致率
pub const SUBSTITUTE_THRESHOLD: u8 = 70;

/// ランキング結果
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedMatches {
    pub recipes: Vec<ScoredRecipe>,
    /// パントリー食材をすべて含むレシピ数
    pub complete_matches: usize,
    /// 一部のみ含むレシピ数
    pub partial_matches: usize,
    pub total_found: usize,
    /// 正規化後のパントリー
    pub user_ingredients: Vec<String>,
    pub message: String,
}

/// パントリーでカタログをランキングする
///
/// 空のパントリーはスコアリング前に `Error::EmptyPantry` で拒否する。
/// 空のカタログはエラーではなく空の結果を返す。
pub fn rank_recipes(pantry: &Pantry, catalog: &[Recipe]) -> Result<RankedMatches> {
    if pantry.is_empty() {
        return Err(Error::EmptyPantry);
    }

    let user_ingredients = pantry.tokens().to_vec();

    if catalog.is_empty() {
        return Ok(RankedMatches {
            user_ingredients,
            message: "No recipes in database".to_string(),
            ..Default::default()
        });
    }

    let mut recipes: Vec<ScoredRecipe> = catalog
        .iter()
        .map(|recipe| (recipe, score_recipe(pantry, recipe)))
        .filter(|(_, result)| result.pantry_match_count > 0)
        .map(|(recipe, result)| ScoredRecipe {
            recipe: recipe.clone(),
            can_make_with_substitutes: result.pantry_match_percentage >= SUBSTITUTE_THRESHOLD,
            result,
        })
        .collect();

    // 安定ソート: 同率ならカタログ順を維持
    recipes.sort_by(|a, b| {
        b.result
            .pantry_match_percentage
            .cmp(&a.result.pantry_match_percentage)
    });

    let complete_matches = recipes
        .iter()
        .filter(|r| r.result.has_all_pantry_ingredients)
        .count();
    let partial_matches = recipes.len() - complete_matches;
    let total_found = recipes.len();

    Ok(RankedMatches {
        recipes,
        complete_matches,
        partial_matches,
        total_found,
        user_ingredients,
        message: summary_message(total_found, complete_matches),
    })
}

fn summary_message(total_found: usize, complete_matches: usize) -> String {
    if total_found == 0 {
        "No recipes found containing your selected ingredients. Try different ingredients."
            .to_string()
    } else if complete_matches > 0 {
        format!("Found {} recipes that contain ALL your ingredients", complete_matches)
    } else {
        format!("Found {} recipes with some of your ingredients", total_found)
    }
}
