//! 食材照合テスト
//!
//! 正規化からランキングまでを通しで検証

use recipe_finder_common::{
    parse_ingredients_param, rank_recipes, score_recipe, Error, Pantry, Recipe, RecipeIngredient,
};

fn recipe(id: &str, ingredients: &[&str]) -> Recipe {
    Recipe {
        id: id.to_string(),
        name: format!("Recipe {}", id),
        ingredients: ingredients.iter().map(|n| RecipeIngredient::named(*n)).collect(),
        ..Default::default()
    }
}

/// 玉ねぎと塩で検索（重なりのないレシピは除外）
#[test]
fn test_onion_salt_scenario() {
    let pantry = Pantry::from_items(["onion", "salt"]);
    let catalog = vec![
        recipe("a", &["onion", "salt", "pepper"]),
        recipe("b", &["chicken", "rice"]),
    ];

    let ranked = rank_recipes(&pantry, &catalog).unwrap();

    assert_eq!(ranked.total_found, 1);
    let top = &ranked.recipes[0];
    assert_eq!(top.recipe.id, "a");
    assert_eq!(top.result.pantry_match_percentage, 100);
    assert_eq!(top.result.recipe_coverage_percentage, 67);
    assert!(top.result.has_all_pantry_ingredients);
    assert_eq!(ranked.complete_matches, 1);
    assert_eq!(ranked.partial_matches, 0);
}

/// 正規化後に空になる食材だけなら入力エラー
#[test]
fn test_all_invalid_ingredients_rejected() {
    let result = parse_ingredients_param(Some("!!!, ???"));
    assert!(matches!(result, Err(Error::EmptyPantry)));

    assert!(matches!(parse_ingredients_param(None), Err(Error::EmptyPantry)));
    assert!(matches!(parse_ingredients_param(Some("")), Err(Error::EmptyPantry)));
}

/// 空のカタログはエラーではなく0件
#[test]
fn test_empty_catalog() {
    let pantry = Pantry::from_items(["onion"]);
    let ranked = rank_recipes(&pantry, &[]).unwrap();

    assert!(ranked.recipes.is_empty());
    assert_eq!(ranked.total_found, 0);
    assert_eq!(ranked.complete_matches, 0);
    assert_eq!(ranked.partial_matches, 0);
}

/// 語単位の包含で一致
#[test]
fn test_green_onion_matches_onion() {
    let pantry = Pantry::from_items(["green onion"]);
    let result = score_recipe(&pantry, &recipe("a", &["onion"]));

    assert_eq!(result.pantry_match_count, 1);
    assert_eq!(result.recipe_match_count, 1);
    assert_eq!(result.matched_ingredients, vec!["green onion"]);
}

/// パントリーとレシピ材料が完全に同じなら両方100%
#[test]
fn test_exact_ingredient_set() {
    let pantry = Pantry::from_items(["Tomato", "basil", "2 cups rice"]);
    let result = score_recipe(&pantry, &recipe("a", &["tomato", "Basil", "rice"]));

    assert!(result.has_all_pantry_ingredients);
    assert_eq!(result.pantry_match_percentage, 100);
    assert_eq!(result.recipe_coverage_percentage, 100);
}

/// 材料のないレシピでも0%（ゼロ除算しない）
#[test]
fn test_recipe_without_ingredients() {
    let pantry = Pantry::from_items(["onion"]);
    let result = score_recipe(&pantry, &recipe("a", &[]));

    assert_eq!(result.pantry_match_percentage, 0);
    assert_eq!(result.recipe_coverage_percentage, 0);
    assert!(!result.has_all_pantry_ingredients);
}

/// 同じ入力なら同じ結果
#[test]
fn test_scoring_is_deterministic() {
    let pantry = Pantry::from_items(["garlic", "butter", "lemon"]);
    let catalog = vec![
        recipe("a", &["garlic", "butter", "shrimp"]),
        recipe("b", &["lemon", "sugar", "water"]),
        recipe("c", &["garlic", "lemon", "butter", "parsley"]),
    ];

    let first = rank_recipes(&pantry, &catalog).unwrap();
    let second = rank_recipes(&pantry, &catalog).unwrap();

    assert_eq!(first.recipes, second.recipes);
}

/// 一致率が同じレシピはカタログ順を保つ
#[test]
fn test_ranking_is_stable() {
    let pantry = Pantry::from_items(["onion", "garlic"]);
    let catalog = vec![
        recipe("first", &["onion", "carrot"]),
        recipe("second", &["garlic"]),
        recipe("both", &["onion", "garlic"]),
        recipe("third", &["onion"]),
    ];

    let ranked = rank_recipes(&pantry, &catalog).unwrap();
    let ids: Vec<&str> = ranked.recipes.iter().map(|r| r.recipe.id.as_str()).collect();

    assert_eq!(ids, vec!["both", "first", "second", "third"]);
    assert_eq!(ranked.complete_matches, 1);
    assert_eq!(ranked.partial_matches, 3);
}

/// 割合は常に0-100
#[test]
fn test_percentages_in_range() {
    let pantry = Pantry::from_items(["salt", "sea salt", "pepper", "egg"]);
    let catalog = vec![
        recipe("a", &["salt"]),
        recipe("b", &["salt", "salt", "salt"]),
        recipe("c", &["eggs", "black pepper", "salt", "flour", "milk"]),
    ];

    for r in &catalog {
        let result = score_recipe(&pantry, r);
        assert!(result.pantry_match_percentage <= 100);
        assert!(result.recipe_coverage_percentage <= 100);
    }
}

/// クエリ文字列からの通し
#[test]
fn test_query_to_ranking() {
    let pantry = parse_ingredients_param(Some("Onion,Salt,  ")).unwrap();
    assert_eq!(pantry.len(), 2);

    // カンマ直後の空白は区切りではない
    let joined = parse_ingredients_param(Some("Onion, Salt")).unwrap();
    assert_eq!(joined.tokens(), &["onion salt".to_string()]);

    let ranked = rank_recipes(&pantry, &[recipe("a", &["1 large onion, diced", "salt"])]).unwrap();
    assert_eq!(ranked.total_found, 1);
    assert_eq!(ranked.recipes[0].result.recipe_coverage_percentage, 100);
}
