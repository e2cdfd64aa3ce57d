use std::sync::Arc;

use axum::{
    extract::{Path, Query, State as AxumState},
    Json,
};
use recipe_finder_common::{
    missing_ingredients, pantry::split_ingredients_param, parse_ingredients_param, rank_recipes,
    Pantry, RankedMatches, Recipe, ShoppingList,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;

use super::{error::ApiError, state::State};
use crate::catalog::{RecipeFilter, RecipePage};

#[derive(Deserialize)]
pub struct IngredientsQuery {
    ingredients: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    search: Option<String>,
    category: Option<String>,
    difficulty: Option<String>,
    /// カンマ区切り
    dietary: Option<String>,
    /// カンマ区切り、すべて含むレシピのみ
    ingredients: Option<String>,
    max_prep_time: Option<u32>,
    max_cook_time: Option<u32>,
    max_total_time: Option<u32>,
    servings: Option<u32>,
    page: Option<usize>,
    limit: Option<usize>,
}

impl ListQuery {
    fn into_filter(self, default_limit: usize) -> RecipeFilter {
        RecipeFilter {
            search: self.search,
            category: self.category.filter(|c| !c.is_empty()),
            difficulty: self.difficulty.filter(|d| !d.is_empty()),
            dietary: split_list(self.dietary.as_deref()),
            ingredients: split_list(self.ingredients.as_deref()),
            max_prep_time: self.max_prep_time,
            max_cook_time: self.max_cook_time,
            max_total_time: self.max_total_time,
            servings: self.servings,
            page: self.page.unwrap_or(1),
            limit: self.limit.unwrap_or(default_limit),
        }
    }
}

fn split_list(param: Option<&str>) -> Vec<String> {
    param
        .map(|p| {
            p.split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingResponse {
    recipe_id: String,
    recipe_name: String,
    missing_ingredients: Vec<String>,
    shopping_list: String,
    grocery_links: Vec<recipe_finder_common::shopping::GroceryLink>,
}

pub async fn available_handler(
    AxumState(state): AxumState<Arc<State>>,
    Query(query): Query<IngredientsQuery>,
) -> Result<Json<RankedMatches>, ApiError> {
    let pantry = parse_ingredients_param(query.ingredients.as_deref())?;
    info!("Matching {} ingredients: {:?}", pantry.len(), pantry.tokens());

    let ranked = rank_recipes(&pantry, state.catalog.recipes())?;
    info!(
        "Found {} matching recipes ({} complete)",
        ranked.total_found, ranked.complete_matches
    );

    Ok(Json(ranked))
}

pub async fn list_handler(
    AxumState(state): AxumState<Arc<State>>,
    Query(query): Query<ListQuery>,
) -> Json<RecipePage> {
    let filter = query.into_filter(state.config.default_limit);
    Json(state.catalog.list(&filter))
}

pub async fn recipe_handler(
    AxumState(state): AxumState<Arc<State>>,
    Path(id): Path<String>,
) -> Result<Json<Recipe>, ApiError> {
    let recipe = state.catalog.require(&id)?;
    Ok(Json(recipe.clone()))
}

/// 食材が未指定ならレシピ材料すべてが不足扱い
pub async fn missing_handler(
    AxumState(state): AxumState<Arc<State>>,
    Path(id): Path<String>,
    Query(query): Query<IngredientsQuery>,
) -> Result<Json<MissingResponse>, ApiError> {
    let recipe = state.catalog.require(&id)?;

    let pantry = query
        .ingredients
        .as_deref()
        .map(|param| Pantry::from_items(split_ingredients_param(param)))
        .unwrap_or_default();

    let missing = missing_ingredients(recipe, &pantry);
    let list = ShoppingList::from_ingredients(&missing);

    Ok(Json(MissingResponse {
        recipe_id: recipe.id.clone(),
        recipe_name: recipe.name.clone(),
        shopping_list: list.to_clipboard_text(),
        grocery_links: list.grocery_links(),
        missing_ingredients: missing,
    }))
}

pub async fn health_handler(AxumState(state): AxumState<Arc<State>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "recipes": state.catalog.len(),
    }))
}
