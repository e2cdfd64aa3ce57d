//! Recipe Finder Common Library
//!
//! サーバー・CLI・クライアントプレビューで共有される型と食材照合ロジック

pub mod types;
pub mod error;
pub mod normalizer;
pub mod matcher;
pub mod scorer;
pub mod ranker;
pub mod pantry;
pub mod shopping;

pub use types::{Category, Difficulty, Dietary, MatchResult, Quantity, Recipe, RecipeIngredient, ScoredRecipe};
pub use error::{Error, Result};
pub use normalizer::{clean_display_name, normalize_ingredient};
pub use matcher::tokens_match;
pub use scorer::{score_recipe, Pantry};
pub use ranker::{rank_recipes, RankedMatches};
pub use pantry::parse_ingredients_param;
pub use shopping::{missing_ingredients, quick_select_common, GroceryService, ShoppingList};
