//! レシピと照合結果の型定義
//!
//! サーバー・CLI・クライアントプレビューで共有される型:
//! - Recipe / RecipeIngredient: カタログから読み込むレシピ
//! - MatchResult: 1レシピ×1パントリーの照合結果
//! - ScoredRecipe: レシピ+照合結果（APIレスポンス用にフラット化）

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// 分量（数値または自由記述）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    Number(f64),
    Text(String),
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Quantity::Number(n) if n.fract() == 0.0 => write!(f, "{}", *n as i64),
            Quantity::Number(n) => write!(f, "{}", n),
            Quantity::Text(s) => write!(f, "{}", s),
        }
    }
}

/// レシピの材料
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeIngredient {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Quantity>,

    #[serde(default)]
    pub unit: String,
}

impl RecipeIngredient {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// 料理区分
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Breakfast,
    Lunch,
    Dinner,
    Dessert,
    Snack,
    #[default]
    #[serde(rename = "main course")]
    MainCourse,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Breakfast => "breakfast",
            Category::Lunch => "lunch",
            Category::Dinner => "dinner",
            Category::Dessert => "dessert",
            Category::Snack => "snack",
            Category::MainCourse => "main course",
        }
    }
}

/// 難易度
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

/// 食事制限タグ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dietary {
    Vegetarian,
    Vegan,
    GlutenFree,
    DairyFree,
}

impl Dietary {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dietary::Vegetarian => "vegetarian",
            Dietary::Vegan => "vegan",
            Dietary::GlutenFree => "gluten-free",
            Dietary::DairyFree => "dairy-free",
        }
    }
}

/// レシピ
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(alias = "_id", default)]
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub category: Category,

    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,

    /// 下ごしらえ時間（分）
    #[serde(default)]
    pub prep_time: u32,

    /// 調理時間（分）
    #[serde(default)]
    pub cook_time: u32,

    #[serde(default = "default_servings")]
    pub servings: u32,

    #[serde(default)]
    pub steps: Vec<String>,

    #[serde(default)]
    pub image_url: String,

    #[serde(default)]
    pub difficulty: Difficulty,

    #[serde(default)]
    pub dietary: Vec<Dietary>,
}

fn default_servings() -> u32 {
    1
}

impl Recipe {
    /// 合計時間（分）
    pub fn total_time(&self) -> u32 {
        self.prep_time.saturating_add(self.cook_time)
    }

    /// 材料名の一覧（レシピ順）
    pub fn ingredient_names(&self) -> impl Iterator<Item = &str> {
        self.ingredients.iter().map(|i| i.name.as_str())
    }
}

/// 1レシピに対する照合結果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    /// レシピ内に見つかったパントリー食材の数
    pub pantry_match_count: usize,
    /// パントリーでカバーされるレシピ材料の数
    pub recipe_match_count: usize,
    /// パントリー側の一致率（0-100）
    pub pantry_match_percentage: u8,
    /// レシピ側のカバー率（0-100）
    pub recipe_coverage_percentage: u8,
    /// 一致したパントリー食材（パントリー順）
    pub matched_ingredients: Vec<String>,
    pub has_all_pantry_ingredients: bool,
    pub pantry_size: usize,
}

/// 照合結果付きレシピ（APIレスポンス形式）
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredRecipe {
    #[serde(flatten)]
    pub recipe: Recipe,

    #[serde(flatten)]
    pub result: MatchResult,

    /// パントリー一致率70%以上
    pub can_make_with_substitutes: bool,
}

/// JSON文字列からレシピ一覧を読み込む
///
/// 配列形式 `[...]` と `{"recipes": [...]}` 形式の両方を受け付ける。
pub fn recipes_from_json(json: &str) -> Result<Vec<Recipe>> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RecipeFile {
        List(Vec<Recipe>),
        Wrapped { recipes: Vec<Recipe> },
    }

    let file: RecipeFile = serde_json::from_str(json)?;
    Ok(match file {
        RecipeFile::List(recipes) => recipes,
        RecipeFile::Wrapped { recipes } => recipes,
    })
}

/// JSONファイルからレシピ一覧を読み込む（非WASM環境のみ）
#[cfg(not(feature = "wasm"))]
pub fn recipes_from_file(path: &std::path::Path) -> Result<Vec<Recipe>> {
    let content = std::fs::read_to_string(path)?;
    recipes_from_json(&content)
}
