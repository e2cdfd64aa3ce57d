use recipe_finder_common::Recipe;
use serde::Serialize;

/// 一覧の絞り込み条件
#[derive(Debug, Clone)]
pub struct RecipeFilter {
    /// 名前・説明・材料名の部分一致（大文字小文字を無視）
    pub search: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<String>,
    /// いずれかを含む
    pub dietary: Vec<String>,
    /// すべての材料名を含む（完全一致、大文字小文字を無視）
    pub ingredients: Vec<String>,
    pub max_prep_time: Option<u32>,
    pub max_cook_time: Option<u32>,
    pub max_total_time: Option<u32>,
    /// 指定人数以下
    pub servings: Option<u32>,
    /// 1始まり
    pub page: usize,
    pub limit: usize,
}

impl Default for RecipeFilter {
    fn default() -> Self {
        Self {
            search: None,
            category: None,
            difficulty: None,
            dietary: Vec::new(),
            ingredients: Vec::new(),
            max_prep_time: None,
            max_cook_time: None,
            max_total_time: None,
            servings: None,
            page: 1,
            limit: 10,
        }
    }
}

/// ページ分割された一覧
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipePage {
    pub recipes: Vec<Recipe>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_recipes: usize,
}

impl RecipeFilter {
    pub fn matches(&self, recipe: &Recipe) -> bool {
        if let Some(search) = self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            let needle = search.to_lowercase();
            let hit = recipe.name.to_lowercase().contains(&needle)
                || recipe.description.to_lowercase().contains(&needle)
                || recipe
                    .ingredient_names()
                    .any(|n| n.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }

        if let Some(category) = &self.category {
            if !recipe.category.as_str().eq_ignore_ascii_case(category.trim()) {
                return false;
            }
        }

        if let Some(difficulty) = &self.difficulty {
            if !recipe.difficulty.as_str().eq_ignore_ascii_case(difficulty.trim()) {
                return false;
            }
        }

        if !self.dietary.is_empty()
            && !recipe.dietary.iter().any(|d| {
                self.dietary
                    .iter()
                    .any(|wanted| d.as_str().eq_ignore_ascii_case(wanted.trim()))
            })
        {
            return false;
        }

        if !self.ingredients.is_empty() {
            let names: Vec<String> = recipe
                .ingredient_names()
                .map(|n| n.trim().to_lowercase())
                .collect();
            let has_all = self
                .ingredients
                .iter()
                .map(|wanted| wanted.trim().to_lowercase())
                .filter(|wanted| !wanted.is_empty())
                .all(|wanted| names.contains(&wanted));
            if !has_all {
                return false;
            }
        }

        let within = |limit: Option<u32>, value: u32| limit.map_or(true, |max| value <= max);

        within(self.max_prep_time, recipe.prep_time)
            && within(self.max_cook_time, recipe.cook_time)
            && within(self.max_total_time, recipe.total_time())
            && within(self.servings, recipe.servings)
    }

    pub fn apply(&self, recipes: &[Recipe]) -> RecipePage {
        let limit = self.limit.max(1);
        let page = self.page.max(1);

        let matched: Vec<&Recipe> = recipes.iter().filter(|r| self.matches(r)).collect();
        let total_recipes = matched.len();

        RecipePage {
            recipes: matched
                .into_iter()
                .skip((page - 1).saturating_mul(limit))
                .take(limit)
                .cloned()
                .collect(),
            current_page: page,
            total_pages: total_recipes.div_ceil(limit),
            total_recipes,
        }
    }
}
