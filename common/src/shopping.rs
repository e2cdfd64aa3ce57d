//! 不足食材と買い物リスト
//!
//! レシピに必要でパントリーにない材料を抽出し、食料品サービスの検索リンクを作る。

use crate::normalizer::{clean_display_name, normalize_ingredient};
use crate::scorer::Pantry;
use crate::types::Recipe;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;

/// よく常備されている食材（クイック選択用）
pub const COMMON_STAPLES: &[&str] = &[
    "salt", "pepper", "oil", "water", "sugar", "flour", "butter", "garlic", "onion", "eggs",
    "milk", "vinegar", "honey", "baking powder", "baking soda", "yeast", "vanilla",
];

/// 食料品サービス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GroceryService {
    Blinkit,
    BigBasket,
}

impl GroceryService {
    pub const ALL: [GroceryService; 2] = [GroceryService::Blinkit, GroceryService::BigBasket];

    pub fn name(&self) -> &'static str {
        match self {
            GroceryService::Blinkit => "Blinkit",
            GroceryService::BigBasket => "BigBasket",
        }
    }

    /// 配送目安
    pub fn description(&self) -> &'static str {
        match self {
            GroceryService::Blinkit => "10-15 min delivery",
            GroceryService::BigBasket => "90 min delivery",
        }
    }

    fn search_base(&self) -> &'static str {
        match self {
            GroceryService::Blinkit => "https://blinkit.com/s/?q=",
            GroceryService::BigBasket => "https://www.bigbasket.com/ps/?q=",
        }
    }

    /// 食材の検索URL
    pub fn search_url(&self, ingredient: &str) -> String {
        format!(
            "{}{}",
            self.search_base(),
            utf8_percent_encode(&clean_display_name(ingredient), QUERY_COMPONENT)
        )
    }
}

impl std::fmt::Display for GroceryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 検索リンク
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroceryLink {
    pub ingredient: String,
    pub service: String,
    pub url: String,
}

/// 買い物リスト
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingList {
    pub items: Vec<String>,
}

impl ShoppingList {
    pub fn from_ingredients<I, S>(ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let items = ingredients
            .into_iter()
            .map(|i| clean_display_name(i.as_ref()))
            .filter(|i| !i.is_empty())
            .collect();

        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// クリップボード用テキスト
    pub fn to_clipboard_text(&self) -> String {
        self.items.join(", ")
    }

    /// 全品目×全サービスの検索リンク
    pub fn grocery_links(&self) -> Vec<GroceryLink> {
        self.items
            .iter()
            .flat_map(|item| {
                GroceryService::ALL.iter().map(move |service| GroceryLink {
                    ingredient: item.clone(),
                    service: service.name().to_string(),
                    url: service.search_url(item),
                })
            })
            .collect()
    }
}

/// パントリーでカバーされないレシピ材料（レシピ順、表示名）
pub fn missing_ingredients(recipe: &Recipe, pantry: &Pantry) -> Vec<String> {
    recipe
        .ingredient_names()
        .filter(|name| {
            let token = normalize_ingredient(name);
            !token.is_empty() && !pantry.covers(&token)
        })
        .map(clean_display_name)
        .collect()
}

/// レシピ材料のうち常備食材に該当するもの（表示名）
pub fn quick_select_common(recipe: &Recipe) -> Vec<String> {
    recipe
        .ingredient_names()
        .map(clean_display_name)
        .filter(|name| {
            let lowered = name.to_lowercase();
            !lowered.is_empty()
                && COMMON_STAPLES
                    .iter()
                    .any(|common| lowered.contains(common) || common.contains(lowered.as_str()))
        })
        .collect()
}

/// クエリ値でそのまま使える文字（英数字と `-_.!~*'()`）以外をエンコード
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');
