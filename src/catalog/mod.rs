//! レシピカタログ
//!
//! JSONファイル、またはJSONファイルを置いたフォルダからレシピを読み込む（読み取り専用）。

mod filter;

pub use filter::{RecipeFilter, RecipePage};

use crate::error::{RecipeFinderError, Result};
use recipe_finder_common::types::recipes_from_file;
use recipe_finder_common::Recipe;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    pub fn from_recipes(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// ファイルまたはフォルダから読み込む
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(RecipeFinderError::CatalogNotFound(path.display().to_string()));
        }

        let files = if path.is_dir() {
            scan_catalog_folder(path)
        } else {
            vec![path.to_path_buf()]
        };

        let mut recipes = Vec::new();
        let mut seen_ids = HashSet::new();

        for file in &files {
            let loaded = recipes_from_file(file).map_err(|e| {
                RecipeFinderError::InvalidCatalog(format!("{}: {}", file.display(), e))
            })?;
            debug!("{}: {} recipes", file.display(), loaded.len());

            let stem = file
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_default();

            for (idx, mut recipe) in loaded.into_iter().enumerate() {
                // IDのないレシピは「ファイル名-連番」
                if recipe.id.trim().is_empty() {
                    recipe.id = format!("{}-{}", stem, idx + 1);
                }

                if !seen_ids.insert(recipe.id.clone()) {
                    warn!("Duplicate recipe id {} in {}, skipping", recipe.id, file.display());
                    continue;
                }

                recipes.push(recipe);
            }
        }

        info!("Loaded {} recipes from {} file(s)", recipes.len(), files.len());

        Ok(Self { recipes })
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// IDで取得（見つからなければエラー）
    pub fn require(&self, id: &str) -> Result<&Recipe> {
        self.get(id)
            .ok_or_else(|| RecipeFinderError::RecipeNotFound(id.to_string()))
    }

    /// 条件で絞り込んでページ分割する（カタログ順）
    pub fn list(&self, filter: &RecipeFilter) -> RecipePage {
        filter.apply(&self.recipes)
    }
}

/// フォルダ直下の *.json をファイル名順に列挙
fn scan_catalog_folder(folder: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(folder)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|p| p.is_file())
        .filter(|p| {
            p.extension()
                .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case("json"))
        })
        .collect();

    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_not_found() {
        let result = Catalog::load(Path::new("/nonexistent/catalog.json"));
        assert!(matches!(result, Err(RecipeFinderError::CatalogNotFound(_))));
    }

    #[test]
    fn test_get_and_require() {
        let catalog = Catalog::from_recipes(vec![Recipe {
            id: "a".to_string(),
            name: "Omelette".to_string(),
            ..Default::default()
        }]);

        assert_eq!(catalog.get("a").map(|r| r.name.as_str()), Some("Omelette"));
        assert!(catalog.get("b").is_none());
        assert!(matches!(
            catalog.require("b"),
            Err(RecipeFinderError::RecipeNotFound(_))
        ));
    }
}
