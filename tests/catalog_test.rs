//! カタログ読み込みテスト
//!
//! ファイル・フォルダからのレシピ読み込みとID付与を検証

use recipe_finder::catalog::{Catalog, RecipeFilter};
use recipe_finder::error::RecipeFinderError;
use tempfile::tempdir;

/// 配列形式の単一ファイル
#[test]
fn test_load_single_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("recipes.json");
    std::fs::write(
        &path,
        r#"[
            {"id": "omelette", "name": "Omelette", "ingredients": [{"name": "eggs"}, {"name": "butter"}]},
            {"_id": "toast", "name": "Toast", "ingredients": [{"name": "bread", "quantity": 2, "unit": "slices"}]}
        ]"#,
    )
    .unwrap();

    let catalog = Catalog::load(&path).expect("読み込み失敗");

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.recipes()[0].id, "omelette");
    assert_eq!(catalog.require("toast").unwrap().name, "Toast");
}

/// フォルダ内の *.json をファイル名順に読み込む
#[test]
fn test_load_folder_in_file_order() {
    let dir = tempdir().expect("Failed to create temp dir");

    std::fs::write(
        dir.path().join("b_dinner.json"),
        r#"{"recipes": [{"id": "stew", "name": "Stew"}]}"#,
    )
    .unwrap();
    std::fs::write(
        dir.path().join("a_breakfast.json"),
        r#"[{"id": "pancakes", "name": "Pancakes"}]"#,
    )
    .unwrap();
    std::fs::write(dir.path().join("notes.txt"), "not a catalog").unwrap();

    let catalog = Catalog::load(dir.path()).expect("読み込み失敗");
    let ids: Vec<&str> = catalog.recipes().iter().map(|r| r.id.as_str()).collect();

    assert_eq!(ids, vec!["pancakes", "stew"]);
}

/// IDのないレシピはファイル名と連番で採番
#[test]
fn test_missing_ids_assigned() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("soups.json");
    std::fs::write(&path, r#"[{"name": "Miso Soup"}, {"name": "Tomato Soup"}]"#).unwrap();

    let catalog = Catalog::load(&path).unwrap();

    assert_eq!(catalog.recipes()[0].id, "soups-1");
    assert_eq!(catalog.recipes()[1].id, "soups-2");
}

/// 重複IDは最初のものだけ残る
#[test]
fn test_duplicate_ids_skipped() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("a.json"), r#"[{"id": "x", "name": "First"}]"#).unwrap();
    std::fs::write(dir.path().join("b.json"), r#"[{"id": "x", "name": "Second"}]"#).unwrap();

    let catalog = Catalog::load(dir.path()).unwrap();

    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.require("x").unwrap().name, "First");
}

/// 不正なJSONはファイル名付きのエラー
#[test]
fn test_invalid_json() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = Catalog::load(&path).unwrap_err();
    match err {
        RecipeFinderError::InvalidCatalog(msg) => assert!(msg.contains("broken.json")),
        other => panic!("unexpected error: {other}"),
    }
}

/// 空フォルダは0件のカタログ
#[test]
fn test_empty_folder() {
    let dir = tempdir().expect("Failed to create temp dir");
    let catalog = Catalog::load(dir.path()).unwrap();
    assert!(catalog.is_empty());
}

/// ページ分割
#[test]
fn test_list_pagination() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("many.json");
    let recipes: Vec<serde_json::Value> = (1..=5)
        .map(|i| serde_json::json!({"id": format!("r{i}"), "name": format!("Recipe {i}")}))
        .collect();
    std::fs::write(&path, serde_json::to_string(&recipes).unwrap()).unwrap();

    let catalog = Catalog::load(&path).unwrap();
    let page = catalog.list(&RecipeFilter {
        page: 2,
        limit: 2,
        ..Default::default()
    });

    let ids: Vec<&str> = page.recipes.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["r3", "r4"]);
    assert_eq!(page.current_page, 2);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.total_recipes, 5);
}
