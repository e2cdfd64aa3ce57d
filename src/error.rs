use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecipeFinderError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("カタログが見つかりません: {0}")]
    CatalogNotFound(String),

    #[error("カタログが不正: {0}")]
    InvalidCatalog(String),

    #[error("レシピが見つかりません: {0}")]
    RecipeNotFound(String),

    #[error("カタログが設定されていません。`recipe-finder config --set-catalog PATH` または環境変数 RECIPE_CATALOG で指定してください")]
    MissingCatalog,

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("サーバーエラー: {0}")]
    Server(String),

    #[error(transparent)]
    Common(#[from] recipe_finder_common::Error),
}

pub type Result<T> = std::result::Result<T, RecipeFinderError>;
