//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// 食材が1件も指定されていない（正規化後に空になった場合も含む）
    #[error("Ingredients parameter is required")]
    EmptyPantry,
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
