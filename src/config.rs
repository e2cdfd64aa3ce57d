use crate::error::{RecipeFinderError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub port: u16,
    pub bind_address: String,
    pub catalog_path: Option<PathBuf>,
    /// 一覧APIの1ページあたり件数
    pub default_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 5000,
            bind_address: "0.0.0.0".into(),
            catalog_path: None,
            default_limit: 10,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        let config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            serde_json::from_str(&content)?
        } else {
            Self::default()
        };

        Ok(config.with_env_overrides())
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| RecipeFinderError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("recipe-finder").join("config.json"))
    }

    /// 環境変数を優先（PORT, RECIPE_CATALOG）
    fn with_env_overrides(mut self) -> Self {
        if let Some(port) = std::env::var("PORT").ok().and_then(|p| p.parse().ok()) {
            self.port = port;
        }

        if let Ok(path) = std::env::var("RECIPE_CATALOG") {
            if !path.is_empty() {
                self.catalog_path = Some(PathBuf::from(path));
            }
        }

        self
    }

    pub fn catalog_path(&self) -> Result<PathBuf> {
        self.catalog_path.clone().ok_or(RecipeFinderError::MissingCatalog)
    }

    pub fn set_catalog_path(&mut self, path: PathBuf) -> Result<()> {
        self.catalog_path = Some(path);
        self.save()
    }

    pub fn set_port(&mut self, port: u16) -> Result<()> {
        self.port = port;
        self.save()
    }
}
