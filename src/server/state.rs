use std::sync::Arc;

use crate::{catalog::Catalog, config::Config};

/// ハンドラ間で共有する読み取り専用の状態
pub struct State {
    pub catalog: Catalog,
    pub config: Config,
}

impl State {
    pub fn new(catalog: Catalog, config: Config) -> Arc<Self> {
        Arc::new(Self { catalog, config })
    }
}
