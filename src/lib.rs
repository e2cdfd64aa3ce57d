//! Recipe Finder
//!
//! 手持ちの食材とレシピカタログを照合し、作れるレシピを一致率順に返す。
//! 照合ロジックは `recipe-finder-common` にあり、このクレートはCLI・設定・カタログ読み込み・HTTP APIを担う。

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod server;
