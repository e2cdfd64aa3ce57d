use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "recipe-finder")]
#[command(about = "手持ちの食材からレシピを探すツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// レシピカタログ（JSONファイルまたはフォルダ、設定より優先）
    #[arg(short, long, global = true)]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// APIサーバーを起動
    Serve {
        /// 待ち受けポート（省略時は設定値）
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// 手持ちの食材でレシピを検索
    Match {
        /// カンマ区切りの食材（例: "onion,salt,rice"）
        #[arg(required = true)]
        ingredients: String,

        /// 表示件数の上限
        #[arg(short, long)]
        limit: Option<usize>,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// レシピに足りない食材と買い物リンクを表示
    Missing {
        /// レシピID
        #[arg(required = true)]
        recipe_id: String,

        /// カンマ区切りの手持ち食材
        #[arg(short, long, default_value = "")]
        ingredients: String,

        /// 食料品サービスの検索リンクも表示
        #[arg(long)]
        links: bool,
    },

    /// レシピ一覧
    List {
        /// 名前・説明・材料で検索
        #[arg(short, long)]
        search: Option<String>,

        /// 料理区分 (breakfast/lunch/dinner/dessert/snack/"main course")
        #[arg(long)]
        category: Option<String>,

        /// 難易度 (easy/medium/hard)
        #[arg(long)]
        difficulty: Option<String>,

        /// 合計時間の上限（分）
        #[arg(long)]
        max_total_time: Option<u32>,

        /// ページ番号
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// 1ページあたりの件数
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// 設定を表示/編集
    Config {
        /// カタログのパスを設定
        #[arg(long)]
        set_catalog: Option<PathBuf>,

        /// 待ち受けポートを設定
        #[arg(long)]
        set_port: Option<u16>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_match() {
        let cli = Cli::try_parse_from(["recipe-finder", "match", "onion,salt", "--json", "-c", "recipes.json"])
            .unwrap();

        assert_eq!(cli.catalog, Some(PathBuf::from("recipes.json")));
        match cli.command {
            Commands::Match { ingredients, json, limit } => {
                assert_eq!(ingredients, "onion,salt");
                assert!(json);
                assert_eq!(limit, None);
            }
            _ => panic!("match subcommand expected"),
        }
    }

    #[test]
    fn test_parse_missing_defaults() {
        let cli = Cli::try_parse_from(["recipe-finder", "missing", "r1"]).unwrap();
        match cli.command {
            Commands::Missing { recipe_id, ingredients, links } => {
                assert_eq!(recipe_id, "r1");
                assert_eq!(ingredients, "");
                assert!(!links);
            }
            _ => panic!("missing subcommand expected"),
        }
    }

    #[test]
    fn test_match_requires_ingredients() {
        assert!(Cli::try_parse_from(["recipe-finder", "match"]).is_err());
    }
}
