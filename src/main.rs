use clap::Parser;
use recipe_finder::{catalog, cli, config, error, server};
use recipe_finder_common::{
    missing_ingredients, parse_ingredients_param, pantry::split_ingredients_param,
    quick_select_common, rank_recipes, GroceryService, Pantry, ShoppingList,
};

use catalog::{Catalog, RecipeFilter};
use cli::{Cli, Commands};
use config::Config;
use error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = Config::load()?;

    let default_level = match (&cli.command, cli.verbose) {
        (_, true) => "debug",
        (Commands::Serve { .. }, false) => "info",
        _ => "warn",
    };
    server::init_tracing(default_level);

    // config コマンドでは保存内容を汚さない
    if !matches!(cli.command, Commands::Config { .. }) {
        if let Some(path) = cli.catalog.clone() {
            config.catalog_path = Some(path);
        }
    }

    match cli.command {
        Commands::Serve { port } => {
            println!("🍳 recipe-finder - APIサーバー\n");

            if let Some(port) = port {
                config.port = port;
            }

            let catalog = load_catalog(&config)?;
            println!(
                "✔ http://{}:{} で待ち受け中 (Ctrl+C で終了)\n",
                config.bind_address, config.port
            );

            server::start_server(server::State::new(catalog, config)).await?;
        }

        Commands::Match { ingredients, limit, json } => {
            let pantry = parse_ingredients_param(Some(ingredients.as_str()))?;
            let catalog = load_catalog_quiet(&config, json)?;
            let mut ranked = rank_recipes(&pantry, catalog.recipes())?;

            if let Some(limit) = limit {
                ranked.recipes.truncate(limit);
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&ranked)?);
                return Ok(());
            }

            println!("🔍 食材: {}\n", ranked.user_ingredients.join(", "));
            println!("{}\n", ranked.message);

            for (i, scored) in ranked.recipes.iter().enumerate() {
                let mark = if scored.result.has_all_pantry_ingredients { "★" } else { " " };
                println!(
                    "{} {:>2}. {} [{}] 手持ち一致 {}% / レシピ充足 {}%",
                    mark,
                    i + 1,
                    scored.recipe.name,
                    scored.recipe.id,
                    scored.result.pantry_match_percentage,
                    scored.result.recipe_coverage_percentage,
                );
                println!("       一致: {}", scored.result.matched_ingredients.join(", "));
            }

            if ranked.total_found > 0 {
                println!(
                    "\n✅ 全食材使用 {}件 / 一部使用 {}件",
                    ranked.complete_matches, ranked.partial_matches
                );
            }
        }

        Commands::Missing { recipe_id, ingredients, links } => {
            let catalog = load_catalog_quiet(&config, false)?;
            let recipe = catalog.require(&recipe_id)?;
            let pantry = Pantry::from_items(split_ingredients_param(&ingredients));

            println!("🛒 {} の不足食材\n", recipe.name);

            let missing = missing_ingredients(recipe, &pantry);
            if missing.is_empty() {
                println!("✔ 不足している食材はありません");
                return Ok(());
            }

            let list = ShoppingList::from_ingredients(&missing);
            for item in &list.items {
                println!("  - {}", item);
            }
            println!("\n買い物リスト: {}", list.to_clipboard_text());

            let staples = quick_select_common(recipe);
            if !staples.is_empty() {
                println!("常備食材の候補: {}", staples.join(", "));
            }

            if links {
                for service in GroceryService::ALL {
                    println!("\n{} ({})", service.name(), service.description());
                    for item in &list.items {
                        println!("  {}: {}", item, service.search_url(item));
                    }
                }
            }
        }

        Commands::List { search, category, difficulty, max_total_time, page, limit } => {
            let catalog = load_catalog_quiet(&config, false)?;
            let filter = RecipeFilter {
                search,
                category,
                difficulty,
                max_total_time,
                page,
                limit,
                ..RecipeFilter::default()
            };

            let listing = catalog.list(&filter);
            println!(
                "📖 レシピ一覧 ({}件中 {}/{}ページ)\n",
                listing.total_recipes,
                listing.current_page,
                listing.total_pages.max(1)
            );

            for recipe in &listing.recipes {
                println!(
                    "  [{}] {} - {} / {} / {}分",
                    recipe.id,
                    recipe.name,
                    recipe.category.as_str(),
                    recipe.difficulty.as_str(),
                    recipe.total_time()
                );
            }
        }

        Commands::Config { set_catalog, set_port, show } => {
            if let Some(path) = set_catalog {
                config.set_catalog_path(path)?;
                println!("✔ カタログを設定しました");
            }

            if let Some(port) = set_port {
                config.set_port(port)?;
                println!("✔ ポートを設定しました");
            }

            if show {
                println!("設定:");
                println!("  待ち受け: {}:{}", config.bind_address, config.port);
                println!(
                    "  カタログ: {}",
                    config
                        .catalog_path
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "未設定".into())
                );
                println!("  一覧の件数: {}", config.default_limit);
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}

fn load_catalog(config: &Config) -> Result<Catalog> {
    load_catalog_quiet(config, false).map(|catalog| {
        println!("✔ {}件のレシピが見つかりました", catalog.len());
        catalog
    })
}

/// JSON出力時は進捗を表示しない
fn load_catalog_quiet(config: &Config, quiet: bool) -> Result<Catalog> {
    let path = config.catalog_path()?;
    if !quiet {
        println!("- カタログを読み込み中: {}", path.display());
    }
    Catalog::load(&path)
}
