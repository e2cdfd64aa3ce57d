//! HTTP API
//!
//! - `GET /api/recipes/available?ingredients=a,b` 手持ち食材でレシピを検索
//! - `GET /api/recipes` 絞り込み・ページ分割付き一覧
//! - `GET /api/recipes/:id` レシピ詳細
//! - `GET /api/recipes/:id/missing?ingredients=` 不足食材と買い物リンク
//! - `GET /api/health`

use std::{sync::Arc, time::Duration};

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::get,
    Router,
};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

pub mod error;
pub mod routes;
pub mod state;

use crate::error::{RecipeFinderError, Result};
use routes::{available_handler, health_handler, list_handler, missing_handler, recipe_handler};
pub use state::State;

/// ルーターを構築する
pub fn build_router(state: Arc<State>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/api/recipes", get(list_handler))
        .route("/api/recipes/available", get(available_handler))
        .route("/api/recipes/:id", get(recipe_handler))
        .route("/api/recipes/:id/missing", get(missing_handler))
        .route("/api/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// ログ出力を初期化する（RUST_LOG 未指定時は `default_level`）
pub fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // 二重初期化は無視
    // 標準出力は `match --json` の結果用に空けておく
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

pub async fn start_server(state: Arc<State>) -> Result<()> {
    let address = format!("{}:{}", state.config.bind_address, state.config.port);
    let recipes = state.catalog.len();

    let app = build_router(state);

    info!("Binding to {address}");
    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address} ({recipes} recipes)");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| RecipeFinderError::Server(e.to_string()))?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
