pub mod api;
pub mod config;
pub mod error;

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use sheetq_core::{load_workbook, Registry};

use crate::config::Config;

/// Application state shared across all handlers.
///
/// The registry is built once before serving and never mutated, so
/// handlers share it behind an `Arc` with no locking.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<Registry>,
}

/// Load the workbook, build the registry, and serve until shutdown
pub async fn run_server(config: Config) -> anyhow::Result<()> {
    // One synchronous load pass; an unreadable workbook is fatal
    let sheets = load_workbook(&config.workbook_path)?;
    let registry = Registry::build(sheets);

    tracing::info!(
        "Loaded {} tables from {}: {:?}",
        registry.len(),
        config.workbook_path.display(),
        registry.table_names()
    );
    if registry.collision_count() > 0 {
        tracing::warn!(
            "{} table name collision(s) resolved last-write-wins",
            registry.collision_count()
        );
    }

    let state = AppState {
        registry: Arc::new(registry),
    };

    // Build the router
    let app = Router::new()
        .merge(api::router())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    // Start the server
    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
