use std::sync::Arc;

use anyhow::Context as _;
use sea_orm::Database;
use tracing::info;

use locallib_catalog::config::CatalogConfig;
use locallib_catalog::router::build_router;
use locallib_catalog::state::AppState;
use locallib_core::tracing::init_tracing;
use locallib_domain::clock::SystemClock;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = CatalogConfig::from_env()?;

    let db = Database::connect(&config.database_url)
        .await
        .context("failed to connect to database")?;

    let state = AppState {
        db,
        clock: Arc::new(SystemClock),
    };

    let router = build_router(state);
    let http_addr = format!("0.0.0.0:{}", config.catalog_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .with_context(|| format!("failed to bind {http_addr}"))?;

    info!("catalog service listening on {http_addr}");
    axum::serve(listener, router).await.context("server error")?;
    Ok(())
}
