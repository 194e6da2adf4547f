use anyhow::Context;
use tracing_subscriber::EnvFilter;

use notes_api_rust::{app, config, database::DatabaseManager, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::config();
    tracing::info!(
        "Starting Notes API in {:?} mode with {:?} store",
        config.environment,
        config.store.backend
    );

    if config.security.jwt_secret.is_empty() {
        tracing::warn!("JWT_SECRET is not set; every protected request will be rejected");
    }

    let store = DatabaseManager::open_store(&config.store)
        .await
        .context("failed to open note store")?;
    let state = AppState::new(store, config.security.jwt_secret.as_str());

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Notes API listening on http://{}", bind_addr);

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
