use anyhow::Context;
use tracing_subscriber::EnvFilter;

use console_api::config::ConsoleConfig;
use console_api::database::DocumentStore;
use console_api::server::{app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL and DATABASE_NAME.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = ConsoleConfig::from_env();

    // The store is optional: missing or broken database configuration degrades
    // the status report but the server still comes up.
    let store = match (&config.database_url, &config.database_name) {
        (Some(url), Some(name)) => match DocumentStore::connect(url, name).await {
            Ok(store) => Some(store),
            Err(e) => {
                tracing::warn!("starting without a document store: {e}");
                None
            }
        },
        _ => {
            tracing::warn!("DATABASE_URL/DATABASE_NAME not set; starting without a document store");
            None
        }
    };

    let port = config.port;
    let app = app(AppState::new(config, store));

    let bind_addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;

    tracing::info!("Console API listening on http://{bind_addr}");

    axum::serve(listener, app).await.context("server")?;
    Ok(())
}
