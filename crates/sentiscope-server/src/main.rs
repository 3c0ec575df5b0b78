use std::sync::Arc;

use anyhow::{Context, Result};
use sentiscope_config::ServiceConfig;
use sentiscope_model::LinearTextClassifier;
use sentiscope_server::AppState;
use sentiscope_store::SqliteRecordStore;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .compact()
        .init();

    let config = ServiceConfig::from_env().context("failed to load configuration")?;

    let predictor = LinearTextClassifier::load(&config.model_path)
        .with_context(|| format!("failed to load model from {}", config.model_path.display()))?;
    let store = SqliteRecordStore::open(&config.database_url).context("failed to open record store")?;

    let state = Arc::new(AppState::new(Arc::new(predictor), Arc::new(store)));
    let app = sentiscope_server::app(state);

    info!("Starting server on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
