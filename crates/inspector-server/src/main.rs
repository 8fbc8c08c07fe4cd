use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use inspector_core::InspectorConfig;
use inspector_engine::{ComparisonRunner, OllamaClient, SimilarityScorer};
use inspector_server::{create_router, AppState, ComparisonStore};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("inspector_server=info,inspector_engine=info,tower_http=info")
        }))
        .init();

    let config = InspectorConfig::from_env()?;

    let store = ComparisonStore::open(&config.server.database_path)?;
    let ollama = OllamaClient::with_timeout(
        &config.ollama.host,
        Duration::from_secs(config.ollama.timeout_secs),
    )?;
    let scorer = SimilarityScorer::new(&config.similarity);
    tracing::info!(
        "Using Ollama at {} (similarity: {})",
        ollama.host(),
        scorer.method().as_str()
    );

    let runner = ComparisonRunner::new(Arc::new(ollama), scorer);
    let app = create_router(AppState::new(store, runner));

    let listener = tokio::net::TcpListener::bind(&config.server.bind).await?;
    tracing::info!("Server listening on {}", config.server.bind);

    axum::serve(listener, app).await?;
    Ok(())
}
