mod config;
mod error;
mod handlers;
mod models;
mod router;
mod state;
mod store;

use config::GatewayConfig;
use risk_engine::{AssessmentEngine, EngineConfig};
use router::create_router;
use state::AppState;
use std::sync::Arc;
use store::InMemoryStore;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Initialize tracing; RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = GatewayConfig::from_env()?;
    tracing::info!(
        methodology_version = %config.methodology_version,
        "Starting assessment gateway"
    );

    let engine = AssessmentEngine::with_config(EngineConfig {
        methodology_version: config.methodology_version.clone(),
    });
    let state = AppState::new(engine, Arc::new(InMemoryStore::new()));

    let app = create_router(state);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
