mod apply;
mod config;
mod dashboard;
mod db;
mod errors;
mod ingestion;
mod llm_client;
mod models;
mod preferences;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::ingestion::providers::default_providers;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing DATABASE_URL)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting JobScout API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL and apply pending migrations
    let db = create_pool(&config.database_url).await?;

    // Initialize LLM client (the apply entry point checks the key per call)
    let llm = LlmClient::new(config.llm_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Register job-search providers; scrape runs query them in this order
    let providers = Arc::new(default_providers());
    info!("Job providers registered: {}", providers.len());

    // Build app state
    let state = AppState {
        db,
        llm,
        providers,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // dashboard client is served from another origin

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
