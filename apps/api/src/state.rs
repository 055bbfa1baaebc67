use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::ingestion::providers::JobProvider;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub llm: LlmClient,
    /// Job-search providers, queried in registration order on each scrape run.
    pub providers: Arc<Vec<Box<dyn JobProvider>>>,
    pub config: Config,
}
