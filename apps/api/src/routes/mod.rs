pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::apply::handlers as apply_handlers;
use crate::dashboard::handlers as dashboard_handlers;
use crate::ingestion::handlers as ingestion_handlers;
use crate::preferences::handlers as preferences_handlers;
use crate::state::AppState;

/// Explicit user scoping for user-owned resources — there is no ambient
/// authenticated-user context anywhere in the service.
#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Ingestion
        .route("/api/v1/jobs", get(ingestion_handlers::handle_list_jobs))
        .route(
            "/api/v1/jobs/scrape",
            post(ingestion_handlers::handle_scrape),
        )
        // Apply
        .route(
            "/api/v1/applications/apply",
            post(apply_handlers::handle_apply),
        )
        // Dashboard
        .route(
            "/api/v1/dashboard/stats",
            get(dashboard_handlers::handle_stats),
        )
        // Preferences
        .route(
            "/api/v1/preferences",
            get(preferences_handlers::handle_get_preferences)
                .put(preferences_handlers::handle_save_preferences),
        )
        .with_state(state)
}
