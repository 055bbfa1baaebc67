//! Axum route handlers for the ingestion API.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use tracing::error;

use crate::errors::AppError;
use crate::ingestion::run_ingestion;
use crate::models::job::JobListingRow;
use crate::state::AppState;

/// Wire envelope of the scrape entry point. `message` travels on the two
/// 200 outcomes, `error` on the 500 one — never both.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeResponse {
    pub success: bool,
    pub jobs_added: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ScrapeResponse {
    fn scraped(inserted: u64) -> Self {
        Self {
            success: true,
            jobs_added: inserted,
            message: Some(format!("Successfully scraped {inserted} PHP developer jobs")),
            error: None,
        }
    }

    /// Providers answered but had nothing — configuration is fine, there is
    /// just nothing new. Distinct from the failure envelope.
    fn no_jobs() -> Self {
        Self {
            success: false,
            jobs_added: 0,
            message: Some("No jobs found from any provider".to_string()),
            error: None,
        }
    }

    fn failure(error: String) -> Self {
        Self {
            success: false,
            jobs_added: 0,
            message: None,
            error: Some(error),
        }
    }
}

/// POST /api/v1/jobs/scrape
///
/// Runs one ingestion pass over all registered providers. A missing search
/// key fails before any network call.
pub async fn handle_scrape(State(state): State<AppState>) -> (StatusCode, Json<ScrapeResponse>) {
    let Some(api_key) = state.config.job_search_api_key.clone() else {
        error!("scrape requested but JOB_SEARCH_API_KEY is not configured");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ScrapeResponse::failure(
                "JOB_SEARCH_API_KEY is not configured".to_string(),
            )),
        );
    };

    match run_ingestion(&state.db, &state.providers, &api_key).await {
        Ok(report) if report.fetched == 0 => (StatusCode::OK, Json(ScrapeResponse::no_jobs())),
        Ok(report) => (StatusCode::OK, Json(ScrapeResponse::scraped(report.inserted))),
        Err(e) => {
            error!("ingestion run failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ScrapeResponse::failure(e.to_string())),
            )
        }
    }
}

/// GET /api/v1/jobs
///
/// The dashboard's listing query: most recent postings first.
pub async fn handle_list_jobs(
    State(state): State<AppState>,
) -> Result<Json<Vec<JobListingRow>>, AppError> {
    let jobs = sqlx::query_as::<_, JobListingRow>(
        "SELECT * FROM job_listings ORDER BY created_at DESC LIMIT 20",
    )
    .fetch_all(&state.db)
    .await?;

    Ok(Json(jobs))
}
