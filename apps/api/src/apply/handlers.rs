//! Axum route handler for the apply entry point.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

use crate::apply::cover_letter::generate_cover_letter;
use crate::apply::recorder::record_application;
use crate::models::application::ApplicationStatus;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// User scoping is explicit — there is no ambient authenticated-user context.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyRequest {
    pub user_id: Uuid,
    pub job_id: Uuid,
    pub job_title: String,
    pub company_name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_letter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApplyResponse {
    fn ok(cover_letter: String) -> Self {
        Self {
            success: true,
            cover_letter: Some(cover_letter),
            error: None,
        }
    }

    fn failure(error: String) -> Self {
        Self {
            success: false,
            cover_letter: None,
            error: Some(error),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handler
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/applications/apply
///
/// Generates a cover letter, then records the application. The two effects
/// are sequential with no atomicity between them: a failed insert after a
/// successful generation discards the letter and reports failure.
pub async fn handle_apply(
    State(state): State<AppState>,
    Json(request): Json<ApplyRequest>,
) -> (StatusCode, Json<ApplyResponse>) {
    match apply(&state, &request).await {
        Ok(cover_letter) => (StatusCode::OK, Json(ApplyResponse::ok(cover_letter))),
        Err(e) => {
            error!("apply failed for job {}: {e:#}", request.job_id);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApplyResponse::failure(e.to_string())),
            )
        }
    }
}

async fn apply(state: &AppState, request: &ApplyRequest) -> anyhow::Result<String> {
    // The platform comes from the stored posting, not the client.
    let platform: String = sqlx::query_scalar("SELECT platform FROM job_listings WHERE id = $1")
        .bind(request.job_id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Job {} not found", request.job_id))?;

    let cover_letter =
        generate_cover_letter(&state.llm, &request.job_title, &request.company_name).await?;

    record_application(
        &state.db,
        request.user_id,
        request.job_id,
        &platform,
        ApplicationStatus::Applied,
        Some(&cover_letter),
    )
    .await?;

    Ok(cover_letter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_uses_camel_case() {
        let body = serde_json::to_value(ApplyResponse::ok("Dear team".to_string())).unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["coverLetter"], "Dear team");
        assert!(body.get("error").is_none());
    }

    #[test]
    fn failure_envelope_omits_the_letter() {
        let body =
            serde_json::to_value(ApplyResponse::failure("Failed to apply".to_string())).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Failed to apply");
        assert!(body.get("coverLetter").is_none());
    }

    #[test]
    fn request_accepts_the_dashboard_payload() {
        let request: ApplyRequest = serde_json::from_str(
            r#"{
                "userId": "5f64a1c4-33ab-4f22-9d58-6b2f3a1a4f01",
                "jobId": "e4b1a3d2-8c1f-4e5a-9b0d-7c6f5e4d3c2b",
                "jobTitle": "Senior PHP Developer",
                "companyName": "Tech Solutions Pvt Ltd"
            }"#,
        )
        .unwrap();

        assert_eq!(request.job_title, "Senior PHP Developer");
        assert_eq!(request.company_name, "Tech Solutions Pvt Ltd");
    }
}
