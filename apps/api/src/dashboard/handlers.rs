use axum::{
    extract::{Query, State},
    Json,
};

use crate::dashboard::{fold_counts, ApplicationStats};
use crate::errors::AppError;
use crate::models::application::ApplicationRow;
use crate::routes::UserIdQuery;
use crate::state::AppState;

/// GET /api/v1/dashboard/stats
///
/// Folds the user's application records into the four dashboard counters.
pub async fn handle_stats(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ApplicationStats>, AppError> {
    let applications = sqlx::query_as::<_, ApplicationRow>(
        "SELECT * FROM applications WHERE user_id = $1",
    )
    .bind(params.user_id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(fold_counts(
        applications.iter().map(|a| a.status.as_str()),
    )))
}
