//! Axum route handlers for the preferences API.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::preferences::UserPreferencesRow;
use crate::preferences::{join_csv, split_csv};
use crate::routes::UserIdQuery;
use crate::state::AppState;

/// Wire shape of the settings panel: list-valued fields travel as
/// comma-joined strings; the storage layer holds real arrays.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesView {
    pub user_id: Uuid,
    pub keywords: String,
    pub locations: String,
    pub min_experience: i32,
    pub max_experience: i32,
    pub auto_apply_enabled: bool,
    pub daily_limit: i32,
    pub linkedin_email: String,
    pub naukri_email: String,
}

impl PreferencesView {
    /// Defaults shown before a user has saved anything.
    fn empty(user_id: Uuid) -> Self {
        Self {
            user_id,
            keywords: String::new(),
            locations: String::new(),
            min_experience: 0,
            max_experience: 10,
            auto_apply_enabled: false,
            daily_limit: 10,
            linkedin_email: String::new(),
            naukri_email: String::new(),
        }
    }

    fn from_row(row: UserPreferencesRow) -> Self {
        Self {
            user_id: row.user_id,
            keywords: join_csv(&row.keywords),
            locations: join_csv(&row.location_preferences),
            min_experience: row.min_experience,
            max_experience: row.max_experience,
            auto_apply_enabled: row.auto_apply_enabled,
            daily_limit: row.daily_apply_limit,
            linkedin_email: row.linkedin_email.unwrap_or_default(),
            naukri_email: row.naukri_email.unwrap_or_default(),
        }
    }
}

/// GET /api/v1/preferences
pub async fn handle_get_preferences(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<PreferencesView>, AppError> {
    let row: Option<UserPreferencesRow> =
        sqlx::query_as("SELECT * FROM user_preferences WHERE user_id = $1")
            .bind(params.user_id)
            .fetch_optional(&state.db)
            .await?;

    Ok(Json(match row {
        Some(row) => PreferencesView::from_row(row),
        None => PreferencesView::empty(params.user_id),
    }))
}

/// PUT /api/v1/preferences
///
/// Replace-all upsert keyed on user_id. The storage layer accepts any
/// integers; the dashboard constrains its own input widgets (1-50 daily
/// limit, min <= max experience).
pub async fn handle_save_preferences(
    State(state): State<AppState>,
    Json(view): Json<PreferencesView>,
) -> Result<StatusCode, AppError> {
    sqlx::query(
        r#"
        INSERT INTO user_preferences
            (user_id, keywords, location_preferences, min_experience, max_experience,
             auto_apply_enabled, daily_apply_limit, linkedin_email, naukri_email, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, now())
        ON CONFLICT (user_id) DO UPDATE SET
            keywords = EXCLUDED.keywords,
            location_preferences = EXCLUDED.location_preferences,
            min_experience = EXCLUDED.min_experience,
            max_experience = EXCLUDED.max_experience,
            auto_apply_enabled = EXCLUDED.auto_apply_enabled,
            daily_apply_limit = EXCLUDED.daily_apply_limit,
            linkedin_email = EXCLUDED.linkedin_email,
            naukri_email = EXCLUDED.naukri_email,
            updated_at = now()
        "#,
    )
    .bind(view.user_id)
    .bind(split_csv(&view.keywords))
    .bind(split_csv(&view.locations))
    .bind(view.min_experience)
    .bind(view.max_experience)
    .bind(view.auto_apply_enabled)
    .bind(view.daily_limit)
    .bind(empty_to_null(&view.linkedin_email))
    .bind(empty_to_null(&view.naukri_email))
    .execute(&state.db)
    .await?;

    Ok(StatusCode::NO_CONTENT)
}

fn empty_to_null(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn view_round_trips_through_a_row() {
        let user_id = Uuid::new_v4();
        let row = UserPreferencesRow {
            user_id,
            keywords: vec!["php".to_string(), "developer".to_string()],
            location_preferences: vec!["Remote".to_string(), "Bangalore".to_string()],
            min_experience: 2,
            max_experience: 8,
            auto_apply_enabled: true,
            daily_apply_limit: 25,
            linkedin_email: Some("dev@example.com".to_string()),
            naukri_email: None,
            updated_at: Utc::now(),
        };

        let view = PreferencesView::from_row(row);
        assert_eq!(view.keywords, "php, developer");
        assert_eq!(view.locations, "Remote, Bangalore");
        assert_eq!(view.linkedin_email, "dev@example.com");
        assert_eq!(view.naukri_email, "");

        // what the save path would write back
        assert_eq!(split_csv(&view.keywords), vec!["php", "developer"]);
        assert_eq!(split_csv(&view.locations), vec!["Remote", "Bangalore"]);
    }

    #[test]
    fn empty_view_matches_the_panel_defaults() {
        let view = PreferencesView::empty(Uuid::new_v4());
        assert_eq!(view.keywords, "");
        assert_eq!(view.min_experience, 0);
        assert_eq!(view.max_experience, 10);
        assert_eq!(view.daily_limit, 10);
        assert!(!view.auto_apply_enabled);
    }

    #[test]
    fn view_serializes_with_camel_case_keys() {
        let body = serde_json::to_value(PreferencesView::empty(Uuid::new_v4())).unwrap();
        assert!(body.get("minExperience").is_some());
        assert!(body.get("autoApplyEnabled").is_some());
        assert!(body.get("dailyLimit").is_some());
        assert!(body.get("linkedinEmail").is_some());
    }

    #[test]
    fn blank_emails_store_as_null() {
        assert_eq!(empty_to_null("  "), None);
        assert_eq!(empty_to_null("a@b.c"), Some("a@b.c"));
    }
}
