#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A user's search configuration. One row per user, replaced wholesale on
/// save. `min_experience <= max_experience` is expected but not enforced
/// here; the dashboard constrains its own input widgets.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserPreferencesRow {
    pub user_id: Uuid,
    pub keywords: Vec<String>,
    pub location_preferences: Vec<String>,
    pub min_experience: i32,
    pub max_experience: i32,
    pub auto_apply_enabled: bool,
    pub daily_apply_limit: i32,
    pub linkedin_email: Option<String>,
    pub naukri_email: Option<String>,
    pub updated_at: DateTime<Utc>,
}
