#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Status written by the apply flow. Rows are read back as raw strings so
/// values outside this taxonomy still count toward dashboard totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Applied,
    Success,
    Failed,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Applied => "applied",
            ApplicationStatus::Success => "success",
            ApplicationStatus::Failed => "failed",
        }
    }
}

/// One apply attempt. Rows are inserted once and never updated in place.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ApplicationRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub job_id: Uuid,
    pub platform: String,
    pub status: String,
    pub cover_letter: Option<String>,
    pub created_at: DateTime<Utc>,
}
