#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Source platform a posting was scraped from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Linkedin,
    Naukri,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Linkedin => "linkedin",
            Platform::Naukri => "naukri",
        }
    }
}

/// A posting normalized from a provider response, ready for insertion.
/// `job_url` is the natural key; postings without a real URL carry the
/// placeholder and collide on insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewJobPosting {
    pub job_title: String,
    pub company_name: String,
    pub location: Option<String>,
    pub platform: Platform,
    pub job_description: Option<String>,
    pub salary_range: Option<String>,
    pub job_url: String,
    pub posted_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobListingRow {
    pub id: Uuid,
    pub job_title: String,
    pub company_name: String,
    pub location: Option<String>,
    pub platform: String,
    pub job_description: Option<String>,
    pub salary_range: Option<String>,
    pub job_url: String,
    pub posted_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}
