//! JSearch (RapidAPI) provider — LinkedIn postings.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;

use crate::ingestion::providers::{JobProvider, ProviderError, PLACEHOLDER_URL, UNKNOWN_COMPANY};
use crate::ingestion::{SEARCH_KEYWORD, SEARCH_REGION};
use crate::models::job::{NewJobPosting, Platform};

const SEARCH_URL: &str = "https://jsearch.p.rapidapi.com/search";
const RAPIDAPI_HOST: &str = "jsearch.p.rapidapi.com";

// ────────────────────────────────────────────────────────────────────────────
// Response DTOs
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct JsearchResponse {
    #[serde(default)]
    pub data: Vec<JsearchJob>,
}

/// One JSearch record. `job_title` is the only field the API guarantees;
/// everything else is nullable and normalized with defaults.
#[derive(Debug, Deserialize)]
pub struct JsearchJob {
    pub job_title: String,
    pub employer_name: Option<String>,
    pub job_city: Option<String>,
    pub job_country: Option<String>,
    pub job_apply_link: Option<String>,
    pub job_description: Option<String>,
    pub job_min_salary: Option<f64>,
    pub job_max_salary: Option<f64>,
    pub job_posted_at_datetime_utc: Option<DateTime<Utc>>,
}

pub struct JsearchProvider {
    client: Client,
}

impl JsearchProvider {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl JobProvider for JsearchProvider {
    fn platform(&self) -> Platform {
        Platform::Linkedin
    }

    async fn fetch(&self, api_key: &str) -> Result<Vec<NewJobPosting>, ProviderError> {
        let query = format!("{SEARCH_KEYWORD} in {SEARCH_REGION}");

        let response = self
            .client
            .get(SEARCH_URL)
            .header("X-RapidAPI-Key", api_key)
            .header("X-RapidAPI-Host", RAPIDAPI_HOST)
            .query(&[("query", query.as_str()), ("page", "1"), ("num_pages", "1")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let parsed: JsearchResponse = serde_json::from_str(&body)?;

        Ok(parsed.data.into_iter().map(normalize).collect())
    }
}

/// Maps one JSearch record to the common posting schema, filling the
/// documented defaults for fields the source omits.
fn normalize(job: JsearchJob) -> NewJobPosting {
    let salary_range = match (job.job_min_salary, job.job_max_salary) {
        (Some(min), Some(max)) => Some(format!("{min:.0}-{max:.0}")),
        (Some(min), None) => Some(format!("{min:.0}+")),
        _ => None,
    };

    let location = match (job.job_city, job.job_country) {
        (Some(city), _) => Some(city),
        (None, Some(country)) => Some(country),
        (None, None) => None,
    };

    NewJobPosting {
        job_title: job.job_title,
        company_name: job
            .employer_name
            .unwrap_or_else(|| UNKNOWN_COMPANY.to_string()),
        location,
        platform: Platform::Linkedin,
        job_description: job.job_description,
        salary_range,
        job_url: job
            .job_apply_link
            .unwrap_or_else(|| PLACEHOLDER_URL.to_string()),
        posted_date: job.job_posted_at_datetime_utc.unwrap_or_else(Utc::now),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "status": "OK",
        "data": [
            {
                "job_title": "Senior PHP Developer",
                "employer_name": "Tech Solutions Pvt Ltd",
                "job_city": "Hyderabad",
                "job_country": "IN",
                "job_apply_link": "https://www.linkedin.com/jobs/view/123",
                "job_description": "Laravel expertise required.",
                "job_min_salary": 800000.0,
                "job_max_salary": 1200000.0,
                "job_posted_at_datetime_utc": "2026-08-01T09:30:00Z"
            },
            {
                "job_title": "PHP Backend Developer"
            }
        ]
    }"#;

    #[test]
    fn decodes_sample_payload() {
        let parsed: JsearchResponse = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(parsed.data.len(), 2);
        assert_eq!(parsed.data[0].job_title, "Senior PHP Developer");
        assert!(parsed.data[1].employer_name.is_none());
    }

    #[test]
    fn normalize_keeps_source_fields() {
        let parsed: JsearchResponse = serde_json::from_str(SAMPLE).unwrap();
        let posting = normalize(parsed.data.into_iter().next().unwrap());

        assert_eq!(posting.company_name, "Tech Solutions Pvt Ltd");
        assert_eq!(posting.location.as_deref(), Some("Hyderabad"));
        assert_eq!(posting.platform, Platform::Linkedin);
        assert_eq!(posting.salary_range.as_deref(), Some("800000-1200000"));
        assert_eq!(posting.job_url, "https://www.linkedin.com/jobs/view/123");
    }

    #[test]
    fn normalize_defaults_missing_fields() {
        let before = Utc::now();
        let parsed: JsearchResponse = serde_json::from_str(SAMPLE).unwrap();
        let posting = normalize(parsed.data.into_iter().nth(1).unwrap());

        assert_eq!(posting.company_name, UNKNOWN_COMPANY);
        assert_eq!(posting.job_url, PLACEHOLDER_URL);
        assert!(posting.location.is_none());
        assert!(posting.salary_range.is_none());
        assert!(posting.posted_date >= before);
    }

    #[test]
    fn malformed_payload_is_a_decode_error() {
        let result: Result<JsearchResponse, _> =
            serde_json::from_str(r#"{"data": [{"employer_name": "No Title Inc"}]}"#);
        assert!(result.is_err());
    }
}
