//! Naukri (RapidAPI) provider.
//!
//! Same search key as JSearch, different host and response shape — Naukri
//! nests records under `jobDetails` with camelCase fields.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;

use crate::ingestion::providers::{JobProvider, ProviderError, PLACEHOLDER_URL, UNKNOWN_COMPANY};
use crate::ingestion::{SEARCH_KEYWORD, SEARCH_REGION};
use crate::models::job::{NewJobPosting, Platform};

const SEARCH_URL: &str = "https://naukri-jobs-api.p.rapidapi.com/jobs/search";
const RAPIDAPI_HOST: &str = "naukri-jobs-api.p.rapidapi.com";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NaukriResponse {
    #[serde(default)]
    pub job_details: Vec<NaukriJob>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NaukriJob {
    pub title: String,
    pub company_name: Option<String>,
    pub location: Option<String>,
    pub salary: Option<String>,
    pub job_description: Option<String>,
    pub job_url: Option<String>,
    pub posted_on: Option<DateTime<Utc>>,
}

pub struct NaukriProvider {
    client: Client,
}

impl NaukriProvider {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl JobProvider for NaukriProvider {
    fn platform(&self) -> Platform {
        Platform::Naukri
    }

    async fn fetch(&self, api_key: &str) -> Result<Vec<NewJobPosting>, ProviderError> {
        let response = self
            .client
            .get(SEARCH_URL)
            .header("X-RapidAPI-Key", api_key)
            .header("X-RapidAPI-Host", RAPIDAPI_HOST)
            .query(&[("query", SEARCH_KEYWORD), ("location", SEARCH_REGION)])
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
        let parsed: NaukriResponse = serde_json::from_str(&body)?;

        Ok(parsed.job_details.into_iter().map(normalize).collect())
    }
}

fn normalize(job: NaukriJob) -> NewJobPosting {
    NewJobPosting {
        job_title: job.title,
        company_name: job
            .company_name
            .unwrap_or_else(|| UNKNOWN_COMPANY.to_string()),
        location: job.location,
        platform: Platform::Naukri,
        job_description: job.job_description,
        salary_range: job.salary,
        job_url: job.job_url.unwrap_or_else(|| PLACEHOLDER_URL.to_string()),
        posted_date: job.posted_on.unwrap_or_else(Utc::now),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "jobDetails": [
            {
                "title": "PHP Developer - WordPress",
                "companyName": "Web Solutions Co",
                "location": "Hyderabad",
                "salary": "4-7 LPA",
                "jobDescription": "Custom theme and plugin development.",
                "jobUrl": "https://www.naukri.com/job-listings-wordpress-php-developer",
                "postedOn": "2026-07-28T12:00:00Z"
            },
            {
                "title": "Junior PHP Developer"
            }
        ]
    }"#;

    #[test]
    fn decodes_camel_case_payload() {
        let parsed: NaukriResponse = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(parsed.job_details.len(), 2);
        assert_eq!(
            parsed.job_details[0].company_name.as_deref(),
            Some("Web Solutions Co")
        );
    }

    #[test]
    fn normalize_tags_the_naukri_platform() {
        let parsed: NaukriResponse = serde_json::from_str(SAMPLE).unwrap();
        let posting = normalize(parsed.job_details.into_iter().next().unwrap());

        assert_eq!(posting.platform, Platform::Naukri);
        assert_eq!(posting.salary_range.as_deref(), Some("4-7 LPA"));
        assert_eq!(
            posting.job_url,
            "https://www.naukri.com/job-listings-wordpress-php-developer"
        );
    }

    #[test]
    fn normalize_defaults_missing_fields() {
        let parsed: NaukriResponse = serde_json::from_str(SAMPLE).unwrap();
        let posting = normalize(parsed.job_details.into_iter().nth(1).unwrap());

        assert_eq!(posting.company_name, UNKNOWN_COMPANY);
        assert_eq!(posting.job_url, PLACEHOLDER_URL);
    }

    #[test]
    fn empty_body_yields_no_postings() {
        let parsed: NaukriResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.job_details.is_empty());
    }
}
