//! Job-search providers.
//!
//! Each provider owns its request shape and response DTOs and returns
//! postings already normalized to the common schema. Responses are decoded
//! through serde into typed structs — a malformed payload is a
//! `ProviderError::Decode`, never a panic on a missing field.

pub mod jsearch;
pub mod naukri;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::job::{NewJobPosting, Platform};

pub use jsearch::JsearchProvider;
pub use naukri::NaukriProvider;

/// Company shown when a source omits one.
pub const UNKNOWN_COMPANY: &str = "Unknown Company";
/// Natural-key placeholder for postings without a link. All such rows
/// collide on insert and only the first survives.
pub const PLACEHOLDER_URL: &str = "#";

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("search API returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("failed to decode search response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A job-search provider.
///
/// Carried in `AppState` as `Arc<Vec<Box<dyn JobProvider>>>` and queried in
/// registration order on every scrape run. The shared search key is passed
/// per call so a missing key is caught before any provider is consulted.
#[async_trait]
pub trait JobProvider: Send + Sync {
    fn platform(&self) -> Platform;

    async fn fetch(&self, api_key: &str) -> Result<Vec<NewJobPosting>, ProviderError>;
}

/// Builds the provider set queried on every scrape run, in merge order.
pub fn default_providers() -> Vec<Box<dyn JobProvider>> {
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .expect("Failed to build HTTP client");

    vec![
        Box::new(JsearchProvider::new(client.clone())),
        Box::new(NaukriProvider::new(client)),
    ]
}
