//! Job ingestion: query each registered provider, normalize, write new rows.
//!
//! Providers are independent — one failing is logged and skipped, partial
//! results are acceptable. All network-facing response parsing happens behind
//! the typed DTOs in `providers`; nothing downstream touches raw JSON.

pub mod handlers;
pub mod providers;
pub mod writer;

use sqlx::PgPool;
use tracing::{info, warn};

use crate::ingestion::providers::JobProvider;
use crate::ingestion::writer::insert_new_postings;
use crate::models::job::NewJobPosting;

/// Fixed search terms for every scrape run.
pub const SEARCH_KEYWORD: &str = "PHP Developer";
pub const SEARCH_REGION: &str = "India";

/// Outcome of one ingestion run.
#[derive(Debug)]
pub struct IngestionReport {
    /// Postings collected across all providers, before deduplication.
    pub fetched: usize,
    /// Rows actually written (conflicting URLs are silently dropped).
    pub inserted: u64,
}

/// Runs one ingestion pass. The merged list preserves provider registration
/// order; provider failures skip that provider only. Storage errors
/// propagate to the caller.
pub async fn run_ingestion(
    pool: &PgPool,
    providers: &[Box<dyn JobProvider>],
    api_key: &str,
) -> Result<IngestionReport, sqlx::Error> {
    let mut postings: Vec<NewJobPosting> = Vec::new();

    for provider in providers {
        let platform = provider.platform().as_str();
        match provider.fetch(api_key).await {
            Ok(mut batch) => {
                info!("{platform} returned {} postings", batch.len());
                postings.append(&mut batch);
            }
            Err(e) => {
                warn!("{platform} provider failed, skipping: {e}");
            }
        }
    }

    let fetched = postings.len();
    let inserted = insert_new_postings(pool, postings).await?;

    Ok(IngestionReport { fetched, inserted })
}
