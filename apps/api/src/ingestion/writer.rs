//! Deduplicating writer for normalized postings.

use std::collections::HashSet;

use sqlx::PgPool;
use tracing::debug;

use crate::models::job::NewJobPosting;

/// Writes postings with insert-or-ignore semantics keyed on `job_url` and
/// returns the number of rows actually written. The batch is deduped in
/// memory first (first occurrence wins) so a repeated URL within one run
/// behaves the same as a URL already present in storage: silently dropped,
/// no update, no error.
pub async fn insert_new_postings(
    pool: &PgPool,
    postings: Vec<NewJobPosting>,
) -> Result<u64, sqlx::Error> {
    let mut inserted = 0u64;

    for posting in dedupe_by_url(postings) {
        let result = sqlx::query(
            r#"
            INSERT INTO job_listings
                (job_title, company_name, location, platform, job_description,
                 salary_range, job_url, posted_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (job_url) DO NOTHING
            "#,
        )
        .bind(&posting.job_title)
        .bind(&posting.company_name)
        .bind(&posting.location)
        .bind(posting.platform.as_str())
        .bind(&posting.job_description)
        .bind(&posting.salary_range)
        .bind(&posting.job_url)
        .bind(posting.posted_date)
        .execute(pool)
        .await?;

        inserted += result.rows_affected();
    }

    debug!("insert_new_postings: {inserted} rows written");
    Ok(inserted)
}

/// Keeps the first posting for each URL, preserving order otherwise.
fn dedupe_by_url(postings: Vec<NewJobPosting>) -> Vec<NewJobPosting> {
    let mut seen = HashSet::new();
    postings
        .into_iter()
        .filter(|p| seen.insert(p.job_url.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::Platform;
    use chrono::Utc;

    fn posting(title: &str, url: &str) -> NewJobPosting {
        NewJobPosting {
            job_title: title.to_string(),
            company_name: "Acme".to_string(),
            location: None,
            platform: Platform::Linkedin,
            job_description: None,
            salary_range: None,
            job_url: url.to_string(),
            posted_date: Utc::now(),
        }
    }

    #[test]
    fn identical_urls_keep_only_the_first() {
        let deduped = dedupe_by_url(vec![
            posting("first", "https://example.com/a"),
            posting("second", "https://example.com/a"),
        ]);

        assert_eq!(deduped.len(), 1);
        assert_eq!(deduped[0].job_title, "first");
    }

    #[test]
    fn distinct_urls_all_survive_in_order() {
        let deduped = dedupe_by_url(vec![
            posting("a", "https://example.com/a"),
            posting("b", "https://example.com/b"),
            posting("c", "https://example.com/c"),
        ]);

        let titles: Vec<_> = deduped.iter().map(|p| p.job_title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
    }

    #[test]
    fn placeholder_urls_collapse_to_one() {
        let deduped = dedupe_by_url(vec![
            posting("a", "#"),
            posting("b", "#"),
            posting("c", "#"),
        ]);

        assert_eq!(deduped.len(), 1);
        assert_eq!(deduped[0].job_title, "a");
    }

    #[test]
    fn empty_batch_is_fine() {
        assert!(dedupe_by_url(Vec::new()).is_empty());
    }
}
