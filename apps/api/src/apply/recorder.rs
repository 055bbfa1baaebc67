use sqlx::PgPool;
use uuid::Uuid;

use crate::models::application::ApplicationStatus;

/// Inserts one application row. One row per apply attempt; the observed flow
/// never updates a row in place.
pub async fn record_application(
    pool: &PgPool,
    user_id: Uuid,
    job_id: Uuid,
    platform: &str,
    status: ApplicationStatus,
    cover_letter: Option<&str>,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO applications (user_id, job_id, platform, status, cover_letter)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(user_id)
    .bind(job_id)
    .bind(platform)
    .bind(status.as_str())
    .bind(cover_letter)
    .execute(pool)
    .await?;

    Ok(())
}
