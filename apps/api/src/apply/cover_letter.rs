use tracing::info;

use crate::apply::prompts::{build_cover_letter_prompt, COVER_LETTER_SYSTEM};
use crate::llm_client::{LlmClient, LlmError};

/// Substituted when the gateway answers successfully but with no content.
pub const FALLBACK_COVER_LETTER: &str = "Default cover letter";

/// Generates a cover letter for one posting. Configuration and gateway
/// failures are terminal for the call; an empty completion falls back to a
/// fixed letter instead of failing.
pub async fn generate_cover_letter(
    llm: &LlmClient,
    job_title: &str,
    company_name: &str,
) -> Result<String, LlmError> {
    info!("Generating AI cover letter for {job_title} at {company_name}");

    let prompt = build_cover_letter_prompt(job_title, company_name);
    let response = llm.chat(COVER_LETTER_SYSTEM, &prompt).await?;

    Ok(response
        .first_content()
        .map(String::from)
        .unwrap_or_else(|| FALLBACK_COVER_LETTER.to_string()))
}
