// All LLM prompt constants for the apply flow.

/// System prompt — the persona sent with every cover letter request.
pub const COVER_LETTER_SYSTEM: &str = "You are a professional cover letter writer. \
    Generate concise, compelling cover letters for job applications.";

/// User prompt template. Replace `{job_title}` and `{company_name}` before sending.
pub const COVER_LETTER_PROMPT_TEMPLATE: &str =
    "Write a professional cover letter for a PHP Developer position at {company_name}. \
    The job title is: {job_title}. Keep it under 250 words, highlight relevant PHP skills, \
    and show enthusiasm.";

pub fn build_cover_letter_prompt(job_title: &str, company_name: &str) -> String {
    COVER_LETTER_PROMPT_TEMPLATE
        .replace("{company_name}", company_name)
        .replace("{job_title}", job_title)
}
