use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// `DATABASE_URL` is required at startup. The two external API keys are
/// optional here and checked by the entry points that depend on them; a
/// missing key is fatal for that entry point only.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub job_search_api_key: Option<String>,
    pub llm_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            job_search_api_key: optional_env("JOB_SEARCH_API_KEY"),
            llm_api_key: optional_env("LLM_API_KEY"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}
