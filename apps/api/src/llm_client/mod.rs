/// LLM Client — the single point of entry for all chat-completion calls.
///
/// ARCHITECTURAL RULE: No other module may call the AI gateway directly.
/// All LLM interactions MUST go through this module.
///
/// Model: google/gemini-2.5-flash (hardcoded — do not make configurable to prevent drift)
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const CHAT_COMPLETIONS_URL: &str = "https://ai.gateway.lovable.dev/v1/chat/completions";
/// The model used for all LLM calls in JobScout.
pub const MODEL: &str = "google/gemini-2.5-flash";
const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("LLM_API_KEY is not configured")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("AI gateway error (status {status}): {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
pub struct AssistantMessage {
    pub content: Option<String>,
}

impl ChatResponse {
    /// Content of the first completion, if the gateway returned any.
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// The single LLM client used by all services in JobScout.
/// Holds the key as loaded from the environment; a missing key fails each
/// call before any request is sent.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: Option<String>,
}

impl LlmClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    /// Sends one system turn and one user turn to the gateway and returns the
    /// raw response. Failures are terminal for the call; nothing is retried —
    /// the user re-triggers the action instead.
    pub async fn chat(&self, system: &str, user: &str) -> Result<ChatResponse, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::MissingApiKey)?;

        let request_body = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
        };

        let response = self
            .client
            .post(CHAT_COMPLETIONS_URL)
            .bearer_auth(api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let chat_response: ChatResponse = response.json().await?;

        debug!(
            "chat completion succeeded ({} choices)",
            chat_response.choices.len()
        );

        Ok(chat_response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_api_key_fails_before_any_request() {
        let client = LlmClient::new(None);
        let result = client.chat("system", "user").await;
        assert!(matches!(result, Err(LlmError::MissingApiKey)));
    }

    #[test]
    fn first_content_picks_first_choice() {
        let response: ChatResponse = serde_json::from_str(
            r#"{"choices": [
                {"message": {"role": "assistant", "content": "Dear hiring manager,"}},
                {"message": {"role": "assistant", "content": "second"}}
            ]}"#,
        )
        .unwrap();
        assert_eq!(response.first_content(), Some("Dear hiring manager,"));
    }

    #[test]
    fn first_content_is_none_for_empty_choices() {
        let response: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert_eq!(response.first_content(), None);

        let response: ChatResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(response.first_content(), None);
    }

    #[test]
    fn first_content_treats_blank_content_as_missing() {
        let response: ChatResponse = serde_json::from_str(
            r#"{"choices": [{"message": {"content": "   "}}]}"#,
        )
        .unwrap();
        assert_eq!(response.first_content(), None);
    }
}
