//! Outbound call to the hosted text-generation endpoint.

use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Answer used when the provider succeeds but returns no generated text.
pub const FALLBACK_ANSWER: &str = "No response received.";

#[derive(Clone)]
pub struct InferenceConfig {
    endpoint: String,
    api_key: String,
}

impl InferenceConfig {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

// Keeps the credential out of logs.
impl std::fmt::Debug for InferenceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InferenceConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("{body}")]
    Status { status: StatusCode, body: String },
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    inputs: &'a str,
}

/// Sends `question` to the provider and returns the generated text.
///
/// A success response that carries no `generated_text` in its first element
/// yields [`FALLBACK_ANSWER`]. Any non-success status is returned as
/// [`ProviderError::Status`] with the raw body untouched.
pub async fn generate(
    client: &reqwest::Client,
    cfg: &InferenceConfig,
    question: &str,
) -> Result<String, ProviderError> {
    let response = client
        .post(&cfg.endpoint)
        .bearer_auth(&cfg.api_key)
        .json(&GenerateRequest { inputs: question })
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        debug!(%status, "provider returned an error");
        return Err(ProviderError::Status { status, body });
    }

    Ok(extract_generated_text(&body).unwrap_or_else(|| FALLBACK_ANSWER.to_string()))
}

fn extract_generated_text(body: &str) -> Option<String> {
    let generations: Value = serde_json::from_str(body).ok()?;
    generations
        .as_array()?
        .first()?
        .get("generated_text")?
        .as_str()
        .map(str::to_string)
}
