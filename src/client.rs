//! HTTP client for the relay's `/chat` endpoint.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

use crate::api::ChatRequest;
use crate::provider::FALLBACK_ANSWER;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("relay request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("relay answered with status {0}")]
    Status(StatusCode),
}

/// Anything that can turn a question into an answer.
#[async_trait]
pub trait Ask {
    async fn ask(&self, question: &str) -> Result<String, ClientError>;
}

#[derive(Deserialize)]
struct AnswerBody {
    answer: Option<String>,
}

pub struct RelayClient {
    http: reqwest::Client,
    chat_url: String,
}

impl RelayClient {
    pub fn new(relay_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            chat_url: format!("{}/chat", relay_url.trim_end_matches('/')),
        }
    }
}

#[async_trait]
impl Ask for RelayClient {
    async fn ask(&self, question: &str) -> Result<String, ClientError> {
        let response = self
            .http
            .post(&self.chat_url)
            .json(&ChatRequest {
                question: Some(question.to_string()),
            })
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            debug!(%status, "relay returned an error");
            return Err(ClientError::Status(status));
        }

        let body: AnswerBody = response.json().await?;
        Ok(body.answer.unwrap_or_else(|| FALLBACK_ANSWER.to_string()))
    }
}
