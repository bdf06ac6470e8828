use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::api::ErrorResponse;
use crate::provider::ProviderError;

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// The caller sent no usable question.
    #[error("No question provided")]
    Client,
    /// The provider answered with an error or could not be reached.
    #[error("Failed to get response: {0}")]
    Upstream(#[from] ProviderError),
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Client => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
