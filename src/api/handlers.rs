use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use tracing::{debug, info, warn};

use crate::error::RelayError;
use crate::provider;
use crate::AppState;

use super::models::{ChatRequest, ChatResponse, ErrorResponse};

const INDEX_HTML: &str = include_str!("../../assets/index.html");

pub async fn chat(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, RelayError> {
    // An unreadable body is treated the same as a missing question.
    let question = match payload {
        Ok(Json(ChatRequest {
            question: Some(question),
        })) if !question.is_empty() => question,
        Ok(_) => return Err(RelayError::Client),
        Err(rejection) => {
            debug!(%rejection, "rejected chat body");
            return Err(RelayError::Client);
        }
    };

    info!(chars = question.chars().count(), "forwarding question");

    match provider::generate(&state.http, &state.inference, &question).await {
        Ok(answer) => Ok(Json(ChatResponse { answer })),
        Err(err) => {
            warn!(error = %err, "inference provider call failed");
            Err(err.into())
        }
    }
}

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not found".to_string(),
        }),
    )
        .into_response()
}
