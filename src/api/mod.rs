mod handlers;
mod models;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::AppState;

pub use handlers::{chat, index, not_found};
pub use models::{ChatRequest, ChatResponse, ErrorResponse};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/chat", post(chat))
        .fallback(not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
