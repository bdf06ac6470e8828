pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod provider;
pub mod ui;

use std::sync::Arc;

use axum::Router;
use tracing::info;

use crate::config::RelayConfig;
use crate::provider::InferenceConfig;

/// Immutable state shared by every request.
#[derive(Clone, Debug)]
pub struct AppState {
    pub http: reqwest::Client,
    pub inference: InferenceConfig,
}

impl AppState {
    pub fn new(inference: InferenceConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            inference,
        }
    }
}

pub fn build_app(state: Arc<AppState>) -> Router {
    api::router(state)
}

pub async fn run_server(app: Router, cfg: &RelayConfig) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind((cfg.host.as_str(), cfg.port)).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await
}
