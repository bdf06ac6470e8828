use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

use qa_relay::client::RelayClient;
use qa_relay::config::{Cli, Command, RelayConfig};
use qa_relay::{build_app, run_server, ui, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("qa_relay=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Serve(cfg) => serve(cfg).await,
        Command::Ui(client) => {
            let relay = RelayClient::new(&client.relay_url);
            ui::run(&relay, BufReader::new(tokio::io::stdin()), tokio::io::stdout())
                .await
                .context("terminal form failed")
        }
        Command::Ask { client, question } => {
            let relay = RelayClient::new(&client.relay_url);
            println!("{}", ui::submit(&relay, &question).await);
            Ok(())
        }
    }
}

async fn serve(cfg: RelayConfig) -> Result<()> {
    anyhow::ensure!(
        !cfg.api_key.trim().is_empty(),
        "HUGGINGFACE_API_KEY must not be empty"
    );

    let state = Arc::new(AppState::new(cfg.inference()));
    info!(endpoint = state.inference.endpoint(), "relaying questions");

    run_server(build_app(state), &cfg)
        .await
        .with_context(|| format!("relay server on {}:{} failed", cfg.host, cfg.port))
}
