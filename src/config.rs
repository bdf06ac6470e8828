//! Command line and environment configuration.

use clap::{Args, Parser, Subcommand};

use crate::provider::InferenceConfig;

pub const DEFAULT_API_URL: &str =
    "https://api-inference.huggingface.co/models/mistralai/Mistral-7B-Instruct";

#[derive(Parser, Debug)]
#[command(name = "qa-relay")]
#[command(author, version, about = "Relay questions to a hosted text-generation model", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the relay service
    Serve(RelayConfig),
    /// Interactive terminal form that asks the relay service
    Ui(ClientConfig),
    /// Ask a single question and print the answer
    Ask {
        #[command(flatten)]
        client: ClientConfig,

        /// The question to send
        question: String,
    },
}

/// Settings for the relay service, read once at start-up.
#[derive(Args, Debug, Clone)]
pub struct RelayConfig {
    /// Address to bind the HTTP listener to
    #[arg(long, env = "RELAY_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Inference endpoint questions are forwarded to
    #[arg(long, env = "HUGGINGFACE_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Bearer credential for the inference endpoint
    #[arg(long, env = "HUGGINGFACE_API_KEY", hide_env_values = true)]
    pub api_key: String,
}

impl RelayConfig {
    pub fn inference(&self) -> InferenceConfig {
        InferenceConfig::new(&self.api_url, &self.api_key)
    }
}

#[derive(Args, Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the relay service
    #[arg(long, env = "RELAY_URL", default_value = "http://localhost:5000")]
    pub relay_url: String,
}
