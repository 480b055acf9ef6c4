//! HTTP surface for LLM-assisted Mermaid editing.
//!
//! One worthwhile route: `POST /modify` takes a diagram plus natural-language
//! edit instructions, runs a generation call against the configured model, and
//! returns the post-processed diagram.

mod config;
mod error;
mod modify;
mod state;

use crate::config::ServerConfig;
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use selkie::GeminiClient;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/modify", post(modify::modify))
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let oracle = GeminiClient::new(config.api_key.clone())?.with_model(config.model.clone());
    let state = AppState {
        oracle: Arc::new(oracle),
    };

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %config.bind_addr, model = %config.model, "merrow-server listening");
    axum::serve(listener, router(state)).await?;
    Ok(())
}
