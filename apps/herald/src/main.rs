mod config;
mod errors;
mod generation;
mod llm_client;
mod models;
mod profile;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::{AnthropicClient, CannedGenerator, TextGenerator, CANNED_OUTPUT};
use crate::profile::ProfileStore;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Herald API v{}", env!("CARGO_PKG_VERSION"));

    // Pick the generation backend: canned in test mode, Claude otherwise
    let generator: Arc<dyn TextGenerator> = match (&config.anthropic_api_key, config.test_mode) {
        (_, true) => {
            info!("TEST_MODE enabled — canned generator, no model calls");
            Arc::new(CannedGenerator::new(CANNED_OUTPUT))
        }
        (Some(api_key), false) => {
            let client = AnthropicClient::new(api_key.clone(), config.llm_timeout);
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Arc::new(client)
        }
        (None, false) => {
            anyhow::bail!("Required environment variable 'ANTHROPIC_API_KEY' is not set")
        }
    };

    // Build app state — the profile slot starts empty every boot
    let state = AppState {
        generator,
        profiles: ProfileStore::new(),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // the extension calls from arbitrary page origins

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
