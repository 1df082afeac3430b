mod chat;
mod config;
mod contact;
mod context_store;
mod errors;
mod llm_client;
mod mailer;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::context_store::ContextStore;
use crate::llm_client::GroqClient;
use crate::mailer::ResendClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("portfolio_api={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio API v{}", env!("CARGO_PKG_VERSION"));

    // Load the resume context (fails fast on a malformed asset)
    let context = Arc::new(ContextStore::from_embedded_asset()?);
    info!("Context store loaded ({} sections)", context.all_sections().len());

    // Initialize provider clients
    let completer = Arc::new(GroqClient::new(config.groq_api_key.clone()));
    info!("Completion client initialized (model: {})", llm_client::MODEL);

    let mailer = Arc::new(ResendClient::new(config.resend_api_key.clone()));
    info!("Email client initialized");

    // Build app state
    let state = AppState {
        completer,
        mailer,
        context,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
