mod analysis;
mod config;
mod errors;
mod extract;
mod llm_client;
mod locale;
mod render;
mod routes;
mod state;
mod wizard;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::{Analyzer, LlmAnalyzer};
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::wizard::store::SessionStore;

const SWEEP_INTERVAL_SECS: u64 = 60;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting LexGuard API v{}", env!("CARGO_PKG_VERSION"));

    let llm = LlmClient::new(config.api_key.clone())?;
    if llm.has_credential() {
        info!("LLM client initialized (model: {})", llm_client::MODEL);
    } else {
        warn!("API_KEY is not set; analyses will fail until it is configured");
    }

    let analyzer: Arc<dyn Analyzer> = Arc::new(LlmAnalyzer::new(llm));

    let sessions = SessionStore::new(config.session_ttl);
    sessions.spawn_sweeper(Duration::from_secs(SWEEP_INTERVAL_SECS));
    info!("Idle sessions expire after {} minutes", config.session_ttl.as_secs() / 60);

    let state = AppState {
        sessions,
        analyzer,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
