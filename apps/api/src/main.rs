mod agents;
mod config;
mod errors;
mod evaluators;
mod interview;
mod llm_client;
mod models;
mod routes;
mod runner;
mod sessions;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::agents::AGENTS;
use crate::config::Config;
use crate::evaluators::{LlmScorer, Scorer};
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::sessions::{InMemorySessionStore, SessionStore};
use crate::state::AppState;
use crate::store::StoreError;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Greenroom API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client and the scoring seam over it
    let llm = LlmClient::new(config.anthropic_api_key.clone());
    let scoring: Arc<dyn Scorer> = Arc::new(LlmScorer::new(llm.clone()));
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    for agent in AGENTS {
        info!("Registered agent {}: {}", agent.name, agent.description);
    }

    // Conversational state lives in-process for now
    let sessions: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
    info!(
        "Session store initialized; plan={} session={}",
        config.plan_path.display(),
        config.session_path.display()
    );

    match store::load_json(&config.plan_path) {
        Ok(_) => info!("Interview plan found at {}", config.plan_path.display()),
        Err(StoreError::NotFound(_)) => {
            info!("No interview plan yet; run interview_planner_agent to create one")
        }
        Err(e) => warn!("Interview plan is unreadable: {e}"),
    }

    // Build app state
    let state = AppState {
        llm,
        scoring,
        sessions,
        config: config.clone(),
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
