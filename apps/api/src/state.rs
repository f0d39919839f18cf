use std::sync::Arc;

use crate::config::Config;
use crate::evaluators::Scorer;
use crate::llm_client::LlmClient;
use crate::sessions::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    /// Injected scoring seam; LLM-backed in production.
    pub scoring: Arc<dyn Scorer>,
    /// Injected conversational store; in-memory by default.
    pub sessions: Arc<dyn SessionStore>,
    pub config: Config,
}
