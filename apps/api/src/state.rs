use std::sync::Arc;

use crate::analysis::Analyzer;
use crate::config::Config;
use crate::wizard::store::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    /// Pluggable analysis backend. Default: LlmAnalyzer over the generative API.
    pub analyzer: Arc<dyn Analyzer>,
    pub config: Config,
}
