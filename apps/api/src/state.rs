use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::ModelService;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Holds no roadmaps or chat logs; clients own those.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable model backend. Default: `GeminiClient`.
    pub model: Arc<dyn ModelService>,
    pub config: Config,
}

#[cfg(test)]
pub fn test_state(model: Arc<dyn ModelService>) -> AppState {
    AppState {
        model,
        config: Config {
            gemini_api_key: "test-key".to_string(),
            gemini_model: crate::llm_client::DEFAULT_MODEL.to_string(),
            gemini_base_url: "http://127.0.0.1:0".to_string(),
            llm_timeout_secs: 5,
            port: 0,
            rust_log: "debug".to_string(),
        },
    }
}
