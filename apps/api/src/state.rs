use std::sync::Arc;

use crate::config::Config;
use crate::llm::ModelBackend;

/// Shared application state injected into all route handlers via Axum
/// extractors. The model backend sits behind a trait object so tests run
/// against a scripted backend instead of the Anthropic API.
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn ModelBackend>,
    /// Kept for handlers that need runtime settings (none currently read it).
    #[allow(dead_code)]
    pub config: Config,
}
