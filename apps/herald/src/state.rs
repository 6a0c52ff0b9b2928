use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;
use crate::profile::ProfileStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable text-generation backend. Default: the Claude client.
    /// Swapped for a canned generator via the TEST_MODE env var.
    pub generator: Arc<dyn TextGenerator>,
    /// Process-wide saved-profile slot, replaced wholesale on each update.
    pub profiles: ProfileStore,
    pub config: Config,
}
