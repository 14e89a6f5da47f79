use std::sync::Arc;

use crate::layout::PageConfig;
use crate::summarizer::Summarizer;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup; every request gets its own clone.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable summarizer. Default: the hosted Hugging Face model.
    pub summarizer: Arc<dyn Summarizer>,
    /// Page geometry and typography for every rendered résumé.
    pub page_config: PageConfig,
}
