mod config;
mod errors;
mod layout;
mod models;
mod render;
mod routes;
mod state;
mod summarizer;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::layout::default_page_config;
use crate::routes::build_router;
use crate::state::AppState;
use crate::summarizer::HuggingFaceSummarizer;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (exits on a missing HUGGINGFACE_API_KEY)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SmartResume API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize summarization client
    let summarizer = HuggingFaceSummarizer::new(
        config.huggingface_api_key.clone(),
        config.summary_api_url.clone(),
        Duration::from_secs(config.summary_timeout_secs),
    )?;
    info!("Summarizer initialized (endpoint: {})", summarizer.endpoint());

    let page_config = default_page_config();
    info!(
        "Page config: {}x{}pt, {}pt margins",
        page_config.page_width_pt, page_config.page_height_pt, page_config.margin_pt
    );

    let state = AppState {
        summarizer: Arc::new(summarizer),
        page_config,
    };

    // The form may be opened from another origin (e.g. a static file server).
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
