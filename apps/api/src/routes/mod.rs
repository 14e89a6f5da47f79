pub mod frontend;
pub mod health;
pub mod resume;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Form Collector (static, embedded at compile time)
        .route("/", get(frontend::index))
        .route("/script.js", get(frontend::script))
        .route("/style.css", get(frontend::stylesheet))
        // Resume Renderer
        .route("/generate-resume", post(resume::handle_generate_resume))
        .fallback(not_found)
        .with_state(state)
}
