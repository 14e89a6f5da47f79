//! Axum route handler for résumé generation.

use axum::{
    body::Body,
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::Response,
    Json,
};
use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::models::ResumeSubmission;
use crate::render::render_resume_pdf;
use crate::state::AppState;
use crate::summarizer::{blurb::build_profile_blurb, summarize_or_fallback};

/// POST /generate-resume
///
/// Validates the submission, asks the summarizer for a profile summary
/// (falling back to a fixed text on failure) and returns the rendered PDF as
/// an attachment. Nothing is written to disk.
pub async fn handle_generate_resume(
    State(state): State<AppState>,
    payload: Result<Json<ResumeSubmission>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(submission) =
        payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;
    let resume = submission.validate()?;

    info!(
        applicant = %resume.name,
        skills = resume.skills.len(),
        has_experience = resume.experience.is_some(),
        "Received resume submission"
    );

    let blurb = build_profile_blurb(&resume);
    debug!(%blurb, "Requesting profile summary");
    let summary = summarize_or_fallback(state.summarizer.as_ref(), &blurb).await;

    let generated_at = Utc::now();
    let page_config = state.page_config.clone();
    let rendered = tokio::task::spawn_blocking(move || {
        render_resume_pdf(&resume, &summary, &page_config, generated_at)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in PDF render: {e}")))??;

    let filename = download_filename(generated_at);
    info!(
        bytes = rendered.bytes.len(),
        pages = rendered.page_count,
        %filename,
        "Resume PDF rendered"
    );

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/pdf")
        .header(header::CONTENT_LENGTH, rendered.bytes.len())
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        )
        .body(Body::from(rendered.bytes))
        .map_err(|e| AppError::Internal(e.into()))
}

/// `resume_<unix-millis>.pdf`
fn download_filename(generated_at: DateTime<Utc>) -> String {
    format!("resume_{}.pdf", generated_at.timestamp_millis())
}
