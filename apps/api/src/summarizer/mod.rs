//! Summarizer: the single point of entry for the hosted summarization model.
//!
//! One best-effort call per request. Any failure is replaced by
//! `FALLBACK_SUMMARY` and the résumé is rendered regardless.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod blurb;

/// Text rendered in place of the summary when the external call fails.
pub const FALLBACK_SUMMARY: &str = "Summary generation failed.";

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Summarizer returned no summary text")]
    EmptySummary,
}

/// Produces a short summary of a piece of text.
///
/// Carried in `AppState` as `Arc<dyn Summarizer>`.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, text: &str) -> Result<String, SummaryError>;
}

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
}

#[derive(Debug, Deserialize)]
struct SummaryItem {
    summary_text: String,
}

#[derive(Debug, Deserialize)]
struct InferenceError {
    error: String,
}

/// Client for a Hugging Face style inference endpoint
/// (`POST {"inputs": ...}` → `[{"summary_text": ...}]`).
#[derive(Clone)]
pub struct HuggingFaceSummarizer {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl HuggingFaceSummarizer {
    pub fn new(api_key: String, endpoint: String, timeout: Duration) -> Result<Self, SummaryError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Summarizer for HuggingFaceSummarizer {
    async fn summarize(&self, text: &str) -> Result<String, SummaryError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&InferenceRequest { inputs: text })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<InferenceError>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            return Err(SummaryError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let summary = parse_summary(&body)?;
        debug!(chars = summary.len(), "Summarization call succeeded");
        Ok(summary)
    }
}

/// Extracts the first `summary_text` from an inference response body.
fn parse_summary(body: &str) -> Result<String, SummaryError> {
    let items: Vec<SummaryItem> = serde_json::from_str(body)?;
    items
        .into_iter()
        .map(|item| item.summary_text.trim().to_string())
        .find(|text| !text.is_empty())
        .ok_or(SummaryError::EmptySummary)
}

/// Runs the summarizer once; on any error logs it and returns `FALLBACK_SUMMARY`.
pub async fn summarize_or_fallback(summarizer: &dyn Summarizer, text: &str) -> String {
    match summarizer.summarize(text).await {
        Ok(summary) => summary,
        Err(e) => {
            warn!("Summary generation failed, using fallback: {e}");
            FALLBACK_SUMMARY.to_string()
        }
    }
}
