use anyhow::{Context, Result};

/// Hosted summarization model used when `SUMMARY_API_URL` is not set.
pub const DEFAULT_SUMMARY_API_URL: &str =
    "https://api-inference.huggingface.co/models/facebook/bart-large-cnn";

/// Application configuration loaded from environment variables.
/// Startup fails if the summarization credential is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub huggingface_api_key: String,
    pub summary_api_url: String,
    pub summary_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup (the process env in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Config {
            huggingface_api_key: require(&lookup, "HUGGINGFACE_API_KEY")?,
            summary_api_url: lookup("SUMMARY_API_URL")
                .unwrap_or_else(|| DEFAULT_SUMMARY_API_URL.to_string()),
            summary_timeout_secs: lookup("SUMMARY_TIMEOUT_SECS")
                .unwrap_or_else(|| "30".to_string())
                .parse::<u64>()
                .context("SUMMARY_TIMEOUT_SECS must be a whole number of seconds")?,
            port: lookup("PORT")
                .unwrap_or_else(|| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn require<F>(lookup: &F, key: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|value| !value.trim().is_empty())
        .with_context(|| format!("Required environment variable '{key}' is not set"))
}
