use anyhow::{Context, Result};

/// Configuration for the production embedding provider, loaded from
/// environment variables. The pipeline itself never reads the environment;
/// only [`crate::embedder::HttpEmbedder::from_config`] consumes this.
#[derive(Debug, Clone)]
pub struct MatcherConfig {
    pub embeddings_url: String,
    pub embeddings_api_key: String,
    pub embeddings_model: String,
    pub request_timeout_secs: u64,
    pub rust_log: String,
}

impl MatcherConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(MatcherConfig {
            embeddings_url: require_env("EMBEDDINGS_URL")?,
            embeddings_api_key: require_env("EMBEDDINGS_API_KEY")?,
            embeddings_model: std::env::var("EMBEDDINGS_MODEL")
                .unwrap_or_else(|_| "text-embedding-3-small".to_string()),
            request_timeout_secs: std::env::var("EMBEDDINGS_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse::<u64>()
                .context("EMBEDDINGS_TIMEOUT_SECS must be a number of seconds")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
