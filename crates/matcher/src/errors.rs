use thiserror::Error;

use crate::embedder::EmbedError;

/// Crate-level error type returned by the matching pipeline.
#[derive(Debug, Error)]
pub enum MatchError {
    /// The request was rejected before any scoring began.
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    /// The embedding provider failed in a way the pipeline cannot absorb
    /// (e.g. the reference document itself could not be embedded).
    #[error("Embedding error: {0}")]
    Embedding(#[from] EmbedError),

    #[error("Configuration error: {0}")]
    Config(#[from] anyhow::Error),
}
