//! Embedding seam for the similarity scorer.
//!
//! The pipeline only ever sees [`EmbeddingProvider`]; which backend produces
//! the vectors is a caller decision. [`HttpEmbedder`] talks to a hosted
//! embeddings API; [`HashEmbedder`] is deterministic and offline, used as
//! the test double and as a fallback when no endpoint is configured.

use async_trait::async_trait;
use thiserror::Error;

pub mod hash;
pub mod http;

pub use hash::HashEmbedder;
pub use http::HttpEmbedder;

#[derive(Debug, Error)]
pub enum EmbedError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Provider returned no embedding")]
    EmptyResponse,

    #[error("Provider failure: {0}")]
    Provider(String),
}

/// A swappable text embedding backend: one text in, one fixed-dimension
/// dense vector out. Carried by callers as `Arc<dyn EmbeddingProvider>`.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbedError>;
}

/// Cosine similarity of two vectors. Zero-norm input (e.g. empty text under
/// the hash provider) yields 0.0 rather than NaN.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let len = a.len().min(b.len());
    if len == 0 {
        return 0.0;
    }
    let mut dot = 0.0_f32;
    let mut norm_a = 0.0_f32;
    let mut norm_b = 0.0_f32;
    for i in 0..len {
        dot += a[i] * b[i];
        norm_a += a[i] * a[i];
        norm_b += b[i] * b[i];
    }
    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom > 0.0 {
        dot / denom
    } else {
        0.0
    }
}

/// Maps cosine similarity to a 0-100 percentage with two decimals.
/// Monotonic in the cosine; negative cosines floor at 0.
pub fn similarity_score(cosine: f32) -> f64 {
    let pct = (cosine as f64 * 10000.0).round() / 100.0;
    pct.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_vectors_score_100() {
        let v = [0.3_f32, 0.4, 0.5];
        assert_eq!(similarity_score(cosine_similarity(&v, &v)), 100.0);
    }

    #[test]
    fn test_orthogonal_vectors_score_0() {
        let a = [1.0_f32, 0.0];
        let b = [0.0_f32, 1.0];
        assert_eq!(similarity_score(cosine_similarity(&a, &b)), 0.0);
    }

    #[test]
    fn test_negative_cosine_floors_at_zero() {
        assert_eq!(similarity_score(-0.4), 0.0);
    }

    #[test]
    fn test_score_rounds_to_two_decimals() {
        assert_eq!(similarity_score(0.123456), 12.35);
        assert_eq!(similarity_score(0.9999), 99.99);
    }

    #[test]
    fn test_score_is_monotonic_in_cosine() {
        let cosines = [-1.0_f32, -0.2, 0.0, 0.1, 0.5, 0.9, 1.0];
        let scores: Vec<f64> = cosines.iter().map(|c| similarity_score(*c)).collect();
        assert!(scores.windows(2).all(|w| w[0] <= w[1]), "scores: {scores:?}");
    }

    #[test]
    fn test_zero_norm_vector_similarity_is_zero() {
        let zero = [0.0_f32; 4];
        let v = [1.0_f32, 2.0, 3.0, 4.0];
        assert_eq!(cosine_similarity(&zero, &v), 0.0);
        assert_eq!(cosine_similarity(&[], &[]), 0.0);
    }

    #[test]
    fn test_cosine_ignores_magnitude() {
        let a = [2.0_f32, 0.0];
        let b = [7.5_f32, 0.0];
        assert!((cosine_similarity(&a, &b) - 1.0).abs() < 1e-6);
    }
}
