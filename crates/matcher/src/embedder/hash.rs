//! Deterministic bag-of-tokens hash embedder.
//!
//! Each token is FNV-1a hashed into one of a fixed number of buckets and
//! the resulting count vector is L2-normalized. No model weights, no
//! network, same input always produces the same vector. Texts sharing
//! vocabulary land in overlapping buckets, so cosine similarity still
//! tracks lexical overlap, which is all the pipeline tests rely on.

use async_trait::async_trait;

use super::{EmbedError, EmbeddingProvider};

const DEFAULT_DIMENSIONS: usize = 256;

pub struct HashEmbedder {
    dimensions: usize,
}

impl HashEmbedder {
    pub fn new() -> Self {
        Self {
            dimensions: DEFAULT_DIMENSIONS,
        }
    }

    pub fn with_dimensions(dimensions: usize) -> Self {
        Self { dimensions }
    }

    fn embed_sync(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0_f32; self.dimensions];

        for token in text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
        {
            let lowered = token.to_lowercase();
            let bucket = (fnv1a(lowered.as_bytes()) % self.dimensions as u64) as usize;
            vector[bucket] += 1.0;
        }

        let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for v in &mut vector {
                *v /= norm;
            }
        }
        vector
    }
}

impl Default for HashEmbedder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmbeddingProvider for HashEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbedError> {
        Ok(self.embed_sync(text))
    }
}

fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hash = 0xcbf29ce484222325_u64;
    for byte in bytes {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedder::cosine_similarity;

    #[tokio::test]
    async fn test_deterministic() {
        let embedder = HashEmbedder::new();
        let a = embedder.embed("Senior Rust engineer").await.unwrap();
        let b = embedder.embed("Senior Rust engineer").await.unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_identical_texts_have_cosine_one() {
        let embedder = HashEmbedder::new();
        let a = embedder.embed("distributed systems in Go").await.unwrap();
        let b = embedder.embed("distributed systems in Go").await.unwrap();
        assert!((cosine_similarity(&a, &b) - 1.0).abs() < 1e-6);
    }

    #[tokio::test]
    async fn test_empty_text_embeds_to_zero_vector() {
        let embedder = HashEmbedder::new();
        let v = embedder.embed("").await.unwrap();
        assert_eq!(v.len(), DEFAULT_DIMENSIONS);
        assert!(v.iter().all(|x| *x == 0.0));
    }

    #[tokio::test]
    async fn test_overlapping_texts_more_similar_than_disjoint() {
        let embedder = HashEmbedder::new();
        let reference = embedder.embed("go distributed systems").await.unwrap();
        let close = embedder.embed("go distributed kubernetes").await.unwrap();
        let far = embedder.embed("frontend react developer").await.unwrap();
        assert!(
            cosine_similarity(&reference, &close) > cosine_similarity(&reference, &far)
        );
    }

    #[tokio::test]
    async fn test_case_insensitive() {
        let embedder = HashEmbedder::new();
        let a = embedder.embed("RUST ENGINEER").await.unwrap();
        let b = embedder.embed("rust engineer").await.unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_vectors_are_unit_norm() {
        let embedder = HashEmbedder::new();
        let v = embedder.embed_sync("some nonempty text here");
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
    }
}
