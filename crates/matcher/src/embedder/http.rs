//! HTTP embedding provider for OpenAI-compatible `/v1/embeddings` endpoints.
//!
//! Single point of entry for all embedding API calls; the pipeline never
//! constructs HTTP requests itself. Transient failures (429 and 5xx, plus
//! transport errors) get one retry with a short backoff before the error is
//! surfaced as [`EmbedError`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{EmbedError, EmbeddingProvider};
use crate::config::MatcherConfig;

/// One initial attempt plus one retry on transient failure.
const MAX_ATTEMPTS: u32 = 2;
const RETRY_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Serialize)]
struct EmbeddingsRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Debug, Deserialize)]
struct EmbeddingsResponse {
    data: Vec<EmbeddingObject>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingObject {
    embedding: Vec<f32>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

#[derive(Clone)]
pub struct HttpEmbedder {
    client: Client,
    url: String,
    api_key: String,
    model: String,
}

impl HttpEmbedder {
    pub fn new(url: String, api_key: String, model: String, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
            url,
            api_key,
            model,
        }
    }

    pub fn from_config(config: &MatcherConfig) -> Self {
        Self::new(
            config.embeddings_url.clone(),
            config.embeddings_api_key.clone(),
            config.embeddings_model.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    async fn call(&self, text: &str) -> Result<Vec<f32>, EmbedError> {
        let request_body = EmbeddingsRequest {
            model: &self.model,
            input: text,
        };

        let mut last_error: Option<EmbedError> = None;

        for attempt in 0..MAX_ATTEMPTS {
            if attempt > 0 {
                warn!(
                    "embedding call failed, retrying after {}ms",
                    RETRY_DELAY.as_millis()
                );
                tokio::time::sleep(RETRY_DELAY).await;
            }

            let response = self
                .client
                .post(&self.url)
                .bearer_auth(&self.api_key)
                .json(&request_body)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(EmbedError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("embeddings API returned {status}: {body}");
                last_error = Some(EmbedError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                let message = serde_json::from_str::<ApiError>(&body)
                    .map(|e| e.error.message)
                    .unwrap_or(body);
                return Err(EmbedError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let parsed: EmbeddingsResponse = response.json().await?;
            let vector = parsed
                .data
                .into_iter()
                .next()
                .map(|d| d.embedding)
                .ok_or(EmbedError::EmptyResponse)?;

            debug!("embedding call succeeded, dimensions={}", vector.len());
            return Ok(vector);
        }

        Err(last_error.unwrap_or(EmbedError::EmptyResponse))
    }
}

#[async_trait]
impl EmbeddingProvider for HttpEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbedError> {
        self.call(text).await
    }
}
