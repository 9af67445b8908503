//! Embeddings client — the single point of entry for embedding API calls.
//!
//! Mirrors the LLM client's shape: one struct, its own error enum, and the
//! consumer (the embedding engine) never touches HTTP directly.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const EMBEDDINGS_API_URL: &str = "https://api.openai.com/v1/embeddings";
/// Hardcoded for the same reason as the LLM model: one model everywhere.
pub const EMBED_MODEL: &str = "text-embedding-3-small";
const REQUEST_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Error)]
pub enum EmbedError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("Expected {expected} embedding vectors, got {got}")]
    MalformedResponse { expected: usize, got: usize },
}

#[derive(Debug, Serialize)]
struct EmbeddingsRequest<'a> {
    model: &'a str,
    input: [&'a str; 2],
}

#[derive(Debug, Deserialize)]
struct EmbeddingsResponse {
    data: Vec<EmbeddingObject>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingObject {
    index: usize,
    embedding: Vec<f32>,
}

#[derive(Clone)]
pub struct EmbedClient {
    client: Client,
    api_key: String,
}

impl EmbedClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    /// Embeds two texts in a single request and returns their vectors in
    /// input order. The API reports an `index` per vector, so response
    /// ordering is not assumed.
    pub async fn embed_pair(&self, a: &str, b: &str) -> Result<(Vec<f32>, Vec<f32>), EmbedError> {
        let request_body = EmbeddingsRequest {
            model: EMBED_MODEL,
            input: [a, b],
        };

        let response = self
            .client
            .post(EMBEDDINGS_API_URL)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if status.as_u16() == 429 {
            return Err(EmbedError::RateLimited);
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(EmbedError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let mut parsed: EmbeddingsResponse = response.json().await?;
        if parsed.data.len() != 2 {
            return Err(EmbedError::MalformedResponse {
                expected: 2,
                got: parsed.data.len(),
            });
        }
        parsed.data.sort_by_key(|obj| obj.index);
        debug!(dim = parsed.data[0].embedding.len(), "embedding pair received");

        let second = parsed.data.pop().map(|obj| obj.embedding).unwrap_or_default();
        let first = parsed.data.pop().map(|obj| obj.embedding).unwrap_or_default();
        Ok((first, second))
    }
}
