use thiserror::Error;

use crate::embed_client::EmbedError;
use crate::llm_client::LlmError;

/// Application-level error type. The scoring core itself only ever produces
/// `Validation` and `Internal`; the network engines map their client errors
/// in, keeping rate limiting distinguishable from other failures so the
/// caller can decide what is retryable.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("PDF extraction error: {0}")]
    Pdf(String),

    #[error("Embedding error: {0}")]
    Embedding(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Rate limited by {service}")]
    RateLimited { service: &'static str },

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::RateLimited { .. } => AppError::RateLimited { service: "llm" },
            other => AppError::Llm(other.to_string()),
        }
    }
}

impl From<EmbedError> for AppError {
    fn from(err: EmbedError) -> Self {
        match err {
            EmbedError::RateLimited => AppError::RateLimited {
                service: "embeddings",
            },
            other => AppError::Embedding(other.to_string()),
        }
    }
}
