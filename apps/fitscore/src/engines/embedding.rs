//! Embedding-similarity engine — cosine similarity between two document
//! embeddings, stretched onto the 0–100 scale.
//!
//! The semantic heavy lifting happens inside the vendor API; this engine
//! owns truncation, the cosine computation, and the score stretch.

use async_trait::async_trait;
use serde::Serialize;

use super::{round_to_tenth, truncate_chars, EngineReport, ScoreEngine};
use crate::embed_client::EmbedClient;
use crate::errors::AppError;

/// Per-document char budget before the embedding request.
const EMBED_CHAR_BUDGET: usize = 12_000;

/// Raw cosine below this floor scores 0; at or above the ceiling scores 100.
/// Document embeddings of any two English texts rarely fall under ~0.3, so
/// the useful band is stretched to cover the whole scale.
const STRETCH_FLOOR: f64 = 0.3;
const STRETCH_CEIL: f64 = 0.9;

#[derive(Debug, Clone, Serialize)]
pub struct EmbeddingReport {
    /// 0–100, one decimal place.
    pub score: f64,
    /// Raw cosine similarity, kept for transparency.
    pub similarity: f64,
}

pub struct EmbeddingEngine {
    client: EmbedClient,
}

impl EmbeddingEngine {
    pub fn new(client: EmbedClient) -> Self {
        Self { client }
    }

    pub async fn run(
        &self,
        resume_text: &str,
        jd_text: &str,
    ) -> Result<EmbeddingReport, AppError> {
        let resume = truncate_chars(resume_text, EMBED_CHAR_BUDGET);
        let jd = truncate_chars(jd_text, EMBED_CHAR_BUDGET);

        let (resume_vec, jd_vec) = self.client.embed_pair(resume, jd).await?;
        let similarity = cosine_similarity(&resume_vec, &jd_vec)?;

        Ok(EmbeddingReport {
            score: stretch_to_score(similarity),
            similarity,
        })
    }
}

#[async_trait]
impl ScoreEngine for EmbeddingEngine {
    fn name(&self) -> &'static str {
        "embedding"
    }

    async fn evaluate(
        &self,
        resume_text: &str,
        jd_text: &str,
    ) -> Result<EngineReport, AppError> {
        Ok(EngineReport::Embedding(self.run(resume_text, jd_text).await?))
    }
}

/// Cosine similarity of two equal-dimension vectors. A dimension mismatch
/// is fatal for this call only.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f64, AppError> {
    if a.len() != b.len() {
        return Err(AppError::Embedding(format!(
            "embedding dimension mismatch: {} vs {}",
            a.len(),
            b.len()
        )));
    }
    if a.is_empty() {
        return Err(AppError::Embedding("empty embedding vector".to_string()));
    }

    let mut dot = 0.0_f64;
    let mut norm_a = 0.0_f64;
    let mut norm_b = 0.0_f64;
    for (x, y) in a.iter().zip(b) {
        dot += f64::from(*x) * f64::from(*y);
        norm_a += f64::from(*x) * f64::from(*x);
        norm_b += f64::from(*y) * f64::from(*y);
    }

    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom == 0.0 {
        return Ok(0.0);
    }
    Ok(dot / denom)
}

/// Maps raw cosine similarity onto 0–100. Clamp the useful band to [0, 1],
/// then take the square root so mid-band differences spread out instead of
/// bunching near the middle.
pub fn stretch_to_score(similarity: f64) -> f64 {
    let t = ((similarity - STRETCH_FLOOR) / (STRETCH_CEIL - STRETCH_FLOOR)).clamp(0.0, 1.0);
    round_to_tenth(t.sqrt() * 100.0)
}
