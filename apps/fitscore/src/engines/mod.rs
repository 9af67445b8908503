//! The three scoring engines behind one seam.
//!
//! Structurally the engines are a small closed set of variants: each takes
//! the same (résumé, JD) pair and produces a 0–100 score with its own
//! detail payload. The composite aggregator only cares about the score.

pub mod composite;
pub mod embedding;
pub mod generative;
pub mod keyword;

use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use crate::errors::AppError;
use crate::keyword::KeywordMatchReport;

pub use composite::composite_score;
pub use embedding::{EmbeddingEngine, EmbeddingReport};
pub use generative::{AiEvaluation, GenerativeEngine, Verdict};
pub use keyword::KeywordEngine;

/// A scoring backend. Implementations must be pure per call: no shared
/// mutable state, so the three engines for one evaluation can run
/// concurrently.
#[async_trait]
pub trait ScoreEngine: Send + Sync {
    fn name(&self) -> &'static str;

    async fn evaluate(&self, resume_text: &str, jd_text: &str)
        -> Result<EngineReport, AppError>;
}

/// Tagged output of a single engine run.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "engine", rename_all = "snake_case")]
pub enum EngineReport {
    Keyword(KeywordMatchReport),
    Embedding(EmbeddingReport),
    Generative(AiEvaluation),
}

impl EngineReport {
    /// The engine's 0–100 score, the only thing the aggregator needs.
    pub fn score(&self) -> f64 {
        match self {
            EngineReport::Keyword(report) => report.score,
            EngineReport::Embedding(report) => report.score,
            EngineReport::Generative(report) => report.score as f64,
        }
    }
}

/// Rounds to one decimal place. Every score leaving an engine goes
/// through this.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Truncates to at most `budget` chars on a char boundary. The network
/// engines apply this before shipping documents to their APIs.
pub(crate) fn truncate_chars(text: &str, budget: usize) -> &str {
    match text.char_indices().nth(budget) {
        Some((idx, _)) => {
            debug!(budget, "truncating input before API call");
            &text[..idx]
        }
        None => text,
    }
}
