//! Evaluation orchestrator — the enclosing system around the scoring core.
//!
//! Validates input lengths, runs the three engines concurrently, and folds
//! their scores into the composite. Each engine receives its own borrows of
//! the inputs and shares nothing, so concurrent invocation needs no locks.

use serde::Serialize;
use tracing::info;

use crate::config::Config;
use crate::embed_client::EmbedClient;
use crate::engines::composite::composite_score;
use crate::engines::{AiEvaluation, EmbeddingEngine, EmbeddingReport, GenerativeEngine, KeywordEngine};
use crate::errors::AppError;
use crate::keyword::KeywordMatchReport;
use crate::llm_client::LlmClient;

/// Minimum chars per input before an evaluation is meaningful.
pub const MIN_TEXT_LEN: usize = 50;

/// Everything one evaluation produces: three engine reports plus the
/// weighted composite.
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    pub keyword: KeywordMatchReport,
    pub semantic: EmbeddingReport,
    pub ai: AiEvaluation,
    pub composite_score: f64,
}

pub struct Evaluator {
    keyword: KeywordEngine,
    embedding: EmbeddingEngine,
    generative: GenerativeEngine,
}

impl Evaluator {
    pub fn new(config: &Config) -> Self {
        Self {
            keyword: KeywordEngine,
            embedding: EmbeddingEngine::new(EmbedClient::new(config.embeddings_api_key.clone())),
            generative: GenerativeEngine::new(LlmClient::new(config.anthropic_api_key.clone())),
        }
    }

    /// Runs all three engines concurrently. Any engine failure fails the
    /// whole evaluation — the composite has no meaning with a score missing.
    pub async fn evaluate(
        &self,
        resume_text: &str,
        jd_text: &str,
    ) -> Result<Evaluation, AppError> {
        check_min_len("resume", resume_text)?;
        check_min_len("job description", jd_text)?;

        let (keyword, semantic, ai) = tokio::try_join!(
            async { self.keyword.run(resume_text, jd_text) },
            self.embedding.run(resume_text, jd_text),
            self.generative.run(resume_text, jd_text),
        )?;

        let composite_score = composite_score(keyword.score, semantic.score, ai.score as f64);
        info!(
            keyword_score = keyword.score,
            semantic_score = semantic.score,
            ai_score = ai.score,
            composite_score,
            "evaluation complete"
        );

        Ok(Evaluation {
            keyword,
            semantic,
            ai,
            composite_score,
        })
    }
}

fn check_min_len(label: &str, text: &str) -> Result<(), AppError> {
    if text.chars().count() < MIN_TEXT_LEN {
        return Err(AppError::Validation(format!(
            "{label} text must be at least {MIN_TEXT_LEN} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dummy_config() -> Config {
        Config {
            anthropic_api_key: "test-key".to_string(),
            embeddings_api_key: "test-key".to_string(),
            rust_log: "info".to_string(),
        }
    }

    #[tokio::test]
    async fn test_short_resume_rejected_before_any_engine_runs() {
        let evaluator = Evaluator::new(&dummy_config());
        let jd = "A job description that is comfortably longer than fifty characters total.";
        let err = evaluator.evaluate("too short", jd).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_short_jd_rejected_before_any_engine_runs() {
        let evaluator = Evaluator::new(&dummy_config());
        let resume = "A resume body that is comfortably longer than fifty characters in total.";
        let err = evaluator.evaluate(resume, "tiny jd").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_min_len_boundary() {
        let exactly_50: String = "x".repeat(50);
        assert!(check_min_len("resume", &exactly_50).is_ok());
        let short: String = "x".repeat(49);
        assert!(check_min_len("resume", &short).is_err());
    }
}
