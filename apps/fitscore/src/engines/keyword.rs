//! Keyword engine — `ScoreEngine` wrapper over the deterministic core.
//! The core is synchronous and CPU-only; the async shim exists so all
//! three engines share one seam.

use async_trait::async_trait;

use super::{EngineReport, ScoreEngine};
use crate::errors::AppError;
use crate::keyword::{evaluate_keyword_match, KeywordMatchReport};

pub struct KeywordEngine;

impl KeywordEngine {
    pub fn run(&self, resume_text: &str, jd_text: &str) -> Result<KeywordMatchReport, AppError> {
        evaluate_keyword_match(resume_text, jd_text)
    }
}

#[async_trait]
impl ScoreEngine for KeywordEngine {
    fn name(&self) -> &'static str {
        "keyword"
    }

    async fn evaluate(
        &self,
        resume_text: &str,
        jd_text: &str,
    ) -> Result<EngineReport, AppError> {
        Ok(EngineReport::Keyword(self.run(resume_text, jd_text)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_trait_and_direct_paths_agree() {
        let engine = KeywordEngine;
        let resume = "Rust and Kubernetes engineer since 2019, shipping Docker images.";
        let jd = "Looking for rust kubernetes docker terraform";

        let direct = engine.run(resume, jd).unwrap();
        let via_trait = engine.evaluate(resume, jd).await.unwrap();

        assert_eq!(engine.name(), "keyword");
        assert_eq!(via_trait.score(), direct.score);
    }
}
