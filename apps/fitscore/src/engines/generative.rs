//! Generative evaluation engine — asks the LLM for a structured verdict and
//! validates every field before accepting it. Any violation fails the call;
//! there are no partial results.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{truncate_chars, EngineReport, ScoreEngine};
use crate::errors::AppError;
use crate::llm_client::prompts::{AI_EVAL_PROMPT_TEMPLATE, AI_EVAL_SYSTEM};
use crate::llm_client::LlmClient;

/// Per-document char budget before prompt assembly.
const LLM_CHAR_BUDGET: usize = 20_000;

/// Closed verdict vocabulary. Serde rejects anything outside these four
/// strings, which is the first half of response validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "Strong Match")]
    StrongMatch,
    #[serde(rename = "Good Match")]
    GoodMatch,
    #[serde(rename = "Fair Match")]
    FairMatch,
    #[serde(rename = "Poor Match")]
    PoorMatch,
}

/// Structured evaluation returned by the LLM. Field names mirror the JSON
/// schema the prompt demands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiEvaluation {
    #[serde(rename = "Score")]
    pub score: i64,
    #[serde(rename = "Verdict")]
    pub verdict: Verdict,
    #[serde(rename = "Feedback")]
    pub feedback: String,
    #[serde(rename = "Pros")]
    pub pros: Vec<String>,
    #[serde(rename = "Cons")]
    pub cons: Vec<String>,
}

impl AiEvaluation {
    /// Range and content checks beyond what serde already enforced.
    pub fn validate(&self) -> Result<(), AppError> {
        if !(0..=100).contains(&self.score) {
            return Err(AppError::Llm(format!(
                "LLM returned out-of-range score: {}",
                self.score
            )));
        }
        if self.feedback.trim().is_empty() {
            return Err(AppError::Llm("LLM returned empty feedback".to_string()));
        }
        Ok(())
    }
}

pub struct GenerativeEngine {
    llm: LlmClient,
}

impl GenerativeEngine {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }

    pub async fn run(&self, resume_text: &str, jd_text: &str) -> Result<AiEvaluation, AppError> {
        let prompt = AI_EVAL_PROMPT_TEMPLATE
            .replace("{resume_text}", truncate_chars(resume_text, LLM_CHAR_BUDGET))
            .replace("{jd_text}", truncate_chars(jd_text, LLM_CHAR_BUDGET));

        let evaluation: AiEvaluation = self.llm.call_json(&prompt, AI_EVAL_SYSTEM).await?;
        evaluation.validate()?;
        Ok(evaluation)
    }
}

#[async_trait]
impl ScoreEngine for GenerativeEngine {
    fn name(&self) -> &'static str {
        "generative"
    }

    async fn evaluate(
        &self,
        resume_text: &str,
        jd_text: &str,
    ) -> Result<EngineReport, AppError> {
        Ok(EngineReport::Generative(self.run(resume_text, jd_text).await?))
    }
}
