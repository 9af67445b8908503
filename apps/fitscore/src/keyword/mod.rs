//! Deterministic keyword-match engine: normalize → extract → match → score.
//!
//! Pure CPU work, no I/O, no shared state — safe to invoke concurrently with
//! the network engines. Same inputs always produce bit-identical output.

pub mod extract;
pub mod matcher;
pub mod normalize;

use serde::{Deserialize, Serialize};

use crate::engines::round_to_tenth;
use crate::errors::AppError;

pub use extract::extract_keywords;
pub use normalize::normalize;

/// Full output of the keyword engine for one (résumé, JD) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordMatchReport {
    /// 0–100, one decimal place. Linear in the match rate.
    pub score: f64,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub total_jd_keywords: usize,
    /// matched / total, 0.0 when no keywords were extracted.
    pub match_rate: f64,
    /// Human-readable one-liner derived from the score band.
    pub summary: String,
}

/// Scores `resume_text` against `jd_text` by boundary-aware keyword presence.
///
/// A job description that yields zero keywords is not an error: the report
/// degrades to a zero score with empty partitions.
pub fn evaluate_keyword_match(
    resume_text: &str,
    jd_text: &str,
) -> Result<KeywordMatchReport, AppError> {
    let jd_keywords = extract_keywords(jd_text);
    if jd_keywords.is_empty() {
        return Ok(KeywordMatchReport {
            score: 0.0,
            matched_keywords: vec![],
            missing_keywords: vec![],
            total_jd_keywords: 0,
            match_rate: 0.0,
            summary: "No keywords found in the job description — cannot score keyword match."
                .to_string(),
        });
    }

    let resume_normalized = normalize(resume_text);
    let outcome = matcher::match_keywords(&jd_keywords, &resume_normalized)?;
    let score = round_to_tenth(outcome.match_rate * 100.0);
    let summary = build_summary(score, &outcome.missing);

    Ok(KeywordMatchReport {
        score,
        matched_keywords: outcome.matched,
        missing_keywords: outcome.missing,
        total_jd_keywords: jd_keywords.len(),
        match_rate: outcome.match_rate,
        summary,
    })
}

/// Builds a short recommendation line from the score and top missing keywords.
fn build_summary(score: f64, missing: &[String]) -> String {
    let top_missing: Vec<&str> = missing.iter().take(3).map(|k| k.as_str()).collect();

    if score >= 80.0 {
        "Strong keyword coverage. The résumé directly reflects the job description's terms."
            .to_string()
    } else if score >= 60.0 {
        format!(
            "Moderate keyword coverage ({score}/100). Consider addressing: {}.",
            top_missing.join(", ")
        )
    } else {
        format!(
            "Low keyword coverage ({score}/100). Significant gaps: {}.",
            top_missing.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "Senior engineer with 6 years of Rust and Python. Built \
        Kubernetes operators, Docker images and Kafka consumers. Shipped a \
        machine learning feature store in 2022.";

    #[test]
    fn test_six_of_ten_keywords_scores_sixty() {
        let jd = "Need rust python kubernetes docker kafka 2022 scala erlang \
                  elixir haskell";
        let report = evaluate_keyword_match(RESUME, jd).unwrap();
        assert_eq!(report.total_jd_keywords, 10);
        assert_eq!(report.matched_keywords.len(), 6);
        assert!((report.match_rate - 0.6).abs() < f64::EPSILON);
        assert_eq!(report.score, 60.0);
    }

    #[test]
    fn test_empty_jd_degrades_to_zero() {
        let report = evaluate_keyword_match(RESUME, "we are the a of and").unwrap();
        assert_eq!(report.score, 0.0);
        assert_eq!(report.match_rate, 0.0);
        assert_eq!(report.total_jd_keywords, 0);
        assert!(report.matched_keywords.is_empty());
        assert!(report.missing_keywords.is_empty());
    }

    #[test]
    fn test_compound_phrase_matched_across_documents() {
        let jd = "Experience with machine learning required";
        let report = evaluate_keyword_match(RESUME, jd).unwrap();
        assert!(report
            .matched_keywords
            .contains(&"machine-learning".to_string()));
    }

    #[test]
    fn test_deterministic_repeat_calls() {
        let jd = "rust kubernetes terraform c++ node.js";
        let first = evaluate_keyword_match(RESUME, jd).unwrap();
        let second = evaluate_keyword_match(RESUME, jd).unwrap();
        assert_eq!(first.score, second.score);
        assert_eq!(first.matched_keywords, second.matched_keywords);
        assert_eq!(first.missing_keywords, second.missing_keywords);
    }

    #[test]
    fn test_summary_mentions_top_gaps_on_low_score() {
        let jd = "fortran cobol pascal smalltalk prolog";
        let report = evaluate_keyword_match(RESUME, jd).unwrap();
        assert_eq!(report.score, 0.0);
        assert!(report.summary.contains("fortran"));
    }
}
