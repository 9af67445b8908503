//! fitscore — scores a résumé against a job description with three
//! independent engines (deterministic keyword matching, embedding
//! similarity, generative evaluation) and combines them into a fixed-weight
//! composite.

pub mod config;
pub mod embed_client;
pub mod engines;
pub mod errors;
pub mod evaluate;
pub mod keyword;
pub mod llm_client;
pub mod pdf;

pub use engines::composite::composite_score;
pub use errors::AppError;
pub use evaluate::{Evaluation, Evaluator, MIN_TEXT_LEN};
pub use keyword::{evaluate_keyword_match, KeywordMatchReport};
