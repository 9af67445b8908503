//! Keyword Matcher — boundary-aware presence test of JD keywords against
//! normalized résumé text.
//!
//! A single Aho-Corasick automaton is built per call over all keywords, so
//! pattern-construction cost does not grow per keyword. A hit counts only
//! when the match is not embedded in a longer alphanumeric run: the byte
//! before the match start and the byte after the match end must not be
//! ASCII alphanumeric. Punctuation inside a keyword ("c++", "node.js")
//! needs no escaping under this scheme — the automaton matches literally
//! and the boundary rule only inspects the adjacent bytes.

use aho_corasick::AhoCorasick;

use crate::errors::AppError;

/// Partition of a keyword set relative to one résumé text. Order of
/// `matched`/`missing` mirrors the input keyword order.
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    /// matched / total; 0.0 when the keyword set is empty.
    pub match_rate: f64,
}

/// Tests each keyword for boundary-aware presence in `resume_normalized`
/// (the résumé body passed through [`super::normalize::normalize`]; both
/// sides are already lower-cased, which is what makes the search
/// case-insensitive).
pub fn match_keywords(
    keywords: &[String],
    resume_normalized: &str,
) -> Result<MatchOutcome, AppError> {
    if keywords.is_empty() {
        return Ok(MatchOutcome {
            matched: vec![],
            missing: vec![],
            match_rate: 0.0,
        });
    }

    let automaton = AhoCorasick::new(keywords).map_err(|e| {
        AppError::Internal(anyhow::anyhow!("failed to build keyword automaton: {e}"))
    })?;

    let haystack = resume_normalized.as_bytes();
    let mut hit = vec![false; keywords.len()];

    // Overlapping iteration so a keyword that is a substring of another
    // keyword's occurrence still gets its own boundary check.
    for m in automaton.find_overlapping_iter(resume_normalized) {
        let idx = m.pattern().as_usize();
        if hit[idx] {
            continue;
        }
        let before_ok = m.start() == 0 || !haystack[m.start() - 1].is_ascii_alphanumeric();
        let after_ok = m.end() == haystack.len() || !haystack[m.end()].is_ascii_alphanumeric();
        if before_ok && after_ok {
            hit[idx] = true;
        }
    }

    let mut matched = Vec::new();
    let mut missing = Vec::new();
    for (keyword, found) in keywords.iter().zip(&hit) {
        if *found {
            matched.push(keyword.clone());
        } else {
            missing.push(keyword.clone());
        }
    }

    let match_rate = matched.len() as f64 / keywords.len() as f64;
    Ok(MatchOutcome {
        matched,
        missing,
        match_rate,
    })
}
