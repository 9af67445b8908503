//! Text Normalizer — lower-cases input and joins known compound phrases into
//! single hyphenated tokens so whitespace tokenization keeps them intact.
//!
//! Punctuation is deliberately NOT stripped here: the matcher normalizes the
//! résumé body through this same function and needs the original spacing and
//! punctuation for its boundary checks.

/// Known multi-word technical/business phrases, joined before tokenization.
///
/// Iterated in order. Longer phrases that contain a shorter phrase as a
/// substring must come first: once a longer phrase has been hyphen-joined,
/// a later pass can no longer split it. This ordering is a fixed design
/// decision, not configuration.
pub const COMPOUND_PHRASES: &[&str] = &[
    "natural language processing",
    "large language models",
    "large language model",
    "test driven development",
    "object oriented programming",
    "continuous integration",
    "continuous deployment",
    "continuous delivery",
    "machine learning",
    "deep learning",
    "data science",
    "data analysis",
    "data engineering",
    "data structures",
    "computer vision",
    "computer science",
    "cloud computing",
    "version control",
    "unit testing",
    "object oriented",
    "distributed systems",
    "operating systems",
    "software engineering",
    "web development",
    "full stack",
    "front end",
    "back end",
    "rest api",
    "restful api",
    "project management",
    "product management",
    "agile methodology",
    "user experience",
    "user interface",
    "problem solving",
    "power bi",
];

/// Lower-cases `text` and hyphen-joins every compound phrase occurrence.
///
/// Idempotent: joined phrases no longer contain the spaced form, so a second
/// pass is a no-op.
pub fn normalize(text: &str) -> String {
    let mut normalized = text.to_lowercase();
    for phrase in COMPOUND_PHRASES {
        if normalized.contains(phrase) {
            normalized = normalized.replace(phrase, &phrase.replace(' ', "-"));
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_input() {
        assert_eq!(normalize("Senior RUST Engineer"), "senior rust engineer");
    }

    #[test]
    fn test_joins_compound_phrase() {
        assert_eq!(
            normalize("Experience with Machine Learning required"),
            "experience with machine-learning required"
        );
    }

    #[test]
    fn test_joins_multiple_occurrences() {
        let out = normalize("machine learning, more machine learning");
        assert_eq!(out, "machine-learning, more machine-learning");
    }

    #[test]
    fn test_longer_phrase_wins_over_embedded_shorter() {
        // "large language models" is joined before "large language model"
        // could fire on its prefix.
        let out = normalize("We train Large Language Models at scale");
        assert!(out.contains("large-language-models"));
        assert!(!out.contains("large-language-model "));
    }

    #[test]
    fn test_punctuation_preserved() {
        let out = normalize("C++, Node.js & Rust!");
        assert_eq!(out, "c++, node.js & rust!");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "Machine Learning and DEEP LEARNING",
            "full stack web development",
            "plain text with no phrases",
            "",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "not idempotent for {input:?}");
        }
    }
}
