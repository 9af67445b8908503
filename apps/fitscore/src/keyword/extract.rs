//! Keyword Extractor — tokenizes normalized text, filters stop words and
//! noise tokens, and de-duplicates while preserving first-seen order.

use std::collections::HashSet;
use std::sync::LazyLock;

use super::normalize::normalize;

/// Bare numbers shorter than this are always noise (page numbers, list indices).
const MIN_NUMERIC_LEN: usize = 4;
/// Inclusive range of bare numbers kept as plausible calendar years.
const YEAR_MIN: i64 = 1990;
const YEAR_MAX: i64 = 2040;

/// Common English function words plus domain-generic filler. Input is already
/// lower-cased when membership is tested.
pub static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        // function words
        "a", "an", "the", "and", "or", "but", "if", "then", "else", "when",
        "while", "at", "by", "for", "with", "without", "about", "against",
        "between", "into", "through", "during", "before", "after", "above",
        "below", "to", "from", "up", "down", "in", "out", "on", "off", "over",
        "under", "again", "further", "once", "here", "there", "where", "why",
        "how", "all", "any", "both", "each", "few", "more", "most", "other",
        "some", "such", "no", "nor", "not", "only", "own", "same", "so",
        "than", "too", "very", "can", "cannot", "will", "just", "should",
        "would", "could", "may", "might", "must", "shall", "now", "also",
        "its", "it", "this", "that", "these", "those", "their",
        "theirs", "them", "they", "we", "us", "our", "ours", "you", "your",
        "yours", "i", "me", "my", "mine", "he", "she", "his", "her", "hers",
        "who", "whom", "which", "what", "is", "are", "was", "were", "be",
        "been", "being", "am", "have", "has", "had", "having", "do", "does",
        "did", "doing", "of", "as", "per", "via", "etc", "eg", "ie",
        // domain-generic filler common to résumés and job descriptions
        "experience", "experienced", "experiences", "year", "years", "skill",
        "skills", "knowledge", "ability", "abilities", "able", "strong",
        "good", "great", "excellent", "proven", "demonstrated", "required",
        "require", "requires", "requirement", "requirements", "preferred",
        "prefer", "plus", "bonus", "responsibilities", "responsibility",
        "responsible", "role", "roles", "position", "job", "candidate",
        "candidates", "applicant", "team", "teams", "work", "working",
        "worked", "works", "including", "include", "includes", "included",
        "use", "using", "used", "uses", "need", "needs", "needed", "want",
        "wants", "well", "within", "across", "new",
        "company", "environment", "opportunity", "opportunities", "looking",
        "seeking", "join", "help", "make", "build", "etc.",
    ]
    .into_iter()
    .collect()
});

/// Extracts an ordered, de-duplicated keyword sequence from free text.
///
/// Every character outside `{a-z, 0-9, -, +, #, ., whitespace}` is treated
/// as a separator, so adversarial input (emoji, mixed scripts, odd
/// punctuation) degrades to fewer tokens rather than an error. Order is
/// first-occurrence order; callers must not assume any other ordering.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let normalized = normalize(text);
    let cleaned: String = normalized
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' | '-' | '+' | '#' | '.' => c,
            c if c.is_whitespace() => c,
            _ => ' ',
        })
        .collect();

    let mut seen: HashSet<&str> = HashSet::new();
    let mut keywords: Vec<String> = Vec::new();
    for token in cleaned.split_whitespace() {
        let token = token.trim();
        if !keep_token(token) {
            continue;
        }
        if seen.insert(token) {
            keywords.push(token.to_string());
        }
    }
    keywords
}

/// Token filter: drops short tokens, stop words, and implausible bare numbers.
/// Four-or-more-digit numbers inside [1990, 2040] survive as calendar years.
fn keep_token(token: &str) -> bool {
    if token.chars().count() < 2 {
        return false;
    }
    if STOP_WORDS.contains(token) {
        return false;
    }
    if token.chars().all(|c| c.is_ascii_digit()) {
        if token.len() < MIN_NUMERIC_LEN {
            return false;
        }
        return match token.parse::<i64>() {
            Ok(value) => (YEAR_MIN..=YEAR_MAX).contains(&value),
            Err(_) => false,
        };
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_plausible_years_discards_other_numbers() {
        let keywords = extract_keywords("Graduated in 2021 with 5 years experience");
        assert!(keywords.contains(&"2021".to_string()));
        assert!(!keywords.contains(&"5".to_string()));
        assert!(keywords.contains(&"graduated".to_string()));
    }

    #[test]
    fn test_discards_long_numbers_outside_year_range() {
        let keywords = extract_keywords("Call 5551234 or fax 1985 page 12");
        assert!(!keywords.contains(&"5551234".to_string()));
        assert!(!keywords.contains(&"1985".to_string()));
        assert!(!keywords.contains(&"12".to_string()));
    }

    #[test]
    fn test_stop_words_and_short_tokens_filtered() {
        let keywords = extract_keywords("We are a team that will use AI");
        assert_eq!(keywords, vec!["ai".to_string()]);
    }

    #[test]
    fn test_compound_phrase_survives_as_one_keyword() {
        let keywords =
            extract_keywords("Experience with machine learning and REST API design");
        assert!(keywords.contains(&"machine-learning".to_string()));
        assert!(!keywords.contains(&"machine".to_string()));
        assert!(!keywords.contains(&"learning".to_string()));
        assert!(keywords.contains(&"rest-api".to_string()));
        assert!(keywords.contains(&"design".to_string()));
    }

    #[test]
    fn test_dedup_keeps_first_occurrence_order() {
        let keywords = extract_keywords("rust python rust golang python rust");
        assert_eq!(
            keywords,
            vec!["rust".to_string(), "python".to_string(), "golang".to_string()]
        );
    }

    #[test]
    fn test_punctuation_keywords_survive() {
        let keywords = extract_keywords("Shipped services in C++ and node.js, plus C#");
        assert!(keywords.contains(&"c++".to_string()));
        assert!(keywords.contains(&"node.js".to_string()));
        assert!(keywords.contains(&"c#".to_string()));
    }

    #[test]
    fn test_adversarial_text_degrades_to_separators() {
        let keywords = extract_keywords("🚀🚀 rust ❤️ développeur 中文 kubernetes!!");
        assert!(keywords.contains(&"rust".to_string()));
        assert!(keywords.contains(&"kubernetes".to_string()));
        // non-ASCII runs split into separator-delimited fragments
        assert!(!keywords.iter().any(|k| k.contains('é') || k.contains('中')));
    }

    #[test]
    fn test_empty_input_yields_no_keywords() {
        assert!(extract_keywords("").is_empty());
        assert!(extract_keywords("   \n\t ").is_empty());
    }

    #[test]
    fn test_deterministic() {
        let text = "Senior Rust engineer, 2022. Kubernetes, C++, machine learning.";
        assert_eq!(extract_keywords(text), extract_keywords(text));
    }
}
