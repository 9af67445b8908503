//! Composite Aggregator — fixed-weight combination of the three engine
//! scores. Weights are constants, not configuration.

use super::round_to_tenth;

pub const KEYWORD_WEIGHT: f64 = 0.3;
pub const SEMANTIC_WEIGHT: f64 = 0.3;
pub const AI_WEIGHT: f64 = 0.4;

/// Combines three validated 0–100 scores into the headline number.
/// Convex combination, so inputs in [0, 100] guarantee output in [0, 100].
pub fn composite_score(keyword: f64, semantic: f64, ai: f64) -> f64 {
    round_to_tenth(keyword * KEYWORD_WEIGHT + semantic * SEMANTIC_WEIGHT + ai * AI_WEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_one() {
        assert!((KEYWORD_WEIGHT + SEMANTIC_WEIGHT + AI_WEIGHT - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_exact_weighted_sum() {
        // 0.3*80 + 0.3*90 + 0.4*70 = 24 + 27 + 28 = 79.0
        assert_eq!(composite_score(80.0, 90.0, 70.0), 79.0);
    }

    #[test]
    fn test_rounded_to_one_decimal() {
        // 0.3*33.3 + 0.3*33.3 + 0.4*33.4 = 9.99 + 9.99 + 13.36 = 33.34
        assert_eq!(composite_score(33.3, 33.3, 33.4), 33.3);
    }

    #[test]
    fn test_bounds_hold_over_grid() {
        for a in [0.0, 12.5, 50.0, 99.9, 100.0] {
            for b in [0.0, 33.3, 66.7, 100.0] {
                for c in [0.0, 41.2, 100.0] {
                    let score = composite_score(a, b, c);
                    assert!(
                        (0.0..=100.0).contains(&score),
                        "composite({a}, {b}, {c}) = {score} out of bounds"
                    );
                }
            }
        }
    }

    #[test]
    fn test_all_zero_and_all_hundred() {
        assert_eq!(composite_score(0.0, 0.0, 0.0), 0.0);
        assert_eq!(composite_score(100.0, 100.0, 100.0), 100.0);
    }
}
