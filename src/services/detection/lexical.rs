// Lexical Scorers
// Vocabulary diversity (type-token ratio) and stop-word density

use std::collections::HashSet;

use crate::models::{DensityMetrics, DiversityMetrics};

/// Type-token ratio scaled onto `cap`; low diversity scores high.
///
/// An empty token sequence carries no evidence either way, so it reports a
/// ratio of 0 and contributes nothing.
pub fn diversity(tokens: &[String], cap: f64) -> DiversityMetrics {
    let word_count = tokens.len();
    if word_count == 0 {
        return DiversityMetrics::default();
    }

    let unique: HashSet<&str> = tokens.iter().map(|t| t.as_str()).collect();
    let unique_word_count = unique.len();
    let ratio = unique_word_count as f64 / word_count as f64;

    DiversityMetrics {
        word_count,
        unique_word_count,
        ratio,
        score: (1.0 - ratio) * cap,
    }
}

/// Stop-word share scaled onto `cap`. A higher share of stop-words scores
/// higher.
pub fn density(tokens: &[String], stop_words: &[String], cap: f64) -> DensityMetrics {
    if tokens.is_empty() {
        return DensityMetrics {
            stop_word_count: 0,
            lexical_density: 1.0,
            score: 0.0,
        };
    }

    let stop: HashSet<&str> = stop_words.iter().map(|s| s.as_str()).collect();
    let stop_word_count = tokens.iter().filter(|t| stop.contains(t.as_str())).count();
    let lexical_density = 1.0 - stop_word_count as f64 / tokens.len() as f64;

    DensityMetrics {
        stop_word_count,
        lexical_density,
        score: (1.0 - lexical_density) * cap,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::config_store::EngineConfig;
    use crate::services::text_processor::tokenize;

    fn words(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("word{}", i)).collect()
    }

    #[test]
    fn test_diversity_empty_is_neutral() {
        let m = diversity(&[], 30.0);
        assert_eq!(m.word_count, 0);
        assert_eq!(m.ratio, 0.0);
        assert_eq!(m.score, 0.0);
    }

    #[test]
    fn test_diversity_all_unique_scores_zero() {
        let m = diversity(&words(100), 30.0);
        assert_eq!(m.unique_word_count, 100);
        assert_eq!(m.score, 0.0);
    }

    #[test]
    fn test_diversity_single_word_repeated() {
        let tokens = vec!["echo".to_string(); 100];
        let m = diversity(&tokens, 30.0);
        assert_eq!(m.unique_word_count, 1);
        assert!((m.score - 29.7).abs() < 1e-9);
        assert!(m.score > diversity(&words(100), 30.0).score);
    }

    #[test]
    fn test_density_counts_stop_words() {
        let config = EngineConfig::default();
        let tokens = tokenize("the cat and the dog went to market");
        // the, and, the, to
        let m = density(&tokens, &config.stop_words, 20.0);
        assert_eq!(m.stop_word_count, 4);
        assert!((m.lexical_density - 0.5).abs() < 1e-9);
        assert!((m.score - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_density_empty_is_neutral() {
        let config = EngineConfig::default();
        let m = density(&[], &config.stop_words, 20.0);
        assert_eq!(m.lexical_density, 1.0);
        assert_eq!(m.score, 0.0);
    }

    #[test]
    fn test_density_bounded_by_cap() {
        let config = EngineConfig::default();
        let tokens = tokenize("the the the of of and and in in that");
        let m = density(&tokens, &config.stop_words, 20.0);
        assert!((m.score - 20.0).abs() < 1e-9);
    }
}
