// Structural Variance Scorer
// Sentence-length spread measured in whitespace-separated words

use crate::models::StructureMetrics;
use crate::services::text_processor::split_sentences;

/// Population variance of sentence word counts, divided by `divisor` and
/// capped. Fewer than two sentences yields `fallback`.
pub fn structure(text: &str, divisor: f64, fallback: f64, cap: f64) -> StructureMetrics {
    let counts: Vec<f64> = split_sentences(text)
        .iter()
        .map(|s| s.split_whitespace().count() as f64)
        .collect();

    if counts.len() < 2 {
        return StructureMetrics {
            sentence_count: counts.len(),
            mean_words: counts.first().copied().unwrap_or(0.0),
            variance: 0.0,
            score: fallback,
        };
    }

    let n = counts.len() as f64;
    let mean = counts.iter().sum::<f64>() / n;
    let variance = counts.iter().map(|c| (c - mean).powi(2)).sum::<f64>() / n;

    StructureMetrics {
        sentence_count: counts.len(),
        mean_words: mean,
        variance,
        score: (variance / divisor).min(cap),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_sentence_uses_fallback() {
        let m = structure("Only one sentence here", 2.0, 5.0, 20.0);
        assert_eq!(m.sentence_count, 1);
        assert_eq!(m.score, 5.0);
        assert_eq!(structure("", 2.0, 5.0, 20.0).score, 5.0);
    }

    #[test]
    fn test_uniform_sentences_score_zero() {
        let m = structure("One two three. Four five six! Seven eight nine?", 2.0, 5.0, 20.0);
        assert_eq!(m.sentence_count, 3);
        assert_eq!(m.mean_words, 3.0);
        assert_eq!(m.score, 0.0);
    }

    #[test]
    fn test_variance_halved() {
        // word counts 2 and 12: mean 7, variance 25
        let text = "Hi there. This sentence has quite a lot more words in it than before.";
        let m = structure(text, 2.0, 5.0, 20.0);
        assert_eq!(m.variance, 25.0);
        assert_eq!(m.score, 12.5);
    }

    #[test]
    fn test_score_capped() {
        let long = "word ".repeat(60);
        let text = format!("Short. {}.", long);
        let m = structure(&text, 2.0, 5.0, 20.0);
        assert!(m.variance > 40.0);
        assert_eq!(m.score, 20.0);
    }
}
