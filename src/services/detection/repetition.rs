// Repetition Detector
// Finds fixed-length phrase windows that reappear later in the token stream

use std::collections::HashSet;

use crate::models::RepetitionMetrics;

/// Distinct phrases of `window` tokens that recur without overlapping their
/// first occurrence, in first-seen order.
///
/// Sequences shorter than two windows cannot hold a non-overlapping repeat.
/// Cost is quadratic in `tokens.len()`; callers bound the length first.
pub fn find_repeated_phrases(tokens: &[String], window: usize) -> Vec<String> {
    if window == 0 || tokens.len() < window * 2 {
        return Vec::new();
    }

    let last_start = tokens.len() - window;
    let mut seen: HashSet<String> = HashSet::new();
    let mut phrases = Vec::new();

    for i in 0..=last_start {
        let head = &tokens[i..i + window];
        let recurs = (i + window..=last_start).any(|j| &tokens[j..j + window] == head);
        if recurs {
            let phrase = head.join(" ");
            if seen.insert(phrase.clone()) {
                phrases.push(phrase);
            }
        }
    }

    phrases
}

pub fn repetition(
    tokens: &[String],
    window: usize,
    points_per_phrase: f64,
    cap: f64,
) -> RepetitionMetrics {
    let phrases = find_repeated_phrases(tokens, window);
    let score = (phrases.len() as f64 * points_per_phrase).min(cap);
    RepetitionMetrics { phrases, score }
}
