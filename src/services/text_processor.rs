// Text Processing Service
// Tokenization and sentence splitting over extracted document text

use regex::Regex;
use std::sync::OnceLock;

fn non_word_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^\p{L}\p{M}\p{N}_]+").expect("non-word regex"))
}

fn sentence_end_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[.!?]").expect("sentence end regex"))
}

/// Lowercase, strip everything but letters (with their combining marks),
/// digits and underscore, and drop single-character tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let lowered = text.to_lowercase();
    let cleaned = non_word_re().replace_all(&lowered, " ");

    cleaned
        .split_whitespace()
        .filter(|t| t.chars().count() > 1)
        .map(|t| t.to_string())
        .collect()
}

/// Split on `.`, `!` and `?`, discarding blank fragments
pub fn split_sentences(text: &str) -> Vec<&str> {
    sentence_end_re()
        .split(text)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Truncate to `max_chars` characters (not bytes)
pub fn preview(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}
