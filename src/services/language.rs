// Language Identification
// Character-class counting over raw text; no statistical model

use regex::Regex;
use std::sync::OnceLock;

use crate::models::{Language, LanguageProfile};

/// Declaration order doubles as the tie-break order.
const LANGUAGE_PATTERNS: [(Language, &str); 8] = [
    (Language::English, r"[A-Za-z]{4,}"),
    (Language::Spanish, r"(?i)[áéíóúñ¿¡]"),
    (Language::French, r"(?i)[àâçéèêëîïôûùüÿœæ]"),
    (Language::Chinese, r"[\u{4e00}-\u{9fff}]"),
    (Language::Japanese, r"[\u{3040}-\u{309f}\u{30a0}-\u{30ff}]"),
    (Language::Arabic, r"[\u{0600}-\u{06ff}]"),
    (Language::Hindi, r"[\u{0900}-\u{097f}]"),
    (Language::Russian, r"[\u{0400}-\u{04ff}]"),
];

fn language_res() -> &'static [(Language, Regex)] {
    static RES: OnceLock<Vec<(Language, Regex)>> = OnceLock::new();
    RES.get_or_init(|| {
        LANGUAGE_PATTERNS
            .iter()
            .map(|(lang, pattern)| (*lang, Regex::new(pattern).expect("language regex")))
            .collect()
    })
}

/// Match count per language, in declaration order
pub fn language_counts(text: &str) -> Vec<(Language, usize)> {
    language_res()
        .iter()
        .map(|(lang, re)| (*lang, re.find_iter(text).count()))
        .collect()
}

pub fn detect_language(text: &str) -> Language {
    let mut best = Language::Unknown;
    let mut best_count = 0usize;
    for (lang, count) in language_counts(text) {
        // strictly greater keeps the earlier language on ties
        if count > best_count {
            best = lang;
            best_count = count;
        }
    }
    best
}

/// Build the language profile; `confidence_percent` is the configured constant.
pub fn identify(text: &str, confidence_percent: f64) -> LanguageProfile {
    let detected_language = detect_language(text);
    LanguageProfile {
        detected_language,
        script_type: detected_language.script(),
        confidence_percent,
    }
}
