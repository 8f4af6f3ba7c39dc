// Analysis API
// Entry points: text in, authenticity report out

use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::AuthenticityReport;
use crate::services::config_store::{EngineConfig, OversizePolicy};
use crate::services::detection::{compose, density, diversity, repetition, structure, ComponentResults};
use crate::services::language::identify;
use crate::services::text_processor::tokenize;

/// Upload cap applied before extraction; the engine itself never sees bytes.
pub const MAX_SOURCE_BYTES: u64 = 2 * 1024 * 1024;

/// Stateless scorer bound to an immutable, validated config.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: EngineConfig,
}

impl Analyzer {
    pub fn new(config: EngineConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Score `text`. Empty text is valid and yields a degenerate report.
    pub fn analyze(&self, text: &str) -> EngineResult<AuthenticityReport> {
        let t0 = Instant::now();
        let config = &self.config;

        let mut tokens = tokenize(text);
        let mut truncated = false;
        if tokens.len() > config.max_tokens {
            match config.oversize_policy {
                OversizePolicy::Reject => {
                    warn!(tokens = tokens.len(), limit = config.max_tokens, "analyze.rejected_oversize");
                    return Err(EngineError::InputTooLarge {
                        tokens: tokens.len(),
                        limit: config.max_tokens,
                    });
                }
                OversizePolicy::Truncate => {
                    warn!(tokens = tokens.len(), limit = config.max_tokens, "analyze.truncated");
                    tokens.truncate(config.max_tokens);
                    truncated = true;
                }
            }
        }

        let language = identify(text, config.language_confidence);
        let results = ComponentResults {
            diversity: diversity(&tokens, config.caps.diversity),
            repetition: repetition(
                &tokens,
                config.phrase_window,
                config.repetition_points_per_phrase,
                config.caps.repetition,
            ),
            density: density(&tokens, &config.stop_words, config.caps.lexical_density),
            structure: structure(
                text,
                config.structure_variance_divisor,
                config.structure_fallback_score,
                config.caps.structure,
            ),
        };
        debug!(
            words = results.diversity.word_count,
            unique = results.diversity.unique_word_count,
            diversity = results.diversity.score,
            repeats = results.repetition.phrases.len(),
            repetition = results.repetition.score,
            density = results.density.score,
            sentences = results.structure.sentence_count,
            structure = results.structure.score,
            "analyze.components"
        );

        let report = compose(results, language, config, truncated);
        info!(
            score = report.forgery_score,
            tier = report.tier.label(),
            language = report.language.detected_language.as_str(),
            elapsed_us = t0.elapsed().as_micros() as u64,
            "analyze.done"
        );
        Ok(report)
    }
}

/// Score `text` with the default constants.
pub fn analyze(text: &str) -> EngineResult<AuthenticityReport> {
    Analyzer::default().analyze(text)
}

/// Same as [`analyze`], but rejects absent input instead of treating it as empty.
pub fn analyze_input(text: Option<&str>) -> EngineResult<AuthenticityReport> {
    let text = text.ok_or(EngineError::MissingInput)?;
    analyze(text)
}

/// Read already-extracted text from disk, enforcing [`MAX_SOURCE_BYTES`].
pub fn read_source(path: &Path) -> EngineResult<String> {
    let bytes = fs::metadata(path)?.len();
    if bytes > MAX_SOURCE_BYTES {
        return Err(EngineError::SourceTooLarge {
            bytes,
            limit: MAX_SOURCE_BYTES,
        });
    }
    let raw = fs::read(path)?;
    Ok(String::from_utf8(raw)?)
}
