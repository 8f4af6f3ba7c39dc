// Aggregation Logic
// Combines component scores into the composite verdict and report sections

use crate::models::{
    AuthenticityReport, ComponentKind, ComponentScore, DensityMetrics, DiversityMetrics, Language,
    LanguageProfile, ReportSection, RepetitionMetrics, StructureMetrics,
};
use crate::services::config_store::EngineConfig;
use crate::services::text_processor::preview;
use super::sensitivity::{classify_tier, contribution_percent, is_forged, is_material};

/// Everything the report assembler consumes, produced by the scorers.
#[derive(Debug, Clone)]
pub struct ComponentResults {
    pub diversity: DiversityMetrics,
    pub repetition: RepetitionMetrics,
    pub density: DensityMetrics,
    pub structure: StructureMetrics,
}

impl ComponentResults {
    pub fn component_scores(&self, config: &EngineConfig) -> Vec<ComponentScore> {
        ComponentKind::ALL
            .iter()
            .map(|kind| {
                let (value, cap) = match kind {
                    ComponentKind::Diversity => (self.diversity.score, config.caps.diversity),
                    ComponentKind::Repetition => (self.repetition.score, config.caps.repetition),
                    ComponentKind::LexicalDensity => (self.density.score, config.caps.lexical_density),
                    ComponentKind::Structure => (self.structure.score, config.caps.structure),
                };
                ComponentScore { name: *kind, value, cap }
            })
            .collect()
    }
}

pub fn compose(
    results: ComponentResults,
    language: LanguageProfile,
    config: &EngineConfig,
    truncated: bool,
) -> AuthenticityReport {
    let components = results.component_scores(config);
    let forgery_score: f64 = components.iter().map(|c| c.value).sum();
    let tier = classify_tier(forgery_score, &config.tiers);
    let forged = is_forged(forgery_score, &config.tiers);

    let mut sections = Vec::with_capacity(3 + components.len());
    sections.push(language_section(&language));
    sections.push(metrics_section(&results.diversity, forgery_score, forged));
    sections.push(pattern_section(&results.repetition, config));
    sections.extend(
        components
            .iter()
            .map(|c| component_section(c, forgery_score, config.materiality_ratio)),
    );

    AuthenticityReport {
        forgery_score,
        is_forged: forged,
        tier,
        language,
        sections,
        components,
        word_count: results.diversity.word_count,
        unique_word_count: results.diversity.unique_word_count,
        repeated_phrases: results.repetition.phrases,
        truncated,
    }
}

fn language_section(language: &LanguageProfile) -> ReportSection {
    ReportSection {
        description: "Language Information".to_string(),
        is_match: language.detected_language != Language::Unknown,
        confidence: language.confidence_percent,
        sub_details: vec![
            format!("Detected language: {}", language.detected_language.as_str()),
            format!("Script type: {}", language.script_type.as_str()),
            format!("Detection confidence: {:.0}%", language.confidence_percent),
        ],
    }
}

fn metrics_section(diversity: &DiversityMetrics, forgery_score: f64, forged: bool) -> ReportSection {
    ReportSection {
        description: "Document Authenticity Metrics".to_string(),
        is_match: forged,
        confidence: (100.0 - forgery_score).clamp(0.0, 100.0),
        sub_details: vec![
            format!("Total words: {}", diversity.word_count),
            format!("Unique words: {}", diversity.unique_word_count),
            format!("Lexical diversity: {:.1}%", diversity.ratio * 100.0),
        ],
    }
}

fn pattern_section(repetition: &RepetitionMetrics, config: &EngineConfig) -> ReportSection {
    let mut sub_details = vec![format!("Repeated phrases: {}", repetition.phrases.len())];
    sub_details.extend(
        repetition
            .phrases
            .iter()
            .take(config.max_example_phrases)
            .map(|p| format!("\"{}\"", preview(p, config.example_phrase_chars))),
    );

    let confidence = if config.caps.repetition > 0.0 {
        repetition.score / config.caps.repetition * 100.0
    } else {
        0.0
    };

    ReportSection {
        description: "Pattern Analysis".to_string(),
        is_match: !repetition.phrases.is_empty(),
        confidence,
        sub_details,
    }
}

fn component_section(component: &ComponentScore, forgery_score: f64, materiality: f64) -> ReportSection {
    let share = contribution_percent(component.value, forgery_score);
    ReportSection {
        description: format!("{} Score", component.name.label()),
        is_match: is_material(component.value, component.cap, materiality),
        confidence: share,
        sub_details: vec![
            format!("Score: {:.2} / {:.0}", component.value, component.cap),
            format!("Contribution: {:.1}% of forgery score", share),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RiskTier;

    fn profile() -> LanguageProfile {
        LanguageProfile {
            detected_language: Language::English,
            script_type: Language::English.script(),
            confidence_percent: 85.0,
        }
    }

    fn results(div: f64, rep: f64, den: f64, st: f64) -> ComponentResults {
        ComponentResults {
            diversity: DiversityMetrics { word_count: 40, unique_word_count: 30, ratio: 0.75, score: div },
            repetition: RepetitionMetrics {
                phrases: vec!["one two three four five".to_string()],
                score: rep,
            },
            density: DensityMetrics { stop_word_count: 4, lexical_density: 0.9, score: den },
            structure: StructureMetrics { sentence_count: 4, mean_words: 10.0, variance: 8.0, score: st },
        }
    }

    #[test]
    fn test_compose_sums_components() {
        let config = EngineConfig::default();
        let report = compose(results(7.5, 2.0, 2.0, 4.0), profile(), &config, false);
        assert!((report.forgery_score - 15.5).abs() < 1e-9);
        assert!(report.is_forged);
        assert_eq!(report.tier, RiskTier::Suspicious);
        assert_eq!(report.components.len(), 4);
    }

    #[test]
    fn test_section_order() {
        let config = EngineConfig::default();
        let report = compose(results(1.0, 0.0, 1.0, 1.0), profile(), &config, false);
        let names: Vec<&str> = report.sections.iter().map(|s| s.description.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Language Information",
                "Document Authenticity Metrics",
                "Pattern Analysis",
                "Lexical Diversity Score",
                "Phrase Repetition Score",
                "Lexical Density Score",
                "Structural Variance Score",
            ]
        );
    }

    #[test]
    fn test_component_materiality_flag() {
        let config = EngineConfig::default();
        let report = compose(results(16.0, 2.0, 10.0, 10.5), profile(), &config, false);
        let flags: Vec<bool> = report.sections[3..].iter().map(|s| s.is_match).collect();
        assert_eq!(flags, vec![true, false, false, true]);
    }

    #[test]
    fn test_pattern_examples_truncated() {
        let config = EngineConfig::default();
        let mut r = results(0.0, 8.0, 0.0, 0.0);
        r.repetition.phrases = vec![
            "supercalifragilistic expialidocious extraordinarily long phrase".to_string(),
            "second phrase".to_string(),
            "third phrase".to_string(),
            "fourth phrase".to_string(),
        ];
        let report = compose(r, profile(), &config, false);
        let pattern = &report.sections[2];
        assert!(pattern.is_match);
        assert_eq!(pattern.sub_details.len(), 4);
        assert_eq!(pattern.sub_details[0], "Repeated phrases: 4");
        assert_eq!(pattern.sub_details[1].chars().count(), 42);
    }

    #[test]
    fn test_zero_score_contributions() {
        let config = EngineConfig::default();
        let report = compose(results(0.0, 0.0, 0.0, 0.0), profile(), &config, false);
        assert_eq!(report.forgery_score, 0.0);
        assert_eq!(report.tier, RiskTier::Authentic);
        assert!(report.sections[3..].iter().all(|s| s.confidence == 0.0));
        assert_eq!(report.sections[1].confidence, 100.0);
    }
}
