// Authentiscan Data Models
// Report and component types shared by the scorers and the report assembler

use serde::{Deserialize, Serialize};

// ============ Language ============

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Language {
    English,
    Spanish,
    French,
    Chinese,
    Japanese,
    Arabic,
    Hindi,
    Russian,
    Unknown,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Spanish => "Spanish",
            Self::French => "French",
            Self::Chinese => "Chinese",
            Self::Japanese => "Japanese",
            Self::Arabic => "Arabic",
            Self::Hindi => "Hindi",
            Self::Russian => "Russian",
            Self::Unknown => "Unknown",
        }
    }

    /// Writing system used by the language; Latin is the fallback for Unknown.
    pub fn script(&self) -> ScriptType {
        match self {
            Self::Chinese => ScriptType::Chinese,
            Self::Japanese => ScriptType::Japanese,
            Self::Arabic => ScriptType::Arabic,
            Self::Hindi => ScriptType::Devanagari,
            Self::Russian => ScriptType::Cyrillic,
            Self::English | Self::Spanish | Self::French | Self::Unknown => ScriptType::Latin,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum ScriptType {
    Latin,
    Chinese,
    Japanese,
    Arabic,
    Devanagari,
    Cyrillic,
    Unknown,
}

impl ScriptType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Latin => "Latin",
            Self::Chinese => "Chinese",
            Self::Japanese => "Japanese",
            Self::Arabic => "Arabic",
            Self::Devanagari => "Devanagari",
            Self::Cyrillic => "Cyrillic",
            Self::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageProfile {
    pub detected_language: Language,
    pub script_type: ScriptType,
    /// Fixed placeholder, not a measured statistic.
    pub confidence_percent: f64,
}

// ============ Component Metrics ============

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DiversityMetrics {
    pub word_count: usize,
    pub unique_word_count: usize,
    /// unique / total, 0 for an empty token sequence
    pub ratio: f64,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RepetitionMetrics {
    pub phrases: Vec<String>,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DensityMetrics {
    pub stop_word_count: usize,
    pub lexical_density: f64,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct StructureMetrics {
    pub sentence_count: usize,
    pub mean_words: f64,
    pub variance: f64,
    pub score: f64,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    Diversity,
    Repetition,
    LexicalDensity,
    Structure,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 4] = [
        ComponentKind::Diversity,
        ComponentKind::Repetition,
        ComponentKind::LexicalDensity,
        ComponentKind::Structure,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Diversity => "Lexical Diversity",
            Self::Repetition => "Phrase Repetition",
            Self::LexicalDensity => "Lexical Density",
            Self::Structure => "Structural Variance",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentScore {
    pub name: ComponentKind,
    pub value: f64,
    pub cap: f64,
}

// ============ Tier ============

/// Ordered from least to most severe so `Ord` follows risk.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum RiskTier {
    Authentic,
    Suspicious,
    HighRisk,
    Critical,
}

impl RiskTier {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Authentic => "Authentic",
            Self::Suspicious => "Suspicious",
            Self::HighRisk => "High Risk",
            Self::Critical => "Critical",
        }
    }

    /// Inclusive 0-100 range of the risk-meter band for this tier.
    pub fn meter_band(&self) -> (u8, u8) {
        match self {
            Self::Authentic => (0, 10),
            Self::Suspicious => (11, 30),
            Self::HighRisk => (31, 60),
            Self::Critical => (61, 100),
        }
    }
}

// ============ Report ============

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSection {
    pub description: String,
    #[serde(rename = "match")]
    pub is_match: bool,
    pub confidence: f64,
    #[serde(default)]
    pub sub_details: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticityReport {
    pub forgery_score: f64,
    pub is_forged: bool,
    pub tier: RiskTier,
    pub language: LanguageProfile,
    pub sections: Vec<ReportSection>,
    pub components: Vec<ComponentScore>,
    pub word_count: usize,
    pub unique_word_count: usize,
    #[serde(default)]
    pub repeated_phrases: Vec<String>,
    /// Set when the token sequence was cut down to the configured ceiling.
    #[serde(default)]
    pub truncated: bool,
}

impl AuthenticityReport {
    pub fn component(&self, kind: ComponentKind) -> Option<&ComponentScore> {
        self.components.iter().find(|c| c.name == kind)
    }

    /// Score clamped onto the 0-100 risk meter.
    pub fn meter_position(&self) -> f64 {
        self.forgery_score.clamp(0.0, 100.0)
    }
}
