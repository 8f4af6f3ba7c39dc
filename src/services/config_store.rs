// Configuration Storage Service
// Engine tuning constants plus config file read/write and version backup

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{EngineError, EngineResult};

/// What to do when the token sequence exceeds `max_tokens`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OversizePolicy {
    #[default]
    Reject,
    Truncate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentCaps {
    #[serde(default = "default_diversity_cap")]
    pub diversity: f64,
    #[serde(default = "default_repetition_cap")]
    pub repetition: f64,
    #[serde(default = "default_lexical_density_cap")]
    pub lexical_density: f64,
    #[serde(default = "default_structure_cap")]
    pub structure: f64,
}

impl Default for ComponentCaps {
    fn default() -> Self {
        Self {
            diversity: 30.0,
            repetition: 30.0,
            lexical_density: 20.0,
            structure: 20.0,
        }
    }
}

/// Upper bounds (inclusive) of the first three tiers; anything above
/// `high_risk_max` is Critical.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierThresholds {
    #[serde(default = "default_authentic_max")]
    pub authentic_max: f64,
    #[serde(default = "default_suspicious_max")]
    pub suspicious_max: f64,
    #[serde(default = "default_high_risk_max")]
    pub high_risk_max: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            authentic_max: 10.0,
            suspicious_max: 30.0,
            high_risk_max: 60.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig {
    #[serde(default = "default_phrase_window")]
    pub phrase_window: usize,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: usize,
    #[serde(default)]
    pub oversize_policy: OversizePolicy,
    #[serde(default = "default_language_confidence")]
    pub language_confidence: f64,
    #[serde(default = "default_stop_words")]
    pub stop_words: Vec<String>,
    #[serde(default)]
    pub caps: ComponentCaps,
    #[serde(default = "default_repetition_points")]
    pub repetition_points_per_phrase: f64,
    #[serde(default = "default_variance_divisor")]
    pub structure_variance_divisor: f64,
    #[serde(default = "default_structure_fallback")]
    pub structure_fallback_score: f64,
    #[serde(default)]
    pub tiers: TierThresholds,
    #[serde(default = "default_materiality")]
    pub materiality_ratio: f64,
    #[serde(default = "default_max_examples")]
    pub max_example_phrases: usize,
    #[serde(default = "default_example_chars")]
    pub example_phrase_chars: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            phrase_window: default_phrase_window(),
            max_tokens: default_max_tokens(),
            oversize_policy: OversizePolicy::Reject,
            language_confidence: default_language_confidence(),
            stop_words: default_stop_words(),
            caps: ComponentCaps::default(),
            repetition_points_per_phrase: default_repetition_points(),
            structure_variance_divisor: default_variance_divisor(),
            structure_fallback_score: default_structure_fallback(),
            tiers: TierThresholds::default(),
            materiality_ratio: default_materiality(),
            max_example_phrases: default_max_examples(),
            example_phrase_chars: default_example_chars(),
        }
    }
}

fn default_diversity_cap() -> f64 { 30.0 }
fn default_repetition_cap() -> f64 { 30.0 }
fn default_lexical_density_cap() -> f64 { 20.0 }
fn default_structure_cap() -> f64 { 20.0 }
fn default_authentic_max() -> f64 { 10.0 }
fn default_suspicious_max() -> f64 { 30.0 }
fn default_high_risk_max() -> f64 { 60.0 }
fn default_phrase_window() -> usize { 5 }
fn default_max_tokens() -> usize { 5000 }
fn default_language_confidence() -> f64 { 85.0 }
fn default_repetition_points() -> f64 { 2.0 }
fn default_variance_divisor() -> f64 { 2.0 }
fn default_structure_fallback() -> f64 { 5.0 }
fn default_materiality() -> f64 { 0.5 }
fn default_max_examples() -> usize { 3 }
fn default_example_chars() -> usize { 40 }

fn default_stop_words() -> Vec<String> {
    ["the", "be", "to", "of", "and", "a", "in", "that"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl EngineConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> EngineResult<()> {
        if self.phrase_window == 0 {
            return Err(EngineError::Config("phraseWindow must be at least 1".to_string()));
        }
        if self.max_tokens < self.phrase_window * 2 {
            return Err(EngineError::Config(format!(
                "maxTokens must be at least twice phraseWindow, got {} < {}",
                self.max_tokens,
                self.phrase_window * 2
            )));
        }
        let caps = [
            ("caps.diversity", self.caps.diversity),
            ("caps.repetition", self.caps.repetition),
            ("caps.lexicalDensity", self.caps.lexical_density),
            ("caps.structure", self.caps.structure),
        ];
        for (name, value) in caps {
            if !value.is_finite() || value < 0.0 {
                return Err(EngineError::Config(format!(
                    "{} must be a finite non-negative number, got {}",
                    name, value
                )));
            }
        }
        if !(0.0..=100.0).contains(&self.language_confidence) {
            return Err(EngineError::Config(format!(
                "languageConfidence must be in [0, 100], got {}",
                self.language_confidence
            )));
        }
        let non_negative = |x: f64| x.is_finite() && x >= 0.0;
        if !non_negative(self.repetition_points_per_phrase) || !non_negative(self.structure_fallback_score) {
            return Err(EngineError::Config(
                "repetitionPointsPerPhrase and structureFallbackScore must be finite and non-negative".to_string(),
            ));
        }
        if !(self.structure_variance_divisor.is_finite() && self.structure_variance_divisor > 0.0) {
            return Err(EngineError::Config(format!(
                "structureVarianceDivisor must be finite and positive, got {}",
                self.structure_variance_divisor
            )));
        }
        let t = &self.tiers;
        if !(t.authentic_max < t.suspicious_max && t.suspicious_max < t.high_risk_max) {
            return Err(EngineError::Config(format!(
                "tier thresholds must be strictly increasing, got {} / {} / {}",
                t.authentic_max, t.suspicious_max, t.high_risk_max
            )));
        }
        if !(self.materiality_ratio > 0.0 && self.materiality_ratio <= 1.0) {
            return Err(EngineError::Config(format!(
                "materialityRatio must be in (0, 1], got {}",
                self.materiality_ratio
            )));
        }
        Ok(())
    }
}

pub struct ConfigStore {
    config_dir: PathBuf,
    config_file: PathBuf,
}

impl ConfigStore {
    pub fn new(config_dir: PathBuf) -> Self {
        let config_file = config_dir.join("config.json");
        Self { config_dir, config_file }
    }

    /// Get default config directory
    pub fn default_config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("authentiscan"))
    }

    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    /// Load configuration, falling back to defaults when no file exists
    pub fn load(&self) -> EngineResult<EngineConfig> {
        if !self.config_file.exists() {
            return Ok(EngineConfig::default());
        }
        load_config_file(&self.config_file)
    }

    /// Save configuration to file
    pub fn save(&self, config: &EngineConfig) -> EngineResult<()> {
        config.validate()?;
        fs::create_dir_all(&self.config_dir)?;

        if self.config_file.exists() {
            self.create_backup()?;
        }

        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.config_file, content)?;
        Ok(())
    }

    fn create_backup(&self) -> EngineResult<()> {
        let backup_dir = self.config_dir.join("backups");
        fs::create_dir_all(&backup_dir)?;

        let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S%.3f");
        let backup_file = backup_dir.join(format!("config_{}.json", timestamp));
        fs::copy(&self.config_file, &backup_file)?;

        self.cleanup_old_backups(&backup_dir, 10)
    }

    /// Remove old backups, keeping only the most recent N
    fn cleanup_old_backups(&self, backup_dir: &Path, keep: usize) -> EngineResult<()> {
        let mut entries: Vec<_> = fs::read_dir(backup_dir)?
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().map_or(false, |ext| ext == "json"))
            .collect();

        if entries.len() <= keep {
            return Ok(());
        }

        // Oldest first; names embed the timestamp so they sort chronologically.
        entries.sort_by_key(|e| e.file_name());

        for entry in entries.iter().take(entries.len() - keep) {
            let _ = fs::remove_file(entry.path());
        }

        Ok(())
    }
}

/// Read and validate a standalone config file
pub fn load_config_file(path: &Path) -> EngineResult<EngineConfig> {
    let content = fs::read_to_string(path)?;
    let config: EngineConfig = serde_json::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.phrase_window, 5);
        assert_eq!(config.caps.diversity, 30.0);
        assert_eq!(config.tiers.high_risk_max, 60.0);
        assert_eq!(config.stop_words.len(), 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let parsed: EngineConfig =
            serde_json::from_str(r#"{"maxTokens": 200, "caps": {"structure": 10}}"#).unwrap();
        assert_eq!(parsed.max_tokens, 200);
        assert_eq!(parsed.caps.structure, 10.0);
        assert_eq!(parsed.caps.repetition, 30.0);
        assert_eq!(parsed.oversize_policy, OversizePolicy::Reject);
        assert_eq!(parsed.language_confidence, 85.0);
    }

    #[test]
    fn test_validate_rejects_unordered_tiers() {
        let mut config = EngineConfig::default();
        config.tiers.suspicious_max = 5.0;
        assert!(matches!(config.validate(), Err(EngineError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_zero_window() {
        let mut config = EngineConfig::default();
        config.phrase_window = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_nan_scaling() {
        let mut config = EngineConfig::default();
        config.repetition_points_per_phrase = f64::NAN;
        assert!(matches!(config.validate(), Err(EngineError::Config(_))));

        let mut config = EngineConfig::default();
        config.structure_variance_divisor = f64::NAN;
        assert!(matches!(config.validate(), Err(EngineError::Config(_))));

        let mut config = EngineConfig::default();
        config.structure_fallback_score = f64::INFINITY;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_store_missing_file_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(dir.path().join("cfg"));
        assert_eq!(store.load().unwrap(), EngineConfig::default());
    }

    #[test]
    fn test_store_save_load_and_backup() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(dir.path().to_path_buf());

        let mut config = EngineConfig::default();
        config.max_tokens = 1200;
        store.save(&config).unwrap();
        config.oversize_policy = OversizePolicy::Truncate;
        store.save(&config).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.max_tokens, 1200);
        assert_eq!(loaded.oversize_policy, OversizePolicy::Truncate);

        let backups = fs::read_dir(dir.path().join("backups")).unwrap().count();
        assert_eq!(backups, 1);
    }

    #[test]
    fn test_store_refuses_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(dir.path().to_path_buf());
        let mut config = EngineConfig::default();
        config.materiality_ratio = 0.0;
        assert!(store.save(&config).is_err());
        assert!(!store.config_file().exists());
    }
}
