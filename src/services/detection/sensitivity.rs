// Sensitivity utilities
// Tier breakpoints and the materiality gate for component flags

use crate::models::RiskTier;
use crate::services::config_store::TierThresholds;

/// Map a composite score onto a tier. Each band's upper bound is inclusive.
pub fn classify_tier(score: f64, thresholds: &TierThresholds) -> RiskTier {
    if score <= thresholds.authentic_max {
        RiskTier::Authentic
    } else if score <= thresholds.suspicious_max {
        RiskTier::Suspicious
    } else if score <= thresholds.high_risk_max {
        RiskTier::HighRisk
    } else {
        RiskTier::Critical
    }
}

pub fn is_forged(score: f64, thresholds: &TierThresholds) -> bool {
    score > thresholds.authentic_max
}

/// A component is material once it exceeds `ratio` of its cap.
pub fn is_material(value: f64, cap: f64, ratio: f64) -> bool {
    value > cap * ratio
}

/// Share of the composite score, in percent; 0 when the composite is 0.
pub fn contribution_percent(value: f64, total: f64) -> f64 {
    if total <= 0.0 {
        return 0.0;
    }
    value / total * 100.0
}
