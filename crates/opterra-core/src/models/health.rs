use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Health-score banding shared by every screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum HealthBand {
    /// "Needs Attention".
    Critical,
    Fair,
    Healthy,
}

impl HealthBand {
    /// Scores below this are critical.
    pub const CRITICAL_BELOW: f64 = 30.0;
    /// Scores at or above this are healthy.
    pub const HEALTHY_FROM: f64 = 60.0;

    pub fn from_score(health_score: f64) -> Self {
        if health_score < Self::CRITICAL_BELOW {
            HealthBand::Critical
        } else if health_score < Self::HEALTHY_FROM {
            HealthBand::Fair
        } else {
            HealthBand::Healthy
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HealthBand::Critical => "Needs Attention",
            HealthBand::Fair => "Fair",
            HealthBand::Healthy => "Healthy",
        }
    }

    /// The `risk_level` column persisted next to each assessment.
    pub fn risk_level(self) -> RiskLevel {
        match self {
            HealthBand::Critical => RiskLevel::High,
            HealthBand::Fair => RiskLevel::Moderate,
            HealthBand::Healthy => RiskLevel::Low,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "low"),
            RiskLevel::Moderate => write!(f, "moderate"),
            RiskLevel::High => write!(f, "high"),
        }
    }
}
