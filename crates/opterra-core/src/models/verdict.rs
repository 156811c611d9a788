use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Recommended course of action, most to least severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    Replace,
    Repair,
    Upgrade,
    Maintain,
    Pass,
}

/// Coarse UI-facing classification of a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Badge {
    Critical,
    Warning,
    Service,
    Healthy,
}

/// Machine-usable cause behind a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum VerdictReason {
    TankLeak,
    HeatExchangerLeak,
    ScaleLockout,
    EndOfLife,
    ViolationLowHealth,
    CodeViolation,
    FittingLeak,
    WearAccelerated,
    InfrastructureRisk,
    ServiceDue,
    Healthy,
}

impl VerdictReason {
    pub fn as_str(self) -> &'static str {
        match self {
            VerdictReason::TankLeak => "tank_leak",
            VerdictReason::HeatExchangerLeak => "heat_exchanger_leak",
            VerdictReason::ScaleLockout => "scale_lockout",
            VerdictReason::EndOfLife => "end_of_life",
            VerdictReason::ViolationLowHealth => "violation_low_health",
            VerdictReason::CodeViolation => "code_violation",
            VerdictReason::FittingLeak => "fitting_leak",
            VerdictReason::WearAccelerated => "wear_accelerated",
            VerdictReason::InfrastructureRisk => "infrastructure_risk",
            VerdictReason::ServiceDue => "service_due",
            VerdictReason::Healthy => "healthy",
        }
    }
}

/// The engine's verdict for one unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Recommendation {
    pub action: Action,
    pub badge: Badge,
    pub reason: VerdictReason,
    /// One-sentence explanation for the homeowner.
    pub headline: String,
}
