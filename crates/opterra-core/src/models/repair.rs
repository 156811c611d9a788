use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::metrics::{LifespanCurve, OpterraMetrics, StressFactors};

/// A repair the homeowner can choose in the what-if simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum RepairOption {
    FullReplacement,
    Flush,
    Descale,
    AnodeReplacement,
    InstallPrv,
    InstallExpansionTank,
    InstallSoftener,
    LowerTemperature,
}

impl RepairOption {
    pub fn label(self) -> &'static str {
        match self {
            RepairOption::FullReplacement => "Replace the water heater",
            RepairOption::Flush => "Flush sediment",
            RepairOption::Descale => "Descale heat exchanger",
            RepairOption::AnodeReplacement => "Replace anode rod",
            RepairOption::InstallPrv => "Install or replace pressure-reducing valve",
            RepairOption::InstallExpansionTank => "Install thermal expansion tank",
            RepairOption::InstallSoftener => "Install water softener",
            RepairOption::LowerTemperature => "Lower tank temperature",
        }
    }
}

/// The current state a repair simulation starts from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RepairBaseline {
    pub current_score: f64,
    pub current_aging_factor: f64,
    pub current_fail_prob: f64,
    pub bio_age: f64,
    pub stress_factors: StressFactors,
    pub lifespan: LifespanCurve,
}

impl RepairBaseline {
    pub fn from_metrics(metrics: &OpterraMetrics) -> Self {
        Self {
            current_score: metrics.health_score,
            current_aging_factor: metrics.aging_rate,
            current_fail_prob: metrics.fail_prob,
            bio_age: metrics.bio_age,
            stress_factors: metrics.stress_factors,
            lifespan: metrics.lifespan,
        }
    }
}

/// Before/after outcome of a repair selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SimulatedResult {
    pub new_score: f64,
    pub new_aging_factor: f64,
    pub new_fail_prob: f64,
    pub new_bio_age: f64,
    pub score_delta: f64,
    /// True when the selection short-circuited to a full replacement.
    pub is_reset: bool,
    pub applied: Vec<RepairOption>,
}
