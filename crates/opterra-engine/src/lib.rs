//! # opterra-engine
//!
//! Water-heater risk and aging engine.
//!
//! Turns a [`ForensicInputs`] snapshot into stress factors, a biological age,
//! a Weibull failure probability, a health score and a verdict, and derives
//! maintenance schedules, infrastructure findings, forward projections and
//! repair simulations from the same metrics.
//!
//! The free functions below run against the shipped calibration. Use
//! [`OpterraEngine`] to supply a custom [`OpterraConfig`] or enable caching.

pub mod aging;
pub mod engine;
pub mod factors;
pub mod failure;
pub mod infrastructure;
pub mod maintenance;
pub mod projection;
pub mod repair;
pub mod snapshot;
pub mod spans;
pub mod verdict;

use std::sync::LazyLock;

use opterra_core::models::{
    LifespanCurve, Projection, RepairBaseline, RepairOption, SimulatedResult,
};
use opterra_core::{
    ForensicInputs, FuelType, InfrastructureIssue, MaintenanceSchedule, MaintenanceTask,
    OpterraConfig, OpterraMetrics, OpterraResult,
};

pub use engine::OpterraEngine;
pub use snapshot::{capture_snapshot, verify_snapshot};

static DEFAULT_ENGINE: LazyLock<OpterraEngine> = LazyLock::new(|| {
    let mut config = OpterraConfig::default();
    config.engine.cache_capacity = 0;
    OpterraEngine::with_config(config)
});

/// Full assessment with the default calibration.
pub fn calculate_opterra_risk(input: &ForensicInputs) -> OpterraResult {
    DEFAULT_ENGINE.calculate_uncached(input)
}

pub use failure::fail_prob_to_health_score;

pub fn project_future_health(
    bio_age: f64,
    aging_rate: f64,
    months: u32,
    curve: &LifespanCurve,
) -> Projection {
    projection::project_future_health(bio_age, aging_rate, months, curve)
}

pub fn simulate_repairs(baseline: &RepairBaseline, repairs: &[RepairOption]) -> SimulatedResult {
    repair::simulate_repairs(baseline, repairs, &DEFAULT_ENGINE.config().stress)
}

pub fn calculate_maintenance_schedule(
    input: &ForensicInputs,
    metrics: &OpterraMetrics,
) -> MaintenanceSchedule {
    DEFAULT_ENGINE.maintenance_schedule(input, metrics)
}

pub fn get_infrastructure_issues(
    input: &ForensicInputs,
    metrics: &OpterraMetrics,
) -> Vec<InfrastructureIssue> {
    DEFAULT_ENGINE.infrastructure_issues(input, metrics)
}

pub fn get_infrastructure_maintenance_tasks(
    input: &ForensicInputs,
    metrics: &OpterraMetrics,
) -> Vec<MaintenanceTask> {
    maintenance::get_infrastructure_maintenance_tasks(&input.normalized(), metrics)
}

pub fn is_tankless(fuel_type: FuelType) -> bool {
    fuel_type.is_tankless()
}
