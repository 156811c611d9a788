//! Simulation bindings: projectFutureHealth, projectTimeline, simulateRepairs.

use napi_derive::napi;
use opterra_core::constants::MAX_PROJECTION_MONTHS;
use opterra_core::models::{LifespanCurve, RepairBaseline, RepairOption};
use opterra_core::ForensicInputs;

use crate::conversions::{error_types, json};
use crate::runtime;

/// Project health forward from explicit metrics. Negative horizons clamp to 0.
#[napi]
pub fn opterra_project_future_health(
    bio_age: f64,
    aging_rate: f64,
    months: f64,
    curve: serde_json::Value,
) -> napi::Result<serde_json::Value> {
    let curve: LifespanCurve = json::from_js(curve)?;
    let months = to_months(months)?;
    json::to_js(&opterra_engine::project_future_health(
        bio_age, aging_rate, months, &curve,
    ))
}

/// Projections for one unit at each requested horizon.
#[napi]
pub fn opterra_project_timeline(
    input: serde_json::Value,
    horizons: Vec<f64>,
) -> napi::Result<serde_json::Value> {
    let rt = runtime::get()?;
    let input: ForensicInputs = json::from_js(input)?;
    let metrics = rt.engine.metrics(&input.normalized());
    let horizons = horizons
        .into_iter()
        .map(to_months)
        .collect::<napi::Result<Vec<_>>>()?;
    json::to_js(&opterra_engine::projection::project_timeline(&metrics, &horizons))
}

#[napi]
pub fn opterra_simulate_repairs(
    baseline: serde_json::Value,
    repairs: serde_json::Value,
) -> napi::Result<serde_json::Value> {
    let rt = runtime::get()?;
    let baseline: RepairBaseline = json::from_js(baseline)?;
    let repairs: Vec<RepairOption> = json::from_js(repairs)?;
    json::to_js(&rt.engine.simulate(&baseline, &repairs))
}

fn to_months(months: f64) -> napi::Result<u32> {
    if months.is_nan() {
        return Err(error_types::invalid_argument("months", "must be a number"));
    }
    Ok(months.round().clamp(0.0, f64::from(MAX_PROJECTION_MONTHS)) as u32)
}
