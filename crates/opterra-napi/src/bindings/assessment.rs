//! Assessment bindings: calculateRisk, evaluateFull, evaluateBatch, healthScore, isTankless.

use napi_derive::napi;
use opterra_core::{FuelType, ForensicInputs};

use crate::conversions::{error_types, json};
use crate::runtime;

/// Full assessment for one unit. Results are cached by input fingerprint.
#[napi]
pub fn opterra_calculate_risk(input: serde_json::Value) -> napi::Result<serde_json::Value> {
    let rt = runtime::get()?;
    let input: ForensicInputs = json::from_js(input)?;
    json::to_js(&rt.engine.calculate(&input))
}

/// Assessment plus infrastructure findings, schedule and merged task plan.
#[napi]
pub fn opterra_evaluate_full(input: serde_json::Value) -> napi::Result<serde_json::Value> {
    let rt = runtime::get()?;
    let input: ForensicInputs = json::from_js(input)?;
    json::to_js(&rt.engine.evaluate_full(&input))
}

/// Assess many units in parallel. Output order matches input order.
#[napi]
pub fn opterra_evaluate_batch(inputs: serde_json::Value) -> napi::Result<serde_json::Value> {
    let rt = runtime::get()?;
    let inputs: Vec<ForensicInputs> = json::from_js(inputs)?;
    json::to_js(&rt.engine.evaluate_batch(&inputs))
}

/// Map a failure probability (percent) to a 0–100 health score.
#[napi]
pub fn opterra_health_score(fail_prob: f64) -> napi::Result<f64> {
    if fail_prob.is_nan() {
        return Err(error_types::invalid_argument("fail_prob", "must be a number"));
    }
    Ok(opterra_engine::fail_prob_to_health_score(fail_prob))
}

#[napi]
pub fn opterra_is_tankless(fuel_type: String) -> napi::Result<bool> {
    let fuel: FuelType = json::from_js(serde_json::Value::String(fuel_type))?;
    Ok(opterra_engine::is_tankless(fuel))
}
