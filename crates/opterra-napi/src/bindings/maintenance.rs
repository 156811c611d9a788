//! Maintenance bindings: schedule, infrastructure findings, infrastructure tasks.

use napi_derive::napi;
use opterra_core::ForensicInputs;

use crate::conversions::json;
use crate::runtime;

#[napi]
pub fn opterra_maintenance_schedule(input: serde_json::Value) -> napi::Result<serde_json::Value> {
    let rt = runtime::get()?;
    let input: ForensicInputs = json::from_js(input)?;
    let metrics = rt.engine.metrics(&input.normalized());
    json::to_js(&rt.engine.maintenance_schedule(&input, &metrics))
}

#[napi]
pub fn opterra_infrastructure_issues(input: serde_json::Value) -> napi::Result<serde_json::Value> {
    let rt = runtime::get()?;
    let input: ForensicInputs = json::from_js(input)?;
    let metrics = rt.engine.metrics(&input.normalized());
    json::to_js(&rt.engine.infrastructure_issues(&input, &metrics))
}

/// Tasks that fix code violations only.
#[napi]
pub fn opterra_infrastructure_tasks(input: serde_json::Value) -> napi::Result<serde_json::Value> {
    let rt = runtime::get()?;
    let input = input_normalized(input)?;
    let metrics = rt.engine.metrics(&input);
    json::to_js(&opterra_engine::maintenance::get_infrastructure_maintenance_tasks(
        &input, &metrics,
    ))
}

fn input_normalized(value: serde_json::Value) -> napi::Result<ForensicInputs> {
    let input: ForensicInputs = json::from_js(value)?;
    Ok(input.normalized())
}
