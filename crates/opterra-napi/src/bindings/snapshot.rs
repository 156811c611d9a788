//! Snapshot bindings: captureSnapshot, verifySnapshot.

use chrono::{DateTime, Utc};
use napi_derive::napi;
use opterra_core::models::AssessmentSnapshot;
use opterra_core::{ForensicInputs, OpterraResult};
use serde_json::json;

use crate::conversions::{error_types, json};
use crate::runtime;

/// Freeze an assessment for storage. `created_at` is RFC 3339; the current
/// time is used when omitted.
#[napi]
pub fn opterra_capture_snapshot(
    input: serde_json::Value,
    result: serde_json::Value,
    created_at: Option<String>,
) -> napi::Result<serde_json::Value> {
    let input: ForensicInputs = json::from_js(input)?;
    let result: OpterraResult = json::from_js(result)?;
    let created_at = match created_at {
        Some(ts) => DateTime::parse_from_rfc3339(&ts)
            .map_err(|e| error_types::invalid_argument("created_at", e.to_string()))?
            .with_timezone(&Utc),
        None => Utc::now(),
    };
    json::to_js(&opterra_engine::capture_snapshot(&input, &result, created_at))
}

/// Audit a stored snapshot against the configured engine.
/// Returns `{ valid, error }` rather than throwing on a failed audit.
#[napi]
pub fn opterra_verify_snapshot(snapshot: serde_json::Value) -> napi::Result<serde_json::Value> {
    let rt = runtime::get()?;
    let snapshot: AssessmentSnapshot = json::from_js(snapshot)?;
    Ok(match opterra_engine::verify_snapshot(&snapshot, &rt.engine) {
        Ok(()) => json!({ "valid": true, "error": null }),
        Err(e) => json!({ "valid": false, "error": e.to_string() }),
    })
}
