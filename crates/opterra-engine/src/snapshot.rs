//! Capture and verification of persisted assessments.
//!
//! A snapshot freezes the inputs, the result and a handful of denormalized
//! columns. Verification proves the columns agree with the embedded result
//! and that the current engine still produces that result from the inputs.

use chrono::{DateTime, Utc};
use opterra_core::constants::ALGORITHM_VERSION;
use opterra_core::errors::SnapshotError;
use opterra_core::models::AssessmentSnapshot;
use opterra_core::{ForensicInputs, OpterraResult};
use tracing::warn;
use uuid::Uuid;

use crate::engine::OpterraEngine;

/// Freeze an assessment. The caller supplies the timestamp; the engine never
/// reads the clock.
pub fn capture_snapshot(
    input: &ForensicInputs,
    result: &OpterraResult,
    created_at: DateTime<Utc>,
) -> AssessmentSnapshot {
    let forensic_inputs = input.normalized();
    AssessmentSnapshot {
        id: Uuid::new_v4().to_string(),
        created_at,
        algorithm_version: result.algorithm_version.clone(),
        input_fingerprint: forensic_inputs.fingerprint(),
        forensic_inputs,
        opterra_result: result.clone(),
        bio_age: result.metrics.bio_age,
        fail_probability: result.metrics.fail_prob,
        health_score: result.metrics.health_score,
        risk_level: result.metrics.health_band.risk_level(),
    }
}

/// Check a stored snapshot for internal consistency and reproducibility.
pub fn verify_snapshot(
    snapshot: &AssessmentSnapshot,
    engine: &OpterraEngine,
) -> Result<(), SnapshotError> {
    let span = crate::snapshot_span!(snapshot.id);
    let _guard = span.enter();

    if snapshot.algorithm_version != ALGORITHM_VERSION {
        return Err(SnapshotError::VersionMismatch {
            stored: snapshot.algorithm_version.clone(),
            current: ALGORITHM_VERSION.to_string(),
        });
    }

    let recomputed_fingerprint = snapshot.forensic_inputs.fingerprint();
    if snapshot.input_fingerprint != recomputed_fingerprint {
        return Err(SnapshotError::FingerprintMismatch {
            stored: snapshot.input_fingerprint.clone(),
            recomputed: recomputed_fingerprint,
        });
    }

    let metrics = &snapshot.opterra_result.metrics;
    let columns = [
        ("bio_age", snapshot.bio_age, metrics.bio_age),
        ("fail_probability", snapshot.fail_probability, metrics.fail_prob),
        ("health_score", snapshot.health_score, metrics.health_score),
    ];
    for (column, column_value, result_value) in columns {
        if column_value != result_value {
            return Err(SnapshotError::DenormalizedMismatch {
                column: column.to_string(),
                column_value: column_value.to_string(),
                result_value: result_value.to_string(),
            });
        }
    }
    let expected_risk = metrics.health_band.risk_level();
    if snapshot.risk_level != expected_risk {
        return Err(SnapshotError::DenormalizedMismatch {
            column: "risk_level".to_string(),
            column_value: snapshot.risk_level.to_string(),
            result_value: expected_risk.to_string(),
        });
    }

    let recomputed = engine.calculate_uncached(&snapshot.forensic_inputs);
    if let Some((field, stored, fresh)) = first_difference(&snapshot.opterra_result, &recomputed) {
        warn!(snapshot_id = %snapshot.id, field, "snapshot not reproducible");
        return Err(SnapshotError::NotReproducible {
            field: field.to_string(),
            stored,
            recomputed: fresh,
        });
    }
    Ok(())
}

fn first_difference(
    stored: &OpterraResult,
    fresh: &OpterraResult,
) -> Option<(&'static str, String, String)> {
    let (a, b) = (&stored.metrics, &fresh.metrics);
    let scalars = [
        ("bio_age", a.bio_age, b.bio_age),
        ("aging_rate", a.aging_rate, b.aging_rate),
        ("fail_prob", a.fail_prob, b.fail_prob),
        ("health_score", a.health_score, b.health_score),
        ("stress_factors.total", a.stress_factors.total, b.stress_factors.total),
    ];
    for (field, x, y) in scalars {
        if x != y {
            return Some((field, x.to_string(), y.to_string()));
        }
    }
    if stored.verdict != fresh.verdict {
        return Some((
            "verdict",
            format!("{:?}", stored.verdict.action),
            format!("{:?}", fresh.verdict.action),
        ));
    }
    if stored != fresh {
        return Some(("opterra_result", "stored".to_string(), "recomputed".to_string()));
    }
    None
}
