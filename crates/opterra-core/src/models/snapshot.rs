use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::health::RiskLevel;
use super::inputs::ForensicInputs;
use super::result::OpterraResult;

/// Frozen `(forensic_inputs, opterra_result)` pair as stored in the
/// assessments table, with its denormalized columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentSnapshot {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub algorithm_version: String,
    pub input_fingerprint: String,
    pub forensic_inputs: ForensicInputs,
    pub opterra_result: OpterraResult,
    pub bio_age: f64,
    pub fail_probability: f64,
    pub health_score: f64,
    pub risk_level: RiskLevel,
}
