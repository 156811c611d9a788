use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::infrastructure::InfrastructureIssue;
use super::maintenance::{MaintenanceSchedule, MaintenanceTask};
use super::metrics::OpterraMetrics;
use super::verdict::Recommendation;

/// Output of one full engine run, tagged with the algorithm that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OpterraResult {
    pub algorithm_version: String,
    pub metrics: OpterraMetrics,
    pub verdict: Recommendation,
}

/// Everything the engine can say about one unit: the scored result plus the
/// findings and maintenance plan derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentReport {
    pub result: OpterraResult,
    pub infrastructure_issues: Vec<InfrastructureIssue>,
    pub maintenance_schedule: MaintenanceSchedule,
    /// Violations first, then the ranked schedule, then non-violation fixes.
    pub maintenance_plan: Vec<MaintenanceTask>,
}
