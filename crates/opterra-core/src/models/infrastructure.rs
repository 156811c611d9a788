use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Closed set of infrastructure findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum IssueId {
    PrvCritical,
    AtmosphericVent,
    PrvFailed,
    PrvMissing,
    ExpTankRequired,
    ThermalStress,
    GasLineUndersized,
    IsolationValvesMissing,
}

/// Code violations render before every other finding or task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueCategory {
    Violation,
    Issue,
}

/// A structural installation defect, distinct from continuous wear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InfrastructureIssue {
    pub id: IssueId,
    pub name: String,
    pub friendly_name: String,
    pub category: IssueCategory,
    pub description: String,
}

impl InfrastructureIssue {
    pub fn is_violation(&self) -> bool {
        self.category == IssueCategory::Violation
    }
}
