use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Every task the scheduler can emit. Declaration order breaks due-date ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    InstallPrv,
    ReplacePrv,
    ReplaceVent,
    InstallExpansionTank,
    InstallIsolationValves,
    Descale,
    Flush,
    AnodeReplacement,
    InletFilterClean,
    AirFilterClean,
    CondensateCheck,
    Inspection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MaintenanceTask {
    pub kind: TaskKind,
    pub label: String,
    /// Negative means overdue by that many months.
    pub months_until_due: i32,
    pub why_explanation: String,
    /// Stress multiplier the task addresses, when one applies.
    pub aging_multiplier: Option<f64>,
}

impl MaintenanceTask {
    pub fn is_due_now(&self) -> bool {
        self.months_until_due <= 0
    }
}

/// Ranked maintenance plan for one unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MaintenanceSchedule {
    pub primary_task: MaintenanceTask,
    pub secondary_task: Option<MaintenanceTask>,
    pub additional_tasks: Vec<MaintenanceTask>,
    pub is_bundled: bool,
    pub bundled_tasks: Option<Vec<MaintenanceTask>>,
    pub bundle_reason: Option<String>,
}

impl MaintenanceSchedule {
    /// All tasks in ranked order.
    pub fn tasks(&self) -> Vec<&MaintenanceTask> {
        std::iter::once(&self.primary_task)
            .chain(self.secondary_task.iter())
            .chain(self.additional_tasks.iter())
            .collect()
    }
}
