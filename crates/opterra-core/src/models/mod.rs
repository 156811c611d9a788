pub mod health;
pub mod infrastructure;
pub mod inputs;
pub mod maintenance;
pub mod metrics;
pub mod projection;
pub mod repair;
pub mod result;
pub mod snapshot;
pub mod verdict;

pub use health::{HealthBand, RiskLevel};
pub use infrastructure::{InfrastructureIssue, IssueCategory, IssueId};
pub use inputs::{
    AnodeStatus, FilterStatus, ForensicInputs, FuelType, GasLineSize, LeakSource, Location,
    QualityTier, SaltStatus, ServiceFrequency, SoftenerContext, TempSetting, UnitKind, UsageType,
    VentType, WaterSource,
};
pub use maintenance::{MaintenanceSchedule, MaintenanceTask, TaskKind};
pub use metrics::{LifespanCurve, OpterraMetrics, ServiceStatus, StressFactors};
pub use projection::Projection;
pub use repair::{RepairBaseline, RepairOption, SimulatedResult};
pub use result::{AssessmentReport, OpterraResult};
pub use snapshot::AssessmentSnapshot;
pub use verdict::{Action, Badge, Recommendation, VerdictReason};
