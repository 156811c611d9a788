//! Test that generates TypeScript bindings from Rust types via ts-rs.
//!
//! Run with: cargo test -p opterra-core export_bindings
//! Generated files appear in opterra-core/bindings/*.ts

#[test]
fn export_bindings() {
    // ts-rs writes a .ts file for every type with #[ts(export)] when the
    // test binary runs; this test ensures every boundary type is importable.
    use opterra_core::models::{
        Action, AnodeStatus, AssessmentReport, AssessmentSnapshot, Badge, FilterStatus,
        ForensicInputs, FuelType, GasLineSize, HealthBand, InfrastructureIssue, IssueCategory,
        IssueId, LeakSource, LifespanCurve, Location, MaintenanceSchedule, MaintenanceTask,
        OpterraMetrics, OpterraResult, Projection, QualityTier, Recommendation, RepairBaseline,
        RepairOption, RiskLevel, SaltStatus, ServiceFrequency, ServiceStatus, SimulatedResult,
        SoftenerContext, StressFactors, TaskKind, TempSetting, UnitKind, UsageType, VentType,
        VerdictReason, WaterSource,
    };

    let _ = std::any::type_name::<ForensicInputs>();
    let _ = std::any::type_name::<FuelType>();
    let _ = std::any::type_name::<UnitKind>();
    let _ = std::any::type_name::<QualityTier>();
    let _ = std::any::type_name::<Location>();
    let _ = std::any::type_name::<TempSetting>();
    let _ = std::any::type_name::<UsageType>();
    let _ = std::any::type_name::<LeakSource>();
    let _ = std::any::type_name::<AnodeStatus>();
    let _ = std::any::type_name::<VentType>();
    let _ = std::any::type_name::<GasLineSize>();
    let _ = std::any::type_name::<FilterStatus>();
    let _ = std::any::type_name::<SaltStatus>();
    let _ = std::any::type_name::<WaterSource>();
    let _ = std::any::type_name::<ServiceFrequency>();
    let _ = std::any::type_name::<SoftenerContext>();
    let _ = std::any::type_name::<StressFactors>();
    let _ = std::any::type_name::<ServiceStatus>();
    let _ = std::any::type_name::<LifespanCurve>();
    let _ = std::any::type_name::<OpterraMetrics>();
    let _ = std::any::type_name::<HealthBand>();
    let _ = std::any::type_name::<RiskLevel>();
    let _ = std::any::type_name::<Action>();
    let _ = std::any::type_name::<Badge>();
    let _ = std::any::type_name::<VerdictReason>();
    let _ = std::any::type_name::<Recommendation>();
    let _ = std::any::type_name::<IssueId>();
    let _ = std::any::type_name::<IssueCategory>();
    let _ = std::any::type_name::<InfrastructureIssue>();
    let _ = std::any::type_name::<TaskKind>();
    let _ = std::any::type_name::<MaintenanceTask>();
    let _ = std::any::type_name::<MaintenanceSchedule>();
    let _ = std::any::type_name::<Projection>();
    let _ = std::any::type_name::<RepairOption>();
    let _ = std::any::type_name::<RepairBaseline>();
    let _ = std::any::type_name::<SimulatedResult>();
    let _ = std::any::type_name::<OpterraResult>();
    let _ = std::any::type_name::<AssessmentReport>();
    let _ = std::any::type_name::<AssessmentSnapshot>();
}
