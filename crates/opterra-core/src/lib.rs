//! # opterra-core
//!
//! Foundation crate for the Opterra risk engine.
//! Defines the forensic input snapshot, every engine output type, errors,
//! config, and the threshold anchors shared by all consumers.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;

// Re-export the most commonly used types at the crate root.
pub use config::OpterraConfig;
pub use errors::{EngineResult, OpterraError};
pub use models::{
    AssessmentReport, FuelType, ForensicInputs, HealthBand, InfrastructureIssue, MaintenanceSchedule,
    MaintenanceTask, OpterraMetrics, OpterraResult, Recommendation, StressFactors, UnitKind,
};
