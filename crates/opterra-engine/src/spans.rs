//! Span definitions per engine operation: assessment, batch, simulation,
//! snapshot verification.

/// Create an assessment span.
#[macro_export]
macro_rules! assessment_span {
    ($fingerprint:expr, $unit_kind:expr) => {
        tracing::info_span!("opterra.assessment", fingerprint = %$fingerprint, unit_kind = ?$unit_kind)
    };
}

/// Create a batch span.
#[macro_export]
macro_rules! batch_span {
    ($batch_size:expr) => {
        tracing::info_span!("opterra.batch", batch_size = $batch_size)
    };
}

/// Create a repair simulation span.
#[macro_export]
macro_rules! simulation_span {
    ($repair_count:expr) => {
        tracing::info_span!("opterra.simulation", repair_count = $repair_count)
    };
}

/// Create a snapshot verification span.
#[macro_export]
macro_rules! snapshot_span {
    ($snapshot_id:expr) => {
        tracing::info_span!("opterra.snapshot", snapshot_id = %$snapshot_id)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const ASSESSMENT: &str = "opterra.assessment";
    pub const BATCH: &str = "opterra.batch";
    pub const SIMULATION: &str = "opterra.simulation";
    pub const SNAPSHOT: &str = "opterra.snapshot";
}
