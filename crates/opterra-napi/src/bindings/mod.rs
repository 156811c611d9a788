//! All NAPI-exported functions, grouped by domain.

pub mod assessment;
pub mod lifecycle;
pub mod maintenance;
pub mod simulation;
pub mod snapshot;
