use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Health at a point in the future.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Projection {
    pub months: u32,
    pub bio_age: f64,
    pub fail_prob: f64,
    pub health_score: f64,
}
