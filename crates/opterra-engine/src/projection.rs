//! Forward projection of health along the unit's lifespan curve.
//!
//! The aging rate is held constant: projections answer "what if nothing
//! changes", which is what the timeline and upsell screens display.

use opterra_core::constants::MAX_PROJECTION_MONTHS;
use opterra_core::models::{LifespanCurve, Projection};
use opterra_core::OpterraMetrics;

use crate::failure::{bio_age_to_fail_prob, fail_prob_to_health_score};

/// Health `months` from now if the unit keeps aging at `aging_rate`.
pub fn project_future_health(
    bio_age: f64,
    aging_rate: f64,
    months: u32,
    curve: &LifespanCurve,
) -> Projection {
    let future_bio_age = bio_age.max(0.0) + f64::from(months) / 12.0 * aging_rate.max(0.0);
    let fail_prob = bio_age_to_fail_prob(future_bio_age, curve);
    Projection {
        months,
        bio_age: future_bio_age,
        fail_prob,
        health_score: fail_prob_to_health_score(fail_prob),
    }
}

/// One projection per horizon, in the order given.
pub fn project_timeline(metrics: &OpterraMetrics, horizons: &[u32]) -> Vec<Projection> {
    horizons
        .iter()
        .map(|&months| {
            project_future_health(metrics.bio_age, metrics.aging_rate, months, &metrics.lifespan)
        })
        .collect()
}

/// Months until the health score first drops below `threshold`.
///
/// `Some(0)` when it already has; `None` when it does not happen within the
/// projection horizon.
pub fn months_until_health(metrics: &OpterraMetrics, threshold: f64) -> Option<u32> {
    let below = |months: u32| {
        project_future_health(metrics.bio_age, metrics.aging_rate, months, &metrics.lifespan)
            .health_score
            < threshold
    };

    if below(0) {
        return Some(0);
    }
    if !below(MAX_PROJECTION_MONTHS) {
        return None;
    }

    // Health is non-increasing in months: binary search the first month below.
    let (mut lo, mut hi) = (0, MAX_PROJECTION_MONTHS);
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if below(mid) {
            hi = mid;
        } else {
            lo = mid;
        }
    }
    Some(hi)
}
