use opterra_core::config::StressConfig;
use opterra_core::StressFactors;

/// Aging rate and biological age for one unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgingProfile {
    pub aging_rate: f64,
    pub bio_age: f64,
}

/// Collapse the stress breakdown into one rate in `[1.0, max_aging_rate]`.
pub fn compute_aging_rate(stress: &StressFactors, cfg: &StressConfig) -> f64 {
    if !stress.total.is_finite() {
        return cfg.max_aging_rate;
    }
    stress.total.clamp(1.0, cfg.max_aging_rate)
}

/// `calendar_age × aging_rate`, never reported below the calendar age.
pub fn compute_bio_age(calendar_age: f64, aging_rate: f64) -> f64 {
    if calendar_age <= 0.0 {
        return 0.0;
    }
    (calendar_age * aging_rate.max(0.0)).max(calendar_age)
}

/// A brand-new unit has no wear to scale: rate 1.0, bio age 0.
pub fn profile(calendar_age: f64, stress: &StressFactors, cfg: &StressConfig) -> AgingProfile {
    if calendar_age <= 0.0 {
        return AgingProfile {
            aging_rate: 1.0,
            bio_age: 0.0,
        };
    }
    let aging_rate = compute_aging_rate(stress, cfg);
    AgingProfile {
        aging_rate,
        bio_age: compute_bio_age(calendar_age, aging_rate),
    }
}
