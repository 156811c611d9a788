//! Lifespan curves and the shared failure-probability → health transform.
//!
//! Failure probability is the Weibull CDF of biological age:
//!
//! ```text
//! F(t) = 1 − exp(−(t/λ)^k × m)
//! ```
//!
//! `λ` depends on unit kind, quality tier and warranty; `m` is a
//! proportional-hazard multiplier for observed condition (rust, error codes).

use std::sync::LazyLock;

use opterra_core::config::LifespanConfig;
use opterra_core::models::{LifespanCurve, QualityTier};
use opterra_core::{ForensicInputs, FuelType, UnitKind};

static DEFAULT_LIFESPAN: LazyLock<LifespanConfig> = LazyLock::new(LifespanConfig::default);

fn base_life(kind: UnitKind, cfg: &LifespanConfig) -> f64 {
    match kind {
        UnitKind::Tank => cfg.tank_characteristic_life,
        UnitKind::Hybrid => cfg.hybrid_characteristic_life,
        UnitKind::Tankless => cfg.tankless_characteristic_life,
    }
}

fn standard_warranty(kind: UnitKind, cfg: &LifespanConfig) -> f64 {
    match kind {
        UnitKind::Tank => cfg.tank_standard_warranty,
        UnitKind::Hybrid => cfg.hybrid_standard_warranty,
        UnitKind::Tankless => cfg.tankless_standard_warranty,
    }
}

/// Curve for a mid-tier unit with standard warranty and no observed damage.
pub fn baseline_curve(fuel_type: FuelType, cfg: &LifespanConfig) -> LifespanCurve {
    LifespanCurve {
        characteristic_life: base_life(fuel_type.unit_kind(), cfg),
        shape: cfg.weibull_shape,
        hazard_multiplier: 1.0,
        fail_prob_floor: 0.0,
    }
}

/// Curve for a specific unit.
pub fn lifespan_curve(input: &ForensicInputs, cfg: &LifespanConfig) -> LifespanCurve {
    let kind = input.unit_kind();

    let tier = match input.quality_tier {
        QualityTier::Entry => cfg.entry_tier_multiplier,
        QualityTier::Mid => 1.0,
        QualityTier::Premium => cfg.premium_tier_multiplier,
    };
    let warranty_delta = (input.warranty_years - standard_warranty(kind, cfg)).clamp(-3.0, 6.0);
    let life = (base_life(kind, cfg) * tier + warranty_delta * cfg.warranty_life_step).max(1.0);

    let mut hazard = 1.0;
    if input.visual_rust {
        hazard *= cfg.visual_rust_hazard;
    }
    let codes = input.error_code_count.min(cfg.max_counted_error_codes);
    if codes > 0 {
        hazard *= cfg.error_code_hazard.powi(codes as i32);
    }

    let fail_prob_floor = if input.is_unit_breach() {
        cfg.tank_leak_fail_prob
    } else {
        0.0
    };

    LifespanCurve {
        characteristic_life: life,
        shape: cfg.weibull_shape,
        hazard_multiplier: hazard,
        fail_prob_floor,
    }
}

/// Weibull CDF in `[0, 1]`.
pub fn fail_fraction(bio_age: f64, curve: &LifespanCurve) -> f64 {
    if bio_age <= 0.0 || curve.characteristic_life <= 0.0 {
        return 0.0;
    }
    let cumulative_hazard =
        (bio_age / curve.characteristic_life).powf(curve.shape) * curve.hazard_multiplier;
    (1.0 - (-cumulative_hazard).exp()).clamp(0.0, 1.0)
}

/// Failure probability in percent, rounded to one decimal, never below the
/// curve's leak floor.
pub fn bio_age_to_fail_prob(bio_age: f64, curve: &LifespanCurve) -> f64 {
    round_tenth((fail_fraction(bio_age, curve) * 100.0).max(curve.fail_prob_floor))
}

/// Failure probability against the baseline curve for a fuel type.
pub fn baseline_fail_prob(bio_age: f64, fuel_type: FuelType) -> f64 {
    bio_age_to_fail_prob(bio_age, &baseline_curve(fuel_type, &DEFAULT_LIFESPAN))
}

/// Biological age at which the age-driven curve reaches `fail_prob` percent.
/// The leak floor is not part of the inversion.
///
/// Returns `None` for 100 % (never reached) or a degenerate curve.
pub fn bio_age_at_fail_prob(fail_prob: f64, curve: &LifespanCurve) -> Option<f64> {
    let fraction = (fail_prob / 100.0).clamp(0.0, 1.0);
    if fraction >= 1.0 || curve.hazard_multiplier <= 0.0 || curve.shape <= 0.0 {
        return None;
    }
    let h = -(1.0 - fraction).ln() / curve.hazard_multiplier;
    Some(curve.characteristic_life * h.powf(1.0 / curve.shape))
}

/// The one transform from failure probability to health score.
///
/// Every screen and every engine path goes through this function.
pub fn fail_prob_to_health_score(fail_prob: f64) -> f64 {
    let fp = if fail_prob.is_finite() {
        fail_prob.clamp(0.0, 100.0)
    } else {
        100.0
    };
    (100.0 - fp).round()
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
