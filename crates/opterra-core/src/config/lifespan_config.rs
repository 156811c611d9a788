use serde::{Deserialize, Serialize};

use super::defaults::*;

/// Weibull lifespan curve parameters per unit kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifespanConfig {
    /// Weibull shape `k`. Values above 1 mean wear-out (rising hazard).
    pub weibull_shape: f64,
    /// Characteristic life `λ` in biological years, per unit kind.
    pub tank_characteristic_life: f64,
    pub hybrid_characteristic_life: f64,
    pub tankless_characteristic_life: f64,
    pub entry_tier_multiplier: f64,
    pub premium_tier_multiplier: f64,
    /// Characteristic-life years gained per warranty year above standard.
    pub warranty_life_step: f64,
    pub tank_standard_warranty: f64,
    pub hybrid_standard_warranty: f64,
    pub tankless_standard_warranty: f64,
    pub visual_rust_hazard: f64,
    /// Hazard multiplier per logged error code (compounding).
    pub error_code_hazard: f64,
    pub max_counted_error_codes: u32,
    /// Failure probability floor once the unit body (tank or heat
    /// exchanger) is leaking.
    pub tank_leak_fail_prob: f64,
}

impl Default for LifespanConfig {
    fn default() -> Self {
        Self {
            weibull_shape: DEFAULT_WEIBULL_SHAPE,
            tank_characteristic_life: DEFAULT_TANK_CHARACTERISTIC_LIFE,
            hybrid_characteristic_life: DEFAULT_HYBRID_CHARACTERISTIC_LIFE,
            tankless_characteristic_life: DEFAULT_TANKLESS_CHARACTERISTIC_LIFE,
            entry_tier_multiplier: DEFAULT_ENTRY_TIER_MULTIPLIER,
            premium_tier_multiplier: DEFAULT_PREMIUM_TIER_MULTIPLIER,
            warranty_life_step: DEFAULT_WARRANTY_LIFE_STEP,
            tank_standard_warranty: DEFAULT_TANK_STANDARD_WARRANTY,
            hybrid_standard_warranty: DEFAULT_HYBRID_STANDARD_WARRANTY,
            tankless_standard_warranty: DEFAULT_TANKLESS_STANDARD_WARRANTY,
            visual_rust_hazard: DEFAULT_VISUAL_RUST_HAZARD,
            error_code_hazard: DEFAULT_ERROR_CODE_HAZARD,
            max_counted_error_codes: DEFAULT_MAX_COUNTED_ERROR_CODES,
            tank_leak_fail_prob: DEFAULT_TANK_LEAK_FAIL_PROB,
        }
    }
}
