//! Default values for every tunable engine parameter.
//!
//! The anchors in `crate::constants` (psi 60/80, hardness 10/15, health
//! 30/60, aging rate 1.2) are fixed; everything here may be overridden
//! through `OpterraConfig`.

// Pressure
pub const DEFAULT_PRESSURE_WARNING_SLOPE: f64 = 0.0125;
pub const DEFAULT_PRESSURE_CRITICAL_STEP: f64 = 0.10;
pub const DEFAULT_PRESSURE_CRITICAL_SLOPE: f64 = 0.025;
pub const DEFAULT_PRESSURE_CAP: f64 = 3.0;

// Chemistry
pub const DEFAULT_HARDNESS_WARNING_SLOPE: f64 = 0.03;
pub const DEFAULT_HARDNESS_CRITICAL_STEP: f64 = 0.10;
pub const DEFAULT_HARDNESS_CRITICAL_SLOPE: f64 = 0.04;
pub const DEFAULT_CHEMICAL_CAP: f64 = 3.0;
pub const DEFAULT_UNKNOWN_HARDNESS_GPG: f64 = 12.0;
pub const DEFAULT_SOFTENED_HARDNESS_GPG: f64 = 1.0;
pub const DEFAULT_TANK_SCALE_SENSITIVITY: f64 = 1.0;
pub const DEFAULT_HYBRID_SCALE_SENSITIVITY: f64 = 1.2;
pub const DEFAULT_TANKLESS_SCALE_SENSITIVITY: f64 = 1.5;

// Temperature and location
pub const DEFAULT_HIGH_TEMP_MULTIPLIER: f64 = 1.25;
pub const DEFAULT_UNCONDITIONED_LOCATION_MULTIPLIER: f64 = 1.05;

// Circulation and closed loop
pub const DEFAULT_TANK_CIRC_MULTIPLIER: f64 = 1.10;
pub const DEFAULT_TANKLESS_CIRC_MULTIPLIER: f64 = 1.25;
pub const DEFAULT_CLOSED_LOOP_MULTIPLIER: f64 = 1.20;

// Anode / corrosion
pub const DEFAULT_ANODE_DESIGN_LIFE_YEARS: f64 = 6.0;
pub const DEFAULT_SOFTENER_ANODE_MULTIPLIER: f64 = 2.5;
pub const DEFAULT_HIGH_TEMP_ANODE_MULTIPLIER: f64 = 1.2;
pub const DEFAULT_UNKNOWN_ANODE_MULTIPLIER: f64 = 1.1;
pub const DEFAULT_WORN_ANODE_SHIELD_YEARS: f64 = 1.0;
pub const DEFAULT_CORROSION_PER_DEPLETED_YEAR: f64 = 0.08;
pub const DEFAULT_CORROSION_CAP: f64 = 1.6;
pub const DEFAULT_VISUAL_RUST_CORROSION: f64 = 0.15;

// Sediment / scale
pub const DEFAULT_TANK_SEDIMENT_RATE: f64 = 0.025;
pub const DEFAULT_TANK_SEDIMENT_CAP: f64 = 1.6;
pub const DEFAULT_TANKLESS_SCALE_RATE: f64 = 0.05;
pub const DEFAULT_TANKLESS_SCALE_CAP: f64 = 1.8;
pub const DEFAULT_SEDIMENT_GRACE_YEARS: f64 = 1.0;

// Usage and sizing
pub const DEFAULT_USAGE_BASELINE_INDEX: f64 = 3.0;
pub const DEFAULT_USAGE_SLOPE: f64 = 0.08;
pub const DEFAULT_USAGE_CAP: f64 = 1.6;
pub const DEFAULT_LIGHT_GALLONS_PER_PERSON: f64 = 8.0;
pub const DEFAULT_NORMAL_GALLONS_PER_PERSON: f64 = 12.0;
pub const DEFAULT_HEAVY_GALLONS_PER_PERSON: f64 = 15.0;
pub const DEFAULT_UNDERSIZING_SLOPE: f64 = 0.5;
pub const DEFAULT_UNDERSIZING_CAP: f64 = 1.5;
pub const DEFAULT_HALF_INCH_GAS_MULTIPLIER: f64 = 1.15;

// Aging
pub const DEFAULT_MAX_AGING_RATE: f64 = 5.0;

// Lifespan curve
pub const DEFAULT_WEIBULL_SHAPE: f64 = 3.0;
pub const DEFAULT_TANK_CHARACTERISTIC_LIFE: f64 = 13.0;
pub const DEFAULT_HYBRID_CHARACTERISTIC_LIFE: f64 = 14.0;
pub const DEFAULT_TANKLESS_CHARACTERISTIC_LIFE: f64 = 24.0;
pub const DEFAULT_ENTRY_TIER_MULTIPLIER: f64 = 0.9;
pub const DEFAULT_PREMIUM_TIER_MULTIPLIER: f64 = 1.15;
pub const DEFAULT_WARRANTY_LIFE_STEP: f64 = 0.25;
pub const DEFAULT_TANK_STANDARD_WARRANTY: f64 = 6.0;
pub const DEFAULT_HYBRID_STANDARD_WARRANTY: f64 = 10.0;
pub const DEFAULT_TANKLESS_STANDARD_WARRANTY: f64 = 12.0;
pub const DEFAULT_VISUAL_RUST_HAZARD: f64 = 1.5;
pub const DEFAULT_ERROR_CODE_HAZARD: f64 = 1.15;
pub const DEFAULT_MAX_COUNTED_ERROR_CODES: u32 = 10;
pub const DEFAULT_TANK_LEAK_FAIL_PROB: f64 = 99.0;

// Maintenance
pub const DEFAULT_FLUSH_INTERVAL_YEARS: f64 = 1.0;
pub const DEFAULT_HARD_WATER_FLUSH_INTERVAL_YEARS: f64 = 0.5;
pub const DEFAULT_ANODE_CHECK_YEARS: f64 = 3.0;
pub const DEFAULT_SOFTENER_ANODE_CHECK_YEARS: f64 = 1.5;
pub const DEFAULT_ANODE_DUE_SHIELD_YEARS: f64 = 1.0;
pub const DEFAULT_SOFT_DESCALE_INTERVAL_YEARS: f64 = 3.0;
pub const DEFAULT_MODERATE_DESCALE_INTERVAL_YEARS: f64 = 2.0;
pub const DEFAULT_HARD_DESCALE_INTERVAL_YEARS: f64 = 1.0;
pub const DEFAULT_SOFT_WATER_CUTOFF_GPG: f64 = 7.0;
pub const DEFAULT_FILTER_INTERVAL_YEARS: f64 = 1.0;
pub const DEFAULT_INSPECTION_INTERVAL_YEARS: f64 = 1.0;
pub const DEFAULT_FLUSH_LOCKOUT_INDEX: f64 = 8.0;
pub const DEFAULT_DESCALE_LOCKOUT_INDEX: f64 = 6.0;

// Engine
pub const DEFAULT_CACHE_CAPACITY: u64 = 10_000;
pub const DEFAULT_LOG_LEVEL: &str = "info";
