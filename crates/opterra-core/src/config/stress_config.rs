use serde::{Deserialize, Serialize};

use super::defaults::*;

/// Stress-factor curve parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StressConfig {
    /// Pressure factor gained per psi between the warning and critical anchors.
    pub pressure_warning_slope: f64,
    /// Step added once pressure reaches the critical anchor.
    pub pressure_critical_step: f64,
    /// Pressure factor gained per psi above the critical anchor.
    pub pressure_critical_slope: f64,
    pub pressure_cap: f64,

    pub hardness_warning_slope: f64,
    pub hardness_critical_step: f64,
    pub hardness_critical_slope: f64,
    pub chemical_cap: f64,
    /// Hardness assumed when neither a measured nor a street value is known.
    pub unknown_hardness_gpg: f64,
    /// Hardness delivered by a softener with salt.
    pub softened_hardness_gpg: f64,
    pub tank_scale_sensitivity: f64,
    pub hybrid_scale_sensitivity: f64,
    pub tankless_scale_sensitivity: f64,

    pub high_temp_multiplier: f64,
    /// Applied for attic, crawlspace, and exterior installs.
    pub unconditioned_location_multiplier: f64,

    pub tank_circ_multiplier: f64,
    pub tankless_circ_multiplier: f64,
    pub closed_loop_multiplier: f64,

    pub anode_design_life_years: f64,
    pub softener_anode_multiplier: f64,
    pub high_temp_anode_multiplier: f64,
    pub unknown_anode_multiplier: f64,
    /// Shield life assumed when the anode is reported worn.
    pub worn_anode_shield_years: f64,
    pub corrosion_per_depleted_year: f64,
    pub corrosion_cap: f64,
    pub visual_rust_corrosion: f64,

    pub tank_sediment_rate: f64,
    pub tank_sediment_cap: f64,
    pub tankless_scale_rate: f64,
    pub tankless_scale_cap: f64,
    /// Years after a flush or descale before accumulation counts.
    pub sediment_grace_years: f64,

    pub usage_baseline_index: f64,
    pub usage_slope: f64,
    pub usage_cap: f64,
    pub light_gallons_per_person: f64,
    pub normal_gallons_per_person: f64,
    pub heavy_gallons_per_person: f64,
    pub undersizing_slope: f64,
    pub undersizing_cap: f64,
    pub half_inch_gas_multiplier: f64,

    /// Ceiling on the aggregate aging rate.
    pub max_aging_rate: f64,
}

impl Default for StressConfig {
    fn default() -> Self {
        Self {
            pressure_warning_slope: DEFAULT_PRESSURE_WARNING_SLOPE,
            pressure_critical_step: DEFAULT_PRESSURE_CRITICAL_STEP,
            pressure_critical_slope: DEFAULT_PRESSURE_CRITICAL_SLOPE,
            pressure_cap: DEFAULT_PRESSURE_CAP,
            hardness_warning_slope: DEFAULT_HARDNESS_WARNING_SLOPE,
            hardness_critical_step: DEFAULT_HARDNESS_CRITICAL_STEP,
            hardness_critical_slope: DEFAULT_HARDNESS_CRITICAL_SLOPE,
            chemical_cap: DEFAULT_CHEMICAL_CAP,
            unknown_hardness_gpg: DEFAULT_UNKNOWN_HARDNESS_GPG,
            softened_hardness_gpg: DEFAULT_SOFTENED_HARDNESS_GPG,
            tank_scale_sensitivity: DEFAULT_TANK_SCALE_SENSITIVITY,
            hybrid_scale_sensitivity: DEFAULT_HYBRID_SCALE_SENSITIVITY,
            tankless_scale_sensitivity: DEFAULT_TANKLESS_SCALE_SENSITIVITY,
            high_temp_multiplier: DEFAULT_HIGH_TEMP_MULTIPLIER,
            unconditioned_location_multiplier: DEFAULT_UNCONDITIONED_LOCATION_MULTIPLIER,
            tank_circ_multiplier: DEFAULT_TANK_CIRC_MULTIPLIER,
            tankless_circ_multiplier: DEFAULT_TANKLESS_CIRC_MULTIPLIER,
            closed_loop_multiplier: DEFAULT_CLOSED_LOOP_MULTIPLIER,
            anode_design_life_years: DEFAULT_ANODE_DESIGN_LIFE_YEARS,
            softener_anode_multiplier: DEFAULT_SOFTENER_ANODE_MULTIPLIER,
            high_temp_anode_multiplier: DEFAULT_HIGH_TEMP_ANODE_MULTIPLIER,
            unknown_anode_multiplier: DEFAULT_UNKNOWN_ANODE_MULTIPLIER,
            worn_anode_shield_years: DEFAULT_WORN_ANODE_SHIELD_YEARS,
            corrosion_per_depleted_year: DEFAULT_CORROSION_PER_DEPLETED_YEAR,
            corrosion_cap: DEFAULT_CORROSION_CAP,
            visual_rust_corrosion: DEFAULT_VISUAL_RUST_CORROSION,
            tank_sediment_rate: DEFAULT_TANK_SEDIMENT_RATE,
            tank_sediment_cap: DEFAULT_TANK_SEDIMENT_CAP,
            tankless_scale_rate: DEFAULT_TANKLESS_SCALE_RATE,
            tankless_scale_cap: DEFAULT_TANKLESS_SCALE_CAP,
            sediment_grace_years: DEFAULT_SEDIMENT_GRACE_YEARS,
            usage_baseline_index: DEFAULT_USAGE_BASELINE_INDEX,
            usage_slope: DEFAULT_USAGE_SLOPE,
            usage_cap: DEFAULT_USAGE_CAP,
            light_gallons_per_person: DEFAULT_LIGHT_GALLONS_PER_PERSON,
            normal_gallons_per_person: DEFAULT_NORMAL_GALLONS_PER_PERSON,
            heavy_gallons_per_person: DEFAULT_HEAVY_GALLONS_PER_PERSON,
            undersizing_slope: DEFAULT_UNDERSIZING_SLOPE,
            undersizing_cap: DEFAULT_UNDERSIZING_CAP,
            half_inch_gas_multiplier: DEFAULT_HALF_INCH_GAS_MULTIPLIER,
            max_aging_rate: DEFAULT_MAX_AGING_RATE,
        }
    }
}
