pub mod defaults;
mod engine_config;
mod lifespan_config;
mod maintenance_config;
mod stress_config;

pub use engine_config::EngineConfig;
pub use lifespan_config::LifespanConfig;
pub use maintenance_config::MaintenanceConfig;
pub use stress_config::StressConfig;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Root configuration. Every section falls back to its defaults, so an empty
/// TOML document yields the shipped calibration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpterraConfig {
    pub stress: StressConfig,
    pub lifespan: LifespanConfig,
    pub maintenance: MaintenanceConfig,
    pub engine: EngineConfig,
}

impl OpterraConfig {
    /// Parse a TOML document and validate it.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseFailed {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would break curve invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("lifespan.weibull_shape", self.lifespan.weibull_shape),
            (
                "lifespan.tank_characteristic_life",
                self.lifespan.tank_characteristic_life,
            ),
            (
                "lifespan.hybrid_characteristic_life",
                self.lifespan.hybrid_characteristic_life,
            ),
            (
                "lifespan.tankless_characteristic_life",
                self.lifespan.tankless_characteristic_life,
            ),
            ("lifespan.entry_tier_multiplier", self.lifespan.entry_tier_multiplier),
            (
                "lifespan.premium_tier_multiplier",
                self.lifespan.premium_tier_multiplier,
            ),
            (
                "maintenance.flush_interval_years",
                self.maintenance.flush_interval_years,
            ),
            (
                "maintenance.hard_water_flush_interval_years",
                self.maintenance.hard_water_flush_interval_years,
            ),
            (
                "maintenance.anode_check_years",
                self.maintenance.anode_check_years,
            ),
            (
                "maintenance.soft_descale_interval_years",
                self.maintenance.soft_descale_interval_years,
            ),
            (
                "maintenance.moderate_descale_interval_years",
                self.maintenance.moderate_descale_interval_years,
            ),
            (
                "maintenance.hard_descale_interval_years",
                self.maintenance.hard_descale_interval_years,
            ),
            (
                "maintenance.filter_interval_years",
                self.maintenance.filter_interval_years,
            ),
            (
                "maintenance.inspection_interval_years",
                self.maintenance.inspection_interval_years,
            ),
            ("stress.anode_design_life_years", self.stress.anode_design_life_years),
            (
                "stress.light_gallons_per_person",
                self.stress.light_gallons_per_person,
            ),
            (
                "stress.normal_gallons_per_person",
                self.stress.normal_gallons_per_person,
            ),
            (
                "stress.heavy_gallons_per_person",
                self.stress.heavy_gallons_per_person,
            ),
            (
                "maintenance.softener_anode_check_years",
                self.maintenance.softener_anode_check_years,
            ),
            (
                "maintenance.flush_lockout_index",
                self.maintenance.flush_lockout_index,
            ),
            (
                "maintenance.descale_lockout_index",
                self.maintenance.descale_lockout_index,
            ),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    value,
                    reason: "must be a positive number".to_string(),
                });
            }
        }

        // Multipliers below 1.0 would model protective stress, which the
        // factor invariants forbid.
        let at_least_one = [
            ("stress.pressure_cap", self.stress.pressure_cap),
            ("stress.chemical_cap", self.stress.chemical_cap),
            ("stress.high_temp_multiplier", self.stress.high_temp_multiplier),
            (
                "stress.unconditioned_location_multiplier",
                self.stress.unconditioned_location_multiplier,
            ),
            ("stress.tank_circ_multiplier", self.stress.tank_circ_multiplier),
            (
                "stress.tankless_circ_multiplier",
                self.stress.tankless_circ_multiplier,
            ),
            ("stress.closed_loop_multiplier", self.stress.closed_loop_multiplier),
            ("stress.corrosion_cap", self.stress.corrosion_cap),
            ("stress.tank_sediment_cap", self.stress.tank_sediment_cap),
            ("stress.tankless_scale_cap", self.stress.tankless_scale_cap),
            ("stress.usage_cap", self.stress.usage_cap),
            ("stress.undersizing_cap", self.stress.undersizing_cap),
            (
                "stress.half_inch_gas_multiplier",
                self.stress.half_inch_gas_multiplier,
            ),
            ("stress.max_aging_rate", self.stress.max_aging_rate),
            (
                "stress.softener_anode_multiplier",
                self.stress.softener_anode_multiplier,
            ),
            (
                "stress.high_temp_anode_multiplier",
                self.stress.high_temp_anode_multiplier,
            ),
            (
                "stress.unknown_anode_multiplier",
                self.stress.unknown_anode_multiplier,
            ),
            ("lifespan.visual_rust_hazard", self.lifespan.visual_rust_hazard),
            ("lifespan.error_code_hazard", self.lifespan.error_code_hazard),
        ];
        for (field, value) in at_least_one {
            if !(value.is_finite() && value >= 1.0) {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    value,
                    reason: "multiplier must be >= 1.0".to_string(),
                });
            }
        }

        let non_negative = [
            ("stress.pressure_warning_slope", self.stress.pressure_warning_slope),
            ("stress.pressure_critical_step", self.stress.pressure_critical_step),
            ("stress.pressure_critical_slope", self.stress.pressure_critical_slope),
            ("stress.hardness_warning_slope", self.stress.hardness_warning_slope),
            ("stress.hardness_critical_step", self.stress.hardness_critical_step),
            ("stress.hardness_critical_slope", self.stress.hardness_critical_slope),
            ("stress.tank_scale_sensitivity", self.stress.tank_scale_sensitivity),
            ("stress.hybrid_scale_sensitivity", self.stress.hybrid_scale_sensitivity),
            (
                "stress.tankless_scale_sensitivity",
                self.stress.tankless_scale_sensitivity,
            ),
            (
                "stress.corrosion_per_depleted_year",
                self.stress.corrosion_per_depleted_year,
            ),
            ("stress.visual_rust_corrosion", self.stress.visual_rust_corrosion),
            ("stress.tank_sediment_rate", self.stress.tank_sediment_rate),
            ("stress.tankless_scale_rate", self.stress.tankless_scale_rate),
            ("stress.sediment_grace_years", self.stress.sediment_grace_years),
            ("stress.usage_slope", self.stress.usage_slope),
            ("stress.undersizing_slope", self.stress.undersizing_slope),
            ("stress.softened_hardness_gpg", self.stress.softened_hardness_gpg),
            ("stress.unknown_hardness_gpg", self.stress.unknown_hardness_gpg),
            ("lifespan.warranty_life_step", self.lifespan.warranty_life_step),
            ("lifespan.tank_standard_warranty", self.lifespan.tank_standard_warranty),
            (
                "lifespan.hybrid_standard_warranty",
                self.lifespan.hybrid_standard_warranty,
            ),
            (
                "lifespan.tankless_standard_warranty",
                self.lifespan.tankless_standard_warranty,
            ),
            ("stress.worn_anode_shield_years", self.stress.worn_anode_shield_years),
            ("stress.usage_baseline_index", self.stress.usage_baseline_index),
            (
                "maintenance.anode_due_shield_years",
                self.maintenance.anode_due_shield_years,
            ),
            (
                "maintenance.soft_water_cutoff_gpg",
                self.maintenance.soft_water_cutoff_gpg,
            ),
        ];
        for (field, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    value,
                    reason: "must be >= 0".to_string(),
                });
            }
        }

        let fail_prob = self.lifespan.tank_leak_fail_prob;
        if !(0.0..=100.0).contains(&fail_prob) {
            return Err(ConfigError::InvalidValue {
                field: "lifespan.tank_leak_fail_prob".to_string(),
                value: fail_prob,
                reason: "must be within 0–100".to_string(),
            });
        }
        Ok(())
    }
}
