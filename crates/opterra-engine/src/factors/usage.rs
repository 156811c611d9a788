use opterra_core::config::StressConfig;
use opterra_core::models::{GasLineSize, UsageType};
use opterra_core::{ForensicInputs, UnitKind};

fn draw_weight(usage: UsageType) -> f64 {
    match usage {
        UsageType::Light => 0.75,
        UsageType::Normal => 1.0,
        UsageType::Heavy => 1.35,
    }
}

/// Duty-cycle stress from household draw.
///
/// Formula: `min(cap, 1 + slope × max(0, people × weight − baseline))`
pub fn intensity(input: &ForensicInputs, cfg: &StressConfig) -> f64 {
    let index = input.people_count as f64 * draw_weight(input.usage_type);
    let factor = 1.0 + cfg.usage_slope * (index - cfg.usage_baseline_index).max(0.0);
    factor.clamp(1.0, cfg.usage_cap)
}

/// Recommended storage for the household, in gallons.
pub fn recommended_capacity(input: &ForensicInputs, cfg: &StressConfig) -> f64 {
    let per_person = match input.usage_type {
        UsageType::Light => cfg.light_gallons_per_person,
        UsageType::Normal => cfg.normal_gallons_per_person,
        UsageType::Heavy => cfg.heavy_gallons_per_person,
    };
    input.people_count as f64 * per_person
}

/// Stress from a unit too small for its load.
///
/// Tanks compare capacity to the recommended gallons. A tankless gas unit
/// starved by a ½" supply line short-cycles the same way.
pub fn undersizing(input: &ForensicInputs, cfg: &StressConfig) -> f64 {
    match input.unit_kind() {
        UnitKind::Tankless => {
            if input.fuel_type.burns_gas() && input.gas_line_size == Some(GasLineSize::HalfInch) {
                cfg.half_inch_gas_multiplier
            } else {
                1.0
            }
        }
        UnitKind::Tank | UnitKind::Hybrid => {
            // Zero capacity means the wizard never captured it.
            if input.tank_capacity <= 0.0 {
                return 1.0;
            }
            let ratio = recommended_capacity(input, cfg) / input.tank_capacity;
            if ratio <= 1.0 {
                return 1.0;
            }
            (1.0 + cfg.undersizing_slope * (ratio - 1.0)).clamp(1.0, cfg.undersizing_cap)
        }
    }
}
