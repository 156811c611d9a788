use opterra_core::config::StressConfig;
use opterra_core::constants::HARDNESS_REFERENCE_GPG;
use opterra_core::{ForensicInputs, UnitKind};

/// Sediment (tank) or scale (tankless heat exchanger) accumulated since the
/// last flush or descale.
///
/// Formula: `1 + rate × max(0, years − grace) × hardness / 10`, capped.
pub fn calculate(input: &ForensicInputs, cfg: &StressConfig) -> f64 {
    let hardness = input.effective_hardness(cfg);
    let (years, rate, cap) = match input.unit_kind() {
        UnitKind::Tankless => (
            input.years_since_descale(),
            cfg.tankless_scale_rate,
            cfg.tankless_scale_cap,
        ),
        UnitKind::Tank | UnitKind::Hybrid => (
            input.years_since_flush(),
            cfg.tank_sediment_rate,
            cfg.tank_sediment_cap,
        ),
    };

    let accumulating = (years - cfg.sediment_grace_years).max(0.0);
    let factor = 1.0 + rate * accumulating * (hardness / HARDNESS_REFERENCE_GPG);
    factor.clamp(1.0, cap)
}
