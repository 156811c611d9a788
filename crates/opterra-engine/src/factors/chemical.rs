use opterra_core::config::StressConfig;
use opterra_core::constants::{HARDNESS_CRITICAL_GPG, HARDNESS_WARNING_GPG};
use opterra_core::{ForensicInputs, UnitKind};

/// Scale-forming chemistry stress from the hardness reaching the heater.
///
/// Same piecewise shape as pressure, anchored at 10 and 15 gpg. The excess
/// over 1.0 is scaled by how sensitive the unit architecture is to scale:
/// a tankless heat exchanger clogs far sooner than a tank bottom.
pub fn calculate(input: &ForensicInputs, cfg: &StressConfig) -> f64 {
    let hardness = input.effective_hardness(cfg);
    from_hardness(hardness, input.unit_kind(), cfg)
}

pub fn from_hardness(hardness_gpg: f64, kind: UnitKind, cfg: &StressConfig) -> f64 {
    let h = hardness_gpg.max(0.0);

    let base = if h < HARDNESS_WARNING_GPG {
        1.0
    } else if h < HARDNESS_CRITICAL_GPG {
        1.0 + (h - HARDNESS_WARNING_GPG) * cfg.hardness_warning_slope
    } else {
        1.0 + (HARDNESS_CRITICAL_GPG - HARDNESS_WARNING_GPG) * cfg.hardness_warning_slope
            + cfg.hardness_critical_step
            + (h - HARDNESS_CRITICAL_GPG) * cfg.hardness_critical_slope
    };

    let sensitivity = match kind {
        UnitKind::Tank => cfg.tank_scale_sensitivity,
        UnitKind::Hybrid => cfg.hybrid_scale_sensitivity,
        UnitKind::Tankless => cfg.tankless_scale_sensitivity,
    };

    (1.0 + (base - 1.0) * sensitivity).clamp(1.0, cfg.chemical_cap)
}
