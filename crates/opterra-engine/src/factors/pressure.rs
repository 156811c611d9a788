use opterra_core::config::StressConfig;
use opterra_core::constants::{PSI_CRITICAL, PSI_MAX, PSI_WARNING};
use opterra_core::ForensicInputs;

/// Pressure stress from static house pressure.
///
/// ```text
/// psi < 60        → 1.0
/// 60 ≤ psi < 80   → 1 + slope_w × (psi − 60)
/// psi ≥ 80        → 1 + slope_w × 20 + step + slope_c × (psi − 80)
/// ```
///
/// Capped at `pressure_cap`. Non-decreasing in psi.
pub fn calculate(input: &ForensicInputs, cfg: &StressConfig) -> f64 {
    from_psi(input.house_psi, cfg)
}

pub fn from_psi(psi: f64, cfg: &StressConfig) -> f64 {
    let psi = if psi.is_finite() {
        psi.clamp(0.0, PSI_MAX)
    } else {
        0.0
    };

    let factor = if psi < PSI_WARNING {
        1.0
    } else if psi < PSI_CRITICAL {
        1.0 + (psi - PSI_WARNING) * cfg.pressure_warning_slope
    } else {
        1.0 + (PSI_CRITICAL - PSI_WARNING) * cfg.pressure_warning_slope
            + cfg.pressure_critical_step
            + (psi - PSI_CRITICAL) * cfg.pressure_critical_slope
    };

    factor.clamp(1.0, cfg.pressure_cap)
}
