use opterra_core::config::StressConfig;
use opterra_core::{ForensicInputs, UnitKind};

/// Recirculation pump wear: constant cycling on tanks, far more burner
/// firings on tankless units.
pub fn circ(input: &ForensicInputs, cfg: &StressConfig) -> f64 {
    if !input.has_circ_pump {
        return 1.0;
    }
    match input.unit_kind() {
        UnitKind::Tankless => cfg.tankless_circ_multiplier,
        UnitKind::Tank | UnitKind::Hybrid => cfg.tank_circ_multiplier,
    }
}

/// Thermal expansion trapped in a closed system with nowhere to go.
pub fn loop_stress(input: &ForensicInputs, cfg: &StressConfig) -> f64 {
    if input.is_closed_system() && !input.has_exp_tank {
        cfg.closed_loop_multiplier
    } else {
        1.0
    }
}
