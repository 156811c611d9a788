use opterra_core::config::StressConfig;
use opterra_core::models::{AnodeStatus, TempSetting};
use opterra_core::ForensicInputs;

/// Sacrificial anode state and the corrosion stress that follows from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnodeState {
    /// Years of protection left; ≤ 0 once depleted. None for anode-less units.
    pub shield_life: Option<f64>,
    pub corrosion: f64,
}

/// Relative speed at which the anode is consumed.
///
/// Softened water is more conductive and eats the anode 2–3× faster; heat
/// speeds the reaction; an unknown history leans toward depletion.
pub fn depletion_rate(input: &ForensicInputs, cfg: &StressConfig) -> f64 {
    let mut rate = 1.0;
    if input.softener_active() {
        rate *= cfg.softener_anode_multiplier;
    }
    if input.temp_setting == TempSetting::High {
        rate *= cfg.high_temp_anode_multiplier;
    }
    if input.last_anode_replace_years_ago.is_none() && input.anode_status.is_none() {
        rate *= cfg.unknown_anode_multiplier;
    }
    rate
}

pub fn anode_state(input: &ForensicInputs, cfg: &StressConfig) -> AnodeState {
    let rust = if input.visual_rust {
        cfg.visual_rust_corrosion
    } else {
        0.0
    };

    if !input.unit_kind().has_tank() {
        return AnodeState {
            shield_life: None,
            corrosion: 1.0 + rust,
        };
    }

    let consumed = input.years_since_anode() * depletion_rate(input, cfg);
    let mut shield = cfg.anode_design_life_years - consumed;

    // An inspected anode overrides the estimate.
    match input.anode_status {
        Some(AnodeStatus::Depleted) => shield = shield.min(0.0),
        Some(AnodeStatus::Worn) => shield = shield.min(cfg.worn_anode_shield_years),
        Some(AnodeStatus::Good) => shield = shield.max(cfg.worn_anode_shield_years * 2.0),
        None => {}
    }

    let depleted_years = (-shield).max(0.0);
    let exposure = (depleted_years * cfg.corrosion_per_depleted_year)
        .min((cfg.corrosion_cap - 1.0).max(0.0));

    AnodeState {
        shield_life: Some(shield),
        corrosion: (1.0 + exposure + rust).max(1.0),
    }
}

pub fn calculate(input: &ForensicInputs, cfg: &StressConfig) -> f64 {
    anode_state(input, cfg).corrosion
}
