use opterra_core::config::StressConfig;
use opterra_core::models::TempSetting;
use opterra_core::ForensicInputs;

/// Thermal stress: thermostat setting, amplified by unconditioned locations.
///
/// A low setting is not modeled as protective; it stays at 1.0.
pub fn calculate(input: &ForensicInputs, cfg: &StressConfig) -> f64 {
    let setting = match input.temp_setting {
        TempSetting::High => cfg.high_temp_multiplier,
        TempSetting::Low | TempSetting::Normal => 1.0,
    };
    let location = if input.location.is_unconditioned() {
        cfg.unconditioned_location_multiplier
    } else {
        1.0
    };
    (setting * location).max(1.0)
}
