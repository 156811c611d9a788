use opterra_core::config::{MaintenanceConfig, OpterraConfig};
use opterra_core::constants::{HARDNESS_CRITICAL_GPG, HARDNESS_REFERENCE_GPG};
use opterra_core::models::ServiceStatus;
use opterra_core::ForensicInputs;

/// Years between flushes for a tank at this hardness.
pub fn flush_interval(hardness_gpg: f64, cfg: &MaintenanceConfig) -> f64 {
    if hardness_gpg >= HARDNESS_CRITICAL_GPG {
        cfg.hard_water_flush_interval_years
    } else {
        cfg.flush_interval_years
    }
}

/// Years between descales for a tankless unit at this hardness.
pub fn descale_interval(hardness_gpg: f64, cfg: &MaintenanceConfig) -> f64 {
    if hardness_gpg < cfg.soft_water_cutoff_gpg {
        cfg.soft_descale_interval_years
    } else if hardness_gpg < HARDNESS_CRITICAL_GPG {
        cfg.moderate_descale_interval_years
    } else {
        cfg.hard_descale_interval_years
    }
}

/// Accumulated deposit load: years without service scaled by hardness.
pub fn deposit_index(years: f64, hardness_gpg: f64) -> f64 {
    years.max(0.0) * hardness_gpg.max(0.0) / HARDNESS_REFERENCE_GPG
}

fn status(years: f64, interval: f64, index: f64, lockout_index: f64) -> ServiceStatus {
    if index >= lockout_index {
        ServiceStatus::Lockout
    } else if years >= interval {
        ServiceStatus::Due
    } else {
        ServiceStatus::Ok
    }
}

/// Flush state for tank and hybrid units; `None` for tankless.
///
/// Lockout means the sediment bed has hardened to the point where flushing
/// risks clogging or breaking the drain valve.
pub fn flush_status(input: &ForensicInputs, config: &OpterraConfig) -> Option<ServiceStatus> {
    if input.is_tankless() {
        return None;
    }
    let hardness = input.effective_hardness(&config.stress);
    let years = input.years_since_flush();
    Some(status(
        years,
        flush_interval(hardness, &config.maintenance),
        deposit_index(years, hardness),
        config.maintenance.flush_lockout_index,
    ))
}

/// Descale state for tankless units; `None` for tank units.
///
/// Lockout means scale has done irreversible damage to the heat exchanger.
pub fn descale_status(input: &ForensicInputs, config: &OpterraConfig) -> Option<ServiceStatus> {
    if !input.is_tankless() {
        return None;
    }
    let hardness = input.effective_hardness(&config.stress);
    let years = input.years_since_descale();
    Some(status(
        years,
        descale_interval(hardness, &config.maintenance),
        deposit_index(years, hardness),
        config.maintenance.descale_lockout_index,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use opterra_core::FuelType;

    #[test]
    fn tank_has_no_descale_status() {
        let input = ForensicInputs::default();
        let config = OpterraConfig::default();
        assert!(descale_status(&input, &config).is_none());
        assert!(flush_status(&input, &config).is_some());
    }

    #[test]
    fn hard_water_shortens_descale_interval() {
        let cfg = MaintenanceConfig::default();
        assert!(descale_interval(20.0, &cfg) < descale_interval(5.0, &cfg));
    }

    #[test]
    fn neglected_tankless_in_hard_water_locks_out() {
        let input = ForensicInputs {
            fuel_type: FuelType::TanklessGas,
            calendar_age: 6.0,
            measured_hardness: Some(16.0),
            ..Default::default()
        };
        let status = descale_status(&input, &OpterraConfig::default());
        assert_eq!(status, Some(ServiceStatus::Lockout));
    }

    #[test]
    fn recently_flushed_tank_is_ok() {
        let input = ForensicInputs {
            calendar_age: 4.0,
            last_flush_years_ago: Some(0.5),
            ..Default::default()
        };
        let status = flush_status(&input, &OpterraConfig::default());
        assert_eq!(status, Some(ServiceStatus::Ok));
    }
}
