use serde::{Deserialize, Serialize};

use super::defaults::*;

/// Service intervals and lockout thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaintenanceConfig {
    pub flush_interval_years: f64,
    /// Flush interval at or above the critical hardness anchor.
    pub hard_water_flush_interval_years: f64,
    pub anode_check_years: f64,
    pub softener_anode_check_years: f64,
    /// Anode replacement is due once remaining shield life drops to this.
    pub anode_due_shield_years: f64,
    pub soft_descale_interval_years: f64,
    pub moderate_descale_interval_years: f64,
    pub hard_descale_interval_years: f64,
    /// Below this hardness the soft descale interval applies.
    pub soft_water_cutoff_gpg: f64,
    pub filter_interval_years: f64,
    pub inspection_interval_years: f64,
    /// `years_since_flush × hardness / 10` at which flushing is no longer safe.
    pub flush_lockout_index: f64,
    /// `years_since_descale × hardness / 10` at which scale damage is irreversible.
    pub descale_lockout_index: f64,
}

impl Default for MaintenanceConfig {
    fn default() -> Self {
        Self {
            flush_interval_years: DEFAULT_FLUSH_INTERVAL_YEARS,
            hard_water_flush_interval_years: DEFAULT_HARD_WATER_FLUSH_INTERVAL_YEARS,
            anode_check_years: DEFAULT_ANODE_CHECK_YEARS,
            softener_anode_check_years: DEFAULT_SOFTENER_ANODE_CHECK_YEARS,
            anode_due_shield_years: DEFAULT_ANODE_DUE_SHIELD_YEARS,
            soft_descale_interval_years: DEFAULT_SOFT_DESCALE_INTERVAL_YEARS,
            moderate_descale_interval_years: DEFAULT_MODERATE_DESCALE_INTERVAL_YEARS,
            hard_descale_interval_years: DEFAULT_HARD_DESCALE_INTERVAL_YEARS,
            soft_water_cutoff_gpg: DEFAULT_SOFT_WATER_CUTOFF_GPG,
            filter_interval_years: DEFAULT_FILTER_INTERVAL_YEARS,
            inspection_interval_years: DEFAULT_INSPECTION_INTERVAL_YEARS,
            flush_lockout_index: DEFAULT_FLUSH_LOCKOUT_INDEX,
            descale_lockout_index: DEFAULT_DESCALE_LOCKOUT_INDEX,
        }
    }
}
