use serde::{Deserialize, Serialize};
use tracing::warn;
use ts_rs::TS;

use crate::config::StressConfig;
use crate::constants::{MAX_AGE_YEARS, MAX_PEOPLE, MIN_PEOPLE, PSI_MAX};

/// Heater fuel / technology as captured by the calibration wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum FuelType {
    #[default]
    Gas,
    Electric,
    /// Heat-pump water heater with a storage tank.
    Hybrid,
    TanklessGas,
    TanklessElectric,
}

impl FuelType {
    /// Whether the unit heats on demand with no storage tank.
    pub fn is_tankless(self) -> bool {
        matches!(self, FuelType::TanklessGas | FuelType::TanklessElectric)
    }

    pub fn unit_kind(self) -> UnitKind {
        match self {
            FuelType::Gas | FuelType::Electric => UnitKind::Tank,
            FuelType::Hybrid => UnitKind::Hybrid,
            FuelType::TanklessGas | FuelType::TanklessElectric => UnitKind::Tankless,
        }
    }

    pub fn burns_gas(self) -> bool {
        matches!(self, FuelType::Gas | FuelType::TanklessGas)
    }
}

/// Coarse unit architecture driving every unit-type branch in the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum UnitKind {
    Tank,
    Tankless,
    Hybrid,
}

impl UnitKind {
    /// Tank and hybrid units store water and carry a sacrificial anode.
    pub fn has_tank(self) -> bool {
        !matches!(self, UnitKind::Tankless)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum QualityTier {
    Entry,
    #[default]
    Mid,
    Premium,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    Attic,
    #[default]
    Garage,
    Basement,
    MainLiving,
    UtilityCloset,
    Crawlspace,
    Exterior,
    UpperFloor,
}

impl Location {
    /// Spaces without climate control expose the unit to temperature swings.
    pub fn is_unconditioned(self) -> bool {
        matches!(self, Location::Attic | Location::Crawlspace | Location::Exterior)
    }

    /// A leak here damages living space below or around the unit.
    pub fn is_high_damage(self) -> bool {
        matches!(
            self,
            Location::Attic | Location::UpperFloor | Location::MainLiving
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum TempSetting {
    Low,
    #[default]
    Normal,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum UsageType {
    Light,
    #[default]
    Normal,
    Heavy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum LeakSource {
    TankBody,
    FittingValve,
    DrainValve,
    ReliefValve,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum AnodeStatus {
    Good,
    Worn,
    Depleted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum VentType {
    Atmospheric,
    PowerVent,
    DirectVent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum GasLineSize {
    HalfInch,
    ThreeQuarterInch,
    OneInch,
}

/// Condition of an inlet screen (tankless) or air filter (hybrid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum FilterStatus {
    Clean,
    Dirty,
    Clogged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SaltStatus {
    Ok,
    Low,
    Empty,
    #[default]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum WaterSource {
    #[default]
    Municipal,
    Well,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ServiceFrequency {
    Regular,
    Occasional,
    Never,
    #[default]
    Unknown,
}

/// Water softener details, when one is installed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct SoftenerContext {
    pub salt_status: SaltStatus,
    pub water_source: WaterSource,
    pub service_frequency: ServiceFrequency,
    pub install_years_ago: Option<f64>,
}

/// The canonical installation and maintenance snapshot of one water heater.
///
/// Built fresh on every wizard change and from persisted assessments on
/// reload. Missing JSON fields take the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct ForensicInputs {
    pub fuel_type: FuelType,
    /// Years since install.
    pub calendar_age: f64,
    pub warranty_years: f64,
    pub quality_tier: QualityTier,
    /// Gallons. Ignored for tankless units.
    pub tank_capacity: f64,
    pub location: Location,
    pub is_finished_area: bool,

    pub house_psi: f64,
    pub has_prv: bool,
    pub has_exp_tank: bool,
    pub is_closed_loop: bool,

    /// Grains per gallon from a test strip or meter.
    pub measured_hardness: Option<f64>,
    /// Grains per gallon published for the address.
    pub street_hardness: Option<f64>,
    pub has_softener: bool,
    pub softener: Option<SoftenerContext>,

    pub temp_setting: TempSetting,
    pub people_count: u32,
    pub usage_type: UsageType,
    pub has_circ_pump: bool,

    pub last_flush_years_ago: Option<f64>,
    pub last_anode_replace_years_ago: Option<f64>,
    pub last_descale_years_ago: Option<f64>,

    pub is_leaking: bool,
    pub leak_source: Option<LeakSource>,
    pub visual_rust: bool,
    pub anode_status: Option<AnodeStatus>,

    pub vent_type: Option<VentType>,
    pub gas_line_size: Option<GasLineSize>,
    pub inlet_filter_status: Option<FilterStatus>,
    pub error_code_count: u32,
    pub has_isolation_valves: Option<bool>,
    pub air_filter_status: Option<FilterStatus>,
    pub condensate_clear: Option<bool>,
}

impl Default for ForensicInputs {
    fn default() -> Self {
        Self {
            fuel_type: FuelType::Gas,
            calendar_age: 0.0,
            warranty_years: 6.0,
            quality_tier: QualityTier::Mid,
            tank_capacity: 50.0,
            location: Location::Garage,
            is_finished_area: false,
            house_psi: 55.0,
            has_prv: false,
            has_exp_tank: false,
            is_closed_loop: false,
            measured_hardness: None,
            street_hardness: None,
            has_softener: false,
            softener: None,
            temp_setting: TempSetting::Normal,
            people_count: 3,
            usage_type: UsageType::Normal,
            has_circ_pump: false,
            last_flush_years_ago: None,
            last_anode_replace_years_ago: None,
            last_descale_years_ago: None,
            is_leaking: false,
            leak_source: None,
            visual_rust: false,
            anode_status: None,
            vent_type: None,
            gas_line_size: None,
            inlet_filter_status: None,
            error_code_count: 0,
            has_isolation_valves: None,
            air_filter_status: None,
            condensate_clear: None,
        }
    }
}

/// Clamp a finite value into range; non-finite values take `fallback`.
fn clamp_or(value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        fallback
    }
}

fn clamp_opt(value: Option<f64>, max: f64) -> Option<f64> {
    value.and_then(|v| if v.is_finite() { Some(v.clamp(0.0, max)) } else { None })
}

impl ForensicInputs {
    /// Return a copy with every numeric field clamped into its valid range.
    ///
    /// Non-finite optional readings become unknown (`None`) rather than
    /// propagating NaN through the curves.
    pub fn normalized(&self) -> Self {
        let mut n = self.clone();
        n.calendar_age = clamp_or(self.calendar_age, 0.0, MAX_AGE_YEARS, 0.0);
        n.warranty_years = clamp_or(self.warranty_years, 0.0, 20.0, 6.0);
        n.tank_capacity = clamp_or(self.tank_capacity, 0.0, 200.0, 50.0);
        n.house_psi = clamp_or(self.house_psi, 0.0, PSI_MAX, 55.0);
        n.measured_hardness = clamp_opt(self.measured_hardness, 100.0);
        n.street_hardness = clamp_opt(self.street_hardness, 100.0);
        n.people_count = self.people_count.clamp(MIN_PEOPLE, MAX_PEOPLE);
        n.last_flush_years_ago = clamp_opt(self.last_flush_years_ago, MAX_AGE_YEARS);
        n.last_anode_replace_years_ago =
            clamp_opt(self.last_anode_replace_years_ago, MAX_AGE_YEARS);
        n.last_descale_years_ago = clamp_opt(self.last_descale_years_ago, MAX_AGE_YEARS);
        if let Some(softener) = n.softener.as_mut() {
            softener.install_years_ago = clamp_opt(softener.install_years_ago, MAX_AGE_YEARS);
        }

        if n.house_psi != self.house_psi || n.calendar_age != self.calendar_age {
            warn!(
                house_psi = self.house_psi,
                calendar_age = self.calendar_age,
                "forensic inputs clamped at the boundary"
            );
        }
        n
    }

    pub fn unit_kind(&self) -> UnitKind {
        self.fuel_type.unit_kind()
    }

    pub fn is_tankless(&self) -> bool {
        self.fuel_type.is_tankless()
    }

    /// Hardness of the supply before any softener: measured, else street,
    /// else the configured moderately-hard assumption.
    pub fn raw_hardness(&self, unknown_default: f64) -> f64 {
        self.measured_hardness
            .or(self.street_hardness)
            .unwrap_or(unknown_default)
    }

    /// A softener only treats water while it has salt.
    pub fn softener_active(&self) -> bool {
        self.has_softener
            && !matches!(
                self.softener.as_ref().map(|s| s.salt_status),
                Some(SaltStatus::Empty)
            )
    }

    /// Hardness actually reaching the heater.
    ///
    /// Never exceeds the raw hardness and is non-decreasing in it.
    pub fn effective_hardness(&self, cfg: &StressConfig) -> f64 {
        let raw = self.raw_hardness(cfg.unknown_hardness_gpg);
        if !self.softener_active() {
            return raw;
        }
        match self.softener.as_ref().map(|s| s.salt_status) {
            Some(SaltStatus::Ok) => raw.min(cfg.softened_hardness_gpg),
            // Low or unverified salt: partial treatment.
            _ => raw * 0.5,
        }
    }

    /// A PRV's internal check valve closes the system just like a backflow
    /// preventer, so thermal expansion has nowhere to go.
    pub fn is_closed_system(&self) -> bool {
        self.is_closed_loop || self.has_prv
    }

    /// Years since the last flush. Unknown history means never since install.
    pub fn years_since_flush(&self) -> f64 {
        self.years_since(self.last_flush_years_ago)
    }

    pub fn years_since_anode(&self) -> f64 {
        self.years_since(self.last_anode_replace_years_ago)
    }

    pub fn years_since_descale(&self) -> f64 {
        self.years_since(self.last_descale_years_ago)
    }

    fn years_since(&self, last: Option<f64>) -> f64 {
        match last {
            Some(years) => years.min(self.calendar_age).max(0.0),
            None => self.calendar_age.max(0.0),
        }
    }

    /// Where the unit is leaking from, if it is. An unidentified source is
    /// assumed to be the tank itself.
    pub fn active_leak(&self) -> Option<LeakSource> {
        if self.is_leaking {
            Some(self.leak_source.unwrap_or(LeakSource::TankBody))
        } else {
            None
        }
    }

    /// A breached tank cannot be repaired.
    pub fn is_tank_breach(&self) -> bool {
        self.unit_kind().has_tank() && self.is_unit_breach()
    }

    /// The unit itself is leaking: the tank on storage units, the heat
    /// exchanger on tankless ones. Either way the leak is not repairable.
    pub fn is_unit_breach(&self) -> bool {
        self.active_leak() == Some(LeakSource::TankBody)
    }

    /// Stable blake3 digest of the normalized inputs, used as a cache key and
    /// stored alongside persisted assessments.
    pub fn fingerprint(&self) -> String {
        let normalized = self.normalized();
        // Plain data always serializes; the Debug form keeps keys distinct
        // should that ever change.
        let canonical = serde_json::to_vec(&normalized)
            .unwrap_or_else(|_| format!("{normalized:?}").into_bytes());
        blake3::hash(&canonical).to_hex().to_string()
    }
}
