use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::health::HealthBand;
use super::inputs::UnitKind;
use crate::constants::ACCELERATED_AGING_RATE;

/// Per-accelerant wear multipliers. 1.0 means no extra stress.
///
/// `mechanical`, `temp_mechanical`, `temp_chemical` and `total` are derived
/// products of the primitive factors; see `StressFactors::compose`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StressFactors {
    pub mechanical: f64,
    pub chemical: f64,
    pub pressure: f64,
    pub corrosion: f64,
    pub temp: f64,
    pub temp_mechanical: f64,
    pub temp_chemical: f64,
    pub circ: f64,
    #[serde(rename = "loop")]
    pub loop_stress: f64,
    pub sediment: f64,
    pub usage_intensity: f64,
    pub undersizing: f64,
    pub total: f64,
}

impl StressFactors {
    /// Every factor at 1.0.
    pub const NOMINAL: StressFactors = StressFactors {
        mechanical: 1.0,
        chemical: 1.0,
        pressure: 1.0,
        corrosion: 1.0,
        temp: 1.0,
        temp_mechanical: 1.0,
        temp_chemical: 1.0,
        circ: 1.0,
        loop_stress: 1.0,
        sediment: 1.0,
        usage_intensity: 1.0,
        undersizing: 1.0,
        total: 1.0,
    };

    /// Build the full record from primitive factors, deriving the compound
    /// entries. Each primitive enters `total` exactly once.
    #[allow(clippy::too_many_arguments)]
    pub fn compose(
        pressure: f64,
        chemical: f64,
        temp: f64,
        circ: f64,
        loop_stress: f64,
        corrosion: f64,
        sediment: f64,
        usage_intensity: f64,
        undersizing: f64,
    ) -> Self {
        let mechanical = pressure * loop_stress * circ;
        let total =
            temp * mechanical * chemical * corrosion * sediment * usage_intensity * undersizing;
        Self {
            mechanical,
            chemical,
            pressure,
            corrosion,
            temp,
            temp_mechanical: temp * mechanical,
            temp_chemical: temp * chemical,
            circ,
            loop_stress,
            sediment,
            usage_intensity,
            undersizing,
            total,
        }
    }

    /// Re-derive compound entries after primitives were edited in place.
    pub fn recomposed(&self) -> Self {
        Self::compose(
            self.pressure,
            self.chemical,
            self.temp,
            self.circ,
            self.loop_stress,
            self.corrosion,
            self.sediment,
            self.usage_intensity,
            self.undersizing,
        )
    }

    /// All entries as `(key, value)` pairs, in display order.
    pub fn entries(&self) -> [(&'static str, f64); 13] {
        [
            ("mechanical", self.mechanical),
            ("chemical", self.chemical),
            ("pressure", self.pressure),
            ("corrosion", self.corrosion),
            ("temp", self.temp),
            ("temp_mechanical", self.temp_mechanical),
            ("temp_chemical", self.temp_chemical),
            ("circ", self.circ),
            ("loop", self.loop_stress),
            ("sediment", self.sediment),
            ("usage_intensity", self.usage_intensity),
            ("undersizing", self.undersizing),
            ("total", self.total),
        ]
    }
}

impl Default for StressFactors {
    fn default() -> Self {
        Self::NOMINAL
    }
}

/// Due state of one maintenance type. `Lockout` means the damage is past
/// what the service can reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ServiceStatus {
    Ok,
    Due,
    Lockout,
}

/// Weibull lifespan curve a unit is measured against.
///
/// `F(t) = 1 − exp(−(t/λ)^k · m)` with `t` in biological years.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LifespanCurve {
    /// Characteristic life `λ` (years).
    pub characteristic_life: f64,
    /// Shape `k`.
    pub shape: f64,
    /// Proportional-hazard multiplier `m` from observed condition.
    pub hazard_multiplier: f64,
    /// Minimum failure probability (percent) regardless of age. Non-zero
    /// only while the unit body is leaking.
    #[serde(default)]
    pub fail_prob_floor: f64,
}

/// Everything the engine derives from one forensic snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OpterraMetrics {
    pub unit_kind: UnitKind,
    /// Wear-adjusted age in years.
    pub bio_age: f64,
    /// `bio_age / calendar_age`; 1.0 for a brand-new unit.
    pub aging_rate: f64,
    /// Percent, one decimal.
    pub fail_prob: f64,
    /// `fail_prob_to_health_score(fail_prob)`.
    pub health_score: f64,
    pub health_band: HealthBand,
    pub stress_factors: StressFactors,
    /// Tank and hybrid units only.
    pub flush_status: Option<ServiceStatus>,
    /// Tankless units only.
    pub descale_status: Option<ServiceStatus>,
    /// Years of anode protection left; ≤ 0 means depleted. None without an anode.
    pub shield_life: Option<f64>,
    pub lifespan: LifespanCurve,
}

impl OpterraMetrics {
    /// Wearing noticeably faster than the calendar.
    pub fn is_accelerated(&self) -> bool {
        self.aging_rate > ACCELERATED_AGING_RATE
    }

    /// Alias used by the maintenance screens.
    pub fn anode_remaining(&self) -> Option<f64> {
        self.shield_life
    }

    pub fn is_anode_depleted(&self) -> bool {
        self.shield_life.is_some_and(|years| years <= 0.0)
    }

    pub fn calendar_age(&self) -> f64 {
        if self.aging_rate > 0.0 {
            self.bio_age / self.aging_rate
        } else {
            self.bio_age
        }
    }
}
