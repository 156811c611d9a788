//! Independent stress contributions, each computed from its own slice of
//! the forensic inputs and combined multiplicatively.

pub mod chemical;
pub mod circulation;
pub mod corrosion;
pub mod pressure;
pub mod sediment;
pub mod thermal;
pub mod usage;

use opterra_core::config::StressConfig;
use opterra_core::{ForensicInputs, StressFactors};

/// Compute the full stress breakdown for already-normalized inputs.
///
/// Every primitive is exactly 1.0 when its condition is nominal.
pub fn compute_stress_factors(input: &ForensicInputs, cfg: &StressConfig) -> StressFactors {
    StressFactors::compose(
        pressure::calculate(input, cfg),
        chemical::calculate(input, cfg),
        thermal::calculate(input, cfg),
        circulation::circ(input, cfg),
        circulation::loop_stress(input, cfg),
        corrosion::calculate(input, cfg),
        sediment::calculate(input, cfg),
        usage::intensity(input, cfg),
        usage::undersizing(input, cfg),
    )
}
