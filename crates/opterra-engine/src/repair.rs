//! What-if repair simulation over the stress breakdown.
//!
//! Each repair neutralizes the stress factor it addresses; the rest of the
//! breakdown is recomposed and run back through the aging and lifespan
//! models. Repairs never make a unit look worse than it is today.

use opterra_core::config::StressConfig;
use opterra_core::models::{LifespanCurve, RepairBaseline, RepairOption, SimulatedResult};
use opterra_core::StressFactors;
use tracing::debug;

use crate::aging::compute_aging_rate;
use crate::failure::{bio_age_to_fail_prob, fail_prob_to_health_score};

/// Apply `repairs` to `baseline` and report the outcome.
///
/// An empty selection returns the baseline unchanged. `FullReplacement`
/// short-circuits every other option: the simulated unit is brand new.
pub fn simulate_repairs(
    baseline: &RepairBaseline,
    repairs: &[RepairOption],
    cfg: &StressConfig,
) -> SimulatedResult {
    let mut applied = repairs.to_vec();
    applied.sort();
    applied.dedup();

    if applied.is_empty() {
        return unchanged(baseline);
    }

    if applied.contains(&RepairOption::FullReplacement) {
        let fresh = LifespanCurve {
            hazard_multiplier: 1.0,
            fail_prob_floor: 0.0,
            ..baseline.lifespan
        };
        let new_fail_prob = bio_age_to_fail_prob(0.0, &fresh);
        let new_score = fail_prob_to_health_score(new_fail_prob);
        return SimulatedResult {
            new_score,
            new_aging_factor: 1.0,
            new_fail_prob,
            new_bio_age: 0.0,
            score_delta: new_score - baseline.current_score,
            is_reset: true,
            applied: vec![RepairOption::FullReplacement],
        };
    }

    let stress = repaired_stress(&baseline.stress_factors, &applied);
    let calendar_age = if baseline.current_aging_factor > 0.0 {
        baseline.bio_age / baseline.current_aging_factor
    } else {
        baseline.bio_age
    };

    let new_aging_factor = if calendar_age > 0.0 {
        compute_aging_rate(&stress, cfg).min(baseline.current_aging_factor.max(1.0))
    } else {
        1.0
    };
    let new_bio_age = (calendar_age * new_aging_factor).min(baseline.bio_age);
    let new_fail_prob =
        bio_age_to_fail_prob(new_bio_age, &baseline.lifespan).min(baseline.current_fail_prob);
    let new_score = fail_prob_to_health_score(new_fail_prob).max(baseline.current_score);

    debug!(
        repairs = applied.len(),
        old_rate = baseline.current_aging_factor,
        new_rate = new_aging_factor,
        "repair simulation"
    );

    SimulatedResult {
        new_score,
        new_aging_factor,
        new_fail_prob,
        new_bio_age,
        score_delta: new_score - baseline.current_score,
        is_reset: false,
        applied,
    }
}

/// The stress breakdown with each repaired factor reset to nominal.
pub fn repaired_stress(stress: &StressFactors, repairs: &[RepairOption]) -> StressFactors {
    let mut s = *stress;
    for repair in repairs {
        match repair {
            RepairOption::Flush | RepairOption::Descale => s.sediment = 1.0,
            RepairOption::AnodeReplacement => s.corrosion = 1.0,
            RepairOption::InstallPrv => s.pressure = 1.0,
            RepairOption::InstallExpansionTank => s.loop_stress = 1.0,
            RepairOption::InstallSoftener => s.chemical = 1.0,
            RepairOption::LowerTemperature => s.temp = 1.0,
            RepairOption::FullReplacement => return StressFactors::NOMINAL,
        }
    }
    s.recomposed()
}

fn unchanged(baseline: &RepairBaseline) -> SimulatedResult {
    SimulatedResult {
        new_score: baseline.current_score,
        new_aging_factor: baseline.current_aging_factor,
        new_fail_prob: baseline.current_fail_prob,
        new_bio_age: baseline.bio_age,
        score_delta: 0.0,
        is_reset: false,
        applied: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flush_neutralizes_sediment_only() {
        let stress = StressFactors::compose(1.3, 1.1, 1.0, 1.0, 1.0, 1.0, 1.4, 1.0, 1.0);
        let repaired = repaired_stress(&stress, &[RepairOption::Flush]);
        assert_eq!(repaired.sediment, 1.0);
        assert_eq!(repaired.pressure, 1.3);
        assert!(repaired.total < stress.total);
    }

    #[test]
    fn softener_and_prv_stack() {
        let stress = StressFactors::compose(1.3, 1.2, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0);
        let repaired = repaired_stress(
            &stress,
            &[RepairOption::InstallSoftener, RepairOption::InstallPrv],
        );
        assert!((repaired.total - 1.0).abs() < 1e-12);
    }
}
