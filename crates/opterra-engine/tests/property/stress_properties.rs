use opterra_core::ForensicInputs;
use opterra_engine::calculate_opterra_risk;
use proptest::prelude::*;

use super::arb_inputs;

proptest! {
    #[test]
    fn every_factor_is_at_least_one(input in arb_inputs()) {
        let result = calculate_opterra_risk(&input);
        for (key, value) in result.metrics.stress_factors.entries() {
            prop_assert!(value >= 1.0, "{} = {}", key, value);
        }
    }

    #[test]
    fn pressure_is_monotone_in_psi(
        input in arb_inputs(),
        low in 20.0f64..150.0,
        delta in 0.0f64..50.0,
    ) {
        let a = calculate_opterra_risk(&ForensicInputs { house_psi: low, ..input.clone() });
        let b = calculate_opterra_risk(&ForensicInputs { house_psi: low + delta, ..input });
        prop_assert!(b.metrics.stress_factors.pressure >= a.metrics.stress_factors.pressure);
        prop_assert!(b.metrics.fail_prob >= a.metrics.fail_prob);
    }

    #[test]
    fn chemical_and_corrosion_are_monotone_in_hardness(
        input in arb_inputs(),
        low in 0.0f64..30.0,
        delta in 0.0f64..20.0,
    ) {
        let a = calculate_opterra_risk(&ForensicInputs {
            measured_hardness: Some(low),
            ..input.clone()
        });
        let b = calculate_opterra_risk(&ForensicInputs {
            measured_hardness: Some(low + delta),
            ..input
        });
        prop_assert!(b.metrics.stress_factors.chemical >= a.metrics.stress_factors.chemical);
        prop_assert!(b.metrics.stress_factors.corrosion >= a.metrics.stress_factors.corrosion);
    }

    #[test]
    fn calculation_is_deterministic(input in arb_inputs()) {
        prop_assert_eq!(calculate_opterra_risk(&input), calculate_opterra_risk(&input));
    }
}
