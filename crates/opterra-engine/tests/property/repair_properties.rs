use opterra_core::models::{RepairBaseline, RepairOption};
use opterra_engine::{calculate_opterra_risk, simulate_repairs};
use proptest::prelude::*;

use super::arb_inputs;

fn arb_repair() -> impl Strategy<Value = RepairOption> {
    prop_oneof![
        Just(RepairOption::FullReplacement),
        Just(RepairOption::Flush),
        Just(RepairOption::Descale),
        Just(RepairOption::AnodeReplacement),
        Just(RepairOption::InstallPrv),
        Just(RepairOption::InstallExpansionTank),
        Just(RepairOption::InstallSoftener),
        Just(RepairOption::LowerTemperature),
    ]
}

proptest! {
    #[test]
    fn repairs_are_never_harmful(
        input in arb_inputs(),
        repairs in proptest::collection::vec(arb_repair(), 1..5),
    ) {
        let baseline = RepairBaseline::from_metrics(&calculate_opterra_risk(&input).metrics);
        let sim = simulate_repairs(&baseline, &repairs);
        prop_assert!(sim.new_score >= baseline.current_score);
        prop_assert!(sim.new_fail_prob <= baseline.current_fail_prob);
        prop_assert!(sim.score_delta >= 0.0);
    }

    #[test]
    fn replacement_always_resets(
        input in arb_inputs(),
        mut repairs in proptest::collection::vec(arb_repair(), 0..4),
    ) {
        repairs.push(RepairOption::FullReplacement);
        let baseline = RepairBaseline::from_metrics(&calculate_opterra_risk(&input).metrics);
        let sim = simulate_repairs(&baseline, &repairs);
        prop_assert!(sim.is_reset);
        prop_assert_eq!(sim.new_bio_age, 0.0);
        prop_assert_eq!(sim.new_aging_factor, 1.0);
    }
}
