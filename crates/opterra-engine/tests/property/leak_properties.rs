use opterra_core::models::{Action, Badge, RepairBaseline, RepairOption};
use opterra_engine::projection::project_future_health;
use opterra_engine::{calculate_opterra_risk, simulate_repairs};
use proptest::prelude::*;

use super::arb_inputs;

const LEAK_FLOOR: f64 = 99.0;

proptest! {
    #[test]
    fn body_leak_always_replaces(input in arb_inputs()) {
        let result = calculate_opterra_risk(&input);
        if input.is_unit_breach() {
            prop_assert_eq!(result.verdict.action, Action::Replace);
            prop_assert_eq!(result.verdict.badge, Badge::Critical);
            prop_assert!(result.metrics.fail_prob >= LEAK_FLOOR);
        }
    }

    #[test]
    fn any_leak_is_never_a_pass(input in arb_inputs()) {
        let result = calculate_opterra_risk(&input);
        if input.is_leaking {
            prop_assert_ne!(result.verdict.action, Action::Pass);
            prop_assert_ne!(result.verdict.action, Action::Maintain);
        }
    }

    #[test]
    fn projection_starts_at_current_state(input in arb_inputs()) {
        let m = calculate_opterra_risk(&input).metrics;
        let now = project_future_health(m.bio_age, m.aging_rate, 0, &m.lifespan);
        prop_assert_eq!(now.fail_prob, m.fail_prob);
        prop_assert_eq!(now.health_score, m.health_score);
    }

    #[test]
    fn partial_repairs_cannot_fix_a_breach(
        input in arb_inputs(),
        option in prop_oneof![
            Just(RepairOption::Flush),
            Just(RepairOption::Descale),
            Just(RepairOption::AnodeReplacement),
            Just(RepairOption::InstallPrv),
            Just(RepairOption::InstallSoftener),
        ],
    ) {
        prop_assume!(input.is_unit_breach());
        let baseline = RepairBaseline::from_metrics(&calculate_opterra_risk(&input).metrics);
        let sim = simulate_repairs(&baseline, &[option]);
        prop_assert!(sim.new_fail_prob >= LEAK_FLOOR);
        prop_assert!(sim.new_score <= 100.0 - LEAK_FLOOR);
    }
}
