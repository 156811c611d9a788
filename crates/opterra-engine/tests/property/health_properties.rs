use opterra_core::models::{Action, ServiceStatus};
use opterra_core::HealthBand;
use opterra_engine::projection::project_future_health;
use opterra_engine::{calculate_opterra_risk, fail_prob_to_health_score};
use proptest::prelude::*;

use super::arb_inputs;

proptest! {
    #[test]
    fn outputs_are_bounded(input in arb_inputs()) {
        let m = calculate_opterra_risk(&input).metrics;
        prop_assert!((0.0..=100.0).contains(&m.fail_prob));
        prop_assert!((0.0..=100.0).contains(&m.health_score));
        prop_assert!(m.aging_rate >= 1.0);
        prop_assert!(m.bio_age >= 0.0);
        prop_assert!(m.bio_age >= input.calendar_age - 1e-9);
        prop_assert_eq!(m.health_band, HealthBand::from_score(m.health_score));
    }

    #[test]
    fn health_complements_fail_prob(input in arb_inputs()) {
        let m = calculate_opterra_risk(&input).metrics;
        prop_assert_eq!(m.health_score, fail_prob_to_health_score(m.fail_prob));
        prop_assert!((m.health_score - (100.0 - m.fail_prob)).abs() <= 0.5);
    }

    #[test]
    fn health_never_improves_with_time(
        input in arb_inputs(),
        m1 in 0u32..300,
        extra in 0u32..300,
    ) {
        let m = calculate_opterra_risk(&input).metrics;
        let near = project_future_health(m.bio_age, m.aging_rate, m1, &m.lifespan);
        let far = project_future_health(m.bio_age, m.aging_rate, m1 + extra, &m.lifespan);
        prop_assert!(far.health_score <= near.health_score);
    }

    #[test]
    fn tankless_lockout_always_replaces(input in arb_inputs()) {
        let result = calculate_opterra_risk(&input);
        if input.fuel_type.is_tankless()
            && result.metrics.descale_status == Some(ServiceStatus::Lockout)
        {
            prop_assert_eq!(result.verdict.action, Action::Replace);
        }
    }

    #[test]
    fn status_fields_follow_unit_kind(input in arb_inputs()) {
        let m = calculate_opterra_risk(&input).metrics;
        prop_assert_eq!(m.descale_status.is_some(), input.fuel_type.is_tankless());
        prop_assert_eq!(m.flush_status.is_some(), !input.fuel_type.is_tankless());
        prop_assert_eq!(m.shield_life.is_some(), !input.fuel_type.is_tankless());
    }
}
