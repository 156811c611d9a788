use opterra_core::models::{
    Action, Badge, LeakSource, Location, ServiceStatus, VerdictReason,
};
use opterra_core::{FuelType, ForensicInputs, OpterraMetrics, Recommendation};
use opterra_engine::infrastructure::get_infrastructure_issues;
use opterra_engine::maintenance::calculate_maintenance_schedule;
use opterra_engine::verdict::determine_verdict;
use opterra_engine::OpterraEngine;

fn metrics_for(input: &ForensicInputs) -> OpterraMetrics {
    OpterraEngine::new().metrics(&input.normalized())
}

/// Run the verdict with the health score forced to `health`.
fn verdict_at(input: &ForensicInputs, health: f64) -> Recommendation {
    let engine = OpterraEngine::new();
    let input = input.normalized();
    let mut metrics = engine.metrics(&input);
    metrics.health_score = health;
    let issues = get_infrastructure_issues(&input, &metrics);
    let schedule = calculate_maintenance_schedule(&input, &metrics, engine.config());
    determine_verdict(&input, &metrics, &issues, &schedule)
}

fn fresh_tank() -> ForensicInputs {
    ForensicInputs {
        calendar_age: 1.0,
        last_flush_years_ago: Some(0.25),
        ..Default::default()
    }
}

// ── Replace gates ──

#[test]
fn tank_body_leak_is_replace_even_when_young() {
    let input = ForensicInputs {
        is_leaking: true,
        leak_source: Some(LeakSource::TankBody),
        ..fresh_tank()
    };
    let v = verdict_at(&input, 95.0);
    assert_eq!(v.action, Action::Replace);
    assert_eq!(v.badge, Badge::Critical);
    assert_eq!(v.reason, VerdictReason::TankLeak);
}

#[test]
fn unknown_leak_source_is_treated_as_tank_body() {
    let input = ForensicInputs {
        is_leaking: true,
        ..fresh_tank()
    };
    let result = opterra_engine::calculate_opterra_risk(&input);
    assert_eq!(result.verdict.reason, VerdictReason::TankLeak);
    assert!(result.metrics.health_score < 30.0);
}

#[test]
fn tankless_body_leak_is_replace_with_or_without_source() {
    for leak_source in [None, Some(LeakSource::TankBody)] {
        let input = ForensicInputs {
            fuel_type: FuelType::TanklessGas,
            calendar_age: 2.0,
            is_leaking: true,
            leak_source,
            ..Default::default()
        };
        let result = opterra_engine::calculate_opterra_risk(&input);
        assert_eq!(result.verdict.action, Action::Replace);
        assert_eq!(result.verdict.badge, Badge::Critical);
        assert_eq!(result.verdict.reason, VerdictReason::HeatExchangerLeak);
        assert!(result.metrics.fail_prob >= 99.0);
        assert!(result.metrics.health_score < 30.0);
    }
}

#[test]
fn tankless_fitting_leak_stays_repairable() {
    let input = ForensicInputs {
        fuel_type: FuelType::TanklessElectric,
        calendar_age: 2.0,
        is_leaking: true,
        leak_source: Some(LeakSource::FittingValve),
        has_isolation_valves: Some(true),
        ..Default::default()
    };
    let result = opterra_engine::calculate_opterra_risk(&input);
    assert_eq!(result.verdict.action, Action::Repair);
    assert_eq!(result.verdict.reason, VerdictReason::FittingLeak);
}

#[test]
fn tankless_lockout_is_replace_regardless_of_health() {
    let input = ForensicInputs {
        fuel_type: FuelType::TanklessElectric,
        calendar_age: 8.0,
        measured_hardness: Some(20.0),
        ..Default::default()
    };
    assert_eq!(metrics_for(&input).descale_status, Some(ServiceStatus::Lockout));
    let v = verdict_at(&input, 99.0);
    assert_eq!(v.action, Action::Replace);
    assert_eq!(v.reason, VerdictReason::ScaleLockout);
}

#[test]
fn low_health_is_end_of_life() {
    let v = verdict_at(&fresh_tank(), 29.0);
    assert_eq!(v.action, Action::Replace);
    assert_eq!(v.reason, VerdictReason::EndOfLife);
}

#[test]
fn violation_with_fair_health_is_replace() {
    let input = ForensicInputs {
        house_psi: 90.0,
        ..fresh_tank()
    };
    let v = verdict_at(&input, 45.0);
    assert_eq!(v.action, Action::Replace);
    assert_eq!(v.reason, VerdictReason::ViolationLowHealth);
}

// ── Repair and upgrade gates ──

#[test]
fn violation_with_good_health_is_repair() {
    let input = ForensicInputs {
        house_psi: 90.0,
        ..fresh_tank()
    };
    let v = verdict_at(&input, 85.0);
    assert_eq!(v.action, Action::Repair);
    assert_eq!(v.badge, Badge::Warning);
    assert_eq!(v.reason, VerdictReason::CodeViolation);
}

#[test]
fn relief_valve_leak_is_repair() {
    let input = ForensicInputs {
        is_leaking: true,
        leak_source: Some(LeakSource::ReliefValve),
        ..fresh_tank()
    };
    let v = verdict_at(&input, 90.0);
    assert_eq!(v.action, Action::Repair);
    assert_eq!(v.reason, VerdictReason::FittingLeak);
    assert_eq!(v.badge, Badge::Warning);
}

#[test]
fn fitting_leak_over_living_space_escalates_badge() {
    let input = ForensicInputs {
        is_leaking: true,
        leak_source: Some(LeakSource::FittingValve),
        location: Location::UpperFloor,
        ..fresh_tank()
    };
    let v = verdict_at(&input, 90.0);
    assert_eq!(v.action, Action::Repair);
    assert_eq!(v.badge, Badge::Critical);
}

#[test]
fn fair_health_without_issues_is_accelerated_wear() {
    let v = verdict_at(&fresh_tank(), 50.0);
    assert_eq!(v.action, Action::Repair);
    assert_eq!(v.reason, VerdictReason::WearAccelerated);
}

#[test]
fn fair_health_with_issues_is_upgrade() {
    let input = ForensicInputs {
        is_closed_loop: true,
        ..fresh_tank()
    };
    let v = verdict_at(&input, 50.0);
    assert_eq!(v.action, Action::Upgrade);
    assert_eq!(v.reason, VerdictReason::InfrastructureRisk);
}

#[test]
fn healthy_unit_with_issues_is_upgrade() {
    let input = ForensicInputs {
        house_psi: 78.0,
        has_prv: false,
        ..fresh_tank()
    };
    let v = verdict_at(&input, 90.0);
    assert_eq!(v.action, Action::Upgrade);
    assert_eq!(v.badge, Badge::Warning);
}

// ── Maintain and pass ──

#[test]
fn overdue_flush_is_maintain() {
    let input = ForensicInputs {
        calendar_age: 2.0,
        ..Default::default()
    };
    let v = verdict_at(&input, 95.0);
    assert_eq!(v.action, Action::Maintain);
    assert_eq!(v.badge, Badge::Service);
    assert_eq!(v.reason, VerdictReason::ServiceDue);
}

#[test]
fn serviced_healthy_unit_passes() {
    let v = verdict_at(&fresh_tank(), 97.0);
    assert_eq!(v.action, Action::Pass);
    assert_eq!(v.badge, Badge::Healthy);
}

#[test]
fn verdict_is_deterministic() {
    let input = ForensicInputs {
        house_psi: 90.0,
        is_leaking: true,
        leak_source: Some(LeakSource::DrainValve),
        ..fresh_tank()
    };
    assert_eq!(verdict_at(&input, 70.0), verdict_at(&input, 70.0));
}
