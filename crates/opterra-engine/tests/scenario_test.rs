use opterra_core::models::{Action, IssueCategory, IssueId};
use opterra_core::ForensicInputs;
use opterra_engine::{calculate_opterra_risk, get_infrastructure_issues};

fn failing_tank() -> ForensicInputs {
    ForensicInputs {
        calendar_age: 12.0,
        house_psi: 95.0,
        has_prv: true,
        has_exp_tank: false,
        measured_hardness: Some(18.0),
        has_softener: false,
        is_leaking: true,
        ..Default::default()
    }
}

fn healthy_tank() -> ForensicInputs {
    ForensicInputs {
        calendar_age: 2.0,
        house_psi: 55.0,
        has_prv: true,
        has_exp_tank: true,
        measured_hardness: Some(8.0),
        has_softener: false,
        is_leaking: false,
        ..Default::default()
    }
}

// ── Failing unit ──

#[test]
fn failing_tank_is_replaced() {
    let result = calculate_opterra_risk(&failing_tank());
    assert_eq!(result.verdict.action, Action::Replace);
    assert!(result.metrics.health_score < 30.0);
}

#[test]
fn failing_tank_carries_pressure_and_loop_stress() {
    let result = calculate_opterra_risk(&failing_tank());
    assert!(result.metrics.stress_factors.pressure > 1.0);
    assert!(result.metrics.stress_factors.loop_stress > 1.0);
}

#[test]
fn failing_tank_reports_thermal_stress() {
    let input = failing_tank();
    let result = calculate_opterra_risk(&input);
    let issues = get_infrastructure_issues(&input, &result.metrics);
    let ids: Vec<IssueId> = issues.iter().map(|i| i.id).collect();
    assert!(ids.contains(&IssueId::ThermalStress));
    assert!(ids.contains(&IssueId::ExpTankRequired));
    assert!(ids.contains(&IssueId::PrvCritical));
}

// ── Healthy unit ──

#[test]
fn healthy_tank_ages_at_calendar_pace() {
    let result = calculate_opterra_risk(&healthy_tank());
    assert!((result.metrics.aging_rate - 1.0).abs() < 0.05);
    assert!(result.metrics.health_score >= 80.0);
}

#[test]
fn healthy_tank_has_no_violations() {
    let input = healthy_tank();
    let result = calculate_opterra_risk(&input);
    let issues = get_infrastructure_issues(&input, &result.metrics);
    assert!(issues
        .iter()
        .all(|issue| issue.category != IssueCategory::Violation));
}

// ── Brand-new unit ──

#[test]
fn zero_age_does_not_divide_by_zero() {
    let result = calculate_opterra_risk(&ForensicInputs {
        calendar_age: 0.0,
        house_psi: 120.0,
        measured_hardness: Some(25.0),
        ..Default::default()
    });
    assert_eq!(result.metrics.aging_rate, 1.0);
    assert_eq!(result.metrics.bio_age, 0.0);
    assert!(result.metrics.health_score.is_finite());
}

#[test]
fn result_is_tagged_with_algorithm_version() {
    let result = calculate_opterra_risk(&healthy_tank());
    assert_eq!(
        result.algorithm_version,
        opterra_core::constants::ALGORITHM_VERSION
    );
}
