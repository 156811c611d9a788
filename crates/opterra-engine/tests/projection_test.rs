use opterra_core::ForensicInputs;
use opterra_engine::projection::{months_until_health, project_timeline};
use opterra_engine::{calculate_opterra_risk, fail_prob_to_health_score, project_future_health};

fn stressed() -> ForensicInputs {
    ForensicInputs {
        calendar_age: 3.0,
        house_psi: 70.0,
        measured_hardness: Some(12.0),
        ..Default::default()
    }
}

#[test]
fn zero_months_matches_current_metrics() {
    let metrics = calculate_opterra_risk(&stressed()).metrics;
    let p = project_future_health(metrics.bio_age, metrics.aging_rate, 0, &metrics.lifespan);
    assert_eq!(p.fail_prob, metrics.fail_prob);
    assert_eq!(p.health_score, metrics.health_score);
}

#[test]
fn projected_health_uses_shared_transform() {
    let metrics = calculate_opterra_risk(&stressed()).metrics;
    let p = project_future_health(metrics.bio_age, metrics.aging_rate, 36, &metrics.lifespan);
    assert_eq!(p.health_score, fail_prob_to_health_score(p.fail_prob));
}

#[test]
fn timeline_is_non_increasing() {
    let metrics = calculate_opterra_risk(&stressed()).metrics;
    let timeline = project_timeline(&metrics, &[0, 12, 24, 60, 120]);
    assert_eq!(timeline.len(), 5);
    for pair in timeline.windows(2) {
        assert!(pair[1].health_score <= pair[0].health_score);
        assert!(pair[1].bio_age >= pair[0].bio_age);
    }
}

#[test]
fn faster_aging_projects_worse() {
    let metrics = calculate_opterra_risk(&stressed()).metrics;
    let slow = project_future_health(metrics.bio_age, 1.0, 48, &metrics.lifespan);
    let fast = project_future_health(metrics.bio_age, 2.5, 48, &metrics.lifespan);
    assert!(fast.health_score <= slow.health_score);
}

// ── Threshold crossing ──

#[test]
fn already_below_threshold_is_zero_months() {
    let metrics = calculate_opterra_risk(&ForensicInputs {
        calendar_age: 25.0,
        ..Default::default()
    })
    .metrics;
    assert_eq!(months_until_health(&metrics, 30.0), Some(0));
}

#[test]
fn crossing_month_is_first_month_below() {
    let metrics = calculate_opterra_risk(&stressed()).metrics;
    let months = months_until_health(&metrics, 60.0).expect("crosses within horizon");
    assert!(months > 0);
    let at = project_future_health(metrics.bio_age, metrics.aging_rate, months, &metrics.lifespan);
    let before =
        project_future_health(metrics.bio_age, metrics.aging_rate, months - 1, &metrics.lifespan);
    assert!(at.health_score < 60.0);
    assert!(before.health_score >= 60.0);
}

#[test]
fn unreachable_threshold_is_none() {
    let metrics = calculate_opterra_risk(&stressed()).metrics;
    assert_eq!(months_until_health(&metrics, 0.0), None);
}

// ── Leaking units ──

fn leaking_tank() -> ForensicInputs {
    ForensicInputs {
        calendar_age: 3.0,
        is_leaking: true,
        ..Default::default()
    }
}

#[test]
fn leaking_tank_projects_from_its_current_state() {
    let metrics = calculate_opterra_risk(&leaking_tank()).metrics;
    let now = project_future_health(metrics.bio_age, metrics.aging_rate, 0, &metrics.lifespan);
    assert_eq!(now.fail_prob, metrics.fail_prob);
    assert_eq!(now.health_score, metrics.health_score);

    for p in project_timeline(&metrics, &[12, 36, 60]) {
        assert!(p.health_score <= metrics.health_score, "month {}", p.months);
    }
}

#[test]
fn leaking_tank_is_already_below_any_working_threshold() {
    let metrics = calculate_opterra_risk(&leaking_tank()).metrics;
    assert_eq!(months_until_health(&metrics, 30.0), Some(0));
}
