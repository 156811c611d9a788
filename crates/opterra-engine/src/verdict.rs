//! Verdict gates. The first matching gate wins, so order encodes severity.

use opterra_core::models::{Action, Badge, LeakSource, ServiceStatus, VerdictReason};
use opterra_core::{
    ForensicInputs, HealthBand, InfrastructureIssue, MaintenanceSchedule, OpterraMetrics,
    Recommendation,
};

/// Decide what the homeowner should do. Deterministic for equal arguments.
pub fn determine_verdict(
    input: &ForensicInputs,
    metrics: &OpterraMetrics,
    issues: &[InfrastructureIssue],
    schedule: &MaintenanceSchedule,
) -> Recommendation {
    let health = metrics.health_score;
    let has_violation = issues.iter().any(InfrastructureIssue::is_violation);
    let leak = input.active_leak();

    let (action, badge, reason, headline) = if input.is_tank_breach() {
        (
            Action::Replace,
            Badge::Critical,
            VerdictReason::TankLeak,
            "The tank itself is leaking. A breached tank cannot be repaired.".to_string(),
        )
    } else if input.is_unit_breach() {
        (
            Action::Replace,
            Badge::Critical,
            VerdictReason::HeatExchangerLeak,
            "The heat exchanger is leaking. It cannot be patched, so the unit needs \
             replacing."
                .to_string(),
        )
    } else if input.is_tankless() && metrics.descale_status == Some(ServiceStatus::Lockout) {
        (
            Action::Replace,
            Badge::Critical,
            VerdictReason::ScaleLockout,
            "Scale has permanently damaged the heat exchanger. Descaling can no longer \
             restore it."
                .to_string(),
        )
    } else if health < HealthBand::CRITICAL_BELOW {
        (
            Action::Replace,
            Badge::Critical,
            VerdictReason::EndOfLife,
            format!(
                "At a biological age of {:.1} years the unit has a {:.0}% chance of failing. \
                 Plan a replacement.",
                metrics.bio_age, metrics.fail_prob
            ),
        )
    } else if has_violation && health < HealthBand::HEALTHY_FROM {
        (
            Action::Replace,
            Badge::Critical,
            VerdictReason::ViolationLowHealth,
            "The installation violates code and the unit is too worn to justify bringing \
             it up to code."
                .to_string(),
        )
    } else if has_violation {
        (
            Action::Repair,
            Badge::Warning,
            VerdictReason::CodeViolation,
            "The unit is healthy but the installation has a code violation that must be \
             fixed."
                .to_string(),
        )
    } else if matches!(
        leak,
        Some(LeakSource::FittingValve | LeakSource::DrainValve | LeakSource::ReliefValve)
    ) {
        (
            Action::Repair,
            Badge::Warning,
            VerdictReason::FittingLeak,
            "A fitting or valve is leaking. The tank is intact and the leak can be repaired."
                .to_string(),
        )
    } else if health < HealthBand::HEALTHY_FROM {
        if issues.is_empty() {
            (
                Action::Repair,
                Badge::Warning,
                VerdictReason::WearAccelerated,
                format!(
                    "The unit is aging {:.1}× faster than normal. Address the stress \
                     sources to slow it down.",
                    metrics.aging_rate
                ),
            )
        } else {
            (
                Action::Upgrade,
                Badge::Warning,
                VerdictReason::InfrastructureRisk,
                "Wear is accelerated by the plumbing around the unit. Fixing it protects \
                 this heater and the next one."
                    .to_string(),
            )
        }
    } else if !issues.is_empty() {
        (
            Action::Upgrade,
            Badge::Warning,
            VerdictReason::InfrastructureRisk,
            "The unit is in good shape, but the plumbing around it is adding stress."
                .to_string(),
        )
    } else if schedule.primary_task.is_due_now() {
        (
            Action::Maintain,
            Badge::Service,
            VerdictReason::ServiceDue,
            format!("{} is due now.", schedule.primary_task.label),
        )
    } else {
        (
            Action::Pass,
            Badge::Healthy,
            VerdictReason::Healthy,
            "The unit is healthy. Keep up routine maintenance.".to_string(),
        )
    };

    Recommendation {
        action,
        badge: escalate_badge(input, action, badge),
        reason,
        headline,
    }
}

/// A repairable leak above living space is still an emergency.
fn escalate_badge(input: &ForensicInputs, action: Action, badge: Badge) -> Badge {
    let exposed = input.location.is_high_damage() || input.is_finished_area;
    if action == Action::Repair && input.active_leak().is_some() && exposed {
        Badge::Critical
    } else {
        badge
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opterra_core::models::Location;

    #[test]
    fn repair_leak_in_attic_is_critical() {
        let input = ForensicInputs {
            is_leaking: true,
            leak_source: Some(LeakSource::DrainValve),
            location: Location::Attic,
            ..Default::default()
        };
        assert_eq!(escalate_badge(&input, Action::Repair, Badge::Warning), Badge::Critical);
    }

    #[test]
    fn garage_leak_keeps_warning() {
        let input = ForensicInputs {
            is_leaking: true,
            leak_source: Some(LeakSource::DrainValve),
            location: Location::Garage,
            ..Default::default()
        };
        assert_eq!(escalate_badge(&input, Action::Repair, Badge::Warning), Badge::Warning);
    }

    #[test]
    fn escalation_only_applies_to_repairs() {
        let input = ForensicInputs {
            is_leaking: true,
            leak_source: Some(LeakSource::ReliefValve),
            is_finished_area: true,
            ..Default::default()
        };
        assert_eq!(escalate_badge(&input, Action::Upgrade, Badge::Warning), Badge::Warning);
    }
}
