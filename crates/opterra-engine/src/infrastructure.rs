//! Code-violation and infrastructure findings.
//!
//! Each rule is evaluated independently from the inputs; the result is
//! sorted violations-first so consumers can render it as-is.

use opterra_core::constants::{PSI_CRITICAL, PSI_ELEVATED};
use opterra_core::models::{GasLineSize, IssueCategory, IssueId, VentType};
use opterra_core::{ForensicInputs, InfrastructureIssue, OpterraMetrics};

/// Evaluate every infrastructure rule. Never mutates `metrics`.
pub fn get_infrastructure_issues(
    input: &ForensicInputs,
    metrics: &OpterraMetrics,
) -> Vec<InfrastructureIssue> {
    let mut issues = Vec::new();
    let psi = input.house_psi;

    if input.is_closed_system() && !input.has_exp_tank {
        issues.push(build(IssueId::ExpTankRequired, input, metrics));
        issues.push(build(IssueId::ThermalStress, input, metrics));
    }

    if psi > PSI_CRITICAL {
        issues.push(build(IssueId::PrvCritical, input, metrics));
    } else if psi > PSI_ELEVATED {
        let id = if input.has_prv {
            IssueId::PrvFailed
        } else {
            IssueId::PrvMissing
        };
        issues.push(build(id, input, metrics));
    }

    if input.is_tankless() {
        if input.fuel_type.burns_gas() {
            if input.gas_line_size == Some(GasLineSize::HalfInch) {
                issues.push(build(IssueId::GasLineUndersized, input, metrics));
            }
            if input.vent_type == Some(VentType::Atmospheric) {
                issues.push(build(IssueId::AtmosphericVent, input, metrics));
            }
        }
        if input.has_isolation_valves == Some(false) {
            issues.push(build(IssueId::IsolationValvesMissing, input, metrics));
        }
    }

    issues.sort_by_key(|issue| (issue.category, issue.id));
    issues
}

/// Category is fixed per finding.
pub fn category_of(id: IssueId) -> IssueCategory {
    match id {
        IssueId::PrvCritical | IssueId::AtmosphericVent => IssueCategory::Violation,
        IssueId::PrvFailed
        | IssueId::PrvMissing
        | IssueId::ExpTankRequired
        | IssueId::ThermalStress
        | IssueId::GasLineUndersized
        | IssueId::IsolationValvesMissing => IssueCategory::Issue,
    }
}

fn build(id: IssueId, input: &ForensicInputs, metrics: &OpterraMetrics) -> InfrastructureIssue {
    let psi = input.house_psi;
    let (name, friendly_name, description) = match id {
        IssueId::PrvCritical => (
            "prv_critical",
            "Dangerous water pressure",
            if input.has_prv {
                format!(
                    "House pressure is {psi:.0} psi even though a pressure-reducing valve is \
                     installed. The valve has failed and code requires pressure at or below 80 psi."
                )
            } else {
                format!(
                    "House pressure is {psi:.0} psi with no pressure-reducing valve. Code requires \
                     a PRV when street pressure exceeds 80 psi."
                )
            },
        ),
        IssueId::PrvFailed => (
            "prv_failed",
            "Pressure valve not regulating",
            format!(
                "A pressure-reducing valve is installed but the house still sees {psi:.0} psi. \
                 It is likely wearing out."
            ),
        ),
        IssueId::PrvMissing => (
            "prv_missing",
            "No pressure-reducing valve",
            format!(
                "House pressure is {psi:.0} psi and nothing regulates it. Every fixture and the \
                 tank feel that pressure on each cycle."
            ),
        ),
        IssueId::ExpTankRequired => (
            "exp_tank_required",
            "Expansion tank needed",
            "The plumbing is a closed system but there is no thermal expansion tank to absorb \
             heated water."
                .to_string(),
        ),
        IssueId::ThermalStress => (
            "thermal_stress",
            "Thermal expansion stress",
            format!(
                "Each heating cycle spikes pressure inside the closed system, adding {:.0}% \
                 mechanical wear.",
                (metrics.stress_factors.loop_stress - 1.0).max(0.0) * 100.0
            ),
        ),
        IssueId::GasLineUndersized => (
            "gas_line_undersized",
            "Gas line too small",
            "A 1/2\" gas line cannot feed a tankless burner at full fire. Expect cold-water \
             sandwiches and ignition errors."
                .to_string(),
        ),
        IssueId::IsolationValvesMissing => (
            "isolation_valves_missing",
            "No service valves",
            "Without isolation valves the heat exchanger cannot be descaled.".to_string(),
        ),
        IssueId::AtmosphericVent => (
            "atmospheric_vent",
            "Improper venting",
            "Tankless gas units must vent through a sealed power or direct vent, not an \
             atmospheric flue."
                .to_string(),
        ),
    };

    InfrastructureIssue {
        id,
        name: name.to_string(),
        friendly_name: friendly_name.to_string(),
        category: category_of(id),
        description,
    }
}
