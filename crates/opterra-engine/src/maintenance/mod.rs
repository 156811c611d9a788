//! Maintenance scheduling: per-unit task generation, ranking and bundling,
//! plus the violation-only task view used by the verdict screen.

pub mod status;

use opterra_core::constants::BUNDLE_WINDOW_MONTHS;
use opterra_core::models::{FilterStatus, IssueId, ServiceStatus, TaskKind, UnitKind};
use opterra_core::{
    ForensicInputs, InfrastructureIssue, MaintenanceSchedule, MaintenanceTask, OpterraConfig,
    OpterraMetrics,
};
use tracing::debug;

use crate::infrastructure::get_infrastructure_issues;

pub use status::{descale_interval, descale_status, flush_interval, flush_status};

/// Build the ranked maintenance schedule for one unit.
///
/// Tasks are sorted by months until due (most overdue first), ties broken by
/// [`TaskKind`] order. The first two become primary and secondary; the rest
/// are additional. An annual inspection is always present, so the schedule
/// is never empty.
pub fn calculate_maintenance_schedule(
    input: &ForensicInputs,
    metrics: &OpterraMetrics,
    config: &OpterraConfig,
) -> MaintenanceSchedule {
    let mut tasks = match input.unit_kind() {
        UnitKind::Tank => tank_tasks(input, metrics, config),
        UnitKind::Hybrid => {
            let mut tasks = tank_tasks(input, metrics, config);
            tasks.extend(hybrid_tasks(input, config));
            tasks
        }
        UnitKind::Tankless => tankless_tasks(input, metrics, config),
    };
    // A sediment lockout already emits an immediate inspection.
    if !tasks.iter().any(|t| t.kind == TaskKind::Inspection) {
        tasks.push(annual_inspection(config));
    }
    tasks.sort_by_key(|t| (t.months_until_due, t.kind));

    let bundle = find_bundle(input, &tasks);
    debug!(
        task_count = tasks.len(),
        bundled = bundle.is_some(),
        "maintenance schedule ranked"
    );

    let mut ranked = tasks.into_iter();
    // The inspection fallback above guarantees at least one task.
    let primary_task = ranked.next().unwrap_or_else(|| annual_inspection(config));
    let secondary_task = ranked.next();
    let additional_tasks: Vec<MaintenanceTask> = ranked.collect();

    let (is_bundled, bundled_tasks, bundle_reason) = match bundle {
        Some((tasks, reason)) => (true, Some(tasks), Some(reason.to_string())),
        None => (false, None, None),
    };

    MaintenanceSchedule {
        primary_task,
        secondary_task,
        additional_tasks,
        is_bundled,
        bundled_tasks,
        bundle_reason,
    }
}

/// Immediate tasks for every code violation. Non-violation findings are left
/// to [`build_maintenance_plan`].
pub fn get_infrastructure_maintenance_tasks(
    input: &ForensicInputs,
    metrics: &OpterraMetrics,
) -> Vec<MaintenanceTask> {
    get_infrastructure_issues(input, metrics)
        .iter()
        .filter(|issue| issue.is_violation())
        .filter_map(|issue| infrastructure_task(issue, input))
        .collect()
}

/// One flat, deduplicated plan: violation fixes first, then the ranked
/// schedule, then fixes for non-violation findings.
pub fn build_maintenance_plan(
    input: &ForensicInputs,
    schedule: &MaintenanceSchedule,
    issues: &[InfrastructureIssue],
) -> Vec<MaintenanceTask> {
    fn push(task: MaintenanceTask, plan: &mut Vec<MaintenanceTask>) {
        if !plan.iter().any(|t| t.kind == task.kind) {
            plan.push(task);
        }
    }

    let mut plan = Vec::new();

    for issue in issues.iter().filter(|i| i.is_violation()) {
        if let Some(task) = infrastructure_task(issue, input) {
            push(task, &mut plan);
        }
    }
    for task in schedule.tasks() {
        push(task.clone(), &mut plan);
    }
    for issue in issues.iter().filter(|i| !i.is_violation()) {
        if let Some(task) = infrastructure_task(issue, input) {
            push(task, &mut plan);
        }
    }
    plan
}

// ── Task generators ──

fn tank_tasks(
    input: &ForensicInputs,
    metrics: &OpterraMetrics,
    config: &OpterraConfig,
) -> Vec<MaintenanceTask> {
    let cfg = &config.maintenance;
    let hardness = input.effective_hardness(&config.stress);
    let mut tasks = Vec::new();

    match metrics.flush_status {
        Some(ServiceStatus::Lockout) => tasks.push(MaintenanceTask {
            kind: TaskKind::Inspection,
            label: "Professional sediment inspection".to_string(),
            months_until_due: 0,
            why_explanation: "Sediment has hardened too far to flush safely. A plumber should \
                              inspect the drain valve and tank bottom before any flush is tried."
                .to_string(),
            aging_multiplier: Some(metrics.stress_factors.sediment),
        }),
        _ => {
            let interval = flush_interval(hardness, cfg);
            tasks.push(MaintenanceTask {
                kind: TaskKind::Flush,
                label: "Flush sediment".to_string(),
                months_until_due: months_until(interval, input.years_since_flush()),
                why_explanation: format!(
                    "Sediment insulates the burner and accelerates wear at {hardness:.0} gpg \
                     hardness. Flush every {}.",
                    describe_interval(interval)
                ),
                aging_multiplier: Some(metrics.stress_factors.sediment),
            });
        }
    }

    let check_interval = if input.softener_active() {
        cfg.softener_anode_check_years
    } else {
        cfg.anode_check_years
    };
    let check_months = months_until(check_interval, input.years_since_anode());
    let months_until_due = match metrics.shield_life {
        Some(shield) => check_months.min(months_until(shield, cfg.anode_due_shield_years)),
        None => check_months,
    };
    let why_explanation = if metrics.is_anode_depleted() {
        "The anode rod is used up, so the steel tank is corroding directly.".to_string()
    } else if input.softener_active() {
        "Softened water consumes the anode rod faster. Check it more often.".to_string()
    } else {
        "The anode rod sacrifices itself so the tank does not rust.".to_string()
    };
    tasks.push(MaintenanceTask {
        kind: TaskKind::AnodeReplacement,
        label: "Inspect / replace anode rod".to_string(),
        months_until_due,
        why_explanation,
        aging_multiplier: Some(metrics.stress_factors.corrosion),
    });

    tasks
}

fn hybrid_tasks(input: &ForensicInputs, config: &OpterraConfig) -> Vec<MaintenanceTask> {
    let interval = config.maintenance.filter_interval_years;
    let condensate_months = match input.condensate_clear {
        Some(true) => months_until(interval, 0.0),
        Some(false) | None => 0,
    };
    vec![
        MaintenanceTask {
            kind: TaskKind::AirFilterClean,
            label: "Clean heat-pump air filter".to_string(),
            months_until_due: filter_months(input.air_filter_status, interval),
            why_explanation: "A blocked air filter starves the heat pump and forces the \
                              backup resistance elements to run."
                .to_string(),
            aging_multiplier: None,
        },
        MaintenanceTask {
            kind: TaskKind::CondensateCheck,
            label: "Check condensate drain".to_string(),
            months_until_due: condensate_months,
            why_explanation: "A blocked condensate line backs water into the unit and the \
                              floor around it."
                .to_string(),
            aging_multiplier: None,
        },
    ]
}

fn tankless_tasks(
    input: &ForensicInputs,
    metrics: &OpterraMetrics,
    config: &OpterraConfig,
) -> Vec<MaintenanceTask> {
    let cfg = &config.maintenance;
    let hardness = input.effective_hardness(&config.stress);
    let mut tasks = Vec::new();

    if metrics.descale_status != Some(ServiceStatus::Lockout) {
        let interval = descale_interval(hardness, cfg);
        tasks.push(MaintenanceTask {
            kind: TaskKind::Descale,
            label: "Descale heat exchanger".to_string(),
            months_until_due: months_until(interval, input.years_since_descale()),
            why_explanation: format!(
                "Scale builds inside the heat exchanger at {hardness:.0} gpg. Descale every {}.",
                describe_interval(interval)
            ),
            aging_multiplier: Some(metrics.stress_factors.sediment),
        });
    }

    tasks.push(MaintenanceTask {
        kind: TaskKind::InletFilterClean,
        label: "Clean inlet water filter".to_string(),
        months_until_due: filter_months(input.inlet_filter_status, cfg.filter_interval_years),
        why_explanation: "Debris on the inlet screen restricts flow and trips low-flow errors."
            .to_string(),
        aging_multiplier: None,
    });

    if input.has_isolation_valves == Some(false) {
        tasks.push(MaintenanceTask {
            kind: TaskKind::InstallIsolationValves,
            label: "Install isolation valves".to_string(),
            months_until_due: 0,
            why_explanation: "Service valves are required before the unit can be descaled."
                .to_string(),
            aging_multiplier: None,
        });
    }

    tasks
}

fn annual_inspection(config: &OpterraConfig) -> MaintenanceTask {
    MaintenanceTask {
        kind: TaskKind::Inspection,
        label: "Annual inspection".to_string(),
        months_until_due: months_until(config.maintenance.inspection_interval_years, 0.0),
        why_explanation: "A yearly look at valves, venting and connections catches small \
                          problems early."
            .to_string(),
        aging_multiplier: None,
    }
}

fn infrastructure_task(issue: &InfrastructureIssue, input: &ForensicInputs) -> Option<MaintenanceTask> {
    let (kind, label) = match issue.id {
        IssueId::PrvCritical | IssueId::PrvFailed => {
            if input.has_prv {
                (TaskKind::ReplacePrv, "Replace pressure-reducing valve")
            } else {
                (TaskKind::InstallPrv, "Install pressure-reducing valve")
            }
        }
        IssueId::PrvMissing => (TaskKind::InstallPrv, "Install pressure-reducing valve"),
        IssueId::AtmosphericVent => (TaskKind::ReplaceVent, "Replace venting"),
        IssueId::ExpTankRequired => (TaskKind::InstallExpansionTank, "Install expansion tank"),
        IssueId::IsolationValvesMissing => {
            (TaskKind::InstallIsolationValves, "Install isolation valves")
        }
        // Resolved by the expansion tank and by a gas fitter respectively;
        // neither has a homeowner task of its own.
        IssueId::ThermalStress | IssueId::GasLineUndersized => return None,
    };
    Some(MaintenanceTask {
        kind,
        label: label.to_string(),
        months_until_due: 0,
        why_explanation: issue.description.clone(),
        aging_multiplier: None,
    })
}

// ── Ranking helpers ──

fn find_bundle(
    input: &ForensicInputs,
    tasks: &[MaintenanceTask],
) -> Option<(Vec<MaintenanceTask>, &'static str)> {
    let soon = |kind: TaskKind| {
        tasks
            .iter()
            .find(|t| t.kind == kind && t.months_until_due <= BUNDLE_WINDOW_MONTHS)
    };

    if input.unit_kind().has_tank() {
        let flush = soon(TaskKind::Flush)?;
        let anode = soon(TaskKind::AnodeReplacement)?;
        return Some((
            vec![flush.clone(), anode.clone()],
            "Both require draining the tank, so do them in one visit.",
        ));
    }

    let descale = soon(TaskKind::Descale)?;
    let valves = tasks
        .iter()
        .find(|t| t.kind == TaskKind::InstallIsolationValves)?;
    Some((
        vec![valves.clone(), descale.clone()],
        "Isolation valves are required to descale, so install them on the same visit.",
    ))
}

fn months_until(interval_years: f64, elapsed_years: f64) -> i32 {
    let months = ((interval_years - elapsed_years) * 12.0).round();
    if months.is_finite() {
        months.clamp(i32::MIN as f64, i32::MAX as f64) as i32
    } else {
        0
    }
}

fn filter_months(status: Option<FilterStatus>, interval_years: f64) -> i32 {
    match status {
        Some(FilterStatus::Clean) => months_until(interval_years, 0.0),
        Some(FilterStatus::Dirty) | None => 0,
        Some(FilterStatus::Clogged) => -1,
    }
}

fn describe_interval(years: f64) -> String {
    if years < 1.0 {
        format!("{:.0} months", years * 12.0)
    } else if (years - 1.0).abs() < f64::EPSILON {
        "year".to_string()
    } else {
        format!("{years:.0} years")
    }
}
