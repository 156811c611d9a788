//! The assessment pipeline and its optional result cache.

use moka::sync::Cache;
use opterra_core::constants::ALGORITHM_VERSION;
use opterra_core::models::{Projection, RepairBaseline, RepairOption, SimulatedResult};
use opterra_core::{
    AssessmentReport, ForensicInputs, HealthBand, InfrastructureIssue, MaintenanceSchedule,
    OpterraConfig, OpterraMetrics, OpterraResult,
};
use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::factors::{compute_stress_factors, corrosion};
use crate::maintenance::{
    build_maintenance_plan, calculate_maintenance_schedule, descale_status, flush_status,
};
use crate::{aging, failure, infrastructure, projection, repair, verdict};

/// Runs assessments against one calibration.
///
/// Results are pure functions of the normalized inputs, so they are cached
/// by input fingerprint when `engine.cache_capacity > 0`.
pub struct OpterraEngine {
    config: OpterraConfig,
    cache: Option<Cache<String, OpterraResult>>,
}

impl OpterraEngine {
    /// Engine with the shipped calibration.
    pub fn new() -> Self {
        Self::with_config(OpterraConfig::default())
    }

    pub fn with_config(config: OpterraConfig) -> Self {
        let cache = (config.engine.cache_capacity > 0).then(|| {
            Cache::builder()
                .max_capacity(config.engine.cache_capacity)
                .build()
        });
        Self { config, cache }
    }

    pub fn config(&self) -> &OpterraConfig {
        &self.config
    }

    /// Full assessment, served from the cache when possible.
    pub fn calculate(&self, input: &ForensicInputs) -> OpterraResult {
        let Some(cache) = &self.cache else {
            return self.calculate_uncached(input);
        };
        let key = input.fingerprint();
        if let Some(hit) = cache.get(&key) {
            debug!(fingerprint = %key, "assessment cache hit");
            return hit;
        }
        let result = self.calculate_uncached(input);
        cache.insert(key, result.clone());
        result
    }

    /// Full assessment, always recomputed.
    pub fn calculate_uncached(&self, input: &ForensicInputs) -> OpterraResult {
        let input = input.normalized();
        let span = crate::assessment_span!(input.fingerprint(), input.unit_kind());
        let _guard = span.enter();

        let metrics = self.metrics(&input);
        let issues = infrastructure::get_infrastructure_issues(&input, &metrics);
        let schedule = calculate_maintenance_schedule(&input, &metrics, &self.config);
        let verdict = verdict::determine_verdict(&input, &metrics, &issues, &schedule);

        debug!(
            health_score = metrics.health_score,
            action = ?verdict.action,
            reason = verdict.reason.as_str(),
            "assessment complete"
        );

        OpterraResult {
            algorithm_version: ALGORITHM_VERSION.to_string(),
            metrics,
            verdict,
        }
    }

    /// Assessment plus findings, schedule and flat maintenance plan.
    #[instrument(skip_all)]
    pub fn evaluate_full(&self, input: &ForensicInputs) -> AssessmentReport {
        let normalized = input.normalized();
        let result = self.calculate(&normalized);
        let infrastructure_issues =
            infrastructure::get_infrastructure_issues(&normalized, &result.metrics);
        let maintenance_schedule =
            calculate_maintenance_schedule(&normalized, &result.metrics, &self.config);
        let maintenance_plan =
            build_maintenance_plan(&normalized, &maintenance_schedule, &infrastructure_issues);
        AssessmentReport {
            result,
            infrastructure_issues,
            maintenance_schedule,
            maintenance_plan,
        }
    }

    /// Assess many units in parallel. Output order matches input order.
    pub fn evaluate_batch(&self, inputs: &[ForensicInputs]) -> Vec<OpterraResult> {
        let span = crate::batch_span!(inputs.len());
        let _guard = span.enter();
        inputs.par_iter().map(|input| self.calculate(input)).collect()
    }

    /// Derived metrics only, for already-normalized inputs.
    pub fn metrics(&self, input: &ForensicInputs) -> OpterraMetrics {
        let stress_cfg = &self.config.stress;
        let stress_factors = compute_stress_factors(input, stress_cfg);
        let profile = aging::profile(input.calendar_age, &stress_factors, stress_cfg);
        let lifespan = failure::lifespan_curve(input, &self.config.lifespan);

        // Leak floor lives on the curve.
        let fail_prob = failure::bio_age_to_fail_prob(profile.bio_age, &lifespan);
        let health_score = failure::fail_prob_to_health_score(fail_prob);

        debug!(
            total_stress = stress_factors.total,
            aging_rate = profile.aging_rate,
            bio_age = profile.bio_age,
            fail_prob,
            "metrics computed"
        );

        OpterraMetrics {
            unit_kind: input.unit_kind(),
            bio_age: profile.bio_age,
            aging_rate: profile.aging_rate,
            fail_prob,
            health_score,
            health_band: HealthBand::from_score(health_score),
            stress_factors,
            flush_status: flush_status(input, &self.config),
            descale_status: descale_status(input, &self.config),
            shield_life: corrosion::anode_state(input, stress_cfg).shield_life,
            lifespan,
        }
    }

    pub fn infrastructure_issues(
        &self,
        input: &ForensicInputs,
        metrics: &OpterraMetrics,
    ) -> Vec<InfrastructureIssue> {
        infrastructure::get_infrastructure_issues(&input.normalized(), metrics)
    }

    pub fn maintenance_schedule(
        &self,
        input: &ForensicInputs,
        metrics: &OpterraMetrics,
    ) -> MaintenanceSchedule {
        calculate_maintenance_schedule(&input.normalized(), metrics, &self.config)
    }

    pub fn project(&self, metrics: &OpterraMetrics, months: u32) -> Projection {
        projection::project_future_health(
            metrics.bio_age,
            metrics.aging_rate,
            months,
            &metrics.lifespan,
        )
    }

    pub fn simulate(&self, baseline: &RepairBaseline, repairs: &[RepairOption]) -> SimulatedResult {
        let span = crate::simulation_span!(repairs.len());
        let _guard = span.enter();
        repair::simulate_repairs(baseline, repairs, &self.config.stress)
    }

    /// Cached result count. Zero when caching is disabled.
    pub fn cached_entries(&self) -> u64 {
        self.cache.as_ref().map_or(0, |c| {
            c.run_pending_tasks();
            c.entry_count()
        })
    }

    pub fn clear_cache(&self) {
        if let Some(cache) = &self.cache {
            cache.invalidate_all();
        }
    }
}

impl Default for OpterraEngine {
    fn default() -> Self {
        Self::new()
    }
}
