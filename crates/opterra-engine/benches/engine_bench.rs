use criterion::{black_box, criterion_group, criterion_main, Criterion};

use opterra_core::models::{RepairBaseline, RepairOption};
use opterra_core::{FuelType, ForensicInputs};
use opterra_engine::{simulate_repairs, OpterraEngine};

/// 1K units spread across every fuel type, age and pressure band.
fn build_fleet() -> Vec<ForensicInputs> {
    (0..1000)
        .map(|i| ForensicInputs {
            fuel_type: match i % 5 {
                0 => FuelType::Gas,
                1 => FuelType::Electric,
                2 => FuelType::Hybrid,
                3 => FuelType::TanklessGas,
                _ => FuelType::TanklessElectric,
            },
            calendar_age: f64::from(i % 20),
            house_psi: 40.0 + f64::from(i % 70),
            measured_hardness: Some(f64::from(i % 25)),
            has_prv: i % 3 == 0,
            has_exp_tank: i % 4 == 0,
            ..Default::default()
        })
        .collect()
}

fn bench_single_assessment(c: &mut Criterion) {
    let engine = OpterraEngine::new();
    let input = ForensicInputs {
        calendar_age: 9.0,
        house_psi: 84.0,
        measured_hardness: Some(17.0),
        has_prv: true,
        ..Default::default()
    };

    c.bench_function("assessment_uncached", |b| {
        b.iter(|| engine.calculate_uncached(black_box(&input)));
    });
    c.bench_function("assessment_cached", |b| {
        b.iter(|| engine.calculate(black_box(&input)));
    });
}

fn bench_batch(c: &mut Criterion) {
    let fleet = build_fleet();
    let engine = OpterraEngine::new();

    c.bench_function("batch_1k_units", |b| {
        b.iter(|| {
            engine.clear_cache();
            engine.evaluate_batch(black_box(&fleet))
        });
    });
}

fn bench_simulation(c: &mut Criterion) {
    let engine = OpterraEngine::new();
    let metrics = engine
        .calculate_uncached(&ForensicInputs {
            calendar_age: 11.0,
            house_psi: 90.0,
            is_closed_loop: true,
            ..Default::default()
        })
        .metrics;
    let baseline = RepairBaseline::from_metrics(&metrics);
    let repairs = [
        RepairOption::Flush,
        RepairOption::InstallPrv,
        RepairOption::InstallExpansionTank,
    ];

    c.bench_function("simulate_three_repairs", |b| {
        b.iter(|| simulate_repairs(black_box(&baseline), black_box(&repairs)));
    });
}

criterion_group!(benches, bench_single_assessment, bench_batch, bench_simulation);
criterion_main!(benches);
