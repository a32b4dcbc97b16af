//! Criterion benchmarks for the advection engine's hot paths.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use drift_bench::{gyre_profile, rotation_profile};
use drift_engine::StepMethod;

/// Benchmark: 100 RK4 steps for 128 streams in the double gyre.
fn bench_rk4_gyre_128(c: &mut Criterion) {
    c.bench_function("rk4_gyre_128x100", |b| {
        b.iter(|| {
            let (mut engine, mut field) = gyre_profile(16, 8);
            let report = engine
                .advect_steps(&mut field, 0.05, 100, StepMethod::Rk4)
                .unwrap();
            black_box(report);
        });
    });
}

/// Benchmark: Euler against RK4 step cost on the same workload.
fn bench_euler_gyre_128(c: &mut Criterion) {
    c.bench_function("euler_gyre_128x100", |b| {
        b.iter(|| {
            let (mut engine, mut field) = gyre_profile(16, 8);
            let report = engine
                .advect_steps(&mut field, 0.05, 100, StepMethod::Euler)
                .unwrap();
            black_box(report);
        });
    });
}

/// Benchmark: advect to a target time, exercising the clipping path.
fn bench_till_time_rotation(c: &mut Criterion) {
    c.bench_function("till_time_rotation_256", |b| {
        b.iter(|| {
            let (mut engine, mut field) = rotation_profile(256);
            let report = engine
                .advect_till_time(&mut field, 0.0, 0.01, 1.0, StepMethod::Rk4)
                .unwrap();
            black_box(report);
        });
    });
}

/// Benchmark: a full value-sampling pass over computed trajectories.
fn bench_value_sampling(c: &mut Criterion) {
    let (mut engine, mut field) = gyre_profile(16, 8);
    engine
        .advect_steps(&mut field, 0.05, 100, StepMethod::Rk4)
        .unwrap();

    c.bench_function("value_sampling_128x100", |b| {
        b.iter(|| {
            engine.calculate_particle_values(&mut field, false).unwrap();
            black_box(engine.value_var_name());
        });
    });
}

criterion_group!(
    benches,
    bench_rk4_gyre_128,
    bench_euler_gyre_128,
    bench_till_time_rotation,
    bench_value_sampling
);
criterion_main!(benches);
