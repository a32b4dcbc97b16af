//! Integration test: order of accuracy of the two steppers.
//!
//! Advects a single particle around a rigid-rotation field, whose
//! trajectory has a closed form, with the adaptive controller disabled so
//! the increment stays fixed. Halving the increment must cut the global
//! error by ~2x for forward Euler and ~16x for RK4.

use drift_core::Particle;
use drift_engine::{Advection, CurvatureThresholds, StepMethod};
use drift_fields::CircularFlow;
use glam::DVec3;

/// Thresholds no trajectory can trip: the comparison is strict, so a
/// cosine can never exceed cos(0) = 1 nor fall below cos(180) = -1.
fn fixed_step_thresholds() -> CurvatureThresholds {
    CurvatureThresholds::new(0.0, 180.0)
}

/// Global position error after `steps` fixed-size steps of `dt`.
fn final_error(method: StepMethod, dt: f64, steps: usize) -> f64 {
    let seed_pos = DVec3::new(1.0, 0.0, 0.0);
    let mut field = CircularFlow::new(DVec3::ZERO, 1.0);

    let mut engine = Advection::new();
    engine.set_curvature_thresholds(fixed_step_thresholds());
    engine.use_seed_particles(vec![Particle::new(seed_pos, 0.0)]);
    engine.advect_steps(&mut field, dt, steps, method).unwrap();

    let stream = engine.stream_at(0).unwrap();
    assert_eq!(stream.step_count(), steps);
    let last = stream.last_sample().unwrap();
    // Evaluate the oracle at the particle's actual time so the
    // measurement captures spatial error only.
    (last.position - field.exact_position(seed_pos, last.time)).length()
}

#[test]
fn euler_error_halves_with_the_step() {
    let coarse = final_error(StepMethod::Euler, 0.02, 100);
    let fine = final_error(StepMethod::Euler, 0.01, 200);
    let ratio = coarse / fine;
    assert!(
        (1.6..2.6).contains(&ratio),
        "Euler refinement ratio {ratio}, expected ~2"
    );
}

#[test]
fn rk4_error_drops_sixteenfold_with_the_step() {
    let coarse = final_error(StepMethod::Rk4, 0.04, 100);
    let fine = final_error(StepMethod::Rk4, 0.02, 200);
    let ratio = coarse / fine;
    assert!(
        (10.0..24.0).contains(&ratio),
        "RK4 refinement ratio {ratio}, expected ~16"
    );
}

#[test]
fn rk4_beats_euler_at_equal_step() {
    let euler = final_error(StepMethod::Euler, 0.02, 200);
    let rk4 = final_error(StepMethod::Rk4, 0.02, 200);
    assert!(
        rk4 < euler / 100.0,
        "rk4 error {rk4} not clearly below euler error {euler}"
    );
}

#[test]
fn rk4_preserves_the_orbit_radius() {
    let seed_pos = DVec3::new(2.0, 0.0, 0.0);
    let mut field = CircularFlow::new(DVec3::ZERO, 1.0);
    let mut engine = Advection::new();
    engine.set_curvature_thresholds(fixed_step_thresholds());
    engine.use_seed_particles(vec![Particle::new(seed_pos, 0.0)]);
    engine
        .advect_steps(&mut field, 0.01, 500, StepMethod::Rk4)
        .unwrap();
    for p in engine.stream_at(0).unwrap().samples() {
        let r = p.position.truncate().length();
        assert!((r - 2.0).abs() < 1e-6, "radius drifted to {r}");
    }
}
