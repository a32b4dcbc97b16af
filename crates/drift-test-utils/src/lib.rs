//! Test utilities and mock types for Drift development.
//!
//! Provides [`MockField`], a fully scriptable [`Field`] implementation
//! with call counters, programmable volumes, and deterministic failure
//! injection for exercising the advection engine's termination paths.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::sync::atomic::{AtomicUsize, Ordering};

use drift_core::{Field, FieldError};
use glam::DVec3;

/// Mock implementation of [`Field`].
///
/// Defaults: unit-x velocity, unbounded velocity and scalar volumes, no
/// time bounds, steady, scalar value `0.0` under an empty name, velocity
/// components named `u`/`v`/`w`. Configure with the setters before
/// handing it to code under test.
///
/// Sampling methods take `&self`, so the call counters are atomics
/// (mirroring the engine's concurrent-sampling contract).
pub struct MockField {
    velocity: DVec3,
    velocity_names: [String; 3],
    bounds: Option<(DVec3, DVec3)>,
    scalar_value: f64,
    scalar_name: String,
    scalar_bounds: Option<(DVec3, DVec3)>,
    time_range: Option<(f64, f64)>,
    steady: bool,
    fail_velocity_after: Option<usize>,
    fail_lock: Option<String>,
    velocity_calls: AtomicUsize,
    scalar_calls: AtomicUsize,
    lock_calls: usize,
    unlock_calls: usize,
}

impl MockField {
    pub fn new() -> Self {
        Self {
            velocity: DVec3::X,
            velocity_names: ["u".into(), "v".into(), "w".into()],
            bounds: None,
            scalar_value: 0.0,
            scalar_name: String::new(),
            scalar_bounds: None,
            time_range: None,
            steady: true,
            fail_velocity_after: None,
            fail_lock: None,
            velocity_calls: AtomicUsize::new(0),
            scalar_calls: AtomicUsize::new(0),
            lock_calls: 0,
            unlock_calls: 0,
        }
    }

    /// Set the constant velocity returned inside the volume.
    pub fn set_velocity(&mut self, velocity: DVec3) {
        self.velocity = velocity;
    }

    /// Set the velocity component names. Empty strings mark components
    /// as unconfigured.
    pub fn set_velocity_names(&mut self, names: [&str; 3]) {
        self.velocity_names = names.map(str::to_string);
    }

    /// Bound the velocity volume to `[min, max]` (inclusive corners).
    pub fn set_bounds(&mut self, min: DVec3, max: DVec3) {
        self.bounds = Some((min, max));
    }

    /// Set the scalar sample value and its variable name.
    pub fn set_scalar(&mut self, value: f64, name: &str) {
        self.scalar_value = value;
        self.scalar_name = name.to_string();
    }

    /// Bound the scalar volume to `[min, max]` (inclusive corners).
    pub fn set_scalar_bounds(&mut self, min: DVec3, max: DVec3) {
        self.scalar_bounds = Some((min, max));
    }

    /// Restrict both volumes to `start <= time <= end` and mark the
    /// field unsteady.
    pub fn set_time_range(&mut self, start: f64, end: f64) {
        self.time_range = Some((start, end));
        self.steady = false;
    }

    /// Return NaN velocity after `n` successful velocity samples.
    pub fn fail_velocity_after(&mut self, n: usize) {
        self.fail_velocity_after = Some(n);
    }

    /// Make `lock_params` fail with the given reason.
    pub fn fail_lock(&mut self, reason: &str) {
        self.fail_lock = Some(reason.to_string());
    }

    /// Number of velocity samples taken so far.
    pub fn velocity_calls(&self) -> usize {
        self.velocity_calls.load(Ordering::Relaxed)
    }

    /// Number of scalar samples taken so far.
    pub fn scalar_calls(&self) -> usize {
        self.scalar_calls.load(Ordering::Relaxed)
    }

    /// Number of `lock_params` calls.
    pub fn lock_calls(&self) -> usize {
        self.lock_calls
    }

    /// Number of `unlock_params` calls.
    pub fn unlock_calls(&self) -> usize {
        self.unlock_calls
    }

    fn in_time(&self, time: f64) -> bool {
        match self.time_range {
            Some((start, end)) => time >= start && time <= end,
            None => true,
        }
    }

    fn in_box(bounds: Option<(DVec3, DVec3)>, pos: DVec3) -> bool {
        match bounds {
            Some((min, max)) => {
                pos.x >= min.x
                    && pos.x <= max.x
                    && pos.y >= min.y
                    && pos.y <= max.y
                    && pos.z >= min.z
                    && pos.z <= max.z
            }
            None => pos.is_finite(),
        }
    }
}

impl Default for MockField {
    fn default() -> Self {
        Self::new()
    }
}

impl Field for MockField {
    fn contains_velocity(&self, time: f64, pos: DVec3) -> bool {
        self.in_time(time) && Self::in_box(self.bounds, pos)
    }

    fn contains_scalar(&self, time: f64, pos: DVec3) -> bool {
        self.in_time(time) && Self::in_box(self.scalar_bounds, pos)
    }

    fn timestep_count(&self) -> usize {
        1
    }

    fn velocity(&self, time: f64, pos: DVec3) -> DVec3 {
        let n = self.velocity_calls.fetch_add(1, Ordering::Relaxed);
        if self.fail_velocity_after.is_some_and(|limit| n >= limit) {
            return DVec3::NAN;
        }
        if self.contains_velocity(time, pos) {
            self.velocity
        } else {
            DVec3::NAN
        }
    }

    fn scalar(&self, time: f64, pos: DVec3) -> f64 {
        self.scalar_calls.fetch_add(1, Ordering::Relaxed);
        if self.contains_scalar(time, pos) {
            self.scalar_value
        } else {
            f64::NAN
        }
    }

    fn is_steady(&self) -> bool {
        self.steady
    }

    fn scalar_name(&self) -> &str {
        &self.scalar_name
    }

    fn velocity_names(&self) -> [&str; 3] {
        [
            self.velocity_names[0].as_str(),
            self.velocity_names[1].as_str(),
            self.velocity_names[2].as_str(),
        ]
    }

    fn lock_params(&mut self) -> Result<(), FieldError> {
        self.lock_calls += 1;
        match &self.fail_lock {
            Some(reason) => Err(FieldError::LockFailed {
                reason: reason.clone(),
            }),
            None => Ok(()),
        }
    }

    fn unlock_params(&mut self) -> Result<(), FieldError> {
        self.unlock_calls += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mock_is_unbounded_and_counts_calls() {
        let field = MockField::new();
        assert!(field.contains_velocity(123.0, DVec3::splat(1e9)));
        assert_eq!(field.velocity(0.0, DVec3::ZERO), DVec3::X);
        assert_eq!(field.velocity_calls(), 1);
    }

    #[test]
    fn bounded_mock_rejects_outside_positions() {
        let mut field = MockField::new();
        field.set_bounds(DVec3::ZERO, DVec3::ONE);
        assert!(field.contains_velocity(0.0, DVec3::splat(0.5)));
        assert!(!field.contains_velocity(0.0, DVec3::splat(1.5)));
        assert!(field.velocity(0.0, DVec3::splat(1.5)).x.is_nan());
    }

    #[test]
    fn time_range_applies_to_both_volumes() {
        let mut field = MockField::new();
        field.set_time_range(0.0, 1.0);
        assert!(!field.is_steady());
        assert!(field.contains_velocity(0.5, DVec3::ZERO));
        assert!(!field.contains_velocity(2.0, DVec3::ZERO));
        assert!(!field.contains_scalar(2.0, DVec3::ZERO));
    }

    #[test]
    fn failure_injection_starts_after_the_limit() {
        let mut field = MockField::new();
        field.fail_velocity_after(2);
        assert!(field.velocity(0.0, DVec3::ZERO).is_finite());
        assert!(field.velocity(0.0, DVec3::ZERO).is_finite());
        assert!(field.velocity(0.0, DVec3::ZERO).x.is_nan());
    }

    #[test]
    fn nan_position_is_never_inside() {
        let field = MockField::new();
        assert!(!field.contains_velocity(0.0, DVec3::NAN));
    }
}
