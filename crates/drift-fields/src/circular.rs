//! Rigid-rotation reference field.

use drift_core::{Field, FieldError};
use glam::DVec3;

/// Rigid rotation about a vertical axis: `v = omega x (p - center)` with
/// the rotation vector along +z.
///
/// Every trajectory is an exact circle around the axis, traversed at
/// constant angular speed, which gives integration tests a closed form:
/// a particle seeded at radius `r` and phase `phi` sits at phase
/// `phi + omega * t` after time `t`, still at radius `r`. The scalar
/// variable is that invariant radius, named `radius`.
///
/// The field is steady and unbounded.
#[derive(Debug, Clone)]
pub struct CircularFlow {
    center: DVec3,
    omega: f64,
}

impl CircularFlow {
    /// Rotation about the vertical line through `center`, at angular
    /// speed `omega` (radians per unit time, positive =
    /// counter-clockwise seen from +z).
    pub fn new(center: DVec3, omega: f64) -> Self {
        Self { center, omega }
    }

    /// The exact position at time `t` of a particle seeded at `seed_pos`
    /// at time 0.
    pub fn exact_position(&self, seed_pos: DVec3, t: f64) -> DVec3 {
        let rel = seed_pos - self.center;
        let (sin, cos) = (self.omega * t).sin_cos();
        self.center
            + DVec3::new(
                rel.x * cos - rel.y * sin,
                rel.x * sin + rel.y * cos,
                rel.z,
            )
    }
}

impl Field for CircularFlow {
    fn contains_velocity(&self, _time: f64, pos: DVec3) -> bool {
        pos.is_finite()
    }

    fn contains_scalar(&self, _time: f64, pos: DVec3) -> bool {
        pos.is_finite()
    }

    fn timestep_count(&self) -> usize {
        1
    }

    fn velocity(&self, _time: f64, pos: DVec3) -> DVec3 {
        let rel = pos - self.center;
        DVec3::new(-self.omega * rel.y, self.omega * rel.x, 0.0)
    }

    fn scalar(&self, _time: f64, pos: DVec3) -> f64 {
        let rel = pos - self.center;
        rel.truncate().length()
    }

    fn is_steady(&self) -> bool {
        true
    }

    fn scalar_name(&self) -> &str {
        "radius"
    }

    fn velocity_names(&self) -> [&str; 3] {
        ["u", "v", "w"]
    }

    fn lock_params(&mut self) -> Result<(), FieldError> {
        Ok(())
    }

    fn unlock_params(&mut self) -> Result<(), FieldError> {
        Ok(())
    }
}
