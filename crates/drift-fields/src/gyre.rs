//! The unsteady double-gyre benchmark flow.

use drift_core::{Field, FieldError};
use glam::DVec3;
use std::f64::consts::PI;

/// The time-periodic double-gyre flow on the domain `[0, 2] x [0, 1]`.
///
/// Stream function `psi = A sin(pi f(x, t)) sin(pi y)` with
/// `f(x, t) = eps sin(w t) x^2 + (1 - 2 eps sin(w t)) x`, the standard
/// test case for unsteady flow visualization: two counter-rotating gyres
/// whose dividing line oscillates horizontally. There is no flow through
/// the domain boundary, so trajectories seeded inside stay inside.
///
/// The scalar variable is the local flow speed, named `speed`. The valid
/// volume is the planar domain at any height and time; the third velocity
/// component is identically zero.
#[derive(Debug, Clone)]
pub struct DoubleGyre {
    amplitude: f64,
    eps: f64,
    omega: f64,
}

impl Default for DoubleGyre {
    fn default() -> Self {
        // The parameter set used throughout the LCS literature.
        Self::new(0.1, 0.25, 2.0 * PI / 10.0)
    }
}

impl DoubleGyre {
    /// Domain extent along x.
    pub const WIDTH: f64 = 2.0;
    /// Domain extent along y.
    pub const HEIGHT: f64 = 1.0;

    /// A double gyre with amplitude `amplitude`, oscillation strength
    /// `eps`, and angular frequency `omega`.
    pub fn new(amplitude: f64, eps: f64, omega: f64) -> Self {
        Self {
            amplitude,
            eps,
            omega,
        }
    }

    fn plane_velocity(&self, time: f64, x: f64, y: f64) -> (f64, f64) {
        let a = self.eps * (self.omega * time).sin();
        let b = 1.0 - 2.0 * a;
        let f = a * x * x + b * x;
        let df_dx = 2.0 * a * x + b;
        let u = -PI * self.amplitude * (PI * f).sin() * (PI * y).cos();
        let v = PI * self.amplitude * (PI * f).cos() * (PI * y).sin() * df_dx;
        (u, v)
    }

    fn inside(pos: DVec3) -> bool {
        pos.is_finite()
            && pos.x >= 0.0
            && pos.x <= Self::WIDTH
            && pos.y >= 0.0
            && pos.y <= Self::HEIGHT
    }
}

impl Field for DoubleGyre {
    fn contains_velocity(&self, _time: f64, pos: DVec3) -> bool {
        Self::inside(pos)
    }

    fn contains_scalar(&self, _time: f64, pos: DVec3) -> bool {
        Self::inside(pos)
    }

    fn timestep_count(&self) -> usize {
        1
    }

    fn velocity(&self, time: f64, pos: DVec3) -> DVec3 {
        if !Self::inside(pos) {
            return DVec3::NAN;
        }
        let (u, v) = self.plane_velocity(time, pos.x, pos.y);
        DVec3::new(u, v, 0.0)
    }

    fn scalar(&self, time: f64, pos: DVec3) -> f64 {
        if !Self::inside(pos) {
            return f64::NAN;
        }
        let (u, v) = self.plane_velocity(time, pos.x, pos.y);
        (u * u + v * v).sqrt()
    }

    fn is_steady(&self) -> bool {
        false
    }

    fn scalar_name(&self) -> &str {
        "speed"
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
