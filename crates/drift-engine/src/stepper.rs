//! Explicit single-step integration methods.
//!
//! A stepper takes a field, a particle, and a time increment and produces
//! the next particle; position and time advance together. `NaN` velocity
//! components returned by the field propagate into the result unchanged —
//! a stepper never substitutes a default velocity. Volume membership is
//! the advancing loop's responsibility, not the stepper's.

use drift_core::{Field, Particle};

/// Selects the integration method for an advection call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StepMethod {
    /// Forward Euler: one velocity evaluation per step, first-order.
    Euler,
    /// Classical fourth-order Runge-Kutta: four evaluations per step.
    #[default]
    Rk4,
}

/// Advance `p` by `dt` with the selected method.
pub fn advance(field: &dyn Field, p: &Particle, dt: f64, method: StepMethod) -> Particle {
    match method {
        StepMethod::Euler => euler(field, p, dt),
        StepMethod::Rk4 => rk4(field, p, dt),
    }
}

/// One forward-Euler step.
pub fn euler(field: &dyn Field, p: &Particle, dt: f64) -> Particle {
    let k = field.velocity(p.time, p.position);
    Particle::new(p.position + dt * k, p.time + dt)
}

/// One classical RK4 step.
pub fn rk4(field: &dyn Field, p: &Particle, dt: f64) -> Particle {
    let half = 0.5 * dt;
    let k1 = field.velocity(p.time, p.position);
    let k2 = field.velocity(p.time + half, p.position + half * k1);
    let k3 = field.velocity(p.time + half, p.position + half * k2);
    let k4 = field.velocity(p.time + dt, p.position + dt * k3);
    let slope = (k1 + 2.0 * k2 + 2.0 * k3 + k4) / 6.0;
    Particle::new(p.position + dt * slope, p.time + dt)
}
