//! Constant-velocity reference field.

use drift_core::{Field, FieldError};
use glam::DVec3;

/// A field with the same velocity everywhere, optionally bounded by an
/// axis-aligned box and a time interval.
///
/// The scalar variable is the (constant) flow speed, named `speed`.
/// Trajectories are straight lines, which makes this the field of choice
/// for exercising step counting, volume exits, and time clipping.
///
/// # Construction
///
/// ```
/// use drift_fields::UniformFlow;
/// use glam::DVec3;
///
/// let field = UniformFlow::builder()
///     .velocity(DVec3::new(1.0, 0.0, 0.0))
///     .bounds(DVec3::ZERO, DVec3::ONE)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct UniformFlow {
    velocity: DVec3,
    bounds: Option<(DVec3, DVec3)>,
    time_range: Option<(f64, f64)>,
}

/// Builder for [`UniformFlow`].
///
/// Required field: `velocity`.
pub struct UniformFlowBuilder {
    velocity: Option<DVec3>,
    bounds: Option<(DVec3, DVec3)>,
    time_range: Option<(f64, f64)>,
}

impl UniformFlow {
    /// Create a new builder for configuring a `UniformFlow`.
    pub fn builder() -> UniformFlowBuilder {
        UniformFlowBuilder {
            velocity: None,
            bounds: None,
            time_range: None,
        }
    }

    fn inside(&self, time: f64, pos: DVec3) -> bool {
        if let Some((start, end)) = self.time_range {
            if time < start || time > end {
                return false;
            }
        }
        match self.bounds {
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

impl UniformFlowBuilder {
    /// Set the constant velocity (required).
    pub fn velocity(mut self, velocity: DVec3) -> Self {
        self.velocity = Some(velocity);
        self
    }

    /// Bound the valid volume to `[min, max]`. Default: unbounded.
    pub fn bounds(mut self, min: DVec3, max: DVec3) -> Self {
        self.bounds = Some((min, max));
        self
    }

    /// Bound the valid time interval to `[start, end]`. Default: all time.
    pub fn time_range(mut self, start: f64, end: f64) -> Self {
        self.time_range = Some((start, end));
        self
    }

    /// Build the field, validating all configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `velocity` is not set or not finite
    /// - `bounds` has a min corner exceeding its max corner
    /// - `time_range` runs backwards
    pub fn build(self) -> Result<UniformFlow, String> {
        let velocity = self.velocity.ok_or_else(|| "velocity is required".to_string())?;
        if !velocity.is_finite() {
            return Err("velocity must be finite".to_string());
        }
        if let Some((min, max)) = self.bounds {
            if min.x > max.x || min.y > max.y || min.z > max.z {
                return Err("bounds min exceeds max".to_string());
            }
        }
        if let Some((start, end)) = self.time_range {
            if start > end {
                return Err("time_range runs backwards".to_string());
            }
        }
        Ok(UniformFlow {
            velocity,
            bounds: self.bounds,
            time_range: self.time_range,
        })
    }
}

impl Field for UniformFlow {
    fn contains_velocity(&self, time: f64, pos: DVec3) -> bool {
        self.inside(time, pos)
    }

    fn contains_scalar(&self, time: f64, pos: DVec3) -> bool {
        self.inside(time, pos)
    }

    fn timestep_count(&self) -> usize {
        1
    }

    fn velocity(&self, time: f64, pos: DVec3) -> DVec3 {
        if self.inside(time, pos) {
            self.velocity
        } else {
            DVec3::NAN
        }
    }

    fn scalar(&self, time: f64, pos: DVec3) -> f64 {
        if self.inside(time, pos) {
            self.velocity.length()
        } else {
            f64::NAN
        }
    }

    fn is_steady(&self) -> bool {
        self.time_range.is_none()
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
