//! Curvature-driven step-size adjustment.

use glam::DVec3;

/// Angle thresholds for the adaptive step-size controller.
///
/// The controller looks at the last three positions along a trajectory and
/// measures the turn between the two consecutive displacement vectors. A
/// turn flatter than `flat_angle_deg` grows the next increment, a turn
/// sharper than `sharp_angle_deg` shrinks it, anything in between leaves
/// it alone. Cosines of both angles are precomputed here so the per-step
/// comparison does no trigonometry.
#[derive(Clone, Copy, Debug)]
pub struct CurvatureThresholds {
    flat_angle_deg: f64,
    sharp_angle_deg: f64,
    flat_cos: f64,
    sharp_cos: f64,
}

impl Default for CurvatureThresholds {
    fn default() -> Self {
        Self::new(3.0, 15.0)
    }
}

impl CurvatureThresholds {
    /// Factor applied when the path is nearly straight.
    pub const GROW: f64 = 1.25;
    /// Factor applied when the path turns sharply.
    pub const SHRINK: f64 = 0.5;

    /// Displacements shorter than this give no usable direction.
    const DEGENERATE: f64 = 1e-12;

    /// Build thresholds from two angles in degrees, `flat <= sharp`.
    pub fn new(flat_angle_deg: f64, sharp_angle_deg: f64) -> Self {
        Self {
            flat_angle_deg,
            sharp_angle_deg,
            flat_cos: flat_angle_deg.to_radians().cos(),
            sharp_cos: sharp_angle_deg.to_radians().cos(),
        }
    }

    /// The flat-turn threshold in degrees.
    pub fn flat_angle_deg(&self) -> f64 {
        self.flat_angle_deg
    }

    /// The sharp-turn threshold in degrees.
    pub fn sharp_angle_deg(&self) -> f64 {
        self.sharp_angle_deg
    }

    /// Multiplicative adjustment for the next time increment, from the
    /// last three positions along one trajectory (oldest first).
    ///
    /// Returns [`GROW`](Self::GROW) when the turn is flatter than the flat
    /// threshold, [`SHRINK`](Self::SHRINK) when sharper than the sharp
    /// threshold, and exactly `1.0` in between or when either displacement
    /// is too short to define a direction.
    pub fn adjust_factor(&self, past2: DVec3, past1: DVec3, current: DVec3) -> f64 {
        let first = past1 - past2;
        let second = current - past1;
        let denom = first.length() * second.length();
        if denom < Self::DEGENERATE {
            return 1.0;
        }
        let cosine = first.dot(second) / denom;
        if cosine > self.flat_cos {
            Self::GROW
        } else if cosine < self.sharp_cos {
            Self::SHRINK
        } else {
            1.0
        }
    }
}
