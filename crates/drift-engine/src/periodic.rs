//! Per-axis periodic wrap-around.

use glam::DVec3;

/// Periodicity configuration for one coordinate axis.
///
/// When enabled, coordinates are wrapped into `[min, max)` after each
/// integration step, before the result is stored. The wrap is a
/// presentation/continuity convenience over an unbounded field coordinate
/// (wrap-around longitude, say); the stepper's own sub-step evaluations
/// always see the pre-wrap position.
#[derive(Clone, Copy, Debug, Default)]
pub struct PeriodicAxis {
    enabled: bool,
    min: f64,
    max: f64,
}

impl PeriodicAxis {
    /// A disabled axis: coordinates pass through unchanged.
    pub fn disabled() -> Self {
        Self::default()
    }

    /// An enabled axis wrapping into `[min, max)`.
    pub fn enabled(min: f64, max: f64) -> Self {
        Self {
            enabled: true,
            min,
            max,
        }
    }

    /// Whether wrapping is enabled on this axis.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Wrap one coordinate. Disabled axes and degenerate spans
    /// (`max <= min`) pass the coordinate through unchanged.
    pub fn apply(&self, x: f64) -> f64 {
        let span = self.max - self.min;
        if !self.enabled || !(span > 0.0) {
            return x;
        }
        let wrapped = self.min + (x - self.min).rem_euclid(span);
        // Rounding can land the sum on max itself; the stored coordinate
        // must stay inside the half-open interval.
        if wrapped >= self.max {
            self.min
        } else {
            wrapped
        }
    }
}

/// Wrap a position on every enabled axis.
pub(crate) fn wrap_position(axes: &[PeriodicAxis; 3], pos: DVec3) -> DVec3 {
    DVec3::new(
        axes[0].apply(pos.x),
        axes[1].apply(pos.y),
        axes[2].apply(pos.z),
    )
}
