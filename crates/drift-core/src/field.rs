//! The [`Field`] collaborator trait.

use crate::error::FieldError;
use glam::DVec3;

/// A sampleable vector/scalar field over space and time.
///
/// This is the engine's only view of the data it advects through.
/// Concrete backends (analytic references, gridded simulation output)
/// implement this flat capability contract; the engine never assumes
/// anything about storage, interpolation, or caching.
///
/// # Failure signalling
///
/// Sampling outside the valid volume, or any internal failure, is reported
/// in-band: [`velocity`](Field::velocity) returns an all-NaN vector and
/// [`scalar`](Field::scalar) returns `NaN`. Callers that need to
/// distinguish "outside" from "inside but failed" test
/// [`contains_velocity`](Field::contains_velocity) /
/// [`contains_scalar`](Field::contains_scalar) first.
///
/// # Thread Safety
///
/// `Send + Sync` is required so `&dyn Field` can be shared across threads
/// by an engine that advances streams in parallel. Sampling takes `&self`
/// and must be safe to call concurrently with no cross-call ordering;
/// [`lock_params`](Field::lock_params) / [`unlock_params`](Field::unlock_params)
/// take `&mut self` and bracket such a batch of concurrent reads.
pub trait Field: Send + Sync {
    /// Whether `(time, pos)` lies inside the volume over which velocity
    /// sampling is valid.
    fn contains_velocity(&self, time: f64, pos: DVec3) -> bool;

    /// Whether `(time, pos)` lies inside the volume over which scalar
    /// sampling is valid.
    fn contains_scalar(&self, time: f64, pos: DVec3) -> bool;

    /// Number of timesteps backing this field. Analytic fields report 1.
    fn timestep_count(&self) -> usize;

    /// Sample the velocity at `(time, pos)`.
    ///
    /// Returns a vector with one or more `NaN` components on failure.
    fn velocity(&self, time: f64, pos: DVec3) -> DVec3;

    /// Sample the scalar variable at `(time, pos)`.
    ///
    /// Returns `NaN` on failure.
    fn scalar(&self, time: f64, pos: DVec3) -> f64;

    /// `true` if the field is time-independent.
    fn is_steady(&self) -> bool;

    /// Name of the scalar variable, or `""` if none is configured.
    fn scalar_name(&self) -> &str;

    /// Names of the three velocity components. Empty strings mark
    /// unconfigured components.
    fn velocity_names(&self) -> [&str; 3];

    /// Number of non-empty velocity component names.
    ///
    /// Zero for a freshly-configured or scalar-only field; integration
    /// requires exactly three.
    fn valid_velocity_name_count(&self) -> usize {
        self.velocity_names()
            .iter()
            .filter(|name| !name.is_empty())
            .count()
    }

    /// Pin any expensive lookup parameters for a batch of samples.
    ///
    /// The engine brackets every batch operation with a lock/unlock pair so
    /// implementations can cache per-batch state (e.g. a loaded timestep).
    /// Implementations with nothing to cache return `Ok(())`.
    fn lock_params(&mut self) -> Result<(), FieldError>;

    /// Release parameters pinned by [`lock_params`](Field::lock_params).
    fn unlock_params(&mut self) -> Result<(), FieldError>;
}
