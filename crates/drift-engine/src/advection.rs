//! The [`Advection`] engine: stream bookkeeping and the advancing loops.

use crate::curvature::CurvatureThresholds;
use crate::periodic::{wrap_position, PeriodicAxis};
use crate::stepper::{self, StepMethod};
use crate::stream::Stream;
use drift_core::{AdvectError, Field, Particle};

/// Outcome of an advection call.
///
/// "Success" in the result-code sense is `streams_advanced > 0`; a report
/// of zeros with `Ok` means the call had nothing to do (every stream
/// halted, or no stream was eligible), which keeps repeated calls
/// idempotent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AdvectReport {
    /// Streams that gained at least one new sample.
    pub streams_advanced: usize,
    /// Total samples appended across all streams.
    pub particles_added: usize,
}

impl AdvectReport {
    fn advanced(&mut self, added: usize) {
        if added > 0 {
            self.streams_advanced += 1;
            self.particles_added += added;
        }
    }
}

/// Per-stream iteration ceiling for [`Advection::advect_till_time`], so
/// pathological step shrinkage cannot hang the call. A stream stopped by
/// the ceiling stays resumable: no separator is recorded.
const TILL_TIME_STEP_CEILING: usize = 1 << 20;

/// Integrates tracer-particle trajectories through a [`Field`] and owns
/// the resulting streams.
///
/// One stream per seed, in seed order. Streams are mutually independent:
/// per-step state never crosses between them, and one stream's
/// termination does not affect another. See the crate docs for the
/// overall control flow.
#[derive(Debug, Default)]
pub struct Advection {
    streams: Vec<Stream>,
    value_var_name: String,
    property_var_names: Vec<String>,
    periodic: [PeriodicAxis; 3],
    thresholds: CurvatureThresholds,
}

impl Advection {
    /// An engine with no seeds, no periodicity, and default curvature
    /// thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Seeding and readiness ───────────────────────────────────

    /// Replace all streams with fresh single-sample streams, one per
    /// seed, discarding any previously computed trajectories.
    pub fn use_seed_particles(&mut self, seeds: Vec<Particle>) {
        self.streams = seeds.into_iter().map(Stream::from_seed).collect();
    }

    /// Check that integration against `field` can proceed.
    ///
    /// Fails with [`AdvectError::SeedsNotSet`] when no seeds have been
    /// supplied and with [`AdvectError::IncompleteVelocity`] when the
    /// field does not expose exactly three valid velocity component
    /// names.
    pub fn seeds_ready(&self, field: &dyn Field) -> Result<(), AdvectError> {
        if self.streams.is_empty() {
            return Err(AdvectError::SeedsNotSet);
        }
        let found = field.valid_velocity_name_count();
        if found != 3 {
            return Err(AdvectError::IncompleteVelocity { found });
        }
        Ok(())
    }

    // ── Advancing loops ─────────────────────────────────────────

    /// Advance every live stream by up to `max_steps` integration steps.
    ///
    /// Each step checks the current particle against the field's velocity
    /// volume first and fails closed: an out-of-volume particle (or a NaN
    /// velocity sample mid-step) halts that one stream with a separator
    /// while every other stream proceeds. Positions are wrapped on
    /// periodic axes before being stored. Field parameters are locked for
    /// the duration of the call; lock errors pass through unchanged.
    pub fn advect_steps(
        &mut self,
        field: &mut dyn Field,
        delta_t: f64,
        max_steps: usize,
        method: StepMethod,
    ) -> Result<AdvectReport, AdvectError> {
        self.seeds_ready(field)?;
        field.lock_params()?;
        let mut report = AdvectReport::default();
        {
            let plan = StepPlan {
                field: &*field,
                delta_t,
                max_steps,
                method,
                periodic: &self.periodic,
                thresholds: &self.thresholds,
                target_t: None,
            };
            for stream in &mut self.streams {
                report.advanced(plan.advance(stream));
            }
        }
        field.unlock_params()?;
        Ok(report)
    }

    /// Advance eligible streams until each lands exactly on `target_t`.
    ///
    /// A stream is eligible when its current time `t` satisfies
    /// `start_t <= t < target_t`; streams seeded outside that window are
    /// untouched. Intermediate steps follow the same volume, separator,
    /// and periodicity rules as [`advect_steps`](Self::advect_steps); the
    /// final step of each trajectory is clipped to a fractional increment
    /// so the last particle's time equals `target_t` exactly.
    pub fn advect_till_time(
        &mut self,
        field: &mut dyn Field,
        start_t: f64,
        delta_t: f64,
        target_t: f64,
        method: StepMethod,
    ) -> Result<AdvectReport, AdvectError> {
        self.seeds_ready(field)?;
        field.lock_params()?;
        let mut report = AdvectReport::default();
        {
            let plan = StepPlan {
                field: &*field,
                delta_t,
                max_steps: TILL_TIME_STEP_CEILING,
                method,
                periodic: &self.periodic,
                thresholds: &self.thresholds,
                target_t: Some(target_t),
            };
            for stream in &mut self.streams {
                let eligible = stream
                    .last_sample()
                    .is_some_and(|p| p.time >= start_t && p.time < target_t);
                if !eligible {
                    continue;
                }
                report.advanced(plan.advance(stream));
            }
        }
        field.unlock_params()?;
        Ok(report)
    }

    // ── Value and property sampling ─────────────────────────────

    /// Sample `field`'s scalar variable at every particle of every
    /// stream, writing into the value slot.
    ///
    /// With `skip_non_zero`, slots already holding a non-zero sampled
    /// value are left untouched so a trajectory can be enriched
    /// incrementally; zero and unset (`NaN`) slots are always refilled.
    /// Without it, every slot is overwritten, including with `NaN` where
    /// the particle lies outside the scalar volume.
    pub fn calculate_particle_values(
        &mut self,
        field: &mut dyn Field,
        skip_non_zero: bool,
    ) -> Result<(), AdvectError> {
        field.lock_params()?;
        for stream in &mut self.streams {
            for p in stream.samples_mut() {
                if skip_non_zero && p.has_value() && p.value() != 0.0 {
                    continue;
                }
                p.set_value(sample_scalar(field, p));
            }
        }
        self.value_var_name = field.scalar_name().to_string();
        field.unlock_params()?;
        Ok(())
    }

    /// Sample `field`'s scalar variable at every particle, writing into
    /// each particle's property map under the field's scalar name.
    ///
    /// Extends the set of tracked property names additively instead of
    /// overwriting the single value slot.
    pub fn calculate_particle_properties(
        &mut self,
        field: &mut dyn Field,
    ) -> Result<(), AdvectError> {
        field.lock_params()?;
        let name = field.scalar_name().to_string();
        for stream in &mut self.streams {
            for p in stream.samples_mut() {
                let value = sample_scalar(field, p);
                p.set_property(name.clone(), value);
            }
        }
        if !self.property_var_names.contains(&name) {
            self.property_var_names.push(name);
        }
        field.unlock_params()?;
        Ok(())
    }

    /// Reset every particle's value slot to unset and forget the active
    /// value-variable name.
    pub fn reset_particle_values(&mut self) {
        for stream in &mut self.streams {
            for p in stream.samples_mut() {
                p.clear_value();
            }
        }
        self.value_var_name.clear();
    }

    /// Remove every property from every particle and forget all tracked
    /// property names.
    pub fn clear_particle_properties(&mut self) {
        for stream in &mut self.streams {
            for p in stream.samples_mut() {
                p.clear_properties();
            }
        }
        self.property_var_names.clear();
    }

    /// Remove one named property from every particle. A name that was
    /// never sampled leaves all streams unchanged.
    pub fn remove_particle_property(&mut self, name: &str) {
        for stream in &mut self.streams {
            for p in stream.samples_mut() {
                p.remove_property(name);
            }
        }
        self.property_var_names.retain(|n| n != name);
    }

    // ── Configuration ───────────────────────────────────────────

    /// Configure wrap-around on the x axis.
    ///
    /// Periodicity is decided by whoever knows the field's topology, not
    /// by the engine; it is applied to stored positions only.
    pub fn set_x_periodicity(&mut self, enabled: bool, min: f64, max: f64) {
        self.periodic[0] = Self::axis(enabled, min, max);
    }

    /// Configure wrap-around on the y axis.
    pub fn set_y_periodicity(&mut self, enabled: bool, min: f64, max: f64) {
        self.periodic[1] = Self::axis(enabled, min, max);
    }

    /// Configure wrap-around on the z axis.
    pub fn set_z_periodicity(&mut self, enabled: bool, min: f64, max: f64) {
        self.periodic[2] = Self::axis(enabled, min, max);
    }

    fn axis(enabled: bool, min: f64, max: f64) -> PeriodicAxis {
        if enabled {
            PeriodicAxis::enabled(min, max)
        } else {
            PeriodicAxis::disabled()
        }
    }

    /// Replace the curvature thresholds used by the adaptive controller.
    pub fn set_curvature_thresholds(&mut self, thresholds: CurvatureThresholds) {
        self.thresholds = thresholds;
    }

    // ── Readout ─────────────────────────────────────────────────

    /// Number of streams (equals the number of seeds supplied).
    pub fn stream_count(&self) -> usize {
        self.streams.len()
    }

    /// The stream at `index`, in seed order.
    pub fn stream_at(&self, index: usize) -> Option<&Stream> {
        self.streams.get(index)
    }

    /// All streams in seed order.
    pub fn streams(&self) -> &[Stream] {
        &self.streams
    }

    /// The maximum entry count over all streams, separators included.
    /// Zero when no seeds have been supplied.
    pub fn max_stream_len(&self) -> usize {
        self.streams.iter().map(Stream::len).max().unwrap_or(0)
    }

    /// Name of the scalar variable the value slots were last sampled
    /// from, or `""` after a reset.
    pub fn value_var_name(&self) -> &str {
        &self.value_var_name
    }

    /// Names of the scalar variables property sampling has written, in
    /// first-sampled order.
    pub fn property_var_names(&self) -> &[String] {
        &self.property_var_names
    }
}

/// One advection call's per-stream stepping loop and its shared inputs.
///
/// Streams never share state through the plan: everything here is read
/// per step, and the only mutation is the stream handed to
/// [`advance`](StepPlan::advance).
struct StepPlan<'a> {
    field: &'a dyn Field,
    delta_t: f64,
    max_steps: usize,
    method: StepMethod,
    periodic: &'a [PeriodicAxis; 3],
    thresholds: &'a CurvatureThresholds,
    target_t: Option<f64>,
}

impl StepPlan<'_> {
    /// Advance one stream, returning the number of samples appended.
    ///
    /// With `target_t` set, the last step is clipped to a fractional
    /// increment and the loop ends once the stream reaches the target.
    fn advance(&self, stream: &mut Stream) -> usize {
        let mut dt = self.delta_t;
        let mut added = 0;
        for _ in 0..self.max_steps {
            let Some(current) = stream.last_sample() else {
                break;
            };
            if !self.field.contains_velocity(current.time, current.position) {
                // Fails closed. A stream already ending in a separator is
                // left as-is so repeated calls do not stack separators.
                if !stream.is_halted() {
                    stream.push_separator();
                }
                break;
            }

            let mut step_dt = dt;
            let mut clipped = None;
            if let Some(target) = self.target_t {
                let remaining = target - current.time;
                if remaining <= 0.0 {
                    break;
                }
                if step_dt >= remaining {
                    step_dt = remaining;
                    clipped = Some(target);
                }
            }

            let mut next = stepper::advance(self.field, current, step_dt, self.method);
            if !next.position.is_finite() {
                // The field answered NaN somewhere inside the step; halt
                // this stream without storing the poisoned sample.
                stream.push_separator();
                break;
            }
            if let Some(target) = clipped {
                // Land exactly on the target rather than trusting the
                // floating-point sum inside the stepper.
                next.time = target;
            }
            next.position = wrap_position(self.periodic, next.position);
            stream.push_sample(next);
            added += 1;
            if clipped.is_some() {
                break;
            }

            let recent = stream.recent_positions();
            if recent.len() == Stream::HISTORY {
                dt *= self.thresholds.adjust_factor(recent[0], recent[1], recent[2]);
            }
        }
        added
    }
}

fn sample_scalar(field: &dyn Field, p: &Particle) -> f64 {
    if field.contains_scalar(p.time, p.position) {
        field.scalar(p.time, p.position)
    } else {
        f64::NAN
    }
}
