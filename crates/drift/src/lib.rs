//! Drift: a particle advection engine for flow visualization.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Drift sub-crates. For most users, adding `drift` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use drift::prelude::*;
//!
//! // Rigid rotation about the origin: trajectories are exact circles.
//! let mut field = CircularFlow::new(DVec3::ZERO, 1.0);
//!
//! let mut engine = Advection::new();
//! engine.use_seed_particles(vec![Particle::new(DVec3::new(1.0, 0.0, 0.0), 0.0)]);
//! engine
//!     .advect_steps(&mut field, 0.01, 100, StepMethod::Rk4)
//!     .unwrap();
//!
//! let stream = engine.stream_at(0).unwrap();
//! assert_eq!(stream.step_count(), 100);
//!
//! // Enrich the trajectory with the field's scalar variable.
//! engine.calculate_particle_values(&mut field, false).unwrap();
//! assert_eq!(engine.value_var_name(), "radius");
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `drift-core` | `Particle`, the `Field` trait, error types |
//! | [`engine`] | `drift-engine` | The `Advection` engine, steppers, streams, seeding |
//! | [`fields`] | `drift-fields` | Reference analytic fields |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and traits (`drift-core`).
///
/// Contains the [`types::Particle`] value type, the [`types::Field`]
/// collaborator trait, and the error taxonomy.
pub use drift_core as types;

/// The advection engine (`drift-engine`).
///
/// [`engine::Advection`] owns the streams and runs the advancing loops;
/// the module also carries the steppers, the curvature controller,
/// per-axis periodicity, and [`engine::SeedBox`] seed generation.
pub use drift_engine as engine;

/// Reference analytic fields (`drift-fields`).
///
/// [`fields::UniformFlow`], [`fields::CircularFlow`], and
/// [`fields::DoubleGyre`] implement the full [`types::Field`] contract
/// with closed-form behavior.
pub use drift_fields as fields;

/// Common imports for typical Drift usage.
///
/// ```rust
/// use drift::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use drift_core::{DVec3, Field, Particle};

    // Errors
    pub use drift_core::{AdvectError, FieldError};

    // Engine
    pub use drift_engine::{
        AdvectReport, Advection, CurvatureThresholds, PeriodicAxis, SeedBox, StepMethod, Stream,
        StreamEntry,
    };

    // Reference fields
    pub use drift_fields::{CircularFlow, DoubleGyre, UniformFlow};
}
