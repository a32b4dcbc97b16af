//! Advection engine for the Drift flow-visualization library.
//!
//! [`Advection`] owns one [`Stream`] per seed particle and advances all of
//! them through a [`Field`](drift_core::Field) collaborator, either for a
//! bounded number of steps or until a target time. Steppers are explicit
//! (forward Euler and classical RK4); the per-stream time increment is
//! adjusted between steps by a curvature-driven controller, and positions
//! are wrapped on any axis configured as periodic.
//!
//! Streams are mutually independent: a particle leaving the field's valid
//! volume halts only its own stream, recorded in-stream as a
//! [`StreamEntry::Separator`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod advection;
pub mod curvature;
pub mod periodic;
pub mod seeds;
pub mod stepper;
pub mod stream;

pub use advection::{AdvectReport, Advection};
pub use curvature::CurvatureThresholds;
pub use periodic::PeriodicAxis;
pub use seeds::SeedBox;
pub use stepper::StepMethod;
pub use stream::{Stream, StreamEntry};
