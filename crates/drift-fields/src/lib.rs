//! Reference analytic fields for the Drift advection library.
//!
//! These implement the full [`Field`](drift_core::Field) contract without
//! any backing data, so they double as integration-test oracles: each has
//! a closed form the engine's output can be checked against.
//!
//! - [`UniformFlow`] — constant velocity, optionally bounded in space and
//!   time.
//! - [`CircularFlow`] — rigid rotation about a vertical axis; trajectories
//!   are exact circles.
//! - [`DoubleGyre`] — the standard unsteady two-gyre benchmark flow on
//!   `[0, 2] x [0, 1]`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod circular;
pub mod gyre;
pub mod uniform;

pub use circular::CircularFlow;
pub use gyre::DoubleGyre;
pub use uniform::UniformFlow;
