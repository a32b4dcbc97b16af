//! Core types and traits for the Drift particle advection library.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions shared across the Drift workspace: the
//! [`Particle`] trajectory sample, the [`Field`] collaborator trait, and
//! the error taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod field;
pub mod particle;

pub use error::{AdvectError, FieldError};
pub use field::Field;
pub use particle::Particle;

pub use glam::DVec3;
