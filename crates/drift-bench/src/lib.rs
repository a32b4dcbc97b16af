//! Benchmark profiles and utilities for the Drift advection library.
//!
//! Provides pre-seeded engine builders so benchmarks and examples share
//! one setup:
//!
//! - [`gyre_profile`]: a seeded grid in the double-gyre flow
//! - [`rotation_profile`]: a seeded ring in the rigid-rotation flow

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use drift_engine::{Advection, SeedBox};
use drift_fields::{CircularFlow, DoubleGyre};
use glam::DVec3;

/// An engine seeded with an `nx x ny` grid inside the double-gyre
/// domain, paired with the field to advect through.
pub fn gyre_profile(nx: usize, ny: usize) -> (Advection, DoubleGyre) {
    let mut engine = Advection::new();
    let seeds = SeedBox::new(
        DVec3::new(0.1, 0.1, 0.0),
        DVec3::new(1.9, 0.9, 0.0),
        0.0,
    )
    .grid(nx, ny, 1);
    engine.use_seed_particles(seeds);
    (engine, DoubleGyre::default())
}

/// An engine seeded with `count` random particles around a rigid
/// rotation, paired with the field to advect through.
pub fn rotation_profile(count: usize) -> (Advection, CircularFlow) {
    let mut engine = Advection::new();
    let seeds = SeedBox::new(
        DVec3::new(-1.0, -1.0, 0.0),
        DVec3::new(1.0, 1.0, 0.0),
        0.0,
    )
    .random(count, 42);
    engine.use_seed_particles(seeds);
    (engine, CircularFlow::new(DVec3::ZERO, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use drift_core::Field;

    #[test]
    fn gyre_profile_seeds_the_requested_grid() {
        let (engine, field) = gyre_profile(8, 4);
        assert_eq!(engine.stream_count(), 32);
        assert!(!field.is_steady());
    }

    #[test]
    fn rotation_profile_is_deterministic() {
        let (a, _) = rotation_profile(16);
        let (b, _) = rotation_profile(16);
        for (sa, sb) in a.streams().iter().zip(b.streams()) {
            assert_eq!(sa.seed().position, sb.seed().position);
        }
    }
}
