//! Seed particle generation.
//!
//! Callers can hand the engine any particles they like; these helpers
//! cover the two common cases, a regular lattice and a reproducible
//! random scatter inside an axis-aligned box.

use drift_core::Particle;
use glam::DVec3;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// An axis-aligned box from which seed particles are generated, all
/// carrying the same seeding time.
///
/// Zero-extent axes are allowed; generated coordinates collapse to the
/// box minimum on such axes, so a plane, line, or single point works as
/// a degenerate box.
#[derive(Clone, Copy, Debug)]
pub struct SeedBox {
    min: DVec3,
    max: DVec3,
    time: f64,
}

impl SeedBox {
    /// Create a seed box spanning `a` to `b` (in any order) at seeding
    /// time `time`.
    pub fn new(a: DVec3, b: DVec3, time: f64) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
            time,
        }
    }

    /// The box minimum corner.
    pub fn min(&self) -> DVec3 {
        self.min
    }

    /// The box maximum corner.
    pub fn max(&self) -> DVec3 {
        self.max
    }

    /// The seeding time stamped on every generated particle.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// A regular `nx x ny x nz` lattice of seeds in deterministic
    /// x-fastest order. A count of 1 on an axis places seeds at that
    /// axis's midpoint; a count of 0 produces no seeds at all.
    pub fn grid(&self, nx: usize, ny: usize, nz: usize) -> Vec<Particle> {
        let mut seeds = Vec::with_capacity(nx * ny * nz);
        for iz in 0..nz {
            for iy in 0..ny {
                for ix in 0..nx {
                    let pos = DVec3::new(
                        lattice_coord(self.min.x, self.max.x, ix, nx),
                        lattice_coord(self.min.y, self.max.y, iy, ny),
                        lattice_coord(self.min.z, self.max.z, iz, nz),
                    );
                    seeds.push(Particle::new(pos, self.time));
                }
            }
        }
        seeds
    }

    /// `count` uniformly distributed seeds from a ChaCha8 generator
    /// seeded with `rng_seed`. Identical inputs produce identical seed
    /// sets across runs and platforms.
    pub fn random(&self, count: usize, rng_seed: u64) -> Vec<Particle> {
        let mut rng = ChaCha8Rng::seed_from_u64(rng_seed);
        let span = self.max - self.min;
        (0..count)
            .map(|_| {
                let u = DVec3::new(rng.random(), rng.random(), rng.random());
                Particle::new(self.min + u * span, self.time)
            })
            .collect()
    }
}

fn lattice_coord(min: f64, max: f64, i: usize, n: usize) -> f64 {
    if n <= 1 {
        0.5 * (min + max)
    } else {
        min + (max - min) * i as f64 / (n - 1) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_covers_the_box_corners() {
        let b = SeedBox::new(DVec3::ZERO, DVec3::new(1.0, 2.0, 3.0), 0.0);
        let seeds = b.grid(2, 2, 2);
        assert_eq!(seeds.len(), 8);
        assert_eq!(seeds[0].position, DVec3::ZERO);
        assert_eq!(seeds[7].position, DVec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn grid_is_x_fastest() {
        let b = SeedBox::new(DVec3::ZERO, DVec3::ONE, 0.0);
        let seeds = b.grid(3, 2, 1);
        assert_eq!(seeds.len(), 6);
        assert_eq!(seeds[0].position.x, 0.0);
        assert_eq!(seeds[1].position.x, 0.5);
        assert_eq!(seeds[2].position.x, 1.0);
        assert_eq!(seeds[3].position.y, 1.0);
    }

    #[test]
    fn singleton_axis_seeds_at_the_midpoint() {
        let b = SeedBox::new(DVec3::ZERO, DVec3::new(4.0, 4.0, 4.0), 1.5);
        let seeds = b.grid(1, 1, 1);
        assert_eq!(seeds.len(), 1);
        assert_eq!(seeds[0].position, DVec3::new(2.0, 2.0, 2.0));
        assert_eq!(seeds[0].time, 1.5);
    }

    #[test]
    fn zero_count_produces_no_seeds() {
        let b = SeedBox::new(DVec3::ZERO, DVec3::ONE, 0.0);
        assert!(b.grid(0, 4, 4).is_empty());
        assert!(b.random(0, 7).is_empty());
    }

    #[test]
    fn corner_order_does_not_matter() {
        let b = SeedBox::new(DVec3::ONE, DVec3::ZERO, 0.0);
        assert_eq!(b.min(), DVec3::ZERO);
        assert_eq!(b.max(), DVec3::ONE);
    }

    #[test]
    fn random_seeds_stay_inside_the_box() {
        let b = SeedBox::new(DVec3::new(-1.0, 0.0, 2.0), DVec3::new(1.0, 5.0, 3.0), 0.0);
        for seed in b.random(256, 42) {
            let p = seed.position;
            assert!(p.x >= -1.0 && p.x <= 1.0);
            assert!(p.y >= 0.0 && p.y <= 5.0);
            assert!(p.z >= 2.0 && p.z <= 3.0);
        }
    }

    #[test]
    fn random_seeds_are_deterministic_per_rng_seed() {
        let b = SeedBox::new(DVec3::ZERO, DVec3::ONE, 0.0);
        let a = b.random(32, 42);
        let c = b.random(32, 42);
        for (x, y) in a.iter().zip(&c) {
            assert_eq!(x.position, y.position);
        }
        let d = b.random(32, 43);
        assert!(a.iter().zip(&d).any(|(x, y)| x.position != y.position));
    }

    #[test]
    fn degenerate_axis_collapses_to_min() {
        let b = SeedBox::new(
            DVec3::new(0.0, 3.0, 0.0),
            DVec3::new(1.0, 3.0, 1.0),
            0.0,
        );
        for seed in b.random(16, 1) {
            assert_eq!(seed.position.y, 3.0);
        }
    }
}
