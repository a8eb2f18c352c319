//! Entity pools: the star field, light-theme particles and clouds.
//!
//! Each pool is a fixed-cardinality `Vec` of plain value records. Pools are
//! only ever rebuilt wholesale by [`Pools::generate`]; callers replace the
//! whole [`Pools`] value in one assignment so a frame pass never sees a
//! partially rebuilt pool.

mod cloud;
mod particle;
mod star;

pub use cloud::{create_clouds, Cloud};
pub use particle::{create_particles, LightParticle, ParticleKind};
pub use star::{create_stars, Star};

use crate::options::PoolOptions;
use crate::util::random::UnitSource;

/// Default number of stars.
pub const STAR_COUNT: usize = 150;
/// Default number of light-theme particles.
pub const PARTICLE_COUNT: usize = 60;
/// Default number of clouds.
pub const CLOUD_COUNT: usize = 12;
/// Default share of particles drawn as glow motes.
pub const GLOW_FRACTION: f32 = 0.4;

/// All mutable entity collections, for both themes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Pools {
    /// Dark-theme star field.
    pub stars: Vec<Star>,
    /// Light-theme petals and glow motes.
    pub particles: Vec<LightParticle>,
    /// Light-theme clouds.
    pub clouds: Vec<Cloud>,
}

impl Pools {
    /// Build fresh pools for a `width` x `height` surface.
    ///
    /// Draw order is stars, then particles, then clouds, matching the order
    /// the pools are listed in.
    pub fn generate<R: UnitSource + ?Sized>(
        rng: &mut R,
        width: f32,
        height: f32,
        options: &PoolOptions,
    ) -> Self {
        Self {
            stars: create_stars(rng, options.star_count, width, height),
            particles: create_particles(
                rng,
                options.particle_count,
                width,
                height,
                options.glow_fraction,
            ),
            clouds: create_clouds(rng, options.cloud_count, width, height),
        }
    }

    /// Total number of entities across all pools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stars.len() + self.particles.len() + self.clouds.len()
    }

    /// Whether every pool is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
