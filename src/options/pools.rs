use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::pools::{CLOUD_COUNT, GLOW_FRACTION, PARTICLE_COUNT, STAR_COUNT};

/// Pool sizes, fixed for the lifetime of an engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Pools", inline)]
#[serde(default)]
pub struct PoolOptions {
    /// Stars in the dark-theme field.
    #[schemars(title = "Stars", range(min = 0, max = 1000))]
    pub star_count: usize,
    /// Petals and glow motes in the light theme.
    #[schemars(title = "Particles", range(min = 0, max = 1000))]
    pub particle_count: usize,
    /// Clouds in the light theme.
    #[schemars(title = "Clouds", range(min = 0, max = 100))]
    pub cloud_count: usize,
    /// Share of particles created as glow motes.
    #[schemars(
        title = "Glow Fraction",
        range(min = 0.0, max = 1.0),
        extend("step" = 0.05)
    )]
    pub glow_fraction: f32,
}

impl Default for PoolOptions {
    fn default() -> Self {
        Self {
            star_count: STAR_COUNT,
            particle_count: PARTICLE_COUNT,
            cloud_count: CLOUD_COUNT,
            glow_fraction: GLOW_FRACTION,
        }
    }
}
