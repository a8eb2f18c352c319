use std::f32::consts::TAU;

use glam::Vec2;

use crate::util::random::UnitSource;

/// Visual flavour of a light-theme particle, fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleKind {
    /// Pink/white petal.
    Petal,
    /// Warm golden mote with a soft halo.
    Glow,
}

/// A light-theme particle rising with a horizontal wobble.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightParticle {
    /// Position in surface pixels.
    pub position: Vec2,
    /// Radius in pixels, `[1.5, 5.5)`.
    pub size: f32,
    /// Per-pass displacement before wobble; `y` is always negative.
    pub velocity: Vec2,
    /// Peak opacity, `[0.2, 0.7)`.
    pub opacity: f32,
    /// Wobble amplitude, `[10, 40)`.
    pub wobble_amp: f32,
    /// Wobble angular rate factor.
    pub wobble_speed: f32,
    /// Wobble and pulse phase, `[0, 2π)`.
    pub wobble_offset: f32,
    /// Petal or glow.
    pub kind: ParticleKind,
}

impl LightParticle {
    /// Spawn a particle anywhere on a `width` x `height` surface.
    ///
    /// The final draw selects [`ParticleKind::Glow`] when it lands in the top
    /// `glow_fraction` of the unit interval.
    pub fn spawn<R: UnitSource + ?Sized>(
        rng: &mut R,
        width: f32,
        height: f32,
        glow_fraction: f32,
    ) -> Self {
        let x = rng.unit() * width;
        let y = rng.unit() * height;
        let size = rng.unit() * 4.0 + 1.5;
        let vx = (rng.unit() - 0.3) * 0.3;
        let vy = -(rng.unit() * 0.15 + 0.03);
        let opacity = rng.unit() * 0.5 + 0.2;
        let wobble_amp = rng.unit() * 30.0 + 10.0;
        let wobble_speed = rng.unit() * 0.01 + 0.003;
        let wobble_offset = rng.unit() * TAU;
        let kind = if rng.unit() > 1.0 - glow_fraction {
            ParticleKind::Glow
        } else {
            ParticleKind::Petal
        };
        Self {
            position: Vec2::new(x, y),
            size,
            velocity: Vec2::new(vx, vy),
            opacity,
            wobble_amp,
            wobble_speed,
            wobble_offset,
            kind,
        }
    }
}

/// Create `count` particles for a `width` x `height` surface.
pub fn create_particles<R: UnitSource + ?Sized>(
    rng: &mut R,
    count: usize,
    width: f32,
    height: f32,
    glow_fraction: f32,
) -> Vec<LightParticle> {
    (0..count)
        .map(|_| LightParticle::spawn(rng, width, height, glow_fraction))
        .collect()
}
