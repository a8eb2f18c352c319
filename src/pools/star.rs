use std::f32::consts::TAU;

use glam::Vec2;

use crate::util::random::UnitSource;

/// A dark-theme star drifting down and sideways.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    /// Position in surface pixels.
    pub position: Vec2,
    /// Core radius in pixels, `[1, 4.5)`.
    pub size: f32,
    /// Per-pass displacement; `y` is always positive.
    pub velocity: Vec2,
    /// Peak opacity, `[0.5, 1)`.
    pub opacity: f32,
    /// Twinkle angular rate factor.
    pub twinkle_speed: f32,
    /// Twinkle phase, `[0, 2π)`.
    pub twinkle_offset: f32,
}

impl Star {
    /// Spawn a star anywhere on a `width` x `height` surface.
    pub fn spawn<R: UnitSource + ?Sized>(
        rng: &mut R,
        width: f32,
        height: f32,
    ) -> Self {
        let x = rng.unit() * width;
        let y = rng.unit() * height;
        let size = rng.unit() * 3.5 + 1.0;
        let vx = (rng.unit() - 0.5) * 0.18;
        let vy = rng.unit() * 0.25 + 0.06;
        Self {
            position: Vec2::new(x, y),
            size,
            velocity: Vec2::new(vx, vy),
            opacity: rng.unit() * 0.5 + 0.5,
            twinkle_speed: rng.unit() * 0.02 + 0.008,
            twinkle_offset: rng.unit() * TAU,
        }
    }
}

/// Create `count` stars for a `width` x `height` surface.
pub fn create_stars<R: UnitSource + ?Sized>(
    rng: &mut R,
    count: usize,
    width: f32,
    height: f32,
) -> Vec<Star> {
    (0..count).map(|_| Star::spawn(rng, width, height)).collect()
}
