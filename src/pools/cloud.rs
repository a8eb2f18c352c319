use glam::Vec2;

use crate::util::random::UnitSource;

/// A light-theme cloud drifting right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cloud {
    /// Left edge / vertical anchor in surface pixels.
    pub position: Vec2,
    /// Silhouette width, `[200, 550)`.
    pub width: f32,
    /// Silhouette height, `[40, 120)`.
    pub height: f32,
    /// Rightward drift per pass, `[0.1, 0.4)`.
    pub speed: f32,
    /// Fill opacity, `[0.35, 0.7)`.
    pub opacity: f32,
    /// Number of puffs along the top edge, `4..=7`.
    pub puff_count: u32,
}

impl Cloud {
    /// Spawn a cloud on a `width` x `height` surface.
    ///
    /// Clouds start up to 300px beyond either side and in the upper 70% of
    /// the surface.
    pub fn spawn<R: UnitSource + ?Sized>(
        rng: &mut R,
        width: f32,
        height: f32,
    ) -> Self {
        let x = rng.unit() * (width + 600.0) - 300.0;
        let y = rng.unit() * height * 0.7 + 20.0;
        Self {
            position: Vec2::new(x, y),
            width: rng.unit() * 350.0 + 200.0,
            height: rng.unit() * 80.0 + 40.0,
            speed: rng.unit() * 0.3 + 0.1,
            opacity: rng.unit() * 0.35 + 0.35,
            puff_count: (rng.unit() * 4.0).floor() as u32 + 4,
        }
    }
}

/// Create `count` clouds for a `width` x `height` surface.
pub fn create_clouds<R: UnitSource + ?Sized>(
    rng: &mut R,
    count: usize,
    width: f32,
    height: f32,
) -> Vec<Cloud> {
    (0..count).map(|_| Cloud::spawn(rng, width, height)).collect()
}
