//! Frame rendering for both themes.
//!
//! A frame always starts with a full clear of the surface, then takes
//! exactly one of two draw paths:
//!
//! - **dark**: each star (halo, core, bright centre), then the Libra and
//!   Sagittarius overlays (dashed edges, then glow/dot/core per point)
//! - **light**: each cloud (base ellipse, puffs, highlight), then each
//!   particle (glow mote or petal) on top
//!
//! The renderer reads pools and never mutates them.

mod dark;
mod light;
pub mod palette;

use glam::Vec2;

use crate::pools::Pools;
use crate::surface::DrawSurface;
use crate::theme::Theme;

/// Draws one frame of the active theme.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer;

impl Renderer {
    /// Clear `surface` to `bounds` and draw `pools` for `theme` at time `t`.
    pub fn draw_frame<S: DrawSurface + ?Sized>(
        surface: &mut S,
        theme: Theme,
        pools: &Pools,
        t: f64,
        bounds: Vec2,
    ) {
        surface.clear(bounds.x, bounds.y);
        match theme {
            Theme::Dark => dark::draw(surface, &pools.stars, t, bounds),
            Theme::Light => {
                light::draw(surface, &pools.clouds, &pools.particles, t);
            }
        }
    }
}
