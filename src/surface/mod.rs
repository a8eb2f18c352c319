//! Minimal drawing interface the renderer targets.
//!
//! The renderer only ever needs four primitives: a full clear, filled
//! circles, filled axis-aligned ellipses and dashed line segments. Hosts
//! implement [`DrawSurface`] over their real canvas; tests use
//! [`RecordingSurface`].

mod recording;

use std::fmt;

use glam::Vec2;

pub use recording::{DrawCommand, RecordingSurface};

/// An sRGB colour with straight (non-premultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Opacity in `[0, 1]`.
    pub a: f32,
}

impl Rgba {
    /// Fully opaque colour.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Same hue at `alpha`, clamped into `[0, 1]`.
    #[must_use]
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            a: alpha.clamp(0.0, 1.0),
            ..self
        }
    }

    /// CSS `rgba(...)` form, as accepted by canvas fill and stroke styles.
    #[must_use]
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Stroke parameters for dashed lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    /// Line colour.
    pub color: Rgba,
    /// Line width in pixels.
    pub width: f32,
    /// Dash pattern: drawn length, then gap length.
    pub dash: [f32; 2],
}

/// A 2D drawing target owned exclusively by the renderer.
pub trait DrawSurface {
    /// Set the backing pixel dimensions. Implementations may discard content.
    fn resize(&mut self, width: u32, height: u32);

    /// Erase the rectangle `(0, 0)..(width, height)` to transparent.
    fn clear(&mut self, width: f32, height: f32);

    /// Fill a circle.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    /// Fill an axis-aligned ellipse with the given x/y radii.
    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, color: Rgba);

    /// Stroke a dashed segment from `from` to `to`.
    fn dashed_line(&mut self, from: Vec2, to: Vec2, stroke: Stroke);
}
