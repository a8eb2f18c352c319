//! The full-document canvas and its two resize contracts.
//!
//! - **Hard resize** (viewport changed): width follows the viewport, height
//!   follows the full scrollable document. The engine regenerates every pool
//!   afterwards.
//! - **Soft height sync** (content grew or shrank): only the height follows
//!   the document; pools keep their coordinates and newly exposed area fills
//!   in as entities wrap into it.

use glam::Vec2;

use crate::surface::DrawSurface;

/// Host window metrics delivered with every resize notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    /// Visible width in pixels.
    pub width: u32,
    /// Visible height in pixels.
    pub height: u32,
    /// Full scrollable document height in pixels.
    pub document_height: u32,
}

impl Viewport {
    /// Metrics for a page whose document is exactly as tall as the viewport.
    #[must_use]
    pub fn fixed(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            document_height: height,
        }
    }
}

/// A drawing surface together with the pixel dimensions it was sized to.
#[derive(Debug)]
pub struct CanvasSurface<S> {
    surface: S,
    width: u32,
    height: u32,
}

impl<S: DrawSurface> CanvasSurface<S> {
    /// Take ownership of `surface` and size it for `viewport`.
    #[must_use]
    pub fn new(surface: S, viewport: Viewport) -> Self {
        let mut canvas = Self {
            surface,
            width: 0,
            height: 0,
        };
        canvas.hard_resize(viewport);
        canvas
    }

    /// Resize to the viewport width and full document height.
    pub fn hard_resize(&mut self, viewport: Viewport) {
        self.width = viewport.width;
        self.height = viewport.document_height;
        self.surface.resize(self.width, self.height);
    }

    /// Track a new document height without touching the width.
    ///
    /// Returns whether the height actually changed.
    pub fn sync_height(&mut self, document_height: u32) -> bool {
        if document_height == self.height {
            return false;
        }
        self.height = document_height;
        self.surface.resize(self.width, self.height);
        true
    }

    /// Current pixel width.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Current pixel height.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Current size as simulation bounds.
    #[must_use]
    pub fn bounds(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// The underlying drawing surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access for the renderer.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;

    fn viewport(width: u32, height: u32, document_height: u32) -> Viewport {
        Viewport {
            width,
            height,
            document_height,
        }
    }

    #[test]
    fn sized_to_document_not_viewport_height() {
        let canvas =
            CanvasSurface::new(RecordingSurface::new(), viewport(800, 600, 2400));
        assert_eq!((canvas.width(), canvas.height()), (800, 2400));
        assert_eq!(canvas.surface().size(), (800, 2400));
        assert_eq!(canvas.bounds(), Vec2::new(800.0, 2400.0));
    }

    #[test]
    fn hard_resize_follows_both_axes() {
        let mut canvas =
            CanvasSurface::new(RecordingSurface::new(), Viewport::fixed(800, 600));
        canvas.hard_resize(viewport(1200, 900, 1500));
        assert_eq!(canvas.surface().size(), (1200, 1500));
        assert_eq!(canvas.surface().resizes(), 2);
    }

    #[test]
    fn soft_sync_only_moves_height() {
        let mut canvas =
            CanvasSurface::new(RecordingSurface::new(), Viewport::fixed(800, 600));
        assert!(canvas.sync_height(900));
        assert_eq!(canvas.surface().size(), (800, 900));
        assert!(!canvas.sync_height(900));
        assert_eq!(canvas.surface().resizes(), 2);
    }
}
