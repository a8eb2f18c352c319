use glam::Vec2;

use super::{DrawSurface, Rgba, Stroke};

/// One primitive issued to a [`RecordingSurface`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Full-surface clear.
    Clear {
        /// Cleared width.
        width: f32,
        /// Cleared height.
        height: f32,
    },
    /// Filled circle.
    Circle {
        /// Centre in surface pixels.
        center: Vec2,
        /// Radius in pixels.
        radius: f32,
        /// Fill colour.
        color: Rgba,
    },
    /// Filled ellipse.
    Ellipse {
        /// Centre in surface pixels.
        center: Vec2,
        /// X/Y radii in pixels.
        radii: Vec2,
        /// Fill colour.
        color: Rgba,
    },
    /// Dashed segment.
    Line {
        /// Start point.
        from: Vec2,
        /// End point.
        to: Vec2,
        /// Stroke parameters.
        stroke: Stroke,
    },
}

/// In-memory [`DrawSurface`] that records every command it receives.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    size: (u32, u32),
    resizes: usize,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Empty recording with a zero-sized backing store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last size passed to [`DrawSurface::resize`].
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    /// Number of resize calls received.
    #[must_use]
    pub fn resizes(&self) -> usize {
        self.resizes
    }

    /// Every command recorded since the last [`Self::take`].
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain the recorded commands.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Number of clears recorded.
    #[must_use]
    pub fn clears(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Clear { .. }))
            .count()
    }

    /// Number of filled circles recorded.
    #[must_use]
    pub fn circles(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count()
    }

    /// Number of filled ellipses recorded.
    #[must_use]
    pub fn ellipses(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Ellipse { .. }))
            .count()
    }

    /// Number of dashed lines recorded.
    #[must_use]
    pub fn lines(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count()
    }
}

impl DrawSurface for RecordingSurface {
    fn resize(&mut self, width: u32, height: u32) {
        self.size = (width, height);
        self.resizes += 1;
    }

    fn clear(&mut self, width: f32, height: f32) {
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, color: Rgba) {
        self.commands.push(DrawCommand::Ellipse {
            center,
            radii,
            color,
        });
    }

    fn dashed_line(&mut self, from: Vec2, to: Vec2, stroke: Stroke) {
        self.commands.push(DrawCommand::Line { from, to, stroke });
    }
}
