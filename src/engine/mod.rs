//! The animation engine: one frame pass plus the loop that drives it.
//!
//! [`Backdrop`] owns the canvas, the pools and the random source, and knows
//! how to run one pass and both resize contracts. [`AnimationLoop`] wires a
//! `Backdrop` to a [`Host`]: it schedules passes, listens for resizes and
//! tears everything down on [`AnimationLoop::stop`].

mod animation_loop;
mod host;
#[cfg(test)]
mod testing;

pub use animation_loop::{AnimationLoop, LoopState};
pub use host::{FrameHandle, FramePass, Host, ResizeListener, Subscription};

use crate::canvas::{CanvasSurface, Viewport};
use crate::options::PoolOptions;
use crate::pools::Pools;
use crate::renderer::Renderer;
use crate::simulation::Simulator;
use crate::surface::DrawSurface;
use crate::theme::ThemeCell;
use crate::util::random::UnitSource;

/// Canvas, pools and randomness for one engine instance.
pub struct Backdrop<S> {
    canvas: CanvasSurface<S>,
    pools: Pools,
    rng: Box<dyn UnitSource>,
    theme: ThemeCell,
    pool_options: PoolOptions,
}

impl<S: DrawSurface> Backdrop<S> {
    /// Size `surface` for `viewport` and generate the initial pools.
    #[must_use]
    pub fn new(
        surface: S,
        viewport: Viewport,
        theme: ThemeCell,
        pool_options: PoolOptions,
        mut rng: Box<dyn UnitSource>,
    ) -> Self {
        let canvas = CanvasSurface::new(surface, viewport);
        let bounds = canvas.bounds();
        let pools =
            Pools::generate(rng.as_mut(), bounds.x, bounds.y, &pool_options);
        Self {
            canvas,
            pools,
            rng,
            theme,
            pool_options,
        }
    }

    /// One pass at time `t`: read the theme, advance that theme's pools,
    /// then redraw the whole surface.
    pub fn frame(&mut self, t: f64) {
        let theme = self.theme.get();
        let bounds = self.canvas.bounds();
        Simulator::advance(&mut self.pools, theme, t, bounds, self.rng.as_mut());
        self.redraw(t);
    }

    /// Draw the current pools at time `t` without advancing them.
    pub fn redraw(&mut self, t: f64) {
        let bounds = self.canvas.bounds();
        Renderer::draw_frame(
            self.canvas.surface_mut(),
            self.theme.get(),
            &self.pools,
            t,
            bounds,
        );
    }

    /// Viewport changed: resize the canvas and regenerate every pool.
    ///
    /// The new pools are built in full before replacing the old ones in a
    /// single assignment.
    pub fn hard_resize(&mut self, viewport: Viewport) {
        self.canvas.hard_resize(viewport);
        let bounds = self.canvas.bounds();
        let fresh = Pools::generate(
            self.rng.as_mut(),
            bounds.x,
            bounds.y,
            &self.pool_options,
        );
        self.pools = fresh;
        log::debug!(
            "hard resize to {}x{}, regenerated {} entities",
            self.canvas.width(),
            self.canvas.height(),
            self.pools.len()
        );
    }

    /// Content extent changed: follow the document height, keep the pools.
    pub fn sync_content_height(&mut self, document_height: u32) {
        if self.canvas.sync_height(document_height) {
            log::debug!(
                "content height sync to {}x{}",
                self.canvas.width(),
                self.canvas.height()
            );
        }
    }

    /// Current entity pools.
    #[must_use]
    pub fn pools(&self) -> &Pools {
        &self.pools
    }

    /// The sized drawing surface.
    #[must_use]
    pub fn canvas(&self) -> &CanvasSurface<S> {
        &self.canvas
    }

    /// Mutable access to the surface, e.g. to drain a recording.
    pub fn canvas_mut(&mut self) -> &mut CanvasSurface<S> {
        &mut self.canvas
    }

    /// The shared theme holder this engine reads.
    #[must_use]
    pub fn theme(&self) -> &ThemeCell {
        &self.theme
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::surface::RecordingSurface;
    use crate::theme::Theme;
    use crate::util::random::SequenceSource;

    fn backdrop(theme: Theme) -> Backdrop<RecordingSurface> {
        Backdrop::new(
            RecordingSurface::new(),
            Viewport::fixed(800, 600),
            ThemeCell::new(theme),
            PoolOptions::default(),
            Box::new(StdRng::seed_from_u64(21)),
        )
    }

    #[test]
    fn golden_pools_from_scripted_draws() {
        let b = Backdrop::new(
            RecordingSurface::new(),
            Viewport::fixed(800, 600),
            ThemeCell::default(),
            PoolOptions::default(),
            Box::new(SequenceSource::new([0.0, 0.5])),
        );
        assert_eq!(b.pools().stars[0].position, Vec2::new(0.0, 300.0));
    }

    #[test]
    fn frame_clears_then_draws() {
        let mut b = backdrop(Theme::Dark);
        b.frame(1.0);
        let surface = b.canvas().surface();
        assert_eq!(surface.clears(), 1);
        assert!(surface.circles() >= 150);
        assert_eq!(surface.ellipses(), 0);
    }

    #[test]
    fn theme_toggle_leaves_pools_untouched() {
        let b = backdrop(Theme::Dark);
        let snapshot = b.pools().clone();
        assert_eq!(b.theme().toggle(), Theme::Light);
        assert_eq!(b.pools(), &snapshot);
        assert_eq!(b.pools().stars.len(), 150);
    }

    #[test]
    fn theme_is_read_fresh_each_frame() {
        let mut b = backdrop(Theme::Dark);
        let authority = b.theme().clone();
        b.frame(0.0);
        assert_eq!(b.canvas().surface().ellipses(), 0);
        authority.set(Theme::Light);
        b.frame(0.1);
        assert_eq!(b.canvas().surface().ellipses(), 12);
    }

    #[test]
    fn hard_resize_regenerates_within_new_bounds() {
        let mut b = backdrop(Theme::Dark);
        let before = b.pools().clone();
        b.hard_resize(Viewport::fixed(1200, 900));
        let pools = b.pools();
        assert_ne!(pools, &before);
        assert_eq!(pools.stars.len(), 150);
        assert_eq!(pools.particles.len(), 60);
        assert_eq!(pools.clouds.len(), 12);
        for star in &pools.stars {
            assert!((0.0..1200.0).contains(&star.position.x));
            assert!((0.0..900.0).contains(&star.position.y));
        }
        assert_eq!(b.canvas().surface().size(), (1200, 900));
    }

    #[test]
    fn soft_sync_keeps_entities_in_place() {
        let mut b = backdrop(Theme::Dark);
        let before = b.pools().clone();
        let stars_ptr = b.pools().stars.as_ptr();
        b.sync_content_height(900);
        assert_eq!(b.pools(), &before);
        assert_eq!(b.pools().stars.as_ptr(), stars_ptr);
        assert_eq!(b.canvas().surface().size(), (800, 900));
        assert_eq!(b.canvas().bounds(), Vec2::new(800.0, 900.0));
    }

    #[test]
    fn redraw_leaves_pools_in_place() {
        let mut b = backdrop(Theme::Light);
        let before = b.pools().clone();
        b.redraw(3.0);
        b.redraw(4.0);
        assert_eq!(b.pools(), &before);
        assert_eq!(b.canvas().surface().clears(), 2);
        assert_eq!(b.canvas().surface().ellipses(), 24);
    }

    #[test]
    fn cardinality_survives_many_resizes() {
        let mut b = backdrop(Theme::Light);
        for i in 0..20u32 {
            b.hard_resize(Viewport::fixed(300 + i * 50, 200 + i * 40));
            b.frame(f64::from(i));
            assert_eq!(b.pools().len(), 222);
        }
    }
}
