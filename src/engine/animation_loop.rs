//! The running engine: schedules one pass per display frame until stopped.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use web_time::{Instant, SystemTime, UNIX_EPOCH};

use super::host::{
    FrameHandle, FramePass, Host, ResizeListener, Subscription,
};
use super::Backdrop;
use crate::canvas::Viewport;
use crate::error::BackdropError;
use crate::options::Options;
use crate::theme::ThemeCell;
use crate::util::frame_timing::FrameTiming;
use crate::util::random::{seeded_rng, UnitSource};

/// Lifecycle of an [`AnimationLoop`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Passes are being scheduled (or a static frame is showing when the
    /// host cannot schedule).
    Running,
    /// Torn down; no further passes or notifications.
    Stopped,
}

/// Seconds since the Unix epoch; the phase source for every periodic term.
fn wall_clock_seconds() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or_default()
}

struct DriverState<S> {
    status: LoopState,
    backdrop: Backdrop<S>,
    pending: Option<FrameHandle>,
    timing: FrameTiming,
}

/// Shared between the loop handle and the callbacks the host holds. Host
/// callbacks only keep a `Weak` to it.
struct Driver<H: Host> {
    host: Rc<H>,
    state: RefCell<DriverState<H::Surface>>,
}

impl<H: Host + 'static> Driver<H> {
    fn run_pass(driver: &Rc<Self>) {
        {
            let Ok(mut state) = driver.state.try_borrow_mut() else {
                log::warn!("frame pass re-entered, skipping");
                return;
            };
            if state.status == LoopState::Stopped {
                return;
            }
            state.pending = None;
            let now = Instant::now();
            if state.timing.should_render(now) {
                state.backdrop.frame(wall_clock_seconds());
                state.timing.end_frame(now);
            }
        }

        let weak = Rc::downgrade(driver);
        let pass: FramePass = Box::new(move || {
            if let Some(driver) = weak.upgrade() {
                Self::run_pass(&driver);
            }
        });
        match driver.host.request_frame(pass) {
            Ok(handle) => driver.state.borrow_mut().pending = Some(handle),
            Err(e) => log::warn!("{e}; showing a static frame"),
        }
    }

    fn with_running(
        weak: &Weak<Self>,
        f: impl FnOnce(&mut Backdrop<H::Surface>),
    ) {
        let Some(driver) = weak.upgrade() else {
            return;
        };
        let Ok(mut state) = driver.state.try_borrow_mut() else {
            log::warn!("resize notification during a pass, ignoring");
            return;
        };
        if state.status != LoopState::Running {
            return;
        }
        f(&mut state.backdrop);
        // Resizing erases the surface. Without a scheduled pass nothing
        // else would repaint it.
        if state.pending.is_none() {
            state.backdrop.redraw(wall_clock_seconds());
        }
    }

    fn viewport_listener(weak: Weak<Self>) -> ResizeListener {
        Box::new(move |viewport: Viewport| {
            Self::with_running(&weak, |b| b.hard_resize(viewport));
        })
    }

    fn content_listener(weak: Weak<Self>) -> ResizeListener {
        Box::new(move |viewport: Viewport| {
            Self::with_running(&weak, |b| {
                b.sync_content_height(viewport.document_height);
            });
        })
    }
}

/// A started engine bound to a host.
///
/// Dropping the loop stops it.
pub struct AnimationLoop<H: Host + 'static> {
    driver: Rc<Driver<H>>,
    subscriptions: Vec<Subscription>,
}

impl<H: Host + 'static> AnimationLoop<H> {
    /// Start an engine on `host`, reading the theme from `theme`.
    ///
    /// Pools are seeded from `options.engine.seed` (OS entropy when unset).
    ///
    /// # Errors
    ///
    /// [`BackdropError::SurfaceUnavailable`] when the host has no drawing
    /// surface; nothing is scheduled or subscribed in that case.
    pub fn start(
        host: Rc<H>,
        theme: ThemeCell,
        options: &Options,
    ) -> Result<Self, BackdropError> {
        let rng = Box::new(seeded_rng(options.engine.seed));
        Self::start_with_rng(host, theme, options, rng)
    }

    /// Like [`Self::start`] with an explicit random source.
    ///
    /// Draws one frame immediately. A missing scheduler degrades to that
    /// single static frame; a missing notification channel keeps the
    /// current surface size.
    ///
    /// # Errors
    ///
    /// [`BackdropError::SurfaceUnavailable`] when the host has no drawing
    /// surface.
    pub fn start_with_rng(
        host: Rc<H>,
        theme: ThemeCell,
        options: &Options,
        rng: Box<dyn UnitSource>,
    ) -> Result<Self, BackdropError> {
        let surface = host.acquire_surface().inspect_err(|e| {
            log::error!("{e}; animated background disabled");
        })?;
        let viewport = host.viewport();
        let backdrop = Backdrop::new(
            surface,
            viewport,
            theme,
            options.pools.clone(),
            rng,
        );
        log::info!(
            "backdrop started: {}x{}, {} stars, {} particles, {} clouds",
            backdrop.canvas().width(),
            backdrop.canvas().height(),
            backdrop.pools().stars.len(),
            backdrop.pools().particles.len(),
            backdrop.pools().clouds.len(),
        );

        let driver = Rc::new(Driver {
            host: Rc::clone(&host),
            state: RefCell::new(DriverState {
                status: LoopState::Running,
                backdrop,
                pending: None,
                timing: FrameTiming::new(options.engine.target_fps),
            }),
        });

        let mut subscriptions = Vec::with_capacity(2);
        let viewport_sub = host
            .on_viewport_change(Driver::viewport_listener(Rc::downgrade(&driver)));
        let content_sub = host
            .on_content_resize(Driver::content_listener(Rc::downgrade(&driver)));
        for sub in [viewport_sub, content_sub] {
            match sub {
                Ok(sub) => subscriptions.push(sub),
                Err(e) => log::warn!("{e}; keeping current surface size"),
            }
        }

        Driver::run_pass(&driver);
        Ok(Self {
            driver,
            subscriptions,
        })
    }

    /// Tear down: cancel the pending pass and deregister both notification
    /// channels. Idempotent.
    pub fn stop(&mut self) {
        let pending = {
            let mut state = self.driver.state.borrow_mut();
            if state.status == LoopState::Stopped {
                return;
            }
            state.status = LoopState::Stopped;
            state.pending.take()
        };
        if let Some(handle) = pending {
            self.driver.host.cancel_frame(handle);
        }
        for sub in self.subscriptions.drain(..) {
            sub.unsubscribe();
        }
        log::info!("backdrop stopped after {} passes", self.passes());
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> LoopState {
        self.driver.state.borrow().status
    }

    /// Whether a next pass is scheduled.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.driver.state.borrow().pending.is_some()
    }

    /// Rendered passes so far.
    #[must_use]
    pub fn passes(&self) -> u64 {
        self.driver.state.borrow().timing.frames()
    }

    /// Smoothed rendered passes per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.driver.state.borrow().timing.fps()
    }

    /// Number of live notification subscriptions.
    #[must_use]
    pub fn subscriptions(&self) -> usize {
        self.subscriptions.len()
    }

    /// Inspect the engine state.
    pub fn with_backdrop<R>(
        &self,
        f: impl FnOnce(&Backdrop<H::Surface>) -> R,
    ) -> R {
        f(&self.driver.state.borrow().backdrop)
    }
}

impl<H: Host + 'static> Drop for AnimationLoop<H> {
    fn drop(&mut self) {
        self.stop();
    }
}
