//! The environment seam: everything the engine needs from its host.

use std::fmt;

use crate::canvas::Viewport;
use crate::error::BackdropError;
use crate::surface::DrawSurface;

/// One scheduled simulate + render pass.
pub type FramePass = Box<dyn FnOnce()>;

/// Callback invoked with fresh metrics on each resize notification.
pub type ResizeListener = Box<dyn FnMut(Viewport)>;

/// Cancellable token for a scheduled pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// A live notification registration. Dropping it unsubscribes.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Registration that runs `cancel` once when unsubscribed or dropped.
    #[must_use]
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Deregister now.
    pub fn unsubscribe(mut self) {
        self.cancel_now();
    }

    fn cancel_now(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

/// Capabilities a host environment provides to the animation loop.
///
/// All callbacks are delivered on the engine's own thread, one at a time.
/// Implementations must never invoke a [`FramePass`] or [`ResizeListener`]
/// synchronously from inside the method that registered it.
pub trait Host {
    /// The drawing surface this host hands out.
    type Surface: DrawSurface;

    /// Acquire the 2D drawing surface.
    ///
    /// # Errors
    ///
    /// [`BackdropError::SurfaceUnavailable`] when no drawing context exists.
    fn acquire_surface(&self) -> Result<Self::Surface, BackdropError>;

    /// Current viewport and document metrics.
    fn viewport(&self) -> Viewport;

    /// Run `pass` on the next display frame.
    ///
    /// # Errors
    ///
    /// [`BackdropError::SchedulerUnavailable`] when the host has no
    /// per-frame callback mechanism.
    fn request_frame(&self, pass: FramePass)
        -> Result<FrameHandle, BackdropError>;

    /// Cancel a pass that has not run yet. Unknown handles are ignored.
    fn cancel_frame(&self, handle: FrameHandle);

    /// Subscribe to viewport size changes.
    ///
    /// # Errors
    ///
    /// [`BackdropError::NotificationUnavailable`] when the source is missing.
    fn on_viewport_change(
        &self,
        listener: ResizeListener,
    ) -> Result<Subscription, BackdropError>;

    /// Subscribe to document content extent changes.
    ///
    /// # Errors
    ///
    /// [`BackdropError::NotificationUnavailable`] when the source is missing.
    fn on_content_resize(
        &self,
        listener: ResizeListener,
    ) -> Result<Subscription, BackdropError>;
}
