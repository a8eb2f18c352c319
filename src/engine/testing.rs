//! In-memory host for loop tests: frames and notifications fire only when
//! the test says so.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::host::{FrameHandle, FramePass, Host, ResizeListener, Subscription};
use crate::canvas::Viewport;
use crate::error::{BackdropError, Channel};
use crate::surface::RecordingSurface;

type Listeners = Rc<RefCell<Vec<(u64, ResizeListener)>>>;

pub(crate) struct ManualHost {
    viewport: Cell<Viewport>,
    has_surface: bool,
    has_scheduler: bool,
    has_notifications: bool,
    next_id: Cell<u64>,
    queue: RefCell<Vec<(FrameHandle, FramePass)>>,
    viewport_listeners: Listeners,
    content_listeners: Listeners,
}

impl ManualHost {
    pub(crate) fn new(viewport: Viewport) -> Self {
        Self {
            viewport: Cell::new(viewport),
            has_surface: true,
            has_scheduler: true,
            has_notifications: true,
            next_id: Cell::new(0),
            queue: RefCell::new(Vec::new()),
            viewport_listeners: Listeners::default(),
            content_listeners: Listeners::default(),
        }
    }

    pub(crate) fn without_surface(mut self) -> Self {
        self.has_surface = false;
        self
    }

    pub(crate) fn without_scheduler(mut self) -> Self {
        self.has_scheduler = false;
        self
    }

    pub(crate) fn without_notifications(mut self) -> Self {
        self.has_notifications = false;
        self
    }

    fn next_id(&self) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }

    /// Run every pass queued before this call; returns how many ran.
    pub(crate) fn advance_frame(&self) -> usize {
        let due = std::mem::take(&mut *self.queue.borrow_mut());
        let ran = due.len();
        for (_, pass) in due {
            pass();
        }
        ran
    }

    pub(crate) fn pending_frames(&self) -> usize {
        self.queue.borrow().len()
    }

    pub(crate) fn listeners(&self) -> usize {
        self.viewport_listeners.borrow().len()
            + self.content_listeners.borrow().len()
    }

    /// Simulate a window resize.
    pub(crate) fn resize_viewport(&self, viewport: Viewport) {
        self.viewport.set(viewport);
        for (_, listener) in self.viewport_listeners.borrow_mut().iter_mut() {
            listener(viewport);
        }
    }

    /// Simulate document content growing to `document_height`.
    pub(crate) fn grow_content(&self, document_height: u32) {
        let viewport = Viewport {
            document_height,
            ..self.viewport.get()
        };
        self.viewport.set(viewport);
        for (_, listener) in self.content_listeners.borrow_mut().iter_mut() {
            listener(viewport);
        }
    }

    fn subscribe(
        &self,
        listeners: &Listeners,
        channel: Channel,
        listener: ResizeListener,
    ) -> Result<Subscription, BackdropError> {
        if !self.has_notifications {
            return Err(BackdropError::NotificationUnavailable {
                channel,
                reason: "disabled in test host".to_owned(),
            });
        }
        let id = self.next_id();
        listeners.borrow_mut().push((id, listener));
        let registry = Rc::downgrade(listeners);
        Ok(Subscription::new(move || {
            if let Some(registry) = registry.upgrade() {
                registry.borrow_mut().retain(|(i, _)| *i != id);
            }
        }))
    }
}

impl Host for ManualHost {
    type Surface = RecordingSurface;

    fn acquire_surface(&self) -> Result<RecordingSurface, BackdropError> {
        if self.has_surface {
            Ok(RecordingSurface::new())
        } else {
            Err(BackdropError::SurfaceUnavailable(
                "no 2d context in test host".to_owned(),
            ))
        }
    }

    fn viewport(&self) -> Viewport {
        self.viewport.get()
    }

    fn request_frame(
        &self,
        pass: FramePass,
    ) -> Result<FrameHandle, BackdropError> {
        if !self.has_scheduler {
            return Err(BackdropError::SchedulerUnavailable(
                "disabled in test host".to_owned(),
            ));
        }
        let handle = FrameHandle(self.next_id());
        self.queue.borrow_mut().push((handle, pass));
        Ok(handle)
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        self.queue.borrow_mut().retain(|(h, _)| *h != handle);
    }

    fn on_viewport_change(
        &self,
        listener: ResizeListener,
    ) -> Result<Subscription, BackdropError> {
        self.subscribe(&self.viewport_listeners, Channel::Viewport, listener)
    }

    fn on_content_resize(
        &self,
        listener: ResizeListener,
    ) -> Result<Subscription, BackdropError> {
        self.subscribe(&self.content_listeners, Channel::ContentExtent, listener)
    }
}
