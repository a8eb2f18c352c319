use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlCanvasElement, ResizeObserver, Window};

use super::canvas_2d::Canvas2d;
use super::warn_on_err;
use crate::canvas::Viewport;
use crate::engine::{FrameHandle, FramePass, Host, ResizeListener, Subscription};
use crate::error::{BackdropError, Channel};

/// [`Host`] backed by the browser window.
///
/// - frames: `requestAnimationFrame` / `cancelAnimationFrame`
/// - viewport changes: the window `resize` event
/// - content extent changes: a `ResizeObserver` on `document.body`
pub struct BrowserHost {
    window: Window,
    canvas: HtmlCanvasElement,
}

impl BrowserHost {
    /// Host for `canvas` in the current window.
    ///
    /// # Errors
    ///
    /// [`BackdropError::SurfaceUnavailable`] outside a browser window.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, BackdropError> {
        let window = web_sys::window().ok_or_else(|| {
            BackdropError::SurfaceUnavailable("no window".to_owned())
        })?;
        Ok(Self { window, canvas })
    }
}

fn js_error(e: &JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{e:?}"))
}

fn pixels(value: Result<JsValue, JsValue>) -> u32 {
    value
        .ok()
        .and_then(|v| v.as_f64())
        .map_or(0, |px| px.max(0.0) as u32)
}

/// Viewport size plus the full scrollable document height.
fn metrics(window: &Window) -> Viewport {
    let width = pixels(window.inner_width());
    let height = pixels(window.inner_height());
    let document_height = window
        .document()
        .and_then(|d| d.document_element())
        .map_or(height, |root| root.scroll_height().max(0) as u32);
    Viewport {
        width,
        height,
        document_height,
    }
}

impl Host for BrowserHost {
    type Surface = Canvas2d;

    fn acquire_surface(&self) -> Result<Canvas2d, BackdropError> {
        Canvas2d::new(self.canvas.clone())
    }

    fn viewport(&self) -> Viewport {
        metrics(&self.window)
    }

    fn request_frame(
        &self,
        pass: FramePass,
    ) -> Result<FrameHandle, BackdropError> {
        // Freed by wasm-bindgen after it runs. A cancelled pass is never
        // freed; that happens once per teardown.
        let callback = Closure::once_into_js(pass);
        let id = self
            .window
            .request_animation_frame(callback.unchecked_ref())
            .map_err(|e| BackdropError::SchedulerUnavailable(js_error(&e)))?;
        Ok(FrameHandle(id as u64))
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        let _ = warn_on_err(
            "cancelAnimationFrame",
            self.window.cancel_animation_frame(handle.0 as i32),
        );
    }

    fn on_viewport_change(
        &self,
        mut listener: ResizeListener,
    ) -> Result<Subscription, BackdropError> {
        let window = self.window.clone();
        let closure = Closure::<dyn FnMut()>::new(move || {
            listener(metrics(&window));
        });
        self.window
            .add_event_listener_with_callback(
                "resize",
                closure.as_ref().unchecked_ref(),
            )
            .map_err(|e| BackdropError::NotificationUnavailable {
                channel: Channel::Viewport,
                reason: js_error(&e),
            })?;

        let target = self.window.clone();
        Ok(Subscription::new(move || {
            let _ = warn_on_err(
                "removeEventListener(resize)",
                target.remove_event_listener_with_callback(
                    "resize",
                    closure.as_ref().unchecked_ref(),
                ),
            );
            drop(closure);
        }))
    }

    fn on_content_resize(
        &self,
        mut listener: ResizeListener,
    ) -> Result<Subscription, BackdropError> {
        let unavailable = |reason: String| BackdropError::NotificationUnavailable {
            channel: Channel::ContentExtent,
            reason,
        };
        let body = self
            .window
            .document()
            .and_then(|d| d.body())
            .ok_or_else(|| unavailable("no document body".to_owned()))?;

        let window = self.window.clone();
        let closure = Closure::<dyn FnMut()>::new(move || {
            listener(metrics(&window));
        });
        let observer = ResizeObserver::new(closure.as_ref().unchecked_ref())
            .map_err(|e| unavailable(js_error(&e)))?;
        observer.observe(&body);

        Ok(Subscription::new(move || {
            observer.disconnect();
            drop(closure);
        }))
    }
}
