use std::f64::consts::TAU;

use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::warn_on_err;
use crate::error::BackdropError;
use crate::surface::{DrawSurface, Rgba, Stroke};

/// [`DrawSurface`] over an HTML canvas 2D context.
pub struct Canvas2d {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Canvas2d {
    /// Acquire the 2D context of `canvas`.
    ///
    /// # Errors
    ///
    /// [`BackdropError::SurfaceUnavailable`] when the element has no 2D
    /// context (unsupported, or already bound to another context type).
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, BackdropError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| BackdropError::SurfaceUnavailable(format!("{e:?}")))?
            .ok_or_else(|| {
                BackdropError::SurfaceUnavailable("no 2d context".to_owned())
            })?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| {
                BackdropError::SurfaceUnavailable("not a 2d context".to_owned())
            })?;
        Ok(Self { canvas, ctx })
    }

    fn fill(&self, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill();
    }
}

impl DrawSurface for Canvas2d {
    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn clear(&mut self, width: f32, height: f32) {
        self.ctx
            .clear_rect(0.0, 0.0, f64::from(width), f64::from(height));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ctx.begin_path();
        let arc = self.ctx.arc(
            f64::from(center.x),
            f64::from(center.y),
            f64::from(radius),
            0.0,
            TAU,
        );
        if arc.is_ok() {
            self.fill(color);
        }
    }

    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, color: Rgba) {
        self.ctx.begin_path();
        let ellipse = self.ctx.ellipse(
            f64::from(center.x),
            f64::from(center.y),
            f64::from(radii.x),
            f64::from(radii.y),
            0.0,
            0.0,
            TAU,
        );
        if ellipse.is_ok() {
            self.fill(color);
        }
    }

    fn dashed_line(&mut self, from: Vec2, to: Vec2, stroke: Stroke) {
        let dash = js_sys::Array::of2(
            &JsValue::from(f64::from(stroke.dash[0])),
            &JsValue::from(f64::from(stroke.dash[1])),
        );
        let _ = warn_on_err("setLineDash", self.ctx.set_line_dash(&dash));
        self.ctx.set_stroke_style_str(&stroke.color.to_css());
        self.ctx.set_line_width(f64::from(stroke.width));

        self.ctx.begin_path();
        self.ctx.move_to(f64::from(from.x), f64::from(from.y));
        self.ctx.line_to(f64::from(to.x), f64::from(to.y));
        self.ctx.stroke();

        let _ = warn_on_err(
            "setLineDash reset",
            self.ctx.set_line_dash(&js_sys::Array::new()),
        );
    }
}
