//! Browser bindings (feature `web`).
//!
//! ```js
//! import init, { WebBackdrop } from "./backdrop.js";
//! await init();
//! const bg = new WebBackdrop(document.querySelector("canvas"));
//! themeButton.onclick = () => bg.toggleTheme();
//! // on unmount
//! bg.dispose();
//! ```

mod browser_host;
mod canvas_2d;

use std::fmt;
use std::rc::Rc;

pub use browser_host::BrowserHost;
pub use canvas_2d::Canvas2d;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsValue;
use web_sys::HtmlCanvasElement;

use crate::engine::AnimationLoop;
use crate::error::BackdropError;
use crate::options::Options;
use crate::theme::{Theme, ThemeCell};

/// Install the panic hook and route `log` to the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("console logger already installed");
    }
}

/// Log a failed browser call that has no caller to report to. Returns
/// whether it failed.
fn warn_on_err<E: fmt::Debug>(call: &str, result: Result<(), E>) -> bool {
    match result {
        Ok(()) => false,
        Err(e) => {
            log::warn!("{call} failed: {e:?}");
            true
        }
    }
}

#[allow(clippy::needless_pass_by_value)]
fn to_js(e: BackdropError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// A running background bound to one canvas element.
#[wasm_bindgen]
pub struct WebBackdrop {
    engine: Option<AnimationLoop<BrowserHost>>,
    theme: ThemeCell,
}

#[wasm_bindgen]
impl WebBackdrop {
    /// Start animating `canvas`. `options_json` may override any
    /// [`Options`] field.
    ///
    /// # Errors
    ///
    /// Rejects when the options do not parse or the canvas has no 2D context.
    #[wasm_bindgen(constructor)]
    #[allow(clippy::needless_pass_by_value)]
    pub fn new(
        canvas: HtmlCanvasElement,
        options_json: Option<String>,
    ) -> Result<WebBackdrop, JsValue> {
        let options = match options_json {
            Some(json) => Options::from_json(&json).map_err(to_js)?,
            None => Options::default(),
        };
        let theme = ThemeCell::new(options.engine.initial_theme);
        let host = Rc::new(BrowserHost::new(canvas).map_err(to_js)?);
        let engine =
            AnimationLoop::start(host, theme.clone(), &options).map_err(to_js)?;
        Ok(Self {
            engine: Some(engine),
            theme,
        })
    }

    /// Select the dark (`true`) or light (`false`) theme.
    #[wasm_bindgen(js_name = setDark)]
    pub fn set_dark(&self, dark: bool) {
        self.theme.set(if dark { Theme::Dark } else { Theme::Light });
    }

    /// Flip the theme; returns whether it is now dark.
    #[wasm_bindgen(js_name = toggleTheme)]
    pub fn toggle_theme(&self) -> bool {
        self.theme.toggle().is_dark()
    }

    /// Whether the dark theme is active.
    #[wasm_bindgen(js_name = isDark)]
    pub fn is_dark(&self) -> bool {
        self.theme.get().is_dark()
    }

    /// Stop animating and release every browser registration.
    pub fn dispose(&mut self) {
        if let Some(mut engine) = self.engine.take() {
            engine.stop();
        }
    }
}
