//! `wasm-bindgen` bindings for browser hosts.
//!
//! The page owns the WebGL scene and the DOM listeners; it forwards
//! `pointerdown`/`pointermove`/`pointerup`/`pointerleave` and each
//! `requestAnimationFrame` to a [`WebCarousel`] and applies the returned yaw
//! to its carousel group.

use js_sys::Function;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsValue;

use crate::carousel::{Carousel, FocusEvent};
use crate::catalog::ModelCatalog;
use crate::input::{PointerEvent, PointerId};
use crate::options::Options;
use crate::util::frame::Frame;

/// Install the panic hook and route `log` output to the browser console.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::warn!("console logger already installed");
    }
}

fn to_js(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn event_json(event: &FocusEvent) -> Option<String> {
    match serde_json::to_string(event) {
        Ok(json) => Some(json),
        Err(e) => {
            log::warn!("failed to encode focus event: {e}");
            None
        }
    }
}

/// Browser-facing carousel handle.
#[wasm_bindgen]
pub struct WebCarousel {
    inner: Carousel,
}

#[wasm_bindgen]
impl WebCarousel {
    /// Mount a carousel. Both arguments are optional TOML documents; the
    /// built-in portfolio catalog and default options are used when absent.
    #[wasm_bindgen(constructor)]
    pub fn new(
        catalog_toml: Option<String>,
        options_toml: Option<String>,
    ) -> Result<WebCarousel, JsValue> {
        let catalog = match catalog_toml {
            Some(toml) => ModelCatalog::from_toml(&toml).map_err(to_js)?,
            None => ModelCatalog::portfolio(),
        };
        let options = match options_toml {
            Some(toml) => Options::from_toml(&toml).map_err(to_js)?,
            None => Options::default(),
        };
        Ok(Self {
            inner: Carousel::new(catalog, options),
        })
    }

    /// Forward a `pointerdown` event.
    pub fn pointer_down(&mut self, pointer_id: i32, x: f32, y: f32, time_ms: f64) {
        self.inner
            .handle_pointer(PointerEvent::down(PointerId(pointer_id), x, y, time_ms));
    }

    /// Forward a `pointermove` event.
    pub fn pointer_move(&mut self, pointer_id: i32, x: f32, y: f32, time_ms: f64) {
        self.inner
            .handle_pointer(PointerEvent::moved(PointerId(pointer_id), x, y, time_ms));
    }

    /// Forward a `pointerup` event.
    pub fn pointer_up(&mut self, pointer_id: i32, x: f32, y: f32, time_ms: f64) {
        self.inner
            .handle_pointer(PointerEvent::up(PointerId(pointer_id), x, y, time_ms));
    }

    /// Forward a `pointerleave` event.
    pub fn pointer_leave(&mut self, pointer_id: i32, x: f32, y: f32, time_ms: f64) {
        self.inner
            .handle_pointer(PointerEvent::leave(PointerId(pointer_id), x, y, time_ms));
    }

    /// Advance one animation frame. Returns the committed focus change as
    /// JSON (`{ description, identity, index }`), if any.
    pub fn tick(&mut self, now_ms: f64, delta_secs: f32) -> Option<String> {
        self.inner
            .tick(Frame::at(now_ms, delta_secs))
            .as_ref()
            .and_then(event_json)
    }

    /// Register `callback(eventJson, index)` for focus changes.
    pub fn set_focus_callback(&mut self, callback: Function) {
        self.inner.set_focus_listener(move |event| {
            let Some(json) = event_json(event) else {
                return;
            };
            let index = event
                .index
                .map_or(JsValue::NULL, |i| JsValue::from_f64(i as f64));
            if let Err(e) =
                callback.call2(&JsValue::NULL, &JsValue::from_str(&json), &index)
            {
                log::warn!("focus callback threw: {e:?}");
            }
        });
    }

    /// Rotate the following model to the front.
    pub fn next(&mut self) -> Option<u32> {
        self.inner.next().map(|i| i as u32)
    }

    /// Rotate the preceding model to the front.
    pub fn prev(&mut self) -> Option<u32> {
        self.inner.prev().map(|i| i as u32)
    }

    /// Rotate model `index` to the front.
    pub fn rotate_to_index(&mut self, index: u32) -> Option<u32> {
        self.inner.rotate_to_index(index as usize).map(|i| i as u32)
    }

    /// Current group yaw in radians.
    #[must_use]
    pub fn angle(&self) -> f32 {
        self.inner.angle()
    }

    /// Resolved model transforms as JSON.
    pub fn transforms_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.inner.layout()).map_err(to_js)
    }

    /// Backdrop of the focused model as JSON.
    pub fn backdrop_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.inner.backdrop()).map_err(to_js)
    }

    /// Release pointer capture before unmounting. Returns the pointer id
    /// to pass to `releasePointerCapture`, if a drag was in progress.
    pub fn detach(&mut self) -> Option<i32> {
        self.inner.detach().map(|id| id.0)
    }
}
