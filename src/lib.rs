macro_rules! console_log {
    ($($t:tt)*) => (web_sys::console::log_1(&format!($($t)*).into()))
}

macro_rules! console_debug {
    ($($t:tt)*) => (web_sys::console::debug_1(&format!($($t)*).into()))
}

mod app;
mod callbacks;
mod draw;
mod frames;

use app::App;
use shared::Settings;
use wasm_bindgen::{convert::FromWasmAbi, prelude::*, JsCast};

#[cfg(not(feature = "deploy"))]
pub const IMAGE_BASE_URL: &str = "./public/images";
#[cfg(feature = "deploy")]
pub const IMAGE_BASE_URL: &str = "/cosmogonia/public/images";

/// Errors raised while setting the page up, outside of DOM calls.
#[derive(Debug)]
pub struct PageError(String);

impl From<serde_json::Error> for PageError {
    fn from(error: serde_json::Error) -> Self {
        PageError(format!("invalid settings: {error}"))
    }
}

impl From<PageError> for JsValue {
    fn from(error: PageError) -> Self {
        JsValue::from_str(&error.0)
    }
}

fn window() -> web_sys::Window {
    web_sys::window().expect("no global `window` exists")
}

fn document() -> web_sys::Document {
    window()
        .document()
        .expect("should have a document on window")
}

fn request_animation_frame(f: &Closure<dyn FnMut(f64)>) {
    window()
        .request_animation_frame(f.as_ref().unchecked_ref())
        .expect("should register `requestAnimationFrame` OK");
}

/// Milliseconds on the page's monotonic clock.
fn now() -> f64 {
    window()
        .performance()
        .map(|performance| performance.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// Registers `handler` for `kind` events on `target` for the lifetime of the page.
fn listen<E, F>(target: &web_sys::EventTarget, kind: &str, handler: F) -> Result<(), JsValue>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::<dyn FnMut(E)>::new(handler);
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    closure.forget();

    Ok(())
}

/// Reads overrides from `<script type="application/json" id="cosmogonia-settings">`.
fn load_settings() -> Result<Settings, PageError> {
    let json = document()
        .get_element_by_id("cosmogonia-settings")
        .and_then(|element| element.text_content());

    match json {
        Some(json) => Ok(Settings::from_json(&json)?),
        None => Ok(Settings::default()),
    }
}

#[wasm_bindgen(start)]
fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let settings = load_settings().unwrap_or_else(|error| {
        console_log!("{}; falling back to defaults", error.0);
        Settings::default()
    });

    App::new(settings).mount()?;

    console_log!("cosmogonía: effects mounted");

    Ok(())
}
