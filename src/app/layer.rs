use shared::Bounds;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::{document, window};

/// A full-window canvas drawn by exactly one animation loop.
pub struct Layer {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl Layer {
    /// Looks up the canvas with `id` and sizes it to the window. `None` when the page has no
    /// such canvas or it offers no 2D context.
    pub fn find(id: &str) -> Result<Option<Layer>, JsValue> {
        let Some(element) = document().get_element_by_id(id) else {
            return Ok(None);
        };

        let canvas = element.dyn_into::<HtmlCanvasElement>()?;

        let Some(context) = canvas.get_context("2d")? else {
            return Ok(None);
        };

        let layer = Layer {
            canvas,
            context: context.dyn_into::<CanvasRenderingContext2d>()?,
        };

        layer.fit_window()?;

        Ok(Some(layer))
    }

    /// Resizes the canvas to the window's inner size.
    pub fn fit_window(&self) -> Result<Bounds, JsValue> {
        let width = window().inner_width()?.as_f64().unwrap_or_default();
        let height = window().inner_height()?.as_f64().unwrap_or_default();

        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);

        Ok(self.bounds())
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.canvas.width() as f64, self.canvas.height() as f64)
    }

    pub fn context(&self) -> &CanvasRenderingContext2d {
        &self.context
    }
}
