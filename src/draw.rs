use shared::{Bounds, Color, Point, Surface};
use wasm_bindgen::JsValue;

use crate::app::Layer;

impl Surface for Layer {
    type Error = JsValue;

    fn clear(&self, bounds: Bounds) {
        self.context()
            .clear_rect(0.0, 0.0, bounds.width, bounds.height);
    }

    fn set_alpha(&self, alpha: f64) {
        self.context().set_global_alpha(alpha);
    }

    fn set_fill(&self, color: &Color) {
        self.context()
            .set_fill_style(&JsValue::from_str(&color.to_string()));
    }

    fn set_stroke(&self, color: &Color, width: f64) {
        let context = self.context();

        context.set_stroke_style(&JsValue::from_str(&color.to_string()));
        context.set_line_width(width);
    }

    fn set_shadow(&self, blur: f64, color: &Color) {
        let context = self.context();

        context.set_shadow_blur(blur);
        context.set_shadow_color(&color.to_string());
    }

    fn fill_circle(&self, center: Point, radius: f64) -> Result<(), JsValue> {
        let context = self.context();

        context.begin_path();
        context.arc(center.0, center.1, radius, 0.0, std::f64::consts::TAU)?;
        context.fill();

        Ok(())
    }

    fn stroke_circle(&self, center: Point, radius: f64) -> Result<(), JsValue> {
        let context = self.context();

        context.begin_path();
        context.arc(center.0, center.1, radius, 0.0, std::f64::consts::TAU)?;
        context.stroke();

        Ok(())
    }

    fn stroke_polyline<'a, I>(&self, points: I) -> Result<(), JsValue>
    where
        I: IntoIterator<Item = &'a Point>,
    {
        let context = self.context();
        let mut points = points.into_iter();

        context.begin_path();

        if let Some(Point(x, y)) = points.next() {
            context.move_to(*x, *y);
        }

        for Point(x, y) in points {
            context.line_to(*x, *y);
        }

        context.set_line_cap("round");
        context.set_line_join("round");
        context.stroke();

        Ok(())
    }
}
