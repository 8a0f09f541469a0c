use crate::{Bounds, Color, Point};

/// A 2D drawing target, implemented by the page for its canvas layers.
///
/// State setters mirror the canvas model: they affect every shape drawn after them until
/// changed again.
pub trait Surface {
    type Error;

    fn clear(&self, bounds: Bounds);

    fn set_alpha(&self, alpha: f64);

    fn set_fill(&self, color: &Color);

    fn set_stroke(&self, color: &Color, width: f64);

    /// A `blur` of zero disables the shadow.
    fn set_shadow(&self, blur: f64, color: &Color);

    fn fill_circle(&self, center: Point, radius: f64) -> Result<(), Self::Error>;

    fn stroke_circle(&self, center: Point, radius: f64) -> Result<(), Self::Error>;

    /// Strokes one open path through `points` with round caps and joins.
    fn stroke_polyline<'a, I>(&self, points: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = &'a Point>;
}
