use crate::{Bounds, Color, Point, Surface};

pub const BLOB_COUNT: usize = 8;

/// A faint circle of light wandering behind the water, positioned purely by the clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Blob {
    pub center: Point,
    pub radius: f64,
}

impl Blob {
    /// Where blob `index` sits at `now_ms`.
    pub fn at(index: usize, now_ms: f64, bounds: Bounds) -> Blob {
        let t = now_ms * 0.0005;
        let i = index as f64;

        Blob {
            center: Point(
                ((t + i * 0.8).sin() * 0.5 + 0.5) * bounds.width,
                ((t * 0.5 + i * 0.6).cos() * 0.5 + 0.5) * bounds.height,
            ),
            radius: 40.0 + (t * 2.0 + i * 2.0).sin() * 15.0,
        }
    }

    pub fn draw<S: Surface>(&self, surface: &S) -> Result<(), S::Error> {
        surface.set_fill(&Color::Rgba(100, 200, 255, 0.03));
        surface.fill_circle(self.center, self.radius)
    }
}

/// All blobs at `now_ms`.
pub fn blobs(now_ms: f64, bounds: Bounds) -> impl Iterator<Item = Blob> {
    (0..BLOB_COUNT).map(move |index| Blob::at(index, now_ms, bounds))
}
