use crate::{Bounds, Color, Entity, Point, Random, Surface, Tick};

/// A speck drifting down through the water. It never dies; leaving the surface brings it
/// back on the opposite edge.
#[derive(Debug, Clone)]
pub struct FlowParticle {
    pub position: Point,
    velocity: Point,
    size: f64,
    opacity: f64,
}

impl FlowParticle {
    pub fn new(position: Point, velocity: Point, size: f64, opacity: f64) -> FlowParticle {
        FlowParticle {
            position,
            velocity,
            size,
            opacity,
        }
    }

    /// Places a [`FlowParticle`] anywhere inside `bounds` with a slow downward drift.
    pub fn scatter(bounds: Bounds, rng: &mut Random) -> FlowParticle {
        FlowParticle {
            position: Point(rng.range(0.0, bounds.width), rng.range(0.0, bounds.height)),
            size: rng.range(1.0, 3.0),
            velocity: Point(rng.range(-0.25, 0.25), rng.range(0.2, 0.5)),
            opacity: rng.range(0.1, 0.4),
        }
    }
}

impl Entity for FlowParticle {
    fn tick(&mut self, tick: &mut Tick) {
        let Bounds { width, height } = tick.bounds;

        self.position += self.velocity;

        if self.position.1 > height {
            self.position.1 = 0.0;
            self.position.0 = tick.rng.range(0.0, width);
        }

        if self.position.0 < 0.0 {
            self.position.0 = width;
        }

        if self.position.0 > width {
            self.position.0 = 0.0;
        }
    }

    fn is_alive(&self) -> bool {
        true
    }

    fn draw<S: Surface>(&self, surface: &S) -> Result<(), S::Error> {
        surface.set_fill(&Color::Rgba(150, 220, 255, self.opacity));
        surface.fill_circle(self.position, self.size)
    }
}
