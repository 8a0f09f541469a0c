use crate::{Color, Entity, Point, Surface, Tick};

pub const RIPPLE_MAX_RADIUS: f64 = 80.0;
pub const RIPPLE_SPEED: f64 = 1.5;

/// An expanding ring on the water, fading as it grows.
#[derive(Debug, Clone)]
pub struct Ripple {
    pub center: Point,
    pub radius: f64,
    max_radius: f64,
    speed: f64,
}

impl Ripple {
    pub fn new(center: Point) -> Ripple {
        Ripple {
            center,
            radius: 0.0,
            max_radius: RIPPLE_MAX_RADIUS,
            speed: RIPPLE_SPEED,
        }
    }

    pub fn opacity(&self) -> f64 {
        1.0 - self.radius / self.max_radius
    }
}

impl Entity for Ripple {
    fn tick(&mut self, _: &mut Tick) {
        self.radius += self.speed;
    }

    fn is_alive(&self) -> bool {
        self.radius < self.max_radius
    }

    fn draw<S: Surface>(&self, surface: &S) -> Result<(), S::Error> {
        let opacity = self.opacity();

        surface.set_stroke(&Color::Rgba(2, 88, 164, opacity * 0.3), 1.5);
        surface.stroke_circle(self.center, self.radius)?;

        // inner echo
        surface.set_stroke(&Color::Rgba(4, 70, 145, opacity * 0.15), 1.0);
        surface.stroke_circle(self.center, self.radius * 0.7)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Bounds, Random};

    #[test]
    fn grows_until_removed_on_fifty_fourth_step() {
        let mut rng = Random::seeded(0);
        let mut ripple = Ripple::new(Point(10.0, 10.0));
        let mut previous = ripple.radius;

        for step in 1..=54 {
            ripple.tick(&mut Tick::new(Bounds::default(), &mut rng));

            assert!(ripple.radius > previous);
            assert_eq!(ripple.is_alive(), step < 54, "step {step}");
            previous = ripple.radius;
        }

        assert!(ripple.opacity() <= 0.0);
    }

    #[test]
    fn opacity_fades_with_radius() {
        let mut ripple = Ripple::new(Point(0.0, 0.0));
        assert_eq!(ripple.opacity(), 1.0);

        ripple.radius = 40.0;
        assert_eq!(ripple.opacity(), 0.5);
    }
}
