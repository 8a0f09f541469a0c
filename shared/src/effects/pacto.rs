use crate::{Bounds, Color, Point, Settings, Snake, Surface};

/// Two snakes in the pacto section, one the mirror image of the other, both chasing the
/// pointer while it is over the section.
pub struct Pacto {
    snake: Snake,
    mirror: Snake,
    target: Point,
    hovering: bool,
    bounds: Bounds,
}

impl Pacto {
    pub fn new(bounds: Bounds, settings: &Settings) -> Pacto {
        let center = bounds.center();

        Pacto {
            snake: Snake::new(center, settings.snake_length, false),
            mirror: Snake::new(center, settings.snake_length, true),
            target: center,
            hovering: false,
            bounds,
        }
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    /// Retargets the snakes; ignored while the pointer is elsewhere.
    pub fn on_pointer_move(&mut self, location: Point) {
        if self.hovering {
            self.target = location;
        }
    }

    pub fn resize(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    pub fn step(&mut self) {
        self.snake.follow(self.target, self.bounds.width);
        self.mirror.follow(self.target, self.bounds.width);
    }

    pub fn draw<S: Surface>(&self, surface: &S, accent: &Color) -> Result<(), S::Error> {
        surface.clear(self.bounds);

        self.snake.draw(surface, accent)?;
        self.mirror.draw(surface, accent)
    }

    pub fn target(&self) -> Point {
        self.target
    }

    pub fn snakes(&self) -> (&Snake, &Snake) {
        (&self.snake, &self.mirror)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snakes_start_coiled_at_centre() {
        let pacto = Pacto::new(Bounds::new(800.0, 600.0), &Settings::default());
        let (snake, mirror) = pacto.snakes();

        assert_eq!(pacto.target(), Point(400.0, 300.0));
        assert_eq!(snake.len(), 30);
        assert_eq!(mirror.head(), Point(400.0, 300.0));
    }

    #[test]
    fn target_follows_pointer_only_while_hovering() {
        let mut pacto = Pacto::new(Bounds::new(800.0, 600.0), &Settings::default());

        pacto.on_pointer_move(Point(10.0, 10.0));
        assert_eq!(pacto.target(), Point(400.0, 300.0));

        pacto.set_hovering(true);
        pacto.on_pointer_move(Point(100.0, 50.0));
        pacto.step();

        let (snake, mirror) = pacto.snakes();
        assert_eq!(snake.head(), Point(100.0, 50.0));
        assert_eq!(mirror.head(), Point(700.0, 50.0));
    }

    #[test]
    fn last_target_persists_after_leaving() {
        let mut pacto = Pacto::new(Bounds::new(800.0, 600.0), &Settings::default());
        pacto.set_hovering(true);
        pacto.on_pointer_move(Point(100.0, 50.0));
        pacto.set_hovering(false);
        pacto.on_pointer_move(Point(5.0, 5.0));

        for _ in 0..40 {
            pacto.step();
        }

        let (snake, _) = pacto.snakes();
        assert!(snake.segments().all(|segment| *segment == Point(100.0, 50.0)));
    }
}
