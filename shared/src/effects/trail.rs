use crate::{
    Bounds, Color, Firework, Flash, Particle, Point, Random, Settings, Surface, Swarm, Tick,
};

/// The full-page layer of cursor light trails and orb fireworks.
pub struct LightTrails {
    particles: Swarm<Particle>,
    fireworks: Swarm<Firework>,
    bounds: Bounds,
    rng: Random,
    emit: usize,
    burst: usize,
    sparks: usize,
    flash_hold_ms: f64,
    flash_fade_ms: f64,
}

impl LightTrails {
    pub fn new(bounds: Bounds, settings: &Settings, rng: Random) -> LightTrails {
        LightTrails {
            particles: Swarm::with_capacity(settings.trail_capacity),
            fireworks: Swarm::with_capacity(settings.firework_capacity),
            bounds,
            rng,
            emit: settings.trail_emit,
            burst: settings.burst_fireworks,
            sparks: settings.sparks_per_firework,
            flash_hold_ms: settings.flash_hold_ms,
            flash_fade_ms: settings.flash_fade_ms,
        }
    }

    /// Leaves a handful of particles at the pointer, tinted with the current `accent`.
    pub fn on_pointer_move(&mut self, location: Point, accent: &Color) {
        for _ in 0..self.emit {
            let particle = Particle::new(location, accent.clone(), &mut self.rng);
            self.particles.emit(particle);
        }
    }

    /// Bursts white fireworks from `center` and returns the [`Flash`] that goes with them,
    /// started at `now_ms`.
    pub fn burst(&mut self, center: Point, now_ms: f64) -> Flash {
        for _ in 0..self.burst {
            let firework = Firework::flash(center, self.sparks, &mut self.rng);
            self.fireworks.emit(firework);
        }

        Flash::new(now_ms, self.flash_hold_ms, self.flash_fade_ms)
    }

    pub fn resize(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    pub fn step(&mut self) {
        let mut tick = Tick::new(self.bounds, &mut self.rng);

        self.fireworks.step(&mut tick);
        self.particles.step(&mut tick);
    }

    pub fn draw<S: Surface>(&self, surface: &S) -> Result<(), S::Error> {
        surface.clear(self.bounds);

        self.fireworks.draw(surface)?;
        self.particles.draw(surface)
    }

    pub fn particles(&self) -> &Swarm<Particle> {
        &self.particles
    }

    pub fn fireworks(&self) -> &Swarm<Firework> {
        &self.fireworks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::recorder::{Op, Recorder};

    fn trails() -> LightTrails {
        LightTrails::new(Bounds::new(800.0, 600.0), &Settings::default(), Random::seeded(1))
    }

    #[test]
    fn each_move_leaves_three_particles() {
        let mut trails = trails();

        trails.on_pointer_move(Point(10.0, 20.0), &Color::default());

        assert_eq!(trails.particles().len(), 3);
        assert!(trails.particles().iter().all(|p| p.position == Point(10.0, 20.0)));
    }

    #[test]
    fn capacity_bounds_pathological_input() {
        let settings = Settings {
            trail_capacity: 30,
            ..Settings::default()
        };
        let mut trails = LightTrails::new(Bounds::new(800.0, 600.0), &settings, Random::seeded(1));

        for i in 0..1000 {
            trails.on_pointer_move(Point(i as f64, 0.0), &Color::default());
        }

        assert_eq!(trails.particles().len(), 30);
        assert_eq!(trails.particles().iter().last().unwrap().position, Point(999.0, 0.0));
    }

    #[test]
    fn burst_spawns_eight_white_fireworks() {
        let mut trails = trails();

        let flash = trails.burst(Point(0.0, 0.0), 500.0);

        assert_eq!(flash, Flash::new(500.0, 50.0, 1500.0));
        assert_eq!(trails.fireworks().len(), 8);
        assert!(trails.fireworks().iter().all(|f| f.sparks().len() == 50));
    }

    #[test]
    fn draw_clears_first_then_fireworks_under_particles() {
        let mut trails = trails();
        trails.burst(Point(100.0, 100.0), 0.0);
        trails.on_pointer_move(Point(1.0, 1.0), &Color::default());

        let recorder = Recorder::default();
        trails.draw(&recorder).unwrap();

        let ops = recorder.ops.borrow();
        assert_eq!(ops[0], Op::Clear);
        assert_eq!(recorder.count(|op| matches!(op, Op::FillCircle(_, r) if *r == 5.0)), 400);
        assert_eq!(recorder.count(|op| matches!(op, Op::FillCircle(_, _))), 403);
        assert!(matches!(ops.last(), Some(Op::FillCircle(Point(x, _), _)) if *x == 1.0));
    }
}
