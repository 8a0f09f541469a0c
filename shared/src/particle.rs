use crate::{Color, Entity, Point, Random, Surface, Tick};

/// Life a cursor [`Particle`] is born with.
pub const PARTICLE_LIFE: i32 = 100;
const PARTICLE_DECAY: i32 = 2;
const PARTICLE_SHRINK: f64 = 0.05;
const PARTICLE_MIN_SIZE: f64 = 0.2;
const PARTICLE_GLOW: f64 = 15.0;

/// A glowing mote left behind by the cursor.
#[derive(Debug, Clone)]
pub struct Particle {
    pub position: Point,
    velocity: Point,
    size: f64,
    pub life: i32,
    color: Color,
}

impl Particle {
    /// Spawns a [`Particle`] at `position` drifting in a random direction, tinted with the
    /// accent colour current at the time of the call.
    pub fn new(position: Point, color: Color, rng: &mut Random) -> Particle {
        let size = rng.range(1.0, 4.0);
        let velocity = Point(rng.range(-1.0, 1.0), rng.range(-1.0, 1.0));

        Particle {
            position,
            velocity,
            size,
            life: PARTICLE_LIFE,
            color,
        }
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    /// Opacity falls linearly with the remaining life.
    pub fn opacity(&self) -> f64 {
        self.life as f64 / PARTICLE_LIFE as f64
    }
}

impl Entity for Particle {
    fn tick(&mut self, _: &mut Tick) {
        self.position += self.velocity;
        self.life -= PARTICLE_DECAY;

        if self.size > PARTICLE_MIN_SIZE {
            self.size -= PARTICLE_SHRINK;
        }
    }

    fn is_alive(&self) -> bool {
        self.life > 0
    }

    fn draw<S: Surface>(&self, surface: &S) -> Result<(), S::Error> {
        surface.set_alpha(self.opacity());
        surface.set_shadow(PARTICLE_GLOW, &self.color);
        surface.set_fill(&self.color);
        surface.fill_circle(self.position, self.size)
    }
}
