use crate::{Color, Entity, Point, Random, Surface, Tick};

/// Seconds a [`Spark`] burns for.
pub const SPARK_LIFE: f64 = 1.5;
const SPARK_GRAVITY: f64 = 0.2;
const SPARK_SPEED: f64 = 6.0;
const SPARK_RADIUS: f64 = 5.0;

/// A single ember of a [`Firework`].
#[derive(Debug, Clone)]
pub struct Spark {
    pub position: Point,
    velocity: Point,
    pub life: f64,
    color: Color,
}

impl Spark {
    fn tick(&mut self, delta: f64) {
        self.position += self.velocity;
        self.velocity.1 += SPARK_GRAVITY;
        self.life -= delta;
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }
}

/// A burst of [`Spark`]s sharing an origin, alive while any of them still burns.
#[derive(Debug, Clone)]
pub struct Firework {
    sparks: Vec<Spark>,
}

impl Firework {
    /// A golden burst.
    pub fn new(origin: Point, count: usize, rng: &mut Random) -> Firework {
        Firework::burst(origin, count, rng, |rng| {
            Color::Hsl(rng.range(30.0, 90.0), 100.0, 50.0)
        })
    }

    /// A white-to-silver burst, used by the orb flash.
    pub fn flash(origin: Point, count: usize, rng: &mut Random) -> Firework {
        Firework::burst(origin, count, rng, |rng| {
            Color::Hsl(0.0, 0.0, rng.range(70.0, 100.0))
        })
    }

    fn burst(
        origin: Point,
        count: usize,
        rng: &mut Random,
        mut color: impl FnMut(&mut Random) -> Color,
    ) -> Firework {
        let sparks = (0..count)
            .map(|_| Spark {
                position: origin,
                velocity: Point(
                    rng.range(-SPARK_SPEED, SPARK_SPEED),
                    rng.range(-SPARK_SPEED, SPARK_SPEED),
                ),
                life: SPARK_LIFE,
                color: color(rng),
            })
            .collect();

        Firework { sparks }
    }

    pub fn sparks(&self) -> &[Spark] {
        &self.sparks
    }
}

impl Entity for Firework {
    fn tick(&mut self, tick: &mut Tick) {
        for spark in self.sparks.iter_mut() {
            spark.tick(tick.delta);
        }
    }

    fn is_alive(&self) -> bool {
        self.sparks.iter().any(Spark::is_alive)
    }

    fn draw<S: Surface>(&self, surface: &S) -> Result<(), S::Error> {
        for spark in self.sparks.iter().filter(|spark| spark.is_alive()) {
            surface.set_alpha(spark.life / SPARK_LIFE);
            surface.set_fill(&spark.color);
            surface.fill_circle(spark.position, SPARK_RADIUS)?;
        }

        surface.set_alpha(1.0);

        Ok(())
    }
}
