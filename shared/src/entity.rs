use crate::{Bounds, Random, Surface};

/// Step length handed to entities that integrate over time.
pub const FIXED_DELTA: f64 = 0.016;

/// Inputs shared by every entity advanced in the same step.
pub struct Tick<'a> {
    /// Simulated seconds per step. Entities that move a fixed amount per step ignore it.
    pub delta: f64,
    pub bounds: Bounds,
    pub rng: &'a mut Random,
}

impl<'a> Tick<'a> {
    pub fn new(bounds: Bounds, rng: &'a mut Random) -> Tick<'a> {
        Tick {
            delta: FIXED_DELTA,
            bounds,
            rng,
        }
    }
}

/// Anything simulated by a [`crate::Swarm`]: advanced once per step, dropped once no longer
/// alive, and drawn while it is.
pub trait Entity {
    fn tick(&mut self, tick: &mut Tick);

    fn is_alive(&self) -> bool;

    fn draw<S: Surface>(&self, surface: &S) -> Result<(), S::Error>;
}
