use rand_chacha::{
    rand_core::{RngCore, SeedableRng},
    ChaCha8Rng,
};

/// The one source of randomness behind every effect.
///
/// Seeded explicitly so that a given seed always replays the same velocities, colours and
/// wrap-around positions.
#[derive(Clone, Debug)]
pub struct Random(ChaCha8Rng);

impl Random {
    pub fn seeded(seed: u64) -> Random {
        Random(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Derives an independent [`Random`] from this one, for handing to another effect.
    pub fn fork(&mut self) -> Random {
        Random::seeded(self.0.next_u64())
    }

    /// Uniform value in `[0, 1)`.
    pub fn unit(&mut self) -> f64 {
        (self.0.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform value in `[low, high)`.
    pub fn range(&mut self, low: f64, high: f64) -> f64 {
        low + self.unit() * (high - low)
    }

    /// Uniform index in `0..len`, or `None` when there is nothing to pick from.
    pub fn index(&mut self, len: usize) -> Option<usize> {
        let last = len.checked_sub(1)?;
        Some(((self.unit() * len as f64) as usize).min(last))
    }
}
