//! Seeded jitter source for blip placement.
//!
//! The generator is a sine hash over an incrementing seed. It is cheap and
//! reproducible, and is only meant to scatter markers on a chart.

use rand::Rng;

/// Upper bound (exclusive) of generated default seeds.
pub const DEFAULT_SEED_RANGE: f64 = 1000.0;

#[derive(Debug, Clone, PartialEq)]
pub struct PseudoRand {
    seed: f64,
}

impl PseudoRand {
    pub fn new(seed: f64) -> Self {
        Self { seed }
    }

    /// Current internal state; the next call to [`PseudoRand::next`] hashes this value.
    pub fn seed(&self) -> f64 {
        self.seed
    }

    /// Next value in `[0, 1)`.
    pub fn next(&mut self) -> f64 {
        let x = self.seed.sin() * 10000.0;
        self.seed += 1.0;
        x - x.floor()
    }

    pub fn between(&mut self, min: f64, max: f64) -> f64 {
        min + self.next() * (max - min)
    }
}

/// Supplies the seed used when the style does not pin one.
pub trait SeedSource {
    fn next_seed(&mut self) -> f64;
}

impl<F> SeedSource for F
where
    F: FnMut() -> f64,
{
    fn next_seed(&mut self) -> f64 {
        self()
    }
}

/// Always yields the same seed.
#[derive(Debug, Clone, Copy)]
pub struct FixedSeed(pub f64);

impl SeedSource for FixedSeed {
    fn next_seed(&mut self) -> f64 {
        self.0
    }
}

/// Seeds drawn from the thread-local generator in `[0, DEFAULT_SEED_RANGE)`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomSeed;

impl SeedSource for RandomSeed {
    fn next_seed(&mut self) -> f64 {
        rand::rng().random_range(0.0..DEFAULT_SEED_RANGE)
    }
}
