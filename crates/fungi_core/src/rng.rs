//! Uniform random draws consumed by initialization and the transition rule.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A stateful stream of uniform draws in `[0, 1)`.
pub trait UniformSource {
    fn next_uniform(&mut self) -> f64;
}

impl<S: UniformSource + ?Sized> UniformSource for &mut S {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}

impl<S: UniformSource + ?Sized> UniformSource for Box<S> {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}

/// Seeded ChaCha stream. Two sources built from the same seed yield the same draws.
#[derive(Debug, Clone)]
pub struct SeededSource {
    rng: ChaCha8Rng,
    seed: u64,
    draws: u64,
}

impl SeededSource {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
            draws: 0,
        }
    }

    /// Picks a fresh seed from the thread RNG.
    #[must_use]
    pub fn from_random_seed() -> Self {
        Self::new(rand::random())
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draws consumed so far.
    #[must_use]
    pub fn draws(&self) -> u64 {
        self.draws
    }
}

impl UniformSource for SeededSource {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        self.draws += 1;
        self.rng.gen::<f64>()
    }
}

/// Replays a fixed script of draws, cycling once it runs out.
/// An empty script always yields `0.0`.
#[derive(Debug, Clone, Default)]
pub struct ReplaySource {
    script: Vec<f64>,
    consumed: usize,
}

impl ReplaySource {
    pub fn new<I: IntoIterator<Item = f64>>(script: I) -> Self {
        Self {
            script: script.into_iter().collect(),
            consumed: 0,
        }
    }

    /// Always yields `draw`.
    #[must_use]
    pub fn constant(draw: f64) -> Self {
        Self::new([draw])
    }

    /// Draws consumed so far, including wrapped-around ones.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.consumed
    }
}

impl UniformSource for ReplaySource {
    fn next_uniform(&mut self) -> f64 {
        let draw = if self.script.is_empty() {
            0.0
        } else {
            self.script[self.consumed % self.script.len()]
        };
        self.consumed += 1;
        draw
    }
}
