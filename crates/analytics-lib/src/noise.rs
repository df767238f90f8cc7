//! Injectable noise generation
//!
//! Every stochastic term in the engine draws from a [`NoiseSource`] so tests
//! can seed the generator and get reproducible output.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of bounded uniform noise
pub trait NoiseSource: Send {
    /// Draw a uniform value in `[lo, hi)`
    fn uniform(&mut self, lo: f64, hi: f64) -> f64;
}

/// Default noise source backed by a standard PRNG
pub struct SystemNoise {
    rng: StdRng,
}

impl SystemNoise {
    /// Entropy-seeded source for production use
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministically seeded source for reproducible runs
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for SystemNoise {
    fn default() -> Self {
        Self::new()
    }
}

impl NoiseSource for SystemNoise {
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        self.rng.gen_range(lo..hi)
    }
}

/// Noise source that always returns zero, for exact-value tests
pub struct ZeroNoise;

impl NoiseSource for ZeroNoise {
    fn uniform(&mut self, _lo: f64, _hi: f64) -> f64 {
        0.0
    }
}
