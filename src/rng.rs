//! Deterministic RNG adapter.
//!
//! Grounded in `kimberlite-sim`'s `adapters::rng` trait boundary: the engine
//! never touches `rand` APIs directly, it goes through this thin wrapper so
//! the only place a non-deterministic source could leak in is here.

use rand::rngs::SmallRng;
use rand::{Rng as _, SeedableRng};

/// Seedable, reproducible random number generator.
///
/// Two `SimRng`s constructed with the same seed produce identical sequences
/// (§5 determinism contract).
#[derive(Clone)]
pub struct SimRng {
    inner: SmallRng,
}

impl SimRng {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: SmallRng::seed_from_u64(seed),
        }
    }

    /// Uniform `f64` in `[0.0, 1.0)`.
    pub fn next_f64(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    /// Uniform `f64` in `[-1.0, 1.0]`.
    pub fn next_signed_unit(&mut self) -> f64 {
        self.inner.gen_range(-1.0..=1.0)
    }

    /// Uniform `usize` in `[0, bound)`.
    ///
    /// # Panics
    ///
    /// Panics if `bound == 0`.
    pub fn next_usize(&mut self, bound: usize) -> usize {
        self.inner.gen_range(0..bound)
    }

    /// Draws an exponential random variable with the given rate (in the
    /// same units as the desired output — callers convert units).
    ///
    /// Uses inverse-CDF sampling (`-ln(1 - U) / rate`) rather than pulling
    /// in `rand_distr`, matching the size of this kernel's dependency
    /// footprint.
    pub fn next_exponential(&mut self, rate: f64) -> f64 {
        debug_assert!(rate > 0.0, "exponential rate must be positive");
        // 1.0 - next_f64() keeps the argument to ln() in (0, 1], avoiding
        // the ln(0) that next_f64()'s inclusive-zero range could produce.
        let u = 1.0 - self.next_f64();
        -u.ln() / rate
    }
}
