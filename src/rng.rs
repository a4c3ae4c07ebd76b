//! Randomness boundary for mine placement.
//!
//! Uses the `rand` crate with `SmallRng` (xoshiro256++) which is fast and
//! works with WASM. Entropy is sourced from `getrandom` (browser crypto API).

use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};

/// Source of the per-tile mine draws.
///
/// The board only relies on each call being an independent Bernoulli(`p`)
/// sample with `p` already validated to lie in `[0, 1]`.
pub trait RandomSource {
    fn bernoulli(&mut self, p: f64) -> bool;
}

impl<R: Rng + ?Sized> RandomSource for R {
    #[inline]
    fn bernoulli(&mut self, p: f64) -> bool {
        self.random_bool(p)
    }
}

/// A seedable RNG for board generation.
///
/// Can be seeded for deterministic replay, or created from system entropy.
#[derive(Debug, Clone)]
pub struct BoardRng {
    inner: SmallRng,
}

impl BoardRng {
    /// Create from system entropy (browser crypto.getRandomValues or OS).
    pub fn new() -> Self {
        Self {
            inner: SmallRng::from_os_rng(),
        }
    }

    /// Create with a specific seed for deterministic behavior.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for BoardRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for BoardRng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.inner.fill_bytes(dst)
    }
}
