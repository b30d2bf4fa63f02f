//! Seedable random source threaded through generation, combat, and AI.
//! One stream per campaign keeps whole runs reproducible from a single seed.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    pub fn seed_from(seed: u64) -> Self {
        Self { inner: ChaCha8Rng::seed_from_u64(seed) }
    }

    /// Uniform draw from `lo..=hi`. Returns `lo` when the range is empty.
    pub fn roll(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        let span = (hi - lo + 1) as u64;
        lo + (self.inner.next_u64() % span) as i32
    }

    pub fn coin(&mut self) -> bool {
        self.inner.next_u64() & 1 == 1
    }
}
