//! Seedable xorshift128 random source
//!
//! Reproducible across runs and platforms: the same seed always yields the
//! same stream of draws, which keeps shuffles usable as test fixtures.

use rand::rand_core::impls;
use rand::{RngCore, SeedableRng};
use web_time::{SystemTime, UNIX_EPOCH};

/// Multiplier of the seed-expansion step (Knuth / MT19937 initializer)
const SEED_MULTIPLIER: u32 = 1_812_433_253;

/// Four-lane xorshift generator producing floats in `[0, 1)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XorShift {
    x: u32,
    y: u32,
    z: u32,
    w: u32,
}

impl XorShift {
    /// Create a generator from a 32-bit seed.
    ///
    /// Each lane is derived from the previous one, so a zero seed still
    /// produces a non-zero state.
    pub fn new(seed: u32) -> Self {
        let mut lanes = [0u32; 4];
        let mut s = seed;
        for (k, lane) in lanes.iter_mut().enumerate() {
            s = SEED_MULTIPLIER
                .wrapping_mul(s ^ (s >> 30))
                .wrapping_add(k as u32 + 1);
            *lane = s;
        }
        let [x, y, z, w] = lanes;
        Self { x, y, z, w }
    }

    /// Create a generator seeded from the current wall-clock time
    pub fn from_time() -> Self {
        Self::new(time_seed())
    }

    /// Advance the state and return the raw 32-bit word
    pub fn next_word(&mut self) -> u32 {
        let t = self.x ^ (self.x << 11);
        self.x = self.y;
        self.y = self.z;
        self.z = self.w;
        self.w = (self.w ^ (self.w >> 19)) ^ (t ^ (t >> 8));
        self.w
    }

    /// Next value in `[0, 1)`.
    ///
    /// The all-ones word would map to exactly 1.0, so it is skipped.
    pub fn next_f64(&mut self) -> f64 {
        loop {
            let word = self.next_word();
            if word != u32::MAX {
                return word as f64 / u32::MAX as f64;
            }
        }
    }

    /// Uniform index in `[0, bound)`; returns 0 when `bound` is 0
    pub fn below(&mut self, bound: usize) -> usize {
        (self.next_f64() * bound as f64) as usize
    }
}

/// Seed derived from wall-clock milliseconds, truncated to 32 bits
pub fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(0)
}

impl RngCore for XorShift {
    fn next_u32(&mut self) -> u32 {
        self.next_word()
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst)
    }
}

impl SeedableRng for XorShift {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state as u32)
    }
}
