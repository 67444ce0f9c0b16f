//! Engine-level RNG wrapper.
//!
//! All randomness in the core (initial placement, rating, vehicle choice,
//! per-tick jitter) is drawn from a single `FleetRng` owned by the engine.
//! The engine is single-threaded, so one stream is enough.  Seeding it makes
//! a whole session reproducible, which the tests rely on.

use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};

/// Simulation RNG for the driver engine.
pub struct FleetRng(SmallRng);

impl FleetRng {
    /// Deterministic stream from `seed`.
    pub fn new(seed: u64) -> Self {
        FleetRng(SmallRng::seed_from_u64(seed))
    }

    /// Non-deterministic stream seeded from the OS.
    pub fn from_entropy() -> Self {
        FleetRng(SmallRng::from_entropy())
    }

    /// `Some(seed)` → [`new`](Self::new), `None` → [`from_entropy`](Self::from_entropy).
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::new(s),
            None    => Self::from_entropy(),
        }
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}

// Lets `FleetRng` be passed straight to the generic geo helpers.
impl RngCore for FleetRng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest)
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.0.try_fill_bytes(dest)
    }
}

impl std::fmt::Debug for FleetRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FleetRng(..)")
    }
}
