//! Deterministic simulation RNG.
//!
//! A thin wrapper over `SmallRng` seeded from a single `u64` so that runs are
//! reproducible: the same seed always produces the same traffic stream.  All
//! randomness in the workspace flows through this type — the engine itself is
//! fully deterministic and never draws.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG for exogenous events (request generation).
///
/// Used only in single-threaded contexts; the tick loop never touches it.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
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

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
