//! Deterministic random number generation for AI tie-breaking.
//!
//! The strategist breaks ties between equally good moves uniformly at
//! random. The randomness source is injected rather than ambient so
//! tests can pin a seed and replay identical games.
//!
//! ```
//! use tactix::core::EngineRng;
//!
//! let mut rng1 = EngineRng::new(42);
//! let mut rng2 = EngineRng::new(42);
//! let items = [10, 20, 30];
//!
//! // Same seed produces identical picks
//! assert_eq!(rng1.choose(&items), rng2.choose(&items));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded RNG handle for move selection.
///
/// Uses ChaCha8 for speed while keeping a deterministic, seedable
/// stream. Same seed, same sequence.
#[derive(Clone, Debug)]
pub struct EngineRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl EngineRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    ///
    /// For interactive play where reproducibility is not needed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Choose a random element from a slice, uniformly.
    ///
    /// Returns `None` for an empty slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}
