//! Deterministic random number generation for a generation run.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Inclusive ranges**: Every stat roll is an inclusive-uniform integer
//! - **Re-seedable**: Each collection in a batch starts from the run seed
//!
//! ## Usage
//!
//! ```
//! use card_forge::core::ForgeRng;
//!
//! let mut a = ForgeRng::new(42);
//! let mut b = ForgeRng::new(42);
//!
//! // Same seed, same rolls
//! assert_eq!(a.roll(1, 10), b.roll(1, 10));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded RNG shared by every random draw of a run.
///
/// Uses ChaCha8 so that a seed reproduces the same collection on any
/// platform.
#[derive(Clone, Debug)]
pub struct ForgeRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl ForgeRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG with a seed drawn from OS entropy.
    ///
    /// The chosen seed is available through [`ForgeRng::seed`].
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform integer in `low..=high`.
    pub fn roll(&mut self, low: i32, high: i32) -> i32 {
        self.inner.gen_range(low..=high)
    }

    /// Generate a random boolean with given probability of true.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}
