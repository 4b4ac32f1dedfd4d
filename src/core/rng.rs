//! Random number generation for shuffling.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Forkable**: Derive independent streams from one root seed
//! - **Fresh per call**: `ShuffleSource` hands out a newly seeded stream
//!   for every shuffle, either from OS entropy or forked from a root seed
//!
//! ```
//! use star_realms_engine::core::GameRng;
//!
//! let mut root = GameRng::new(42);
//! let mut a = root.fork();
//!
//! let mut again = GameRng::new(42);
//! let mut b = again.fork();
//!
//! let mut xs = vec![1, 2, 3, 4, 5, 6];
//! let mut ys = xs.clone();
//! a.shuffle(&mut xs);
//! b.shuffle(&mut ys);
//! assert_eq!(xs, ys);
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// ChaCha8-backed RNG with deterministic forking.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from operating system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self::new(fork_seed)
    }

    /// Get the seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}

/// Where shuffles get their randomness from.
#[derive(Clone, Debug)]
pub enum ShuffleSource {
    /// Every shuffle is seeded from OS entropy.
    Entropy,
    /// Every shuffle forks a new stream from a fixed root.
    Seeded(GameRng),
}

impl ShuffleSource {
    /// Build a source from an optional fixed seed.
    #[must_use]
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::Seeded(GameRng::new(seed)),
            None => Self::Entropy,
        }
    }

    /// A freshly seeded stream for one shuffle.
    #[must_use]
    pub fn next_rng(&mut self) -> GameRng {
        match self {
            Self::Entropy => GameRng::from_entropy(),
            Self::Seeded(root) => root.fork(),
        }
    }
}

impl Default for ShuffleSource {
    fn default() -> Self {
        Self::Entropy
    }
}
