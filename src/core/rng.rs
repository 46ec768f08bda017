//! Deterministic random number generation for order and ticket generation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical orders and tickets
//! - **Context streams**: Independent sequences for different purposes
//!   (order generation vs. pod naming), so scaling a deployment never
//!   shifts which order comes next
//! - **Serializable**: O(1) state capture and restore for session snapshots
//!
//! ## Usage
//!
//! ```
//! use rainmaker::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut pods = rng.for_context("pods");
//!
//! // Same seed, same context = same sequence
//! let mut rng2 = GameRng::new(42);
//! let mut pods2 = rng2.for_context("pods");
//! assert_eq!(pods.gen_range_usize(0..100), pods2.gen_range_usize(0..100));
//! assert_eq!(rng.gen_range_usize(0..100), rng2.gen_range_usize(0..100));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Seedable RNG injected into every generator call.
///
/// Uses ChaCha8 so the word position can be captured for snapshots.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Generate a random boolean with given probability of true.
    ///
    /// Probabilities outside `[0, 1]` are clamped.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability.clamp(0.0, 1.0))
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Random lowercase base36 string, used for pod name suffixes.
    pub fn base36_suffix(&mut self, len: usize) -> String {
        (0..len)
            .map(|_| char::from(BASE36[self.inner.gen_range(0..BASE36.len())]))
            .collect()
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for session snapshots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
