//! Seeded randomness for adversaries.
//!
//! Everything random in a round flows through `GameRng`, so a seed fully
//! determines which edges a random adversary commits to.
//!
//! ## Usage
//!
//! ```
//! use rust_ctp::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let picked = rng.sample_indices(10, 3);
//!
//! assert_eq!(picked.len(), 3);
//! assert!(picked.iter().all(|&i| i < 10));
//! assert_eq!(GameRng::new(42).sample_indices(10, 3), picked);
//! ```

use rand::seq::index;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// ChaCha8 stream seeded from a `u64`.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Pick `amount` distinct indices out of `0..length`, in ascending order.
    ///
    /// `amount` is clamped to `length`.
    pub fn sample_indices(&mut self, length: usize, amount: usize) -> Vec<usize> {
        let amount = amount.min(length);
        let mut picked = index::sample(&mut self.inner, length, amount).into_vec();
        picked.sort_unstable();
        picked
    }
}
