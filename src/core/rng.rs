//! Deterministic random number generation for deck shuffling.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical decks
//! - **Injectable**: The engine and deck builder take any [`Entropy`]
//!   source, so tests can pin the layout of a deck
//! - **Explicit shuffle**: [`fisher_yates`] is the only shuffle in the
//!   crate, and it draws from whatever entropy it is handed
//!
//! ## Usage
//!
//! ```
//! use memory_pairs::core::{fisher_yates, GameRng};
//!
//! let mut rng = GameRng::new(42);
//! let mut data = vec![1, 2, 3, 4, 5, 6];
//! fisher_yates(&mut data, &mut rng);
//!
//! // Same seed, same permutation
//! let mut again = vec![1, 2, 3, 4, 5, 6];
//! fisher_yates(&mut again, &mut GameRng::new(42));
//! assert_eq!(data, again);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A source of uniform random indexes.
pub trait Entropy {
    /// Return a uniformly distributed index in `0..bound`.
    ///
    /// Callers never pass a `bound` of zero.
    fn below(&mut self, bound: usize) -> usize;
}

impl<E: Entropy + ?Sized> Entropy for Box<E> {
    fn below(&mut self, bound: usize) -> usize {
        (**self).below(bound)
    }
}

/// Deterministic RNG backed by ChaCha8.
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

    /// Create an RNG seeded from the thread-local generator.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }
}

impl Entropy for GameRng {
    fn below(&mut self, bound: usize) -> usize {
        self.gen_range_usize(0..bound)
    }
}

/// Entropy that never reorders anything.
///
/// Under [`fisher_yates`] every swap is a self-swap, so decks come out in
/// dealing order: the chosen definitions, then the same definitions again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IdentityEntropy;

impl Entropy for IdentityEntropy {
    fn below(&mut self, bound: usize) -> usize {
        bound - 1
    }
}

/// Uniform in-place Fisher–Yates shuffle.
///
/// Walks from the back, swapping each slot with a uniformly chosen slot at
/// or before it. Given a uniform `entropy`, every permutation is equally
/// likely.
pub fn fisher_yates<T, E: Entropy + ?Sized>(items: &mut [T], entropy: &mut E) {
    for i in (1..items.len()).rev() {
        let j = entropy.below(i + 1);
        items.swap(i, j);
    }
}
