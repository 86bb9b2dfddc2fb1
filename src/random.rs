//! Seedable random source.
//!
//! Every run owns exactly one generator, created here and passed as
//! `&mut R` through initialization and every engine step. ChaCha8 keeps the
//! stream identical across platforms and `rand` releases, so a fixed seed
//! reproduces a run bit for bit.

use rand::seq::SliceRandom;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Generator type used by the optimizer facade.
pub type SeqRng = ChaCha8Rng;

/// Creates a generator from a 64-bit seed.
pub fn create_rng(seed: u64) -> SeqRng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Uniform in-place Fisher-Yates shuffle.
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}

/// Draws two distinct positions uniformly from `0..n`.
///
/// # Panics
/// Panics if `n < 2`.
pub fn distinct_pair<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    assert!(n >= 2, "need at least two positions");
    let i = rng.random_range(0..n);
    let mut j = rng.random_range(0..n - 1);
    if j >= i {
        j += 1;
    }
    (i, j)
}
