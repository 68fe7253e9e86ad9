//! Seeded randomness.
//!
//! Seeds here are plain numbers and every number is accepted: non-finite
//! seeds select fixed states instead of failing. Use [`plainlang_random::Seed`]
//! directly to reject them.

use plainlang_random::{RandomStream, Seed};

/// An unbounded stream of numbers in `[0, 1)` determined by `seed`.
pub fn seed_randoms(seed: f64) -> RandomStream {
    plainlang_random::seed_randoms(Seed::from_f64_lossy(seed))
}

/// A permutation of `xs` determined by `seed`.
pub fn shuffle<T>((xs, seed): (Vec<T>, f64)) -> Vec<T> {
    plainlang_random::shuffle(xs, Seed::from_f64_lossy(seed))
}
