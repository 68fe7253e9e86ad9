//! plainlang-random - Reproducible randomness for plainlang
//!
//! Every random operation takes an explicit seed; there is no global
//! generator. A seed is a real number, conventionally in `[0, 1)`, which is
//! scaled onto a 64-bit state (see [`seed`]) and expanded into the state of
//! the configured generator (xoshiro256** by default).
//!
//! - [`seed_randoms`] produces an unbounded lazy stream of values in `[0, 1)`.
//! - [`shuffle`] produces a Fisher-Yates permutation, using one draw per swap.
//!
//! For a fixed seed and configuration both are bit-for-bit reproducible.

pub mod config;
pub mod error;
pub mod generator;
pub mod seed;
pub mod shuffle;
pub mod stream;

// Re-exports for convenience
pub use config::{Algorithm, GeneratorConfig};
pub use error::{ConfigError, SeedError};
pub use generator::GeneratorState;
pub use seed::{scale_to_state, Seed, SEED_SCALE};
pub use shuffle::{shuffle, shuffle_from, shuffle_in_place, shuffle_with};
pub use stream::{seed_randoms, seed_randoms_with, LazyStream, RandomStream};
