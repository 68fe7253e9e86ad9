use rand::{Error, Rng, RngCore, SeedableRng};
use rand_xoshiro::{SplitMix64, Xoshiro256PlusPlus, Xoshiro256StarStar};

use crate::config::{Algorithm, GeneratorConfig};
use crate::seed::Seed;

#[derive(Debug, Clone)]
enum Engine {
    StarStar(Xoshiro256StarStar),
    PlusPlus(Xoshiro256PlusPlus),
    SplitMix(SplitMix64),
}

impl Engine {
    fn new(algorithm: Algorithm, state: u64) -> Self {
        match algorithm {
            Algorithm::Xoshiro256StarStar => {
                Engine::StarStar(Xoshiro256StarStar::seed_from_u64(state))
            }
            Algorithm::Xoshiro256PlusPlus => {
                Engine::PlusPlus(Xoshiro256PlusPlus::seed_from_u64(state))
            }
            Algorithm::SplitMix64 => Engine::SplitMix(SplitMix64::seed_from_u64(state)),
        }
    }

    fn rng(&mut self) -> &mut dyn RngCore {
        match self {
            Engine::StarStar(rng) => rng,
            Engine::PlusPlus(rng) => rng,
            Engine::SplitMix(rng) => rng,
        }
    }
}

/// A point in a deterministic pseudorandom sequence.
///
/// Each state is derived from its own seed and owned by the stream or
/// shuffle that created it; nothing is shared between states.
///
/// # Examples
///
/// ```
/// use plainlang_random::{GeneratorState, Seed};
///
/// let seed = Seed::try_from(0.5).unwrap();
/// let mut a = GeneratorState::from_seed(seed);
/// let mut b = GeneratorState::from_seed(seed);
///
/// assert_eq!(a.next_unit(), b.next_unit());
/// assert_eq!(a.advances(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct GeneratorState {
    engine: Engine,
    algorithm: Algorithm,
    advances: u64,
}

impl GeneratorState {
    /// Derives a fresh state from `seed` with the given algorithm.
    pub fn new(seed: Seed, config: &GeneratorConfig) -> Self {
        let state = seed.state();
        tracing::trace!(
            seed = seed.value(),
            state,
            algorithm = %config.algorithm,
            "derived generator state"
        );
        Self {
            engine: Engine::new(config.algorithm, state),
            algorithm: config.algorithm,
            advances: 0,
        }
    }

    /// Derives a fresh state with the default algorithm.
    pub fn from_seed(seed: Seed) -> Self {
        Self::new(seed, &GeneratorConfig::default())
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Number of times this state has been advanced.
    pub fn advances(&self) -> u64 {
        self.advances
    }

    /// Advances once and returns a value in `[0, 1)`.
    ///
    /// Uses the top 53 bits of one 64-bit output, so values are multiples of
    /// 2^-53 and every such multiple is equally likely.
    pub fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }

    /// Advances once and returns an index in `[0, bound)`.
    ///
    /// The 64-bit output is mapped with a widening multiply, which keeps the
    /// draw to exactly one advance. The bias is below `bound / 2^64`.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is zero.
    pub fn next_index(&mut self, bound: usize) -> usize {
        assert!(bound > 0, "bound must be non-zero");
        let wide = u128::from(self.next_u64()) * bound as u128;
        (wide >> 64) as usize
    }
}

impl RngCore for GeneratorState {
    fn next_u32(&mut self) -> u32 {
        self.advances += 1;
        self.engine.rng().next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.advances += 1;
        self.engine.rng().next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.advances += dest.len().div_ceil(8) as u64;
        self.engine.rng().fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed(value: f64) -> Seed {
        Seed::try_from(value).unwrap()
    }

    #[test]
    fn equal_seeds_give_equal_states() {
        let mut a = GeneratorState::from_seed(seed(0.125));
        let mut b = GeneratorState::from_seed(seed(0.125));
        for _ in 0..100 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = GeneratorState::from_seed(seed(0.125));
        let mut b = GeneratorState::from_seed(seed(0.126));
        assert_ne!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn algorithms_give_different_sequences() {
        let state = |algorithm| GeneratorState::new(seed(0.3), &GeneratorConfig::new(algorithm));
        let mut star = state(Algorithm::Xoshiro256StarStar);
        let mut plus = state(Algorithm::Xoshiro256PlusPlus);
        let mut split = state(Algorithm::SplitMix64);
        let (a, b, c) = (star.next_u64(), plus.next_u64(), split.next_u64());
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_ne!(b, c);
        assert_eq!(split.algorithm(), Algorithm::SplitMix64);
    }

    #[test]
    fn zero_seed_is_usable() {
        let mut state = GeneratorState::from_seed(seed(0.0));
        let values: Vec<u64> = (0..4).map(|_| state.next_u64()).collect();
        assert!(values.iter().any(|&v| v != 0));
    }

    #[test]
    fn every_draw_is_one_advance() {
        let mut state = GeneratorState::from_seed(seed(0.9));
        state.next_unit();
        state.next_index(10);
        state.next_u32();
        assert_eq!(state.advances(), 3);
        let mut bytes = [0u8; 9];
        state.fill_bytes(&mut bytes);
        assert_eq!(state.advances(), 5);
    }

    #[test]
    fn next_index_stays_in_bounds() {
        let mut state = GeneratorState::from_seed(seed(0.42));
        for bound in 1..200 {
            assert!(state.next_index(bound) < bound);
        }
        assert_eq!(state.next_index(1), 0);
    }

    #[test]
    #[should_panic(expected = "bound must be non-zero")]
    fn next_index_rejects_zero_bound() {
        GeneratorState::from_seed(seed(0.0)).next_index(0);
    }

    #[test]
    fn clones_continue_identically() {
        let mut state = GeneratorState::from_seed(seed(0.7));
        state.next_u64();
        let mut fork = state.clone();
        assert_eq!(state.next_unit(), fork.next_unit());
        assert_eq!(state.advances(), fork.advances());
    }
}
