use crate::config::GeneratorConfig;
use crate::generator::GeneratorState;
use crate::seed::Seed;

/// Returns a permutation of `xs` determined by `seed`.
///
/// # Examples
///
/// ```
/// use plainlang_random::{shuffle, Seed};
///
/// let seed = Seed::try_from(0.5).unwrap();
/// let shuffled = shuffle(vec![1, 2, 3, 4, 5], seed);
///
/// assert_eq!(shuffled, shuffle(vec![1, 2, 3, 4, 5], seed));
/// let mut sorted = shuffled.clone();
/// sorted.sort();
/// assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
/// ```
pub fn shuffle<T>(xs: Vec<T>, seed: Seed) -> Vec<T> {
    shuffle_with(xs, seed, &GeneratorConfig::default())
}

/// Like [`shuffle`], with an explicit generator configuration.
///
/// An empty input is returned as is; no state is derived for it.
pub fn shuffle_with<T>(xs: Vec<T>, seed: Seed, config: &GeneratorConfig) -> Vec<T> {
    if xs.is_empty() {
        return xs;
    }
    let mut state = GeneratorState::new(seed, config);
    shuffle_from(&mut state, xs)
}

/// Shuffles `xs` with an existing state, leaving the state advanced by
/// `xs.len() - 1` draws (none for an empty input).
pub fn shuffle_from<T>(state: &mut GeneratorState, mut xs: Vec<T>) -> Vec<T> {
    shuffle_in_place(state, &mut xs);
    xs
}

/// Fisher-Yates shuffle of `xs` in place.
///
/// Walks from the last index down to 1, swapping each position with one
/// drawn uniformly from the positions not yet fixed. Every draw is a single
/// state advance.
pub fn shuffle_in_place<T>(state: &mut GeneratorState, xs: &mut [T]) {
    tracing::trace!(
        len = xs.len(),
        algorithm = %state.algorithm(),
        "shuffling"
    );
    for i in (1..xs.len()).rev() {
        let j = state.next_index(i + 1);
        xs.swap(i, j);
    }
}
