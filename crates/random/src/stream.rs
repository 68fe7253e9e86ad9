use std::cell::RefCell;
use std::iter::FusedIterator;

use crate::config::GeneratorConfig;
use crate::generator::GeneratorState;
use crate::seed::Seed;

/// An unbounded stream of values in `[0, 1)`.
///
/// Values are produced on demand; each one advances the underlying state
/// exactly once. The stream never ends.
///
/// # Examples
///
/// ```
/// use plainlang_random::{seed_randoms, Seed};
///
/// let seed = Seed::try_from(0.5).unwrap();
/// let first: Vec<f64> = seed_randoms(seed).take(3).collect();
/// let again: Vec<f64> = seed_randoms(seed).take(3).collect();
///
/// assert_eq!(first, again);
/// assert!(first.iter().all(|x| (0.0..1.0).contains(x)));
/// ```
#[derive(Debug, Clone)]
pub struct RandomStream {
    state: GeneratorState,
}

impl RandomStream {
    pub fn new(state: GeneratorState) -> Self {
        Self { state }
    }

    /// Number of values produced so far.
    pub fn produced(&self) -> u64 {
        self.state.advances()
    }

    /// Wraps the stream so that produced values can be re-read by index.
    pub fn memoized(self) -> LazyStream<Self> {
        LazyStream::new(self)
    }
}

impl Iterator for RandomStream {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.state.next_unit())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl FusedIterator for RandomStream {}

/// Starts a random stream from `seed` with the default algorithm.
pub fn seed_randoms(seed: Seed) -> RandomStream {
    seed_randoms_with(seed, &GeneratorConfig::default())
}

/// Starts a random stream from `seed` with the given configuration.
pub fn seed_randoms_with(seed: Seed, config: &GeneratorConfig) -> RandomStream {
    RandomStream::new(GeneratorState::new(seed, config))
}

/// A lazily forced, memoized view of an iterator.
///
/// Elements are pulled from the source in order, only when an index at or
/// beyond them is requested, and cached. Re-reading a forced element returns
/// the cached value without touching the source.
///
/// # Examples
///
/// ```
/// use plainlang_random::LazyStream;
///
/// let squares = LazyStream::new((0..).map(|n| n * n));
///
/// assert_eq!(squares.forced_len(), 0);
/// assert_eq!(squares.get(3), Some(9));
/// assert_eq!(squares.forced_len(), 4);
/// assert_eq!(squares.prefix(2), vec![0, 1]);
/// assert_eq!(squares.forced_len(), 4);
/// ```
pub struct LazyStream<I: Iterator> {
    source: RefCell<I>,
    forced: RefCell<Vec<I::Item>>,
}

impl<I> LazyStream<I>
where
    I: Iterator,
    I::Item: Clone,
{
    /// Create a new lazy stream; nothing is pulled from `source` yet.
    pub fn new(source: I) -> Self {
        Self {
            source: RefCell::new(source),
            forced: RefCell::new(Vec::new()),
        }
    }

    /// The element at `index`, forcing every earlier element first.
    ///
    /// Returns `None` only if the source ends before `index`.
    pub fn get(&self, index: usize) -> Option<I::Item> {
        self.force_until(index.saturating_add(1));
        self.forced.borrow().get(index).cloned()
    }

    /// The first `len` elements, or fewer if the source ends first.
    pub fn prefix(&self, len: usize) -> Vec<I::Item> {
        self.force_until(len);
        let forced = self.forced.borrow();
        forced[..len.min(forced.len())].to_vec()
    }

    /// Number of elements already pulled from the source.
    pub fn forced_len(&self) -> usize {
        self.forced.borrow().len()
    }

    fn force_until(&self, len: usize) {
        let mut forced = self.forced.borrow_mut();
        if forced.len() >= len {
            return;
        }
        let mut source = self.source.borrow_mut();
        while forced.len() < len {
            match source.next() {
                Some(item) => forced.push(item),
                None => break,
            }
        }
    }
}
