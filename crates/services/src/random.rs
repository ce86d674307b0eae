use coach_core::RandomSource;
use rand::Rng;

/// Production randomness backed by the thread-local RNG.
///
/// Holds no RNG state of its own so it can move between threads; each draw
/// borrows the current thread's generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl ThreadRandom {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for ThreadRandom {
    fn next_index(&mut self, len: usize) -> usize {
        rand::rng().random_range(0..len.max(1))
    }

    fn next_unit(&mut self) -> f64 {
        rand::rng().random::<f64>()
    }
}
