//! Live adapter for the `RandomSource` port.

use rand::Rng;

use crate::ports::RandomSource;

/// Draws from the thread-local generator, so parallel callers never contend.
pub struct LiveRandom;

impl LiveRandom {
    /// Creates a new live random source.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for LiveRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for LiveRandom {
    fn below(&self, upper: u32) -> u32 {
        rand::thread_rng().gen_range(0..upper.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_below_upper_bound() {
        let random = LiveRandom::new();
        for _ in 0..1000 {
            assert!(random.below(36) < 36);
        }
    }

    #[test]
    fn upper_of_one_always_yields_zero() {
        let random = LiveRandom::new();
        assert_eq!(random.below(1), 0);
    }
}
