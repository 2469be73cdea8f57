//! Replaying adapters that serve port interactions from a cassette.

pub mod clock;
pub mod random;

pub use clock::ReplayingClock;
pub use random::ReplayingRandom;
