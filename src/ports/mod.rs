//! Port traits defining external boundaries.
//!
//! Identifier generation has two sources of non-determinism: randomness and
//! the current date. Each sits behind a trait so generation stays testable.
//! Implementations live in `src/adapters/`.

pub mod clock;
pub mod random;

pub use clock::Clock;
pub use random::RandomSource;
