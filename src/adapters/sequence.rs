//! Scripted adapters that return predetermined values.
//!
//! Used by tests that need exact control over generated identifiers without
//! going through a cassette file.

use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{DateTime, Utc};

use crate::ports::{Clock, RandomSource};

/// Cycles through a fixed list of raw draws.
///
/// Each draw is reduced modulo the requested bound, so any value list stays
/// in range. An empty list always yields zero.
pub struct SequenceRandom {
    values: Vec<u32>,
    cursor: AtomicUsize,
}

impl SequenceRandom {
    /// Creates a source that replays `values` in order, wrapping at the end.
    #[must_use]
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, cursor: AtomicUsize::new(0) }
    }
}

impl RandomSource for SequenceRandom {
    fn below(&self, upper: u32) -> u32 {
        let position = self.cursor.fetch_add(1, Ordering::Relaxed);
        if self.values.is_empty() {
            return 0;
        }
        self.values[position % self.values.len()] % upper.max(1)
    }
}

/// Clock frozen at a single instant.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
