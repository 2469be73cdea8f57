//! Live adapters backed by the system clock and thread-local RNG.

pub mod random;

use chrono::{DateTime, Utc};

use crate::ports::clock::Clock;

pub use random::LiveRandom;

/// Wall-clock time in UTC. Random people are aged against its date.
pub struct LiveClock;

impl Clock for LiveClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_tracks_the_system_date() {
        let before = Utc::now().date_naive();
        let today = LiveClock.today();
        assert!(today >= before);
        assert!(today <= Utc::now().date_naive());
    }
}
