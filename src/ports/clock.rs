//! Clock port for obtaining the current time.

use chrono::{DateTime, NaiveDate, Utc};

/// Provides the current time.
///
/// Random people are aged relative to "today", so time is read through this
/// port and can be pinned in tests or replayed from a cassette.
pub trait Clock: Send + Sync {
    /// Returns the current UTC time.
    fn now(&self) -> DateTime<Utc>;

    /// Returns the current UTC calendar date.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}
