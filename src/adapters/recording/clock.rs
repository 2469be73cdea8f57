//! Recording adapter for the `Clock` port.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};

use super::record_interaction;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::Clock;

/// Records clock reads while delegating to an inner clock.
pub struct RecordingClock {
    inner: Box<dyn Clock>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingClock {
    /// Creates a new recording clock wrapping the given implementation.
    pub fn new(inner: Box<dyn Clock>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl Clock for RecordingClock {
    fn now(&self) -> DateTime<Utc> {
        let result = self.inner.now();
        record_interaction(&self.recorder, "clock", "now", &(), &result);
        result
    }
}
