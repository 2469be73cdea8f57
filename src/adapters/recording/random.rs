//! Recording adapter for the `RandomSource` port.

use std::sync::{Arc, Mutex};

use serde_json::json;

use super::record_interaction;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::RandomSource;

/// Records every draw, with its bound, while delegating to an inner source.
pub struct RecordingRandom {
    inner: Box<dyn RandomSource>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingRandom {
    /// Creates a new recording random source wrapping the given implementation.
    pub fn new(inner: Box<dyn RandomSource>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl RandomSource for RecordingRandom {
    fn below(&self, upper: u32) -> u32 {
        let result = self.inner.below(upper);
        record_interaction(&self.recorder, "random", "below", &json!({ "upper": upper }), &result);
        result
    }
}
