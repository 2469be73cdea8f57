//! Recording adapters that capture port interactions to a cassette.

pub mod clock;
pub mod random;

use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::cassette::recorder::CassetteRecorder;

pub use clock::RecordingClock;
pub use random::RecordingRandom;

/// Append one interaction to the shared recorder.
///
/// Port inputs and outputs are plain numbers and timestamps, so serialization
/// cannot fail for any value the adapters pass in.
pub(crate) fn record_interaction<I, O>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: &I,
    output: &O,
) where
    I: Serialize,
    O: Serialize,
{
    let input_json = serde_json::to_value(input).expect("failed to serialize recording input");
    let output_json = serde_json::to_value(output).expect("failed to serialize recording output");

    let mut guard = recorder.lock().expect("recorder lock poisoned");
    guard.record(port, method, input_json, output_json);
}
