//! Replaying adapter for the `RandomSource` port.

use std::sync::Mutex;

use crate::cassette::replayer::CassetteReplayer;
use crate::ports::RandomSource;

/// Replays recorded draws from a cassette.
pub struct ReplayingRandom {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingRandom {
    /// Creates a new replaying random source from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl RandomSource for ReplayingRandom {
    fn below(&self, upper: u32) -> u32 {
        let (recorded_upper, value) = {
            let mut replayer = self.replayer.lock().expect("replayer lock poisoned");
            let interaction = replayer.next_interaction("random", "below");
            (interaction.input["upper"].as_u64(), interaction.output.as_u64())
        };
        let value = value.expect("random::below: expected integer output");
        assert_eq!(
            recorded_upper,
            Some(u64::from(upper)),
            "random::below: cassette recorded a different bound; generation logic has diverged"
        );
        assert!(
            value < u64::from(upper),
            "random::below: cassette recorded {value}, outside [0, {upper})"
        );
        u32::try_from(value).expect("random::below: recorded value exceeds u32")
    }
}
