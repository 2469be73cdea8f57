//! Service context bundling the port trait objects.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};

use crate::adapters::live::{LiveClock, LiveRandom};
use crate::adapters::recording::{RecordingClock, RecordingRandom};
use crate::adapters::replaying::{ReplayingClock, ReplayingRandom};
use crate::adapters::sequence::{FixedClock, SequenceRandom};
use crate::cassette::format::Cassette;
use crate::cassette::recorder::CassetteRecorder;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::clock::Clock;
use crate::ports::random::RandomSource;

/// Bundles every port trait object a generation call may touch.
///
/// Constructors wire up different adapter implementations (live, scripted,
/// recording, replaying).
pub struct ServiceContext {
    /// Source of every random draw.
    pub random: Box<dyn RandomSource>,
    /// Clock used to age randomly generated people.
    pub clock: Box<dyn Clock>,
    /// Shared with the recording adapters; written out by [`Self::finish`].
    recorder: Option<Arc<Mutex<CassetteRecorder>>>,
}

impl ServiceContext {
    /// Creates a live context backed by the system clock and thread-local RNG.
    #[must_use]
    pub fn live() -> Self {
        Self { random: Box::new(LiveRandom::new()), clock: Box::new(LiveClock), recorder: None }
    }

    /// Creates a context whose draws cycle through `draws` and whose clock is
    /// frozen at `now`.
    #[must_use]
    pub fn scripted(draws: Vec<u32>, now: DateTime<Utc>) -> Self {
        Self {
            random: Box::new(SequenceRandom::new(draws)),
            clock: Box::new(FixedClock(now)),
            recorder: None,
        }
    }

    /// Creates a recording context that captures every interaction.
    ///
    /// Live adapters do the actual work. The cassette is written to `path`
    /// when [`Self::finish`] is called.
    #[must_use]
    pub fn recording(path: &Path) -> Self {
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(path, "dlnum-session")));
        Self {
            random: Box::new(RecordingRandom::new(
                Box::new(LiveRandom::new()),
                Arc::clone(&recorder),
            )),
            clock: Box::new(RecordingClock::new(Box::new(LiveClock), Arc::clone(&recorder))),
            recorder: Some(recorder),
        }
    }

    /// Creates a replaying context from a cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let cassette = Cassette::load(path)?;
        Ok(Self::replaying_cassette(&cassette))
    }

    /// Creates a replaying context from an in-memory cassette.
    ///
    /// Each port gets its own replayer so their cursors stay independent.
    #[must_use]
    pub fn replaying_cassette(cassette: &Cassette) -> Self {
        Self {
            random: Box::new(ReplayingRandom::new(CassetteReplayer::new(cassette))),
            clock: Box::new(ReplayingClock::new(CassetteReplayer::new(cassette))),
            recorder: None,
        }
    }

    /// Releases the adapters and writes the cassette when recording.
    ///
    /// Returns the cassette path, or `None` for non-recording contexts.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be written.
    pub fn finish(self) -> Result<Option<PathBuf>, String> {
        let Self { random, clock, recorder } = self;
        // Adapters hold the other references to the recorder.
        drop(random);
        drop(clock);

        let Some(recorder) = recorder else {
            return Ok(None);
        };
        let recorder = Arc::try_unwrap(recorder)
            .map_err(|_| "Recording adapters still hold the cassette recorder".to_string())?
            .into_inner()
            .map_err(|e| format!("Recorder lock poisoned: {e}"))?;
        recorder.finish().map(Some).map_err(|e| format!("Failed to write cassette: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2025-03-15T14:30:00Z").unwrap().with_timezone(&Utc)
    }

    #[test]
    fn scripted_context_is_predictable() {
        let ctx = ServiceContext::scripted(vec![4, 9], instant());
        assert_eq!(ctx.random.below(10), 4);
        assert_eq!(ctx.random.below(10), 9);
        assert_eq!(ctx.clock.now(), instant());
        assert_eq!(ctx.finish(), Ok(None));
    }

    #[test]
    fn recording_then_replaying_reproduces_draws() {
        let dir = std::env::temp_dir().join("dlnum_ctx_record_replay");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("ctx.cassette.yaml");

        let ctx = ServiceContext::recording(&path);
        let recorded: Vec<u32> = (0..5).map(|_| ctx.random.below(36)).collect();
        let recorded_now = ctx.clock.now();
        assert_eq!(ctx.finish().unwrap(), Some(path.clone()));

        let replay = ServiceContext::replaying(&path).unwrap();
        let replayed: Vec<u32> = (0..5).map(|_| replay.random.below(36)).collect();
        assert_eq!(recorded, replayed);
        assert_eq!(replay.clock.now(), recorded_now);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn replaying_missing_file_is_an_error() {
        let result = ServiceContext::replaying(Path::new("/nonexistent/dlnum.cassette.yaml"));
        assert!(result.is_err());
    }
}
