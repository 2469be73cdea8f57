//! Runtime configuration read from the environment.
//!
//! The binary loads a `.env` file first, so every setting can live there
//! instead of the shell.

use std::path::PathBuf;

use crate::context::ServiceContext;
use crate::licence::batch::clamp_count;

/// Records a cassette of the command's random draws to this file.
pub const RECORD_VAR: &str = "DLNUM_RECORD";
/// Replays a previously recorded cassette from this file.
pub const REPLAY_VAR: &str = "DLNUM_REPLAY";
/// Batch size used when `batch` is run without `--count`.
pub const BATCH_COUNT_VAR: &str = "DLNUM_BATCH_COUNT";

const DEFAULT_BATCH_COUNT: usize = 50;

/// Settings resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Cassette to record into.
    pub record: Option<PathBuf>,
    /// Cassette to replay from.
    pub replay: Option<PathBuf>,
    /// Default batch size, already clamped.
    pub batch_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self { record: None, replay: None, batch_count: DEFAULT_BATCH_COUNT }
    }
}

/// Invalid configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A numeric setting did not parse.
    #[error("{var} must be an integer, got {value:?}")]
    InvalidInteger {
        /// Variable name.
        var: &'static str,
        /// Offending value.
        value: String,
    },
    /// Recording and replaying were both requested.
    #[error("DLNUM_RECORD and DLNUM_REPLAY cannot both be set")]
    RecordAndReplay,
}

impl Config {
    /// Reads configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a value is malformed or the settings conflict.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Reads configuration through `lookup`. Empty values count as unset.
    ///
    /// # Errors
    ///
    /// Returns an error if a value is malformed or the settings conflict.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());

        let record = get(RECORD_VAR).map(PathBuf::from);
        let replay = get(REPLAY_VAR).map(PathBuf::from);
        if record.is_some() && replay.is_some() {
            return Err(ConfigError::RecordAndReplay);
        }

        let batch_count = match get(BATCH_COUNT_VAR) {
            Some(value) => value.trim().parse::<i64>().map(clamp_count).map_err(|_| {
                ConfigError::InvalidInteger { var: BATCH_COUNT_VAR, value: value.clone() }
            })?,
            None => DEFAULT_BATCH_COUNT,
        };

        Ok(Self { record, replay, batch_count })
    }

    /// Builds the service context these settings call for.
    ///
    /// # Errors
    ///
    /// Returns an error if the replay cassette cannot be loaded.
    pub fn context(&self) -> Result<ServiceContext, String> {
        match (&self.record, &self.replay) {
            (Some(path), _) => Ok(ServiceContext::recording(path)),
            (None, Some(path)) => ServiceContext::replaying(path),
            (None, None) => Ok(ServiceContext::live()),
        }
    }
}
